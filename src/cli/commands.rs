//! Handlers for image conversion and config subcommands.

use std::io::Read;
use std::path::Path;

use super::args::{Args, ConfigAction};
use crate::config::{default_path as get_config_path, Config, DEFAULT_CONFIG_TOML};
use crate::renderer;

/// Image argument that reads the encoded image from stdin.
const STDIN_PATH: &str = "-";

/// Load the config the user asked for.
///
/// An explicit `--config` path must exist and parse. The default location
/// is optional, and a broken default file falls back to built-in settings
/// with a warning.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, String> {
    match explicit {
        Some(path) => Config::load_from_explicit(path.to_path_buf()).map_err(|e| e.to_string()),
        None => match Config::load(None) {
            Ok(c) => Ok(c),
            Err(e) => {
                log::warn!("Failed to load config file: {}", e);
                log::warn!("Using default settings.");
                Ok(Config::default())
            }
        },
    }
}

/// Convert the image named on the command line and emit the text.
pub fn run_convert(args: &Args) -> Result<(), String> {
    let Some(image) = args.image.as_deref() else {
        return Err("No image given. Usage: edgeglyph <IMAGE> [OPTIONS]".to_string());
    };

    let config = load_config(args.config.as_deref())?;
    let settings = args.apply_to(config.render_settings());
    settings
        .validate()
        .map_err(|e| format!("Invalid settings: {}", e))?;
    log::info!(
        "converting {} at {} columns (edges: {}, sensitivity: {})",
        image.display(),
        settings.target_width,
        settings.conversion.enable_edge_detection,
        settings.conversion.edge_sensitivity
    );

    let text = if image == Path::new(STDIN_PATH) {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .map_err(|e| format!("Failed to read image from stdin: {}", e))?;
        renderer::render_bytes(&bytes, &settings)
    } else {
        renderer::render_file(image, &settings)
    }
    .map_err(|e| e.to_string())?;

    match args.output.as_deref() {
        Some(path) => {
            std::fs::write(path, &text)
                .map_err(|e| format!("Failed to write '{}': {}", path.display(), e))?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, explicit: Option<&Path>) -> Result<(), String> {
    match action {
        ConfigAction::Show => {
            let config = load_config(explicit)?;
            let rendered = toml::to_string_pretty(&config)
                .map_err(|e| format!("Failed to render config: {}", e))?;
            println!("Current configuration:");
            println!();
            print!("{}", rendered);
            println!();

            let config_path = explicit
                .map(Path::to_path_buf)
                .unwrap_or_else(get_config_path);
            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
            Ok(())
        }
        ConfigAction::Init => {
            let config_path = explicit
                .map(Path::to_path_buf)
                .unwrap_or_else(get_config_path);

            if config_path.exists() {
                return Err(format!(
                    "Config file already exists: {}\nUse 'edgeglyph config show' to view current settings.",
                    config_path.display()
                ));
            }

            // Create parent directories if needed
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("Error creating config directory: {}", e))?;
            }

            std::fs::write(&config_path, DEFAULT_CONFIG_TOML)
                .map_err(|e| format!("Error writing config file: {}", e))?;

            println!("Created config file: {}", config_path.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_init_writes_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        handle_config_action(ConfigAction::Init, Some(&path)).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, DEFAULT_CONFIG_TOML);

        // A second init refuses to overwrite
        assert!(handle_config_action(ConfigAction::Init, Some(&path)).is_err());
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("missing.toml"))).is_err());
    }

    #[test]
    fn test_convert_requires_image() {
        let args = Args::parse_from(["edgeglyph"]);
        assert!(run_convert(&args).is_err());
    }

    fn white_png(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("white.png");
        image::RgbaImage::from_pixel(4, 4, image::Rgba([255, 255, 255, 255]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_convert_rejects_zero_char_aspect_flag() {
        let dir = tempfile::tempdir().unwrap();
        let image_path = white_png(dir.path());
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, DEFAULT_CONFIG_TOML).unwrap();
        let out_path = dir.path().join("out.txt");

        for aspect in ["0", "NaN", "1e9"] {
            let args = Args::parse_from([
                "edgeglyph",
                image_path.to_str().unwrap(),
                "--char-aspect",
                aspect,
                "--config",
                config_path.to_str().unwrap(),
                "--output",
                out_path.to_str().unwrap(),
            ]);
            let err = run_convert(&args).unwrap_err();
            assert!(err.contains("char_aspect"), "{}: {}", aspect, err);
            assert!(!out_path.exists());
        }
    }

    #[test]
    fn test_convert_rejects_nan_sensitivity_flag() {
        let dir = tempfile::tempdir().unwrap();
        let image_path = white_png(dir.path());
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, DEFAULT_CONFIG_TOML).unwrap();

        let args = Args::parse_from([
            "edgeglyph",
            image_path.to_str().unwrap(),
            "--sensitivity",
            "NaN",
            "--config",
            config_path.to_str().unwrap(),
        ]);
        assert!(run_convert(&args).unwrap_err().contains("edge_sensitivity"));
    }

    #[test]
    fn test_convert_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let image_path = white_png(dir.path());
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, DEFAULT_CONFIG_TOML).unwrap();
        let out_path = dir.path().join("out.txt");

        let args = Args::parse_from([
            "edgeglyph",
            image_path.to_str().unwrap(),
            "--width",
            "4",
            "--char-aspect",
            "1",
            "--config",
            config_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ]);
        run_convert(&args).unwrap();

        let text = std::fs::read_to_string(&out_path).unwrap();
        assert_eq!(text, "####\n####\n####\n####\n");
    }
}

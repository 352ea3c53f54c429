use clap::Parser;

use edgeglyph::cli::{self, Args, Command};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let result = match args.command {
        Some(Command::Config { ref action }) => {
            cli::handle_config_action(action.clone(), args.config.as_deref())
        }
        None => cli::run_convert(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

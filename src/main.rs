use clap::Parser;
use propis::cli::dispatcher::Dispatcher;
use propis::cli::main_types::Cli;
use propis::storage::config::Config;
use propis::utils::logging::{log_error, print_verbose};
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();

    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join("config.toml"));

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            log_error(&format!("loading config: {}", err));
            std::process::exit(1);
        }
    };

    if let Some(config_dir) = &cli.config_dir {
        print_verbose(cli.verbose, &format!("Using config directory: {}", config_dir));
    }

    let mut dispatcher = Dispatcher::new(config, config_path, cli.verbose);

    match dispatcher.dispatch(cli.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            log_error(&e.display_friendly());
            if let Some(hint) = e.troubleshooting_hint() {
                eprintln!("{} {}", e.severity().emoji(), hint);
            }
            std::process::exit(1);
        }
    }
}

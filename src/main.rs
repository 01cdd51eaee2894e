use clap::Parser;
use psywell::cli::{run, Cli};
use psywell::config::Config;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.logging.level))
        .init();

    run(cli, config)
}

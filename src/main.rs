use clap::Parser;
use colored::Colorize;
use duckargs::{cli::Cli, config::Config, generate_code, logging::init_logging, output::OutputWriter};

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err}", "Error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color);

    let config = Config::from_cli(cli)?;

    log::debug!("Configuration: {:?}", config);

    let code = generate_code(&config.tokens, config.language, config.options)?;

    let writer = OutputWriter::new(config.output);
    writer.write(&code)?;

    Ok(())
}

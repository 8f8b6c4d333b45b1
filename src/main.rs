use clap::Parser;
use std::process::ExitCode;

mod cli_bin;

use cli_bin::args::Cli;
use cli_bin::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .format_timestamp(None)
        .init();

    match commands::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(commands::exit_code(&err))
        }
    }
}

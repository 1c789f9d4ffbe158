use accesslens_core::cli::{self, RunArgs};
use accesslens_core::logging::{default_log_format, init_logging};
use accesslens_core::summary::render_summary;
use clap::Parser;
use std::io::{self, IsTerminal};

#[derive(Parser, Debug)]
#[command(
    name = "accesslens",
    version,
    about = "accesslens: combined access log parser and user-agent enricher"
)]
struct Cli {
    #[command(flatten)]
    run: RunArgs,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.run.log_format.unwrap_or_else(default_log_format));

    match cli::run(cli.run) {
        Ok(summary) => {
            print!("{}", render_summary(&summary, io::stdout().is_terminal()));
        }
        Err(e) => {
            eprintln!("accesslens error: {e:#}");
            std::process::exit(1);
        }
    }
}

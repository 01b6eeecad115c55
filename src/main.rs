use anyhow::Result;
use clap::Parser;

use tieq_cli::cli::Args;
use tieq_cli::cli::commands::translate;
use tieq_cli::input::InputReader;
use tieq_cli::output::{self, OutputConfig};
use tieq_cli::translation::print_languages;
use tieq_cli::ui::Style;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        verbose: args.verbose,
        no_color: args.no_color || std::env::var("NO_COLOR").is_ok(),
    });

    if args.languages {
        print_languages();
        return Ok(());
    }

    let raw = InputReader::read(&args.text)?;

    let options = translate::TranslateOptions {
        raw,
        endpoint: args.endpoint,
    };

    if let Err(err) = translate::run_translate(options).await {
        tieq_cli::warn!("{}", Style::error(&err));
        std::process::exit(err.exit_code());
    }

    Ok(())
}

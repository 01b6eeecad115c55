use clap::Parser;

use crate::translation::DEFAULT_ENDPOINT;

#[derive(Parser, Debug)]
#[command(name = "tieq")]
#[command(about = "Translate text with an inline [from>to] language directive")]
#[command(version)]
pub struct Args {
    /// Text to translate, optionally containing a [from>to] directive
    /// (reads from stdin if not provided)
    #[arg(num_args = 1.., trailing_var_arg = true)]
    pub text: Vec<String>,

    /// Translation service base URL
    #[arg(short = 'e', long, env = "TIEQ_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// List supported language codes
    #[arg(short = 'l', long)]
    pub languages: bool,

    /// Suppress status output on stderr
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print diagnostic messages on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tv2")]
#[command(about = "Google Translate v2 command-line client")]
#[command(version)]
pub struct Args {
    /// Text to translate; several values are translated as a list
    /// (reads --file or stdin if not provided)
    pub text: Vec<String>,

    /// Target language code (e.g., bn, ja, pt-br)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Source language code (detected by the service if omitted)
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Read text from a file instead of stdin
    #[arg(short = 'i', long)]
    pub file: Option<String>,

    /// Treat every non-blank input line as a separate text
    #[arg(short = 'l', long)]
    pub lines: bool,

    /// API key (overrides environment and config file)
    #[arg(short = 'k', long, global = true)]
    pub key: Option<String>,

    /// API endpoint URL
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,

    /// Suppress status output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Log requests to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List languages supported by the service
    Languages {
        /// Language to localize the language names into
        #[arg(short = 't', long = "to")]
        to: Option<String>,
    },
    /// Detect the language of text
    Detect {
        /// Text to inspect (reads --file or stdin if not provided)
        text: Vec<String>,

        /// Read text from a file instead of stdin
        #[arg(short = 'i', long)]
        file: Option<String>,

        /// Treat every non-blank input line as a separate text
        #[arg(short = 'l', long)]
        lines: bool,
    },
    /// Configure default settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

use anyhow::Result;
use clap::Parser;

use translate_v2::cli::commands::{configure, detect, languages, translate};
use translate_v2::cli::{Args, Command};
use translate_v2::config::ResolveOptions;
use translate_v2::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || OutputConfig::default().no_color,
    });
    output::init_tracing(args.verbose);

    let overrides = ResolveOptions {
        to: args.to,
        from: args.from,
        key: args.key,
        endpoint: args.endpoint,
    };

    match args.command {
        Some(Command::Languages { to }) => {
            languages::run_languages(languages::LanguagesOptions { to, overrides }).await?;
        }
        Some(Command::Detect { text, file, lines }) => {
            detect::run_detect(detect::DetectOptions {
                text,
                file,
                lines,
                overrides,
            })
            .await?;
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        None => {
            translate::run_translate(translate::TranslateOptions {
                text: args.text,
                file: args.file,
                lines: args.lines,
                overrides,
            })
            .await?;
        }
    }

    Ok(())
}

//! Command dispatch logic for perfscore

use super::{GlobalArgs, InitArgs, ScoreArgs, init_config, list_audits, process_score, validate_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};
use ohno::app_err;
use std::io::Write;

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "perfscore", author, version, long_about = None)]
#[command(about = "Turn page-performance measurements into 0..1 quality scores")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: PerfscoreSubcommand,
}

#[derive(Subcommand, Debug)]
enum PerfscoreSubcommand {
    /// Score a measured cumulative layout shift value
    Score(Box<ScoreArgs>),
    /// List the registered audits
    Audits,
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate,
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let code = e.exit_code();
            if e.use_stderr() {
                let _ = write!(host.error(), "{}", e.render());
            } else {
                let _ = write!(host.output(), "{}", e.render());
            }

            host.exit(code);
            return if code == 0 { Ok(()) } else { Err(app_err!("invalid command line")) };
        }
    };

    match &cli.command {
        PerfscoreSubcommand::Score(score_args) => process_score(host, &cli.global, score_args).await,
        PerfscoreSubcommand::Audits => list_audits(host, &cli.global),
        PerfscoreSubcommand::Init(init_args) => init_config(host, init_args),
        PerfscoreSubcommand::Validate => validate_config(host, &cli.global),
    }
}

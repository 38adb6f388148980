// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

use versesplit::app_config::{Config, LogLevel};
use versesplit::app_controller::Controller;
use versesplit::workflow::TranslationWorkflow;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split a commentary PDF into segment files (default command)
    Split(SplitArgs),

    /// Show the next segment waiting for translation
    Next,

    /// Store the translation of a segment and show the next one
    Save {
        /// Segment number being translated
        #[arg(value_name = "NUMBER")]
        number: usize,

        /// Translated JSON document
        #[arg(value_name = "JSON")]
        json: String,
    },

    /// Generate shell completions for versesplit
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct SplitArgs {
    /// Commentary PDF to split
    #[arg(value_name = "PDF")]
    input_path: PathBuf,

    /// Directory receiving the segment files
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Maximum characters per segment file
    #[arg(value_name = "MAX_CHARS")]
    max_chars: Option<NonZeroUsize>,
}

/// versesplit - verse-by-verse commentary splitter
///
/// Cuts patristic commentary PDFs into segment files that never split a
/// verse block, then walks through them for translation.
#[derive(Parser, Debug)]
#[command(name = "versesplit")]
#[command(version)]
#[command(about = "Split verse-by-verse commentary PDFs into translation-sized files")]
#[command(long_about = "versesplit extracts the text of a commentary PDF, cuts it at every verse reference, drops general introductions and packs the blocks into size-bounded text files.

EXAMPLES:
    versesplit '2 Juan.pdf'                      # Split into the current directory
    versesplit '2 Juan.pdf' output               # Split into ./output
    versesplit '2 Juan.pdf' output 20000         # ... with at most ~20000 chars per file
    versesplit next                              # Show the next segment to translate
    versesplit save 3 '{\"livro\": \"Marcos\"}'  # Store the translation of segment 3
    versesplit completions bash > versesplit.bash

CONFIGURATION:
    Settings are read from conf.json by default (see --config). Missing files
    or fields fall back to built-in defaults.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Commentary PDF to split
    #[arg(value_name = "PDF")]
    input_path: Option<PathBuf>,

    /// Directory receiving the segment files
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Maximum characters per segment file
    #[arg(value_name = "MAX_CHARS")]
    max_chars: Option<NonZeroUsize>,

    /// Configuration file path
    #[arg(short, long = "config", global = true, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and tag for level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR "),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[0m", ""),
            Level::Debug => ("\x1B[1;36m", "DEBUG "),
            Level::Trace => ("\x1B[1;35m", "TRACE "),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let now = chrono::Local::now().format("%H:%M:%S%.3f");
        let (color, tag) = Self::style_for_level(record.level());
        let line = format!("{}{} {}{}\x1B[0m", color, now, tag, record.args());

        // Progress goes to stdout, problems to stderr
        let _ = match record.level() {
            Level::Error | Level::Warn => writeln!(std::io::stderr(), "{}", line),
            _ => writeln!(std::io::stdout(), "{}", line),
        };
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();
    }
}

fn main() -> ExitCode {
    // Most permissive level here, narrowed once the configuration is known
    if let Err(e) = CustomLogger::init(LevelFilter::Trace) {
        eprintln!("Failed to initialize logger: {}", e);
    }
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: CommandLineOptions) -> Result<()> {
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "versesplit", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Split(args)) => {
            let config = load_config(&cli.config_path, cli.log_level)?;
            run_split(config, args)
        }
        Some(Commands::Next) => {
            let config = load_config(&cli.config_path, cli.log_level)?;
            let workflow = TranslationWorkflow::with_git(config.workflow)?;
            present_next(&workflow)
        }
        Some(Commands::Save { number, json }) => {
            let config = load_config(&cli.config_path, cli.log_level)?;
            let mut workflow = TranslationWorkflow::with_git(config.workflow)?;
            run_save(&mut workflow, number, &json)
        }
        None => {
            // Default behavior - top-level args mean a split run
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("PDF is required when no subcommand is specified")
            })?;
            let config = load_config(&cli.config_path, cli.log_level)?;
            run_split(
                config,
                SplitArgs {
                    input_path,
                    output_dir: cli.output_dir,
                    max_chars: cli.max_chars,
                },
            )
        }
    }
}

// @loads: Config file, CLI log level override, logger level
fn load_config(config_path: &str, log_level: Option<CliLogLevel>) -> Result<Config> {
    let mut config = Config::load_or_default(config_path)?;

    if let Some(level) = log_level {
        config.log_level = level.into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    Ok(config)
}

fn run_split(mut config: Config, args: SplitArgs) -> Result<()> {
    if let Some(max_chars) = args.max_chars {
        config.splitter.max_chars = max_chars.get();
    }

    let controller = Controller::with_config(config)?;
    controller.run(&args.input_path, args.output_dir)?;
    Ok(())
}

fn present_next(workflow: &TranslationWorkflow) -> Result<()> {
    let progress = workflow.progress()?;

    match workflow.next_presentation()? {
        Some(presentation) => {
            info!("Pending files: {}/{}", progress.remaining(), progress.total);
            info!("Translated files: {}/{}", progress.done, progress.total);
            println!("{}", presentation);
            info!("📋 Next file: {}", presentation.source.display());
            info!("📝 Will be saved as: {}", presentation.destination.display());
            info!("📊 Progress: {}", progress);
        }
        None => {
            info!(
                "✓ All {} '{}' files have been translated!",
                progress.total,
                workflow.prefix()
            );
        }
    }

    Ok(())
}

fn run_save(workflow: &mut TranslationWorkflow, number: usize, json: &str) -> Result<()> {
    let outcome = workflow.accept(number, json)?;

    info!("{}", "=".repeat(60));
    info!("✓ Progress: {}", outcome.progress);
    info!("  Remaining: {} files", outcome.progress.remaining());
    info!("{}", "=".repeat(60));

    if outcome.progress.is_complete() {
        info!("🎉 All '{}' translations are complete!", workflow.prefix());
        return Ok(());
    }

    present_next(workflow)
}

//! CLI entrypoint for EduPulse
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use edupulse_application::{
    AssistError, InferUseCase, InteractionLogger, NoProgress, ProgressNotifier,
    RunMultilingualUseCase, RunTaskUseCase, SummarizeLectureUseCase,
};
use edupulse_domain::{InteractionRecord, OutputFormat, SessionState};
use edupulse_infrastructure::{
    ConfigLoader, FileConfig, FileTranscriptSource, JsonlInteractionLogger, WatsonxGateway,
};
use edupulse_presentation::{
    Cli, ConsoleFormatter, ProgressReporter, Request, SessionRepl, save_record,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.logging.file.as_ref().map(PathBuf::from));
    let _log_guard = init_logging(cli.verbose, log_file.as_deref())?;

    info!("Starting EduPulse");
    check_config(&config)?;

    if !config.output.color {
        colored::control::set_override(false);
    }
    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();
    let show_progress = !cli.quiet && config.output.show_progress;

    // === Dependency Injection ===
    let (params, _) = config.generation.to_decoding_params();
    let gateway = Arc::new(WatsonxGateway::new(config.watsonx.clone(), params)?);

    let mut infer = InferUseCase::new(gateway).with_behavior(config.behavior.to_behavior());
    if let Some(logger) = interaction_logger(&config) {
        infer = infer.with_interaction_logger(logger);
    }
    let transcripts = Arc::new(FileTranscriptSource::new(transcript_dir(&config)));
    info!("Transcripts are read from {}", transcripts.dir().display());

    let request = match cli.command {
        Some(command) => command.into_request().context("Could not read input")?,
        None => Request::Session { task: None },
    };

    let progress: Box<dyn ProgressNotifier> = if show_progress && format == OutputFormat::Text {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(NoProgress)
    };
    let mut state = SessionState::new();

    match request {
        Request::Session { task } => {
            let mut repl = SessionRepl::new(
                RunTaskUseCase::new(infer.clone()),
                RunMultilingualUseCase::new(infer.clone()),
                SummarizeLectureUseCase::new(infer, transcripts),
            )
            .with_task(task.unwrap_or(config.repl.default_task))
            .with_progress(show_progress);
            if let Some(path) = &config.repl.history_file {
                repl = repl.with_history_file(Some(PathBuf::from(path)));
            }

            repl.run().await?;
            Ok(ExitCode::SUCCESS)
        }
        Request::Task { kind, fields, save } => {
            let result = RunTaskUseCase::new(infer)
                .execute(kind, fields, &mut state, progress.as_ref())
                .await;
            match result {
                Ok(record) => {
                    print_record(&record, format);
                    if let Some(dir) = save {
                        let path = save_record(&dir, &record)
                            .with_context(|| format!("Could not save to {}", dir.display()))?;
                        eprintln!("Saved to {}", path.display());
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => Ok(report(&e, format)),
            }
        }
        Request::Multilingual(fields) => {
            let result = RunMultilingualUseCase::new(infer)
                .execute(fields, &mut state, progress.as_ref())
                .await;
            match result {
                Ok(record) => {
                    print_record(&record, format);
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => Ok(report(&e, format)),
            }
        }
        Request::Lecture(fields) => {
            let result = SummarizeLectureUseCase::new(infer, transcripts)
                .execute(fields, &mut state, progress.as_ref())
                .await;
            match result {
                Ok(summary) => {
                    match format {
                        OutputFormat::Text => {
                            println!("{}", ConsoleFormatter::format_lecture(&summary))
                        }
                        OutputFormat::Json => {
                            println!("{}", ConsoleFormatter::format_lecture_json(&summary))
                        }
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => Ok(report(&e, format)),
            }
        }
    }
}

/// Install the tracing subscriber: stderr always, plus a plain-text file
/// when one is given. The returned guard flushes the file on drop.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow!("Log file path has no file name: {}", path.display()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Could not create log directory {}", dir.display()))?;

            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Log warnings; refuse to start on errors.
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    let mut errors = 0;
    for issue in &issues {
        if issue.is_error() {
            eprintln!("Config error: {}", issue.message);
            errors += 1;
        } else {
            warn!("{}", issue.message);
        }
    }
    if errors > 0 {
        bail!("Configuration has {} error(s)", errors);
    }
    Ok(())
}

fn interaction_logger(config: &FileConfig) -> Option<Arc<dyn InteractionLogger>> {
    if !config.logging.interactions {
        return None;
    }
    let dir = config
        .logging
        .interaction_dir
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| ConfigLoader::data_dir().map(|d| d.join("logs")))?;

    let logger = JsonlInteractionLogger::daily(&dir)?;
    if let Some(path) = logger.path() {
        info!("Logging interactions to {}", path.display());
    }
    Some(Arc::new(logger))
}

fn transcript_dir(config: &FileConfig) -> PathBuf {
    config
        .transcripts
        .dir
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| ConfigLoader::data_dir().map(|d| d.join("transcripts")))
        .unwrap_or_else(|| PathBuf::from("transcripts"))
}

fn print_record(record: &InteractionRecord, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", ConsoleFormatter::format_record(record)),
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_record_json(record)),
    }
}

/// Print a failed task as a notice.
fn report(err: &AssistError, format: OutputFormat) -> ExitCode {
    warn!("Task failed ({}): {}", err.kind(), err);
    match format {
        OutputFormat::Text => eprintln!("{}", ConsoleFormatter::format_notice(err)),
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_notice_json(err)),
    }
    ExitCode::FAILURE
}

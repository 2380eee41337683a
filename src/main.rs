// src/main.rs
use anyhow::Context;
use clap::Parser;
use github_changelog::output::{deliver, DeliveryTarget, OutputPlan};
use github_changelog::{
    render_document, ChangelogError, ChangelogPipeline, CommandLineInput, PipelineConfig,
};
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;

/// Sets up logging configuration.
///
/// The console appender writes to stderr; stdout carries the changelog.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("github_changelog.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Builds the changelog, renders it and delivers it to stdout or a file.
fn execute_pipeline(config: PipelineConfig) -> Result<(), ChangelogError> {
    let pipeline = ChangelogPipeline::new(config.settings)?;
    let nodes = pipeline.compute_changelog(&config.options)?;
    let rendered = render_document(&nodes, config.format)?;

    let report = deliver(OutputPlan::for_destination(config.output_file, rendered));
    if !report.is_success() {
        return Err(ChangelogError::DeliveryFailed {
            failures: report.failure_messages(),
        });
    }

    for completed in &report.completed {
        if let DeliveryTarget::WriteFile { path, .. } = &completed.operation {
            eprintln!("✓ Changelog saved to {}", path.display());
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose).context("Could not initialize logging")?;

    let config = PipelineConfig::resolve(cli);

    execute_pipeline(config).map_err(|e| {
        log::debug!("Changelog build failed ({} error)", e.category());
        anyhow::Error::new(e)
    })?;

    Ok(())
}

//! Command line interface.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use postenv_application::{
    TransformCollectionFile, TransformCollectionFileInput, TransformCollectionFileOutput,
};
use postenv_domain::WarningSeverity;
use postenv_infrastructure::{JsonCodec, StdFileSystem};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Rewrite a Postman collection to use environment variables.
///
/// Credentials in login bodies become `{{username}}` / `{{password}}`,
/// other requests get bearer auth from `{{accessToken}}`, and
/// `http://localhost:8080` becomes `{{base_url}}`.
#[derive(Debug, Parser)]
#[command(name = "postenv", version)]
pub struct Cli {
    /// Postman collection file to rewrite
    pub input: PathBuf,

    /// Write the result here instead of `<input>_transformed.json`
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors, not warnings about skipped parts of the collection
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Default log level for this invocation.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "error" }
    }

    /// Reads, rewrites and writes the collection named on the command line.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or parsed, or the output
    /// cannot be written.
    pub fn execute(&self) -> Result<TransformCollectionFileOutput> {
        let mut input = TransformCollectionFileInput::new(&self.input);
        if let Some(output) = &self.output {
            input = input.with_output(output);
        }

        TransformCollectionFile::new(StdFileSystem::new(), JsonCodec::new())
            .execute(input)
            .with_context(|| format!("failed to transform {}", self.input.display()))
    }

    /// Lowest warning severity printed after a run.
    #[must_use]
    pub const fn report_threshold(&self) -> WarningSeverity {
        if self.quiet {
            WarningSeverity::Error
        } else {
            WarningSeverity::Warning
        }
    }

    /// Prints the outcome: warnings to stderr, the saved path to stdout.
    pub fn print_summary(&self, output: &TransformCollectionFileOutput) {
        for warning in output.report.warnings_from(self.report_threshold()) {
            eprintln!("{warning}");
        }
        println!(
            "Transformed collection saved to {}",
            output.output_path.display()
        );
    }
}

/// Installs the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

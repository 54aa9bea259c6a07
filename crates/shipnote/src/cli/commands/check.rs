//! Check command

use clap::Args;
use console::style;
use tracing::info;

use shipnote_changelog::{NotesGenerator, Report, Severity};

use super::input::BodyArgs;
use crate::cli::{output, Cli, OutputFormat};
use crate::exit_codes;

/// Check a body and report its outcome
#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub input: BodyArgs,

    /// Strict mode - treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl CheckCommand {
    /// Execute the check command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(strict = self.strict, file = ?self.input.file, "executing check command");
        let config = cli.load_config()?;
        let body = self.input.read(config.message.max_body_bytes)?;

        let generator = NotesGenerator::new(config);
        let report = generator.generate(&body);

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    print_report(&report, cli.verbose);
                }
            }
        }

        if !passes(&report, self.strict) {
            std::process::exit(exit_codes::VALIDATION_ERROR);
        }

        Ok(())
    }
}

/// Whether a report passes the check
fn passes(report: &Report, strict: bool) -> bool {
    match report.outcome.severity() {
        Severity::Informative => true,
        Severity::Warning => !strict,
        Severity::Error => false,
    }
}

fn print_report(report: &Report, verbose: bool) {
    let severity = report.outcome.severity();

    println!("{}", output::header("Check Results"));
    println!();
    println!(
        "{}",
        output::key_value(
            "Outcome",
            &output::severity_style(severity)
                .apply_to(report.outcome.name())
                .to_string()
        )
    );
    println!(
        "{}",
        output::key_value("Code", &report.outcome.code().to_string())
    );
    println!(
        "{}",
        output::key_value("Severity", &format!("{:?}", severity).to_lowercase())
    );
    println!(
        "{}",
        output::key_value(
            "Entries",
            &format!(
                "{} matched, {} expected",
                report.counts.matched, report.counts.expected
            )
        )
    );

    if verbose && !report.records.is_empty() {
        println!();
        for entry in &report.records {
            let record = &entry.record;
            println!(
                "  {} {} {} {}",
                style(format!("#{}", record.external_code)).dim(),
                record.owner,
                record.description,
                style(record.reference_codes.join(",")).yellow()
            );
        }
    }

    println!();
    match severity {
        Severity::Informative => output::success(&report.outcome.description()),
        Severity::Warning => output::warning(&report.outcome.status_line()),
        Severity::Error => output::error(&report.outcome.status_line()),
    }
}

///
/// This module implements the command-line surface of the ticket copilot runner:
/// argument parsing, the single call into the processor, the stdout report and
/// the mapping from outcome to process exit code.
///
/// Domain types, decoding and formatting live in `ticket-copilot-core`; this
/// module is glue between them and the shell.
///
/// ## How To Use
/// - From a shell: `ticket-copilot <employee_id> <intent> "<ticket_text>"`, or `--help`.
/// - Programmatically: call [`run_with_args`] with an argv, a processor
///   constructor and an output sink, or [`run`] with an already parsed [`Cli`].
///
/// ## Exit codes
/// | code | meaning |
/// |---|---|
/// | 0 | no arguments (usage hint), `--help`/`--version` (written to the output sink), or ticket solved by RAG |
/// | 1 | processor returned any other status |
/// | 2 | processor/config failure, malformed processor result, or invalid arguments (clap) |
use clap::error::ErrorKind;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;
use ticket_copilot_core::report::{
    help_epilog, render_error, render_result_banner, render_ticket_preamble, render_usage_hint,
};
use ticket_copilot_core::{
    Intent, ProcessorError, TicketProcessor, TicketRequest, TicketResult, TicketStatus,
};

use crate::load_config::{load_config, CliConfig};

pub const PROGRAM_NAME: &str = "ticket-copilot";

pub const EXIT_SOLVED: i32 = 0;
pub const EXIT_NOT_SOLVED: i32 = 1;
pub const EXIT_FAILURE: i32 = 2;

/// Process support tickets through the RAG system.
#[derive(Parser, Debug)]
#[command(
    name = "ticket-copilot",
    version,
    about = "Process support tickets through RAG system"
)]
pub struct Cli {
    /// Employee ID (e.g., E007)
    #[arg(value_parser = clap::builder::NonEmptyStringValueParser::new())]
    pub employee_id: String,

    /// Ticket intent category
    #[arg(value_enum)]
    pub intent: Intent,

    /// Full ticket description
    pub ticket_text: String,

    /// Optional YAML config file with processor settings
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse an argv (program name first), attaching the examples epilog to `--help`.
    pub fn try_parse_args<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Cli::command()
            .after_help(help_epilog(PROGRAM_NAME))
            .try_get_matches_from(argv)?;
        Cli::from_arg_matches(&matches)
    }

    pub fn request(&self) -> TicketRequest {
        TicketRequest {
            employee_id: self.employee_id.clone(),
            ticket_text: self.ticket_text.clone(),
            intent: self.intent,
        }
    }
}

/// A completed run: the processor answered with a well-formed result.
#[derive(Debug)]
pub struct RunOutcome {
    pub result: TicketResult,
}

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Processor(#[from] ProcessorError),

    #[error(transparent)]
    Config(#[from] anyhow::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// The single place outcomes are mapped to process exit codes.
pub fn exit_code_for(outcome: &Result<RunOutcome, RunError>) -> i32 {
    match outcome {
        Ok(RunOutcome { result }) => match &result.status {
            TicketStatus::SolvedByRag => EXIT_SOLVED,
            TicketStatus::Escalated | TicketStatus::Other(_) => EXIT_NOT_SOLVED,
        },
        Err(_) => EXIT_FAILURE,
    }
}

/// Process one parsed ticket: construct the processor, call it once, print the report.
pub async fn run<P, F, W>(cli: Cli, connect: F, out: &mut W) -> Result<RunOutcome, RunError>
where
    P: TicketProcessor,
    F: FnOnce(Option<&CliConfig>) -> Result<P, ProcessorError>,
    W: Write,
{
    let config = cli.config.as_ref().map(load_config).transpose()?;

    writeln!(out, "🚀 Initializing RAG System...")?;
    out.flush()?;
    let processor = connect(config.as_ref())?;
    tracing::info!("Processor constructed");

    let request = cli.request();
    write!(out, "{}", render_ticket_preamble(&request))?;
    out.flush()?;

    let result = processor.process_allowed_ticket(request).await?;
    tracing::info!(status = %result.status, kb_relevance = result.kb_relevance, "Ticket processed");

    write!(out, "{}", render_result_banner(&result))?;
    out.flush()?;
    Ok(RunOutcome { result })
}

/// Full runner from a raw argv to an exit code.
pub async fn run_with_args<I, T, P, F, W>(argv: I, connect: F, out: &mut W) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    P: TicketProcessor,
    F: FnOnce(Option<&CliConfig>) -> Result<P, ProcessorError>,
    W: Write,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();

    // Only the program name: show the hint and leave quietly.
    if argv.len() <= 1 {
        tracing::info!("No arguments given, printing usage hint");
        let _ = write!(out, "{}", render_usage_hint(PROGRAM_NAME));
        return EXIT_SOLVED;
    }

    let cli = match Cli::try_parse_args(argv) {
        Ok(cli) => cli,
        Err(e) => {
            let code = e.exit_code();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    tracing::debug!(kind = ?e.kind(), "Printing help or version");
                    let _ = write!(out, "{}", e.render());
                    let _ = out.flush();
                }
                kind => {
                    tracing::warn!(?kind, exit_code = code, "Invalid arguments");
                    let _ = e.print();
                }
            }
            return code;
        }
    };
    tracing::info!(
        employee_id = %cli.employee_id,
        intent = %cli.intent,
        "ticket_received"
    );

    let outcome = run(cli, connect, out).await;
    if let Err(e) = &outcome {
        tracing::error!(error = %e, "Ticket processing failed");
        let _ = write!(out, "{}", render_error(e));
        let _ = out.flush();
    }

    let code = exit_code_for(&outcome);
    tracing::info!(exit_code = code, "Runner finished");
    code
}

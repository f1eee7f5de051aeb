//! Command implementations for the emotion classifier CLI.

use std::io::{self, BufRead};
use std::sync::Arc;

use log::{debug, info};

use crate::app::presenter::{Presenter, TerminalPresenter};
use crate::app::session::{NEGATIVE_FEEDBACK_MESSAGE, POSITIVE_FEEDBACK_MESSAGE, Session};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AppConfig;
use crate::error::Result;
use crate::feedback::{CsvFeedbackRecorder, FeedbackRecorder, FeedbackType};
use crate::pipeline::{InferencePipeline, install_global};

/// Help shown at the start of an interactive session.
pub const INTERACTIVE_HELP: &str = "Type a line of text and press Enter to analyze it. \
     Answer 👍 Yes with :yes or 👎 No with :no, or leave with :quit.";

/// One line typed during an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInput {
    /// Text to classify.
    Analyze(String),
    /// A feedback click.
    Feedback(FeedbackType),
    /// Show the help line again.
    Help,
    /// End the session.
    Quit,
}

impl SessionInput {
    /// Interpret a line of input.
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":quit" | ":q" | ":exit" => SessionInput::Quit,
            ":help" | ":h" => SessionInput::Help,
            ":yes" | ":up" => SessionInput::Feedback(FeedbackType::ThumbsUp),
            ":no" | ":down" => SessionInput::Feedback(FeedbackType::ThumbsDown),
            _ => SessionInput::Analyze(line.to_string()),
        }
    }
}

/// Execute a CLI command.
pub fn execute_command(args: EmotionArgs) -> Result<()> {
    let config = args.resolve_config()?;
    debug!("Resolved configuration: {config:?}");

    match args.command.clone().unwrap_or(Command::Interactive) {
        Command::Interactive => run_interactive(&config),
        Command::Analyze(analyze_args) => analyze_texts(analyze_args, &config, &args),
        Command::Feedback(feedback_args) => record_feedback(feedback_args, &config, &args),
        Command::Summary => show_summary(&config, &args),
    }
}

/// Load the artifacts once for the whole process.
fn load_pipeline(config: &AppConfig) -> Result<&'static InferencePipeline> {
    let loader = config.model.loader();
    let pipeline = InferencePipeline::from_loader(&loader, config.model.stemming)?;
    info!(
        "Pipeline ready: {} features, {} classifier",
        pipeline.vectorizer().dimension(),
        pipeline.classifier().name()
    );
    install_global(pipeline)
}

fn recorder(config: &AppConfig) -> Arc<CsvFeedbackRecorder> {
    Arc::new(CsvFeedbackRecorder::new(&config.feedback.path))
}

/// Read lines from the terminal until end of input or `:quit`.
fn run_interactive(config: &AppConfig) -> Result<()> {
    let pipeline = load_pipeline(config)?;
    let session = Session::new(pipeline, recorder(config), config.ui.clone());
    let mut presenter = TerminalPresenter::stdout();

    let stdin = io::stdin();
    run_session(&session, stdin.lock(), &mut presenter)
}

/// Drive a session from a line-oriented input.
pub fn run_session<R: BufRead>(
    session: &Session<'_>,
    input: R,
    presenter: &mut dyn Presenter,
) -> Result<()> {
    session.intro(presenter)?;
    presenter.text(INTERACTIVE_HELP)?;

    for line in input.lines() {
        match SessionInput::parse(&line?) {
            SessionInput::Quit => break,
            SessionInput::Help => presenter.text(INTERACTIVE_HELP)?,
            SessionInput::Feedback(feedback) => {
                session.feedback(Some(feedback), presenter)?;
            }
            SessionInput::Analyze(text) => {
                if session.analyze(&text, presenter)?.is_some() {
                    session.feedback_prompt(presenter)?;
                }
            }
        }
    }

    Ok(())
}

/// Classify the texts given on the command line.
fn analyze_texts(args: AnalyzeArgs, config: &AppConfig, cli_args: &EmotionArgs) -> Result<()> {
    let pipeline = load_pipeline(config)?;

    match cli_args.output_format {
        OutputFormat::Human => {
            let session = Session::new(pipeline, recorder(config), config.ui.clone());
            let mut presenter = TerminalPresenter::stdout();
            for (i, text) in args.texts.iter().enumerate() {
                if i > 0 {
                    presenter.text("")?;
                }
                if cli_args.verbosity() > 1 {
                    presenter.text(&format!("Text: {text}"))?;
                }
                session.analyze(text, &mut presenter)?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let outputs: Vec<AnalysisOutput> = args
                .texts
                .iter()
                .zip(pipeline.classify_batch(&args.texts[..]))
                .map(|(text, outcome)| AnalysisOutput::new(text, outcome))
                .collect();
            output_result("", &outputs, cli_args)
        }
    }
}

/// Append one feedback row without loading the model.
fn record_feedback(args: FeedbackArgs, config: &AppConfig, cli_args: &EmotionArgs) -> Result<()> {
    let recorder = recorder(config);
    recorder.record(args.feedback)?;

    let message = match args.feedback {
        FeedbackType::ThumbsUp => POSITIVE_FEEDBACK_MESSAGE,
        FeedbackType::ThumbsDown => NEGATIVE_FEEDBACK_MESSAGE,
    };

    output_result(
        message,
        &FeedbackOutput {
            feedback: args.feedback,
            path: recorder.path().display().to_string(),
            message: message.to_string(),
        },
        cli_args,
    )
}

/// Count the rows of the feedback log.
fn show_summary(config: &AppConfig, cli_args: &EmotionArgs) -> Result<()> {
    let recorder = recorder(config);
    let summary = recorder.summary()?;

    output_result(
        "Feedback summary",
        &SummaryOutput {
            path: recorder.path().display().to_string(),
            total: summary.total(),
            summary,
        },
        cli_args,
    )
}

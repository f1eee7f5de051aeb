//! Command line argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::Result;
use crate::feedback::FeedbackType;
use crate::model::loader::ArtifactFormat;

/// Classify text into Sadness, Joy, Love, Anger, Fear or Surprise
#[derive(Parser, Debug, Clone)]
#[command(name = "emotion-classifier")]
#[command(about = "Classify free text into one of six emotions with a pre-trained model")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct EmotionArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the vectorizer and classifier artifacts
    #[arg(long, value_name = "DIR", env = "EMOTION_MODEL_DIR")]
    pub model_dir: Option<PathBuf>,

    /// Serialization format of the artifacts
    #[arg(long, value_name = "FORMAT")]
    pub artifact_format: Option<ArtifactFormat>,

    /// Stem words before vectorizing (use with artifacts fitted on stemmed text)
    #[arg(long, env = "EMOTION_STEMMING")]
    pub stemming: bool,

    /// CSV file receiving feedback
    #[arg(long, value_name = "FILE", env = "EMOTION_FEEDBACK_FILE")]
    pub feedback_file: Option<PathBuf>,

    /// Image shown when Joy is predicted
    #[arg(long, value_name = "FILE")]
    pub joy_image: Option<PathBuf>,

    /// Never show images
    #[arg(long)]
    pub no_images: bool,

    /// Subcommand to execute (defaults to an interactive session)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl EmotionArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Build the configuration: defaults, then the config file, then flags.
    pub fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(dir) = &self.model_dir {
            config.model.dir = dir.clone();
        }
        if let Some(format) = self.artifact_format {
            config.model.format = format;
        }
        if self.stemming {
            config.model.stemming = true;
        }
        if let Some(path) = &self.feedback_file {
            config.feedback.path = path.clone();
        }
        if let Some(path) = &self.joy_image {
            config.ui.joy_image = path.clone();
        }
        if self.no_images {
            config.ui.show_images = false;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze lines typed at the terminal and collect feedback
    Interactive,

    /// Analyze the given texts and exit
    Analyze(AnalyzeArgs),

    /// Record a thumbs up or thumbs down
    Feedback(FeedbackArgs),

    /// Show the feedback counts
    Summary,
}

/// Arguments for analyzing texts
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Texts to classify, one prediction each
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,
}

/// Arguments for recording feedback
#[derive(Parser, Debug, Clone)]
pub struct FeedbackArgs {
    /// The feedback to record
    #[arg(value_name = "FEEDBACK")]
    pub feedback: FeedbackType,
}

/// Output formats for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_command_and_verbosity() {
        let args = EmotionArgs::try_parse_from(["emotion-classifier"]).unwrap();

        assert!(args.command.is_none());
        assert_eq!(args.verbosity(), 1);
        assert_eq!(args.output_format, OutputFormat::Human);
    }

    #[test]
    fn test_verbosity_flags() {
        let args = EmotionArgs::try_parse_from(["emotion-classifier", "-vvv"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = EmotionArgs::try_parse_from(["emotion-classifier", "-vv", "-q"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_analyze_command() {
        let args = EmotionArgs::try_parse_from([
            "emotion-classifier",
            "--format",
            "json",
            "analyze",
            "I am so happy",
            "I am scared",
        ])
        .unwrap();

        match args.command {
            Some(Command::Analyze(analyze)) => assert_eq!(analyze.texts.len(), 2),
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(args.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_analyze_requires_text() {
        assert!(EmotionArgs::try_parse_from(["emotion-classifier", "analyze"]).is_err());
    }

    #[test]
    fn test_feedback_command() {
        let args = EmotionArgs::try_parse_from(["emotion-classifier", "feedback", "down"]).unwrap();
        match args.command {
            Some(Command::Feedback(f)) => assert_eq!(f.feedback, FeedbackType::ThumbsDown),
            other => panic!("unexpected command {other:?}"),
        }

        assert!(EmotionArgs::try_parse_from(["emotion-classifier", "feedback", "meh"]).is_err());
    }

    #[test]
    fn test_overrides_apply_to_config() {
        let args = EmotionArgs::try_parse_from([
            "emotion-classifier",
            "--model-dir",
            "/tmp/models",
            "--artifact-format",
            "bincode",
            "--stemming",
            "--feedback-file",
            "/tmp/feedback.csv",
            "--no-images",
            "summary",
        ])
        .unwrap();

        let config = args.resolve_config().unwrap();
        assert_eq!(config.model.dir, Path::new("/tmp/models"));
        assert_eq!(config.model.format, ArtifactFormat::Bincode);
        assert!(config.model.stemming);
        assert_eq!(config.feedback.path, Path::new("/tmp/feedback.csv"));
        assert!(!config.ui.show_images);
    }
}

//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{EmotionArgs, OutputFormat};
use crate::error::Result;
use crate::feedback::{FeedbackSummary, FeedbackType};
use crate::label::Emotion;
use crate::pipeline::{EmotionScore, PredictionResult};

/// Result structure for one analyzed text.
#[derive(Debug, Serialize)]
pub struct AnalysisOutput {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted: Option<Emotion>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ranked: Vec<EmotionScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisOutput {
    /// Build from a classification outcome.
    pub fn new(text: &str, outcome: Result<PredictionResult>) -> Self {
        match outcome {
            Ok(result) => AnalysisOutput {
                text: text.to_string(),
                predicted: Some(result.predicted),
                ranked: result.ranked,
                normalized: Some(result.normalized),
                error: None,
            },
            Err(e) => AnalysisOutput {
                text: text.to_string(),
                predicted: None,
                ranked: Vec::new(),
                normalized: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Result structure for recorded feedback.
#[derive(Debug, Serialize)]
pub struct FeedbackOutput {
    pub feedback: FeedbackType,
    pub path: String,
    pub message: String,
}

/// Result structure for the feedback summary.
#[derive(Debug, Serialize)]
pub struct SummaryOutput {
    pub path: String,
    #[serde(flatten)]
    pub summary: FeedbackSummary,
    pub total: usize,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &EmotionArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &EmotionArgs) -> Result<()> {
    if args.verbosity() > 0 && !message.is_empty() {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    for line in human_lines(&value) {
        println!("{line}");
    }
    Ok(())
}

/// Render a serialized result as lines of text.
fn human_lines(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Array(items) => {
            let mut lines = Vec::new();
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    lines.push(String::new());
                }
                lines.extend(human_lines(item));
            }
            lines
        }
        serde_json::Value::Object(obj) => obj
            .iter()
            .map(|(key, val)| format!("{key}: {}", format_value(val)))
            .collect(),
        _ => vec![format_value(value)],
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &EmotionArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EmotionError;

    #[test]
    fn test_format_value() {
        assert_eq!(
            format_value(&serde_json::Value::String("test".to_string())),
            "test"
        );
        assert_eq!(
            format_value(&serde_json::Value::Number(serde_json::Number::from(42))),
            "42"
        );
        assert_eq!(format_value(&serde_json::Value::Bool(false)), "false");
        assert_eq!(format_value(&serde_json::Value::Null), "null");
    }

    #[test]
    fn test_summary_lines() {
        let output = SummaryOutput {
            path: "feedback_summary.csv".to_string(),
            summary: FeedbackSummary {
                thumbs_up: 3,
                thumbs_down: 1,
            },
            total: 4,
        };

        let lines = human_lines(&serde_json::to_value(&output).unwrap());
        assert!(lines.contains(&"thumbs_up: 3".to_string()));
        assert!(lines.contains(&"thumbs_down: 1".to_string()));
        assert!(lines.contains(&"total: 4".to_string()));
    }

    #[test]
    fn test_failed_analysis_serializes_error_only() {
        let output = AnalysisOutput::new("   ", Err(EmotionError::EmptyInput));
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["text"], "   ");
        assert!(value.get("predicted").is_none());
        assert!(value.get("ranked").is_none());
        assert!(value["error"].as_str().is_some());
    }

    #[test]
    fn test_feedback_output_uses_log_value() {
        let output = FeedbackOutput {
            feedback: FeedbackType::ThumbsDown,
            path: "log.csv".to_string(),
            message: "ok".to_string(),
        };
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["feedback"], "Thumbs Down");
    }
}

//! Session logic independent of any UI framework.
//!
//! A [`Session`] turns user actions (submitted text, feedback clicks) into
//! presenter calls. Every failure that belongs to a single request is shown
//! to the user and the session carries on; only presenter I/O errors are
//! returned to the caller.

use std::sync::Arc;

use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use log::{debug, warn};

use crate::app::presenter::Presenter;
use crate::config::UiConfig;
use crate::error::{EmotionError, Result};
use crate::feedback::{FeedbackAction, FeedbackRecorder, FeedbackType};
use crate::label::Emotion;
use crate::pipeline::{InferencePipeline, PredictionResult};

pub const APP_TITLE: &str = "Text Analysis App";
pub const APP_INTRO: &str = "Enter some text below to analyze sentiment or classify it into either Sadness, Joy, Love, Anger, Fear, or Surprise.";
pub const EMPTY_INPUT_PROMPT: &str = "Please enter some text.";
pub const TOP_PREDICTIONS_HEADING: &str = "Top Predictions:";
pub const JOY_IMAGE_CAPTION: &str = "Joyful Emotion!";
pub const JOY_IMAGE_MISSING: &str = "Joy image not found at the specified path.";
pub const FEEDBACK_HEADING: &str = "Give Us Feedback!";
pub const FEEDBACK_QUESTION: &str = "Was this service mega cool?";
pub const POSITIVE_FEEDBACK_LABEL: &str = "👍 Yes";
pub const NEGATIVE_FEEDBACK_LABEL: &str = "👎 No";
pub const POSITIVE_FEEDBACK_MESSAGE: &str = "Thank you for your positive feedback!";
pub const NEGATIVE_FEEDBACK_MESSAGE: &str =
    "We appreciate your feedback and are working to improve.";

/// One user's interaction with a loaded pipeline.
pub struct Session<'a> {
    pipeline: &'a InferencePipeline,
    recorder: Arc<dyn FeedbackRecorder>,
    ui: UiConfig,
}

impl<'a> Session<'a> {
    /// Create a session.
    pub fn new(
        pipeline: &'a InferencePipeline,
        recorder: Arc<dyn FeedbackRecorder>,
        ui: UiConfig,
    ) -> Self {
        Session {
            pipeline,
            recorder,
            ui,
        }
    }

    /// Render the title and instructions.
    pub fn intro(&self, presenter: &mut dyn Presenter) -> Result<()> {
        presenter.title(APP_TITLE)?;
        presenter.text(APP_INTRO)
    }

    /// Render the feedback section.
    pub fn feedback_prompt(&self, presenter: &mut dyn Presenter) -> Result<()> {
        presenter.header(FEEDBACK_HEADING)?;
        presenter.text(FEEDBACK_QUESTION)?;
        presenter.text(&format!(
            "{POSITIVE_FEEDBACK_LABEL}    {NEGATIVE_FEEDBACK_LABEL}"
        ))
    }

    /// Handle the "Analyze Text" action.
    ///
    /// Returns the prediction when one was rendered.
    pub fn analyze(
        &self,
        raw: &str,
        presenter: &mut dyn Presenter,
    ) -> Result<Option<PredictionResult>> {
        if raw.trim().is_empty() {
            presenter.text(EMPTY_INPUT_PROMPT)?;
            return Ok(None);
        }

        match self.pipeline.classify(raw) {
            Ok(result) => {
                self.render_prediction(&result, presenter)?;
                Ok(Some(result))
            }
            Err(EmotionError::EmptyInput) => {
                presenter.text(EMPTY_INPUT_PROMPT)?;
                Ok(None)
            }
            Err(e) => {
                warn!("Classification failed: {e}");
                presenter.error(&format!("Error processing text: {}", e.detail()))?;
                Ok(None)
            }
        }
    }

    /// Handle a feedback action. Returns whether a row was recorded.
    pub fn feedback(&self, action: FeedbackAction, presenter: &mut dyn Presenter) -> Result<bool> {
        let Some(feedback) = action else {
            return Ok(false);
        };

        match feedback {
            FeedbackType::ThumbsUp => presenter.success(POSITIVE_FEEDBACK_MESSAGE)?,
            FeedbackType::ThumbsDown => presenter.warning(NEGATIVE_FEEDBACK_MESSAGE)?,
        }

        match self.recorder.record(feedback) {
            Ok(()) => Ok(true),
            Err(e) => {
                warn!("Feedback was not saved: {e}");
                presenter.error(&format!("Could not save feedback: {}", e.detail()))?;
                Ok(false)
            }
        }
    }

    fn render_prediction(
        &self,
        result: &PredictionResult,
        presenter: &mut dyn Presenter,
    ) -> Result<()> {
        presenter.text(&format!("Predicted Emotion: {}", result.predicted))?;

        if self.ui.show_images && result.predicted == Emotion::Joy {
            self.show_joy_image(presenter)?;
        }

        presenter.text(TOP_PREDICTIONS_HEADING)?;
        for score in &result.ranked {
            presenter.text(&score.percentage_line())?;
        }
        Ok(())
    }

    fn show_joy_image(&self, presenter: &mut dyn Presenter) -> Result<()> {
        match self.load_joy_image() {
            Ok(image) => presenter.image(&image, JOY_IMAGE_CAPTION),
            Err(EmotionError::AssetMissing(path)) => {
                debug!("Joy image missing at {path}");
                presenter.text(JOY_IMAGE_MISSING)
            }
            Err(e) => presenter.text(&format!("Error displaying image: {}", e.detail())),
        }
    }

    /// Load the Joy illustration resized to the configured square.
    pub fn load_joy_image(&self) -> Result<DynamicImage> {
        let path = &self.ui.joy_image;
        if !path.exists() {
            return Err(EmotionError::asset_missing(path.display().to_string()));
        }

        let image = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(|e| EmotionError::other(format!("Image decode failed: {e}")))?;

        let size = self.ui.image_size;
        Ok(image.resize_exact(size, size, FilterType::Triangle))
    }
}

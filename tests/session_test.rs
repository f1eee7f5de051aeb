mod common;

use std::io::Cursor;
use std::sync::Arc;

use tempfile::TempDir;

use emotion_classifier::app::presenter::{MemoryPresenter, Rendered};
use emotion_classifier::app::session::{
    APP_TITLE, EMPTY_INPUT_PROMPT, FEEDBACK_HEADING, NEGATIVE_FEEDBACK_MESSAGE,
    POSITIVE_FEEDBACK_MESSAGE, Session,
};
use emotion_classifier::cli::commands::{INTERACTIVE_HELP, run_session};
use emotion_classifier::config::UiConfig;
use emotion_classifier::error::Result;
use emotion_classifier::feedback::{CsvFeedbackRecorder, FeedbackType};
use emotion_classifier::model::loader::ArtifactFormat;
use emotion_classifier::pipeline::InferencePipeline;

struct Fixture {
    dir: TempDir,
    pipeline: InferencePipeline,
}

impl Fixture {
    fn new() -> Result<Self> {
        let dir = TempDir::new()?;
        let loader = common::fixture_loader(&dir.path().join("models"), ArtifactFormat::Json)?;
        let pipeline = InferencePipeline::from_loader(&loader, false)?;
        Ok(Fixture { dir, pipeline })
    }

    fn recorder(&self) -> Arc<CsvFeedbackRecorder> {
        Arc::new(CsvFeedbackRecorder::new(self.dir.path().join("feedback_summary.csv")))
    }

    fn ui(&self) -> UiConfig {
        UiConfig {
            show_images: true,
            joy_image: self.dir.path().join("joy.jpg"),
            image_size: 150,
        }
    }
}

#[test]
fn scripted_session_renders_and_records() -> Result<()> {
    let fixture = Fixture::new()?;
    let recorder = fixture.recorder();
    let session = Session::new(&fixture.pipeline, recorder.clone(), fixture.ui());
    let mut presenter = MemoryPresenter::new();

    let input = Cursor::new("I am so happy today!!!\n:yes\n\n:no\n:quit\nI hate this\n");
    run_session(&session, input, &mut presenter)?;

    let rendered = presenter.rendered();
    assert_eq!(rendered[0], Rendered::Title(APP_TITLE.to_string()));
    assert_eq!(rendered[2], Rendered::Text(INTERACTIVE_HELP.to_string()));
    assert_eq!(rendered[3], Rendered::Text("Predicted Emotion: Joy".to_string()));
    assert!(rendered.contains(&Rendered::Header(FEEDBACK_HEADING.to_string())));
    assert!(rendered.contains(&Rendered::Success(POSITIVE_FEEDBACK_MESSAGE.to_string())));
    assert!(rendered.contains(&Rendered::Text(EMPTY_INPUT_PROMPT.to_string())));
    assert!(rendered.contains(&Rendered::Warning(NEGATIVE_FEEDBACK_MESSAGE.to_string())));

    // Nothing after :quit is processed.
    assert!(
        !presenter
            .texts()
            .contains(&"Predicted Emotion: Anger")
    );

    assert_eq!(
        recorder.entries()?,
        vec![FeedbackType::ThumbsUp, FeedbackType::ThumbsDown]
    );
    Ok(())
}

#[test]
fn feedback_from_two_sessions_is_appended_in_order() -> Result<()> {
    let fixture = Fixture::new()?;

    let first = Session::new(&fixture.pipeline, fixture.recorder(), fixture.ui());
    first.feedback(Some(FeedbackType::ThumbsUp), &mut MemoryPresenter::new())?;

    let second = Session::new(&fixture.pipeline, fixture.recorder(), fixture.ui());
    second.feedback(Some(FeedbackType::ThumbsDown), &mut MemoryPresenter::new())?;
    second.feedback(None, &mut MemoryPresenter::new())?;

    let content = std::fs::read_to_string(fixture.dir.path().join("feedback_summary.csv"))?;
    assert_eq!(content, "FeedbackType\nThumbs Up\nThumbs Down\n");

    let summary = fixture.recorder().summary()?;
    assert_eq!(summary.thumbs_up, 1);
    assert_eq!(summary.thumbs_down, 1);
    Ok(())
}

#[test]
fn missing_joy_image_does_not_stop_the_prediction() -> Result<()> {
    let fixture = Fixture::new()?;
    let session = Session::new(&fixture.pipeline, fixture.recorder(), fixture.ui());
    let mut presenter = MemoryPresenter::new();

    let result = session.analyze("so glad and happy", &mut presenter)?;

    assert!(result.is_some());
    let texts = presenter.texts();
    assert_eq!(texts[0], "Predicted Emotion: Joy");
    assert_eq!(texts[1], "Joy image not found at the specified path.");
    assert_eq!(texts[2], "Top Predictions:");
    assert_eq!(texts.len(), 3 + 6);
    Ok(())
}

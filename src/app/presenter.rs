//! Rendering surfaces for the interactive session.
//!
//! The session decides *what* to show; a [`Presenter`] decides *how*. The
//! crate ships a terminal presenter and an in-memory one that records every
//! call.

use std::io::Write;

use image::DynamicImage;

use crate::error::Result;

/// A UI surface able to render the session's output.
pub trait Presenter {
    /// Page title.
    fn title(&mut self, text: &str) -> Result<()>;

    /// Section header.
    fn header(&mut self, text: &str) -> Result<()>;

    /// Plain text line.
    fn text(&mut self, text: &str) -> Result<()>;

    /// Positive notice.
    fn success(&mut self, text: &str) -> Result<()>;

    /// Cautionary notice.
    fn warning(&mut self, text: &str) -> Result<()>;

    /// Error notice. The session continues afterwards.
    fn error(&mut self, text: &str) -> Result<()>;

    /// An image with a caption.
    fn image(&mut self, image: &DynamicImage, caption: &str) -> Result<()>;
}

/// Writes session output as text lines.
///
/// Terminals cannot show the image itself, so it is announced with its
/// dimensions and caption.
#[derive(Debug)]
pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl TerminalPresenter<std::io::Stdout> {
    /// Presenter writing to standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalPresenter<W> {
    /// Presenter writing to `out`.
    pub fn new(out: W) -> Self {
        TerminalPresenter { out }
    }

    /// Consume the presenter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn title(&mut self, text: &str) -> Result<()> {
        let rule = "=".repeat(text.chars().count());
        self.line(&format!("{text}\n{rule}"))
    }

    fn header(&mut self, text: &str) -> Result<()> {
        self.line(&format!("\n## {text}"))
    }

    fn text(&mut self, text: &str) -> Result<()> {
        self.line(text)
    }

    fn success(&mut self, text: &str) -> Result<()> {
        self.line(&format!("[ok] {text}"))
    }

    fn warning(&mut self, text: &str) -> Result<()> {
        self.line(&format!("[!] {text}"))
    }

    fn error(&mut self, text: &str) -> Result<()> {
        self.line(&format!("[error] {text}"))
    }

    fn image(&mut self, image: &DynamicImage, caption: &str) -> Result<()> {
        self.line(&format!(
            "[image {}x{}] {caption}",
            image.width(),
            image.height()
        ))
    }
}

/// One recorded presenter call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Title(String),
    Header(String),
    Text(String),
    Success(String),
    Warning(String),
    Error(String),
    Image {
        width: u32,
        height: u32,
        caption: String,
    },
}

/// Records presenter calls in memory.
#[derive(Debug, Default)]
pub struct MemoryPresenter {
    rendered: Vec<Rendered>,
}

impl MemoryPresenter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything rendered so far, in order.
    pub fn rendered(&self) -> &[Rendered] {
        &self.rendered
    }

    /// The plain text lines rendered so far.
    pub fn texts(&self) -> Vec<&str> {
        self.rendered
            .iter()
            .filter_map(|r| match r {
                Rendered::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Forget everything rendered so far.
    pub fn clear(&mut self) {
        self.rendered.clear();
    }
}

impl Presenter for MemoryPresenter {
    fn title(&mut self, text: &str) -> Result<()> {
        self.rendered.push(Rendered::Title(text.to_string()));
        Ok(())
    }

    fn header(&mut self, text: &str) -> Result<()> {
        self.rendered.push(Rendered::Header(text.to_string()));
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<()> {
        self.rendered.push(Rendered::Text(text.to_string()));
        Ok(())
    }

    fn success(&mut self, text: &str) -> Result<()> {
        self.rendered.push(Rendered::Success(text.to_string()));
        Ok(())
    }

    fn warning(&mut self, text: &str) -> Result<()> {
        self.rendered.push(Rendered::Warning(text.to_string()));
        Ok(())
    }

    fn error(&mut self, text: &str) -> Result<()> {
        self.rendered.push(Rendered::Error(text.to_string()));
        Ok(())
    }

    fn image(&mut self, image: &DynamicImage, caption: &str) -> Result<()> {
        self.rendered.push(Rendered::Image {
            width: image.width(),
            height: image.height(),
            caption: caption.to_string(),
        });
        Ok(())
    }
}

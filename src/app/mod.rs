//! Presentation layer.
//!
//! [`Session`] holds the UI-agnostic behaviour of the application: input
//! validation, rendering a prediction, the Joy illustration and feedback
//! handling. It drives any [`Presenter`].

pub mod presenter;
pub mod session;

pub use presenter::{MemoryPresenter, Presenter, Rendered, TerminalPresenter};
pub use session::Session;

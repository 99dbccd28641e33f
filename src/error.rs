use thiserror::Error;

/// Failures talking to the browser. None of these stop the page from
/// rendering; callers log them and carry on without the feature.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window object")]
    NoWindow,
    #[error("could not read the scroll offset: {0}")]
    ScrollOffset(String),
    #[error("could not register '{event}' listener: {reason}")]
    Listener { event: &'static str, reason: String },
    #[error("could not set up intersection observer: {0}")]
    Observer(String),
    #[error("could not build stylesheet: {0}")]
    Style(String),
}

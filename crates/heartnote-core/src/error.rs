//! Error types for Heartnote

use std::path::PathBuf;

use thiserror::Error;

use crate::flow::Step;

/// A flow operation that the current state does not permit.
///
/// The UI disables the controls that would produce these, so in practice
/// they only show up in logs and tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// Tried to leave the reveal card before every message was opened
    #[error("{remaining} message(s) still hidden")]
    RevealsPending { remaining: usize },

    /// Operation belongs to a different card than the one showing
    #[error("operation requires step {expected}, current step is {actual}")]
    WrongStep { expected: Step, actual: Step },

    /// Reveal slot index outside the message list
    #[error("reveal slot {index} out of range (0..{len})")]
    SlotOutOfRange { index: usize, len: usize },
}

/// Failure to load or validate card content.
#[derive(Error, Debug)]
pub enum ContentError {
    /// Content file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content file is not valid JSON for [`crate::CardContent`]
    #[error("failed to parse content: {0}")]
    Parse(#[from] serde_json::Error),

    /// Content parsed but is unusable
    #[error("invalid content: {0}")]
    Invalid(String),
}

/// Result type alias for content loading
pub type ContentResult<T> = std::result::Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_error_messages() {
        let err = FlowError::RevealsPending { remaining: 2 };
        assert_eq!(err.to_string(), "2 message(s) still hidden");

        let err = FlowError::WrongStep {
            expected: Step::Letter,
            actual: Step::Intro,
        };
        assert_eq!(
            err.to_string(),
            "operation requires step letter, current step is intro"
        );

        let err = FlowError::SlotOutOfRange { index: 5, len: 3 };
        assert_eq!(err.to_string(), "reveal slot 5 out of range (0..3)");
    }

    #[test]
    fn content_error_from_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: ContentError = json_err.into();
        assert!(matches!(err, ContentError::Parse(_)));
    }
}

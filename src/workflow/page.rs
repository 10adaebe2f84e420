use tracing::warn;

use crate::error::{Operation, Result};

/// Load state of a page backed by one backend read.
///
/// A failed load blocks the page behind the operation's generic message;
/// retrying means running the load again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed {
        message: String,
    },
}

impl<T> PageState<T> {
    pub fn from_result(operation: Operation, result: Result<T>) -> Self {
        match result {
            Ok(value) => PageState::Ready(value),
            Err(e) => {
                warn!(%operation, error = %e, "page load failed");
                PageState::Failed {
                    message: operation.failure_message(),
                }
            }
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            PageState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            PageState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PageState::Failed { message } => Some(message),
            _ => None,
        }
    }
}

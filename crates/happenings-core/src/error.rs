//! Error types for calendar widget
//! navigation.

use happenings_shared::PayloadError;
use thiserror::Error;

/// Reasons a navigation click ends
/// without touching the page.
#[derive(Error, Debug)]
pub enum WidgetError {
  #[error("configuration error: {0}")]
  Config(String),

  #[error("request to {url} failed: {reason}")]
  Transport { url: String, reason: String },

  #[error("malformed response: {0}")]
  Decode(#[from] serde_json::Error),

  #[error("unexpected response shape: {0}")]
  Payload(#[from] PayloadError),

  #[error(
    "{family} response #{id} overtaken \
     by #{latest}"
  )]
  Stale {
    family: &'static str,
    id:     u64,
    latest: u64
  }
}

pub type WidgetResult<T> =
  Result<T, WidgetError>;

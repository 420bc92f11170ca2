use std::future::Future;

use crate::error::WidgetResult;

/// Asynchronous GET returning the
/// response body. Implementations
/// report non-success statuses as
/// [`crate::WidgetError::Transport`].
pub trait Transport {
  fn get_text(
    &self,
    url: &str
  ) -> impl Future<Output = WidgetResult<String>>;
}

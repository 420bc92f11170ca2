use std::future::Future;

use gloo::net::http::Request;
use happenings_core::{
  Transport,
  WidgetError,
  WidgetResult
};

/// `fetch`-backed GET. The AJAX header
/// makes the backend answer with JSON
/// instead of a full page.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

impl Transport for HttpTransport {
  fn get_text(
    &self,
    url: &str
  ) -> impl Future<Output = WidgetResult<String>>
  {
    fetch_text(url.to_string())
  }
}

async fn fetch_text(
  url: String
) -> WidgetResult<String> {
  let response = Request::get(&url)
    .header(
      "X-Requested-With",
      "XMLHttpRequest"
    )
    .header("Accept", "application/json")
    .send()
    .await
    .map_err(|error| {
      WidgetError::Transport {
        url:    url.clone(),
        reason: error.to_string()
      }
    })?;

  if !response.ok() {
    return Err(WidgetError::Transport {
      reason: format!(
        "{} {}",
        response.status(),
        response.status_text()
      ),
      url
    });
  }

  response.text().await.map_err(|error| {
    WidgetError::Transport {
      url,
      reason: error.to_string()
    }
  })
}

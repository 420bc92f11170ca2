//! Querystring construction for month
//! and day navigation.
//!
//! The backend encodes the active
//! filters into the prev/next anchors
//! it renders, so a shift mostly copies
//! those querystrings forward. The
//! builder only adds what the server
//! cannot know: the mini variant, the
//! month currently shown in the URL
//! path, and the "today" reset.

use crate::config::Endpoints;
use crate::context::NavigationContext;

pub const MINI_FLAG: &str =
  "cal_mini=true";
pub const IGNORE_FLAG: &str =
  "cal_ignore=true";

const FILTER_KEYS: [&str; 2] =
  ["cal_category", "cal_tag"];

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ShiftTrigger {
  Today,
  Prev,
  Next
}

impl ShiftTrigger {
  pub fn as_str(&self) -> &'static str {
    match self {
      | ShiftTrigger::Today => "today",
      | ShiftTrigger::Prev => "prev",
      | ShiftTrigger::Next => "next"
    }
  }
}

/// Backend view answering a month
/// shift.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Endpoint {
  CalendarAndList,
  Month,
  List
}

impl Endpoint {
  /// `None` when the page shows
  /// neither a calendar nor a list.
  pub fn select(
    has_calendar: bool,
    has_list: bool
  ) -> Option<Self> {
    match (has_calendar, has_list) {
      | (true, true) => {
        Some(Endpoint::CalendarAndList)
      }
      | (true, false) => {
        Some(Endpoint::Month)
      }
      | (false, true) => {
        Some(Endpoint::List)
      }
      | (false, false) => None
    }
  }

  pub fn path<'a>(
    &self,
    endpoints: &'a Endpoints
  ) -> &'a str {
    match self {
      | Endpoint::CalendarAndList => {
        &endpoints.calendar_and_list
      }
      | Endpoint::Month => &endpoints.month,
      | Endpoint::List => &endpoints.list
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct ShiftPlan {
  /// Always starts with `?`.
  pub query:            String,
  pub extra:            Vec<(&'static str, String)>,
  /// Set for `today`: the month list
  /// heading loses its month caption.
  pub reset_list_title: bool
}

impl ShiftPlan {
  /// Full request URL with the extra
  /// parameters URL-encoded.
  pub fn url(
    &self,
    endpoint: &str
  ) -> String {
    let mut url =
      format!("{endpoint}{}", self.query);
    for (key, value) in &self.extra {
      if !url.ends_with(['?', '&']) {
        url.push('&');
      }
      url.push_str(key);
      url.push('=');
      url.push_str(&urlencoding::encode(
        value
      ));
    }
    url
  }
}

/// Query part of an anchor href,
/// without the `?`. Missing or odd
/// hrefs degrade to an empty segment.
pub fn query_segment(
  href: Option<&str>
) -> &str {
  let href = href.unwrap_or_default();
  match href.split_once('?') {
    | Some((_, query)) => query,
    | None => href
  }
}

pub fn plan_shift(
  trigger: ShiftTrigger,
  context: &NavigationContext
) -> ShiftPlan {
  let mut query = String::from("?");
  if context.mini {
    query.push_str(MINI_FLAG);
    query.push('&');
  }

  match trigger {
    | ShiftTrigger::Today => {
      let prev = query_segment(
        context.prev_href.as_deref()
      );
      for item in prev.split('&') {
        let name = item
          .split('=')
          .next()
          .unwrap_or_default();
        if FILTER_KEYS.contains(&name) {
          query.push_str(item);
          query.push('&');
        }
      }
      query.push_str(IGNORE_FLAG);

      ShiftPlan {
        query,
        extra: Vec::new(),
        reset_list_title: true
      }
    }
    | ShiftTrigger::Prev
    | ShiftTrigger::Next => {
      let href =
        if trigger == ShiftTrigger::Prev {
          context.prev_href.as_deref()
        } else {
          context.next_href.as_deref()
        };
      query.push_str(query_segment(href));

      let mut extra = Vec::new();
      let ignores_date = query
        .split('&')
        .any(|item| item == IGNORE_FLAG);
      if !ignores_date
        && let Some((year, month)) =
          context.path_year_month()
      {
        extra.push((
          "cal_year",
          year.to_string()
        ));
        extra.push((
          "cal_month",
          month.to_string()
        ));
      }

      ShiftPlan {
        query,
        extra,
        reset_list_title: false
      }
    }
  }
}

/// URL for a day-view link, carrying
/// the filters shown on the day page.
pub fn day_url(
  href: &str,
  category: Option<&str>,
  tag: Option<&str>
) -> String {
  let mut url = href.to_string();
  if let Some(category) = category {
    url.push_str("&cal_category=");
    url.push_str(category);
  }
  if let Some(tag) = tag {
    url.push_str("&cal_tag=");
    url.push_str(tag);
  }
  url
}

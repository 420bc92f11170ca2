use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  error,
  info
};

use crate::error::{
  WidgetError,
  WidgetResult
};

const BUNDLED_WIDGET_TOML: &str =
  include_str!("../assets/widget.toml");

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct WidgetConfig {
  pub version:   u32,
  pub selectors: Selectors,
  pub endpoints: Endpoints,
  pub labels:    Labels,
  pub behavior:  Behavior
}

/// CSS selectors the widget binds to
/// and reads from. `mini_class` is a
/// bare class name, every other entry
/// is a selector.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct Selectors {
  pub calendar:       String,
  pub mini_class:     String,
  pub list_region:    String,
  pub list:           String,
  pub month_and_year: String,
  pub list_title:     String,
  pub today:          String,
  pub prev:           String,
  pub next:           String,
  pub day_link:       String,
  pub day_list:       String,
  pub day_prev:       String,
  pub day_next:       String,
  pub day_year:       String,
  pub day_month:      String,
  pub day_day:        String,
  pub day_category:   String,
  pub day_tag:        String,
  pub open_popover:   String,
  pub event:          String,
  pub event_anchor:   String
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct Endpoints {
  pub calendar_and_list: String,
  pub month:             String,
  pub list:              String,
  pub event_link:        String
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct Labels {
  pub list_title: String,
  pub no_events:  String
}

#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct Behavior {
  /// Drop responses that were
  /// overtaken by a newer request of
  /// the same kind.
  pub sequence_responses: bool
}

impl Default for WidgetConfig {
  fn default() -> Self {
    Self {
      version:   1,
      selectors: Selectors::default(),
      endpoints: Endpoints::default(),
      labels:    Labels::default(),
      behavior:  Behavior::default()
    }
  }
}

impl Default for Selectors {
  fn default() -> Self {
    Self {
      calendar:       "#event-calendar"
        .to_string(),
      mini_class:     "calendar-mini"
        .to_string(),
      list_region:    "#event-list"
        .to_string(),
      list:           ".calendar-list"
        .to_string(),
      month_and_year: "#month-and-year"
        .to_string(),
      list_title:
        "#month-list-events-title"
          .to_string(),
      today:          "#cal-today-btn"
        .to_string(),
      prev:           ".month-arrow-left"
        .to_string(),
      next:           ".month-arrow-right"
        .to_string(),
      day_link:       ".cal-day"
        .to_string(),
      day_list:       ".day-event-list"
        .to_string(),
      day_prev:       "#cal-day-prev"
        .to_string(),
      day_next:       "#cal-day-next"
        .to_string(),
      day_year:       "#cal-day-year"
        .to_string(),
      day_month:      "#cal-day-month"
        .to_string(),
      day_day:        "#cal-day-day"
        .to_string(),
      day_category:
        "#cal-day-category".to_string(),
      day_tag:        "#cal-day-tag"
        .to_string(),
      open_popover:   ".popover"
        .to_string(),
      event:          ".calendar-event"
        .to_string(),
      event_anchor:   ".event-anch"
        .to_string()
    }
  }
}

impl Default for Endpoints {
  fn default() -> Self {
    Self {
      calendar_and_list:
        "/calendar/cal-and-list/shift/"
          .to_string(),
      month: "/calendar/month/shift/"
        .to_string(),
      list:
        "/calendar/event-list/shift/"
          .to_string(),
      event_link: "/calendar/event/"
        .to_string()
    }
  }
}

impl Default for Labels {
  fn default() -> Self {
    Self {
      list_title: "Events".to_string(),
      no_events:  "Oops.. No events!"
        .to_string()
    }
  }
}

impl Selectors {
  /// Anchor carried by a navigation
  /// control, e.g. the `<a>` inside
  /// `.month-arrow-left`.
  pub fn anchor_of(
    control: &str
  ) -> String {
    format!("{control} > a")
  }
}

impl WidgetConfig {
  pub fn from_toml_str(
    text: &str
  ) -> WidgetResult<Self> {
    let mut config =
      toml::from_str::<WidgetConfig>(
        text
      )
      .map_err(|error| {
        WidgetError::Config(
          error.to_string()
        )
      })?;
    config.sanitize();
    Ok(config)
  }

  /// Configuration shipped with the
  /// crate. Falls back to compiled
  /// defaults if the bundled file is
  /// unreadable.
  pub fn bundled() -> Self {
    match Self::from_toml_str(
      BUNDLED_WIDGET_TOML
    ) {
      | Ok(config) => {
        info!(
          version = config.version,
          sequence_responses = config
            .behavior
            .sequence_responses,
          "loaded widget config"
        );
        config
      }
      | Err(error) => {
        error!(%error, "failed parsing bundled widget config; using defaults");
        Self::default()
      }
    }
  }

  /// Blank values fall back to their
  /// defaults so a host overriding a
  /// key with `""` cannot unbind the
  /// widget.
  pub fn sanitize(&mut self) {
    if self.version == 0 {
      self.version = 1;
    }

    let selectors = Selectors::default();
    let s = &mut self.selectors;
    for (value, fallback) in [
      (&mut s.calendar, selectors.calendar),
      (
        &mut s.mini_class,
        selectors.mini_class
      ),
      (
        &mut s.list_region,
        selectors.list_region
      ),
      (&mut s.list, selectors.list),
      (
        &mut s.month_and_year,
        selectors.month_and_year
      ),
      (
        &mut s.list_title,
        selectors.list_title
      ),
      (&mut s.today, selectors.today),
      (&mut s.prev, selectors.prev),
      (&mut s.next, selectors.next),
      (&mut s.day_link, selectors.day_link),
      (&mut s.day_list, selectors.day_list),
      (&mut s.day_prev, selectors.day_prev),
      (&mut s.day_next, selectors.day_next),
      (&mut s.day_year, selectors.day_year),
      (
        &mut s.day_month,
        selectors.day_month
      ),
      (&mut s.day_day, selectors.day_day),
      (
        &mut s.day_category,
        selectors.day_category
      ),
      (&mut s.day_tag, selectors.day_tag),
      (
        &mut s.open_popover,
        selectors.open_popover
      ),
      (&mut s.event, selectors.event),
      (
        &mut s.event_anchor,
        selectors.event_anchor
      )
    ] {
      fill_blank(value, fallback);
    }

    let endpoints = Endpoints::default();
    let e = &mut self.endpoints;
    for (value, fallback) in [
      (
        &mut e.calendar_and_list,
        endpoints.calendar_and_list
      ),
      (&mut e.month, endpoints.month),
      (&mut e.list, endpoints.list),
      (
        &mut e.event_link,
        endpoints.event_link
      )
    ] {
      fill_blank(value, fallback);
    }

    let labels = Labels::default();
    fill_blank(
      &mut self.labels.list_title,
      labels.list_title
    );
    fill_blank(
      &mut self.labels.no_events,
      labels.no_events
    );
  }
}

fn fill_blank(
  value: &mut String,
  fallback: String
) {
  if value.trim().is_empty() {
    *value = fallback;
  }
}

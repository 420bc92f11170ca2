//! Wire payloads exchanged with the happenings calendar backend.
//!
//! Field names follow the backend serializer output. Every payload is
//! decoded once at the response boundary and checked with
//! [`Validate::validate`] before anything is rendered from it.

use std::fmt;

use indexmap::IndexMap;
use serde::{
  Deserialize,
  Serialize
};
use thiserror::Error;

/// Scalar the backend sends either as
/// a JSON number or as a string
/// (primary keys, day offsets, date
/// parts).
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(untagged)]
pub enum Token {
  Int(i64),
  Text(String)
}

impl Token {
  pub fn is_blank(&self) -> bool {
    match self {
      | Token::Int(_) => false,
      | Token::Text(text) => {
        text.trim().is_empty()
      }
    }
  }
}

impl fmt::Display for Token {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    match self {
      | Token::Int(value) => {
        write!(f, "{value}")
      }
      | Token::Text(value) => {
        f.write_str(value)
      }
    }
  }
}

impl From<i64> for Token {
  fn from(value: i64) -> Self {
    Token::Int(value)
  }
}

impl From<&str> for Token {
  fn from(value: &str) -> Self {
    Token::Text(value.to_string())
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct EventFields {
  pub title: String,
  #[serde(default)]
  pub background_color: Option<String>,
  #[serde(default)]
  pub background_color_custom:
    Option<String>,
  #[serde(default)]
  pub font_color: Option<String>,
  #[serde(default)]
  pub font_color_custom: Option<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct CalendarEvent {
  pub pk:      Token,
  /// Short weekday name, only sent
  /// with month event lists.
  #[serde(default)]
  pub weekday: String,
  pub fields:  EventFields
}

impl CalendarEvent {
  pub fn title(&self) -> &str {
    &self.fields.title
  }

  /// CSS background color: the custom
  /// color when set, the default
  /// otherwise.
  pub fn background(&self) -> String {
    resolve_color(
      self
        .fields
        .background_color_custom
        .as_deref(),
      self
        .fields
        .background_color
        .as_deref()
    )
  }

  pub fn font(&self) -> String {
    resolve_color(
      self
        .fields
        .font_color_custom
        .as_deref(),
      self.fields.font_color.as_deref()
    )
  }
}

/// Colors travel as bare hex digits.
/// With neither value set the result
/// is a lone `#`, which browsers
/// ignore.
pub fn resolve_color(
  custom: Option<&str>,
  fallback: Option<&str>
) -> String {
  let hex = custom
    .filter(|value| !value.is_empty())
    .or(fallback)
    .unwrap_or_default();
  format!("#{hex}")
}

/// Events of a month grouped by day
/// number, in the order the server
/// wrote them.
pub type DayEvents =
  IndexMap<String, Vec<CalendarEvent>>;

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct MonthPayload {
  pub calendar:       String,
  #[serde(default)]
  pub month_and_year: Option<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct EventListPayload {
  /// Abbreviated month name shown in
  /// each date badge.
  pub month:  String,
  pub events: DayEvents
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct MonthAndListPayload {
  pub calendar:       String,
  #[serde(default)]
  pub month_and_year: Option<String>,
  pub month:          String,
  pub events:         DayEvents
}

impl MonthAndListPayload {
  pub fn split(
    self
  ) -> (MonthPayload, EventListPayload)
  {
    (
      MonthPayload {
        calendar:       self.calendar,
        month_and_year: self
          .month_and_year
      },
      EventListPayload {
        month:  self.month,
        events: self.events
      }
    )
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct DayPayload {
  pub events:     Vec<CalendarEvent>,
  pub prev:       Token,
  #[serde(rename = "nxt", alias = "next")]
  pub next:       Token,
  pub year:       Token,
  pub month:      Token,
  pub day:        Token,
  #[serde(default)]
  pub month_name: Option<String>
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
  #[error("event has an empty primary key")]
  EmptyPrimaryKey,

  #[error(
    "event {pk} on day {day} has no \
     weekday"
  )]
  MissingWeekday { day: String, pk: String },

  #[error("'{0}' is not a day of the month")]
  BadDayKey(String),

  #[error("day navigation token '{0}' is empty")]
  EmptyDayToken(&'static str)
}

/// Shape checks that serde's
/// structural decoding cannot express.
pub trait Validate {
  fn validate(
    &self
  ) -> Result<(), PayloadError>;
}

fn validate_event(
  event: &CalendarEvent
) -> Result<(), PayloadError> {
  if event.pk.is_blank() {
    return Err(
      PayloadError::EmptyPrimaryKey
    );
  }
  Ok(())
}

fn validate_day_events(
  events: &DayEvents
) -> Result<(), PayloadError> {
  for (day, list) in events {
    match day.parse::<u8>() {
      | Ok(1..=31) => {}
      | _ => {
        return Err(
          PayloadError::BadDayKey(
            day.clone()
          )
        );
      }
    }

    for event in list {
      validate_event(event)?;
      if event.weekday.trim().is_empty()
      {
        return Err(
          PayloadError::MissingWeekday {
            day: day.clone(),
            pk:  event.pk.to_string()
          }
        );
      }
    }
  }
  Ok(())
}

impl Validate for MonthPayload {
  fn validate(
    &self
  ) -> Result<(), PayloadError> {
    Ok(())
  }
}

impl Validate for EventListPayload {
  fn validate(
    &self
  ) -> Result<(), PayloadError> {
    validate_day_events(&self.events)
  }
}

impl Validate for MonthAndListPayload {
  fn validate(
    &self
  ) -> Result<(), PayloadError> {
    validate_day_events(&self.events)
  }
}

impl Validate for DayPayload {
  fn validate(
    &self
  ) -> Result<(), PayloadError> {
    if self.prev.is_blank() {
      return Err(
        PayloadError::EmptyDayToken(
          "prev"
        )
      );
    }
    if self.next.is_blank() {
      return Err(
        PayloadError::EmptyDayToken(
          "nxt"
        )
      );
    }
    self
      .events
      .iter()
      .try_for_each(validate_event)
  }
}

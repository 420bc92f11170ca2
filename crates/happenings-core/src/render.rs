//! Turns decoded payloads into page
//! fragments. The `*_items` builders
//! are pure; the `render_*` functions
//! apply them to a [`Page`]. Containers
//! are always cleared first, so
//! rendering the same payload twice
//! leaves the same subtree.

use happenings_shared::{
  CalendarEvent,
  DayPayload,
  EventListPayload,
  MonthPayload,
  Token
};
use tracing::debug;

use crate::config::WidgetConfig;
use crate::fragment::{
  Element,
  Markup
};
use crate::page::Page;

pub fn event_href(
  prefix: &str,
  pk: &Token
) -> String {
  format!("{prefix}{pk}")
}

fn event_link(
  event: &CalendarEvent,
  config: &WidgetConfig
) -> Element {
  Element::new("a")
    .attr(
      "href",
      event_href(
        &config.endpoints.event_link,
        &event.pk
      )
    )
    .text(event.title())
}

fn date_badge(
  month: &str,
  day: &str,
  weekday: &str
) -> Element {
  Element::new("div")
    .class("date-widget")
    .child(
      Element::new("div")
        .class("widget-month")
        .text(month)
    )
    .child(
      Element::new("div")
        .class("widget-day")
        .text(day)
    )
    .child(
      Element::new("div")
        .class("widget-year")
        .text(weekday)
    )
}

pub fn event_list_items(
  payload: &EventListPayload,
  config: &WidgetConfig
) -> Vec<Markup> {
  let mut items: Vec<Markup> = Vec::new();
  for (day, events) in &payload.events {
    for event in events {
      let background = event.background();
      let font = event.font();

      items.push(
        Element::new("li")
          .class("month-event")
          .attr(
            "style",
            format!(
              "background:{background}; \
               color:{font};"
            )
          )
          .child(date_badge(
            &payload.month,
            day,
            &event.weekday
          ))
          .child(
            Element::new("div")
              .class("month-event-title")
              .child(
                event_link(event, config)
                  .attr(
                    "style",
                    format!("color:{font};")
                  )
              )
          )
          .into()
      );
    }
  }
  items
}

pub fn day_items(
  payload: &DayPayload,
  config: &WidgetConfig
) -> Vec<Markup> {
  if payload.events.is_empty() {
    return vec![
      Element::new("li")
        .text(config.labels.no_events.as_str())
        .into(),
    ];
  }

  payload
    .events
    .iter()
    .map(|event| {
      Element::new("li")
        .child(event_link(event, config))
        .into()
    })
    .collect()
}

/// Month grid: the server's calendar
/// markup goes in verbatim.
pub fn render_month<P: Page>(
  page: &P,
  payload: &MonthPayload,
  config: &WidgetConfig
) {
  let selectors = &config.selectors;
  page.set_inner_html(
    &selectors.calendar,
    &payload.calendar
  );

  if let Some(caption) =
    payload.month_and_year.as_deref()
    && page.exists(&selectors.month_and_year)
  {
    page.set_text(
      &selectors.month_and_year,
      caption
    );
  }
}

pub fn render_event_list<P: Page>(
  page: &P,
  payload: &EventListPayload,
  config: &WidgetConfig
) {
  let items =
    event_list_items(payload, config);
  debug!(
    items = items.len(),
    days = payload.events.len(),
    "rendering month event list"
  );
  page.replace_children(
    &config.selectors.list,
    &items
  );
}

pub fn render_day<P: Page>(
  page: &P,
  payload: &DayPayload,
  config: &WidgetConfig
) {
  let selectors = &config.selectors;
  page.replace_children(
    &selectors.day_list,
    &day_items(payload, config)
  );

  page.set_attr(
    &selectors.day_prev,
    "href",
    &format!("?cal_prev={}", payload.prev)
  );
  page.set_attr(
    &selectors.day_next,
    "href",
    &format!("?cal_next={}", payload.next)
  );
  page.set_text(
    &selectors.day_year,
    &payload.year.to_string()
  );
  page.set_text(
    &selectors.day_month,
    &payload.month.to_string()
  );
  page.set_text(
    &selectors.day_day,
    &payload.day.to_string()
  );
}

#[cfg(test)]
mod tests {
  use happenings_shared::{
    DayEvents,
    EventFields
  };
  use pretty_assertions::assert_eq;

  use super::*;
  use crate::fragment::to_html;

  fn event(
    pk: i64,
    title: &str,
    custom_bg: Option<&str>
  ) -> CalendarEvent {
    CalendarEvent {
      pk:      Token::Int(pk),
      weekday: "Sat".to_string(),
      fields:  EventFields {
        title: title.to_string(),
        background_color: Some(
          "eeeeee".to_string()
        ),
        background_color_custom: custom_bg
          .map(str::to_string),
        font_color: Some(
          "111111".to_string()
        ),
        font_color_custom: None
      }
    }
  }

  fn day_payload(
    events: Vec<CalendarEvent>
  ) -> DayPayload {
    DayPayload {
      events,
      prev: Token::Int(-1),
      next: Token::Int(1),
      year: Token::Int(2024),
      month: Token::Int(3),
      day: Token::Int(9),
      month_name: Some("March".to_string())
    }
  }

  #[test]
  fn list_item_carries_badge_colors_and_link()
  {
    let mut events = DayEvents::new();
    events.insert(
      "9".to_string(),
      vec![event(4, "Jazz night", Some("ff0000"))]
    );
    let payload = EventListPayload {
      month: "Mar".to_string(),
      events
    };

    let items = event_list_items(
      &payload,
      &WidgetConfig::default()
    );

    assert_eq!(
      to_html(&items),
      "<li class=\"month-event\" \
       style=\"background:#ff0000; color:#111111;\">\
       <div class=\"date-widget\">\
       <div class=\"widget-month\">Mar</div>\
       <div class=\"widget-day\">9</div>\
       <div class=\"widget-year\">Sat</div>\
       </div>\
       <div class=\"month-event-title\">\
       <a href=\"/calendar/event/4\" style=\"color:#111111;\">\
       Jazz night</a></div></li>"
    );
  }

  #[test]
  fn list_follows_payload_day_order() {
    let mut events = DayEvents::new();
    events.insert(
      "20".to_string(),
      vec![event(1, "late", None)]
    );
    events.insert(
      "3".to_string(),
      vec![
        event(2, "early a", None),
        event(3, "early b", None),
      ]
    );
    let payload = EventListPayload {
      month: "Mar".to_string(),
      events
    };

    let titles: Vec<String> =
      event_list_items(
        &payload,
        &WidgetConfig::default()
      )
      .iter()
      .map(|item| match item {
        | Markup::Element(li) => li.children
          [1]
          .text_content(),
        | Markup::Text(text) => text.clone()
      })
      .collect();

    assert_eq!(
      titles,
      ["late", "early a", "early b"]
    );
  }

  #[test]
  fn list_uses_default_colors_without_custom()
  {
    let mut events = DayEvents::new();
    events.insert(
      "1".to_string(),
      vec![event(1, "x", Some(""))]
    );
    let payload = EventListPayload {
      month: "Mar".to_string(),
      events
    };

    let items = event_list_items(
      &payload,
      &WidgetConfig::default()
    );
    let Markup::Element(li) = &items[0] else {
      panic!("expected element");
    };

    assert_eq!(
      li.get_attr("style"),
      Some(
        "background:#eeeeee; \
         color:#111111;"
      )
    );
  }

  #[test]
  fn empty_day_renders_one_placeholder() {
    let items = day_items(
      &day_payload(vec![]),
      &WidgetConfig::default()
    );

    assert_eq!(
      to_html(&items),
      "<li>Oops.. No events!</li>"
    );
  }

  #[test]
  fn day_renders_one_link_per_event() {
    let items = day_items(
      &day_payload(vec![
        event(1, "a", None),
        event(2, "b", None),
        event(3, "c", None),
      ]),
      &WidgetConfig::default()
    );

    assert_eq!(items.len(), 3);
    assert_eq!(
      to_html(&items[1..2]),
      "<li><a href=\"/calendar/event/2\">b</a></li>"
    );
  }

  #[test]
  fn event_titles_are_escaped() {
    let items = day_items(
      &day_payload(vec![event(
        1,
        "<b>bold</b>",
        None
      )]),
      &WidgetConfig::default()
    );

    assert_eq!(
      to_html(&items),
      "<li><a href=\"/calendar/event/1\">\
       &lt;b&gt;bold&lt;/b&gt;</a></li>"
    );
  }
}

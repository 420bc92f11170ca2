use happenings_shared::{
  DayPayload,
  EventListPayload,
  MonthAndListPayload,
  MonthPayload,
  Validate
};
use serde::de::DeserializeOwned;
use tracing::{
  debug,
  info
};

use crate::config::WidgetConfig;
use crate::context::NavigationContext;
use crate::error::WidgetResult;
use crate::page::Page;
use crate::popover::{
  PopoverCapability,
  activate_popovers
};
use crate::query::{
  Endpoint,
  ShiftTrigger,
  day_url,
  plan_shift
};
use crate::render::{
  render_day,
  render_event_list,
  render_month
};
use crate::sequence::RequestSequencer;
use crate::transport::Transport;

/// Handles the two navigation triggers
/// of the widget: day links and month
/// shifts. Every call reads the page
/// afresh; the only state kept between
/// clicks is the optional request
/// sequencing.
pub struct NavigationController<P, T, C> {
  page:           P,
  transport:      T,
  popover:        C,
  config:         WidgetConfig,
  day_requests:   RequestSequencer,
  month_requests: RequestSequencer
}

impl<P, T, C> NavigationController<P, T, C>
where
  P: Page,
  T: Transport,
  C: PopoverCapability<P::Element>
{
  pub fn new(
    page: P,
    transport: T,
    popover: C,
    config: WidgetConfig
  ) -> Self {
    let sequenced =
      config.behavior.sequence_responses;
    Self {
      page,
      transport,
      popover,
      config,
      day_requests: RequestSequencer::new(
        "day", sequenced
      ),
      month_requests:
        RequestSequencer::new(
          "month", sequenced
        )
    }
  }

  pub fn page(&self) -> &P {
    &self.page
  }

  pub fn transport(&self) -> &T {
    &self.transport
  }

  pub fn popover(&self) -> &C {
    &self.popover
  }

  pub fn config(&self) -> &WidgetConfig {
    &self.config
  }

  pub fn popovers_available(&self) -> bool {
    self.popover.available()
  }

  pub fn activate_popovers(&self) -> usize {
    activate_popovers(
      &self.page,
      &self.popover,
      &self.config.selectors.event
    )
  }

  pub fn context(&self) -> NavigationContext {
    NavigationContext::read(
      &self.page,
      &self.config.selectors
    )
  }

  /// Loads the day behind `href` into
  /// the day view. On any failure the
  /// page is left as it was.
  #[tracing::instrument(skip(self))]
  pub async fn day_link_clicked(
    &self,
    href: &str
  ) -> WidgetResult<()> {
    let context = self.context();
    let url = day_url(
      href,
      context.category.as_deref(),
      context.tag.as_deref()
    );
    debug!(%url, "requesting day view");

    let ticket = self.day_requests.issue();
    let body =
      self.transport.get_text(&url).await?;
    self.day_requests.check(ticket)?;

    let payload: DayPayload = decode(&body)?;
    render_day(
      &self.page,
      &payload,
      &self.config
    );
    info!(
      events = payload.events.len(),
      prev = %payload.prev,
      next = %payload.next,
      "day view updated"
    );
    Ok(())
  }

  /// Moves the month calendar and/or
  /// event list. Returns the endpoint
  /// that answered, `None` when the
  /// page has nothing to update.
  #[tracing::instrument(skip(self))]
  pub async fn month_shift_clicked(
    &self,
    trigger: ShiftTrigger
  ) -> WidgetResult<Option<Endpoint>> {
    let selectors = &self.config.selectors;
    self
      .page
      .remove_all(&selectors.open_popover);

    let context = self.context();
    let plan = plan_shift(trigger, &context);
    if plan.reset_list_title
      && self.page.exists(&selectors.list_title)
    {
      self.page.set_text(
        &selectors.list_title,
        &self.config.labels.list_title
      );
    }

    let Some(endpoint) = context.endpoint()
    else {
      debug!(
        "no calendar or list on page; \
         skipping shift"
      );
      return Ok(None);
    };

    let url = plan.url(
      endpoint.path(&self.config.endpoints)
    );
    debug!(%url, ?endpoint, "requesting month shift");

    let ticket = self.month_requests.issue();
    let body =
      self.transport.get_text(&url).await?;
    self.month_requests.check(ticket)?;

    match endpoint {
      | Endpoint::CalendarAndList => {
        let payload: MonthAndListPayload =
          decode(&body)?;
        let (month, list) = payload.split();
        render_month(
          &self.page,
          &month,
          &self.config
        );
        render_event_list(
          &self.page,
          &list,
          &self.config
        );
      }
      | Endpoint::Month => {
        let payload: MonthPayload =
          decode(&body)?;
        render_month(
          &self.page,
          &payload,
          &self.config
        );
      }
      | Endpoint::List => {
        let payload: EventListPayload =
          decode(&body)?;
        render_event_list(
          &self.page,
          &payload,
          &self.config
        );
      }
    }

    self.activate_popovers();
    info!(?endpoint, "month view updated");
    Ok(Some(endpoint))
  }
}

fn decode<T>(body: &str) -> WidgetResult<T>
where
  T: DeserializeOwned + Validate
{
  let payload: T =
    serde_json::from_str(body)?;
  payload.validate()?;
  Ok(payload)
}

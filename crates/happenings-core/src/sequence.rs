use std::cell::Cell;

use crate::error::{
  WidgetError,
  WidgetResult
};

/// Monotonic request ids for one kind
/// of navigation. When disabled every
/// response is accepted and the last
/// one to arrive wins.
#[derive(Debug)]
pub struct RequestSequencer {
  family:  &'static str,
  enabled: bool,
  latest:  Cell<u64>
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct Ticket(u64);

impl RequestSequencer {
  pub fn new(
    family: &'static str,
    enabled: bool
  ) -> Self {
    Self {
      family,
      enabled,
      latest: Cell::new(0)
    }
  }

  pub fn issue(&self) -> Ticket {
    let id = self.latest.get() + 1;
    self.latest.set(id);
    Ticket(id)
  }

  pub fn check(
    &self,
    ticket: Ticket
  ) -> WidgetResult<()> {
    let latest = self.latest.get();
    if self.enabled && ticket.0 != latest
    {
      return Err(WidgetError::Stale {
        family: self.family,
        id: ticket.0,
        latest
      });
    }
    Ok(())
  }
}

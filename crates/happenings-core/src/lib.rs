//! Navigation and rendering for the happenings calendar widget.
//!
//! The widget enhances server-rendered calendar pages: clicking a month
//! arrow, the "today" button or a day link fetches JSON from the backend
//! and swaps the month grid, the event list or the day list in place.
//! Everything here is host-agnostic; the browser glue lives in
//! `happenings_widget` and plugs in through [`Page`], [`Transport`] and
//! [`PopoverCapability`].

pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod fragment;
pub mod page;
pub mod popover;
pub mod query;
pub mod render;
pub mod sequence;
pub mod transport;

pub use config::WidgetConfig;
pub use context::NavigationContext;
pub use controller::NavigationController;
pub use error::{
  WidgetError,
  WidgetResult
};
pub use page::Page;
pub use popover::{
  NoPopover,
  PopoverCapability
};
pub use query::{
  Endpoint,
  ShiftTrigger
};
pub use transport::Transport;

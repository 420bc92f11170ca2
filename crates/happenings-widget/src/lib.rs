//! Browser entry point of the happenings calendar widget.
//!
//! ```js
//! import init, { initCalendarWidget } from "./happenings_widget.js";
//!
//! await init();
//! const widget = initCalendarWidget(
//!   document.querySelector("#calendar-root"),
//!   { behavior: { sequence_responses: true } },
//!   (el) => $(el).popover({ trigger: "click", html: true }),
//! );
//! // later
//! widget.dispose();
//! ```

mod dom;
mod popover;
mod transport;

use std::rc::Rc;
use std::sync::Once;

use gloo::events::{
  EventListener,
  EventListenerOptions
};
use happenings_core::config::Selectors;
use happenings_core::{
  NavigationController,
  ShiftTrigger,
  WidgetConfig
};
use tracing::{
  info,
  warn
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
  Element,
  Event,
  HtmlAnchorElement
};

pub use dom::DomPage;
pub use popover::JsPopover;
pub use transport::HttpTransport;

type Controller = NavigationController<
  DomPage,
  HttpTransport,
  JsPopover
>;

static INIT_LOGGING: Once = Once::new();

fn init_logging() {
  INIT_LOGGING.call_once(|| {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();
  });
}

/// Live widget instance. Dropping or
/// disposing it detaches the click
/// handler; the page keeps whatever it
/// shows.
#[wasm_bindgen]
pub struct WidgetHandle {
  listener: Option<EventListener>
}

#[wasm_bindgen]
impl WidgetHandle {
  pub fn dispose(&mut self) {
    if self.listener.take().is_some() {
      info!("calendar widget disposed");
    }
  }

  #[wasm_bindgen(getter)]
  pub fn active(&self) -> bool {
    self.listener.is_some()
  }
}

/// Binds the widget to `root`. `config`
/// may be omitted, a partial config
/// object, or TOML text; `popover` is
/// described on [`JsPopover`].
#[wasm_bindgen(js_name = initCalendarWidget)]
pub fn init_calendar_widget(
  root: Element,
  config: JsValue,
  popover: JsValue
) -> Result<WidgetHandle, JsValue> {
  init_logging();

  let config = load_config(&config)?;
  let page = DomPage::new(root.clone())
    .ok_or_else(|| {
      JsValue::from_str(
        "calendar root is not attached \
         to a document"
      )
    })?;
  let controller = Rc::new(
    NavigationController::new(
      page,
      HttpTransport,
      JsPopover::from_js(&popover),
      config
    )
  );

  let enhanced = controller.activate_popovers();
  let listener = bind_clicks(&root, controller);
  info!(enhanced, "calendar widget initialised");

  Ok(WidgetHandle {
    listener: Some(listener)
  })
}

fn load_config(
  value: &JsValue
) -> Result<WidgetConfig, JsValue> {
  if value.is_undefined() || value.is_null() {
    return Ok(WidgetConfig::bundled());
  }

  if let Some(text) = value.as_string() {
    return WidgetConfig::from_toml_str(&text)
      .map_err(|error| {
        JsValue::from_str(&error.to_string())
      });
  }

  let mut config: WidgetConfig =
    serde_wasm_bindgen::from_value(
      value.clone()
    )
    .map_err(|error| {
      JsValue::from_str(&format!(
        "invalid widget config: {error}"
      ))
    })?;
  config.sanitize();
  Ok(config)
}

/// One delegated listener on the root
/// covers every control, including the
/// ones replaced by later renders.
fn bind_clicks(
  root: &Element,
  controller: Rc<Controller>
) -> EventListener {
  EventListener::new_with_options(
    root,
    "click",
    EventListenerOptions::enable_prevent_default(),
    move |event| on_click(&controller, event)
  )
}

fn on_click(
  controller: &Rc<Controller>,
  event: &Event
) {
  let Some(target) = event
    .target()
    .and_then(|target| {
      target.dyn_into::<Element>().ok()
    })
  else {
    return;
  };
  let selectors = &controller.config().selectors;

  if let Some(link) =
    closest(&target, &selectors.day_link)
  {
    event.prevent_default();
    let href = link
      .dyn_ref::<HtmlAnchorElement>()
      .map(HtmlAnchorElement::href)
      .or_else(|| link.get_attribute("href"))
      .unwrap_or_default();
    let controller = Rc::clone(controller);
    spawn_local(async move {
      if let Err(error) = controller
        .day_link_clicked(&href)
        .await
      {
        warn!(%error, "day view left unchanged");
      }
    });
    return;
  }

  if let Some(trigger) =
    shift_trigger(&target, selectors)
  {
    event.prevent_default();
    let controller = Rc::clone(controller);
    spawn_local(async move {
      if let Err(error) = controller
        .month_shift_clicked(trigger)
        .await
      {
        warn!(%error, "month view left unchanged");
      }
    });
    return;
  }

  if controller.popovers_available()
    && closest(&target, &selectors.event_anchor)
      .is_some()
  {
    event.prevent_default();
  }
}

fn shift_trigger(
  target: &Element,
  selectors: &Selectors
) -> Option<ShiftTrigger> {
  [
    (&selectors.today, ShiftTrigger::Today),
    (&selectors.prev, ShiftTrigger::Prev),
    (&selectors.next, ShiftTrigger::Next)
  ]
  .into_iter()
  .find_map(|(selector, trigger)| {
    closest(target, selector).map(|_| trigger)
  })
}

fn closest(
  target: &Element,
  selector: &str
) -> Option<Element> {
  target.closest(selector).ok().flatten()
}

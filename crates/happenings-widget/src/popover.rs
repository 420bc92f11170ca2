use happenings_core::PopoverCapability;
use js_sys::{
  Function,
  Reflect
};
use tracing::warn;
use wasm_bindgen::{
  JsCast,
  JsValue
};
use web_sys::Element;

/// Popover support handed in by the
/// host page: either a function taking
/// the event element, or an object with
/// such an `attach` method. With
/// neither, popovers are disabled.
///
/// A bootstrap page would pass
/// `el => $(el).popover({trigger: "click", html: true})`.
#[derive(Debug, Clone, Default)]
pub struct JsPopover {
  attach: Option<Function>
}

impl JsPopover {
  pub fn from_js(value: &JsValue) -> Self {
    if value.is_undefined() || value.is_null()
    {
      return Self::default();
    }

    if let Some(function) =
      value.dyn_ref::<Function>()
    {
      return Self {
        attach: Some(function.clone())
      };
    }

    let attach = Reflect::get(
      value,
      &JsValue::from_str("attach")
    )
    .ok()
    .and_then(|method| {
      method.dyn_into::<Function>().ok()
    });
    if attach.is_none() {
      warn!(
        "popover capability has no attach \
         function; popovers disabled"
      );
    }
    Self { attach }
  }
}

impl PopoverCapability<Element> for JsPopover {
  fn available(&self) -> bool {
    self.attach.is_some()
  }

  fn attach(&self, element: &Element) {
    let Some(attach) = &self.attach else {
      return;
    };
    if let Err(error) =
      attach.call1(&JsValue::NULL, element)
    {
      warn!(?error, "popover attach failed");
    }
  }
}

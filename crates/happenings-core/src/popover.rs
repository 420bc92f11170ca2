use tracing::debug;

use crate::page::Page;

/// Rich popover support offered by the
/// host page, e.g. a bootstrap popover
/// plugin.
pub trait PopoverCapability<E> {
  fn available(&self) -> bool;

  /// Enhances one event element. Must
  /// tolerate elements that were
  /// enhanced before.
  fn attach(&self, element: &E);
}

/// Default capability: the page has no
/// popover plugin.
#[derive(
  Debug, Clone, Copy, Default,
)]
pub struct NoPopover;

impl<E> PopoverCapability<E> for NoPopover {
  fn available(&self) -> bool {
    false
  }

  fn attach(&self, _element: &E) {}
}

/// Attaches popovers to every element
/// matching `selector` and returns how
/// many were enhanced. A no-op without
/// the capability.
pub fn activate_popovers<P, C>(
  page: &P,
  popover: &C,
  selector: &str
) -> usize
where
  P: Page,
  C: PopoverCapability<P::Element>
{
  if !popover.available() {
    return 0;
  }

  let elements = page.query_all(selector);
  for element in &elements {
    popover.attach(element);
  }
  debug!(
    count = elements.len(),
    selector,
    "activated event popovers"
  );
  elements.len()
}

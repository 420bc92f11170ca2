use crate::config::Selectors;
use crate::page::Page;
use crate::query::Endpoint;

/// Navigation state derived from the
/// page on every click. Nothing here
/// outlives the click that read it.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct NavigationContext {
  pub mini:         bool,
  pub has_calendar: bool,
  pub has_list:     bool,
  pub path:         String,
  pub prev_href:    Option<String>,
  pub next_href:    Option<String>,
  /// Day view filter markers.
  pub category:     Option<String>,
  pub tag:          Option<String>
}

impl NavigationContext {
  pub fn read<P: Page>(
    page: &P,
    selectors: &Selectors
  ) -> Self {
    Self {
      mini:         page.has_class(
        &selectors.calendar,
        &selectors.mini_class
      ),
      has_calendar: page
        .exists(&selectors.calendar),
      has_list:     page
        .exists(&selectors.list_region),
      path:         page.location_path(),
      prev_href:    page.attr(
        &Selectors::anchor_of(
          &selectors.prev
        ),
        "href"
      ),
      next_href:    page.attr(
        &Selectors::anchor_of(
          &selectors.next
        ),
        "href"
      ),
      category:     page
        .text(&selectors.day_category),
      tag:          page
        .text(&selectors.day_tag)
    }
  }

  pub fn endpoint(
    &self
  ) -> Option<Endpoint> {
    Endpoint::select(
      self.has_calendar,
      self.has_list
    )
  }

  /// Year and month segments of a
  /// `/calendar/<year>/<month>/...`
  /// path.
  pub fn path_year_month(
    &self
  ) -> Option<(&str, &str)> {
    let parts: Vec<&str> =
      self.path.split('/').collect();
    match parts.as_slice() {
      | [_, "calendar", year, month, _] => {
        Some((*year, *month))
      }
      | _ => None
    }
  }
}

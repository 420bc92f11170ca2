use crate::fragment::Markup;

/// The slice of the live document the
/// widget reads and mutates. Every
/// accessor addresses the first element
/// matching a CSS selector; writes to a
/// selector that matches nothing are
/// silently ignored.
pub trait Page {
  /// Handle to a concrete element, used
  /// for popover enhancement.
  type Element;

  fn exists(&self, selector: &str) -> bool;

  fn has_class(
    &self,
    selector: &str,
    class: &str
  ) -> bool;

  fn attr(
    &self,
    selector: &str,
    name: &str
  ) -> Option<String>;

  fn set_attr(
    &self,
    selector: &str,
    name: &str,
    value: &str
  );

  /// Text content of the first match,
  /// `None` when nothing matches.
  fn text(
    &self,
    selector: &str
  ) -> Option<String>;

  fn set_text(
    &self,
    selector: &str,
    text: &str
  );

  /// Replaces the contents with trusted
  /// server markup.
  fn set_inner_html(
    &self,
    selector: &str,
    html: &str
  );

  /// Clears the element and appends the
  /// given fragments.
  fn replace_children(
    &self,
    selector: &str,
    nodes: &[Markup]
  );

  /// Removes every matching element.
  fn remove_all(&self, selector: &str);

  fn query_all(
    &self,
    selector: &str
  ) -> Vec<Self::Element>;

  fn location_path(&self) -> String;
}

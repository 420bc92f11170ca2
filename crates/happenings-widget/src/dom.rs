use happenings_core::Page;
use happenings_core::fragment::Markup;
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  Element,
  Node
};

/// [`Page`] over the live DOM. Lookups
/// are scoped to the widget root, so two
/// widgets on one page never see each
/// other's elements.
pub struct DomPage {
  root:     Element,
  document: Document
}

impl DomPage {
  /// `None` when the root is detached
  /// from any document.
  pub fn new(root: Element) -> Option<Self> {
    let document = root.owner_document()?;
    Some(Self { root, document })
  }

  fn first(
    &self,
    selector: &str
  ) -> Option<Element> {
    match self.root.query_selector(selector)
    {
      | Ok(found) => found,
      | Err(error) => {
        warn!(selector, ?error, "invalid selector");
        None
      }
    }
  }

  fn build(
    &self,
    markup: &Markup
  ) -> Option<Node> {
    match markup {
      | Markup::Text(text) => Some(
        self
          .document
          .create_text_node(text)
          .into()
      ),
      | Markup::Element(fragment) => {
        let element = self
          .document
          .create_element(fragment.tag)
          .ok()?;
        for (name, value) in &fragment.attrs {
          element
            .set_attribute(name, value)
            .ok()?;
        }
        for child in &fragment.children {
          let node = self.build(child)?;
          element.append_child(&node).ok()?;
        }
        Some(element.into())
      }
    }
  }
}

impl Page for DomPage {
  type Element = Element;

  fn exists(&self, selector: &str) -> bool {
    self.first(selector).is_some()
  }

  fn has_class(
    &self,
    selector: &str,
    class: &str
  ) -> bool {
    self
      .first(selector)
      .is_some_and(|element| {
        element.class_list().contains(class)
      })
  }

  fn attr(
    &self,
    selector: &str,
    name: &str
  ) -> Option<String> {
    self
      .first(selector)?
      .get_attribute(name)
  }

  fn set_attr(
    &self,
    selector: &str,
    name: &str,
    value: &str
  ) {
    if let Some(element) = self.first(selector)
      && let Err(error) =
        element.set_attribute(name, value)
    {
      warn!(selector, name, ?error, "failed setting attribute");
    }
  }

  fn text(
    &self,
    selector: &str
  ) -> Option<String> {
    self
      .first(selector)
      .map(|element| {
        element
          .text_content()
          .unwrap_or_default()
      })
  }

  fn set_text(
    &self,
    selector: &str,
    text: &str
  ) {
    if let Some(element) = self.first(selector)
    {
      element.set_text_content(Some(text));
    }
  }

  fn set_inner_html(
    &self,
    selector: &str,
    html: &str
  ) {
    if let Some(element) = self.first(selector)
    {
      element.set_inner_html(html);
    }
  }

  fn replace_children(
    &self,
    selector: &str,
    nodes: &[Markup]
  ) {
    let Some(container) = self.first(selector)
    else {
      return;
    };

    container.set_text_content(None);
    for markup in nodes {
      let appended = self
        .build(markup)
        .and_then(|node| {
          container.append_child(&node).ok()
        });
      if appended.is_none() {
        warn!(selector, "failed appending fragment");
      }
    }
  }

  fn remove_all(&self, selector: &str) {
    for element in self.query_all(selector) {
      element.remove();
    }
  }

  fn query_all(
    &self,
    selector: &str
  ) -> Vec<Element> {
    let Ok(list) =
      self.root.query_selector_all(selector)
    else {
      warn!(selector, "invalid selector");
      return Vec::new();
    };

    (0..list.length())
      .filter_map(|index| list.item(index))
      .filter_map(|node| {
        node.dyn_into::<Element>().ok()
      })
      .collect()
  }

  fn location_path(&self) -> String {
    self
      .document
      .location()
      .and_then(|location| {
        location.pathname().ok()
      })
      .unwrap_or_default()
  }
}

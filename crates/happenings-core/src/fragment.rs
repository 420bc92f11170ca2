//! Structured HTML fragments.
//!
//! Renderers build [`Markup`] trees instead of concatenating strings.
//! Page adapters either materialize the tree as DOM nodes or serialize
//! it through maud's [`Render`], which escapes every text and attribute
//! value.

use maud::{
  Render,
  html
};

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum Markup {
  Element(Element),
  Text(String)
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct Element {
  pub tag:      &'static str,
  pub attrs:    Vec<(&'static str, String)>,
  pub children: Vec<Markup>
}

impl Element {
  pub fn new(
    tag: &'static str
  ) -> Self {
    Self {
      tag,
      attrs: Vec::new(),
      children: Vec::new()
    }
  }

  pub fn attr(
    mut self,
    name: &'static str,
    value: impl Into<String>
  ) -> Self {
    self
      .attrs
      .push((name, value.into()));
    self
  }

  pub fn class(
    self,
    value: impl Into<String>
  ) -> Self {
    self.attr("class", value)
  }

  pub fn child(
    mut self,
    child: impl Into<Markup>
  ) -> Self {
    self.children.push(child.into());
    self
  }

  pub fn text(
    self,
    value: impl Into<String>
  ) -> Self {
    self.child(Markup::Text(
      value.into()
    ))
  }

  pub fn get_attr(
    &self,
    name: &str
  ) -> Option<&str> {
    self
      .attrs
      .iter()
      .find(|(key, _)| *key == name)
      .map(|(_, value)| value.as_str())
  }
}

impl From<Element> for Markup {
  fn from(element: Element) -> Self {
    Markup::Element(element)
  }
}

impl Markup {
  pub fn to_html(&self) -> String {
    self.render().into_string()
  }

  /// Concatenated text of this node
  /// and its descendants.
  pub fn text_content(&self) -> String {
    match self {
      | Markup::Text(text) => text.clone(),
      | Markup::Element(element) => element
        .children
        .iter()
        .map(Markup::text_content)
        .collect()
    }
  }
}

impl Render for Markup {
  fn render_to(&self, out: &mut String) {
    match self {
      | Markup::Text(text) => {
        text.render_to(out);
      }
      | Markup::Element(element) => {
        out.push('<');
        out.push_str(element.tag);
        for (name, value) in &element.attrs
        {
          out.push(' ');
          out.push_str(name);
          out.push_str("=\"");
          value.render_to(out);
          out.push('"');
        }
        out.push('>');
        for child in &element.children {
          child.render_to(out);
        }
        out.push_str("</");
        out.push_str(element.tag);
        out.push('>');
      }
    }
  }
}

pub fn to_html(nodes: &[Markup]) -> String {
  html! {
    @for node in nodes {
      (node)
    }
  }
  .into_string()
}

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{
  BTreeMap,
  HashMap
};
use std::future::Future;
use std::pin::Pin;
use std::task::{
  Context,
  Poll
};

use futures::channel::oneshot;
use happenings_core::fragment::{
  Markup,
  to_html
};
use happenings_core::{
  Page,
  PopoverCapability,
  Transport,
  WidgetError,
  WidgetResult
};

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct FakeElement {
  pub classes:  Vec<String>,
  pub attrs:    BTreeMap<String, String>,
  pub text:     String,
  pub html:     String,
  pub children: Vec<Markup>
}

impl FakeElement {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn class(
    mut self,
    class: &str
  ) -> Self {
    self.classes.push(class.to_string());
    self
  }

  pub fn attr(
    mut self,
    name: &str,
    value: &str
  ) -> Self {
    self
      .attrs
      .insert(name.to_string(), value.to_string());
    self
  }

  pub fn text(
    mut self,
    text: &str
  ) -> Self {
    self.text = text.to_string();
    self
  }
}

/// In-memory page keyed by selector.
/// Event elements are found by class
/// inside the markup held by other
/// elements, like a browser would after
/// an `innerHTML` swap.
#[derive(Debug, Default)]
pub struct FakePage {
  path:     String,
  elements: RefCell<BTreeMap<String, FakeElement>>
}

impl FakePage {
  pub fn new(path: &str) -> Self {
    Self {
      path:     path.to_string(),
      elements: RefCell::default()
    }
  }

  pub fn with(
    self,
    selector: &str,
    element: FakeElement
  ) -> Self {
    self
      .elements
      .borrow_mut()
      .insert(selector.to_string(), element);
    self
  }

  pub fn get(
    &self,
    selector: &str
  ) -> FakeElement {
    self
      .elements
      .borrow()
      .get(selector)
      .cloned()
      .unwrap_or_else(|| {
        panic!("no element for {selector}")
      })
  }

  pub fn snapshot(
    &self
  ) -> BTreeMap<String, FakeElement> {
    self.elements.borrow().clone()
  }

  fn update(
    &self,
    selector: &str,
    apply: impl FnOnce(&mut FakeElement)
  ) {
    if let Some(element) = self
      .elements
      .borrow_mut()
      .get_mut(selector)
    {
      apply(element);
    }
  }
}

impl Page for FakePage {
  type Element = String;

  fn exists(&self, selector: &str) -> bool {
    self
      .elements
      .borrow()
      .contains_key(selector)
  }

  fn has_class(
    &self,
    selector: &str,
    class: &str
  ) -> bool {
    self
      .elements
      .borrow()
      .get(selector)
      .is_some_and(|element| {
        element
          .classes
          .iter()
          .any(|value| value == class)
      })
  }

  fn attr(
    &self,
    selector: &str,
    name: &str
  ) -> Option<String> {
    self
      .elements
      .borrow()
      .get(selector)
      .and_then(|element| {
        element.attrs.get(name).cloned()
      })
  }

  fn set_attr(
    &self,
    selector: &str,
    name: &str,
    value: &str
  ) {
    self.update(selector, |element| {
      element.attrs.insert(
        name.to_string(),
        value.to_string()
      );
    });
  }

  fn text(
    &self,
    selector: &str
  ) -> Option<String> {
    self
      .elements
      .borrow()
      .get(selector)
      .map(|element| element.text.clone())
  }

  fn set_text(
    &self,
    selector: &str,
    text: &str
  ) {
    self.update(selector, |element| {
      element.text = text.to_string();
    });
  }

  fn set_inner_html(
    &self,
    selector: &str,
    html: &str
  ) {
    self.update(selector, |element| {
      element.html = html.to_string();
      element.children.clear();
    });
  }

  fn replace_children(
    &self,
    selector: &str,
    nodes: &[Markup]
  ) {
    self.update(selector, |element| {
      element.children = nodes.to_vec();
      element.html = to_html(nodes);
    });
  }

  fn remove_all(&self, selector: &str) {
    self.elements.borrow_mut().remove(selector);
  }

  fn query_all(
    &self,
    selector: &str
  ) -> Vec<String> {
    let Some(class) =
      selector.strip_prefix('.')
    else {
      return Vec::new();
    };
    let needle = format!("class=\"{class}\"");
    let count: usize = self
      .elements
      .borrow()
      .values()
      .map(|element| {
        element.html.matches(&needle).count()
      })
      .sum();
    (0..count)
      .map(|index| format!("{selector}[{index}]"))
      .collect()
  }

  fn location_path(&self) -> String {
    self.path.clone()
  }
}

/// Transport answering from canned
/// bodies, or from a gate the test
/// opens to control arrival order.
#[derive(Default)]
pub struct ScriptedTransport {
  bodies:   RefCell<HashMap<String, String>>,
  gates:    RefCell<HashMap<String, oneshot::Receiver<String>>>,
  requests: RefCell<Vec<String>>
}

impl ScriptedTransport {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn respond(
    self,
    url: &str,
    body: impl Into<String>
  ) -> Self {
    self
      .bodies
      .borrow_mut()
      .insert(url.to_string(), body.into());
    self
  }

  pub fn gate(
    &self,
    url: &str
  ) -> oneshot::Sender<String> {
    let (sender, receiver) =
      oneshot::channel();
    self
      .gates
      .borrow_mut()
      .insert(url.to_string(), receiver);
    sender
  }

  pub fn requests(&self) -> Vec<String> {
    self.requests.borrow().clone()
  }
}

impl Transport for ScriptedTransport {
  fn get_text(
    &self,
    url: &str
  ) -> impl Future<Output = WidgetResult<String>>
  {
    self
      .requests
      .borrow_mut()
      .push(url.to_string());
    let body =
      self.bodies.borrow().get(url).cloned();
    let gate =
      self.gates.borrow_mut().remove(url);
    let url = url.to_string();

    async move {
      if let Some(gate) = gate {
        return gate.await.map_err(|_| {
          WidgetError::Transport {
            url,
            reason: "gate dropped".to_string()
          }
        });
      }
      body.ok_or(WidgetError::Transport {
        url,
        reason: "404 Not Found".to_string()
      })
    }
  }
}

#[derive(Debug, Default)]
pub struct RecordingPopover {
  pub attached: RefCell<Vec<String>>
}

impl PopoverCapability<String>
  for RecordingPopover
{
  fn available(&self) -> bool {
    true
  }

  fn attach(&self, element: &String) {
    self
      .attached
      .borrow_mut()
      .push(element.clone());
  }
}

/// Returns `Pending` once so other
/// futures in a `join!` get polled.
pub struct YieldOnce(bool);

impl YieldOnce {
  pub fn new() -> Self {
    YieldOnce(false)
  }
}

impl Future for YieldOnce {
  type Output = ();

  fn poll(
    mut self: Pin<&mut Self>,
    cx: &mut Context<'_>
  ) -> Poll<()> {
    if self.0 {
      return Poll::Ready(());
    }
    self.0 = true;
    cx.waker().wake_by_ref();
    Poll::Pending
  }
}

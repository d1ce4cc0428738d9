//! In-memory page model.
//!
//! A [`Document`] stands in for the browser DOM: renderers look elements up by
//! their fixed id and mutate them, then the host serializes the page with
//! [`Document::to_html`].

use crate::view::error::ViewError;
use crate::view::markup::Markup;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    List,
    Detail,
}

/// A single addressable element of a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    value: Option<String>,
    visible: bool,
    children: Vec<Markup>,
    inner: Option<Markup>,
}

impl Element {
    pub fn new(visible: bool) -> Self {
        Self {
            value: None,
            visible,
            children: Vec::new(),
            inner: None,
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn children(&self) -> &[Markup] {
        &self.children
    }

    pub fn append_child(&mut self, child: Markup) {
        self.children.push(child);
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Replacement content, if the element's template body was swapped out.
    pub fn inner(&self) -> Option<&Markup> {
        self.inner.as_ref()
    }

    /// Swaps the element's whole body for `content`.
    pub fn replace_inner(&mut self, content: Markup) {
        self.children.clear();
        self.inner = Some(content);
    }
}

/// A page: its kind plus every element a renderer may address.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    kind: PageKind,
    title: String,
    elements: BTreeMap<&'static str, Element>,
}

impl Document {
    pub fn new(kind: PageKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            elements: BTreeMap::new(),
        }
    }

    pub fn with_element(mut self, id: &'static str, element: Element) -> Self {
        self.elements.insert(id, element);
        self
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn element_mut(&mut self, id: &str) -> Result<&mut Element, ViewError> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| ViewError::MissingElement(id.to_string()))
    }

    /// Convenience for form fields: the element's current value.
    pub fn value(&self, id: &str) -> Option<&str> {
        self.element(id).and_then(Element::value)
    }

    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> Result<(), ViewError> {
        self.element_mut(id)?.set_value(value);
        Ok(())
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.element(id).is_some_and(Element::is_visible)
    }
}

//! A minimal append-only element tree standing in for the host page's DOM.

use std::fmt::Write as _;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Content {
    Text(String),
    Element(Element),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub id: Option<String>,
    pub class: Option<String>,
    pub content: Vec<Content>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            id: None,
            class: None,
            content: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(text);
        self
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.content.push(Content::Text(text.into()));
    }

    pub fn push_child(&mut self, child: Element) {
        self.content.push(Content::Element(child));
    }

    pub fn clear(&mut self) {
        self.content.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class
            .as_deref()
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.content.iter().filter_map(|content| match content {
            Content::Element(element) => Some(element),
            Content::Text(_) => None,
        })
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for content in &self.content {
            match content {
                Content::Text(text) => out.push_str(text),
                Content::Element(element) => element.collect_text(out),
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if let Some(id) = &self.id {
            let _ = write!(out, " id=\"{}\"", escape(id));
        }
        if let Some(class) = &self.class {
            let _ = write!(out, " class=\"{}\"", escape(class));
        }
        out.push('>');

        for content in &self.content {
            match content {
                Content::Text(text) => out.push_str(&escape(text)),
                Content::Element(element) => element.write_html(out),
            }
        }

        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

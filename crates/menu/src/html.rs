//! Minimal HTML element builder.

use core::fmt::{self, Write as _};

/// HTML-escape a string for safe output in text and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// An element under construction.
///
/// Classes are written first, then attributes in insertion order. Values are
/// escaped on output; inner html is written verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    name: &'static str,
    classes: Vec<String>,
    attributes: Vec<(&'static str, String)>,
    inner_html: String,
    self_closing: bool,
}

impl Tag {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Add whitespace-separated class tokens, skipping duplicates.
    pub fn class(mut self, classes: &str) -> Self {
        for token in classes.split_whitespace() {
            if !self.classes.iter().any(|c| c == token) {
                self.classes.push(token.to_string());
            }
        }
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    /// Append already-rendered markup.
    pub fn html(mut self, html: &str) -> Self {
        self.inner_html.push_str(html);
        self
    }

    /// Append escaped text.
    pub fn text(mut self, text: &str) -> Self {
        self.inner_html.push_str(&html_escape(text));
        self
    }

    pub fn self_closing(mut self) -> Self {
        self.self_closing = true;
        self
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('<')?;
        f.write_str(self.name)?;

        if !self.classes.is_empty() {
            write!(f, " class=\"{}\"", html_escape(&self.classes.join(" ")))?;
        }
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, html_escape(value))?;
        }

        if self.self_closing {
            return f.write_str(" />");
        }
        write!(f, ">{}</{}>", self.inner_html, self.name)
    }
}

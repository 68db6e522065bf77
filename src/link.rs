// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::html;
use crate::interface::{EvolvableLink, SharedLink};
use crate::param::{Param, Value};
use log::trace;
use std::fmt::{self, Display};
use std::sync::Arc;

/// An immutable hyperlink: an href, its relation types, attributes, an
/// optional anchor text and optional child links.
///
/// The href is the only stored form of the URI; component accessors from
/// [`EvolvableLink`] decompose it on every call.
///
/// ```
/// use linkrel::{EvolvableLink, Link};
///
/// let link = Link::new("http://example.com:8080/path?q=v#frag");
///
/// assert_eq!(link.scheme(), "http");
/// assert_eq!(link.port(), Some(8080));
///
/// let secure = link.with_scheme("https").with_port(None);
///
/// assert_eq!(secure.to_string(), "https://example.com/path?q=v#frag");
/// assert_eq!(link.to_string(), "http://example.com:8080/path?q=v#frag");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Link {
    href: String,
    rel: Vec<String>,
    attributes: Vec<Param>,
    anchor: Option<String>,
    children: Vec<SharedLink>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Link {
        Link {
            href: href.into(),
            ..Link::default()
        }
    }

    /// Moves the link behind a `SharedLink` so it can be stored in a
    /// provider or used as a child.
    pub fn shared(self) -> SharedLink {
        Arc::new(self)
    }

    /// The anchor text, or the empty string when unset.
    pub fn anchor(&self) -> &str {
        self.anchor.as_ref().map_or("", String::as_str)
    }

    pub fn with_anchor(&self, anchor: impl Into<String>) -> Link {
        let mut link = self.clone();
        link.anchor = Some(anchor.into());
        link
    }

    pub fn children(&self) -> &[SharedLink] {
        &self.children
    }

    /// Children carrying `attribute`, or, when `value` is given, children
    /// whose `attribute` equals it.
    pub fn children_matching(&self, attribute: &str, value: Option<&Value>) -> Vec<SharedLink> {
        self.children
            .iter()
            .filter(|child| match value {
                None => child.has_attribute(attribute),
                Some(value) => child.attribute(attribute) == Some(value),
            })
            .cloned()
            .collect()
    }

    /// Replaces the children.
    pub fn with_children<I>(&self, children: I) -> Link
    where
        I: IntoIterator<Item = SharedLink>,
    {
        let mut link = self.clone();
        link.children = children.into_iter().collect();
        link
    }

    /// Replaces the children from a slice.
    pub fn with_children_list(&self, children: &[SharedLink]) -> Link {
        self.with_children(children.iter().cloned())
    }
}

impl EvolvableLink for Link {
    fn href(&self) -> &str {
        &self.href
    }

    fn rels(&self) -> &[String] {
        &self.rel
    }

    fn attributes(&self) -> &[Param] {
        &self.attributes
    }

    fn render(&self) -> String {
        let mut output = format!(r#"<a href="{}""#, html::escape(&self.href));

        if !self.rel.is_empty() {
            output.push_str(&format!(r#" rel="{}""#, html::escape(&self.rel.join(" "))));
        }

        for param in &self.attributes {
            output.push_str(&format!(
                r#" {}="{}""#,
                param.name(),
                html::escape(&param.value().to_string())
            ));
        }

        output.push('>');

        if let Some(anchor) = &self.anchor {
            output.push_str(anchor);
            output.push_str("</a>");
        }

        output
    }

    fn with_href(&self, href: impl Into<String>) -> Link {
        let mut link = self.clone();
        link.href = href.into();
        link
    }

    fn with_rel<I, S>(&self, rels: I) -> Link
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut link = self.clone();
        link.rel.clear();

        for rel in rels {
            let rel = rel.into();
            if !link.rel.contains(&rel) {
                link.rel.push(rel);
            }
        }

        link
    }

    fn without_rel(&self, rel: &str) -> Link {
        let mut link = self.clone();
        link.rel.retain(|r| r != rel);
        link
    }

    fn with_attribute(&self, name: &str, value: impl Into<Value>) -> Link {
        let mut link = self.clone();
        link.set_attribute(name.into(), value.into());
        link
    }

    fn with_attributes<I, K>(&self, attributes: I) -> Link
    where
        I: IntoIterator<Item = (K, Option<Value>)>,
        K: Into<String>,
    {
        let mut link = self.clone();

        for (name, value) in attributes {
            let name = name.into();
            match value {
                Some(value) => link.set_attribute(name, value),
                None => trace!("dropping attribute {:?} without a value", name),
            }
        }

        link
    }

    fn without_attribute(&self, name: &str) -> Link {
        let mut link = self.clone();
        link.attributes.retain(|param| param.name() != name);
        link
    }
}

impl Link {
    fn set_attribute(&mut self, name: String, value: Value) {
        match self.attributes.iter_mut().find(|param| param.name() == name) {
            Some(param) => param.set_value(value),
            None => self.attributes.push(Param::new(name, value)),
        }
    }
}

impl Display for Link {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.href)
    }
}

impl From<&str> for Link {
    fn from(s: &str) -> Self {
        Link::new(s)
    }
}

impl From<String> for Link {
    fn from(s: String) -> Self {
        Link::new(s)
    }
}

/// Links are equal when their href, relation types, attributes and anchor
/// text are, and their children are pairwise equal as far as the link
/// contract shows (href, relation types, attributes).
impl PartialEq for Link {
    fn eq(&self, other: &Link) -> bool {
        self.href == other.href
            && self.rel == other.rel
            && self.attributes == other.attributes
            && self.anchor == other.anchor
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(other.children.iter())
                .all(|(a, b)| {
                    a.href() == b.href() && a.rels() == b.rels() && a.attributes() == b.attributes()
                })
    }
}

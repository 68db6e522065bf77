// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

//! The link and link-provider contracts.
//!
//! Anything implementing [`EvolvableLink`] can be stored in a provider or
//! attached as a child of another link. Mutators never touch the receiver;
//! they return a new value.

use crate::param::{Param, Value};
use crate::uri::UriRef;
use std::fmt;
use std::sync::Arc;

/// A link shared between providers and parent links. Its pointer is its
/// identity.
pub type SharedLink = Arc<dyn EvolvableLink>;

/// Whether `a` and `b` are the very same stored link.
pub fn same_link(a: &SharedLink, b: &SharedLink) -> bool {
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}

/// A hyperlink: a URI plus relation types and attributes.
///
/// The URI accessors and mutators are derived from `href` and `with_href`;
/// implementors only provide storage for the href, the relation types and
/// the attributes, plus rendering.
pub trait EvolvableLink: fmt::Debug + fmt::Display + Send + Sync {
    fn href(&self) -> &str;

    fn rels(&self) -> &[String];

    fn attributes(&self) -> &[Param];

    /// The HTML anchor element for this link.
    fn render(&self) -> String;

    fn scheme(&self) -> String {
        UriRef::lossy(self.href()).scheme().into()
    }

    fn authority(&self) -> String {
        UriRef::lossy(self.href()).authority()
    }

    fn user_info(&self) -> String {
        UriRef::lossy(self.href()).user_info().into()
    }

    fn host(&self) -> String {
        UriRef::lossy(self.href()).host().into()
    }

    fn port(&self) -> Option<u16> {
        UriRef::lossy(self.href()).port()
    }

    fn path(&self) -> String {
        UriRef::lossy(self.href()).path().into()
    }

    fn query(&self) -> String {
        UriRef::lossy(self.href()).query().into()
    }

    fn fragment(&self) -> String {
        UriRef::lossy(self.href()).fragment().into()
    }

    fn has_rel(&self, rel: &str) -> bool {
        self.rels().iter().any(|r| r == rel)
    }

    fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes()
            .iter()
            .find(|param| param.name() == name)
            .map(Param::value)
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// True when the href holds a `{…}` pair on a single line, i.e. looks
    /// like a URI template.
    fn is_templated(&self) -> bool {
        self.href().split('\n').any(|line| match line.find('{') {
            Some(open) => line[open..].contains('}'),
            None => false,
        })
    }

    fn with_href(&self, href: impl Into<String>) -> Self
    where
        Self: Sized;

    /// Replaces every relation type.
    fn with_rel<I, S>(&self, rels: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>;

    fn without_rel(&self, rel: &str) -> Self
    where
        Self: Sized;

    fn with_attribute(&self, name: &str, value: impl Into<Value>) -> Self
    where
        Self: Sized;

    /// Merges the given attributes. Entries without a value are dropped.
    fn with_attributes<I, K>(&self, attributes: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = (K, Option<Value>)>,
        K: Into<String>;

    fn without_attribute(&self, name: &str) -> Self
    where
        Self: Sized;

    fn with_scheme(&self, scheme: &str) -> Self
    where
        Self: Sized,
    {
        self.with_uri(|uri| uri.set_scheme(scheme))
    }

    fn with_user_info(&self, user: &str, password: Option<&str>) -> Self
    where
        Self: Sized,
    {
        self.with_uri(|uri| uri.set_user_info(user, password))
    }

    fn with_host(&self, host: &str) -> Self
    where
        Self: Sized,
    {
        self.with_uri(|uri| uri.set_host(host))
    }

    fn with_port(&self, port: Option<u16>) -> Self
    where
        Self: Sized,
    {
        self.with_uri(|uri| uri.set_port(port))
    }

    fn with_path(&self, path: &str) -> Self
    where
        Self: Sized,
    {
        self.with_uri(|uri| uri.set_path(path))
    }

    fn with_query(&self, query: &str) -> Self
    where
        Self: Sized,
    {
        self.with_uri(|uri| uri.set_query(query))
    }

    fn with_fragment(&self, fragment: &str) -> Self
    where
        Self: Sized,
    {
        self.with_uri(|uri| uri.set_fragment(fragment))
    }

    /// Rebuilds the href after `change` has been applied to its components.
    fn with_uri<F>(&self, change: F) -> Self
    where
        Self: Sized,
        F: FnOnce(&mut UriRef),
    {
        let mut uri = UriRef::lossy(self.href());
        change(&mut uri);
        self.with_href(uri.to_string())
    }
}

/// An ordered collection of links.
///
/// Removal works on identity: a link equal by value to a stored one, but not
/// the same `SharedLink`, is left alone.
pub trait EvolvableLinkProvider {
    fn links(&self) -> &[SharedLink];

    /// Links holding `rel`, in collection order.
    fn links_by_rel(&self, rel: &str) -> Vec<SharedLink> {
        self.links()
            .iter()
            .filter(|link| link.has_rel(rel))
            .cloned()
            .collect()
    }

    fn with_link(&self, link: SharedLink) -> Self
    where
        Self: Sized;

    /// Removes the first occurrence of `link`, if any.
    fn without_link(&self, link: &SharedLink) -> Self
    where
        Self: Sized;

    fn with_links<I>(&self, links: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = SharedLink>;

    fn without_links<'a, I>(&self, links: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = &'a SharedLink>;
}

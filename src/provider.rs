// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::interface::{same_link, EvolvableLinkProvider, SharedLink};
use log::trace;
use std::iter::FromIterator;
use std::slice;

/// An immutable, ordered collection of links.
///
/// ```
/// use linkrel::{EvolvableLink, EvolvableLinkProvider, Link, LinkProvider};
///
/// let next = Link::new("/page/3").with_rel(vec!["next"]).shared();
/// let prev = Link::new("/page/1").with_rel(vec!["prev"]).shared();
///
/// let provider = LinkProvider::new().with_links(vec![next.clone(), prev]);
///
/// assert_eq!(provider.links_by_rel("next").len(), 1);
/// assert_eq!(provider.without_link(&next).links().len(), 1);
/// assert_eq!(provider.links().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LinkProvider {
    links: Vec<SharedLink>,
}

impl LinkProvider {
    pub fn new() -> LinkProvider {
        LinkProvider::default()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<SharedLink> {
        self.links.iter()
    }

    fn remove(&mut self, link: &SharedLink) {
        match self.links.iter().position(|stored| same_link(stored, link)) {
            Some(index) => {
                self.links.remove(index);
            }
            None => trace!("link {} not in provider, nothing to remove", link),
        }
    }
}

impl EvolvableLinkProvider for LinkProvider {
    fn links(&self) -> &[SharedLink] {
        &self.links
    }

    fn with_link(&self, link: SharedLink) -> LinkProvider {
        let mut provider = self.clone();
        provider.links.push(link);
        provider
    }

    fn without_link(&self, link: &SharedLink) -> LinkProvider {
        let mut provider = self.clone();
        provider.remove(link);
        provider
    }

    fn with_links<I>(&self, links: I) -> LinkProvider
    where
        I: IntoIterator<Item = SharedLink>,
    {
        let mut provider = self.clone();
        provider.links.extend(links);
        provider
    }

    fn without_links<'a, I>(&self, links: I) -> LinkProvider
    where
        I: IntoIterator<Item = &'a SharedLink>,
    {
        let mut provider = self.clone();
        for link in links {
            provider.remove(link);
        }
        provider
    }
}

impl FromIterator<SharedLink> for LinkProvider {
    fn from_iter<I: IntoIterator<Item = SharedLink>>(iter: I) -> Self {
        LinkProvider {
            links: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LinkProvider {
    type Item = &'a SharedLink;
    type IntoIter = slice::Iter<'a, SharedLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::EvolvableLink;
    use crate::link::Link;

    fn page(n: u32, rel: &str) -> SharedLink {
        Link::new(format!("https://example.com/page{}", n))
            .with_rel(vec![rel])
            .with_attribute("page", n)
            .shared()
    }

    #[test]
    fn links() {
        let provider = LinkProvider::new()
            .with_link(page(1, "rel1"))
            .with_link(page(2, "rel2"));

        let links = provider.links();

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].href(), "https://example.com/page1");
        assert_eq!(links[1].href(), "https://example.com/page2");
    }

    #[test]
    fn with_link() {
        let link = page(1, "rel");
        let provider = LinkProvider::new();
        let changed = provider.with_link(link.clone());

        assert!(provider.is_empty());
        assert_eq!(changed.len(), 1);
        assert!(same_link(&changed.links()[0], &link));
    }

    #[test]
    fn without_link() {
        let first = page(1, "rel1");
        let second = page(2, "rel2");
        let provider = LinkProvider::new()
            .with_link(first.clone())
            .with_link(second.clone());

        let changed = provider.without_link(&first);

        assert_eq!(changed.len(), 1);
        assert!(same_link(&changed.links()[0], &second));
        assert_eq!(provider.len(), 2);
    }

    #[test]
    fn without_link_removes_first_occurrence_only() {
        let a = page(1, "a");
        let b = page(2, "b");
        let provider: LinkProvider = vec![a.clone(), b.clone(), a.clone()].into_iter().collect();

        let changed = provider.without_link(&a);

        assert_eq!(changed.len(), 2);
        assert!(same_link(&changed.links()[0], &b));
        assert!(same_link(&changed.links()[1], &a));
    }

    #[test]
    fn without_link_by_identity() {
        let stored = page(1, "next");
        let lookalike = page(1, "next");
        let provider = LinkProvider::new().with_link(stored);

        let changed = provider.without_link(&lookalike);

        assert_eq!(changed.len(), 1);
    }

    #[test]
    fn without_missing_link() {
        let provider = LinkProvider::new().with_link(page(1, "a"));

        assert_eq!(provider.without_link(&page(2, "b")).len(), 1);
    }

    #[test]
    fn links_by_rel() {
        let provider = LinkProvider::new().with_links(vec![
            page(1, "next"),
            page(2, "prev"),
            page(3, "next"),
        ]);

        let hrefs: Vec<String> = provider
            .links_by_rel("next")
            .iter()
            .map(|link| link.to_string())
            .collect();

        assert_eq!(
            hrefs,
            vec!["https://example.com/page1", "https://example.com/page3"]
        );
        assert!(provider.links_by_rel("Next").is_empty());
    }

    #[test]
    fn with_links_appends() {
        let provider = LinkProvider::new().with_link(page(1, "a"));
        let changed = provider.with_links(vec![page(2, "b"), page(3, "c")]);

        let rels: Vec<&str> = changed.iter().map(|link| link.rels()[0].as_str()).collect();

        assert_eq!(rels, vec!["a", "b", "c"]);
    }

    #[test]
    fn without_links() {
        let a = page(1, "a");
        let b = page(2, "b");
        let c = page(3, "c");
        let absent = page(4, "d");
        let provider = LinkProvider::new().with_links(vec![a.clone(), b.clone(), c.clone()]);

        let changed = provider.without_links(vec![&absent, &a, &c]);

        assert_eq!(changed.len(), 1);
        assert!(same_link(&changed.links()[0], &b));
        assert_eq!(provider.len(), 3);
    }

    #[test]
    fn iterate_by_reference() {
        let provider = LinkProvider::new().with_links(vec![page(1, "a"), page(2, "b")]);
        let mut count = 0;

        for link in &provider {
            assert!(link.has_attribute("page"));
            count += 1;
        }

        assert_eq!(count, 2);
    }
}

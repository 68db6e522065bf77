// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::error::{ParserError, Result};
use crate::uri::UriRef;
use pest::Parser;
use std::fmt::{self, Display};

#[derive(Parser)]
#[grammar = "uri.pest"]
pub struct Rfc3986Parser;

impl Display for Rule {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{:?}", self)
    }
}

/// Decomposes a URI reference into its components.
///
/// This is the strict entry point. `Link` accessors go through
/// `UriRef::lossy` instead, which never fails.
///
/// ```
/// let uri = linkrel::parse("http://example.com:8080/path?q=v#frag").unwrap();
///
/// assert_eq!(uri.scheme(), "http");
/// assert_eq!(uri.host(), "example.com");
/// assert_eq!(uri.port(), Some(8080));
/// assert_eq!(uri.path(), "/path");
/// assert_eq!(uri.query(), "q=v");
/// assert_eq!(uri.fragment(), "frag");
/// ```
pub fn parse(input: &str) -> Result<UriRef> {
    let pair = Rfc3986Parser::parse(Rule::uri_reference, input)?
        .next()
        .ok_or_else(|| ParserError::Empty(input.to_string()))?;

    UriRef::from_rule(pair)
}

// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

//! HTML escaping for rendered anchors.

use std::borrow::Cow;

/// Escapes the characters that are special inside a quoted HTML attribute:
/// `&`, `"`, `'`, `<` and `>`.
///
/// ```
/// use linkrel::html::escape;
///
/// assert_eq!(escape("a < b & 'c'"), "a &lt; b &amp; &#039;c&#039;");
/// assert_eq!(escape("plain"), "plain");
/// ```
pub fn escape(input: &str) -> Cow<str> {
    if !input.contains(|c: char| matches!(c, '&' | '"' | '\'' | '<' | '>')) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 16);

    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }

    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string() {
        assert_eq!(escape("/search?q=a&b=c"), "/search?q=a&amp;b=c");
    }

    #[test]
    fn quotes() {
        assert_eq!(escape(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn unicode_untouched() {
        assert_eq!(escape("n\u{e4}chstes \u{1F383}"), "n\u{e4}chstes \u{1F383}");
    }

    #[test]
    fn borrowed_when_clean() {
        match escape("http://example.org/") {
            Cow::Borrowed(_) => (),
            Cow::Owned(_) => panic!("Expect no allocation"),
        }
    }
}

//! Match rule evaluation.
//!
//! # Responsibilities
//! - Match the leading verb token (exact, uppercase, anchored at start)
//! - Match the route path token following the verb (exact, whitespace-free)
//! - Match a cookie value by key on a `cookie:` header line
//!
//! # Design Decisions
//! - Rules are pure: accept returns the request untouched, reject returns None
//! - No regex to guarantee O(n) matching
//! - The first well-formed `key=value;` pair decides a cookie match

use std::fmt;

use crate::request::Request;

/// Trait for matching a request against one condition.
///
/// An accepting rule hands back the request unchanged; a rejecting rule
/// yields `None`. Rules never mutate the request and never fail any other
/// way.
pub trait MatchRule: Send + Sync + fmt::Debug {
    /// Evaluate this rule, returning the request unchanged on a match.
    fn evaluate<'a>(&self, request: &'a Request) -> Option<&'a Request>;
}

/// Matches the leading verb token.
#[derive(Debug, Clone)]
pub struct VerbRule {
    expected: String,
}

impl VerbRule {
    /// Create a new verb rule.
    /// Only a run of two or more uppercase ASCII letters at position 0
    /// counts as a verb token, so a lowercase `expected` can never match.
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl MatchRule for VerbRule {
    fn evaluate<'a>(&self, request: &'a Request) -> Option<&'a Request> {
        match leading_verb(request.as_str()) {
            Some(verb) if verb == self.expected => Some(request),
            _ => None,
        }
    }
}

/// Matches the path token after the verb.
#[derive(Debug, Clone)]
pub struct RouteRule {
    expected: String,
}

impl RouteRule {
    /// Create a new route rule.
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl MatchRule for RouteRule {
    fn evaluate<'a>(&self, request: &'a Request) -> Option<&'a Request> {
        match route_token(request.as_str()) {
            Some(path) if path == self.expected => Some(request),
            _ => None,
        }
    }
}

/// Matches one cookie value by key, such as an API key.
#[derive(Debug, Clone)]
pub struct CookieRule {
    key: String,
    expected: String,
}

impl CookieRule {
    /// Create a new cookie rule.
    pub fn new(key: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            expected: expected.into(),
        }
    }
}

impl MatchRule for CookieRule {
    fn evaluate<'a>(&self, request: &'a Request) -> Option<&'a Request> {
        match first_cookie_value(request.as_str(), &self.key) {
            Some(value) if value == self.expected => Some(request),
            _ => None,
        }
    }
}

/// Leading run of uppercase ASCII letters, anchored at position 0.
/// Runs shorter than two letters are not verbs.
fn leading_verb(text: &str) -> Option<&str> {
    let end = text
        .find(|c: char| !c.is_ascii_uppercase())
        .unwrap_or(text.len());
    if end >= 2 {
        Some(&text[..end])
    } else {
        None
    }
}

/// Path token immediately after `"<VERB> "`: a single whitespace-free
/// token starting with `/`.
fn route_token(text: &str) -> Option<&str> {
    let verb = leading_verb(text)?;
    let rest = text[verb.len()..].strip_prefix(' ')?;
    let end = rest
        .find(|c: char| c.is_whitespace())
        .unwrap_or(rest.len());
    let path = &rest[..end];
    if path.starts_with('/') {
        Some(path)
    } else {
        None
    }
}

/// Value of the first well-formed `key=value;` pair after a `cookie:`
/// marker. The marker and the pair must share a line; a value is one or
/// more characters other than space, `;` and `,`, terminated by `;`.
fn first_cookie_value<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    for line in text.lines() {
        let Some(marker) = line.find("cookie:") else {
            continue;
        };
        let mut section = &line[marker + "cookie:".len()..];
        while let Some(at) = section.find(key) {
            let after = &section[at + key.len()..];
            if let Some(rest) = after.strip_prefix('=') {
                let end = rest.find([' ', ';', ',']).unwrap_or(rest.len());
                if end > 0 && rest[end..].starts_with(';') {
                    return Some(&rest[..end]);
                }
            }
            // Resume the scan one character past this occurrence.
            match section[at..].chars().next() {
                Some(c) => section = &section[at + c.len_utf8()..],
                None => break,
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(text: &str) -> Request {
        Request::new(text)
    }

    #[test]
    fn test_verb_rule() {
        let rule = VerbRule::new("GET");

        assert!(rule.evaluate(&req("GET /api HTTP/1.1")).is_some());
        assert!(rule.evaluate(&req("POST /api HTTP/1.1")).is_none());
        // Token is the maximal uppercase run; "GETX" is not "GET".
        assert!(rule.evaluate(&req("GETX /api HTTP/1.1")).is_none());
        // Lowercase and single-letter tokens are never verbs.
        assert!(rule.evaluate(&req("get /api HTTP/1.1")).is_none());
        assert!(VerbRule::new("G").evaluate(&req("G /api")).is_none());
        assert!(rule.evaluate(&req("")).is_none());
    }

    #[test]
    fn test_verb_rule_anchored_at_start() {
        let rule = VerbRule::new("GET");
        assert!(rule.evaluate(&req(" GET /api HTTP/1.1")).is_none());
    }

    #[test]
    fn test_route_rule() {
        let rule = RouteRule::new("/api/key");

        assert!(rule.evaluate(&req("GET /api/key HTTP/1.1")).is_some());
        assert!(rule.evaluate(&req("GET /api/nope HTTP/1.1")).is_none());
        // Prefixes are not exact matches.
        assert!(rule.evaluate(&req("GET /api/key/extra HTTP/1.1")).is_none());
        // Exactly one space between verb and path.
        assert!(rule.evaluate(&req("GET  /api/key HTTP/1.1")).is_none());
        // No verb token means no route token either.
        assert!(rule.evaluate(&req("get /api/key HTTP/1.1")).is_none());
        assert!(rule.evaluate(&req("")).is_none());
    }

    #[test]
    fn test_route_rule_requires_leading_slash() {
        let rule = RouteRule::new("api/key");
        assert!(rule.evaluate(&req("GET api/key HTTP/1.1")).is_none());
    }

    #[test]
    fn test_cookie_rule() {
        let rule = CookieRule::new("KEY", "Pa$$w0rd");

        assert!(rule
            .evaluate(&req("GET / HTTP/1.1\ncookie: KEY=Pa$$w0rd;\n"))
            .is_some());
        assert!(rule
            .evaluate(&req("GET / HTTP/1.1\ncookie: KEY=wrong;\n"))
            .is_none());
        // The pair must be terminated by a semicolon.
        assert!(rule
            .evaluate(&req("GET / HTTP/1.1\ncookie: KEY=Pa$$w0rd\n"))
            .is_none());
        // No cookie header at all.
        assert!(rule.evaluate(&req("GET / HTTP/1.1\n")).is_none());
        assert!(rule.evaluate(&req("")).is_none());
    }

    #[test]
    fn test_cookie_rule_marker_and_pair_share_a_line() {
        let rule = CookieRule::new("KEY", "abc");
        assert!(rule
            .evaluate(&req("cookie: other=1;\nKEY=abc;\n"))
            .is_none());
        // A later line with its own marker still matches.
        assert!(rule
            .evaluate(&req("cookie: other=1,\ncookie: KEY=abc;\n"))
            .is_some());
    }

    #[test]
    fn test_cookie_rule_first_pair_decides() {
        let rule = CookieRule::new("KEY", "second");
        // The first well-formed pair carries "first"; no aggregation over
        // the repeat.
        assert!(rule
            .evaluate(&req("cookie: KEY=first; KEY=second;\n"))
            .is_none());

        let rule = CookieRule::new("KEY", "first");
        assert!(rule
            .evaluate(&req("cookie: KEY=first; KEY=second;\n"))
            .is_some());
    }

    #[test]
    fn test_cookie_rule_skips_malformed_pairs() {
        // "KEY=," is not well-formed (empty value); the scan moves on.
        let rule = CookieRule::new("KEY", "abc");
        assert!(rule.evaluate(&req("cookie: KEY=, KEY=abc;\n")).is_some());
    }

    #[test]
    fn test_cookie_rule_empty_value_never_matches() {
        let rule = CookieRule::new("KEY", "");
        assert!(rule.evaluate(&req("cookie: KEY=;\n")).is_none());
    }
}

use super::error::PatternError;
use super::params::RouteParams;

use std::fmt;

use percent_encoding::percent_decode_str;
use regex::Regex;

const STAR: char = '*';
const COLON: char = ':';
const SLASH: char = '/';
const SPACE: char = ' ';

const SEGMENT_CAPTURE: &str = "([^/]+)";
const CATCH_ALL: &str = ".*";

/// A route pattern (`"METHOD /path/:param/*"`) compiled to an anchored regex.
#[derive(Clone)]
pub struct CompiledPattern {
    pattern: Box<str>,
    method: Box<str>,
    path: Regex,
    param_names: Vec<Box<str>>,
}

impl CompiledPattern {
    /// Parses and compiles a pattern without consulting any cache.
    ///
    /// The method is uppercased. In the path template `:name` captures one
    /// non-empty segment, `*` swallows the remainder (slashes included) and
    /// everything else is literal.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let (method, template) = match pattern.split_once(SPACE) {
            Some(pair) => pair,
            None => {
                return Err(PatternError::MissingSeparator {
                    pattern: pattern.into(),
                })
            }
        };

        if !template.starts_with(SLASH) {
            return Err(PatternError::MissingLeadingSlash {
                pattern: pattern.into(),
            });
        }

        let (source, param_names) = translate(template);

        let path = Regex::new(&source).map_err(|source| PatternError::Regex {
            pattern: pattern.into(),
            source,
        })?;

        Ok(Self {
            pattern: pattern.into(),
            method: method.to_ascii_uppercase().into(),
            path,
            param_names,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The declared method, uppercased.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Source of the anchored path regex.
    pub fn path_regex(&self) -> &str {
        self.path.as_str()
    }

    pub fn param_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.param_names.iter().map(|n| &**n)
    }

    /// Matches a concrete request against this pattern.
    ///
    /// The method is compared case-insensitively and checked before the path.
    /// Captured segments are percent-decoded.
    pub fn matches(&self, method: &str, path: &str) -> Option<RouteParams> {
        if !self.method.eq_ignore_ascii_case(method) {
            return None;
        }

        if self.param_names.is_empty() {
            return if self.path.is_match(path) {
                Some(RouteParams::new())
            } else {
                None
            };
        }

        let caps = self.path.captures(path)?;
        let mut params = RouteParams::new();
        for (name, group) in self.param_names.iter().zip(caps.iter().skip(1)) {
            if let Some(m) = group {
                params.insert(name, decode_segment(m.as_str()));
            }
        }
        Some(params)
    }
}

impl PartialEq for CompiledPattern {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
            && self.method == other.method
            && self.path.as_str() == other.path.as_str()
            && self.param_names == other.param_names
    }
}

impl Eq for CompiledPattern {}

impl fmt::Debug for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledPattern")
            .field("pattern", &self.pattern)
            .field("method", &self.method)
            .field("path", &self.path.as_str())
            .field("param_names", &self.param_names)
            .finish()
    }
}

fn translate(template: &str) -> (String, Vec<Box<str>>) {
    let mut source = String::with_capacity(template.len() + 16);
    let mut param_names: Vec<Box<str>> = Vec::new();

    source.push('^');

    let mut rest = template;
    while let Some(c) = rest.chars().next() {
        match c {
            COLON => {
                let tail = &rest[1..];
                let len = ident_len(tail);
                if len == 0 {
                    // a bare ':' is an ordinary character
                    source.push(COLON);
                    rest = tail;
                    continue;
                }
                param_names.push(tail[..len].into());
                source.push_str(SEGMENT_CAPTURE);
                rest = &tail[len..];
            }
            STAR => {
                source.push_str(CATCH_ALL);
                rest = &rest[1..];
            }
            _ => {
                let end = rest
                    .find(|c: char| c == COLON || c == STAR)
                    .unwrap_or(rest.len());
                source.push_str(&regex::escape(&rest[..end]));
                rest = &rest[end..];
            }
        }
    }

    source.push('$');
    (source, param_names)
}

/// Length of the `[A-Za-z_][A-Za-z0-9_]*` prefix of `s`.
fn ident_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {}
        _ => return 0,
    }
    bytes
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
        .count()
}

fn decode_segment(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

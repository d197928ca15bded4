use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::models::DocketError;

/// A shareable predicate over `T`.
///
/// Selectors are values: combinators consume `self` and return a new selector,
/// so a plugin can extend the selector it was handed without affecting any
/// other holder of the previous value.
pub struct Selector<T: ?Sized> {
    inner: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

/// Predicate over request paths such as `/api/v1/widgets/{id}`.
pub type PathSelector = Selector<str>;

/// Predicate over documented operations.
pub type HandlerSelector = Selector<RequestHandler>;

impl<T: ?Sized + 'static> Selector<T> {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(predicate),
        }
    }

    pub fn any() -> Self {
        Self::new(|_| true)
    }

    pub fn none() -> Self {
        Self::new(|_| false)
    }

    pub fn matches(&self, value: &T) -> bool {
        (self.inner)(value)
    }

    pub fn or(self, other: Selector<T>) -> Self {
        Self::new(move |value| self.matches(value) || other.matches(value))
    }

    pub fn and(self, other: Selector<T>) -> Self {
        Self::new(move |value| self.matches(value) && other.matches(value))
    }

    pub fn negate(self) -> Self {
        Self::new(move |value| !self.matches(value))
    }
}

impl<T: ?Sized> Clone for Selector<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Selector(..)")
    }
}

impl Selector<str> {
    /// Paths fully matching `pattern`.
    pub fn regex(pattern: &str) -> Result<Self, DocketError> {
        let anchored = format!("^(?:{})$", pattern);
        let re = Regex::new(&anchored)
            .map_err(|e| DocketError::invalid_pattern(&format!("{}: {}", pattern, e)))?;
        Ok(Self::new(move |path: &str| re.is_match(path)))
    }

    /// Paths matching an ant-style pattern (`**` any depth, `*` within one
    /// segment, `?` a single character).
    pub fn ant(pattern: &str) -> Result<Self, DocketError> {
        let re = Regex::new(&ant_to_regex(pattern))
            .map_err(|e| DocketError::invalid_pattern(&format!("{}: {}", pattern, e)))?;
        Ok(Self::new(move |path: &str| re.is_match(path)))
    }

    pub fn prefix(prefix: &str) -> Self {
        let prefix = prefix.to_string();
        Self::new(move |path: &str| path.starts_with(&prefix))
    }
}

fn ant_to_regex(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::from("^");
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let double_star = chars.get(i + 1) == Some(&'*');
        match c {
            // trailing "/**" also matches the bare directory
            '/' if double_star && chars.get(i + 2) == Some(&'*') && i + 3 == chars.len() => {
                out.push_str("(?:/.*)?");
                i += 3;
            }
            '*' if double_star => {
                if chars.get(i + 2) == Some(&'/') {
                    out.push_str("(?:.*/)?");
                    i += 3;
                } else {
                    out.push_str(".*");
                    i += 2;
                }
            }
            '*' => {
                out.push_str("[^/]*");
                i += 1;
            }
            '?' => {
                out.push_str("[^/]");
                i += 1;
            }
            _ => {
                let mut buf = [0u8; 4];
                out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
                i += 1;
            }
        }
    }

    out.push('$');
    out
}

/// A documented operation as seen by handler selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHandler {
    pub path: String,
    pub method: String,
    pub operation_id: Option<String>,
    pub tags: Vec<String>,
}

impl RequestHandler {
    pub fn new(path: &str, method: &str) -> Self {
        Self {
            path: path.to_string(),
            method: method.to_ascii_uppercase(),
            operation_id: None,
            tags: Vec::new(),
        }
    }

    pub fn with_operation_id(mut self, operation_id: Option<String>) -> Self {
        self.operation_id = operation_id;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

impl Selector<RequestHandler> {
    pub fn with_tag(tag: &str) -> Self {
        let tag = tag.to_string();
        Self::new(move |handler: &RequestHandler| handler.tags.iter().any(|t| *t == tag))
    }

    pub fn with_method(method: &str) -> Self {
        let method = method.to_ascii_uppercase();
        Self::new(move |handler: &RequestHandler| handler.method == method)
    }

    pub fn base_path(prefix: &str) -> Self {
        let prefix = prefix.to_string();
        Self::new(move |handler: &RequestHandler| handler.path.starts_with(&prefix))
    }
}

//! Insertion-ordered query-string construction.

use std::fmt;

use url::form_urlencoded;

/// An ordered set of query parameters where values may be absent.
///
/// Absent (`None`) values are never serialized; present values are, even
/// when falsy (`0`, `false`, `""`). Serialization preserves insertion
/// order and uses form encoding (space becomes `+`).
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, Option<String>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a possibly-absent parameter. Numeric and boolean values are
    /// stringified before encoding.
    pub fn param<T: ToString>(mut self, name: &str, value: Option<T>) -> Self {
        self.pairs
            .push((name.to_string(), value.map(|v| v.to_string())));
        self
    }

    /// True when no parameter carries a present value.
    pub fn is_empty(&self) -> bool {
        self.pairs.iter().all(|(_, v)| v.is_none())
    }

    /// `""` when empty, otherwise `?name=value&...` in insertion order.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        let mut any = false;
        for (name, value) in &self.pairs {
            if let Some(value) = value {
                serializer.append_pair(name, value);
                any = true;
            }
        }
        if any {
            format!("?{}", serializer.finish())
        } else {
            String::new()
        }
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

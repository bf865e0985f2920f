/// Objective templates: labels, placeholder tokens, and token providers.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

/// A zero-argument function yielding the candidate pool for one token.
///
/// Providers run on every resolution, so a pool may depend on live
/// configuration toggles.
#[derive(Clone)]
pub struct TokenProvider(Arc<dyn Fn() -> Vec<String> + Send + Sync>);

impl TokenProvider {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Vec<String> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// A provider over a fixed list of values.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pool: Vec<String> = values.into_iter().map(Into::into).collect();
        Self::new(move || pool.clone())
    }

    /// Compute the current pool.
    pub fn pool(&self) -> Vec<String> {
        (self.0)()
    }
}

impl fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenProvider(..)")
    }
}

/// How one token is filled: which pool, and how many distinct values.
#[derive(Debug, Clone)]
pub struct TokenSpec {
    pub provider: TokenProvider,
    pub count: usize,
}

/// A segment of a label split on its declared tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelSegment {
    /// Literal text, emitted as-is.
    Literal(String),
    /// A placeholder naming a key of the template's token map.
    Token(String),
}

/// An immutable objective template.
///
/// Every placeholder in `label` must be a key of `tokens`. Keys that never
/// appear in the label are allowed and simply ignored.
#[derive(Debug, Clone)]
pub struct ObjectiveTemplate {
    pub label: String,
    pub tokens: BTreeMap<String, TokenSpec>,
    pub weight: u32,
    pub is_time_consuming: bool,
    pub is_difficult: bool,
}

impl ObjectiveTemplate {
    /// A template with no tokens, weight 1 and both flags off.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tokens: BTreeMap::new(),
            weight: 1,
            is_time_consuming: false,
            is_difficult: false,
        }
    }

    pub fn token(mut self, key: &str, provider: TokenProvider, count: usize) -> Self {
        self.tokens
            .insert(key.to_string(), TokenSpec { provider, count });
        self
    }

    pub fn weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    pub fn difficult(mut self) -> Self {
        self.is_difficult = true;
        self
    }

    pub fn time_consuming(mut self) -> Self {
        self.is_time_consuming = true;
        self
    }

    /// Split the label on the declared token keys.
    pub fn segments(&self) -> Vec<LabelSegment> {
        let keys: Vec<&str> = self.tokens.keys().map(String::as_str).collect();
        split_label(&self.label, &keys)
    }

    /// Token keys that actually occur in the label.
    pub fn referenced_tokens(&self) -> BTreeSet<String> {
        self.segments()
            .into_iter()
            .filter_map(|segment| match segment {
                LabelSegment::Token(key) => Some(key),
                LabelSegment::Literal(_) => None,
            })
            .collect()
    }

    /// Token keys declared but never referenced by the label.
    pub fn unused_tokens(&self) -> Vec<&str> {
        let referenced = self.referenced_tokens();
        self.tokens
            .keys()
            .filter(|key| !referenced.contains(key.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Return a copy with token `from` renamed to `to`, in the token map and
    /// at every placeholder occurrence in the label.
    ///
    /// `to` must not already be a key of this template.
    pub fn rename_token(&self, from: &str, to: &str) -> ObjectiveTemplate {
        debug_assert!(!self.tokens.contains_key(to), "token '{to}' already declared");

        let mut renamed = self.clone();
        let Some(spec) = renamed.tokens.remove(from) else {
            return renamed;
        };

        renamed.label = self
            .segments()
            .into_iter()
            .map(|segment| match segment {
                LabelSegment::Token(key) if key == from => to.to_string(),
                LabelSegment::Token(key) => key,
                LabelSegment::Literal(text) => text,
            })
            .collect();
        renamed.tokens.insert(to.to_string(), spec);
        renamed
    }

    /// Return a copy whose label starts with `prefix`.
    pub fn with_label_prefix(&self, prefix: &str) -> ObjectiveTemplate {
        let mut prefixed = self.clone();
        prefixed.label = format!("{}{}", prefix, self.label);
        prefixed
    }
}

/// Split `label` into literal and token segments.
///
/// At each position the longest matching key wins, so `DROPS` is never read
/// as `DROP` followed by a literal `S`.
pub fn split_label(label: &str, keys: &[&str]) -> Vec<LabelSegment> {
    let mut keys: Vec<&str> = keys.iter().copied().filter(|k| !k.is_empty()).collect();
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut segments = Vec::new();
    let mut literal_buf = String::new();
    let mut rest = label;

    while let Some(ch) = rest.chars().next() {
        if let Some(key) = keys.iter().find(|key| rest.starts_with(**key)) {
            if !literal_buf.is_empty() {
                segments.push(LabelSegment::Literal(std::mem::take(&mut literal_buf)));
            }
            segments.push(LabelSegment::Token(key.to_string()));
            rest = &rest[key.len()..];
        } else {
            literal_buf.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }

    if !literal_buf.is_empty() {
        segments.push(LabelSegment::Literal(literal_buf));
    }

    segments
}

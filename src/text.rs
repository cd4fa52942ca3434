//! Translatable text and the text resolver capability.
use std::borrow::Cow;

use ahash::{HashMap, HashMapExt};

use crate::entity::replace_placeholders;

/// The translation domain used when none is named.
pub const DEFAULT_DOMAIN: &str = "messages";

/// Text that is looked up through a [`TextResolver`] before it is embedded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TranslatableText {
    /// A key in the default domain.
    Key(String),
    /// A key in a named domain.
    Domain { domain: String, key: String },
}

impl TranslatableText {
    pub fn key(&self) -> &str {
        match self {
            TranslatableText::Key(key) => key.as_str(),
            TranslatableText::Domain { key, .. } => key.as_str(),
        }
    }

    /// The named domain, if any.
    pub fn domain(&self) -> Option<&str> {
        match self {
            TranslatableText::Key(_) => None,
            TranslatableText::Domain { domain, .. } => Some(domain.as_str()),
        }
    }

    /// Resolve into a plain string.
    pub fn resolve(&self, resolver: &dyn TextResolver) -> String {
        resolver.translate(self.key(), self.domain())
    }

    pub(crate) fn resolve_with(
        &self,
        resolver: &dyn TextResolver,
        replacements: &[(&str, &str)],
    ) -> String {
        resolver.translate_with(self.key(), replacements, self.domain())
    }
}

impl From<&str> for TranslatableText {
    fn from(key: &str) -> Self {
        TranslatableText::Key(key.to_string())
    }
}

impl From<String> for TranslatableText {
    fn from(key: String) -> Self {
        TranslatableText::Key(key)
    }
}

impl From<&String> for TranslatableText {
    fn from(key: &String) -> Self {
        TranslatableText::Key(key.clone())
    }
}

/// `(domain, key)`
impl From<(&str, &str)> for TranslatableText {
    fn from((domain, key): (&str, &str)) -> Self {
        TranslatableText::Domain {
            domain: domain.to_string(),
            key: key.to_string(),
        }
    }
}

/// Looks up localized strings.
///
/// Implementations must not fail: an unknown key gives back the key itself
/// (or some other fallback string).
pub trait TextResolver {
    /// Translate `key`, in `domain` or the default domain when `None`.
    fn translate(&self, key: &str, domain: Option<&str>) -> String;

    /// Translate `key` and substitute each placeholder with its value.
    fn translate_with(
        &self,
        key: &str,
        replacements: &[(&str, &str)],
        domain: Option<&str>,
    ) -> String {
        let message = self.translate(key, domain);
        replace_placeholders(Cow::Owned(message), replacements).into_owned()
    }
}

/// A text resolver that returns every key unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl TextResolver for Passthrough {
    fn translate(&self, key: &str, _domain: Option<&str>) -> String {
        key.to_string()
    }
}

/// An in-memory message catalog, organized by domain.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    domains: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            domains: HashMap::new(),
        }
    }

    /// Add a message to the default domain.
    pub fn add(&mut self, key: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.add_to_domain(DEFAULT_DOMAIN, key, message)
    }

    /// Add a message to `domain`.
    pub fn add_to_domain(
        &mut self,
        domain: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> &mut Self {
        self.domains
            .entry(domain.into())
            .or_default()
            .insert(key.into(), message.into());
        self
    }

    pub fn get(&self, key: &str, domain: Option<&str>) -> Option<&str> {
        self.domains
            .get(domain.unwrap_or(DEFAULT_DOMAIN))?
            .get(key)
            .map(String::as_str)
    }
}

impl TextResolver for Catalog {
    fn translate(&self, key: &str, domain: Option<&str>) -> String {
        match self.get(key, domain) {
            Some(message) => message.to_string(),
            None => {
                tracing::trace!(key, domain, "no translation, using key");
                key.to_string()
            }
        }
    }
}

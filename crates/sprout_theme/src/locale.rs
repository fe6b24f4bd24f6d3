//! Locale tags
//!
//! The engine only stores the active locale so consumers can pick strings
//! from it. Translation lookup lives outside this crate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalize a locale identifier.
///
/// - Trims whitespace.
/// - Converts `_` to `-` (`en_US` becomes `en-US`).
pub fn normalize_locale(s: &str) -> String {
    s.trim().replace('_', "-")
}

/// A normalized, non-empty locale tag such as `zh-CN`
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    pub const ZH_CN: &'static str = "zh-CN";
    pub const EN_US: &'static str = "en-US";

    /// Normalize `tag`. Returns `None` for an empty tag.
    pub fn new(tag: &str) -> Option<Self> {
        let tag = normalize_locale(tag);
        if tag.is_empty() {
            None
        } else {
            Some(Self(tag))
        }
    }

    pub fn zh_cn() -> Self {
        Self(Self::ZH_CN.to_string())
    }

    pub fn en_us() -> Self {
        Self(Self::EN_US.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag (`zh` for `zh-CN`)
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Lookup order for translations: the tag, its language, then `en-US`.
    ///
    /// `ko-KR` gives `["ko-KR", "ko", "en-US"]`.
    pub fn fallback_chain(&self) -> Vec<String> {
        let mut chain = vec![self.0.clone()];
        for candidate in [self.language(), Self::EN_US] {
            if !candidate.is_empty() && !chain.iter().any(|c| c == candidate) {
                chain.push(candidate.to_string());
            }
        }
        chain
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::zh_cn()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Locale {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Locale::new(&value).ok_or_else(|| "locale tag must not be empty".to_string())
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

//! Resolver configuration.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Caps and thresholds used while composing results.
///
/// Every field has a default, so a partial JSON document only overrides what it
/// names:
///
/// ```rust
/// use storefront_search::config::ResolverConfig;
///
/// let config = ResolverConfig::from_json(r#"{ "full_related_cap": 3 }"#).unwrap();
/// assert_eq!(config.full_related_cap, 3);
/// assert_eq!(config.compact_total_cap, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
  /// Maximum number of direct plus related results in compact mode.
  #[serde(default = "default_compact_total_cap")]
  pub compact_total_cap: usize,
  /// Maximum number of related results in full mode.
  #[serde(default = "default_full_related_cap")]
  pub full_related_cap: usize,
  /// Keyword-tier words shorter than this many characters are ignored.
  #[serde(default = "default_min_keyword_len")]
  pub min_keyword_len: usize,
  /// Direct rows shown in the live-suggestion panel.
  #[serde(default = "default_suggestion_rows")]
  pub suggestion_direct_rows: usize,
  /// Related rows shown in the live-suggestion panel.
  #[serde(default = "default_suggestion_rows")]
  pub suggestion_related_rows: usize,
}

fn default_compact_total_cap() -> usize {
  8
}

fn default_full_related_cap() -> usize {
  6
}

fn default_min_keyword_len() -> usize {
  3
}

fn default_suggestion_rows() -> usize {
  4
}

impl Default for ResolverConfig {
  fn default() -> Self {
    Self {
      compact_total_cap: default_compact_total_cap(),
      full_related_cap: default_full_related_cap(),
      min_keyword_len: default_min_keyword_len(),
      suggestion_direct_rows: default_suggestion_rows(),
      suggestion_related_rows: default_suggestion_rows(),
    }
  }
}

impl ResolverConfig {
  /// Parses and validates a configuration from JSON.
  pub fn from_json(json: &str) -> Result<Self, ConfigError> {
    let config: Self = serde_json::from_str(json)?;
    config.validate()
  }

  /// Rejects configurations under which the compact surface could never show
  /// anything.
  pub fn validate(self) -> Result<Self, ConfigError> {
    if self.compact_total_cap == 0 {
      return Err(ConfigError::ZeroCap("compact_total_cap"));
    }
    Ok(self)
  }

  pub fn compact_total_cap(mut self, cap: usize) -> Self {
    self.compact_total_cap = cap;
    self
  }

  pub fn full_related_cap(mut self, cap: usize) -> Self {
    self.full_related_cap = cap;
    self
  }

  pub fn min_keyword_len(mut self, len: usize) -> Self {
    self.min_keyword_len = len;
    self
  }

  /// Sets how many direct and related rows the suggestion panel shows.
  pub fn suggestion_rows(mut self, direct: usize, related: usize) -> Self {
    self.suggestion_direct_rows = direct;
    self.suggestion_related_rows = related;
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    let config = ResolverConfig::default();
    assert_eq!(config.compact_total_cap, 8);
    assert_eq!(config.full_related_cap, 6);
    assert_eq!(config.min_keyword_len, 3);
    assert_eq!(config.suggestion_direct_rows, 4);
    assert_eq!(config.suggestion_related_rows, 4);
  }

  #[test]
  fn test_empty_json_uses_defaults() {
    let config = ResolverConfig::from_json("{}").unwrap();
    assert_eq!(config, ResolverConfig::default());
  }

  #[test]
  fn test_zero_compact_cap_rejected() {
    let err = ResolverConfig::from_json(r#"{ "compact_total_cap": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroCap("compact_total_cap")));
  }

  #[test]
  fn test_malformed_json() {
    let err = ResolverConfig::from_json("{ nope").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
  }
}

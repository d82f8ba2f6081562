//! Ordered literal substitutions.
//!
//! The list is applied one entry at a time over the accumulating text, so an
//! entry can rewrite text that an earlier entry inserted. Keeping the list in
//! a [`Vec`] (and decoding through [`IndexMap`]) preserves the order given on
//! the command line.

use indexmap::IndexMap;

use crate::error::ConfigError;

/// A single literal `key` to `value` replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
  pub key:   String,
  pub value: String,
}

/// An ordered list of [`Substitution`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions(Vec<Substitution>);

impl Substitutions {
  /// Parse a JSON object whose values are all strings.
  ///
  /// Keys keep the order they appear in. A repeated key stays at its first
  /// position and takes the last value given for it.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::Substitutions`] when the input is not a JSON
  /// object of strings.
  pub fn from_json(input: &str) -> Result<Self, ConfigError> {
    let map: IndexMap<String, String> = serde_json::from_str(input)
      .map_err(|e| ConfigError::Substitutions(e.to_string()))?;
    Ok(map.into_iter().collect())
  }

  /// Apply every substitution in order and return the rewritten text.
  #[must_use]
  pub fn apply(&self, text: &str) -> String {
    self
      .0
      .iter()
      .fold(text.to_string(), |acc, sub| acc.replace(&sub.key, &sub.value))
  }

  pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
    self.0.push(Substitution {
      key:   key.into(),
      value: value.into(),
    });
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Substitution> {
    self.0.iter()
  }

  #[must_use]
  pub const fn len(&self) -> usize {
    self.0.len()
  }

  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl FromIterator<(String, String)> for Substitutions {
  fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
    Self(
      iter
        .into_iter()
        .map(|(key, value)| Substitution { key, value })
        .collect(),
    )
  }
}

impl<'a> IntoIterator for &'a Substitutions {
  type IntoIter = std::slice::Iter<'a, Substitution>;
  type Item = &'a Substitution;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

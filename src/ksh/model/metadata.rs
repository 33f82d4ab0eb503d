//! Key-value store of the header, and of the settings inside the body.

use std::{collections::HashMap, str::FromStr};

/// The `key=value` pairs read from the header section.
///
/// Keys are case-sensitive, and the value of a repeated key is the last one written. Values are kept as written, so parsing them into numbers and such is up to the consumer (see [`Metadata::get_parsed`]).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Metadata(HashMap<String, String>);

/// The `key=value` pairs met in the body, attached to a tick or a block.
pub type Settings = Metadata;

impl Metadata {
    /// Inserts the pair, overwriting the old value of the key.
    pub(crate) fn upsert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the value of the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the value of the key parsed as `T`, or `None` if missing.
    ///
    /// # Errors
    ///
    /// Returns the error of [`FromStr`] if the value exists but is not a `T`.
    ///
    /// ```
    /// use ksh_rs::ksh::{default_config, parse_ksh};
    ///
    /// let chart = parse_ksh("level=17\r\n--\r\n", default_config()).unwrap();
    /// assert_eq!(chart.metadata().get_parsed::<u8>("level"), Some(Ok(17)));
    /// assert_eq!(chart.metadata().get_parsed::<u8>("difficulty"), None);
    /// ```
    pub fn get_parsed<T: FromStr>(&self, key: &str) -> Option<Result<T, T::Err>> {
        self.get(key).map(str::parse)
    }

    /// Returns whether the key exists.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of the keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether there is no key.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Self::default();
        for (key, value) in iter {
            metadata.upsert(key, value);
        }
        metadata
    }
}

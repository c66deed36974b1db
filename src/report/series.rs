//! Year-keyed value series.
//!
//! Report JSON keys years as composite labels like `"2023-4"` (year and exam
//! application). Insertion order in the source document is assumed to be
//! chronological and is preserved here; `serde_json`'s map types would sort
//! or rehash keys, so the series deserializes through its own map visitor.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// Extract the display year from a composite label: `"2023-4"` -> `"2023"`.
/// Idempotent on already-bare years.
pub fn year_label(raw: &str) -> &str {
    raw.split('-').next().unwrap_or(raw)
}

/// An insertion-ordered mapping from year label to numeric value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct YearSeries(Vec<(String, f64)>);

impl YearSeries {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw year keys in source order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(key, _)| key.as_str())
    }

    /// Display labels in source order, with the application suffix stripped.
    pub fn labels(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|(key, _)| year_label(key).to_string())
            .collect()
    }

    /// Values in source order, ready for a chart dataset.
    pub fn values(&self) -> Vec<f64> {
        self.0.iter().map(|(_, value)| *value).collect()
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| *value)
    }

    /// The most recent year key, assuming source order is chronological.
    pub fn last_key(&self) -> Option<&str> {
        self.0.last().map(|(key, _)| key.as_str())
    }
}

impl FromIterator<(String, f64)> for YearSeries {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for YearSeries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SeriesVisitor;

        impl<'de> Visitor<'de> for SeriesVisitor {
            type Value = YearSeries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a map of year labels to numeric values")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, f64>()? {
                    entries.push(entry);
                }
                Ok(YearSeries(entries))
            }
        }

        deserializer.deserialize_map(SeriesVisitor)
    }
}

/// Deserialize a JSON object into insertion-ordered `(key, value)` pairs.
pub(crate) fn ordered_entries<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct EntriesVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
        type Value = Vec<(String, V)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a JSON object")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, V>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor(PhantomData))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn year_label_strips_application_suffix() {
        assert_eq!(year_label("2023-4"), "2023");
        assert_eq!(year_label("2025"), "2025");
        assert_eq!(year_label(""), "");
    }

    #[test]
    fn preserves_source_order() {
        let series: YearSeries =
            serde_json::from_str(r#"{"2024-1": 10, "2022-4": 30, "2023-4": 20}"#).unwrap();
        let keys: Vec<&str> = series.keys().collect();
        assert_eq!(keys, vec!["2024-1", "2022-4", "2023-4"]);
        assert_eq!(series.values(), vec![10.0, 30.0, 20.0]);
        assert_eq!(series.labels(), vec!["2024", "2022", "2023"]);
    }

    #[test]
    fn lookup_and_last_key() {
        let series: YearSeries =
            serde_json::from_str(r#"{"2023-4": 250, "2024-4": 260}"#).unwrap();
        assert_eq!(series.get("2023-4"), Some(250.0));
        assert_eq!(series.get("2021-4"), None);
        assert_eq!(series.last_key(), Some("2024-4"));
    }
}

//! Metadata attached to log calls and the policy for merging the per-logger
//! and per-call maps.
//!
//! `Metadata` is a `BTreeMap`, so iteration is always sorted by key and every
//! rendering below is deterministic regardless of insertion order.
use std::collections::BTreeMap;

/// Key/value pairs attached to a logger or a single log call.
pub type Metadata = BTreeMap<String, String>;

/// Key of the single entry that replaces merged metadata when the per-logger
/// and per-call maps share keys.
pub const METADATA_KEY_CONFLICT: &str = "METADATA_KEY_CONFLICT";

/// The result of merging per-logger metadata with per-call metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Neither side carried any entries.
    Empty,
    /// The union of both maps; no key appeared on both sides.
    Merged(Metadata),
    /// Keys present on both sides, sorted ascending.
    Conflict(Vec<String>),
}

impl MergeOutcome {
    /// Converts the outcome into the metadata stored on a captured message.
    ///
    /// A conflict becomes a map with the single `METADATA_KEY_CONFLICT` entry
    /// whose value is the comma-joined conflicting keys.
    pub fn into_metadata(self) -> Option<Metadata> {
        match self {
            MergeOutcome::Empty => None,
            MergeOutcome::Merged(metadata) => Some(metadata),
            MergeOutcome::Conflict(keys) => Some(Metadata::from([(
                METADATA_KEY_CONFLICT.to_string(),
                keys.join(","),
            )])),
        }
    }
}

/// Merges the persistent metadata of a logger with the metadata of one call.
///
/// Any key present on both sides turns the whole result into a conflict; the
/// non-conflicting keys of that call are discarded.
pub fn merge(persistent: &Metadata, call: Option<&Metadata>) -> MergeOutcome {
    let call = match call {
        Some(call) if !call.is_empty() => call,
        _ if persistent.is_empty() => return MergeOutcome::Empty,
        _ => return MergeOutcome::Merged(persistent.clone()),
    };

    let conflicts: Vec<String> = call
        .keys()
        .filter(|key| persistent.contains_key(*key))
        .cloned()
        .collect();
    if !conflicts.is_empty() {
        return MergeOutcome::Conflict(conflicts);
    }

    let mut merged = persistent.clone();
    merged.extend(call.iter().map(|(k, v)| (k.clone(), v.clone())));
    MergeOutcome::Merged(merged)
}

/// Shorthand for `merge(persistent, call).into_metadata()`.
pub fn merge_metadata(persistent: &Metadata, call: Option<&Metadata>) -> Option<Metadata> {
    merge(persistent, call).into_metadata()
}

/// Renders each entry as `key<separator>value`, sorted by key.
pub fn metadata_strings(metadata: &Metadata, separator: &str) -> Vec<String> {
    metadata
        .iter()
        .map(|(key, value)| format!("{key}{separator}{value}"))
        .collect()
}

/// Separators used when rendering metadata into a single string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataStyle {
    /// Written once before the first entry.
    pub prefix: String,
    pub key_value_separator: String,
    pub entry_separator: String,
}

impl Default for MetadataStyle {
    fn default() -> Self {
        Self {
            prefix: "|".to_string(),
            key_value_separator: "=".to_string(),
            entry_separator: ";".to_string(),
        }
    }
}

/// Renders metadata as `<prefix>k1=v1;k2=v2`, or `""` when there is none.
pub fn render_metadata(metadata: Option<&Metadata>, style: &MetadataStyle) -> String {
    match metadata {
        Some(metadata) if !metadata.is_empty() => format!(
            "{}{}",
            style.prefix,
            metadata_strings(metadata, &style.key_value_separator).join(&style.entry_separator)
        ),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn md(pairs: &[(&str, &str)]) -> Metadata {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_inputs_produce_no_metadata() {
        assert_eq!(merge(&Metadata::new(), None), MergeOutcome::Empty);
        assert_eq!(merge(&Metadata::new(), Some(&Metadata::new())), MergeOutcome::Empty);
        assert_eq!(merge_metadata(&Metadata::new(), None), None);
    }

    #[test]
    fn disjoint_maps_are_unioned() {
        let persistent = md(&[("key0", "value0"), ("key3", "value3")]);
        let call = md(&[("key2", "value2"), ("key1", "value1")]);

        let merged = merge_metadata(&persistent, Some(&call)).unwrap();
        assert_eq!(
            render_metadata(Some(&merged), &MetadataStyle::default()),
            "|key0=value0;key1=value1;key2=value2;key3=value3"
        );

        assert_eq!(
            merge(&persistent, None),
            MergeOutcome::Merged(persistent.clone())
        );
        assert_eq!(
            merge(&Metadata::new(), Some(&call)),
            MergeOutcome::Merged(call.clone())
        );
    }

    #[test]
    fn shared_keys_replace_everything_with_conflict_marker() {
        let persistent = md(&[("key0", "a"), ("key1", "conflictingKey"), ("key4", "b")]);
        let call = md(&[("key4", "value4"), ("key2", "value2"), ("key1", "value1")]);

        assert_eq!(
            merge(&persistent, Some(&call)),
            MergeOutcome::Conflict(vec!["key1".to_string(), "key4".to_string()])
        );
        let rendered = render_metadata(
            merge_metadata(&persistent, Some(&call)).as_ref(),
            &MetadataStyle::default(),
        );
        assert_eq!(rendered, "|METADATA_KEY_CONFLICT=key1,key4");
    }

    #[test]
    fn conflict_is_raised_even_when_values_match() {
        let persistent = md(&[("key1", "value1")]);
        let call = md(&[("key1", "value1"), ("key2", "value2")]);
        let merged = merge_metadata(&persistent, Some(&call)).unwrap();
        assert_eq!(merged, md(&[(METADATA_KEY_CONFLICT, "key1")]));
    }

    #[test]
    fn metadata_strings_are_sorted_and_use_separator() {
        assert!(metadata_strings(&Metadata::new(), "-").is_empty());
        let metadata = md(&[("k2", "v2"), ("k1", "v1")]);
        assert_eq!(metadata_strings(&metadata, "="), vec!["k1=v1", "k2=v2"]);
        assert_eq!(metadata_strings(&metadata, "-"), vec!["k1-v1", "k2-v2"]);
    }

    #[test]
    fn render_metadata_honours_style() {
        let style = MetadataStyle {
            prefix: ":".to_string(),
            key_value_separator: "-".to_string(),
            entry_separator: ",".to_string(),
        };
        assert_eq!(render_metadata(None, &style), "");
        assert_eq!(render_metadata(Some(&Metadata::new()), &style), "");
        assert_eq!(
            render_metadata(Some(&md(&[("k2", "v2"), ("k1", "v1")])), &style),
            ":k1-v1,k2-v2"
        );
        assert_eq!(
            render_metadata(Some(&md(&[("k1", "v1")])), &MetadataStyle::default()),
            "|k1=v1"
        );
    }
}

//! Structural diffs between configs
//!
//! Provides [`ConfigDiff`], a recursive field-path comparison of two
//! [`WebsiteConfig`] values, and [`clip_to_scope`], which reverts every
//! change that falls outside a set of target fields.
//!
//! Comparison runs over the serialized JSON form, so paths use the wire
//! (camelCase) field names:
//! - objects compare key by key; a key present on one side only is
//!   [`ChangeKind::Added`] or [`ChangeKind::Removed`]
//! - arrays of equal length compare index by index
//! - arrays of different length are one [`ChangeKind::Modified`] at the
//!   array path
//! - everything else compares by value
//!
//! A reported path never has a reported ancestor, so changes are disjoint.

use crate::config::WebsiteConfig;
use crate::path::FieldPath;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::fmt::{self, Display, Formatter};

/// What happened at a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChangeKind {
    /// Key exists only in the new value
    Added,
    /// Key exists only in the old value
    Removed,
    /// Value differs
    Modified,
}

/// One changed path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FieldChange {
    /// Where the change is
    pub path: FieldPath,
    /// What kind of change
    pub kind: ChangeKind,
}

impl Display for FieldChange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let marker = match self.kind {
            ChangeKind::Added => '+',
            ChangeKind::Removed => '-',
            ChangeKind::Modified => '~',
        };
        write!(f, "{marker} {}", self.path)
    }
}

/// Set of changed paths between two configs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigDiff {
    changes: Vec<FieldChange>,
}

impl ConfigDiff {
    /// Diff two configs
    ///
    /// # Errors
    /// Returns error if either config cannot be serialized
    pub fn between(old: &WebsiteConfig, new: &WebsiteConfig) -> Result<Self, DiffError> {
        let old = serde_json::to_value(old).map_err(DiffError::Serialize)?;
        let new = serde_json::to_value(new).map_err(DiffError::Serialize)?;
        Ok(Self::between_values(&old, &new))
    }

    /// Diff two JSON values
    #[must_use]
    pub fn between_values(old: &JsonValue, new: &JsonValue) -> Self {
        let mut changes = Vec::new();
        walk(&FieldPath::root(), old, new, &mut changes);
        Self { changes }
    }

    /// All changes, in document order
    #[inline]
    #[must_use]
    pub fn changes(&self) -> &[FieldChange] {
        &self.changes
    }

    /// Changed paths, in document order
    pub fn paths(&self) -> impl Iterator<Item = &FieldPath> {
        self.changes.iter().map(|c| &c.path)
    }

    /// Check if nothing changed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of changed paths
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Changes not covered by any of `targets`
    ///
    /// A target covers a change when it is a prefix of the change path: a
    /// target of `theme` covers `theme.primary`. A change above a target is
    /// not covered, so resizing `sections` is outside a target of
    /// `sections.1.title`.
    #[must_use]
    pub fn outside(&self, targets: &[FieldPath]) -> Vec<&FieldChange> {
        self.changes
            .iter()
            .filter(|c| !targets.iter().any(|t| t.is_prefix_of(&c.path)))
            .collect()
    }

    /// Check that every change is covered by at least one target
    #[inline]
    #[must_use]
    pub fn is_within(&self, targets: &[FieldPath]) -> bool {
        self.outside(targets).is_empty()
    }
}

impl Display for ConfigDiff {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for change in &self.changes {
            writeln!(f, "{change}")?;
        }
        Ok(())
    }
}

fn walk(path: &FieldPath, old: &JsonValue, new: &JsonValue, out: &mut Vec<FieldChange>) {
    match (old, new) {
        (JsonValue::Object(a), JsonValue::Object(b)) => {
            for (key, a_val) in a {
                match b.get(key) {
                    Some(b_val) => walk(&path.child(key.as_str()), a_val, b_val, out),
                    None => out.push(FieldChange {
                        path: path.child(key.as_str()),
                        kind: ChangeKind::Removed,
                    }),
                }
            }
            for key in b.keys().filter(|k| !a.contains_key(*k)) {
                out.push(FieldChange {
                    path: path.child(key.as_str()),
                    kind: ChangeKind::Added,
                });
            }
        }
        (JsonValue::Array(a), JsonValue::Array(b)) if a.len() == b.len() => {
            for (i, (a_val, b_val)) in a.iter().zip(b).enumerate() {
                walk(&path.index(i), a_val, b_val, out);
            }
        }
        (a, b) if a == b => {}
        _ => out.push(FieldChange {
            path: path.clone(),
            kind: ChangeKind::Modified,
        }),
    }
}

/// Result of clipping a mutated config to its target fields
#[derive(Debug, Clone, PartialEq)]
pub struct ClippedConfig {
    /// Config with out-of-scope changes reverted
    pub config: WebsiteConfig,
    /// Paths whose changes were reverted
    pub reverted: Vec<FieldPath>,
}

/// Revert every change in `new` that lies outside `targets`
///
/// In-scope changes are kept as the mutator produced them. When a reverted
/// change sits above a target (a resized list holding a targeted item), the
/// old value is restored and the new value at each such target is copied
/// back in, if the target exists on both sides.
///
/// # Errors
/// Returns error if a config cannot be serialized, or if the clipped value no
/// longer deserializes as a config
pub fn clip_to_scope(
    old: &WebsiteConfig,
    new: &WebsiteConfig,
    targets: &[FieldPath],
) -> Result<ClippedConfig, DiffError> {
    let old_value = serde_json::to_value(old).map_err(DiffError::Serialize)?;
    let mutated = serde_json::to_value(new).map_err(DiffError::Serialize)?;
    let mut new_value = mutated.clone();

    let diff = ConfigDiff::between_values(&old_value, &mutated);
    let outside: Vec<FieldChange> = diff.outside(targets).into_iter().cloned().collect();

    if outside.is_empty() {
        return Ok(ClippedConfig {
            config: new.clone(),
            reverted: Vec::new(),
        });
    }

    for change in &outside {
        revert(&mut new_value, &old_value, change)?;
        for target in targets.iter().filter(|t| change.path.is_ancestor_of(t)) {
            let pointer = target.to_json_pointer();
            if let (Some(value), Some(slot)) =
                (mutated.pointer(&pointer), new_value.pointer_mut(&pointer))
            {
                slot.clone_from(value);
            }
        }
    }

    let config = serde_json::from_value(new_value).map_err(DiffError::Deserialize)?;
    Ok(ClippedConfig {
        config,
        reverted: outside.into_iter().map(|c| c.path).collect(),
    })
}

fn revert(new: &mut JsonValue, old: &JsonValue, change: &FieldChange) -> Result<(), DiffError> {
    let pointer = change.path.to_json_pointer();
    match change.kind {
        ChangeKind::Modified => {
            let previous = old
                .pointer(&pointer)
                .cloned()
                .ok_or_else(|| DiffError::MissingPath(change.path.clone()))?;
            let slot = new
                .pointer_mut(&pointer)
                .ok_or_else(|| DiffError::MissingPath(change.path.clone()))?;
            *slot = previous;
        }
        ChangeKind::Added => {
            let (parent, key) = split_parent(&change.path)?;
            if let Some(JsonValue::Object(map)) = new.pointer_mut(&parent.to_json_pointer()) {
                map.remove(key);
            }
        }
        ChangeKind::Removed => {
            let (parent, key) = split_parent(&change.path)?;
            let previous = old
                .pointer(&pointer)
                .cloned()
                .ok_or_else(|| DiffError::MissingPath(change.path.clone()))?;
            match new.pointer_mut(&parent.to_json_pointer()) {
                Some(JsonValue::Object(map)) => {
                    map.insert(key.to_string(), previous);
                }
                _ => return Err(DiffError::MissingPath(parent)),
            }
        }
    }
    Ok(())
}

fn split_parent(path: &FieldPath) -> Result<(FieldPath, &str), DiffError> {
    match (path.parent(), path.last()) {
        (Some(parent), Some(key)) => Ok((parent, key)),
        _ => Err(DiffError::MissingPath(path.clone())),
    }
}

/// Errors during diffing or clipping
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// Config could not be converted to JSON
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Clipped JSON is no longer a valid config
    #[error("clipped config is invalid: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// A reported path could not be found while reverting
    #[error("path not found while reverting: {0}")]
    MissingPath(FieldPath),
}

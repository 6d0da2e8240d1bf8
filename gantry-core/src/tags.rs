//! Partition tags and tag classification
//!
//! Tag classification is a pure function of the key prefix. Hidden tags
//! are internal bookkeeping and are never surfaced in user-facing tag
//! listings; system tags are platform-assigned but visible.

use serde::{Deserialize, Serialize};

/// Prefix for platform-assigned tags that remain user-visible.
pub const SYSTEM_TAG_PREFIX: &str = "gantry/";

/// Prefix for internal-only tags, filtered from all user-facing output.
pub const HIDDEN_TAG_PREFIX: &str = ".gantry/";

/// A single key/value tag on a partition.
///
/// Tags travel as an ordered sequence, never as an unordered map, so
/// filtered listings keep the source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn tag_type(&self) -> TagType {
        get_tag_type(&self.key)
    }
}

/// Classification of a tag key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagType {
    /// Set by user code; always surfaced.
    UserProvided,
    /// Assigned by the platform; surfaced.
    System,
    /// Internal bookkeeping; never surfaced.
    Hidden,
}

/// Classify a tag key by its prefix.
pub fn get_tag_type(key: &str) -> TagType {
    if key.starts_with(HIDDEN_TAG_PREFIX) {
        TagType::Hidden
    } else if key.starts_with(SYSTEM_TAG_PREFIX) {
        TagType::System
    } else {
        TagType::UserProvided
    }
}

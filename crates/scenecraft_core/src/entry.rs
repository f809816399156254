//! Timeline entry type.

use serde::{Deserialize, Serialize};

/// One user-authored beat anchored to a start/end offset in seconds.
///
/// Used for both action beats and dialogue lines. Times are kept as the
/// strings the user typed; they are never parsed or sorted.
///
/// # Examples
///
/// ```
/// use scenecraft_core::TimedEntry;
///
/// let entry = TimedEntry::new("0", "2", "Knight walks");
/// assert!(entry.is_valid());
///
/// let blank = TimedEntry::new("3", "5", "   ");
/// assert!(!blank.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimedEntry {
    /// Start offset as typed, possibly empty
    #[serde(default, alias = "startTime")]
    pub start_time: String,
    /// End offset as typed, possibly empty
    #[serde(default, alias = "endTime")]
    pub end_time: String,
    /// Free-form beat or dialogue text
    #[serde(default)]
    pub text: String,
}

impl TimedEntry {
    /// Create a new entry.
    pub fn new(
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
            text: text.into(),
        }
    }

    /// An entry is valid when its trimmed text is non-empty.
    pub fn is_valid(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

//! Run identifiers
//!
//! A `RunId` tags every pipeline execution so log lines from the same run
//! can be correlated. Ids are UUID v7, so their display form sorts by
//! creation time.

use std::fmt;
use uuid::Uuid;

/// Identifier of one pipeline run, displayed as `RUN-<uuid>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunId(Uuid);

impl RunId {
    /// Creates a new time-ordered identifier (v7)
    pub fn new_v7() -> Self {
        Self(Uuid::now_v7())
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RUN-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_id_display() {
        let display = RunId::new_v7().to_string();

        assert!(display.starts_with("RUN-"));
        assert_eq!(display.len(), "RUN-".len() + 36);
    }

    #[test]
    fn test_run_id_is_version_7() {
        let id = RunId::new_v7();
        assert_eq!(id.0.get_version_num(), 7);
    }
}

//! Conflict-check configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields the standard behaviour: all four slot rules in
//! class → teacher → room → qualification order, and no exam statuses
//! ignored.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::models::{ExamStatus, SlotConflictKind};

/// Tunables for the conflict checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConflictConfig {
    /// Slot rules to evaluate, in order. Duplicates are evaluated once.
    pub slot_rules: Vec<SlotConflictKind>,
    /// Existing exams with these statuses are skipped by the combined
    /// exam check.
    pub ignored_exam_statuses: Vec<ExamStatus>,
}

impl Default for ConflictConfig {
    fn default() -> Self {
        Self {
            slot_rules: SlotConflictKind::ALL.to_vec(),
            ignored_exam_statuses: Vec::new(),
        }
    }
}

impl ConflictConfig {
    /// Parses a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.as_ref().display(), ?config, "loaded conflict config");
        Ok(config)
    }

    /// Sets the slot rule order.
    pub fn with_slot_rules(mut self, rules: impl IntoIterator<Item = SlotConflictKind>) -> Self {
        self.slot_rules = rules.into_iter().collect();
        self
    }

    /// Adds an ignored exam status.
    pub fn ignoring_status(mut self, status: ExamStatus) -> Self {
        if !self.ignored_exam_statuses.contains(&status) {
            self.ignored_exam_statuses.push(status);
        }
        self
    }

    /// Whether existing exams with `status` are considered.
    pub fn considers_status(&self, status: ExamStatus) -> bool {
        !self.ignored_exam_statuses.contains(&status)
    }
}

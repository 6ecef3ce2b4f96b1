//! Teacher reference data.
//!
//! Read-only qualification records: which subjects each teacher may teach.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A teacher and the subjects they are qualified for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Teacher name; matched against `ClassPeriod::teacher`.
    pub name: String,
    /// Qualified subjects.
    #[serde(default)]
    pub subjects: HashSet<String>,
}

impl Teacher {
    /// Creates a teacher with no subjects.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subjects: HashSet::new(),
        }
    }

    /// Adds a qualified subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subjects.insert(subject.into());
        self
    }

    /// Whether the teacher may teach `subject`.
    pub fn is_qualified_for(&self, subject: &str) -> bool {
        self.subjects.contains(subject)
    }
}

/// Finds a teacher by exact name.
pub fn find_teacher<'a>(teachers: &'a [Teacher], name: &str) -> Option<&'a Teacher> {
    teachers.iter().find(|t| t.name == name)
}

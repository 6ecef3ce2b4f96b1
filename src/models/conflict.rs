//! Slot conflict model.
//!
//! A conflict is reported when a requested class period would share a
//! resource (class, teacher, room) with an existing occupant of the same
//! slot, or when the teacher is not qualified for the subject.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ClassPeriod;

/// A slot-level conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConflict {
    /// Conflict category.
    #[serde(rename = "type")]
    pub kind: SlotConflictKind,
    /// Human-readable warning for display.
    pub message: String,
    /// Existing occupant that clashes. `None` for qualification conflicts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupant: Option<ClassPeriod>,
}

/// Classification of slot conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotConflictKind {
    /// Class already has a period in this slot.
    Class,
    /// Teacher already teaches in this slot.
    Teacher,
    /// Room already occupied in this slot.
    Room,
    /// Teacher is not qualified for the subject.
    Qualification,
}

impl SlotConflictKind {
    /// All kinds, in standard evaluation order.
    pub const ALL: [SlotConflictKind; 4] = [
        SlotConflictKind::Class,
        SlotConflictKind::Teacher,
        SlotConflictKind::Room,
        SlotConflictKind::Qualification,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotConflictKind::Class => "class",
            SlotConflictKind::Teacher => "teacher",
            SlotConflictKind::Room => "room",
            SlotConflictKind::Qualification => "qualification",
        }
    }
}

impl fmt::Display for SlotConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SlotConflict {
    /// Creates a class double-booking conflict.
    pub fn class(occupant: &ClassPeriod) -> Self {
        Self {
            kind: SlotConflictKind::Class,
            message: format!(
                "Class {} already has {} with {} in this slot",
                occupant.class, occupant.subject, occupant.teacher
            ),
            occupant: Some(occupant.clone()),
        }
    }

    /// Creates a teacher double-booking conflict.
    pub fn teacher(occupant: &ClassPeriod) -> Self {
        Self {
            kind: SlotConflictKind::Teacher,
            message: format!(
                "Teacher {} is already teaching class {} in this slot",
                occupant.teacher, occupant.class
            ),
            occupant: Some(occupant.clone()),
        }
    }

    /// Creates a room double-booking conflict.
    pub fn room(occupant: &ClassPeriod) -> Self {
        Self {
            kind: SlotConflictKind::Room,
            message: format!(
                "Room {} is already used by class {} in this slot",
                occupant.room, occupant.class
            ),
            occupant: Some(occupant.clone()),
        }
    }

    /// Creates a qualification conflict.
    pub fn qualification(teacher: &str, subject: &str) -> Self {
        Self {
            kind: SlotConflictKind::Qualification,
            message: format!("Teacher {teacher} is not qualified to teach {subject}"),
            occupant: None,
        }
    }
}

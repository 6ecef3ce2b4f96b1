//! Built-in slot rules.
//!
//! # Standard order
//!
//! 1. [`ClassClash`]: class already has a period in the slot
//! 2. [`TeacherClash`]: teacher already teaching in the slot
//! 3. [`RoomClash`]: room already occupied
//! 4. [`Qualification`]: teacher lacks the subject
//!
//! The three clash rules report the first matching occupant only.

use super::{SlotContext, SlotRule};
use crate::models::{find_teacher, SlotConflict, SlotConflictKind};

/// Class double-booking.
#[derive(Debug, Clone, Copy)]
pub struct ClassClash;

impl SlotRule for ClassClash {
    fn kind(&self) -> SlotConflictKind {
        SlotConflictKind::Class
    }

    fn check(&self, context: &SlotContext<'_>) -> Option<SlotConflict> {
        context
            .find_occupant(|p| p.class == context.assignment.class)
            .map(SlotConflict::class)
    }

    fn description(&self) -> &'static str {
        "Class already assigned in this slot"
    }
}

/// Teacher double-booking.
#[derive(Debug, Clone, Copy)]
pub struct TeacherClash;

impl SlotRule for TeacherClash {
    fn kind(&self) -> SlotConflictKind {
        SlotConflictKind::Teacher
    }

    fn check(&self, context: &SlotContext<'_>) -> Option<SlotConflict> {
        context
            .find_occupant(|p| p.teacher == context.assignment.teacher)
            .map(SlotConflict::teacher)
    }

    fn description(&self) -> &'static str {
        "Teacher already teaching in this slot"
    }
}

/// Room double-booking.
#[derive(Debug, Clone, Copy)]
pub struct RoomClash;

impl SlotRule for RoomClash {
    fn kind(&self) -> SlotConflictKind {
        SlotConflictKind::Room
    }

    fn check(&self, context: &SlotContext<'_>) -> Option<SlotConflict> {
        context
            .find_occupant(|p| p.room == context.assignment.room)
            .map(SlotConflict::room)
    }

    fn description(&self) -> &'static str {
        "Room already occupied in this slot"
    }
}

/// Teacher qualification.
///
/// A teacher with no reference record is not checked: the rule reports
/// nothing rather than failing.
#[derive(Debug, Clone, Copy)]
pub struct Qualification;

impl SlotRule for Qualification {
    fn kind(&self) -> SlotConflictKind {
        SlotConflictKind::Qualification
    }

    fn check(&self, context: &SlotContext<'_>) -> Option<SlotConflict> {
        let a = context.assignment;
        let teacher = match find_teacher(context.teachers, &a.teacher) {
            Some(t) => t,
            None => {
                tracing::debug!(teacher = %a.teacher, "no teacher record; qualification not checked");
                return None;
            }
        };

        if teacher.is_qualified_for(&a.subject) {
            None
        } else {
            Some(SlotConflict::qualification(&a.teacher, &a.subject))
        }
    }

    fn description(&self) -> &'static str {
        "Teacher not qualified for subject"
    }
}

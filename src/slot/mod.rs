//! Timetable slot conflict checks.
//!
//! A requested class period is checked against the occupants of its
//! (day, time) slot by an ordered list of independent rules. Each rule
//! reports at most one conflict; results come back in rule order.
//!
//! # Usage
//!
//! ```
//! use u_timetable::models::{ClassPeriod, ScheduleSlot, SlotAssignment, Teacher, Timetable};
//! use u_timetable::slot::check_schedule_conflicts;
//!
//! let timetable = Timetable::new().with_slot(
//!     ScheduleSlot::new("Monday", "08:00")
//!         .with_class(ClassPeriod::new("10A", "Smith", "Math", "R101")),
//! );
//! let teachers = vec![Teacher::new("Jones").with_subject("Physics")];
//! let request = SlotAssignment::new("Monday", "08:00", "10B", "Jones", "R101", "Physics");
//!
//! let conflicts = check_schedule_conflicts(&request, &timetable, None, &teachers);
//! assert_eq!(conflicts.len(), 1); // room R101 is taken
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::SlotContext;
pub use engine::{check_schedule_conflicts, SlotRuleEngine};

use crate::models::{SlotConflict, SlotConflictKind};
use std::fmt::Debug;

/// A single slot conflict rule.
///
/// Rules are evaluated independently; a rule must not assume any other
/// rule ran before it.
pub trait SlotRule: Send + Sync + Debug {
    /// Category of conflict this rule reports.
    fn kind(&self) -> SlotConflictKind;

    /// Returns the first conflict found, if any.
    fn check(&self, context: &SlotContext<'_>) -> Option<SlotConflict>;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.kind().as_str()
    }
}

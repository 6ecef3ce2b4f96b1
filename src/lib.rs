//! Conflict detection for exam and class timetables.
//!
//! Pure, stateless checks a scheduling front end runs before saving:
//! given a candidate exam or class period and the existing records, they
//! return the conflicts found. Nothing here performs I/O or holds state,
//! so every function is safe to call from any thread.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Exam`, `ExamInterval`, `ScheduleSlot`,
//!   `ClassPeriod`, `Timetable`, `SlotAssignment`, `Teacher`, `SlotConflict`
//! - **`exam`**: Time-overlap predicate and room / invigilator / class checks
//! - **`slot`**: Ordered rule engine for timetable slot conflicts
//! - **`validation`**: Input integrity checks (dates, durations, duplicates)
//! - **`config`**: `ConflictConfig` (rule order, ignored exam statuses)
//!
//! # Failure model
//!
//! Conflict checks never return errors. Unparsable exam times compare as
//! "no overlap", a missing slot or teacher record as "no conflict".
//! Use [`validation`] to reject such input up front.

pub mod config;
pub mod error;
pub mod exam;
pub mod logging;
pub mod models;
pub mod slot;
pub mod validation;

pub use config::ConflictConfig;
pub use error::{ConfigError, ExamTimeError};
pub use exam::{
    check_class_conflict, check_exam_conflicts, check_invigilator_conflict, check_room_conflict,
    check_time_conflict, ExamConflictReport, ExamResource,
};
pub use slot::{check_schedule_conflicts, SlotRuleEngine};

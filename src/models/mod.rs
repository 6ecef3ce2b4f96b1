//! Timetable domain models.
//!
//! Provides the data types the conflict checks operate on. Records are
//! shaped like the JSON the scheduling backend serves (camelCase keys),
//! so they deserialize directly.
//!
//! # Domain Mappings
//!
//! | u-timetable | Exams | Weekly classes |
//! |-------------|-------|----------------|
//! | Exam | Sitting | - |
//! | ScheduleSlot | - | Period bucket |
//! | ClassPeriod | - | Lesson |
//! | Teacher | Invigilator | Teacher |

mod conflict;
mod exam;
mod teacher;
mod timetable;

pub use conflict::{SlotConflict, SlotConflictKind};
pub use exam::{Exam, ExamInterval, ExamStatus};
pub use teacher::{find_teacher, Teacher};
pub use timetable::{ClassPeriod, ScheduleSlot, SlotAssignment, Timetable};

//! Exam conflict checks.
//!
//! Two exams conflict on a resource (room, invigilator, class) when they
//! share that resource, fall on the same date, and their time intervals
//! intersect. Intervals are half-open, so back-to-back exams are fine.
//!
//! # Malformed records
//! An exam whose date or start time cannot be parsed never overlaps
//! anything. Such records are logged at `warn` and otherwise ignored;
//! run [`crate::validation::validate_exams`] first to reject them.

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ConflictConfig;
use crate::models::{Exam, ExamInterval};

/// Resource dimension an exam occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamResource {
    Room,
    Invigilator,
    Class,
}

impl ExamResource {
    /// The exam's identifier for this resource.
    pub fn key<'a>(&self, exam: &'a Exam) -> &'a str {
        match self {
            ExamResource::Room => &exam.room,
            ExamResource::Invigilator => &exam.invigilator,
            ExamResource::Class => &exam.class,
        }
    }
}

fn interval_or_warn(exam: &Exam) -> Option<ExamInterval> {
    match exam.interval() {
        Ok(iv) => Some(iv),
        Err(e) => {
            warn!(exam_id = %exam.id, error = %e, "exam interval unavailable; treating as no overlap");
            None
        }
    }
}

/// Whether two exams' time intervals intersect.
///
/// Symmetric. Returns `false` if either interval cannot be computed.
pub fn check_time_conflict(a: &Exam, b: &Exam) -> bool {
    match (interval_or_warn(a), interval_or_warn(b)) {
        (Some(ia), Some(ib)) => ia.overlaps(&ib),
        _ => false,
    }
}

fn matching<'a>(
    resource: ExamResource,
    candidate: &Exam,
    existing: impl IntoIterator<Item = &'a Exam>,
) -> Vec<&'a Exam> {
    let key = resource.key(candidate);
    existing
        .into_iter()
        .filter(|e| resource.key(e) == key && e.date == candidate.date)
        .filter(|e| check_time_conflict(candidate, e))
        .collect()
}

/// Existing exams that clash with `candidate` on `resource`.
///
/// Keeps those with the same resource key and date whose interval
/// overlaps the candidate's, in their original order.
pub fn check_resource_conflict<'a>(
    resource: ExamResource,
    candidate: &Exam,
    existing: &'a [Exam],
) -> Vec<&'a Exam> {
    let conflicts = matching(resource, candidate, existing);
    debug!(
        ?resource,
        key = resource.key(candidate),
        date = %candidate.date,
        conflicts = conflicts.len(),
        "exam resource check"
    );
    conflicts
}

/// Existing exams in the same room at an overlapping time.
pub fn check_room_conflict<'a>(candidate: &Exam, existing: &'a [Exam]) -> Vec<&'a Exam> {
    check_resource_conflict(ExamResource::Room, candidate, existing)
}

/// Existing exams with the same invigilator at an overlapping time.
pub fn check_invigilator_conflict<'a>(candidate: &Exam, existing: &'a [Exam]) -> Vec<&'a Exam> {
    check_resource_conflict(ExamResource::Invigilator, candidate, existing)
}

/// Existing exams for the same class at an overlapping time.
pub fn check_class_conflict<'a>(candidate: &Exam, existing: &'a [Exam]) -> Vec<&'a Exam> {
    check_resource_conflict(ExamResource::Class, candidate, existing)
}

/// All resource conflicts for one candidate exam.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExamConflictReport<'a> {
    pub room: Vec<&'a Exam>,
    pub invigilator: Vec<&'a Exam>,
    pub class: Vec<&'a Exam>,
}

impl<'a> ExamConflictReport<'a> {
    /// Whether any dimension has a conflict.
    pub fn has_conflicts(&self) -> bool {
        !(self.room.is_empty() && self.invigilator.is_empty() && self.class.is_empty())
    }

    /// Conflicts for one dimension.
    pub fn for_resource(&self, resource: ExamResource) -> &[&'a Exam] {
        match resource {
            ExamResource::Room => &self.room,
            ExamResource::Invigilator => &self.invigilator,
            ExamResource::Class => &self.class,
        }
    }

    /// Total conflicts across dimensions. An exam clashing on two
    /// dimensions counts twice.
    pub fn total(&self) -> usize {
        self.room.len() + self.invigilator.len() + self.class.len()
    }
}

/// Runs the room, invigilator and class checks together.
///
/// Existing records with the candidate's own (non-empty) id are skipped,
/// so an edited exam does not conflict with its stored version. Records
/// whose status the config ignores are skipped too.
pub fn check_exam_conflicts<'a>(
    candidate: &Exam,
    existing: &'a [Exam],
    config: &ConflictConfig,
) -> ExamConflictReport<'a> {
    let others: Vec<&'a Exam> = existing
        .iter()
        .filter(|e| candidate.id.is_empty() || e.id != candidate.id)
        .filter(|e| config.considers_status(e.status))
        .collect();

    let report = ExamConflictReport {
        room: matching(ExamResource::Room, candidate, others.iter().copied()),
        invigilator: matching(ExamResource::Invigilator, candidate, others.iter().copied()),
        class: matching(ExamResource::Class, candidate, others.iter().copied()),
    };
    debug!(
        exam_id = %candidate.id,
        considered = others.len(),
        conflicts = report.total(),
        "exam conflict report"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExamStatus;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn exam(id: &str, date: &str, start: &str, hours: f64) -> Exam {
        Exam::new(date, start, hours, "R1", "Smith", "10A").with_id(id)
    }

    #[test]
    fn test_overlapping_exams() {
        let a = exam("a", "2024-01-10", "09:00", 2.0);
        let b = exam("b", "2024-01-10", "10:00", 1.0);
        assert!(check_time_conflict(&a, &b));
        assert!(check_time_conflict(&b, &a));
    }

    #[test]
    fn test_back_to_back_exams() {
        let a = exam("a", "2024-01-10", "09:00", 1.0);
        let b = exam("b", "2024-01-10", "10:00", 1.0);
        assert!(!check_time_conflict(&a, &b));
        assert!(!check_time_conflict(&b, &a));
    }

    #[test]
    fn test_contained_exam() {
        let outer = exam("a", "2024-01-10", "09:00", 3.0);
        let inner = exam("b", "2024-01-10", "10:00", 0.5);
        assert!(check_time_conflict(&outer, &inner));
    }

    #[test]
    fn test_malformed_never_overlaps() {
        let good = exam("a", "2024-01-10", "09:00", 2.0);
        let bad_date = exam("b", "2024-13-45", "09:00", 2.0);
        let bad_time = exam("c", "2024-01-10", "nine", 2.0);
        assert!(!check_time_conflict(&good, &bad_date));
        assert!(!check_time_conflict(&bad_time, &good));
        assert!(check_room_conflict(&good, &[bad_date, bad_time]).is_empty());
    }

    #[test]
    fn test_time_conflict_symmetry_sweep() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..500 {
            let mk = |rng: &mut SmallRng| {
                let day = rng.random_range(10..12);
                let hour = rng.random_range(6..20);
                let minute = rng.random_range(0..4) * 15;
                let hours = rng.random_range(1..13) as f64 * 0.25;
                exam(
                    "x",
                    &format!("2024-01-{day}"),
                    &format!("{hour:02}:{minute:02}"),
                    hours,
                )
            };
            let a = mk(&mut rng);
            let b = mk(&mut rng);
            assert_eq!(check_time_conflict(&a, &b), check_time_conflict(&b, &a));
        }
    }

    #[test]
    fn test_room_conflict_requires_same_room_and_date() {
        let candidate = exam("new", "2024-01-10", "09:00", 2.0);
        let existing = vec![
            exam("same", "2024-01-10", "10:00", 1.0),
            Exam::new("2024-01-10", "10:00", 1.0, "R2", "Smith", "10A").with_id("other_room"),
            exam("other_date", "2024-01-11", "10:00", 1.0),
            exam("later", "2024-01-10", "11:00", 1.0),
        ];
        let ids: Vec<&str> = check_room_conflict(&candidate, &existing)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, ["same"]);
    }

    #[test]
    fn test_room_conflict_empty_when_nothing_shared() {
        let candidate = Exam::new("2024-01-10", "09:00", 2.0, "R9", "Smith", "10A");
        let existing = vec![
            exam("a", "2024-01-10", "09:00", 2.0),
            Exam::new("2024-01-11", "09:00", 2.0, "R9", "Jones", "10B"),
        ];
        assert!(check_room_conflict(&candidate, &existing).is_empty());
        assert!(check_room_conflict(&candidate, &[]).is_empty());
    }

    #[test]
    fn test_invigilator_and_class_conflicts() {
        let candidate = Exam::new("2024-01-10", "09:00", 2.0, "R1", "Smith", "10A");
        let existing = vec![
            Exam::new("2024-01-10", "10:00", 1.0, "R2", "Smith", "10B").with_id("inv"),
            Exam::new("2024-01-10", "09:30", 1.0, "R3", "Jones", "10A").with_id("cls"),
        ];
        let inv = check_invigilator_conflict(&candidate, &existing);
        assert_eq!(inv.len(), 1);
        assert_eq!(inv[0].id, "inv");

        let cls = check_class_conflict(&candidate, &existing);
        assert_eq!(cls.len(), 1);
        assert_eq!(cls[0].id, "cls");

        assert!(check_room_conflict(&candidate, &existing).is_empty());
    }

    #[test]
    fn test_conflicts_keep_input_order() {
        let candidate = exam("new", "2024-01-10", "08:00", 4.0);
        let existing = vec![
            exam("third", "2024-01-10", "11:00", 1.0),
            exam("first", "2024-01-10", "08:00", 1.0),
            exam("second", "2024-01-10", "09:00", 1.0),
        ];
        let ids: Vec<&str> = check_class_conflict(&candidate, &existing)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, ["third", "first", "second"]);
    }

    #[test]
    fn test_no_self_conflict_when_filtered_by_identity() {
        let a = exam("a", "2024-01-10", "09:00", 2.0);
        let existing = vec![a.clone(), exam("b", "2024-01-10", "14:00", 1.0)];
        let others: Vec<Exam> = existing.iter().filter(|e| e.id != a.id).cloned().collect();
        assert!(check_room_conflict(&a, &others).is_empty());
        assert!(check_invigilator_conflict(&a, &others).is_empty());
        assert!(check_class_conflict(&a, &others).is_empty());
    }

    #[test]
    fn test_report_excludes_own_record() {
        let edited = exam("a", "2024-01-10", "09:30", 2.0);
        let existing = vec![exam("a", "2024-01-10", "09:00", 2.0)];
        let report = check_exam_conflicts(&edited, &existing, &ConflictConfig::default());
        assert!(!report.has_conflicts());
    }

    #[test]
    fn test_report_all_dimensions() {
        let candidate = Exam::new("2024-01-10", "09:00", 2.0, "R1", "Smith", "10A");
        let existing = vec![
            exam("full", "2024-01-10", "10:00", 1.0),
            Exam::new("2024-01-10", "09:00", 1.0, "R2", "Jones", "10A").with_id("class_only"),
        ];
        let report = check_exam_conflicts(&candidate, &existing, &ConflictConfig::default());
        assert_eq!(report.room.len(), 1);
        assert_eq!(report.invigilator.len(), 1);
        assert_eq!(report.class.len(), 2);
        assert_eq!(report.total(), 4);
        assert_eq!(report.for_resource(ExamResource::Class)[1].id, "class_only");
    }

    #[test]
    fn test_report_ignores_configured_statuses() {
        let candidate = exam("new", "2024-01-10", "09:00", 2.0);
        let existing = vec![
            exam("cancelled", "2024-01-10", "09:00", 2.0).with_status(ExamStatus::Cancelled),
            exam("done", "2024-01-10", "10:00", 1.0).with_status(ExamStatus::Completed),
        ];

        let all = check_exam_conflicts(&candidate, &existing, &ConflictConfig::default());
        assert_eq!(all.room.len(), 2);

        let config = ConflictConfig::default().ignoring_status(ExamStatus::Cancelled);
        let filtered = check_exam_conflicts(&candidate, &existing, &config);
        assert_eq!(filtered.room.len(), 1);
        assert_eq!(filtered.room[0].id, "done");
    }

    #[test]
    fn test_unsaved_candidate_checks_everything() {
        let candidate = Exam::new("2024-01-10", "09:00", 2.0, "R1", "Smith", "10A");
        let existing = vec![Exam::new("2024-01-10", "09:00", 2.0, "R1", "Smith", "10A")];
        let report = check_exam_conflicts(&candidate, &existing, &ConflictConfig::default());
        assert_eq!(report.total(), 3);
    }
}

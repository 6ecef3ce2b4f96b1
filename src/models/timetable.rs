//! Weekly class timetable model.
//!
//! A timetable maps each day to its ordered slots. A slot is a fixed
//! (day, time) bucket that can hold several class periods, one per
//! class/teacher/room combination.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One scheduled occupant of a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassPeriod {
    /// Class being taught.
    pub class: String,
    /// Teacher name.
    pub teacher: String,
    /// Subject taught.
    pub subject: String,
    /// Room used.
    pub room: String,
}

/// A (day, time) bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    /// Day identifier (e.g., "Monday").
    pub day: String,
    /// Time identifier (e.g., "08:00-09:00").
    pub time: String,
    /// Occupants, in insertion order.
    #[serde(default)]
    pub classes: Vec<ClassPeriod>,
}

/// Existing timetable: day → ordered slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timetable {
    pub days: HashMap<String, Vec<ScheduleSlot>>,
}

/// A requested (or edited) class-period placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    pub day: String,
    pub time: String,
    pub class: String,
    pub teacher: String,
    pub room: String,
    pub subject: String,
}

impl ClassPeriod {
    pub fn new(
        class: impl Into<String>,
        teacher: impl Into<String>,
        subject: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        Self {
            class: class.into(),
            teacher: teacher.into(),
            subject: subject.into(),
            room: room.into(),
        }
    }

    /// Whether this period is the one identified by an assignment's
    /// class + teacher pair.
    pub fn is_same_placement(&self, assignment: &SlotAssignment) -> bool {
        self.class == assignment.class && self.teacher == assignment.teacher
    }
}

impl ScheduleSlot {
    /// Creates an empty slot.
    pub fn new(day: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            time: time.into(),
            classes: Vec::new(),
        }
    }

    /// Adds an occupant.
    pub fn with_class(mut self, period: ClassPeriod) -> Self {
        self.classes.push(period);
        self
    }

    /// Whether the slot has no occupants.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slot under its day.
    pub fn add_slot(&mut self, slot: ScheduleSlot) {
        self.days.entry(slot.day.clone()).or_default().push(slot);
    }

    /// Builder form of [`Timetable::add_slot`].
    pub fn with_slot(mut self, slot: ScheduleSlot) -> Self {
        self.add_slot(slot);
        self
    }

    /// Slots for a day, in order. Empty if the day is unknown.
    pub fn slots_for_day(&self, day: &str) -> &[ScheduleSlot] {
        self.days.get(day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First slot on `day` whose time equals `time`.
    pub fn slot(&self, day: &str, time: &str) -> Option<&ScheduleSlot> {
        self.slots_for_day(day).iter().find(|s| s.time == time)
    }

    /// Total number of class periods across all slots.
    pub fn period_count(&self) -> usize {
        self.days
            .values()
            .flat_map(|slots| slots.iter())
            .map(|s| s.classes.len())
            .sum()
    }
}

impl SlotAssignment {
    pub fn new(
        day: impl Into<String>,
        time: impl Into<String>,
        class: impl Into<String>,
        teacher: impl Into<String>,
        room: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            day: day.into(),
            time: time.into(),
            class: class.into(),
            teacher: teacher.into(),
            room: room.into(),
            subject: subject.into(),
        }
    }

    /// The class period this assignment would create.
    pub fn to_period(&self) -> ClassPeriod {
        ClassPeriod::new(
            self.class.clone(),
            self.teacher.clone(),
            self.subject.clone(),
            self.room.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timetable() -> Timetable {
        Timetable::new()
            .with_slot(
                ScheduleSlot::new("Monday", "08:00")
                    .with_class(ClassPeriod::new("10A", "Smith", "Math", "R101")),
            )
            .with_slot(
                ScheduleSlot::new("Monday", "09:00")
                    .with_class(ClassPeriod::new("10A", "Jones", "Physics", "Lab1"))
                    .with_class(ClassPeriod::new("10B", "Smith", "Math", "R101")),
            )
    }

    #[test]
    fn test_slot_lookup() {
        let t = sample_timetable();
        assert_eq!(t.slot("Monday", "09:00").unwrap().classes.len(), 2);
        assert!(t.slot("Monday", "10:00").is_none());
        assert!(t.slot("Tuesday", "08:00").is_none());
        assert!(t.slots_for_day("Tuesday").is_empty());
    }

    #[test]
    fn test_period_count() {
        assert_eq!(sample_timetable().period_count(), 3);
        assert_eq!(Timetable::new().period_count(), 0);
    }

    #[test]
    fn test_same_placement() {
        let a = SlotAssignment::new("Monday", "08:00", "10A", "Smith", "R202", "Algebra");
        assert!(ClassPeriod::new("10A", "Smith", "Math", "R101").is_same_placement(&a));
        assert!(!ClassPeriod::new("10A", "Jones", "Math", "R101").is_same_placement(&a));
    }

    #[test]
    fn test_timetable_json_shape() {
        let json = r#"{
            "Monday": [
                { "day": "Monday", "time": "08:00", "classes": [
                    { "class": "10A", "teacher": "Smith", "subject": "Math", "room": "R101" }
                ]},
                { "day": "Monday", "time": "09:00" }
            ]
        }"#;
        let t: Timetable = serde_json::from_str(json).unwrap();
        assert_eq!(t.slots_for_day("Monday").len(), 2);
        assert!(t.slot("Monday", "09:00").unwrap().is_empty());
    }
}

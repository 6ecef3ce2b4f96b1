//! Evaluation context for slot rules.

use crate::models::{ClassPeriod, ScheduleSlot, SlotAssignment, Teacher};

/// What a slot rule sees: the request, the slot occupants it may clash
/// with, and the teacher reference data.
#[derive(Debug, Clone)]
pub struct SlotContext<'a> {
    /// Requested placement.
    pub assignment: &'a SlotAssignment,
    /// Occupants of the slot, minus the record being edited.
    pub occupants: Vec<&'a ClassPeriod>,
    /// Teacher qualification records.
    pub teachers: &'a [Teacher],
}

impl<'a> SlotContext<'a> {
    /// Builds a context from a slot.
    ///
    /// When `original` is given, the occupant matching its class + teacher
    /// pair is dropped so an edited period does not conflict with itself.
    pub fn new(
        assignment: &'a SlotAssignment,
        slot: &'a ScheduleSlot,
        original: Option<&SlotAssignment>,
        teachers: &'a [Teacher],
    ) -> Self {
        let occupants = slot
            .classes
            .iter()
            .filter(|p| original.map_or(true, |o| !p.is_same_placement(o)))
            .collect();
        Self {
            assignment,
            occupants,
            teachers,
        }
    }

    /// First occupant matching `pred`.
    pub fn find_occupant<P>(&self, pred: P) -> Option<&'a ClassPeriod>
    where
        P: Fn(&ClassPeriod) -> bool,
    {
        self.occupants.iter().copied().find(|p| pred(*p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_exclusion() {
        let slot = ScheduleSlot::new("Monday", "08:00")
            .with_class(ClassPeriod::new("10A", "Smith", "Math", "R101"))
            .with_class(ClassPeriod::new("10B", "Jones", "Art", "R102"));
        let request = SlotAssignment::new("Monday", "08:00", "10A", "Smith", "R103", "Math");
        let original = SlotAssignment::new("Monday", "08:00", "10A", "Smith", "R101", "Math");

        let ctx = SlotContext::new(&request, &slot, Some(&original), &[]);
        assert_eq!(ctx.occupants.len(), 1);
        assert_eq!(ctx.occupants[0].class, "10B");

        let ctx = SlotContext::new(&request, &slot, None, &[]);
        assert_eq!(ctx.occupants.len(), 2);
    }

    #[test]
    fn test_edit_exclusion_needs_both_keys() {
        let slot = ScheduleSlot::new("Monday", "08:00")
            .with_class(ClassPeriod::new("10A", "Smith", "Math", "R101"));
        let request = SlotAssignment::new("Monday", "08:00", "10A", "Jones", "R101", "Math");
        let original = SlotAssignment::new("Monday", "08:00", "10A", "Jones", "R101", "Math");

        let ctx = SlotContext::new(&request, &slot, Some(&original), &[]);
        assert_eq!(ctx.occupants.len(), 1);
    }
}

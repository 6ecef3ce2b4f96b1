//! Rule engine for slot conflict checks.
//!
//! Holds an ordered list of [`SlotRule`]s and runs each one against the
//! slot a request targets, collecting at most one conflict per rule.

use std::sync::Arc;

use tracing::debug;

use super::rules::{ClassClash, Qualification, RoomClash, TeacherClash};
use super::{SlotContext, SlotRule};
use crate::config::ConflictConfig;
use crate::models::{SlotAssignment, SlotConflict, SlotConflictKind, Teacher, Timetable};

/// An ordered, composable list of slot rules.
///
/// # Example
/// ```
/// use u_timetable::slot::{rules, SlotRuleEngine};
///
/// let engine = SlotRuleEngine::new()
///     .with_rule(rules::RoomClash)
///     .with_rule(rules::Qualification);
/// assert_eq!(engine.len(), 2);
/// ```
#[derive(Clone)]
pub struct SlotRuleEngine {
    rules: Vec<Arc<dyn SlotRule>>,
}

impl SlotRuleEngine {
    /// Creates an engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Class → teacher → room → qualification.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(ClassClash)
            .with_rule(TeacherClash)
            .with_rule(RoomClash)
            .with_rule(Qualification)
    }

    /// Builds the rule list from `config.slot_rules`, keeping the first
    /// occurrence of each kind.
    pub fn from_config(config: &ConflictConfig) -> Self {
        let mut engine = Self::new();
        for kind in &config.slot_rules {
            if engine.rules.iter().any(|r| r.kind() == *kind) {
                continue;
            }
            engine = match kind {
                SlotConflictKind::Class => engine.with_rule(ClassClash),
                SlotConflictKind::Teacher => engine.with_rule(TeacherClash),
                SlotConflictKind::Room => engine.with_rule(RoomClash),
                SlotConflictKind::Qualification => engine.with_rule(Qualification),
            };
        }
        engine
    }

    /// Appends a rule.
    pub fn with_rule<R: SlotRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the engine has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule kinds in evaluation order.
    pub fn kinds(&self) -> Vec<SlotConflictKind> {
        self.rules.iter().map(|r| r.kind()).collect()
    }

    /// Runs every rule against a prepared context.
    pub fn evaluate(&self, context: &SlotContext<'_>) -> Vec<SlotConflict> {
        self.rules.iter().filter_map(|r| r.check(context)).collect()
    }

    /// Checks a requested placement against the timetable.
    ///
    /// Returns no conflicts when the timetable has no slot at the
    /// request's day and time. `original` is the stored version of the
    /// period being edited, if any; its class + teacher occupant is
    /// excluded from the comparison.
    pub fn check(
        &self,
        assignment: &SlotAssignment,
        timetable: &Timetable,
        original: Option<&SlotAssignment>,
        teachers: &[Teacher],
    ) -> Vec<SlotConflict> {
        let slot = match timetable.slot(&assignment.day, &assignment.time) {
            Some(slot) => slot,
            None => {
                debug!(day = %assignment.day, time = %assignment.time, "no slot; nothing to conflict with");
                return Vec::new();
            }
        };

        let context = SlotContext::new(assignment, slot, original, teachers);
        let conflicts = self.evaluate(&context);
        debug!(
            day = %assignment.day,
            time = %assignment.time,
            occupants = context.occupants.len(),
            conflicts = conflicts.len(),
            "slot conflict check"
        );
        conflicts
    }
}

impl Default for SlotRuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SlotRuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotRuleEngine")
            .field("rules", &self.kinds())
            .finish()
    }
}

/// Checks a requested placement with the standard rule order.
///
/// See [`SlotRuleEngine::check`].
pub fn check_schedule_conflicts(
    new_assignment: &SlotAssignment,
    existing_schedule: &Timetable,
    original_assignment: Option<&SlotAssignment>,
    teachers: &[Teacher],
) -> Vec<SlotConflict> {
    SlotRuleEngine::standard().check(
        new_assignment,
        existing_schedule,
        original_assignment,
        teachers,
    )
}

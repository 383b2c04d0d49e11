use crate::config::ConstraintRelaxations;
use crate::data::{Day, Slot, SlotViolation, StudentId};
use crate::ledger::ViolationLedger;
use crate::state::StudentHistory;

/// Why a candidate (day, slot) was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// A student already sits an exam in this exact slot.
    StudentClash,
    ConsecutiveSlots,
    ThreePerDay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Rejected(Rejection),
    /// Soft rules that committing here would break.
    Accepted { consecutive: bool, three_per_day: bool },
}

impl Verdict {
    /// Tag carried by the assignment if this candidate is committed.
    /// Three-per-day wins over consecutive.
    pub fn slot_violation(self) -> SlotViolation {
        match self {
            Verdict::Accepted {
                three_per_day: true,
                ..
            } => SlotViolation::ThreePerDay,
            Verdict::Accepted {
                consecutive: true, ..
            } => SlotViolation::ConsecutiveSlots,
            _ => SlotViolation::None,
        }
    }
}

/// Checks a candidate slot against the histories of the course's students.
pub fn evaluate(
    day: Day,
    slot: Slot,
    students: impl IntoIterator<Item = StudentId>,
    history: &StudentHistory,
    relaxations: &ConstraintRelaxations,
    ledger: &ViolationLedger,
) -> Verdict {
    let mut consecutive = false;
    let mut three_per_day = false;

    for student in students {
        let mut same_day = 0;
        for &(d, s) in history.exams_of(student) {
            if d != day {
                continue;
            }
            if s == slot {
                return Verdict::Rejected(Rejection::StudentClash);
            }
            if s.abs_diff(slot) == 1 {
                consecutive = true;
            }
            same_day += 1;
        }
        if same_day >= 2 {
            three_per_day = true;
        }
    }

    if consecutive
        && !(relaxations.allow_consecutive_slots
            && ledger.consecutive() < relaxations.max_consecutive_violations)
    {
        return Verdict::Rejected(Rejection::ConsecutiveSlots);
    }
    if three_per_day
        && !(relaxations.allow_three_per_day
            && ledger.three_per_day() < relaxations.max_three_per_day_violations)
    {
        return Verdict::Rejected(Rejection::ThreePerDay);
    }

    Verdict::Accepted {
        consecutive,
        three_per_day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(exams: &[(StudentId, Day, Slot)]) -> StudentHistory {
        let mut history = StudentHistory::default();
        for &(student, day, slot) in exams {
            history.record(student, day, slot);
        }
        history
    }

    fn relaxed(max_consecutive: u32, max_three: u32) -> ConstraintRelaxations {
        ConstraintRelaxations {
            allow_consecutive_slots: true,
            max_consecutive_violations: max_consecutive,
            allow_three_per_day: true,
            max_three_per_day_violations: max_three,
            ..Default::default()
        }
    }

    #[test]
    fn test_clash_is_never_relaxed() {
        let history = history(&[(1, 1, 2)]);
        let ledger = ViolationLedger::default();
        let verdict = evaluate(1, 2, [1], &history, &relaxed(10, 10), &ledger);
        assert_eq!(verdict, Verdict::Rejected(Rejection::StudentClash));
    }

    #[test]
    fn test_clean_slot() {
        let history = history(&[(1, 1, 1), (2, 2, 2)]);
        let ledger = ViolationLedger::default();
        let verdict = evaluate(1, 3, [1, 2], &history, &Default::default(), &ledger);
        assert_eq!(
            verdict,
            Verdict::Accepted {
                consecutive: false,
                three_per_day: false
            }
        );
        assert_eq!(verdict.slot_violation(), SlotViolation::None);
    }

    #[test]
    fn test_consecutive_needs_relaxation() {
        let history = history(&[(1, 1, 1)]);
        let ledger = ViolationLedger::default();

        let strict = evaluate(1, 2, [1], &history, &Default::default(), &ledger);
        assert_eq!(strict, Verdict::Rejected(Rejection::ConsecutiveSlots));

        let verdict = evaluate(1, 2, [1], &history, &relaxed(1, 0), &ledger);
        assert_eq!(verdict.slot_violation(), SlotViolation::ConsecutiveSlots);
    }

    #[test]
    fn test_consecutive_budget_exhausted() {
        let history = history(&[(1, 1, 1)]);
        let mut ledger = ViolationLedger::default();
        ledger.record_consecutive();

        let verdict = evaluate(1, 2, [1], &history, &relaxed(1, 0), &ledger);
        assert_eq!(verdict, Verdict::Rejected(Rejection::ConsecutiveSlots));
    }

    #[test]
    fn test_three_per_day() {
        // slots 1 and 3 taken; slot 5 is not adjacent to either
        let history = history(&[(1, 1, 1), (1, 1, 3)]);
        let ledger = ViolationLedger::default();

        let strict = evaluate(1, 5, [1], &history, &Default::default(), &ledger);
        assert_eq!(strict, Verdict::Rejected(Rejection::ThreePerDay));

        let verdict = evaluate(1, 5, [1], &history, &relaxed(0, 1), &ledger);
        assert_eq!(
            verdict,
            Verdict::Accepted {
                consecutive: false,
                three_per_day: true
            }
        );
    }

    #[test]
    fn test_three_per_day_budget_exhausted() {
        let history = history(&[(1, 1, 1), (1, 1, 3)]);
        let mut ledger = ViolationLedger::default();
        ledger.record_three_per_day();

        // one left under a cap of two
        let verdict = evaluate(1, 5, [1], &history, &relaxed(0, 2), &ledger);
        assert_eq!(verdict.slot_violation(), SlotViolation::ThreePerDay);

        ledger.record_three_per_day();
        let verdict = evaluate(1, 5, [1], &history, &relaxed(0, 2), &ledger);
        assert_eq!(verdict, Verdict::Rejected(Rejection::ThreePerDay));
    }

    #[test]
    fn test_both_flags_tag_three_per_day() {
        let history = history(&[(1, 1, 1), (1, 1, 2)]);
        let ledger = ViolationLedger::default();
        let verdict = evaluate(1, 3, [1], &history, &relaxed(1, 1), &ledger);
        assert_eq!(
            verdict,
            Verdict::Accepted {
                consecutive: true,
                three_per_day: true
            }
        );
        assert_eq!(verdict.slot_violation(), SlotViolation::ThreePerDay);
    }

    #[test]
    fn test_other_days_are_ignored() {
        let history = history(&[(1, 1, 1), (1, 1, 2)]);
        let ledger = ViolationLedger::default();
        let verdict = evaluate(2, 1, [1], &history, &Default::default(), &ledger);
        assert_eq!(verdict.slot_violation(), SlotViolation::None);
        assert!(matches!(verdict, Verdict::Accepted { .. }));
    }
}

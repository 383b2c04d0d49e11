use crate::data::{Assignment, Course, CourseId, ScheduleResult, Violation, ViolationKind};

/// Running soft-violation counters plus the courses that could not be placed.
#[derive(Debug, Clone, Default)]
pub struct ViolationLedger {
    consecutive: u32,
    three_per_day: u32,
    capacity_overflow: u32,
    unassigned: Vec<(CourseId, String)>,
}

impl ViolationLedger {
    pub fn consecutive(&self) -> u32 {
        self.consecutive
    }

    pub fn three_per_day(&self) -> u32 {
        self.three_per_day
    }

    pub fn capacity_overflow(&self) -> u32 {
        self.capacity_overflow
    }

    pub fn record_consecutive(&mut self) {
        self.consecutive += 1;
    }

    pub fn record_three_per_day(&mut self) {
        self.three_per_day += 1;
    }

    pub fn record_capacity_overflow(&mut self) {
        self.capacity_overflow += 1;
    }

    pub fn record_unassigned(&mut self, course: &Course) {
        self.unassigned.push((
            course.id,
            format!(
                "Course {} ({}) could not be scheduled in any available slot",
                course.code, course.name
            ),
        ));
    }

    pub fn unassigned_count(&self) -> usize {
        self.unassigned.len()
    }

    /// Aggregated soft entries first, then one entry per unassigned course.
    pub fn into_violations(self) -> Vec<Violation> {
        let soft = [
            (
                ViolationKind::ConsecutiveSlots,
                self.consecutive,
                "Students with exams in consecutive time slots",
            ),
            (
                ViolationKind::ThreePerDay,
                self.three_per_day,
                "Students with three or more exams on the same day",
            ),
            (
                ViolationKind::CapacityOverflow,
                self.capacity_overflow,
                "Exams placed in a classroom smaller than the enrollment",
            ),
        ];

        let mut violations: Vec<Violation> = soft
            .into_iter()
            .filter(|&(_, count, _)| count > 0)
            .map(|(kind, count, description)| Violation {
                kind,
                description: description.to_string(),
                count,
                course_id: None,
            })
            .collect();

        violations.extend(self.unassigned.into_iter().map(|(course_id, description)| {
            Violation {
                kind: ViolationKind::UnassignedCourse,
                description,
                count: 1,
                course_id: Some(course_id),
            }
        }));
        violations
    }
}

/// Final result; feasible only with every course placed and nothing violated.
pub fn assemble(assignments: Vec<Assignment>, ledger: ViolationLedger) -> ScheduleResult {
    let all_placed = ledger.unassigned_count() == 0;
    let violations = ledger.into_violations();
    let is_feasible = all_placed && violations.is_empty();
    ScheduleResult {
        assignments,
        violations,
        is_feasible,
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::SchedulerConfig;

// Type aliases for clarity
pub type CourseId = u32;
pub type StudentId = u32;
pub type ClassroomId = u32;
/// 1-based day of the exam period.
pub type Day = u32;
/// 1-based slot within a day.
pub type Slot = u32;

/// A course whose exam has to be placed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Course {
    pub id: CourseId,
    pub code: String,
    pub name: String,
}

/// A student. Only the id matters to the scheduler.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    #[serde(default)]
    pub student_number: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A student taking a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub student_id: StudentId,
    pub course_id: CourseId,
}

/// A physical room with a seating capacity.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Classroom {
    pub id: ClassroomId,
    pub name: String,
    pub capacity: u32,
}

/// Everything one generation run needs.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub courses: Vec<Course>,
    pub students: Vec<Student>,
    pub enrollments: Vec<Enrollment>,
    pub classrooms: Vec<Classroom>,
    #[serde(default)]
    pub config: SchedulerConfig,
}

/// Soft rule broken by a single committed assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotViolation {
    #[default]
    None,
    ConsecutiveSlots,
    ThreePerDay,
}

impl SlotViolation {
    /// Nullable tag as stored next to an assignment row.
    pub fn as_tag(self) -> Option<&'static str> {
        match self {
            SlotViolation::None => None,
            SlotViolation::ConsecutiveSlots => Some(ViolationKind::ConsecutiveSlots.as_str()),
            SlotViolation::ThreePerDay => Some(ViolationKind::ThreePerDay.as_str()),
        }
    }
}

/// A committed exam placement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub course_id: CourseId,
    pub classroom_id: ClassroomId,
    pub day: Day,
    pub slot: Slot,
    pub violation: SlotViolation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    ConsecutiveSlots,
    ThreePerDay,
    CapacityOverflow,
    UnassignedCourse,
}

impl ViolationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ViolationKind::ConsecutiveSlots => "consecutive_slots",
            ViolationKind::ThreePerDay => "three_per_day",
            ViolationKind::CapacityOverflow => "capacity_overflow",
            ViolationKind::UnassignedCourse => "unassigned_course",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the violation summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub kind: ViolationKind,
    pub description: String,
    pub count: u32,
    /// Set only for `unassigned_course` entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<CourseId>,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} (x{})", self.kind, self.description, self.count)
    }
}

/// The final output of the scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResult {
    pub assignments: Vec<Assignment>,
    pub violations: Vec<Violation>,
    pub is_feasible: bool,
}

impl ScheduleResult {
    /// Sum of all violation counts, the figure kept per stored schedule.
    pub fn total_violations(&self) -> u32 {
        self.violations.iter().map(|v| v.count).sum()
    }

    pub fn unassigned_course_ids(&self) -> Vec<CourseId> {
        self.violations
            .iter()
            .filter(|v| v.kind == ViolationKind::UnassignedCourse)
            .filter_map(|v| v.course_id)
            .collect()
    }

    pub fn assignment_for(&self, course_id: CourseId) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.course_id == course_id)
    }
}

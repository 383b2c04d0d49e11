//! Mutable tables owned by a single scheduling run.

use std::collections::HashMap;

use crate::data::{ClassroomId, CourseId, Day, Slot, StudentId};

/// Global occupancy: one course per (day, slot) across every classroom.
///
/// Stored densely, `(day - 1) * slots_per_day + (slot - 1)`.
#[derive(Debug, Clone)]
pub struct SlotTable {
    num_days: u32,
    slots_per_day: u32,
    cells: Vec<Option<CourseId>>,
}

impl SlotTable {
    pub fn new(num_days: u32, slots_per_day: u32) -> Self {
        Self {
            num_days,
            slots_per_day,
            cells: vec![None; num_days as usize * slots_per_day as usize],
        }
    }

    pub fn num_days(&self) -> u32 {
        self.num_days
    }

    pub fn slots_per_day(&self) -> u32 {
        self.slots_per_day
    }

    fn cell(&self, day: Day, slot: Slot) -> usize {
        debug_assert!((1..=self.num_days).contains(&day));
        debug_assert!((1..=self.slots_per_day).contains(&slot));
        (day as usize - 1) * self.slots_per_day as usize + (slot as usize - 1)
    }

    pub fn occupant(&self, day: Day, slot: Slot) -> Option<CourseId> {
        self.cells[self.cell(day, slot)]
    }

    pub fn is_occupied(&self, day: Day, slot: Slot) -> bool {
        self.occupant(day, slot).is_some()
    }

    pub fn occupy(&mut self, day: Day, slot: Slot, course_id: CourseId) {
        let cell = self.cell(day, slot);
        debug_assert!(self.cells[cell].is_none(), "slot ({day}, {slot}) already taken");
        self.cells[cell] = Some(course_id);
    }

    /// Number of committed slots on `day`.
    pub fn load(&self, day: Day) -> usize {
        let start = self.cell(day, 1);
        self.cells[start..start + self.slots_per_day as usize]
            .iter()
            .filter(|c| c.is_some())
            .count()
    }

    pub fn is_day_used(&self, day: Day) -> bool {
        self.load(day) > 0
    }
}

/// Committed (day, slot) pairs per student.
#[derive(Debug, Clone, Default)]
pub struct StudentHistory {
    exams: HashMap<StudentId, Vec<(Day, Slot)>>,
}

impl StudentHistory {
    pub fn exams_of(&self, student: StudentId) -> &[(Day, Slot)] {
        self.exams.get(&student).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn record(&mut self, student: StudentId, day: Day, slot: Slot) {
        self.exams.entry(student).or_default().push((day, slot));
    }
}

/// How many assignments each classroom has received so far.
#[derive(Debug, Clone, Default)]
pub struct RoomUsage {
    counts: HashMap<ClassroomId, u32>,
}

impl RoomUsage {
    pub fn get(&self, room: ClassroomId) -> u32 {
        self.counts.get(&room).copied().unwrap_or(0)
    }

    pub fn bump(&mut self, room: ClassroomId) {
        *self.counts.entry(room).or_insert(0) += 1;
    }
}

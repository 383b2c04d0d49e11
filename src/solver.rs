use crate::config::SchedulerConfig;
use crate::constraints::{self, Verdict};
use crate::data::{Assignment, Classroom, Course, Day, ScheduleRequest, ScheduleResult, Slot};
use crate::days::day_order;
use crate::enrollment::EnrollmentIndex;
use crate::error::ConfigError;
use crate::ledger::{self, ViolationLedger};
use crate::priority::prioritize;
use crate::rooms::{RoomChoice, select_classroom};
use crate::state::{RoomUsage, SlotTable, StudentHistory};
use log::{debug, info, trace};
use std::time::Instant;

/// Read-only view of one generation run, shared with the allocation strategy.
#[derive(Debug)]
pub struct Problem<'a> {
    pub config: &'a SchedulerConfig,
    pub classrooms: &'a [Classroom],
    pub index: &'a EnrollmentIndex,
    /// Courses in processing order, with their enrollment counts.
    pub order: Vec<(&'a Course, usize)>,
}

/// What a strategy hands back: the committed placements and its ledger.
#[derive(Debug, Default)]
pub struct Allocation {
    pub assignments: Vec<Assignment>,
    pub ledger: ViolationLedger,
}

/// Turns a prepared problem into placements.
pub trait AllocationStrategy {
    fn allocate(&self, problem: &Problem<'_>) -> Allocation;
}

/// Single pass, first feasible placement wins, no backtracking.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAllocator;

impl AllocationStrategy for GreedyAllocator {
    fn allocate(&self, problem: &Problem<'_>) -> Allocation {
        let mut run = GreedyRun::new(problem);
        for &(course, size) in &problem.order {
            match run.find_placement(course, size) {
                Some(placement) => run.commit(course, placement),
                None => {
                    debug!("Course {} ({}) left unassigned.", course.code, course.id);
                    run.ledger.record_unassigned(course);
                }
            }
        }
        Allocation {
            assignments: run.assignments,
            ledger: run.ledger,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Placement {
    day: Day,
    slot: Slot,
    verdict: Verdict,
    room: RoomChoice,
}

/// Mutable state of one greedy pass; dropped when the pass ends.
struct GreedyRun<'p, 'a> {
    problem: &'p Problem<'a>,
    slots: SlotTable,
    history: StudentHistory,
    usage: RoomUsage,
    ledger: ViolationLedger,
    assignments: Vec<Assignment>,
}

impl<'p, 'a> GreedyRun<'p, 'a> {
    fn new(problem: &'p Problem<'a>) -> Self {
        Self {
            problem,
            slots: SlotTable::new(problem.config.num_days, problem.config.slots_per_day),
            history: StudentHistory::default(),
            usage: RoomUsage::default(),
            ledger: ViolationLedger::default(),
            assignments: Vec::with_capacity(problem.order.len()),
        }
    }

    fn find_placement(&self, course: &Course, size: usize) -> Option<Placement> {
        let config = self.problem.config;
        let required = u32::try_from(size).unwrap_or(u32::MAX);

        for day in day_order(&self.slots, &config.optimization) {
            for slot in 1..=config.slots_per_day {
                if self.slots.is_occupied(day, slot) {
                    continue;
                }

                let verdict = constraints::evaluate(
                    day,
                    slot,
                    self.problem.index.students_of(course.id),
                    &self.history,
                    &config.relaxations,
                    &self.ledger,
                );
                if let Verdict::Rejected(reason) = verdict {
                    trace!("Course {} rejected at ({}, {}): {:?}", course.id, day, slot, reason);
                    continue;
                }

                let Some(room) = select_classroom(
                    self.problem.classrooms,
                    required,
                    &self.usage,
                    config.optimization.minimize_rooms_used,
                    &config.relaxations,
                ) else {
                    trace!(
                        "No classroom for course {} ({} seats) at ({}, {})",
                        course.id, required, day, slot
                    );
                    continue;
                };

                return Some(Placement {
                    day,
                    slot,
                    verdict,
                    room,
                });
            }
        }
        None
    }

    fn commit(&mut self, course: &Course, placement: Placement) {
        let Placement {
            day,
            slot,
            verdict,
            room,
        } = placement;

        self.slots.occupy(day, slot, course.id);
        self.usage.bump(room.classroom_id);

        if let Verdict::Accepted {
            consecutive,
            three_per_day,
        } = verdict
        {
            if consecutive {
                self.ledger.record_consecutive();
            }
            if three_per_day {
                self.ledger.record_three_per_day();
            }
        }
        if room.overflow {
            self.ledger.record_capacity_overflow();
        }

        for student in self.problem.index.students_of(course.id) {
            self.history.record(student, day, slot);
        }

        let violation = verdict.slot_violation();
        debug!(
            "Placed course {} on day {} slot {} in room {}{}",
            course.code,
            day,
            slot,
            room.classroom_id,
            match violation.as_tag() {
                Some(tag) => format!(" [{}]", tag),
                None => String::new(),
            }
        );
        self.assignments.push(Assignment {
            course_id: course.id,
            classroom_id: room.classroom_id,
            day,
            slot,
            violation,
        });
    }
}

/// Generates an exam schedule with the greedy strategy.
pub fn solve(input: &ScheduleRequest) -> Result<ScheduleResult, ConfigError> {
    solve_with(&GreedyAllocator, input)
}

/// Generates an exam schedule with any allocation strategy.
pub fn solve_with<S: AllocationStrategy>(
    strategy: &S,
    input: &ScheduleRequest,
) -> Result<ScheduleResult, ConfigError> {
    input.config.validate()?;
    let start_time = Instant::now();

    info!(
        "Scheduling {} courses into {} days x {} slots with {} classrooms...",
        input.courses.len(),
        input.config.num_days,
        input.config.slots_per_day,
        input.classrooms.len()
    );
    if input.courses.len() > input.config.total_slots() {
        info!(
            "Only {} global slots for {} courses; some will stay unassigned.",
            input.config.total_slots(),
            input.courses.len()
        );
    }

    // lookups
    let index = EnrollmentIndex::build(&input.courses, &input.students, &input.enrollments);
    let order = prioritize(&input.courses, &index, &input.config.optimization);

    let problem = Problem {
        config: &input.config,
        classrooms: &input.classrooms,
        index: &index,
        order,
    };
    let Allocation {
        assignments,
        ledger,
    } = strategy.allocate(&problem);

    let result = ledger::assemble(assignments, ledger);
    info!(
        "Placed {}/{} courses in {:.2?} ({} violations, feasible: {})",
        result.assignments.len(),
        input.courses.len(),
        start_time.elapsed(),
        result.total_violations(),
        result.is_feasible
    );
    Ok(result)
}

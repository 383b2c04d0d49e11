#![allow(dead_code)]

use exam_scheduler::SchedulerConfig;
use exam_scheduler::data::{Classroom, Course, Enrollment, ScheduleRequest, Student};

pub fn course(id: u32) -> Course {
    Course {
        id,
        code: format!("EXAM{id}"),
        name: format!("Course {id}"),
    }
}

pub fn classroom(id: u32, capacity: u32) -> Classroom {
    Classroom {
        id,
        name: format!("Room {id}"),
        capacity,
    }
}

/// Builds a request; the student list is derived from the enrollment pairs.
pub fn request(
    courses: Vec<Course>,
    enrollments: &[(u32, u32)],
    classrooms: Vec<Classroom>,
    config: SchedulerConfig,
) -> ScheduleRequest {
    let mut student_ids: Vec<u32> = enrollments.iter().map(|&(s, _)| s).collect();
    student_ids.sort_unstable();
    student_ids.dedup();

    ScheduleRequest {
        courses,
        students: student_ids
            .into_iter()
            .map(|id| Student {
                id,
                student_number: Some(format!("S{id:05}")),
                name: None,
            })
            .collect(),
        enrollments: enrollments
            .iter()
            .map(|&(student_id, course_id)| Enrollment {
                student_id,
                course_id,
            })
            .collect(),
        classrooms,
        config,
    }
}

/// Disjoint enrollments: `per_course` fresh students for each course.
pub fn disjoint_enrollments(num_courses: u32, per_course: u32) -> Vec<(u32, u32)> {
    (1..=num_courses)
        .flat_map(|c| (0..per_course).map(move |i| (c * 1000 + i, c)))
        .collect()
}

/// A crowded, overlapping term: every student takes several courses.
pub fn dense_term(num_courses: u32, num_students: u32, per_student: u32) -> Vec<(u32, u32)> {
    (1..=num_students)
        .flat_map(|s| (0..per_student).map(move |k| (s, (s * 7 + k * 13) % num_courses + 1)))
        .collect()
}

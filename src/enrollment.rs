use std::collections::{BTreeSet, HashMap, HashSet};

use log::trace;

use crate::data::{Course, CourseId, Enrollment, Student, StudentId};

/// Course → enrolled students, derived once per run.
#[derive(Debug, Clone, Default)]
pub struct EnrollmentIndex {
    students: HashMap<CourseId, BTreeSet<StudentId>>,
}

impl EnrollmentIndex {
    /// Builds the index. Pairs naming an unknown course or student are
    /// dropped, and duplicate pairs collapse into one.
    pub fn build(courses: &[Course], students: &[Student], enrollments: &[Enrollment]) -> Self {
        let known_students: HashSet<StudentId> = students.iter().map(|s| s.id).collect();
        let mut index: HashMap<CourseId, BTreeSet<StudentId>> =
            courses.iter().map(|c| (c.id, BTreeSet::new())).collect();

        let mut skipped = 0usize;
        for enrollment in enrollments {
            match index.get_mut(&enrollment.course_id) {
                Some(set) if known_students.contains(&enrollment.student_id) => {
                    set.insert(enrollment.student_id);
                }
                _ => skipped += 1,
            }
        }
        if skipped > 0 {
            trace!("Ignored {} enrollments with unknown course or student.", skipped);
        }

        Self { students: index }
    }

    /// Students enrolled in `course_id`; empty for unknown courses.
    pub fn students_of(&self, course_id: CourseId) -> impl Iterator<Item = StudentId> + '_ {
        self.students
            .get(&course_id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    pub fn count(&self, course_id: CourseId) -> usize {
        self.students.get(&course_id).map_or(0, BTreeSet::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: CourseId) -> Course {
        Course {
            id,
            code: format!("C{id}"),
            name: format!("Course {id}"),
        }
    }

    fn student(id: StudentId) -> Student {
        Student {
            id,
            student_number: None,
            name: None,
        }
    }

    fn enroll(student_id: StudentId, course_id: CourseId) -> Enrollment {
        Enrollment {
            student_id,
            course_id,
        }
    }

    #[test]
    fn test_counts_unique_students() {
        let courses = vec![course(1), course(2)];
        let students = vec![student(10), student(11)];
        let enrollments = vec![enroll(10, 1), enroll(11, 1), enroll(10, 2)];

        let index = EnrollmentIndex::build(&courses, &students, &enrollments);
        assert_eq!(index.count(1), 2);
        assert_eq!(index.count(2), 1);
        assert_eq!(index.students_of(1).collect::<Vec<_>>(), vec![10, 11]);
    }

    #[test]
    fn test_duplicates_are_idempotent() {
        let courses = vec![course(1)];
        let students = vec![student(10)];
        let once = EnrollmentIndex::build(&courses, &students, &[enroll(10, 1)]);
        let repeated = [enroll(10, 1), enroll(10, 1), enroll(10, 1)];
        let thrice = EnrollmentIndex::build(&courses, &students, &repeated);

        assert_eq!(once.count(1), thrice.count(1));
        assert_eq!(
            once.students_of(1).collect::<Vec<_>>(),
            thrice.students_of(1).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_unknown_references_are_ignored() {
        let courses = vec![course(1)];
        let students = vec![student(10)];
        let enrollments = vec![enroll(99, 1), enroll(10, 42)];

        let index = EnrollmentIndex::build(&courses, &students, &enrollments);
        assert_eq!(index.count(1), 0);
        assert_eq!(index.count(42), 0);
        assert_eq!(index.students_of(42).count(), 0);
    }
}

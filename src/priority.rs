use std::cmp::Reverse;

use itertools::Itertools;

use crate::config::OptimizationSettings;
use crate::data::Course;
use crate::enrollment::EnrollmentIndex;

/// Processing order for the greedy pass: a course with its enrollment count.
///
/// Sorting is stable, so courses with equal counts keep their input order.
/// `place_difficult_early` wins when both difficulty flags are set.
pub fn prioritize<'a>(
    courses: &'a [Course],
    index: &EnrollmentIndex,
    optimization: &OptimizationSettings,
) -> Vec<(&'a Course, usize)> {
    let counted = courses.iter().map(|c| (c, index.count(c.id)));

    if optimization.place_difficult_early {
        counted.sorted_by_key(|&(_, n)| Reverse(n)).collect()
    } else if optimization.place_difficult_late {
        counted.sorted_by_key(|&(_, n)| n).collect()
    } else {
        counted.collect()
    }
}

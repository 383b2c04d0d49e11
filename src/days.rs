use crate::config::OptimizationSettings;
use crate::data::Day;
use crate::state::SlotTable;

/// Days to try for the next course, given what is already committed.
///
/// Policy precedence: balance across days, then minimize days used, then
/// plain 1..=num_days.
pub fn day_order(table: &SlotTable, optimization: &OptimizationSettings) -> Vec<Day> {
    let num_days = table.num_days();

    if optimization.balance_across_days {
        // min_by_key keeps the first minimum, i.e. the lowest day
        let start = (1..=num_days).min_by_key(|&d| table.load(d)).unwrap_or(1);
        (0..num_days).map(|i| (start - 1 + i) % num_days + 1).collect()
    } else if optimization.minimize_days_used {
        let (mut used, unused): (Vec<Day>, Vec<Day>) =
            (1..=num_days).partition(|&d| table.is_day_used(d));
        used.extend(unused);
        used
    } else {
        (1..=num_days).collect()
    }
}

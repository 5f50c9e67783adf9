//! Derived views over a task collection.
//!
//! Every function here is a pure read-side transformation: it never mutates
//! its input and its output is never persisted.

use jiff::civil::Date;

use crate::models::{FilterMode, Task, TaskStats, Weekday};

/// Tasks selected by `mode`, in their original order.
pub fn filter(tasks: &[Task], mode: FilterMode) -> Vec<Task> {
    tasks.iter().filter(|t| mode.matches(t)).cloned().collect()
}

/// Tasks ordered urgent → medium → simple, newest first within a priority.
///
/// The sort is stable and, given unique ids, total.
///
/// ```rust
/// use tarefa_core::{models::{Priority, Task}, views::sort_by_priority};
/// # use jiff::Timestamp;
/// # let task = |id, priority| Task {
/// #     id, text: format!("{id}"), description: String::new(), completed: false,
/// #     priority, day: None, date: None, created_at: Timestamp::now(),
/// # };
///
/// let sorted = sort_by_priority(&[task(1, Priority::Simple), task(2, Priority::Urgent)]);
/// assert_eq!(sorted[0].id, 2);
/// ```
pub fn sort_by_priority(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| {
        a.priority
            .rank()
            .cmp(&b.priority.rank())
            .then_with(|| b.id.cmp(&a.id))
    });
    sorted
}

/// The list a presentation layer shows for `mode`: filtered, then sorted.
pub fn visible(tasks: &[Task], mode: FilterMode) -> Vec<Task> {
    sort_by_priority(&filter(tasks, mode))
}

/// Total, active and completed counts.
pub fn stats(tasks: &[Task]) -> TaskStats {
    tasks.iter().collect()
}

/// Weekday of an ISO `YYYY-MM-DD` date, or `None` if it does not parse.
///
/// The date is a civil date with no time zone attached, so the result is
/// the weekday at local midnight wherever the caller is.
///
/// ```rust
/// use tarefa_core::{models::Weekday, views::weekday_of};
///
/// assert_eq!(weekday_of("2024-01-07"), Some(Weekday::Domingo));
/// assert_eq!(weekday_of("2024-01-08"), Some(Weekday::Segunda));
/// assert_eq!(weekday_of("someday"), None);
/// ```
pub fn weekday_of(date: &str) -> Option<Weekday> {
    date.trim().parse::<Date>().ok().map(Weekday::from)
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::Priority;

    fn task(id: u64, priority: Priority, completed: bool) -> Task {
        Task {
            id,
            text: format!("Task {id}"),
            description: String::new(),
            completed,
            priority,
            day: None,
            date: None,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn ids(tasks: &[Task]) -> Vec<u64> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_filter_modes() {
        let tasks = vec![
            task(3, Priority::Simple, false),
            task(2, Priority::Simple, true),
            task(1, Priority::Simple, false),
        ];

        assert_eq!(ids(&filter(&tasks, FilterMode::All)), vec![3, 2, 1]);
        assert_eq!(ids(&filter(&tasks, FilterMode::Active)), vec![3, 1]);
        assert_eq!(ids(&filter(&tasks, FilterMode::Completed)), vec![2]);
    }

    #[test]
    fn test_sort_by_priority_then_newest() {
        let tasks = vec![
            task(5, Priority::Simple, false),
            task(4, Priority::Urgent, false),
            task(3, Priority::Medium, false),
            task(2, Priority::Urgent, false),
            task(1, Priority::Simple, false),
        ];

        assert_eq!(ids(&sort_by_priority(&tasks)), vec![4, 2, 3, 5, 1]);
    }

    #[test]
    fn test_sort_ignores_storage_order_for_ties() {
        // Older task stored first must still sort after the newer one.
        let tasks = vec![
            task(1, Priority::Medium, false),
            task(9, Priority::Medium, false),
        ];
        assert_eq!(ids(&sort_by_priority(&tasks)), vec![9, 1]);
    }

    #[test]
    fn test_sort_by_priority_is_idempotent() {
        let tasks = vec![
            task(1, Priority::Urgent, false),
            task(7, Priority::Simple, true),
            task(3, Priority::Medium, false),
            task(6, Priority::Urgent, true),
        ];
        let once = sort_by_priority(&tasks);
        let twice = sort_by_priority(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_does_not_touch_input() {
        let tasks = vec![
            task(1, Priority::Urgent, false),
            task(2, Priority::Simple, false),
        ];
        let _ = sort_by_priority(&tasks);
        assert_eq!(ids(&tasks), vec![1, 2]);
    }

    #[test]
    fn test_visible_filters_then_sorts() {
        let tasks = vec![
            task(4, Priority::Simple, false),
            task(3, Priority::Urgent, true),
            task(2, Priority::Urgent, false),
            task(1, Priority::Medium, false),
        ];
        assert_eq!(ids(&visible(&tasks, FilterMode::Active)), vec![2, 1, 4]);
        assert_eq!(ids(&visible(&tasks, FilterMode::Completed)), vec![3]);
    }

    #[test]
    fn test_stats_counts() {
        let tasks = vec![
            task(1, Priority::Simple, true),
            task(2, Priority::Simple, false),
        ];
        let stats = stats(&tasks);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.active + stats.completed, stats.total);
    }

    #[test]
    fn test_stats_empty() {
        let stats = stats(&[]);
        assert_eq!(stats, TaskStats::default());
        assert!(!stats.has_completed());
    }

    #[test]
    fn test_weekday_of_known_dates() {
        assert_eq!(weekday_of("2024-01-07"), Some(Weekday::Domingo));
        assert_eq!(weekday_of("2024-01-08"), Some(Weekday::Segunda));
        assert_eq!(weekday_of("2024-02-29"), Some(Weekday::Quinta));
        assert_eq!(weekday_of("2000-01-01"), Some(Weekday::Sabado));
    }

    #[test]
    fn test_weekday_of_invalid() {
        assert_eq!(weekday_of(""), None);
        assert_eq!(weekday_of("2023-02-29"), None);
        assert_eq!(weekday_of("07/01/2024"), None);
    }
}

//! Grouping and ordering of a month's events.

use crate::errors::AppError;
use crate::models::event::Event;
use std::collections::BTreeMap;

/// Events bucketed by day-of-month.
///
/// Events with a malformed date end up in `rejected` together with their
/// index in the input, never in a bucket.
#[derive(Debug, Default)]
pub struct DayGroups<'a> {
    days: BTreeMap<u32, Vec<&'a Event>>,
    rejected: Vec<(usize, AppError)>,
}

impl<'a> DayGroups<'a> {
    pub fn get(&self, day: u32) -> &[&'a Event] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_events(&self, day: u32) -> bool {
        !self.get(day).is_empty()
    }

    /// Number of grouped events (rejected ones excluded).
    pub fn total(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn rejected(&self) -> &[(usize, AppError)] {
        &self.rejected
    }

    /// Days in ascending order, each with its events in input order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[&'a Event])> {
        self.days.iter().map(|(d, evs)| (*d, evs.as_slice()))
    }
}

/// Group events by the day component of their date, keeping input order
/// inside each day. No filtering by month or year happens here.
pub fn group_by_day(events: &[Event]) -> DayGroups<'_> {
    let mut groups = DayGroups::default();

    for (idx, ev) in events.iter().enumerate() {
        match ev.day() {
            Ok(day) => groups.days.entry(day).or_default().push(ev),
            Err(e) => groups.rejected.push((idx, e)),
        }
    }

    groups
}

/// Events ordered by their `YYYY-MM-DD` string. `sort_by` is stable, so
/// same-day events keep their input order.
pub fn sort_by_date(events: &[Event]) -> Vec<&Event> {
    let mut ordered: Vec<&Event> = events.iter().collect();
    ordered.sort_by(|a, b| a.date.cmp(&b.date));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(date: &str, title: &str) -> Event {
        Event::new(date, title, "")
    }

    fn titles(evs: &[&Event]) -> Vec<String> {
        evs.iter().map(|e| e.title.clone()).collect()
    }

    #[test]
    fn grouping_preserves_order_within_a_day() {
        let events = vec![
            ev("2026-01-05", "A"),
            ev("2026-01-03", "B"),
            ev("2026-01-05", "C"),
        ];
        let groups = group_by_day(&events);

        assert_eq!(titles(groups.get(5)), vec!["A", "C"]);
        assert_eq!(titles(groups.get(3)), vec!["B"]);
        assert!(groups.get(4).is_empty());
        assert!(groups.has_events(3));
        assert!(!groups.has_events(31));
    }

    #[test]
    fn grouping_is_a_partition() {
        let events: Vec<Event> = (0..40)
            .map(|i| ev(&format!("2026-03-{:02}", (i * 7) % 31 + 1), &i.to_string()))
            .collect();
        let groups = group_by_day(&events);

        assert_eq!(groups.total(), events.len());
        assert!(groups.rejected().is_empty());
        for (day, bucket) in groups.iter() {
            assert!(bucket.iter().all(|e| e.day().unwrap() == day));
        }
    }

    #[test]
    fn grouping_ignores_month_and_year() {
        let events = vec![ev("2026-01-10", "jan"), ev("2025-07-10", "jul")];
        let groups = group_by_day(&events);
        assert_eq!(titles(groups.get(10)), vec!["jan", "jul"]);
    }

    #[test]
    fn malformed_dates_are_rejected_not_coerced() {
        let events = vec![
            ev("2026-01-05", "ok"),
            ev("2026-13-99", "bad"),
            ev("2026-01", "short"),
        ];
        let groups = group_by_day(&events);

        assert_eq!(groups.total(), 1);
        let rejected: Vec<usize> = groups.rejected().iter().map(|(i, _)| *i).collect();
        assert_eq!(rejected, vec![1, 2]);
        assert!(
            groups
                .rejected()
                .iter()
                .all(|(_, e)| matches!(e, AppError::InvalidDateFormat(_)))
        );
    }

    #[test]
    fn sort_orders_chronologically() {
        let events = vec![ev("2026-01-20", "late"), ev("2026-01-05", "early")];
        assert_eq!(titles(&sort_by_date(&events)), vec!["early", "late"]);
    }

    #[test]
    fn sort_is_stable_and_idempotent() {
        let events = vec![
            ev("2026-01-05", "A"),
            ev("2026-01-02", "X"),
            ev("2026-01-05", "B"),
        ];
        let once: Vec<Event> = sort_by_date(&events).into_iter().cloned().collect();
        assert_eq!(
            once.iter().map(|e| e.title.as_str()).collect::<Vec<_>>(),
            vec!["X", "A", "B"]
        );

        let twice: Vec<Event> = sort_by_date(&once).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }
}

use chrono::{DateTime, Utc};

use crate::models::{CareKind, CareSchedule};

const SECS_PER_DAY: i64 = 86_400;

/// How pressing an upcoming care task is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Urgency {
    Overdue,
    DueToday,
    #[serde(rename_all = "camelCase")]
    DueIn {
        days: i64,
    },
}

/// Classify a due timestamp against `now`.
///
/// A due time already in the past is overdue; a due time later on the same
/// calendar day reads as "today". Anything further out rounds the remaining
/// time up to whole days, so a task 3.0001 days out reports 4 days.
pub fn classify(next_due: DateTime<Utc>, now: DateTime<Utc>) -> Urgency {
    if next_due < now {
        return Urgency::Overdue;
    }
    if next_due.date_naive() == now.date_naive() {
        return Urgency::DueToday;
    }

    let remaining_secs = (next_due - now).num_seconds();
    let days = (remaining_secs + SECS_PER_DAY - 1) / SECS_PER_DAY;
    Urgency::DueIn { days }
}

/// Urgency for one dimension of a schedule; `None` while the dimension is
/// inactive.
pub fn for_dimension(schedule: &CareSchedule, kind: CareKind, now: DateTime<Utc>) -> Option<Urgency> {
    schedule.dimension(kind).next_due().map(|due| classify(due, now))
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Urgency::Overdue => write!(f, "Overdue"),
            Urgency::DueToday => write!(f, "Today"),
            Urgency::DueIn { days } => write!(f, "in {days} days"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn one_second_past_due_is_overdue() {
        let now = Utc.with_ymd_and_hms(2024, 5, 20, 14, 0, 0).unwrap();
        assert_eq!(classify(now - Duration::seconds(1), now), Urgency::Overdue);
    }

    #[test]
    fn later_the_same_calendar_day_is_due_today() {
        let now = Utc.with_ymd_and_hms(2024, 5, 20, 8, 0, 0).unwrap();
        let tonight = Utc.with_ymd_and_hms(2024, 5, 20, 22, 30, 0).unwrap();
        assert_eq!(classify(tonight, now), Urgency::DueToday);
        assert_eq!(classify(now, now), Urgency::DueToday);
    }

    #[test]
    fn fractional_days_round_up() {
        let now = Utc.with_ymd_and_hms(2024, 5, 20, 0, 0, 0).unwrap();
        // 3.0001 days out
        let due = now + Duration::days(3) + Duration::seconds(9);
        assert_eq!(classify(due, now), Urgency::DueIn { days: 4 });
    }

    #[test]
    fn exact_multiples_do_not_round_up() {
        let now = Utc.with_ymd_and_hms(2024, 5, 20, 6, 0, 0).unwrap();
        let due = now + Duration::days(3);
        assert_eq!(classify(due, now), Urgency::DueIn { days: 3 });
    }

    #[test]
    fn tomorrow_just_after_midnight_is_one_day_out() {
        let now = Utc.with_ymd_and_hms(2024, 5, 20, 23, 0, 0).unwrap();
        let due = Utc.with_ymd_and_hms(2024, 5, 21, 1, 0, 0).unwrap();
        assert_eq!(classify(due, now), Urgency::DueIn { days: 1 });
    }
}

use chrono::{DateTime, Utc};

use crate::models::{CareDimension, CareKind, CareSchedule, DiagnosisResult, Species};

/// Watering interval used when a template suggests none. Creation flows
/// always produce an active water dimension.
pub const DEFAULT_WATER_FREQUENCY_DAYS: u32 = 7;

/// Record that `kind` was just performed: the dimension re-anchors at `now`
/// and falls due one full interval later.
///
/// An inactive dimension is a no-op; the input schedule comes back unchanged.
/// Each call represents a real-world care event, so calling twice with
/// different `now` values intentionally produces different results.
pub fn advance(schedule: &CareSchedule, kind: CareKind, now: DateTime<Utc>) -> CareSchedule {
    let mut next = schedule.clone();
    if let Some(frequency_days) = schedule.dimension(kind).frequency_days() {
        *next.dimension_mut(kind) = CareDimension::active(frequency_days, now);
    }
    next
}

/// Apply a user's frequency edit for `kind`.
///
/// A zero frequency deactivates the dimension, clearing its timestamps. A
/// positive frequency on an active dimension keeps the existing anchor and
/// recomputes the due date from it; editing a frequency must not imply the
/// plant was just cared for. A positive frequency on an inactive dimension
/// activates it anchored at `now`, which is the only case `now` is consulted.
pub fn reschedule(
    schedule: &CareSchedule,
    kind: CareKind,
    frequency_days: u32,
    now: DateTime<Utc>,
) -> CareSchedule {
    let mut next = schedule.clone();
    *next.dimension_mut(kind) = if frequency_days == 0 {
        CareDimension::Inactive
    } else {
        let anchor = schedule.dimension(kind).last_done().unwrap_or(now);
        CareDimension::active(frequency_days, anchor)
    };
    next
}

/// Build a fresh schedule from a species template's suggested frequencies.
///
/// A newly acquired plant is assumed just-cared-for at intake, so every
/// suggested dimension anchors at `now`. Water falls back to
/// [`DEFAULT_WATER_FREQUENCY_DAYS`] when the template suggests none.
pub fn instantiate(species: &Species, now: DateTime<Utc>) -> CareSchedule {
    from_frequencies(
        species.suggested_water_frequency,
        species.suggested_mist_frequency,
        species.suggested_fertilize_frequency,
        now,
    )
}

/// Build a fresh schedule from the frequencies a diagnosis suggested.
pub fn instantiate_from_diagnosis(result: &DiagnosisResult, now: DateTime<Utc>) -> CareSchedule {
    from_frequencies(
        result.suggested_water_frequency,
        result.suggested_mist_frequency,
        result.suggested_fertilize_frequency,
        now,
    )
}

fn from_frequencies(water: u32, mist: u32, fertilize: u32, now: DateTime<Utc>) -> CareSchedule {
    let water = if water == 0 {
        DEFAULT_WATER_FREQUENCY_DAYS
    } else {
        water
    };

    CareSchedule {
        water: CareDimension::active(water, now),
        mist: optional_dimension(mist, now),
        fertilize: optional_dimension(fertilize, now),
    }
}

fn optional_dimension(frequency_days: u32, now: DateTime<Utc>) -> CareDimension {
    if frequency_days == 0 {
        CareDimension::Inactive
    } else {
        CareDimension::active(frequency_days, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use chrono::{Duration, TimeZone};

    fn template(water: u32, mist: u32, fertilize: u32) -> Species {
        let mut species = *catalog::find("monstera-deliciosa").unwrap();
        species.suggested_water_frequency = water;
        species.suggested_mist_frequency = mist;
        species.suggested_fertilize_frequency = fertilize;
        species
    }

    #[test]
    fn instantiate_then_advance_lands_one_interval_out() {
        let t = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        for f in [1u32, 3, 7, 30, 365] {
            let schedule = instantiate(&template(f, 0, 0), t);
            let advanced = advance(&schedule, CareKind::Water, t);
            assert_eq!(
                advanced.water.next_due().unwrap(),
                t + Duration::days(i64::from(f))
            );
        }
    }

    #[test]
    fn instantiate_template_scenario() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let schedule = instantiate(&template(7, 0, 30), now);

        assert_eq!(
            schedule.water.next_due().unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap()
        );
        assert_eq!(schedule.mist, CareDimension::Inactive);
        assert_eq!(
            schedule.fertilize.next_due().unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn instantiate_falls_back_to_default_water_interval() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let schedule = instantiate(&template(0, 0, 0), now);
        assert_eq!(
            schedule.water.frequency_days(),
            Some(DEFAULT_WATER_FREQUENCY_DAYS)
        );
    }

    #[test]
    fn advance_on_inactive_dimension_is_a_no_op() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let schedule = instantiate(&template(7, 0, 30), now);
        let later = now + Duration::days(2);

        let advanced = advance(&schedule, CareKind::Mist, later);
        assert_eq!(advanced, schedule);
        assert_eq!(advanced.mist, CareDimension::Inactive);
    }

    #[test]
    fn advance_leaves_other_dimensions_untouched() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let schedule = instantiate(&template(7, 3, 30), now);
        let later = now + Duration::days(5);

        let advanced = advance(&schedule, CareKind::Water, later);
        assert_eq!(advanced.mist, schedule.mist);
        assert_eq!(advanced.fertilize, schedule.fertilize);
        assert_eq!(advanced.water.last_done().unwrap(), later);
        assert_eq!(
            advanced.water.next_due().unwrap(),
            later + Duration::days(7)
        );
    }

    #[test]
    fn reschedule_preserves_the_anchor() {
        let intake = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let edit_time = intake + Duration::days(3);
        let schedule = instantiate(&template(7, 0, 0), intake);

        for f2 in [1u32, 2, 14, 60] {
            let edited = reschedule(&schedule, CareKind::Water, f2, edit_time);
            assert_eq!(edited.water.last_done().unwrap(), intake);
            assert_eq!(
                edited.water.next_due().unwrap(),
                intake + Duration::days(i64::from(f2))
            );
        }
    }

    #[test]
    fn reschedule_to_zero_deactivates() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let schedule = instantiate(&template(7, 3, 0), now);

        let edited = reschedule(&schedule, CareKind::Mist, 0, now);
        assert_eq!(edited.mist, CareDimension::Inactive);
        assert_eq!(edited.mist.last_done(), None);
        assert_eq!(edited.mist.next_due(), None);
        assert_eq!(edited.water, schedule.water);

        // The engine itself allows clearing water too; refusing that edit is
        // the controller's job.
        let no_water = reschedule(&schedule, CareKind::Water, 0, now);
        assert_eq!(no_water.water.last_done(), None);
        assert_eq!(no_water.water.next_due(), None);
    }

    #[test]
    fn reactivating_a_cleared_dimension_anchors_at_now() {
        let intake = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let later = intake + Duration::days(10);
        let schedule = instantiate(&template(7, 3, 0), intake);

        let cleared = reschedule(&schedule, CareKind::Mist, 0, intake);
        let revived = reschedule(&cleared, CareKind::Mist, 5, later);

        assert_eq!(revived.mist.last_done().unwrap(), later);
        assert_eq!(
            revived.mist.next_due().unwrap(),
            later + Duration::days(5)
        );
    }
}

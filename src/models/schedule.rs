use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The three kinds of recurring care a plant can need.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CareKind {
    Water,
    Mist,
    Fertilize,
}

impl CareKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CareKind::Water => "water",
            CareKind::Mist => "mist",
            CareKind::Fertilize => "fertilize",
        }
    }
}

/// One recurring care dimension.
///
/// A dimension is either fully inactive or fully scheduled. A frequency
/// without timestamps (or timestamps without a frequency) is unrepresentable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum CareDimension {
    #[default]
    Inactive,
    #[serde(rename_all = "camelCase")]
    Active {
        frequency_days: u32,
        last_done: DateTime<Utc>,
        next_due: DateTime<Utc>,
    },
}

impl CareDimension {
    /// Active dimension anchored at `anchor`, due `frequency_days` later.
    pub fn active(frequency_days: u32, anchor: DateTime<Utc>) -> Self {
        CareDimension::Active {
            frequency_days,
            last_done: anchor,
            next_due: anchor + Duration::days(i64::from(frequency_days)),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, CareDimension::Active { .. })
    }

    pub fn frequency_days(&self) -> Option<u32> {
        match self {
            CareDimension::Inactive => None,
            CareDimension::Active { frequency_days, .. } => Some(*frequency_days),
        }
    }

    pub fn last_done(&self) -> Option<DateTime<Utc>> {
        match self {
            CareDimension::Inactive => None,
            CareDimension::Active { last_done, .. } => Some(*last_done),
        }
    }

    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        match self {
            CareDimension::Inactive => None,
            CareDimension::Active { next_due, .. } => Some(*next_due),
        }
    }
}

/// Recurring maintenance plan for one plant.
///
/// Creation flows always produce an active water dimension; mist and
/// fertilize stay inactive for species that do not need them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CareSchedule {
    pub water: CareDimension,
    pub mist: CareDimension,
    pub fertilize: CareDimension,
}

impl CareSchedule {
    pub fn dimension(&self, kind: CareKind) -> &CareDimension {
        match kind {
            CareKind::Water => &self.water,
            CareKind::Mist => &self.mist,
            CareKind::Fertilize => &self.fertilize,
        }
    }

    pub fn dimension_mut(&mut self, kind: CareKind) -> &mut CareDimension {
        match kind {
            CareKind::Water => &mut self.water,
            CareKind::Mist => &mut self.mist,
            CareKind::Fertilize => &mut self.fertilize,
        }
    }
}

//! Care Schedule Engine: pure date arithmetic over
//! [`CareSchedule`](crate::models::CareSchedule) values.
//!
//! All mutations go through [`advance`], [`reschedule`] and the
//! `instantiate*` constructors; the surrounding controller decides when to
//! persist the results.

pub mod engine;
pub mod urgency;

pub use engine::{
    advance, instantiate, instantiate_from_diagnosis, reschedule, DEFAULT_WATER_FREQUENCY_DAYS,
};
pub use urgency::{classify, Urgency};

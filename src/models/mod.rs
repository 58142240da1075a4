mod diagnosis;
mod plant;
mod schedule;
mod species;

pub use diagnosis::DiagnosisResult;
pub use plant::{HealthStatus, Plant};
pub use schedule::{CareDimension, CareKind, CareSchedule};
pub use species::{CareRequirements, Species};

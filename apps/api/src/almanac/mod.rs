// Almanac: the static Fijian month dataset, the month join over it, and the
// moon-phase calculation shown alongside.

pub mod dataset;
pub mod handlers;
pub mod join;
pub mod models;
pub mod moon;

#![forbid(unsafe_code)]
//! Daily Rotator — quel élément d'une rotation numérotée (1..N) utiliser aujourd'hui.
//!
//! - Calcul pur : jours écoulés depuis une ancre (date, élément), modulo euclidien.
//! - « Aujourd'hui » = date calendaire locale dans un fuseau IANA, via une horloge injectable.
//! - Aperçu de planning exportable (CSV/JSON).
//! - Coquille web optionnelle (feature `http`) : formulaire, détection du fuseau, API JSON.

pub mod config;
#[cfg(feature = "http")]
pub mod http;
pub mod io;
pub mod model;
#[cfg(feature = "http")]
pub mod page;
pub mod rotation;
pub mod schedule;
pub mod tz;

pub use config::{RotationDefaults, ServerConfig};
pub use model::{Rotation, RotationConfig, ScheduleEntry};
pub use rotation::{
    calculate_rotation, rotate, Clock, FixedClock, RotationCalculator, SystemClock,
    ValidationError, EPOCH, MAX_SCHEDULE_DAYS, MIN_ITEMS,
};
pub use schedule::build_schedule;
pub use tz::parse_timezone;

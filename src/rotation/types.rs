use chrono::NaiveDate;
use thiserror::Error;

/// Nombre minimal d'éléments dans une rotation.
pub const MIN_ITEMS: u32 = 1;

/// Nombre maximal de jours pour un aperçu de planning.
pub const MAX_SCHEDULE_DAYS: u32 = 366;

/// Date d'ancrage par défaut (jour 0).
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1970, 1, 1) {
    Some(d) => d,
    None => panic!("epoch is a valid date"),
};

/// Erreur de saisie : toujours récupérable côté appelant (re-saisie).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("item_count must be >= {MIN_ITEMS}, got {0}")]
    ItemCountTooSmall(i64),
    #[error("invalid item_count: {0:?}")]
    InvalidItemCount(String),
    #[error("start_item must be within [1, {item_count}], got {start_item}")]
    StartItemOutOfRange { start_item: i64, item_count: u32 },
    #[error("invalid start_item: {0:?}")]
    InvalidStartItem(String),
    #[error("invalid start_date (expected YYYY-MM-DD): {0:?}")]
    InvalidStartDate(String),
    #[error("unknown timezone: {0:?}")]
    UnknownTimezone(String),
    #[error("invalid days: {0:?}")]
    InvalidDays(String),
    #[error("schedule length must be within [1, {max}], got {days}")]
    ScheduleLength { days: i64, max: u32 },
}

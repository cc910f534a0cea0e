use crate::rotation::{util, ValidationError, EPOCH, MIN_ITEMS};
use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::Serialize;

/// Paramètres d'une rotation : taille du pool et ancre (jour 0, élément du jour 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RotationConfig {
    item_count: u32,
    start_date: NaiveDate,
    start_item: u32,
}

impl RotationConfig {
    /// Valide `item_count >= 1` et `1 <= start_item <= item_count`.
    pub fn new(
        item_count: u32,
        start_date: NaiveDate,
        start_item: u32,
    ) -> Result<Self, ValidationError> {
        if item_count < MIN_ITEMS {
            return Err(ValidationError::ItemCountTooSmall(i64::from(item_count)));
        }
        if start_item < 1 || start_item > item_count {
            return Err(ValidationError::StartItemOutOfRange {
                start_item: i64::from(start_item),
                item_count,
            });
        }
        Ok(Self {
            item_count,
            start_date,
            start_item,
        })
    }

    /// Ancre par défaut : 1970-01-01, élément 1.
    pub fn with_defaults(item_count: u32) -> Result<Self, ValidationError> {
        Self::new(item_count, EPOCH, 1)
    }

    pub fn item_count(&self) -> u32 {
        self.item_count
    }
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }
    pub fn start_item(&self) -> u32 {
        self.start_item
    }

    /// Élément actif pour une date calendaire donnée.
    pub fn item_on(&self, date: NaiveDate) -> u32 {
        let elapsed = util::days_between(self.start_date, date);
        util::rotation_index(elapsed, self.start_item, self.item_count)
    }

    /// Vrai si l'ancre diffère de 1970-01-01 / élément 1.
    pub fn has_custom_anchor(&self) -> bool {
        self.start_date != EPOCH || self.start_item != 1
    }
}

/// Résultat d'un calcul : l'élément actif pour la journée locale `date` dans `timezone`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rotation {
    pub item: u32,
    pub config: RotationConfig,
    pub date: NaiveDate,
    pub timezone: Tz,
}

impl Rotation {
    pub fn on(config: RotationConfig, timezone: Tz, date: NaiveDate) -> Self {
        Self {
            item: config.item_on(date),
            config,
            date,
            timezone,
        }
    }

    /// Ex. `Saturday, October 18, 2026`.
    pub fn display_date(&self) -> String {
        self.date.format("%A, %B %d, %Y").to_string()
    }

    pub fn timezone_name(&self) -> &'static str {
        self.timezone.name()
    }
}

/// Une ligne d'aperçu de planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub weekday: String,
    pub item: u32,
}

impl ScheduleEntry {
    pub fn new(date: NaiveDate, item: u32) -> Self {
        Self {
            date,
            weekday: date.format("%A").to_string(),
            item,
        }
    }
}

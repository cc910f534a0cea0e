mod clock;
mod types;
pub(crate) mod util;

pub use clock::{Clock, FixedClock, SystemClock};
pub use types::{ValidationError, EPOCH, MAX_SCHEDULE_DAYS, MIN_ITEMS};

use crate::model::{Rotation, RotationConfig, ScheduleEntry};
use crate::schedule;
use crate::tz::parse_timezone;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Élément actif pour une date calendaire (arithmétique pure, sans horloge).
pub fn calculate_rotation(config: &RotationConfig, date: NaiveDate) -> u32 {
    config.item_on(date)
}

/// Valide toutes les entrées puis calcule l'élément actif pour la journée
/// locale de `now` dans `timezone`.
///
/// Le résultat est stable sur toute la journée locale et change à minuit
/// dans `timezone`.
pub fn rotate(
    item_count: u32,
    timezone: &str,
    start_date: NaiveDate,
    start_item: u32,
    now: DateTime<Utc>,
) -> Result<u32, ValidationError> {
    let config = RotationConfig::new(item_count, start_date, start_item)?;
    let tz = parse_timezone(timezone)?;
    Ok(calculate_rotation(&config, util::local_date(now, tz)))
}

/// Calculateur : encapsule l'horloge injectée.
#[derive(Debug, Default, Clone)]
pub struct RotationCalculator<C = SystemClock> {
    clock: C,
}

impl<C: Clock> RotationCalculator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Date calendaire courante dans `tz`.
    pub fn today(&self, tz: Tz) -> NaiveDate {
        util::local_date(self.clock.now(), tz)
    }

    pub fn active(&self, config: &RotationConfig, tz: Tz) -> Rotation {
        let date = self.today(tz);
        let rotation = Rotation::on(*config, tz, date);
        tracing::debug!(
            item = rotation.item,
            item_count = config.item_count(),
            %date,
            timezone = tz.name(),
            "computed active item"
        );
        rotation
    }

    /// Aperçu des `days` prochains jours, à partir d'aujourd'hui dans `tz`.
    pub fn upcoming(
        &self,
        config: &RotationConfig,
        tz: Tz,
        days: u32,
    ) -> anyhow::Result<Vec<ScheduleEntry>> {
        schedule::build_schedule(config, self.today(tz), days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn today_follows_local_midnight() {
        let tz = chrono_tz::America::New_York;
        let before = Utc.with_ymd_and_hms(2024, 1, 2, 4, 59, 59).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 1, 2, 5, 0, 0).unwrap();

        let calc = RotationCalculator::new(FixedClock(before));
        assert_eq!(calc.today(tz), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let calc = RotationCalculator::new(FixedClock(after));
        assert_eq!(calc.today(tz), NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }
}

use crate::model::{RotationConfig, ScheduleEntry};
use crate::rotation::{ValidationError, MAX_SCHEDULE_DAYS};
use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Génère l'aperçu jour par jour de la rotation sur `days` jours à partir de `from`.
pub fn build_schedule(
    config: &RotationConfig,
    from: NaiveDate,
    days: u32,
) -> Result<Vec<ScheduleEntry>> {
    if days == 0 || days > MAX_SCHEDULE_DAYS {
        return Err(ValidationError::ScheduleLength {
            days: i64::from(days),
            max: MAX_SCHEDULE_DAYS,
        }
        .into());
    }

    let mut out = Vec::with_capacity(days as usize);
    let mut current = from;
    for i in 0..days {
        out.push(ScheduleEntry::new(current, config.item_on(current)));
        if i + 1 < days {
            current = current.succ_opt().context("date overflow")?;
        }
    }
    Ok(out)
}

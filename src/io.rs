use crate::config::RotationDefaults;
use crate::model::{RotationConfig, ScheduleEntry};
use crate::rotation::{ValidationError, MAX_SCHEDULE_DAYS, MIN_ITEMS};
use anyhow::Context;
use chrono::NaiveDate;
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Valeur de formulaire : une chaîne vide vaut absence.
pub fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

pub fn parse_item_count(raw: &str) -> Result<u32, ValidationError> {
    let raw = raw.trim();
    let n: i64 = raw
        .parse()
        .map_err(|_| ValidationError::InvalidItemCount(raw.to_string()))?;
    if n < i64::from(MIN_ITEMS) {
        return Err(ValidationError::ItemCountTooSmall(n));
    }
    u32::try_from(n).map_err(|_| ValidationError::InvalidItemCount(raw.to_string()))
}

/// Date ISO `YYYY-MM-DD` ; `default` si absente.
pub fn parse_start_date(
    raw: Option<&str>,
    default: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    match non_blank(raw) {
        None => Ok(default),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidStartDate(s.to_string())),
    }
}

/// Élément de départ ; la borne haute est vérifiée par [`RotationConfig::new`].
pub fn parse_start_item(
    raw: Option<&str>,
    default: u32,
    item_count: u32,
) -> Result<u32, ValidationError> {
    let Some(s) = non_blank(raw) else {
        return Ok(default);
    };
    let k: i64 = s
        .parse()
        .map_err(|_| ValidationError::InvalidStartItem(s.to_string()))?;
    u32::try_from(k).map_err(|_| ValidationError::StartItemOutOfRange {
        start_item: k,
        item_count,
    })
}

/// Longueur d'aperçu ; `default` si absente. Les bornes sont vérifiées par
/// [`build_schedule`](crate::schedule::build_schedule).
pub fn parse_days(raw: Option<&str>, default: u32) -> Result<u32, ValidationError> {
    let Some(s) = non_blank(raw) else {
        return Ok(default);
    };
    let days: i64 = s
        .parse()
        .map_err(|_| ValidationError::InvalidDays(s.to_string()))?;
    u32::try_from(days).map_err(|_| ValidationError::ScheduleLength {
        days,
        max: MAX_SCHEDULE_DAYS,
    })
}

/// Construit une configuration validée à partir des valeurs brutes d'une requête.
pub fn parse_config(
    items: &str,
    start_date: Option<&str>,
    start_item: Option<&str>,
    defaults: &RotationDefaults,
) -> Result<RotationConfig, ValidationError> {
    let item_count = parse_item_count(items)?;
    let start_date = parse_start_date(start_date, defaults.start_date)?;
    let start_item = parse_start_item(start_item, defaults.start_item, item_count)?;
    RotationConfig::new(item_count, start_date, start_item)
}

/// Export CSV du planning: header `date,weekday,item`
pub fn export_schedule_csv<P: AsRef<Path>>(
    path: P,
    entries: &[ScheduleEntry],
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
    w.write_record(["date", "weekday", "item"])?;
    for e in entries {
        let date = e.date.format("%Y-%m-%d").to_string();
        let item = e.item.to_string();
        w.write_record([date.as_str(), e.weekday.as_str(), item.as_str()])?;
    }
    w.flush()?;
    let data = w
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing csv writer: {}", e.error()))?;
    write_atomic(path.as_ref(), &data)
}

/// Export JSON du planning (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(
    path: P,
    entries: &[ScheduleEntry],
) -> anyhow::Result<()> {
    let json = serde_json::to_vec_pretty(entries)?;
    write_atomic(path.as_ref(), &json)
}

fn write_atomic(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("atomic rename to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::EPOCH;

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let defaults = RotationDefaults::default();
        let cfg = parse_config("7", Some("  "), Some(""), &defaults).unwrap();
        assert_eq!(cfg.start_date(), EPOCH);
        assert_eq!(cfg.start_item(), 1);
    }

    #[test]
    fn rejects_bad_item_counts() {
        assert_eq!(parse_item_count("0"), Err(ValidationError::ItemCountTooSmall(0)));
        assert_eq!(parse_item_count("-4"), Err(ValidationError::ItemCountTooSmall(-4)));
        assert_eq!(
            parse_item_count("seven"),
            Err(ValidationError::InvalidItemCount("seven".into()))
        );
    }

    #[test]
    fn rejects_bad_start_values() {
        let defaults = RotationDefaults::default();
        assert_eq!(
            parse_config("3", None, Some("5"), &defaults),
            Err(ValidationError::StartItemOutOfRange { start_item: 5, item_count: 3 })
        );
        assert_eq!(
            parse_config("3", None, Some("-1"), &defaults),
            Err(ValidationError::StartItemOutOfRange { start_item: -1, item_count: 3 })
        );
        assert_eq!(
            parse_config("3", Some("2024-13-01"), None, &defaults),
            Err(ValidationError::InvalidStartDate("2024-13-01".into()))
        );
    }

    #[test]
    fn days_blank_defaults_and_garbage_rejected() {
        assert_eq!(parse_days(None, 7), Ok(7));
        assert_eq!(parse_days(Some(" "), 7), Ok(7));
        assert_eq!(parse_days(Some("14"), 7), Ok(14));
        assert_eq!(parse_days(Some("abc"), 7), Err(ValidationError::InvalidDays("abc".into())));
        assert_eq!(
            parse_days(Some("-1"), 7),
            Err(ValidationError::ScheduleLength { days: -1, max: MAX_SCHEDULE_DAYS })
        );
    }
}

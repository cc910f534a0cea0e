use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Date calendaire locale de `now` dans `tz`.
pub(crate) fn local_date(now: DateTime<Utc>, tz: Tz) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}

/// Jours écoulés depuis l'ancre (négatif si l'ancre est dans le futur).
pub(crate) fn days_between(start: NaiveDate, current: NaiveDate) -> i64 {
    current.signed_duration_since(start).num_days()
}

/// Index 1-based de l'élément actif ; modulo euclidien pour les jours négatifs.
pub(crate) fn rotation_index(days_elapsed: i64, start_item: u32, item_count: u32) -> u32 {
    let n = i64::from(item_count);
    let offset = days_elapsed + i64::from(start_item) - 1;
    // rem_euclid ∈ [0, n) donc la conversion ne peut pas échouer
    offset.rem_euclid(n) as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_days_wrap_backwards() {
        assert_eq!(rotation_index(-1, 1, 7), 7);
        assert_eq!(rotation_index(-7, 1, 7), 1);
        assert_eq!(rotation_index(-8, 2, 3), 3);
    }

    #[test]
    fn single_item_is_always_one() {
        for d in [-1000, -1, 0, 1, 99_999] {
            assert_eq!(rotation_index(d, 1, 1), 1);
        }
    }
}

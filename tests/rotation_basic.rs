#![forbid(unsafe_code)]
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use daily_rotator::{
    calculate_rotation, rotate, FixedClock, RotationCalculator, RotationConfig, ValidationError,
    EPOCH,
};
use proptest::prelude::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn seven_items_from_epoch() {
    let cfg = RotationConfig::with_defaults(7).unwrap();
    assert_eq!(calculate_rotation(&cfg, d(1970, 1, 1)), 1);
    assert_eq!(calculate_rotation(&cfg, d(1970, 1, 3)), 3);
    assert_eq!(calculate_rotation(&cfg, d(1970, 1, 8)), 1);
}

#[test]
fn three_items_anchored_on_second() {
    let cfg = RotationConfig::new(3, d(2024, 1, 1), 2).unwrap();
    let got: Vec<u32> = (1..=4)
        .map(|day| calculate_rotation(&cfg, d(2024, 1, day)))
        .collect();
    assert_eq!(got, vec![2, 3, 1, 2]);
}

#[test]
fn dates_before_anchor_stay_in_range() {
    let cfg = RotationConfig::new(3, d(2024, 1, 1), 2).unwrap();
    assert_eq!(calculate_rotation(&cfg, d(2023, 12, 31)), 1);
    assert_eq!(calculate_rotation(&cfg, d(2023, 12, 30)), 3);
    assert_eq!(calculate_rotation(&cfg, d(2023, 12, 29)), 2);
}

#[test]
fn rotate_validates_inputs() {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    assert_eq!(
        rotate(0, "UTC", EPOCH, 1, now),
        Err(ValidationError::ItemCountTooSmall(0))
    );
    assert_eq!(
        rotate(3, "UTC", EPOCH, 5, now),
        Err(ValidationError::StartItemOutOfRange { start_item: 5, item_count: 3 })
    );
    assert_eq!(
        rotate(3, "UTC", EPOCH, 0, now),
        Err(ValidationError::StartItemOutOfRange { start_item: 0, item_count: 3 })
    );
    assert_eq!(
        rotate(3, "Nowhere/Atlantis", EPOCH, 1, now),
        Err(ValidationError::UnknownTimezone("Nowhere/Atlantis".into()))
    );
}

#[test]
fn result_changes_at_local_midnight() {
    // Tokyo = UTC+9 : minuit local = 15:00 UTC la veille
    let before = Utc.with_ymd_and_hms(2024, 1, 1, 14, 59, 59).unwrap();
    let after = Utc.with_ymd_and_hms(2024, 1, 1, 15, 0, 0).unwrap();
    let start = d(2024, 1, 1);

    assert_eq!(rotate(3, "Asia/Tokyo", start, 1, before), Ok(1));
    assert_eq!(rotate(3, "Asia/Tokyo", start, 1, after), Ok(2));
    // même instant, encore le 1er janvier à UTC
    assert_eq!(rotate(3, "UTC", start, 1, after), Ok(1));
}

#[test]
fn calculator_uses_injected_clock() {
    let now = Utc.with_ymd_and_hms(1970, 1, 3, 23, 0, 0).unwrap();
    let calc = RotationCalculator::new(FixedClock(now));
    let cfg = RotationConfig::with_defaults(7).unwrap();

    let r = calc.active(&cfg, chrono_tz::UTC);
    assert_eq!(r.item, 3);
    assert_eq!(r.display_date(), "Saturday, January 03, 1970");
    assert_eq!(r.timezone_name(), "UTC");

    // UTC+1 : déjà le 4 janvier
    let r = calc.active(&cfg, chrono_tz::Europe::Paris);
    assert_eq!(r.item, 4);
}

proptest! {
    #[test]
    fn result_is_always_in_range(n in 1u32..500, k_seed in 0u32..500, offset in -100_000i64..100_000) {
        let k = k_seed % n + 1;
        let cfg = RotationConfig::new(n, d(2000, 6, 15), k).unwrap();
        let day = d(2000, 6, 15) + Duration::days(offset);
        let item = calculate_rotation(&cfg, day);
        prop_assert!((1..=n).contains(&item));
    }

    #[test]
    fn single_item_always_one(offset in -100_000i64..100_000) {
        let cfg = RotationConfig::with_defaults(1).unwrap();
        prop_assert_eq!(calculate_rotation(&cfg, EPOCH + Duration::days(offset)), 1);
    }

    #[test]
    fn rotation_is_periodic(n in 1u32..100, offset in -50_000i64..50_000) {
        let cfg = RotationConfig::with_defaults(n).unwrap();
        let day = EPOCH + Duration::days(offset);
        prop_assert_eq!(
            calculate_rotation(&cfg, day),
            calculate_rotation(&cfg, day + Duration::days(i64::from(n)))
        );
    }

    #[test]
    fn anchor_day_yields_start_item(n in 1u32..100, k_seed in 0u32..100) {
        let k = k_seed % n + 1;
        let start = d(2024, 1, 1);
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        prop_assert_eq!(rotate(n, "UTC", start, k, now), Ok(k));
    }
}

use jiff::civil::date;
use oasis_core::derive::{derive_age, derive_bmi, round_hundredths};

#[test]
fn bmi_rounds_to_two_decimals() {
    // 70 / 1.6^2 = 27.34375
    assert_eq!(derive_bmi(160.0, 70.0), Some(27.34));
}

#[test]
fn bmi_requires_positive_inputs() {
    assert_eq!(derive_bmi(0.0, 70.0), None);
    assert_eq!(derive_bmi(170.0, -1.0), None);
    assert_eq!(derive_bmi(f64::NAN, 70.0), None);
}

#[test]
fn bmi_recomputation_is_stable_across_inputs() {
    for height in (120..=210).step_by(7) {
        for mass in (35..=160).step_by(9) {
            let h = f64::from(height) + 0.3;
            let m = f64::from(mass) + 0.7;
            let stored = derive_bmi(h, m).unwrap();
            assert_eq!(derive_bmi(h, m), Some(stored));
            assert_eq!(round_hundredths(stored), stored);
        }
    }
}

#[test]
fn rounding_is_half_away_from_zero() {
    assert_eq!(round_hundredths(1.125), 1.13);
    assert_eq!(round_hundredths(-1.125), -1.13);
    assert_eq!(round_hundredths(2.0), 2.0);
}

#[test]
fn age_counts_whole_elapsed_years() {
    let birth = date(1960, 3, 10);
    assert_eq!(derive_age(Some(birth), date(2024, 3, 9)), Some(63));
    assert_eq!(derive_age(Some(birth), date(2024, 3, 10)), Some(64));
    assert_eq!(derive_age(Some(birth), date(2024, 2, 28)), Some(63));
    assert_eq!(derive_age(Some(birth), date(2024, 12, 31)), Some(64));
}

#[test]
fn age_without_birth_date_is_unknown() {
    assert_eq!(derive_age(None, date(2024, 3, 9)), None);
}

#[test]
fn age_of_leap_day_birth() {
    let birth = date(2000, 2, 29);
    assert_eq!(derive_age(Some(birth), date(2021, 2, 28)), Some(20));
    assert_eq!(derive_age(Some(birth), date(2021, 3, 1)), Some(21));
}

#[test]
fn age_before_birth_is_negative() {
    assert_eq!(derive_age(Some(date(2025, 6, 1)), date(2024, 6, 1)), Some(-1));
}

use oasis_instruments::scoring::{Severity, Tier};
use oasis_instruments::{
    all_instruments, classify_bmi, classify_grip, classify_katz, classify_lawton,
    classify_lower_limb, classify_six_minute_walk, classify_tug, get_instrument,
};

#[test]
fn bmi_boundaries_land_in_upper_band() {
    assert_eq!(classify_bmi(18.49).tier, Tier::Underweight);
    assert_eq!(classify_bmi(18.5).tier, Tier::Normal);
    assert_eq!(classify_bmi(24.99).tier, Tier::Normal);
    assert_eq!(classify_bmi(25.0).tier, Tier::Overweight);
    assert_eq!(classify_bmi(30.0).tier, Tier::Obese);
}

#[test]
fn only_normal_bmi_is_flagged_normal() {
    assert_eq!(classify_bmi(22.0).severity, Severity::Normal);
    for bmi in [15.0, 27.0, 35.0] {
        assert_eq!(classify_bmi(bmi).severity, Severity::AttentionNeeded);
    }
}

#[test]
fn lower_limb_uses_under_sixty_table() {
    assert_eq!(classify_lower_limb(11.9, Some(59)).tier, Tier::Excellent);
    assert_eq!(classify_lower_limb(12.0, Some(59)).tier, Tier::Good);
    assert_eq!(classify_lower_limb(15.0, Some(59)).tier, Tier::Fair);
    assert_eq!(classify_lower_limb(18.0, Some(59)).tier, Tier::Poor);
}

#[test]
fn lower_limb_uses_senior_table_from_sixty() {
    assert_eq!(classify_lower_limb(13.9, Some(60)).tier, Tier::Excellent);
    assert_eq!(classify_lower_limb(14.0, Some(60)).tier, Tier::Good);
    assert_eq!(classify_lower_limb(17.0, Some(75)).tier, Tier::Fair);
    assert_eq!(classify_lower_limb(21.0, Some(90)).tier, Tier::Poor);
}

#[test]
fn lower_limb_without_age_is_undefined() {
    for seconds in [-1.0, 0.0, 5.0, 13.0, 40.0, f64::NAN] {
        let result = classify_lower_limb(seconds, None);
        assert_eq!(result.tier, Tier::Undefined);
        assert_eq!(result.severity, Severity::AttentionNeeded);
    }
}

#[test]
fn lower_limb_age_zero_is_a_known_age() {
    assert_eq!(classify_lower_limb(10.0, Some(0)).tier, Tier::Excellent);
}

#[test]
fn lower_limb_is_pure_and_monotonic_within_band() {
    let rank = |tier: Tier| match tier {
        Tier::Excellent => 0,
        Tier::Good => 1,
        Tier::Fair => 2,
        Tier::Poor => 3,
        other => panic!("unexpected tier {other:?}"),
    };

    for age in [30, 59, 60, 85] {
        let mut previous = rank(classify_lower_limb(40.0, Some(age)).tier);
        let mut tenths = 400;
        while tenths >= 0 {
            let seconds = f64::from(tenths) / 10.0;
            let result = classify_lower_limb(seconds, Some(age));
            assert_eq!(result, classify_lower_limb(seconds, Some(age)));
            let current = rank(result.tier);
            assert!(current <= previous, "worsened at {seconds}s, age {age}");
            previous = current;
            tenths -= 1;
        }
    }
}

#[test]
fn grip_bands() {
    assert_eq!(classify_grip(30.0).tier, Tier::Excellent);
    assert_eq!(classify_grip(29.9).tier, Tier::Good);
    assert_eq!(classify_grip(20.0).tier, Tier::Good);
    assert_eq!(classify_grip(10.0).tier, Tier::Fair);
    assert_eq!(classify_grip(9.9).tier, Tier::Poor);
}

#[test]
fn walk_bands() {
    assert_eq!(classify_six_minute_walk(400).tier, Tier::Excellent);
    assert_eq!(classify_six_minute_walk(399).tier, Tier::Good);
    assert_eq!(classify_six_minute_walk(300).tier, Tier::Good);
    assert_eq!(classify_six_minute_walk(200).tier, Tier::Fair);
    assert_eq!(classify_six_minute_walk(0).tier, Tier::Poor);
}

#[test]
fn katz_bands() {
    assert_eq!(classify_katz(6).tier, Tier::Independent);
    assert_eq!(classify_katz(5).tier, Tier::MildDependence);
    assert_eq!(classify_katz(4).tier, Tier::MildDependence);
    assert_eq!(classify_katz(3).tier, Tier::ModerateDependence);
    assert_eq!(classify_katz(2).tier, Tier::ModerateDependence);
    assert_eq!(classify_katz(1).tier, Tier::SevereDependence);
    assert_eq!(classify_katz(0).tier, Tier::SevereDependence);
}

#[test]
fn katz_above_scale_is_classified_not_rejected() {
    assert_eq!(classify_katz(7).tier, Tier::MildDependence);
}

#[test]
fn lawton_bands() {
    assert_eq!(classify_lawton(27).tier, Tier::Independent);
    assert_eq!(classify_lawton(24).tier, Tier::Independent);
    assert_eq!(classify_lawton(23).tier, Tier::MildDependence);
    assert_eq!(classify_lawton(18).tier, Tier::MildDependence);
    assert_eq!(classify_lawton(12).tier, Tier::ModerateDependence);
    assert_eq!(classify_lawton(11).tier, Tier::SevereDependence);
}

#[test]
fn tug_boundary_is_medium_risk() {
    assert_eq!(classify_tug(11.99).tier, Tier::LowRisk);
    assert_eq!(classify_tug(12.0).tier, Tier::MediumRisk);
    assert_eq!(classify_tug(20.99).tier, Tier::MediumRisk);
    assert_eq!(classify_tug(21.0).tier, Tier::HighRisk);
}

#[test]
fn negative_values_fall_into_lowest_band() {
    assert_eq!(classify_grip(-5.0).tier, Tier::Poor);
    assert_eq!(classify_six_minute_walk(-10).tier, Tier::Poor);
    assert_eq!(classify_katz(-1).tier, Tier::SevereDependence);
    assert_eq!(classify_lawton(-1).tier, Tier::SevereDependence);
    assert_eq!(classify_bmi(-3.0).tier, Tier::Underweight);
    assert_eq!(classify_tug(-2.0).tier, Tier::LowRisk);
}

#[test]
fn severity_follows_tier() {
    let normal = [
        Tier::Normal,
        Tier::Excellent,
        Tier::Good,
        Tier::Independent,
        Tier::LowRisk,
    ];
    let attention = [
        Tier::Underweight,
        Tier::Overweight,
        Tier::Obese,
        Tier::Fair,
        Tier::Poor,
        Tier::Undefined,
        Tier::MildDependence,
        Tier::ModerateDependence,
        Tier::SevereDependence,
        Tier::MediumRisk,
        Tier::HighRisk,
    ];
    for tier in normal {
        assert_eq!(tier.severity(), Severity::Normal, "{tier:?}");
    }
    for tier in attention {
        assert_eq!(tier.severity(), Severity::AttentionNeeded, "{tier:?}");
    }
}

#[test]
fn registry_lists_single_input_instruments() {
    let ids: Vec<_> = all_instruments().iter().map(|i| i.id().to_string()).collect();
    assert_eq!(ids, ["bmi", "grip", "six_minute_walk", "katz", "lawton", "tug"]);
    assert!(get_instrument("katz").is_some());
    assert!(get_instrument("lower_limb").is_none());
}

#[test]
fn band_description_lists_every_row() {
    let tug = get_instrument("tug").unwrap();
    let text = tug.describe_bands();
    assert!(text.starts_with("## Teste TUG"));
    assert!(text.contains("- < 12: Baixo risco"));
    assert!(text.contains("- < 21: Risco médio"));
    assert!(text.contains("- demais valores: Alto risco"));
}

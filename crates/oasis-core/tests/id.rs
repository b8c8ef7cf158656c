use oasis_core::AssessmentId;

#[test]
fn millis_round_trip_through_identifier() {
    let id = AssessmentId::from_millis(1_700_000_000_000);
    assert_eq!(id.created_at_millis(), 1_700_000_000_000);
    assert_eq!(id.created_at().as_millisecond(), 1_700_000_000_000);
}

#[test]
fn identifiers_from_same_instant_differ() {
    let a = AssessmentId::from_millis(1_700_000_000_123);
    let b = AssessmentId::from_millis(1_700_000_000_123);
    assert_ne!(a, b);
    assert_eq!(a.created_at_millis(), b.created_at_millis());
}

#[test]
fn negative_instant_clamps_to_epoch() {
    assert_eq!(AssessmentId::from_millis(-5).created_at_millis(), 0);
}

#[test]
fn display_and_parse_agree() {
    let id = AssessmentId::new();
    let parsed: AssessmentId = id.to_string().parse().unwrap();
    assert_eq!(parsed, id);
    assert_eq!(parsed.created_at_millis(), id.created_at_millis());
}

#[test]
fn garbage_does_not_parse() {
    assert!("not-an-id".parse::<AssessmentId>().is_err());
}

#[test]
fn serializes_as_plain_string() {
    let id = AssessmentId::from_millis(1_700_000_000_000);
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{id}\""));
}

#[test]
fn at_millis_is_deterministic() {
    let a = AssessmentId::at_millis(1_700_000_000_000);
    assert_eq!(a, AssessmentId::at_millis(1_700_000_000_000));
    assert_eq!(a.created_at_millis(), 1_700_000_000_000);
    assert_ne!(a, AssessmentId::at_millis(1_700_000_000_001));
}

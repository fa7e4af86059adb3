use super::*;

#[test]
fn progress_clamps_into_unit_range() {
    assert_eq!(Progress::new(-0.25).unwrap(), Progress::ZERO);
    assert_eq!(Progress::new(1.5).unwrap(), Progress::ONE);
    assert_eq!(Progress::new(0.3).unwrap().get(), 0.3);
}

#[test]
fn progress_rejects_non_finite() {
    assert!(Progress::new(f64::NAN).is_err());
    assert!(Progress::new(f64::INFINITY).is_err());
}

#[test]
fn local_rescales_sub_range() {
    let p = Progress::new(0.75).unwrap();
    assert_eq!(p.local(0.5, 1.0), 0.5);
    assert_eq!(p.local(0.0, 0.5), 1.0);
    assert_eq!(Progress::ZERO.local(0.5, 1.0), 0.0);
}

#[test]
fn local_with_empty_span_is_a_step() {
    assert_eq!(Progress::new(0.4).unwrap().local(0.5, 0.5), 0.0);
    assert_eq!(Progress::new(0.5).unwrap().local(0.5, 0.5), 1.0);
}

#[test]
fn progress_deserializes_through_validation() {
    let p: Progress = serde_json::from_str("2.0").unwrap();
    assert_eq!(p, Progress::ONE);
    assert_eq!(serde_json::to_string(&Progress::ZERO).unwrap(), "0.0");
}

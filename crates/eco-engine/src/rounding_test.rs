use super::*;

#[test]
fn test_round4_basic() {
    assert_eq!(round4(1.23456), 1.2346);
    assert_eq!(round4(1.23454), 1.2345);
    assert_eq!(round4(0.44), 0.44);
    assert_eq!(round4(2.0), 2.0);
}

#[test]
fn test_round4_negative_values() {
    assert_eq!(round4(-0.09), -0.09);
    assert_eq!(round4(-1.23456), -1.2346);
}

#[test]
fn test_round4_symmetric_about_zero() {
    // Half-away-from-zero treats both signs alike
    for v in [1.23456, 0.987654, 0.44, 0.09, 123.456789] {
        assert_eq!(round4(-v), -round4(v));
    }
}

#[test]
fn test_round4_folds_negative_zero() {
    let rounded = round4(-0.00001);
    assert_eq!(rounded, 0.0);
    assert!(rounded.is_sign_positive());
}

#[test]
fn test_round4_idempotent() {
    for v in [1.23456, -0.987654, 0.44, -0.09, 123.456789] {
        let once = round4(v);
        assert_eq!(round4(once), once);
    }
}

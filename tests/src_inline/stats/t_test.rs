use super::*;
use approx::assert_relative_eq;

#[test]
fn matches_reference_value() {
    let p = student_t_test(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0]).expect("p");
    assert_relative_eq!(p, 0.133_975, epsilon = 1e-4);
}

#[test]
fn separated_groups() {
    let p = student_t_test(&[0.1, 0.2, 0.3], &[0.5, 0.6, 0.7]).expect("p");
    assert!(p > 0.005 && p < 0.01, "p={p}");
}

#[test]
fn degenerate_inputs() {
    assert!(student_t_test(&[1.0], &[2.0]).expect("p").is_nan());
    assert!(student_t_test(&[1.0, 1.0], &[1.0, 1.0]).expect("p").is_nan());
    assert_eq!(student_t_test(&[1.0, 1.0], &[2.0, 2.0]).expect("p"), 0.0);
}

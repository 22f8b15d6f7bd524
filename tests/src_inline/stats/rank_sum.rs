use super::*;
use approx::assert_relative_eq;

#[test]
fn matches_reference_values() {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [6.0, 7.0, 8.0, 9.0, 10.0];
    assert_relative_eq!(rank_sum_z(&x, &y), -2.611_164, epsilon = 1e-5);
    assert_relative_eq!(rank_sum_test(&x, &y).expect("p"), 0.009_023, epsilon = 1e-5);
}

#[test]
fn three_versus_three_is_just_below_five_percent() {
    let p = rank_sum_test(&[0.1, 0.2, 0.3], &[0.5, 0.6, 0.7]).expect("p");
    assert_relative_eq!(p, 0.049_535, epsilon = 1e-5);
}

#[test]
fn statistic_is_antisymmetric() {
    let x = [0.3, 1.2, 0.7, 2.2];
    let y = [0.9, 1.8, 2.5];
    assert_relative_eq!(rank_sum_z(&x, &y), -rank_sum_z(&y, &x), epsilon = 1e-12);
    assert_relative_eq!(
        rank_sum_test(&x, &y).expect("p"),
        rank_sum_test(&y, &x).expect("p"),
        epsilon = 1e-12
    );
}

#[test]
fn ties_share_average_rank() {
    let ranks = average_ranks(&[1.0, 2.0], &[2.0, 3.0]);
    assert_eq!(ranks, vec![1.0, 2.5, 2.5, 4.0]);
}

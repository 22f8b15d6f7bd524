use super::*;

#[test]
fn separated_groups_are_significant() {
    let p = compare(&[0.1, 0.2, 0.3], &[0.5, 0.6, 0.7], TestMethod::RankSum).expect("p");
    assert!(p < 0.05, "p={p}");
}

#[test]
fn identical_groups_give_p_near_one() {
    let g = [0.1, 0.4, 0.9, 1.3];
    let p = compare(&g, &g, TestMethod::RankSum).expect("p");
    approx::assert_abs_diff_eq!(p, 1.0, epsilon = 1e-12);
    let p = compare(&g, &g, TestMethod::TwoSampleT).expect("p");
    approx::assert_abs_diff_eq!(p, 1.0, epsilon = 1e-12);
}

#[test]
fn empty_group_is_invalid_argument() {
    for method in [TestMethod::RankSum, TestMethod::TwoSampleT] {
        let err = compare(&[], &[1.0], method).unwrap_err();
        assert!(matches!(err, StatsError::InvalidArgument(_)));
        let err = compare(&[1.0], &[], method).unwrap_err();
        assert!(matches!(err, StatsError::InvalidArgument(_)));
    }
}

#[test]
fn unknown_method_is_invalid_argument() {
    let err = compare_named(&[1.0], &[2.0], "bogus").unwrap_err();
    assert!(matches!(err, StatsError::InvalidArgument(_)));
}

#[test]
fn method_names_parse() {
    assert_eq!("rank_sum".parse::<TestMethod>(), Ok(TestMethod::RankSum));
    assert_eq!("ranksum_test".parse::<TestMethod>(), Ok(TestMethod::RankSum));
    assert_eq!("two_sample_t".parse::<TestMethod>(), Ok(TestMethod::TwoSampleT));
    assert_eq!(TestMethod::default(), TestMethod::RankSum);
    assert_eq!(TestMethod::TwoSampleT.to_string(), "two_sample_t");
}

// SPDX-License-Identifier: AGPL-3.0-only

//! Integration tests: comparator semantics.
//!
//! Exercises the tolerance rule, aggregation logic, and exit-code mapping
//! the way the validation binaries rely on them.

use picvalid::compare::{profile_check, scalar_check, within_tolerance, Verdict};

#[test]
fn scalar_self_comparison_passes_any_nonnegative_tolerance() {
    for tol in [0.0, 1e-300, 1e-10, 1.0] {
        let c = scalar_check("v", -3.25, -3.25, tol);
        assert!(c.passed, "self-comparison must pass at tol={tol}");
        assert_eq!(c.delta, 0.0);
    }
}

#[test]
fn array_self_comparison_passes_any_nonnegative_tolerance() {
    let series: Vec<f64> = (0..64).map(|i| (f64::from(i) * 0.37).sin()).collect();
    for tol in [0.0, 1e-300, 1e-10, 1.0] {
        let c = profile_check("j_y", &series, &series, tol).expect("equal lengths");
        assert!(c.passed, "self-comparison must pass at tol={tol}");
    }
}

#[test]
fn deviation_exactly_at_tolerance_fails() {
    // Strict <, not <=: delta == tolerance is a FAIL.
    let c = scalar_check("x", 2.0, 1.5, 0.5);
    assert_eq!(c.delta, 0.5);
    assert!(!c.passed);

    assert!(!within_tolerance(0.5, 0.5));
    assert!(within_tolerance(0.5, 0.5 + 1e-12));
}

#[test]
fn negative_deviation_at_tolerance_fails_too() {
    let c = scalar_check("x", 1.0, 1.5, 0.5);
    assert_eq!(c.delta, -0.5);
    assert!(!c.passed);
}

#[test]
fn aggregate_false_iff_some_component_false() {
    // All pass → aggregate pass.
    let mut all_pass = Verdict::new("all_pass");
    for (label, sim, ideal) in [("x", 1.0, 1.0), ("vx", 0.1, 0.1001), ("vy", -2.0, -2.0)] {
        all_pass.check_scalar(label, sim, ideal, 1e-2);
    }
    assert!(all_pass.all_passed());

    // Injecting one failing component flips the aggregate, and only the
    // injected component reads as failed.
    let mut one_fail = Verdict::new("one_fail");
    one_fail.check_scalar("x", 1.0, 1.0, 1e-2);
    one_fail.check_scalar("vx", 99.0, 0.0, 1e-2);
    one_fail.check_scalar("vy", -2.0, -2.0, 1e-2);
    assert!(!one_fail.all_passed());
    assert_eq!(one_fail.passed_count(), 2);
    let failed: Vec<&str> = one_fail
        .checks
        .iter()
        .filter(|c| !c.passed)
        .map(|c| c.label.as_str())
        .collect();
    assert_eq!(failed, ["vx"]);

    // Every component failing is still aggregate false.
    let mut all_fail = Verdict::new("all_fail");
    all_fail.check_scalar("x", 10.0, 0.0, 1e-2);
    all_fail.check_scalar("vx", -10.0, 0.0, 1e-2);
    assert!(!all_fail.all_passed());
    assert_eq!(all_fail.passed_count(), 0);
}

#[test]
fn exit_code_mapping_is_independent_of_report_text() {
    let mut pass = Verdict::new("p");
    pass.check_scalar("x", 1.0, 1.0, 1e-3);
    assert_eq!(pass.exit_code(), 0);

    let mut fail = Verdict::new("f");
    fail.check_scalar("x", 2.0, 1.0, 1e-3);
    assert_eq!(fail.exit_code(), 1);
}

#[test]
fn report_surfaces_signed_delta_for_every_component() {
    let mut v = Verdict::new("uniform_bz");
    v.check_scalar("x", 5.2, 5.05, 1e-2);
    v.check_scalar("vx", 0.001, 0.0, 1e-2);
    v.check_scalar("vy", 1.999, 2.0, 1e-2);
    v.check_scalar("vz", -0.0005, 0.0, 1e-2);
    let report = v.render();
    for label in ["x", "vx", "vy", "vz"] {
        assert!(report.contains(&format!(" {label}:")), "missing {label}");
    }
    assert!(report.contains("Δ=+"), "positive deltas signed");
    assert!(report.contains("Δ=-"), "negative deltas signed");
    assert!(report.contains("FAIL: x"), "only x failed: {report}");
}

#[test]
fn comparison_is_deterministic() {
    let sim: Vec<f64> = (0..101).map(|i| f64::from(i) * 0.01).collect();
    let ana: Vec<f64> = (0..101).map(|i| f64::from(i) * 0.0101).collect();
    let a = profile_check("j_y", &sim, &ana, 1e-3).expect("equal lengths");
    let b = profile_check("j_y", &sim, &ana, 1e-3).expect("equal lengths");
    assert_eq!(a.delta.to_bits(), b.delta.to_bits());
    assert_eq!(a.passed, b.passed);
}

use approx::assert_abs_diff_eq;
use bezanim_core::traits::BoundingBox;
use bezanim_curve::{cubic_bezier, linear_bezier, Bezier, Curve, CurvePositions};
use bezanim_math::{dvec3, DVec3};

#[test]
fn test_curve_matches_free_functions() {
    let (p0, p1, p2, p3) = (
        dvec3(0.0, 0.0, 0.0),
        dvec3(0.0, 10.0, 0.0),
        dvec3(10.0, 10.0, 5.0),
        dvec3(10.0, 0.0, 5.0),
    );
    let curve = Bezier::try_from(CurvePositions::cubic(p0, p1, p2, p3)).unwrap();
    for i in 0..=10 {
        let t = i as f64 / 10.0;
        assert_eq!(curve.point_at(t), cubic_bezier(t, p0, p1, p2, p3));
    }
}

#[test]
fn test_scenario_linear_quarter_steps() {
    let p0 = DVec3::ZERO;
    let p1 = dvec3(0.0, 50.0, 0.0);
    let expected = [12.5, 25.0, 37.5, 50.0];
    for (i, y) in expected.iter().enumerate() {
        let t = (i + 1) as f64 * 0.25;
        let p = linear_bezier(t, p0, p1);
        assert_abs_diff_eq!(p.x, 0.0);
        assert_abs_diff_eq!(p.y, *y);
        assert_abs_diff_eq!(p.z, 0.0);
    }
}

#[test]
fn test_positions_from_json() {
    let json = r#"{ "p0": [0.0, 0.0, 0.0], "p1": [1.0, 2.0, 3.0], "p2": [4.0, 5.0, 6.0] }"#;
    let positions: CurvePositions = serde_json::from_str(json).unwrap();
    assert_eq!(positions.p2, Some(dvec3(4.0, 5.0, 6.0)));
    assert_eq!(positions.p3, None);

    let curve = Bezier::try_from(positions).unwrap();
    assert_eq!(curve.degree(), 2);
    assert_eq!(curve.end(), dvec3(4.0, 5.0, 6.0));
}

#[test]
fn test_bezier_serde_tagged() {
    let curve = Bezier::Linear {
        p0: DVec3::ZERO,
        p1: DVec3::X,
    };
    let json = serde_json::to_string(&curve).unwrap();
    assert!(json.contains(r#""kind":"linear""#));
    let back: Bezier = serde_json::from_str(&json).unwrap();
    assert_eq!(back, curve);
}

#[test]
fn test_quadratic_bounds_and_tangent_direction() {
    let curve = Bezier::from_points(&[
        dvec3(0.0, 0.0, 0.0),
        dvec3(1.0, 2.0, 0.0),
        dvec3(2.0, 0.0, 0.0),
    ])
    .unwrap();
    let aabb = curve.bounding_box();
    assert_eq!(aabb.max, dvec3(2.0, 2.0, 0.0));

    // Apex of a symmetric arch has a horizontal tangent
    let tangent = curve.tangent_at(0.5);
    assert!(tangent.y.abs() < 1e-12);
    assert!(tangent.x > 0.0);
    assert_abs_diff_eq!(curve.point_at(0.5).y, 1.0, epsilon = 1e-12);
}

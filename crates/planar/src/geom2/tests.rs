use super::*;
use nalgebra::{point, Point2};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::TAU;

#[test]
fn distilled_scenarios() {
    let cfg = GeomCfg::default();
    // lines: diagonals of the 2x2 square
    let a = Line::from_points(point![0.0, 0.0], point![2.0, 2.0]).unwrap();
    let b = Line::from_points(point![0.0, 2.0], point![2.0, 0.0]).unwrap();
    let p = a.intersect(&b, cfg).point().unwrap();
    assert!(util::points_eq(p, point![1.0, 1.0], 1e-12));

    // circles: two crossings, then external tangency
    let c1 = Circle::new(5.0, point![0.0, 0.0]).unwrap();
    let c2 = Circle::new(5.0, point![8.0, 0.0]).unwrap();
    let hits = c1.intersect_circle(&c2, cfg);
    assert_eq!(hits.count(), 2);
    assert!(hits.contains_point(point![4.0, 3.0], 1e-9));
    assert!(hits.contains_point(point![4.0, -3.0], 1e-9));
    let c3 = Circle::new(3.0, point![0.0, 0.0]).unwrap();
    let c4 = Circle::new(3.0, point![6.0, 0.0]).unwrap();
    assert_eq!(c3.intersect_circle(&c4, cfg), Solutions::One(point![3.0, 0.0]));

    // polygon: interior, exterior, edge and vertex
    let square = Polygon::new(vec![
        point![0.0, 0.0],
        point![4.0, 0.0],
        point![4.0, 4.0],
        point![0.0, 4.0],
    ])
    .unwrap();
    assert!(square.contains_point(point![2.0, 2.0], cfg));
    assert!(!square.contains_point(point![5.0, 5.0], cfg));
    assert!(square.contains_point(point![4.0, 2.0], cfg));
    assert!(square.contains_point(point![0.0, 0.0], cfg));
}

#[test]
fn circumcircle_of_triangle_contains_its_polygon() {
    let cfg = GeomCfg::default();
    let (p1, p2, p3) = (point![0.0, 0.0], point![6.0, 0.0], point![2.0, 4.0]);
    let circ = Circle::from_three_points(p1, p2, p3, cfg).unwrap();
    for p in [p1, p2, p3] {
        assert!(circ.is_point_on(p, cfg));
    }
    let tri = Polygon::new(vec![p1, p2, p3]).unwrap();
    // acute triangle: circumcenter inside
    assert!(tri.contains_point(circ.center(), cfg));
    // every side is a chord; its bisector passes through the center
    for side in tri.sides() {
        let mid = side.midpoint().unwrap();
        let bisector = side.perpendicular_through(mid);
        assert!(bisector.distance_to(circ.center()) < 1e-9);
    }
}

#[test]
fn chord_midpoints_and_offsets_agree() {
    let cfg = GeomCfg::default();
    let c = Circle::new(2.0, point![1.0, -1.0]).unwrap();
    let start = point![3.0, -1.0];
    let quarter = c.circumference() / 4.0;
    let end = c.offset_point(start, quarter, cfg).unwrap();
    assert!(util::points_eq(end, point![1.0, 1.0], 1e-9));
    let mid = c.mid_arc_point(start, end, cfg).unwrap();
    let eighth = c.offset_point(start, quarter / 2.0, cfg).unwrap();
    assert!(util::points_eq(mid, eighth, 1e-9));
}

#[test]
fn random_circle_pairs_meet_on_both_circles() {
    let cfg = GeomCfg::default();
    let mut rng = StdRng::seed_from_u64(41);
    let mut seen_two = 0usize;
    for _ in 0..500 {
        let mut draw = || {
            let center = point![rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)];
            Circle::new(rng.gen_range(0.5..5.0), center).unwrap()
        };
        let (a, b) = (draw(), draw());
        let hits = a.intersect_circle(&b, cfg);
        if hits.count() == 2 {
            seen_two += 1;
        }
        for p in hits.to_vec() {
            assert!(a.is_point_on(p, cfg), "{p:?} not on {a:?}");
            assert!(b.is_point_on(p, cfg), "{p:?} not on {b:?}");
        }
        let crossing = a.is_intersecting(&b, cfg)
            && !a.is_touching_externally(&b, cfg)
            && !a.is_touching_internally(&b, cfg);
        assert_eq!(hits.count() == 2, crossing);
    }
    assert!(seen_two > 0);
}

#[test]
fn random_three_point_circles_pass_through_inputs() {
    let cfg = GeomCfg::default();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let pts: Vec<Point2<f64>> = (0..3)
            .map(|_| point![rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)])
            .collect();
        let Ok(c) = Circle::from_three_points(pts[0], pts[1], pts[2], cfg) else {
            continue;
        };
        if c.radius() > 1e3 {
            continue;
        }
        for &p in &pts {
            assert!(c.is_point_on(p, cfg), "{p:?} not on {c:?}");
        }
    }
}

fn coord() -> impl Strategy<Value = f64> {
    -100.0..100.0f64
}

proptest! {
    #[test]
    fn line_passes_through_its_defining_points(x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord()) {
        let (p, q) = (point![x1, y1], point![x2, y2]);
        prop_assume!((q - p).norm() > 1e-3);
        let l = Line::from_points(p, q).unwrap();
        prop_assert!(l.distance_to(p) < 1e-6);
        prop_assert!(l.distance_to(q) < 1e-6);
    }

    #[test]
    fn circle_representations_round_trip(cx in coord(), cy in coord(), r in 0.1..100.0f64) {
        let c = Circle::new(r, point![cx, cy]).unwrap();
        let k = c.coefficients();
        let back = Circle::from_coefficients(k.d, k.e, k.f).unwrap();
        prop_assert!((back.radius() - r).abs() < 1e-6);
        prop_assert!(util::points_eq(back.center(), c.center(), 1e-12));
        prop_assert!((back.area() - std::f64::consts::PI * r * r).abs() < 1e-6 * (1.0 + r * r));
    }

    #[test]
    fn point_in_polygon_is_idempotent(
        verts in prop::collection::vec((-10.0..10.0f64, -10.0..10.0f64), 3..12),
        px in -12.0..12.0f64,
        py in -12.0..12.0f64,
    ) {
        let cfg = GeomCfg::default();
        let vertices = verts.into_iter().map(|(x, y)| point![x, y]).collect();
        if let Ok(poly) = Polygon::new(vertices) {
            let p = point![px, py];
            let first = poly.contains_point(p, cfg);
            prop_assert_eq!(poly.contains_point(p, cfg), first);
            prop_assert_eq!(is_point_in_polygon(&poly, p, cfg), first);
        }
    }

    #[test]
    fn offset_point_stays_on_circle(r in 0.5..50.0f64, theta in 0.0..TAU, arc in -100.0..100.0f64) {
        let cfg = GeomCfg::default();
        let c = Circle::new(r, point![1.0, 2.0]).unwrap();
        let p = c.center() + nalgebra::Vector2::new(theta.cos(), theta.sin()) * r;
        let q = c.offset_point(p, arc, cfg).unwrap();
        prop_assert!(((q - c.center()).norm() - r).abs() < 1e-6);
    }

    #[test]
    fn mirror_is_an_involution(m in -10.0..10.0f64, b in coord(), x in coord(), y in coord()) {
        let l = Line::from_slope_intercept(m, b).unwrap();
        let p = point![x, y];
        let once = mirror_point(p, &l);
        let twice = mirror_point(once, &l);
        prop_assert!((twice - p).norm() < 1e-6);
        prop_assert!((l.distance_to(once) - l.distance_to(p)).abs() < 1e-6);
    }
}

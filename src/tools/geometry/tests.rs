use super::*;
use std::collections::HashSet;

#[test]
fn test_geom_line() {
    let mut p = Vec::new();
    Geometry::bresenham_line(0, 0, 2, 2, |x, y| p.push((x, y)));
    assert_eq!(p, vec![(0, 0), (1, 1), (2, 2)]);
}

#[test]
fn test_geom_point() {
    let mut p = Vec::new();
    Geometry::bresenham_line(1, 1, 1, 1, |x, y| p.push((x, y)));
    assert_eq!(p.len(), 1);
}

#[test]
fn test_geom_line_endpoints_any_direction() {
    for &(x1, y1, x2, y2) in &[(0, 0, 7, 3), (7, 3, 0, 0), (2, 9, 5, 0), (4, 4, 0, 6)] {
        let mut p = Vec::new();
        Geometry::bresenham_line(x1, y1, x2, y2, |x, y| p.push((x, y)));
        assert_eq!(p.first(), Some(&(x1, y1)));
        assert_eq!(p.last(), Some(&(x2, y2)));
    }
}

#[test]
fn test_geom_circle_radius_zero() {
    let mut p = HashSet::new();
    Geometry::midpoint_circle(3, 3, 0.0, |x, y| {
        p.insert((x, y));
    });
    assert_eq!(p.len(), 1);
    assert!(p.contains(&(3, 3)));
}

#[test]
fn test_geom_circle_symmetry() {
    let mut p = HashSet::new();
    Geometry::midpoint_circle(0, 0, 3.0, |x, y| {
        p.insert((x, y));
    });
    assert!(p.contains(&(0, 3)));
    assert!(p.contains(&(3, 0)));
    assert!(p.contains(&(-3, 0)));
    assert!(p.contains(&(0, -3)));
    for &(x, y) in &p {
        assert!(p.contains(&(y, x)));
        assert!(p.contains(&(-x, y)));
    }
}

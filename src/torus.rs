//! Distance measurements on the wrap-around square `[-scale, scale)²`.

use nalgebra::Vector2;

pub type Position = Vector2<f64>;
pub type Velocity = Vector2<f64>;

/// Maps `value` back into `[-scale, scale)` by periodic wrapping.
pub fn wrap(value: f64, scale: f64) -> f64 {
    if value >= -scale && value < scale {
        return value;
    }
    let lower_bound = -scale;
    let range = 2.0 * scale;
    let wrapped = lower_bound + (value - lower_bound).rem_euclid(range);
    // rem_euclid can round up to `range` for inputs just below a boundary
    if wrapped >= scale {
        lower_bound
    } else {
        wrapped
    }
}

pub fn wrap_position(position: &Position, scale: f64) -> Position {
    Position::new(wrap(position.x, scale), wrap(position.y, scale))
}

/// Shortest vector from `a` to `b`, each axis picking the direct or the
/// wrapped path independently.
pub fn displacement(a: &Position, b: &Position, scale: f64) -> Vector2<f64> {
    let mut delta = b - a;
    let period = 2.0 * scale;

    if delta.x > scale {
        delta.x -= period;
    }
    if delta.x < -scale {
        delta.x += period;
    }
    if delta.y > scale {
        delta.y -= period;
    }
    if delta.y < -scale {
        delta.y += period;
    }

    delta
}

pub fn distance(a: &Position, b: &Position, scale: f64) -> f64 {
    displacement(a, b, scale).norm()
}

/// Unit vector from `a` towards `b`, or zero when the two coincide.
pub fn direction(a: &Position, b: &Position, scale: f64) -> Vector2<f64> {
    unit_or_zero(displacement(a, b, scale))
}

/// Distance and unit direction from a precomputed displacement.
pub fn separation(delta: Vector2<f64>) -> (f64, Vector2<f64>) {
    let dist = delta.norm();
    (dist, unit_or_zero(delta))
}

fn unit_or_zero(delta: Vector2<f64>) -> Vector2<f64> {
    delta.try_normalize(0.0).unwrap_or_else(Vector2::zeros)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_leaves_interior_values_alone() {
        assert_eq!(wrap(0.25, 1.0), 0.25);
        assert_eq!(wrap(-1.0, 1.0), -1.0);
    }

    #[test]
    fn wrap_folds_exterior_values() {
        assert!((wrap(1.25, 1.0) - (-0.75)).abs() < 1e-12);
        assert!((wrap(-1.25, 1.0) - 0.75).abs() < 1e-12);
        assert_eq!(wrap(1.0, 1.0), -1.0);
        assert!((wrap(5.5, 2.0) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn wrap_handles_values_just_below_lower_bound() {
        let w = wrap(-1.0 - 1e-17, 1.0);
        assert!((-1.0..1.0).contains(&w));
    }

    #[test]
    fn displacement_takes_wrapped_path_across_edge() {
        let a = Position::new(0.9, -0.9);
        let b = Position::new(-0.9, 0.9);
        let d = displacement(&a, &b, 1.0);
        assert!((d.x - 0.2).abs() < 1e-12);
        assert!((d.y - (-0.2)).abs() < 1e-12);
    }

    #[test]
    fn displacement_keeps_direct_path_when_shorter() {
        let a = Position::new(-0.2, 0.1);
        let b = Position::new(0.3, -0.4);
        let d = displacement(&a, &b, 1.0);
        assert!((d.x - 0.5).abs() < 1e-12);
        assert!((d.y - (-0.5)).abs() < 1e-12);
    }

    #[test]
    fn distance_uses_wrapped_displacement() {
        let a = Position::new(-0.95, 0.0);
        let b = Position::new(0.95, 0.0);
        assert!((distance(&a, &b, 1.0) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn direction_of_coincident_points_is_zero() {
        let a = Position::new(0.3, 0.3);
        assert_eq!(direction(&a, &a, 1.0), Vector2::zeros());
    }

    #[test]
    fn direction_is_unit_length() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(0.3, 0.4);
        let dir = direction(&a, &b, 1.0);
        assert!((dir.norm() - 1.0).abs() < 1e-12);
        assert!((dir.x - 0.6).abs() < 1e-12);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_scale() -> impl Strategy<Value = f64> {
            0.001_f64..100.0
        }

        fn any_value() -> impl Strategy<Value = f64> {
            -1e4_f64..1e4
        }

        proptest! {
            #[test]
            fn wrap_is_idempotent_and_in_range(v in any_value(), s in any_scale()) {
                let once = wrap(v, s);
                prop_assert!(once >= -s && once < s, "wrap({v}, {s}) = {once}");
                prop_assert_eq!(wrap(once, s), once);
            }

            #[test]
            fn displacement_is_antisymmetric(
                ax in -1.0_f64..1.0,
                ay in -1.0_f64..1.0,
                bx in -1.0_f64..1.0,
                by in -1.0_f64..1.0,
                s in any_scale(),
            ) {
                let a = Position::new(ax * s, ay * s);
                let b = Position::new(bx * s, by * s);
                prop_assert_eq!(displacement(&a, &b, s), -displacement(&b, &a, s));
            }

            #[test]
            fn displacement_components_are_within_scale(
                ax in -1.0_f64..1.0,
                ay in -1.0_f64..1.0,
                bx in -1.0_f64..1.0,
                by in -1.0_f64..1.0,
            ) {
                let d = displacement(&Position::new(ax, ay), &Position::new(bx, by), 1.0);
                prop_assert!(d.x.abs() <= 1.0 + 1e-12);
                prop_assert!(d.y.abs() <= 1.0 + 1e-12);
            }
        }
    }
}

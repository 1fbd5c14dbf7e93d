use nalgebra::Vector2;

use crate::interaction::InteractionTable;

/// Strength of the personal-space repulsion relative to the pair's force
pub const SEPARATION_FACTOR: f64 = 3.0;

/// Linearly remaps `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
pub fn map_linear(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Force that a particle of `other_type` exerts on one of `self_type`.
///
/// Two bands are evaluated independently and summed:
/// - below the pair's minimum distance, a repulsion of `3 * |force|` that
///   fades linearly to nothing at the minimum distance;
/// - below the pair's radius, the signed table force fading linearly to
///   nothing at the radius.
///
/// `direction` points from the acted-on particle to the acting one. A zero
/// direction yields a zero force.
pub fn pairwise_force(
    self_type: usize,
    other_type: usize,
    distance: f64,
    direction: &Vector2<f64>,
    table: &InteractionTable,
    gain: f64,
) -> Vector2<f64> {
    let force = table.force(self_type, other_type);
    let min_distance = table.min_distance(self_type, other_type);
    let radius = table.radius(self_type, other_type);

    let mut magnitude = 0.0;

    if distance < min_distance {
        magnitude += force.abs() * -SEPARATION_FACTOR * map_linear(distance, 0.0, min_distance, 1.0, 0.0);
    }

    if distance < radius {
        magnitude += force * map_linear(distance, 0.0, radius, 1.0, 0.0);
    }

    direction * (magnitude * gain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::Rule;

    fn table(force: f64) -> InteractionTable {
        InteractionTable::uniform(
            1,
            Rule {
                force,
                min_distance: 0.05,
                radius: 0.5,
            },
        )
    }

    #[test]
    fn map_linear_hits_band_edges_exactly() {
        assert_eq!(map_linear(0.05, 0.0, 0.05, 1.0, 0.0), 0.0);
        assert_eq!(map_linear(0.0, 0.0, 0.05, 1.0, 0.0), 1.0);
        assert_eq!(map_linear(0.25, 0.0, 0.5, 1.0, 0.0), 0.5);
    }

    #[test]
    fn positive_force_attracts_inside_radius() {
        let dir = Vector2::new(1.0, 0.0);
        let f = pairwise_force(0, 0, 0.1, &dir, &table(0.01), 0.05);
        let expected = 0.01 * (1.0 - 0.1 / 0.5) * 0.05;
        assert!((f.x - expected).abs() < 1e-15);
        assert_eq!(f.y, 0.0);
    }

    #[test]
    fn negative_force_repels_inside_radius() {
        let dir = Vector2::new(0.0, 1.0);
        let f = pairwise_force(0, 0, 0.2, &dir, &table(-0.01), 1.0);
        assert!(f.y < 0.0);
    }

    #[test]
    fn separation_dominates_inside_min_distance() {
        let dir = Vector2::new(1.0, 0.0);
        let f = pairwise_force(0, 0, 0.01, &dir, &table(0.01), 0.05);
        let separation = 0.01 * -3.0 * (1.0 - 0.01 / 0.05);
        let interaction = 0.01 * (1.0 - 0.01 / 0.5);
        let expected = (separation + interaction) * 0.05;
        assert!(f.x < 0.0);
        assert!((f.x - expected).abs() < 1e-15);
    }

    #[test]
    fn separation_repels_regardless_of_sign() {
        let dir = Vector2::new(1.0, 0.0);
        let attract = pairwise_force(0, 0, 0.001, &dir, &table(0.01), 1.0);
        let repel = pairwise_force(0, 0, 0.001, &dir, &table(-0.01), 1.0);
        assert!(attract.x < 0.0);
        assert!(repel.x < attract.x);
    }

    #[test]
    fn no_force_beyond_radius() {
        let dir = Vector2::new(1.0, 0.0);
        let f = pairwise_force(0, 0, 0.5, &dir, &table(0.01), 1.0);
        assert_eq!(f, Vector2::zeros());
    }

    #[test]
    fn zero_direction_gives_zero_force() {
        let f = pairwise_force(0, 0, 0.0, &Vector2::zeros(), &table(0.01), 1.0);
        assert_eq!(f, Vector2::zeros());
    }

    #[test]
    fn uses_acted_on_row() {
        let mut t = InteractionTable::new(2);
        t.set_rule(0, 1, Rule { force: 0.01, min_distance: 0.05, radius: 0.5 });
        t.set_rule(1, 0, Rule { force: -0.01, min_distance: 0.05, radius: 0.5 });
        let dir = Vector2::new(1.0, 0.0);
        assert!(pairwise_force(0, 1, 0.2, &dir, &t, 1.0).x > 0.0);
        assert!(pairwise_force(1, 0, 0.2, &dir, &t, 1.0).x < 0.0);
    }
}

use rand::Rng;
use std::ops::RangeInclusive;

/// Magnitude range of a randomized force coefficient, tuned for a domain scale of 1
pub const FORCE_RANGE: RangeInclusive<f64> = 0.003..=0.01;
/// Range of a randomized personal-space distance
pub const MIN_DISTANCE_RANGE: RangeInclusive<f64> = 0.05..=0.1;
/// Range of a randomized interaction radius
pub const RADIUS_RANGE: RangeInclusive<f64> = 0.15..=0.5;

/// Square matrix stored row-major in one flat buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    size: usize,
}

impl Matrix {
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.size + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.size + j] = value;
    }

    pub fn fill(&mut self, value: f64) {
        self.data.iter_mut().for_each(|v| *v = value);
    }
}

/// The interaction rule one type applies to another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    /// Signed coefficient; positive attracts, negative repels
    pub force: f64,
    /// Personal-space distance below which the pair always repels
    pub min_distance: f64,
    /// Distance beyond which the pair does not interact
    pub radius: f64,
}

/// Per ordered type pair interaction parameters.
///
/// Entries are indexed by (type acted on, type acting), so `rule(i, j)` and
/// `rule(j, i)` are unrelated.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionTable {
    forces: Matrix,
    min_distances: Matrix,
    radii: Matrix,
}

impl InteractionTable {
    /// A table of `num_types` types with every entry zeroed
    pub fn new(num_types: usize) -> Self {
        assert!(num_types > 0, "interaction table needs at least one type");
        Self {
            forces: Matrix::new(num_types),
            min_distances: Matrix::new(num_types),
            radii: Matrix::new(num_types),
        }
    }

    /// A freshly randomized table
    pub fn random<R: Rng + ?Sized>(num_types: usize, rng: &mut R) -> Self {
        let mut table = Self::new(num_types);
        table.randomize(rng);
        table
    }

    /// A table applying the same rule to every type pair
    pub fn uniform(num_types: usize, rule: Rule) -> Self {
        let mut table = Self::new(num_types);
        table.forces.fill(rule.force);
        table.min_distances.fill(rule.min_distance);
        table.radii.fill(rule.radius);
        table
    }

    pub fn num_types(&self) -> usize {
        self.forces.size()
    }

    /// Overwrites every entry with independent draws.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let n = self.num_types();
        for i in 0..n {
            for j in 0..n {
                let mut force = rng.gen_range(FORCE_RANGE);
                if rng.gen_bool(0.5) {
                    force = -force;
                }
                self.forces.set(i, j, force);
                self.min_distances.set(i, j, rng.gen_range(MIN_DISTANCE_RANGE));
                self.radii.set(i, j, rng.gen_range(RADIUS_RANGE));
            }
        }
    }

    #[inline]
    pub fn force(&self, i: usize, j: usize) -> f64 {
        self.forces.get(i, j)
    }

    #[inline]
    pub fn min_distance(&self, i: usize, j: usize) -> f64 {
        self.min_distances.get(i, j)
    }

    #[inline]
    pub fn radius(&self, i: usize, j: usize) -> f64 {
        self.radii.get(i, j)
    }

    pub fn rule(&self, i: usize, j: usize) -> Rule {
        Rule {
            force: self.force(i, j),
            min_distance: self.min_distance(i, j),
            radius: self.radius(i, j),
        }
    }

    pub fn set_rule(&mut self, i: usize, j: usize, rule: Rule) {
        self.forces.set(i, j, rule.force);
        self.min_distances.set(i, j, rule.min_distance);
        self.radii.set(i, j, rule.radius);
    }
}

use crate::quadrature::quad_error::{QuadError, QuadResult};
use nalgebra::SVector;
use std::ops::{Add, Mul};

/// A point of a D-dimensional reference domain
pub type Point<const D: usize> = SVector<f64, D>;

/// Quadrature rule on a D-dimensional reference domain: weights[i] belongs to points[i].
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureRule<const D: usize> {
    weights: Vec<f64>,
    points: Vec<Point<D>>,
}

impl<const D: usize> QuadratureRule<D> {
    /// pairs weights with points, both sequences must have the same length
    pub fn from_parts(weights: Vec<f64>, points: Vec<Point<D>>) -> QuadResult<Self> {
        if weights.len() != points.len() {
            return Err(QuadError::DataIntegrityError(format!(
                "{} weights but {} points",
                weights.len(),
                points.len()
            )));
        }
        Ok(Self { weights, points })
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn points(&self) -> &[Point<D>] {
        &self.points
    }

    /// points as plain coordinate vectors, each of length D
    pub fn points_as_vecs(&self) -> Vec<Vec<f64>> {
        self.points
            .iter()
            .map(|p| p.iter().copied().collect())
            .collect()
    }

    /// number of quadrature points
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn dimension(&self) -> usize {
        D
    }

    /// iterator over (weight, point) pairs in rule order
    pub fn iter(&self) -> impl Iterator<Item = (f64, &Point<D>)> {
        self.weights.iter().copied().zip(self.points.iter())
    }

    /// sum of the weights, equals the measure of the reference domain
    pub fn weight_sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}

/// weights of the rule
pub fn weights<const D: usize>(rule: &QuadratureRule<D>) -> &[f64] {
    rule.weights()
}

/// points of the rule as coordinate vectors
pub fn points<const D: usize>(rule: &QuadratureRule<D>) -> Vec<Vec<f64>> {
    rule.points_as_vecs()
}

/// Approximates the integral of f over the reference domain of the rule as
/// sum_i weights[i] * f(points[i]).
///
/// The value type is anything that can be scaled by f64 and added: f64, nalgebra vectors
/// and matrices. The first point seeds the sum, so a rule without points is rejected.
/// # Example
/// ```
/// use RustedQuadrature::quadrature::{ReferenceShape, get_rule, integrate};
/// let rule = get_rule::<1>(ReferenceShape::Line, 2).unwrap();
/// let value = integrate(&rule, |x| x[0] * x[0]).unwrap();
/// assert!((value - 2.0 / 3.0).abs() < 1e-12);
/// ```
pub fn integrate<const D: usize, T, F>(rule: &QuadratureRule<D>, f: F) -> QuadResult<T>
where
    F: Fn(&Point<D>) -> T,
    T: Mul<f64, Output = T> + Add<Output = T>,
{
    let mut pairs = rule.iter();
    let (w0, p0) = pairs.next().ok_or_else(|| {
        QuadError::PreconditionError("cannot integrate with a rule that has no points".to_string())
    })?;
    let seed = f(p0) * w0;
    Ok(pairs.fold(seed, |acc, (w, p)| acc + f(p) * w))
}

/// Integrates f over [a, b] by mapping a rule on [-1, 1] affinely onto the interval
pub fn integrate_interval<T, F>(rule: &QuadratureRule<1>, a: f64, b: f64, f: F) -> QuadResult<T>
where
    F: Fn(f64) -> T,
    T: Mul<f64, Output = T> + Add<Output = T>,
{
    let half = 0.5 * (b - a);
    let mid = 0.5 * (a + b);
    let sum = integrate(rule, |p| f(mid + half * p[0]))?;
    Ok(sum * half)
}

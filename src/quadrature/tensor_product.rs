//! Gauss-Legendre rules on [-1, 1]^D built as the D-fold outer product of one 1-D rule.
//!
//! Points are enumerated lexicographically in the axis indices with the last axis varying
//! fastest: for the cube the point (i, j, k) is `[p[i], p[j], p[k]]` with weight
//! `w[i] * w[j] * w[k]` and k is the innermost loop. A rule of order n has n^D points and is
//! exact for polynomials of degree <= 2n-1 in every variable.
use crate::quadrature::gauss_legendre::{GaussLegendreGenerator, NodeGenerator};
use crate::quadrature::quad_error::{QuadError, QuadResult};
use crate::quadrature::quadrature_rule::{Point, QuadratureRule};
use crate::quadrature::reference_shape::ReferenceShape;
use itertools::Itertools;
use log::debug;

/// hypercube shape of dimension D, if there is one
pub fn tensor_shape(dimension: usize) -> Option<ReferenceShape> {
    match dimension {
        1 => Some(ReferenceShape::Line),
        2 => Some(ReferenceShape::Square),
        3 => Some(ReferenceShape::Cube),
        _ => None,
    }
}

/// tensor-product Gauss-Legendre rule of the given order on [-1, 1]^D
pub fn tensor_product_rule<const D: usize>(order: usize) -> QuadResult<QuadratureRule<D>> {
    tensor_product_rule_with(&GaussLegendreGenerator, order)
}

/// tensor-product rule with nodes and weights taken from `generator`
pub fn tensor_product_rule_with<const D: usize, G>(
    generator: &G,
    order: usize,
) -> QuadResult<QuadratureRule<D>>
where
    G: NodeGenerator + ?Sized,
{
    let shape = tensor_shape(D).ok_or_else(|| {
        QuadError::DataIntegrityError(format!(
            "tensor-product rules exist for dimensions 1 to 3, not {}",
            D
        ))
    })?;
    let (nodes, weights) = generator.generate(order)?;
    if nodes.len() != order || weights.len() != order {
        return Err(QuadError::DataIntegrityError(format!(
            "generator returned {} nodes and {} weights for order {}",
            nodes.len(),
            weights.len(),
            order
        )));
    }

    let n_points = order.pow(D as u32);
    let mut rule_weights = Vec::with_capacity(n_points);
    let mut rule_points = Vec::with_capacity(n_points);
    for index in (0..D).map(|_| 0..order).multi_cartesian_product() {
        rule_weights.push(index.iter().map(|&i| weights[i]).product::<f64>());
        rule_points.push(Point::<D>::from_fn(|axis, _| nodes[index[axis]]));
    }
    debug!(
        "{} rule of order {} built with {} points",
        shape,
        order,
        rule_points.len()
    );
    QuadratureRule::from_parts(rule_weights, rule_points)
}

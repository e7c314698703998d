use crate::quadrature::quad_error::{QuadError, QuadResult};
use gauss_quad::GaussLegendre;
use log::debug;

/// Source of 1-D nodes and weights on [-1, 1]. A generator of order n returns n nodes and
/// n weights exact for polynomials up to degree 2n-1.
pub trait NodeGenerator {
    fn generate(&self, order: usize) -> QuadResult<(Vec<f64>, Vec<f64>)>;
}

/// Gauss-Legendre nodes and weights computed by the `gauss-quad` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussLegendreGenerator;

impl NodeGenerator for GaussLegendreGenerator {
    fn generate(&self, order: usize) -> QuadResult<(Vec<f64>, Vec<f64>)> {
        match order {
            0 => Err(QuadError::InvalidOrder(order)),
            // gauss-quad starts at two nodes
            1 => Ok((vec![0.0], vec![2.0])),
            _ => {
                let quad = GaussLegendre::new(order).map_err(|e| {
                    QuadError::GeneratorFailure(format!(
                        "Failed to create Gauss-Legendre quadrature of order {}: {:?}",
                        order, e
                    ))
                })?;
                let mut pairs = quad.into_node_weight_pairs();
                pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
                debug!("Gauss-Legendre nodes of order {} generated", order);
                Ok(pairs.into_iter().unzip())
            }
        }
    }
}

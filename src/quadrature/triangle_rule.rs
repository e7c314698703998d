use crate::quadrature::quad_error::{QuadError, QuadResult};
use crate::quadrature::quadrature_rule::{Point, QuadratureRule};
use crate::quadrature::reference_shape::ReferenceShape;
use crate::quadrature::triangle_table::{BundledTriangleTable, CoefficientTable};
use log::debug;

/// area of the reference triangle; table weights are normalized to unit area
pub const TRIANGLE_AREA: f64 = 0.5;

/// rule on the reference triangle from the compiled-in table
pub fn triangle_rule(order: usize) -> QuadResult<QuadratureRule<2>> {
    triangle_rule_from(&BundledTriangleTable, order)
}

/// rule on the reference triangle: one point `[x, y]` per table row, weight scaled by the
/// triangle area
pub fn triangle_rule_from<T>(table: &T, order: usize) -> QuadResult<QuadratureRule<2>>
where
    T: CoefficientTable + ?Sized,
{
    if order == 0 {
        return Err(QuadError::InvalidOrder(order));
    }
    let rows = table.lookup(order).ok_or_else(|| {
        QuadError::lookup(
            ReferenceShape::Triangle,
            order,
            format!("the table covers orders 1 to {}", table.max_order()),
        )
    })?;

    let mut weights = Vec::with_capacity(rows.len());
    let mut points = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        match row {
            [x, y, w] => {
                points.push(Point::<2>::new(*x, *y));
                weights.push(TRIANGLE_AREA * w);
            }
            _ => {
                return Err(QuadError::DataIntegrityError(format!(
                    "row {} of triangle order {} has {} entries, expected 3",
                    i,
                    order,
                    row.len()
                )));
            }
        }
    }
    debug!(
        "Triangle rule of order {} built with {} points",
        order,
        points.len()
    );
    QuadratureRule::from_parts(weights, points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quadrature::quadrature_rule::integrate;
    use crate::quadrature::triangle_table::OwnedTriangleTable;
    use approx::assert_relative_eq;

    /// exact integral of x^p y^q over the reference triangle: p! q! / (p + q + 2)!
    fn monomial_integral(p: u32, q: u32) -> f64 {
        let fact = |n: u32| (1..=n).map(f64::from).product::<f64>();
        fact(p) * fact(q) / fact(p + q + 2)
    }

    #[test]
    fn test_order_one_is_centroid() {
        let rule = triangle_rule(1).unwrap();
        assert_eq!(rule.len(), 1);
        assert_relative_eq!(rule.weights()[0], 0.5);
        assert_relative_eq!(rule.points()[0][0], 1.0 / 3.0, epsilon = 1e-15);
        assert_relative_eq!(rule.points()[0][1], 1.0 / 3.0, epsilon = 1e-15);
    }

    #[test]
    fn test_weights_scaled_by_area() {
        for order in 1..=5 {
            let rule = triangle_rule(order).unwrap();
            assert_relative_eq!(rule.weight_sum(), TRIANGLE_AREA, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_polynomial_exactness() {
        for order in 1..=5u32 {
            let rule = triangle_rule(order as usize).unwrap();
            for p in 0..=order {
                for q in 0..=(order - p) {
                    let value =
                        integrate(&rule, |x| x[0].powi(p as i32) * x[1].powi(q as i32)).unwrap();
                    assert_relative_eq!(value, monomial_integral(p, q), epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_untabulated_order() {
        let result = triangle_rule(6);
        match result {
            Err(QuadError::LookupError { shape, order, .. }) => {
                assert_eq!(shape, ReferenceShape::Triangle);
                assert_eq!(order, 6);
            }
            other => panic!("expected LookupError, got {:?}", other),
        }
        assert_eq!(triangle_rule(0), Err(QuadError::InvalidOrder(0)));
    }

    #[test]
    fn test_malformed_row() {
        let table = OwnedTriangleTable {
            rows: vec![vec![vec![0.2, 0.2, 0.5], vec![0.6, 0.2]]],
        };
        let result = triangle_rule_from(&table, 1);
        assert!(matches!(result, Err(QuadError::DataIntegrityError(_))));
    }

    #[test]
    fn test_custom_table() {
        let table = OwnedTriangleTable {
            rows: vec![vec![vec![0.25, 0.5, 1.0]]],
        };
        let rule = triangle_rule_from(&table, 1).unwrap();
        assert_eq!(rule.points_as_vecs(), vec![vec![0.25, 0.5]]);
        assert_eq!(rule.weights(), &[0.5]);
    }
}

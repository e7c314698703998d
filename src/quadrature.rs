/// Numerical quadrature on reference domains: a rule is a list of (weight, point) pairs and
/// the integral of f is approximated by sum_i w_i f(p_i).
///
///# Example
/// ```
/// use RustedQuadrature::quadrature::{ReferenceShape, get_rule, integrate};
/// // 2-point Gauss-Legendre rule on [-1, 1]
/// let rule = get_rule::<1>(ReferenceShape::Line, 2).unwrap();
/// println!("weights {:?}, points {:?}", rule.weights(), rule.points_as_vecs());
/// let integral = integrate(&rule, |x| x[0].powi(2)).unwrap();
/// assert!((integral - 2.0 / 3.0).abs() < 1e-12);
/// // 7-point rule on the triangle (0,0), (1,0), (0,1)
/// let triangle = get_rule::<2>(ReferenceShape::Triangle, 5).unwrap();
/// let area = integrate(&triangle, |_| 1.0_f64).unwrap();
/// assert!((area - 0.5).abs() < 1e-10);
/// ```
/// ________________________________________________________________________________________________
/// error type of the whole module
pub mod quad_error;
/// Line, Square, Cube, Triangle
pub mod reference_shape;
/// the rule itself and the integrator
pub mod quadrature_rule;
/// 1-D Gauss-Legendre nodes and weights (gauss-quad crate)
pub mod gauss_legendre;
/// outer products of 1-D rules for line, square and cube
pub mod tensor_product;
/// compiled-in coefficients of triangle rules
pub mod triangle_table;
pub mod triangle_rule;
/// eagerly built low-order rules and the dispatch on (dimension, shape, order)
pub mod rule_cache;
/// TOML settings of the cache
pub mod quad_config;

pub use gauss_legendre::{GaussLegendreGenerator, NodeGenerator};
pub use quad_config::{CACHED_ORDERS, QuadConfig};
pub use quad_error::{QuadError, QuadResult};
pub use quadrature_rule::{Point, QuadratureRule, integrate, integrate_interval, points, weights};
pub use reference_shape::ReferenceShape;
pub use rule_cache::{DynRule, RuleCache, RuleSource, get_rule, get_rule_dyn};
pub use tensor_product::{tensor_product_rule, tensor_product_rule_with};
pub use triangle_rule::{TRIANGLE_AREA, triangle_rule, triangle_rule_from};
pub use triangle_table::{BundledTriangleTable, CoefficientTable, OwnedTriangleTable};

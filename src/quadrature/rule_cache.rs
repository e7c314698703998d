//! Rule cache and dispatch on (dimension, shape, order).
//!
//! Orders `1..=max_cached_order` (5 by default) are built once per shape and shared as
//! `Arc`s, higher orders are built on every request and never stored. The process-wide cache
//! is created on first use by [`RuleCache::global`] and read-only afterwards, so lookups from
//! any number of threads need no locking.
use crate::quadrature::quad_config::QuadConfig;
use crate::quadrature::quad_error::{QuadError, QuadResult};
use crate::quadrature::quadrature_rule::{QuadratureRule, integrate};
use crate::quadrature::reference_shape::ReferenceShape;
use crate::quadrature::tensor_product::tensor_product_rule;
use crate::quadrature::triangle_rule::triangle_rule;
use crate::quadrature::triangle_table::{BundledTriangleTable, CoefficientTable};
use log::{debug, info};
use std::sync::{Arc, OnceLock};

static GLOBAL_CACHE: OnceLock<RuleCache> = OnceLock::new();

type Builder<const D: usize> = fn(usize) -> QuadResult<QuadratureRule<D>>;

/// Eagerly built rules of the low orders of every reference shape
#[derive(Debug, Clone)]
pub struct RuleCache {
    max_cached_order: usize,
    line: Vec<Arc<QuadratureRule<1>>>,
    square: Vec<Arc<QuadratureRule<2>>>,
    cube: Vec<Arc<QuadratureRule<3>>>,
    triangle: Vec<Arc<QuadratureRule<2>>>,
}

impl RuleCache {
    /// cache of orders 1 to 5
    pub fn build() -> QuadResult<Self> {
        Self::with_config(&QuadConfig::default())
    }

    pub fn with_config(config: &QuadConfig) -> QuadResult<Self> {
        let depth = config.max_cached_order;
        if depth == 0 {
            return Err(QuadError::ConfigError(
                "max_cached_order must be at least 1".to_string(),
            ));
        }
        // triangle rules exist only as far as the table goes
        let triangle_depth = depth.min(BundledTriangleTable.max_order());
        info!(
            "building quadrature rule cache: tensor-product orders 1..={}, triangle orders 1..={}",
            depth, triangle_depth
        );
        let cache = RuleCache {
            max_cached_order: depth,
            line: build_orders(depth, tensor_product_rule::<1>)?,
            square: build_orders(depth, tensor_product_rule::<2>)?,
            cube: build_orders(depth, tensor_product_rule::<3>)?,
            triangle: build_orders(triangle_depth, triangle_rule)?,
        };
        debug!(
            "rule cache holds {} rules",
            cache.line.len() + cache.square.len() + cache.cube.len() + cache.triangle.len()
        );
        Ok(cache)
    }

    /// process-wide cache, built on the first call
    pub fn global() -> QuadResult<&'static RuleCache> {
        if let Some(cache) = GLOBAL_CACHE.get() {
            return Ok(cache);
        }
        let cache = RuleCache::build()?;
        // a cache built concurrently by another thread wins, ours is dropped
        Ok(GLOBAL_CACHE.get_or_init(|| cache))
    }

    pub fn is_global_initialized() -> bool {
        GLOBAL_CACHE.get().is_some()
    }

    pub fn max_cached_order(&self) -> usize {
        self.max_cached_order
    }

    /// true if the rule of this shape and order is served from the cache
    pub fn is_cached(&self, shape: ReferenceShape, order: usize) -> bool {
        let cached = match shape {
            ReferenceShape::Line => self.line.len(),
            ReferenceShape::Square => self.square.len(),
            ReferenceShape::Cube => self.cube.len(),
            ReferenceShape::Triangle => self.triangle.len(),
        };
        (1..=cached).contains(&order)
    }

    /// rule of dimension D for the shape and order
    pub fn rule<const D: usize>(
        &self,
        shape: ReferenceShape,
        order: usize,
    ) -> QuadResult<Arc<QuadratureRule<D>>>
    where
        Self: RuleSource<D>,
    {
        <Self as RuleSource<D>>::fetch(self, shape, order)
    }

    /// rule selected by a dimension known only at runtime
    pub fn rule_dyn(
        &self,
        dimension: usize,
        shape: ReferenceShape,
        order: usize,
    ) -> QuadResult<DynRule> {
        match dimension {
            1 => self.rule::<1>(shape, order).map(DynRule::Line),
            2 => self.rule::<2>(shape, order).map(DynRule::Planar),
            3 => self.rule::<3>(shape, order).map(DynRule::Solid),
            _ => Err(QuadError::lookup(
                shape,
                order,
                format!("dimension must be 1, 2 or 3, got {}", dimension),
            )),
        }
    }
}

fn build_orders<const D: usize>(
    depth: usize,
    builder: Builder<D>,
) -> QuadResult<Vec<Arc<QuadratureRule<D>>>> {
    (1..=depth).map(|order| builder(order).map(Arc::new)).collect()
}

fn cached_or_build<const D: usize>(
    cached: &[Arc<QuadratureRule<D>>],
    shape: ReferenceShape,
    order: usize,
    builder: Builder<D>,
) -> QuadResult<Arc<QuadratureRule<D>>> {
    if order == 0 {
        return Err(QuadError::InvalidOrder(order));
    }
    match cached.get(order - 1) {
        Some(rule) => Ok(Arc::clone(rule)),
        None => {
            debug!("{} rule of order {} built on demand", shape, order);
            builder(order).map(Arc::new)
        }
    }
}

fn dimension_mismatch(shape: ReferenceShape, order: usize, dimension: usize) -> QuadError {
    QuadError::lookup(
        shape,
        order,
        format!(
            "{} is {}-dimensional but a {}-dimensional rule was requested",
            shape,
            shape.dimension(),
            dimension
        ),
    )
}

/// Rules of dimension D selected by shape and order
pub trait RuleSource<const D: usize> {
    fn fetch(&self, shape: ReferenceShape, order: usize) -> QuadResult<Arc<QuadratureRule<D>>>;
}

impl RuleSource<1> for RuleCache {
    fn fetch(&self, shape: ReferenceShape, order: usize) -> QuadResult<Arc<QuadratureRule<1>>> {
        match shape {
            ReferenceShape::Line => {
                cached_or_build(&self.line, shape, order, tensor_product_rule::<1>)
            }
            _ => Err(dimension_mismatch(shape, order, 1)),
        }
    }
}

impl RuleSource<2> for RuleCache {
    fn fetch(&self, shape: ReferenceShape, order: usize) -> QuadResult<Arc<QuadratureRule<2>>> {
        match shape {
            ReferenceShape::Square => {
                cached_or_build(&self.square, shape, order, tensor_product_rule::<2>)
            }
            ReferenceShape::Triangle => cached_or_build(&self.triangle, shape, order, triangle_rule),
            _ => Err(dimension_mismatch(shape, order, 2)),
        }
    }
}

impl RuleSource<3> for RuleCache {
    fn fetch(&self, shape: ReferenceShape, order: usize) -> QuadResult<Arc<QuadratureRule<3>>> {
        match shape {
            ReferenceShape::Cube => {
                cached_or_build(&self.cube, shape, order, tensor_product_rule::<3>)
            }
            _ => Err(dimension_mismatch(shape, order, 3)),
        }
    }
}

/// Rule of the process-wide cache.
/// # Example
/// ```
/// use RustedQuadrature::quadrature::{ReferenceShape, get_rule};
/// let rule = get_rule::<2>(ReferenceShape::Square, 3).unwrap();
/// assert_eq!(rule.len(), 9);
/// ```
pub fn get_rule<const D: usize>(
    shape: ReferenceShape,
    order: usize,
) -> QuadResult<Arc<QuadratureRule<D>>>
where
    RuleCache: RuleSource<D>,
{
    <RuleCache as RuleSource<D>>::fetch(RuleCache::global()?, shape, order)
}

/// Rule of the process-wide cache for a runtime dimension
pub fn get_rule_dyn(dimension: usize, shape: ReferenceShape, order: usize) -> QuadResult<DynRule> {
    RuleCache::global()?.rule_dyn(dimension, shape, order)
}

/// A rule whose dimension is decided at runtime
#[derive(Debug, Clone, PartialEq)]
pub enum DynRule {
    Line(Arc<QuadratureRule<1>>),
    Planar(Arc<QuadratureRule<2>>),
    Solid(Arc<QuadratureRule<3>>),
}

impl DynRule {
    pub fn dimension(&self) -> usize {
        match self {
            DynRule::Line(_) => 1,
            DynRule::Planar(_) => 2,
            DynRule::Solid(_) => 3,
        }
    }

    pub fn len(&self) -> usize {
        self.weights().len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights().is_empty()
    }

    pub fn weights(&self) -> &[f64] {
        match self {
            DynRule::Line(rule) => rule.weights(),
            DynRule::Planar(rule) => rule.weights(),
            DynRule::Solid(rule) => rule.weights(),
        }
    }

    pub fn points_as_vecs(&self) -> Vec<Vec<f64>> {
        match self {
            DynRule::Line(rule) => rule.points_as_vecs(),
            DynRule::Planar(rule) => rule.points_as_vecs(),
            DynRule::Solid(rule) => rule.points_as_vecs(),
        }
    }

    /// integrates a function of the point coordinates given as a slice of length dimension()
    pub fn integrate<F>(&self, f: F) -> QuadResult<f64>
    where
        F: Fn(&[f64]) -> f64,
    {
        match self {
            DynRule::Line(rule) => integrate(rule.as_ref(), |p| f(p.as_slice())),
            DynRule::Planar(rule) => integrate(rule.as_ref(), |p| f(p.as_slice())),
            DynRule::Solid(rule) => integrate(rule.as_ref(), |p| f(p.as_slice())),
        }
    }
}

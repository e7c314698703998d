#![allow(non_snake_case)]
use RustedQuadrature::Utils::logger::{init_logging, save_rule_to_csv};
use RustedQuadrature::quadrature::{
    QuadConfig, QuadError, ReferenceShape, RuleCache, get_rule, get_rule_dyn, integrate,
    integrate_interval,
};
use nalgebra::DVector;

fn main() -> Result<(), QuadError> {
    let config = QuadConfig::from_file("quadrature.toml").unwrap_or_default();
    init_logging(config.log_level, None);
    let example = 0;
    match example {
        0 => {
            // RULES OF THE LINE
            // 2-point Gauss-Legendre rule: nodes -1/sqrt(3), 1/sqrt(3), weights 1, 1
            let rule = get_rule::<1>(ReferenceShape::Line, 2)?;
            println!("weights {:?}", rule.weights());
            println!("points {:?}", rule.points_as_vecs());
            // x^2 over [-1, 1] = 2/3
            let value = integrate(&rule, |x| x[0].powi(2))?;
            println!("int x^2 dx over [-1, 1] = {}", value);
            // the same rule mapped onto [0, pi]
            let rule = get_rule::<1>(ReferenceShape::Line, 6)?;
            let value = integrate_interval(&rule, 0.0, std::f64::consts::PI, f64::sin)?;
            println!("int sin(x) dx over [0, pi] = {}", value);
        }
        1 => {
            // TRIANGLE AND VECTOR VALUED INTEGRANDS
            let rule = get_rule::<2>(ReferenceShape::Triangle, 2)?;
            // integrals of the linear basis functions 1 - x - y, x, y: 1/6 each
            let value = integrate(&rule, |p| {
                DVector::from_vec(vec![1.0 - p[0] - p[1], p[0], p[1]])
            })?;
            println!("int of the linear basis over the triangle = {}", value);
            save_rule_to_csv(&rule, "triangle_2.csv").map_err(|e| {
                QuadError::DataIntegrityError(format!("cannot save rule: {}", e))
            })?;
        }
        2 => {
            // DIMENSION KNOWN ONLY AT RUNTIME
            for dimension in 1..=3 {
                let shape = match dimension {
                    1 => ReferenceShape::Line,
                    2 => ReferenceShape::Square,
                    _ => ReferenceShape::Cube,
                };
                let rule = get_rule_dyn(dimension, shape, 3)?;
                let volume = rule.integrate(|_| 1.0)?;
                println!("{}: {} points, measure {}", shape, rule.len(), volume);
            }
        }
        3 => {
            // A DEEPER CACHE
            let config = QuadConfig {
                max_cached_order: 10,
                ..config
            };
            let cache = RuleCache::with_config(&config)?;
            let rule = cache.rule::<3>(ReferenceShape::Cube, 8)?;
            println!("cube rule of order 8 has {} points", rule.len());
        }
        _ => {
            println!("example {} not found", example);
        }
    }
    Ok(())
}

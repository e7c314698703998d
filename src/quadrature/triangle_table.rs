//! Coefficients of symmetric Gauss rules on the reference triangle (0,0), (1,0), (0,1).
//!
//! Every row is `[x, y, weight]` with the weights of one order summing to 1, i.e. they are
//! normalized for a domain of unit area. The rule of order n integrates polynomials of total
//! degree n exactly (Dunavant, 1985).

/// Source of tabulated triangle rules
pub trait CoefficientTable {
    /// rows `[x, y, weight]` of the rule of the given order, None if not tabulated
    fn lookup(&self, order: usize) -> Option<Vec<&[f64]>>;
    /// highest tabulated order
    fn max_order(&self) -> usize;
}

const ORDER_1: &[&[f64]] = &[&[0.3333333333333333, 0.3333333333333333, 1.0]];

const ORDER_2: &[&[f64]] = &[
    &[0.16666666666666666, 0.16666666666666666, 0.3333333333333333],
    &[0.6666666666666666, 0.16666666666666666, 0.3333333333333333],
    &[0.16666666666666666, 0.6666666666666666, 0.3333333333333333],
];

const ORDER_3: &[&[f64]] = &[
    &[0.3333333333333333, 0.3333333333333333, -0.5625],
    &[0.6, 0.2, 0.5208333333333334],
    &[0.2, 0.6, 0.5208333333333334],
    &[0.2, 0.2, 0.5208333333333334],
];

const ORDER_4: &[&[f64]] = &[
    &[0.44594849091596489, 0.44594849091596489, 0.22338158967801147],
    &[0.44594849091596489, 0.10810301816807023, 0.22338158967801147],
    &[0.10810301816807023, 0.44594849091596489, 0.22338158967801147],
    &[0.09157621350977074, 0.09157621350977074, 0.10995174365532187],
    &[0.09157621350977074, 0.81684757298045851, 0.10995174365532187],
    &[0.81684757298045851, 0.09157621350977074, 0.10995174365532187],
];

const ORDER_5: &[&[f64]] = &[
    &[0.3333333333333333, 0.3333333333333333, 0.225],
    &[0.47014206410511506, 0.47014206410511506, 0.13239415278850619],
    &[0.47014206410511506, 0.05971587178976981, 0.13239415278850619],
    &[0.05971587178976981, 0.47014206410511506, 0.13239415278850619],
    &[0.10128650732345633, 0.10128650732345633, 0.12593918054482715],
    &[0.10128650732345633, 0.7974269853530873, 0.12593918054482715],
    &[0.7974269853530873, 0.10128650732345633, 0.12593918054482715],
];

const BUNDLED: [&[&[f64]]; 5] = [ORDER_1, ORDER_2, ORDER_3, ORDER_4, ORDER_5];

/// The compiled-in table, orders 1 to 5
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledTriangleTable;

impl CoefficientTable for BundledTriangleTable {
    fn lookup(&self, order: usize) -> Option<Vec<&[f64]>> {
        let rows = BUNDLED.get(order.checked_sub(1)?)?;
        Some(rows.to_vec())
    }

    fn max_order(&self) -> usize {
        BUNDLED.len()
    }
}

/// Table held in memory, e.g. read from a file of higher order rules.
/// `rows[n - 1]` holds the rows of order n.
#[derive(Debug, Clone, Default)]
pub struct OwnedTriangleTable {
    pub rows: Vec<Vec<Vec<f64>>>,
}

impl CoefficientTable for OwnedTriangleTable {
    fn lookup(&self, order: usize) -> Option<Vec<&[f64]>> {
        let rows = self.rows.get(order.checked_sub(1)?)?;
        Some(rows.iter().map(Vec::as_slice).collect())
    }

    fn max_order(&self) -> usize {
        self.rows.len()
    }
}

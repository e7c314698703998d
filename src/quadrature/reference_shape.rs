use strum_macros::{Display, EnumIter};

/// Reference domains the rules are defined on:
/// Line = [-1, 1], Square = [-1, 1]^2, Cube = [-1, 1]^3,
/// Triangle = {(0,0), (1,0), (0,1)}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ReferenceShape {
    Line,
    Square,
    Cube,
    Triangle,
}

impl ReferenceShape {
    /// spatial dimension of the domain
    pub fn dimension(&self) -> usize {
        match self {
            ReferenceShape::Line => 1,
            ReferenceShape::Square => 2,
            ReferenceShape::Cube => 3,
            ReferenceShape::Triangle => 2,
        }
    }

    /// length/area/volume of the reference domain, i.e. the exact sum of the weights
    pub fn measure(&self) -> f64 {
        match self {
            ReferenceShape::Line => 2.0,
            ReferenceShape::Square => 4.0,
            ReferenceShape::Cube => 8.0,
            ReferenceShape::Triangle => 0.5,
        }
    }

    /// true for shapes built as a tensor product of 1-D Gauss-Legendre rules
    pub fn is_tensor_product(&self) -> bool {
        !matches!(self, ReferenceShape::Triangle)
    }

    /// smallest order whose rule integrates polynomials of total degree `degree` exactly.
    /// Gauss-Legendre with n nodes is exact up to degree 2n-1, the bundled triangle
    /// rule of order n is exact up to degree n.
    pub fn order_for_degree(&self, degree: usize) -> usize {
        if self.is_tensor_product() {
            ((degree + 2) / 2).max(1)
        } else {
            degree.max(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_dimensions() {
        let dims: Vec<usize> = ReferenceShape::iter().map(|s| s.dimension()).collect();
        assert_eq!(dims, vec![1, 2, 3, 2]);
    }

    #[test]
    fn test_display() {
        assert_eq!(ReferenceShape::Cube.to_string(), "Cube");
        assert_eq!(ReferenceShape::Triangle.to_string(), "Triangle");
    }

    #[test]
    fn test_order_for_degree() {
        // 2n-1 >= degree
        assert_eq!(ReferenceShape::Line.order_for_degree(0), 1);
        assert_eq!(ReferenceShape::Line.order_for_degree(1), 1);
        assert_eq!(ReferenceShape::Line.order_for_degree(2), 2);
        assert_eq!(ReferenceShape::Square.order_for_degree(3), 2);
        assert_eq!(ReferenceShape::Cube.order_for_degree(4), 3);
        assert_eq!(ReferenceShape::Triangle.order_for_degree(0), 1);
        assert_eq!(ReferenceShape::Triangle.order_for_degree(4), 4);
    }
}

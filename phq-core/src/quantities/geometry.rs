use crate::units::{AreaUnit, LengthUnit, VolumeUnit};
use crate::VectorKind;

quantity! {
    /// Distance between two points, or the extent of a body along one direction.
    Length(LengthKind): DimensionalScalar<LengthUnit>
}

quantity! {
    /// Extent of a surface.
    Area(AreaKind): DimensionalScalar<AreaUnit>
}

quantity! {
    /// Extent of a region of space.
    Volume(VolumeKind): DimensionalScalar<VolumeUnit>
}

quantity! {
    /// Vector from one position to another.
    Displacement(DisplacementKind): DimensionalVector<LengthUnit>
}

quantity! {
    /// Gradient of a displacement field: `∂u_i/∂x_j`.
    DisplacementGradient(DisplacementGradientKind): DimensionlessDyadic
}

impl VectorKind for DisplacementKind {
    type Magnitude = LengthKind;
}

impl_square!(Length * Length = Area);
impl_product!(Area * Length = Volume);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Vector;
    use approx::assert_relative_eq;

    #[test]
    fn products_and_quotients() {
        let side: Length = Length::new(20.0, LengthUnit::Centimetre);
        let face: Area = side * side;
        assert_relative_eq!(face.value(), 0.04, max_relative = 1e-15);
        assert_relative_eq!((face / side).value(), 0.2, max_relative = 1e-15);

        let cube: Volume = face * side;
        assert_relative_eq!(cube.value_in(VolumeUnit::Litre), 8.0, max_relative = 1e-12);
        assert_eq!(side * face, cube);
        assert_relative_eq!((cube / face).value(), side.value(), max_relative = 1e-15);
        assert_relative_eq!((cube / side).value(), face.value(), max_relative = 1e-15);
    }

    #[test]
    fn displacement_magnitude_is_a_length() {
        let d = Displacement::new(Vector::new(0.3, 0.4, 0.0), LengthUnit::Kilometre);
        let l: Length = d.magnitude();
        assert_relative_eq!(l.value_in(LengthUnit::Kilometre), 0.5, max_relative = 1e-15);
    }
}

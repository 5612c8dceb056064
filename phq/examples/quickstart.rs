//! Minimal end-to-end example: pipe flow properties, a Reynolds number and a Newtonian stress.

use phq::{
    BulkDynamicViscosity, CompressibleNewtonianFluid, ConstitutiveModel, DiffusivityUnit,
    DynamicViscosity, DynamicViscosityUnit, FrequencyUnit, KinematicViscosity, Length, LengthUnit,
    MassDensity, MassDensityUnit, ReynoldsNumber, Speed, SpeedUnit, StrainRate, SymmetricDyadic,
};

fn main() {
    let rho = MassDensity::new(998.0, MassDensityUnit::KilogramPerCubicMetre);
    let mu = DynamicViscosity::new(1.0, DynamicViscosityUnit::Centipoise);
    let nu: KinematicViscosity = mu / rho;
    println!("kinematic viscosity: {}", nu.print_in(DiffusivityUnit::Centistokes));

    let v = Speed::new(2.0, SpeedUnit::MetrePerSecond);
    let d = Length::new(25.0, LengthUnit::Millimetre);
    let re = ReynoldsNumber::from_kinematic_viscosity(v, d, nu);
    assert!((re.value() - 49_900.0).abs() < 1e-6);
    println!("Reynolds number: {}", re);

    let kappa = BulkDynamicViscosity::new(0.0, DynamicViscosityUnit::PascalSecond);
    let fluid = CompressibleNewtonianFluid::new(mu, kappa);
    let shear = StrainRate::new(
        SymmetricDyadic::new(0.0, 100.0, 0.0, 0.0, 0.0, 0.0),
        FrequencyUnit::Hertz,
    );
    println!("{}", fluid.print());
    println!("stress: {}", fluid.stress_from_strain_rate(shear));
}

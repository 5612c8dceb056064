//! Unit families, one module per measured dimension.
//!
//! Every family is an enum deriving [`Unit`](crate::Unit), re-exported here (`units::LengthUnit`,
//! `units::PressureUnit`, ...). Each module also holds the zero-sized
//! [`StaticUnit`](crate::StaticUnit) markers of its family, named after the variants
//! (`units::length::Millimetre`), for the `const` factories.
//!
//! Several quantities can share a family: kinematic viscosity and thermal diffusivity both use
//! [`DiffusivityUnit`], stress and static pressure both use [`PressureUnit`].
//!
//! ## Modules
//!
//! - [`length`], [`area`], [`volume`]: geometry.
//! - [`time`], [`frequency`], [`speed`]: kinematics.
//! - [`mass`], [`mass_density`]: inertia.
//! - [`dynamic_viscosity`], [`diffusivity`], [`pressure`]: fluid mechanics.
//! - [`temperature`], [`temperature_difference`], [`temperature_gradient`],
//!   [`thermal_conductivity`], [`specific_heat_capacity`], [`energy_flux`]: heat transfer.

pub mod area;
pub mod diffusivity;
pub mod dynamic_viscosity;
pub mod energy_flux;
pub mod frequency;
pub mod length;
pub mod mass;
pub mod mass_density;
pub mod pressure;
pub mod specific_heat_capacity;
pub mod speed;
pub mod temperature;
pub mod temperature_difference;
pub mod temperature_gradient;
pub mod thermal_conductivity;
pub mod time;
pub mod volume;

pub use area::AreaUnit;
pub use diffusivity::DiffusivityUnit;
pub use dynamic_viscosity::DynamicViscosityUnit;
pub use energy_flux::EnergyFluxUnit;
pub use frequency::FrequencyUnit;
pub use length::LengthUnit;
pub use mass::MassUnit;
pub use mass_density::MassDensityUnit;
pub use pressure::PressureUnit;
pub use specific_heat_capacity::SpecificHeatCapacityUnit;
pub use speed::SpeedUnit;
pub use temperature::TemperatureUnit;
pub use temperature_difference::TemperatureDifferenceUnit;
pub use temperature_gradient::TemperatureGradientUnit;
pub use thermal_conductivity::ThermalConductivityUnit;
pub use time::TimeUnit;
pub use volume::VolumeUnit;

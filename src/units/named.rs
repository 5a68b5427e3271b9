// @generated by gen_dimensions from `codegen::DEFAULT_TABLE`.
// Regenerate instead of editing by hand.

use super::dimension::Dimension;

use phf::phf_map;

pub const SCALAR_VALUE: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 0]);
pub const ACCELERATION: Dimension = Dimension::new([-2, 1, 0, 0, 0, 0, 0]);
pub const AMOUNT_OF_SUBSTANCE: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 1]);
pub const ANGULAR_MOMENTUM: Dimension = Dimension::new([-1, 2, 1, 0, 0, 0, 0]);
pub const AREA: Dimension = Dimension::new([0, 2, 0, 0, 0, 0, 0]);
pub const CAPACITANCE: Dimension = Dimension::new([4, -2, -1, 2, 0, 0, 0]);
pub const CATALYTIC_ACTIVITY: Dimension = Dimension::new([-1, 0, 0, 0, 0, 0, 1]);
pub const CHARGE: Dimension = Dimension::new([1, 0, 0, 1, 0, 0, 0]);
pub const CONDUCTANCE: Dimension = Dimension::new([3, -2, -1, 2, 0, 0, 0]);
pub const CONDUCTIVITY: Dimension = Dimension::new([3, -3, -1, 2, 0, 0, 0]);
pub const CURRENT: Dimension = Dimension::new([0, 0, 0, 1, 0, 0, 0]);
pub const DENSITY: Dimension = Dimension::new([0, -3, 1, 0, 0, 0, 0]);
pub const ELECTRIC_FIELD_STRENGTH: Dimension = Dimension::new([-3, 1, 1, -1, 0, 0, 0]);
pub const ENERGY: Dimension = Dimension::new([-2, 2, 1, 0, 0, 0, 0]);
pub const ENTROPY: Dimension = Dimension::new([-2, 2, 1, 0, -1, 0, 0]);
pub const FORCE: Dimension = Dimension::new([-2, 1, 1, 0, 0, 0, 0]);
pub const FREQUENCY: Dimension = Dimension::new([-1, 0, 0, 0, 0, 0, 0]);
pub const GRAVITATION: Dimension = Dimension::new([-2, 3, -1, 0, 0, 0, 0]);
pub const ILLUMINANCE: Dimension = Dimension::new([0, -2, 0, 0, 0, 1, 0]);
pub const INDUCTANCE: Dimension = Dimension::new([-2, 2, 1, -2, 0, 0, 0]);
pub const LENGTH: Dimension = Dimension::new([0, 1, 0, 0, 0, 0, 0]);
pub const LUMINOUS_INTENSITY: Dimension = Dimension::new([0, 0, 0, 0, 0, 1, 0]);
pub const MAGNETIC_FLUX: Dimension = Dimension::new([-2, 2, 1, -1, 0, 0, 0]);
pub const MAGNETIC_FLUX_DENSITY: Dimension = Dimension::new([-2, 0, 1, -1, 0, 0, 0]);
pub const MAGNETIC_PERMEABILITY: Dimension = Dimension::new([-2, 1, 1, -2, 0, 0, 0]);
pub const MASS: Dimension = Dimension::new([0, 0, 1, 0, 0, 0, 0]);
pub const MOLAR_MASS: Dimension = Dimension::new([0, 0, 1, 0, 0, 0, -1]);
pub const MOLAR_VOLUME: Dimension = Dimension::new([0, 3, 0, 0, 0, 0, -1]);
pub const MOMENTUM: Dimension = Dimension::new([-1, 1, 1, 0, 0, 0, 0]);
pub const PERMITTIVITY: Dimension = Dimension::new([4, -3, -1, 2, 0, 0, 0]);
pub const POWER: Dimension = Dimension::new([-3, 2, 1, 0, 0, 0, 0]);
pub const PRESSURE: Dimension = Dimension::new([-2, -1, 1, 0, 0, 0, 0]);
pub const RESISTANCE: Dimension = Dimension::new([-3, 2, 1, -2, 0, 0, 0]);
pub const RESISTIVITY: Dimension = Dimension::new([-3, 3, 1, -2, 0, 0, 0]);
pub const SPECIFIC_HEAT_CAPACITY: Dimension = Dimension::new([-2, 2, 0, 0, -1, 0, 0]);
pub const TEMPERATURE: Dimension = Dimension::new([0, 0, 0, 0, 1, 0, 0]);
pub const THERMAL_CONDUCTIVITY: Dimension = Dimension::new([-3, 1, 1, 0, -1, 0, 0]);
pub const TIME: Dimension = Dimension::new([1, 0, 0, 0, 0, 0, 0]);
pub const VELOCITY: Dimension = Dimension::new([-1, 1, 0, 0, 0, 0, 0]);
pub const VOLTAGE: Dimension = Dimension::new([-3, 2, 1, -1, 0, 0, 0]);
pub const VOLUME: Dimension = Dimension::new([0, 3, 0, 0, 0, 0, 0]);

pub static NAMED_DIMENSIONS: phf::Map<&'static str, Dimension> = phf_map! {
  "scalar_value" => SCALAR_VALUE,
  "acceleration" => ACCELERATION,
  "amount_of_substance" => AMOUNT_OF_SUBSTANCE,
  "angular_momentum" => ANGULAR_MOMENTUM,
  "area" => AREA,
  "capacitance" => CAPACITANCE,
  "catalytic_activity" => CATALYTIC_ACTIVITY,
  "charge" => CHARGE,
  "conductance" => CONDUCTANCE,
  "conductivity" => CONDUCTIVITY,
  "current" => CURRENT,
  "density" => DENSITY,
  "electric_field_strength" => ELECTRIC_FIELD_STRENGTH,
  "energy" => ENERGY,
  "entropy" => ENTROPY,
  "force" => FORCE,
  "frequency" => FREQUENCY,
  "gravitation" => GRAVITATION,
  "illuminance" => ILLUMINANCE,
  "inductance" => INDUCTANCE,
  "length" => LENGTH,
  "luminous_intensity" => LUMINOUS_INTENSITY,
  "magnetic_flux" => MAGNETIC_FLUX,
  "magnetic_flux_density" => MAGNETIC_FLUX_DENSITY,
  "magnetic_permeability" => MAGNETIC_PERMEABILITY,
  "mass" => MASS,
  "molar_mass" => MOLAR_MASS,
  "molar_volume" => MOLAR_VOLUME,
  "momentum" => MOMENTUM,
  "permittivity" => PERMITTIVITY,
  "power" => POWER,
  "pressure" => PRESSURE,
  "resistance" => RESISTANCE,
  "resistivity" => RESISTIVITY,
  "specific_heat_capacity" => SPECIFIC_HEAT_CAPACITY,
  "temperature" => TEMPERATURE,
  "thermal_conductivity" => THERMAL_CONDUCTIVITY,
  "time" => TIME,
  "velocity" => VELOCITY,
  "voltage" => VOLTAGE,
  "volume" => VOLUME,
};

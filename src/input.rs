//! Records produced by external readers and their conversion into model types.
//!
//! Field names follow the exported CSV columns and material documents so a
//! reader only has to deserialize rows; no file handling happens here.

use serde::{Deserialize, Serialize};

use crate::damage::{CycleShare, DutyBlock, DutyCycle};
use crate::errors::DataShapeError;
use crate::geometry::{Displacement, Point};
use crate::material::{MarinFactors, MaterialModel};
use crate::tensor::{LoadCaseResult, NodalResult, StressTensor};

/// One row of exported nodal results: millimetres and megapascals.
///
/// Shear components default to zero and displacements are optional.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Solver node identifier.
    pub node_id: u64,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
    /// Normal stress along X.
    pub sxx: f64,
    /// Normal stress along Y.
    pub syy: f64,
    /// Normal stress along Z.
    pub szz: f64,
    /// Shear stress in the XY plane.
    #[serde(default)]
    pub sxy: f64,
    /// Shear stress in the YZ plane.
    #[serde(default)]
    pub syz: f64,
    /// Shear stress in the XZ plane.
    #[serde(default)]
    pub sxz: f64,
    /// Displacement along X.
    #[serde(default)]
    pub ux: Option<f64>,
    /// Displacement along Y.
    #[serde(default)]
    pub uy: Option<f64>,
    /// Displacement along Z.
    #[serde(default)]
    pub uz: Option<f64>,
}

impl From<NodeRecord> for NodalResult {
    fn from(record: NodeRecord) -> Self {
        let displacement = if record.ux.is_some() || record.uy.is_some() || record.uz.is_some() {
            Some(Displacement::new(
                record.ux.unwrap_or(0.0),
                record.uy.unwrap_or(0.0),
                record.uz.unwrap_or(0.0),
            ))
        } else {
            None
        };
        NodalResult {
            node_id: record.node_id,
            position: Point::new(record.x, record.y, record.z),
            stress: StressTensor::new(
                record.sxx, record.syy, record.szz, record.sxy, record.syz, record.sxz,
            ),
            displacement,
        }
    }
}

/// Build a load case from exported rows, keeping their order.
pub fn load_case_from_records(
    id: impl Into<String>,
    records: impl IntoIterator<Item = NodeRecord>,
) -> LoadCaseResult {
    LoadCaseResult::new(id, records.into_iter().map(NodalResult::from).collect())
}

/// Material document as supplied by the user.
///
/// When `Se` is omitted it is derived from the Marin factors and the base
/// endurance limit `0.5·Su`. An explicit `Se` takes precedence.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialInput {
    /// Young's modulus.
    #[serde(rename = "E")]
    pub elastic_modulus: f64,
    /// Poisson's ratio.
    #[serde(rename = "nu")]
    pub poisson_ratio: f64,
    /// Yield strength.
    #[serde(rename = "Sy")]
    pub yield_strength: f64,
    /// Ultimate tensile strength.
    #[serde(rename = "Su")]
    pub ultimate_strength: f64,
    /// Corrected endurance limit, if already known.
    #[serde(rename = "Se", default)]
    pub endurance_limit: Option<f64>,
    /// Basquin fatigue strength coefficient σ'f.
    pub sigma_f_prime: f64,
    /// Basquin fatigue strength exponent.
    pub b: f64,
    /// Marin correction factors.
    #[serde(default, flatten)]
    pub marin: MarinFactors,
}

impl From<MaterialInput> for MaterialModel {
    fn from(input: MaterialInput) -> Self {
        let endurance_limit = input
            .endurance_limit
            .unwrap_or_else(|| input.marin.corrected_endurance_limit(input.ultimate_strength));
        MaterialModel {
            elastic_modulus: input.elastic_modulus,
            poisson_ratio: input.poisson_ratio,
            yield_strength: input.yield_strength,
            ultimate_strength: input.ultimate_strength,
            endurance_limit,
            fatigue_strength_coefficient: input.sigma_f_prime,
            fatigue_strength_exponent: input.b,
        }
    }
}

/// Alternating stress of a duty block as supplied by the user.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Amplitude {
    /// Fraction of the vibratory load case amplitude.
    Fraction(f64),
    /// Absolute amplitude in megapascals.
    Mpa(f64),
}

impl Amplitude {
    /// Amplitude in megapascals given the reference amplitude of the vibratory case.
    #[must_use]
    pub fn resolve(self, reference_amplitude: f64) -> f64 {
        match self {
            Amplitude::Fraction(fraction) => fraction * reference_amplitude,
            Amplitude::Mpa(value) => value,
        }
    }
}

/// One duty block as supplied by the user.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DutyBlockInput {
    /// Alternating stress of the block.
    pub amplitude: Amplitude,
    /// Share of cycles spent in the block.
    pub share: CycleShare,
}

/// Resolve duty blocks against the reference amplitude and mean stress.
///
/// # Errors
///
/// Returns [`DataShapeError`] when the resulting duty cycle is invalid; see
/// [`DutyCycle::with_tolerance`].
pub fn duty_cycle_from_inputs(
    inputs: &[DutyBlockInput],
    reference_amplitude: f64,
    mean_stress: f64,
    tolerance: f64,
) -> Result<DutyCycle, DataShapeError> {
    let blocks = inputs
        .iter()
        .map(|input| DutyBlock {
            stress_amplitude: input.amplitude.resolve(reference_amplitude),
            mean_stress,
            share: input.share,
        })
        .collect();
    DutyCycle::with_tolerance(blocks, tolerance)
}

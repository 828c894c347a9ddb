//! Cumulative damage with the linear Miner rule.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::{AnalysisError, DataShapeError, DomainError};
use crate::life::cycles_to_failure;
use crate::material::MaterialModel;
use crate::mean_stress::{correct, CorrectionMethod, MeanStressCorrection};

/// Applied cycles and life at one load level.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DamageBlock {
    /// Number of cycles applied at this level.
    pub applied_cycles: f64,
    /// Cycles to failure at this level, possibly infinite.
    pub life: f64,
}

impl DamageBlock {
    /// Create a block from its applied cycles and life.
    #[must_use]
    pub const fn new(applied_cycles: f64, life: f64) -> Self {
        Self {
            applied_cycles,
            life,
        }
    }
}

/// Result of a Miner's rule summation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DamageSummary {
    /// Cumulative damage `D = Σ nᵢ/Nᵢ`.
    pub damage: f64,
    /// Damage contributed by each block, in input order.
    pub block_damage: Vec<f64>,
    /// Sum of the applied cycles.
    pub total_applied_cycles: f64,
    /// Total cycles to failure at the same spectrum mix, `Σn / D`. Infinite when
    /// no damage accrues.
    pub equivalent_life: f64,
    /// Repetitions of the whole sequence to failure, `1 / D`.
    pub repeats_to_failure: f64,
    /// Whether `D >= 1`.
    pub failure_predicted: bool,
}

/// Sum the damage of a sequence of blocks.
///
/// # Errors
///
/// Returns [`DataShapeError`] when the sequence is empty, a life is zero, negative
/// or NaN, or an applied cycle count is negative or not finite.
///
/// # Examples
/// ```
/// use fatiguex::{accumulate, DamageBlock};
///
/// let summary = accumulate(&[DamageBlock::new(5.0e5, 1.0e6), DamageBlock::new(5.0e5, 1.0e6)])
///     .expect("valid blocks");
/// assert_eq!(summary.damage, 1.0);
/// assert!(summary.failure_predicted);
/// ```
pub fn accumulate(blocks: &[DamageBlock]) -> Result<DamageSummary, DataShapeError> {
    if blocks.is_empty() {
        return Err(DataShapeError::EmptyDamageBlocks);
    }

    let mut block_damage = Vec::with_capacity(blocks.len());
    let mut total_applied_cycles = 0.0;
    for (block, entry) in blocks.iter().enumerate() {
        if entry.life.is_nan() || entry.life <= 0.0 {
            return Err(DataShapeError::NonPositiveBlockLife {
                block,
                life: entry.life,
            });
        }
        if !(entry.applied_cycles >= 0.0 && entry.applied_cycles.is_finite()) {
            return Err(DataShapeError::InvalidAppliedCycles {
                block,
                cycles: entry.applied_cycles,
            });
        }
        block_damage.push(entry.applied_cycles / entry.life);
        total_applied_cycles += entry.applied_cycles;
    }

    let damage: f64 = block_damage.iter().sum();
    let (equivalent_life, repeats_to_failure) = if damage > 0.0 {
        (total_applied_cycles / damage, 1.0 / damage)
    } else {
        (f64::INFINITY, f64::INFINITY)
    };

    Ok(DamageSummary {
        damage,
        block_damage,
        total_applied_cycles,
        equivalent_life,
        repeats_to_failure,
        failure_predicted: damage >= 1.0,
    })
}

/// Share of the duty cycle spent in a block.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleShare {
    /// Fraction of the total number of cycles.
    Fraction(f64),
    /// Absolute number of cycles.
    Count(f64),
}

/// One segment of a repeating load spectrum.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DutyBlock {
    /// Alternating stress amplitude in megapascals.
    pub stress_amplitude: f64,
    /// Mean stress in megapascals.
    pub mean_stress: f64,
    /// Share of cycles applied at this level.
    pub share: CycleShare,
}

/// Validated, ordered sequence of duty blocks.
///
/// Deserialized cycles go through [`DutyCycle::new`] and are checked with the
/// default fraction tolerance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DutyCycleRecord")]
pub struct DutyCycle {
    /// Blocks in application order.
    blocks: Vec<DutyBlock>,
}

/// Unvalidated wire form of a [`DutyCycle`].
#[derive(Deserialize)]
struct DutyCycleRecord {
    /// Blocks in application order.
    blocks: Vec<DutyBlock>,
}

impl TryFrom<DutyCycleRecord> for DutyCycle {
    type Error = DataShapeError;

    fn try_from(record: DutyCycleRecord) -> Result<Self, Self::Error> {
        Self::new(record.blocks)
    }
}

/// Per-block outcome of a duty cycle evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DutyBlockResult {
    /// Mean-stress correction applied to the block.
    pub correction: MeanStressCorrection,
    /// Cycles applied at this level.
    pub applied_cycles: f64,
    /// Basquin life at the equivalent stress.
    pub life: f64,
    /// Damage contributed by the block.
    pub damage: f64,
}

/// Outcome of evaluating a duty cycle against a material.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DutyCycleAssessment {
    /// Results for each block in application order.
    pub blocks: Vec<DutyBlockResult>,
    /// Miner's rule summary over all blocks.
    pub summary: DamageSummary,
}

impl DutyCycle {
    /// Accepted deviation of the fraction sum from one.
    pub const DEFAULT_FRACTION_TOLERANCE: f64 = 1.0e-3;

    /// Validate a duty cycle with the default fraction tolerance.
    ///
    /// # Errors
    ///
    /// See [`DutyCycle::with_tolerance`].
    pub fn new(blocks: Vec<DutyBlock>) -> Result<Self, DataShapeError> {
        Self::with_tolerance(blocks, Self::DEFAULT_FRACTION_TOLERANCE)
    }

    /// Validate a duty cycle.
    ///
    /// Blocks must either all use fractions, which then sum to one within
    /// `tolerance`, or all use absolute counts.
    ///
    /// # Errors
    ///
    /// Returns [`DataShapeError::EmptyDutyCycle`], [`DataShapeError::MixedDutyShares`],
    /// [`DataShapeError::DutyFractionSum`] or [`DataShapeError::InvalidAppliedCycles`]
    /// for a negative or non-finite share.
    pub fn with_tolerance(blocks: Vec<DutyBlock>, tolerance: f64) -> Result<Self, DataShapeError> {
        if blocks.is_empty() {
            return Err(DataShapeError::EmptyDutyCycle);
        }

        let mut fraction_sum = 0.0;
        let mut fractions = 0;
        for (block, entry) in blocks.iter().enumerate() {
            let value = match entry.share {
                CycleShare::Fraction(value) => {
                    fractions += 1;
                    fraction_sum += value;
                    value
                }
                CycleShare::Count(value) => value,
            };
            if !(value >= 0.0 && value.is_finite()) {
                return Err(DataShapeError::InvalidAppliedCycles {
                    block,
                    cycles: value,
                });
            }
        }

        if fractions != 0 && fractions != blocks.len() {
            return Err(DataShapeError::MixedDutyShares);
        }
        if fractions != 0 && (fraction_sum - 1.0).abs() > tolerance {
            return Err(DataShapeError::DutyFractionSum {
                sum: fraction_sum,
                tolerance,
            });
        }

        Ok(Self { blocks })
    }

    /// Blocks in application order.
    #[must_use]
    pub fn blocks(&self) -> &[DutyBlock] {
        &self.blocks
    }

    /// Whether the shares are fractions of a total cycle count.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        matches!(
            self.blocks.first().map(|block| block.share),
            Some(CycleShare::Fraction(_))
        )
    }

    /// Cycles applied in each block. Fractions are scaled by `total_cycles`;
    /// absolute counts ignore it.
    #[must_use]
    pub fn applied_cycles(&self, total_cycles: f64) -> Vec<f64> {
        self.blocks
            .iter()
            .map(|block| match block.share {
                CycleShare::Fraction(fraction) => fraction * total_cycles,
                CycleShare::Count(count) => count,
            })
            .collect()
    }

    /// Correct, predict and accumulate damage for every block.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DutyBlock`] naming the first block whose correction
    /// or life prediction is outside its domain, and [`AnalysisError::DataShape`]
    /// when the accumulated sequence is malformed.
    #[instrument(skip(self, material), fields(blocks = self.blocks.len()))]
    pub fn evaluate(
        &self,
        material: &MaterialModel,
        method: CorrectionMethod,
        total_cycles: f64,
    ) -> Result<DutyCycleAssessment, AnalysisError> {
        let applied = self.applied_cycles(total_cycles);
        let mut corrections = Vec::with_capacity(self.blocks.len());
        let mut damage_blocks = Vec::with_capacity(self.blocks.len());
        for (block, (entry, &applied_cycles)) in self.blocks.iter().zip(&applied).enumerate() {
            let to_block_error = |source: DomainError| AnalysisError::DutyBlock { block, source };
            let correction = correct(entry.stress_amplitude, entry.mean_stress, material, method)
                .map_err(to_block_error)?;
            let life = if correction.equivalent_stress == 0.0 {
                f64::INFINITY
            } else {
                cycles_to_failure(correction.equivalent_stress, material)
                    .map_err(to_block_error)?
            };
            corrections.push(correction);
            damage_blocks.push(DamageBlock::new(applied_cycles, life));
        }

        let summary = accumulate(&damage_blocks)?;
        debug!(damage = summary.damage, failure = summary.failure_predicted, "duty cycle evaluated");

        let blocks = corrections
            .into_iter()
            .zip(&damage_blocks)
            .zip(&summary.block_damage)
            .map(|((correction, block), &damage)| DutyBlockResult {
                correction,
                applied_cycles: block.applied_cycles,
                life: block.life,
                damage,
            })
            .collect();

        Ok(DutyCycleAssessment { blocks, summary })
    }
}

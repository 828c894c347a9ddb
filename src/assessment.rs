//! End to end fatigue assessment of a static and a vibratory load case.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::config::AnalysisConfig;
use crate::convergence::{assess, ConvergenceAssessment, ConvergenceSeries};
use crate::damage::{CycleShare, DutyBlock, DutyCycle, DutyCycleAssessment};
use crate::errors::AnalysisError;
use crate::input::{duty_cycle_from_inputs, DutyBlockInput};
use crate::life::{estimate_life, LifeEstimate};
use crate::material::MaterialModel;
use crate::mean_stress::{correct, MeanStressCorrection};
use crate::tensor::{LoadCaseExtremes, LoadCaseResult};

/// Everything an assessment reads. Nothing is copied until [`FatigueAssessment::run`].
#[derive(Clone, Copy, Debug)]
pub struct AssessmentInputs<'a> {
    /// Load case supplying the mean stress.
    pub static_case: &'a LoadCaseResult,
    /// Load case supplying the alternating stress.
    pub vibratory_case: &'a LoadCaseResult,
    /// Material of the part.
    pub material: &'a MaterialModel,
    /// Duty spectrum. Without one the vibratory amplitude is applied for the
    /// whole design life.
    pub duty_cycle: Option<&'a [DutyBlockInput]>,
    /// Mesh study of the governing stress, when one was run.
    pub mesh_study: Option<&'a ConvergenceSeries>,
}

/// Headline results, in the layout consumed by report and plot generators.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FatigueSummary {
    /// Largest von Mises stress over both load cases in megapascals.
    pub max_von_mises: f64,
    /// Largest maximum principal stress over both load cases in megapascals.
    pub max_principal_stress: f64,
    /// Node carrying `max_von_mises`.
    pub critical_node_id: u64,
    /// Basquin life at the corrected vibratory stress; infinite without vibration.
    pub predicted_life_cycles: f64,
    /// Miner damage of the duty cycle over the design life.
    pub cumulative_damage: f64,
    /// Yield strength over `max_von_mises`.
    pub fos_yield: f64,
    /// Mean-stress corrected fatigue safety factor.
    pub fos_fatigue: f64,
    /// Governing relative change of the mesh study, as a fraction.
    pub mesh_convergence_pct: Option<f64>,
}

/// Pass or fail verdicts against the configured requirements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignVerdict {
    /// `fos_yield` meets the required yield safety factor.
    pub yield_ok: bool,
    /// `fos_fatigue` meets the required fatigue safety factor.
    pub fatigue_ok: bool,
    /// Predicted life reaches the design life.
    pub life_ok: bool,
    /// Duty cycle damage stays below one.
    pub damage_ok: bool,
    /// Mesh study converged, when one was supplied.
    pub mesh_converged: Option<bool>,
}

impl DesignVerdict {
    /// Whether every structural check passes. An unconverged mesh does not fail
    /// the design on its own.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.yield_ok && self.fatigue_ok && self.life_ok && self.damage_ok
    }
}

/// Full outcome of an assessment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FatigueAssessment {
    /// Headline results.
    pub summary: FatigueSummary,
    /// Verdicts against the configured requirements.
    pub verdict: DesignVerdict,
    /// Extremes of the static load case.
    pub static_extremes: LoadCaseExtremes,
    /// Extremes of the vibratory load case.
    pub vibratory_extremes: LoadCaseExtremes,
    /// Correction of the nominal mean and alternating stresses.
    pub correction: MeanStressCorrection,
    /// Life at the corrected stress; absent when the vibratory amplitude is zero.
    pub life: Option<LifeEstimate>,
    /// First-cycle yield check `Sy / (Sa + |Sm|)` along the Langer line.
    pub langer_safety_factor: f64,
    /// Per-block damage of the duty cycle.
    pub duty: DutyCycleAssessment,
    /// Mesh study verdict, when a study was supplied.
    pub convergence: Option<ConvergenceAssessment>,
    /// Settings used.
    pub config: AnalysisConfig,
}

impl FatigueAssessment {
    /// Reduce both load cases, correct for mean stress, predict life, accumulate
    /// duty cycle damage and check mesh convergence.
    ///
    /// An unconverged mesh study is reported in [`FatigueAssessment::convergence`]
    /// and does not make the run fail.
    ///
    /// # Errors
    ///
    /// Returns the first [`AnalysisError`] raised by a stage: an invalid nodal
    /// tensor, an empty load case, a mean stress outside the correction domain,
    /// an invalid duty cycle, or a malformed mesh study.
    #[instrument(
        skip_all,
        fields(
            static_case = inputs.static_case.id(),
            vibratory_case = inputs.vibratory_case.id(),
            method = %config.method,
        )
    )]
    pub fn run(
        inputs: &AssessmentInputs<'_>,
        config: &AnalysisConfig,
    ) -> Result<Self, AnalysisError> {
        let material = inputs.material;
        let static_extremes = inputs.static_case.extremes()?;
        let vibratory_extremes = inputs.vibratory_case.extremes()?;

        let (mean_stress, amplitude) = config
            .stress_measure
            .mean_and_amplitude(&static_extremes, &vibratory_extremes);
        let correction = correct(amplitude, mean_stress, material, config.method)?;

        let life = if correction.equivalent_stress > 0.0 {
            Some(estimate_life(
                correction.equivalent_stress,
                material,
                config.design_life,
            )?)
        } else {
            None
        };
        let predicted_life_cycles = life.map_or(f64::INFINITY, |estimate| estimate.cycles);

        let duty_cycle = match inputs.duty_cycle {
            Some(blocks) => duty_cycle_from_inputs(
                blocks,
                amplitude,
                mean_stress,
                config.duty_fraction_tolerance,
            )?,
            None => DutyCycle::new(vec![DutyBlock {
                stress_amplitude: amplitude,
                mean_stress,
                share: CycleShare::Count(config.design_life),
            }])?,
        };
        let duty = duty_cycle.evaluate(material, config.method, config.design_life)?;

        let convergence = inputs
            .mesh_study
            .map(|series| assess(series, config.convergence_threshold))
            .transpose()?;

        let (max_von_mises, critical_node_id) =
            if vibratory_extremes.max_von_mises > static_extremes.max_von_mises {
                (vibratory_extremes.max_von_mises, vibratory_extremes.critical_node_id)
            } else {
                (static_extremes.max_von_mises, static_extremes.critical_node_id)
            };
        let fos_yield = material.yield_safety_factor(max_von_mises);
        let peak = amplitude + mean_stress.abs();
        let langer_safety_factor = if peak > 0.0 {
            material.yield_strength / peak
        } else {
            f64::INFINITY
        };

        let summary = FatigueSummary {
            max_von_mises,
            max_principal_stress: static_extremes
                .max_principal
                .max(vibratory_extremes.max_principal),
            critical_node_id,
            predicted_life_cycles,
            cumulative_damage: duty.summary.damage,
            fos_yield,
            fos_fatigue: correction.safety_factor,
            mesh_convergence_pct: convergence
                .as_ref()
                .map(|assessment| assessment.governing_change),
        };
        let verdict = DesignVerdict {
            yield_ok: fos_yield >= config.required_fos_yield,
            fatigue_ok: correction.safety_factor >= config.required_fos_fatigue,
            life_ok: predicted_life_cycles >= config.design_life,
            damage_ok: !duty.summary.failure_predicted,
            mesh_converged: convergence.as_ref().map(|assessment| assessment.converged),
        };
        debug!(mean_stress, amplitude, langer_safety_factor, "nominal stresses combined");
        info!(
            passed = verdict.passed(),
            fos_yield,
            fos_fatigue = correction.safety_factor,
            damage = duty.summary.damage,
            "fatigue assessment complete"
        );

        Ok(Self {
            summary,
            verdict,
            static_extremes,
            vibratory_extremes,
            correction,
            life,
            langer_safety_factor,
            duty,
            convergence,
            config: *config,
        })
    }
}

#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod assessment;
mod config;
mod convergence;
mod damage;
mod errors;
mod geometry;
mod input;
mod life;
mod material;
mod mean_stress;
mod sensitivity;
mod tensor;

pub use assessment::{AssessmentInputs, DesignVerdict, FatigueAssessment, FatigueSummary};
pub use config::{AnalysisConfig, StressMeasure};
pub use convergence::{
    assess, ConvergenceAssessment, ConvergenceLevel, ConvergenceSeries, RefinementOrder,
    DEFAULT_CONVERGENCE_THRESHOLD,
};
pub use damage::{
    accumulate, CycleShare, DamageBlock, DamageSummary, DutyBlock, DutyBlockResult, DutyCycle,
    DutyCycleAssessment,
};
pub use errors::{
    AnalysisError, ConfigError, ConvergenceWarning, DataShapeError, DomainError,
    InvalidTensorError,
};
pub use geometry::{displacement, point, Displacement, Point};
pub use input::{
    duty_cycle_from_inputs, load_case_from_records, Amplitude, DutyBlockInput, MaterialInput,
    NodeRecord,
};
pub use life::{
    cycles_to_failure, estimate_life, sn_curve, stress_for_life, LifeEstimate, SnPoint,
    INFINITE_LIFE_CYCLES,
};
pub use material::{MarinFactors, MaterialModel};
pub use mean_stress::{correct, CorrectionMethod, MeanStressCorrection, StressCycle};
pub use sensitivity::{
    rank, tornado, ParameterImpact, ParameterSwing, ParameterValue, ParameterVariation,
};
pub use tensor::{
    reduce, LoadCaseExtremes, LoadCaseResult, NodalResult, PathSample, PrincipalStressSet,
    StressTensor,
};

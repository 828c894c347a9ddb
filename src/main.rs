mod report;
mod scenario;

use fatiguex::{rank, AnalysisConfig, AssessmentInputs, FatigueAssessment};
use report::render_summary;
use scenario::bracket_scenario;
use std::error::Error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Log filtering follows RUST_LOG, e.g. `RUST_LOG=fatiguex=debug` to trace
    // every stage of the assessment.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Settings come from FATIGUEX_CONFIG as a JSON document when present,
    // otherwise the Goodman defaults with a one million cycle design life.
    let config = match std::env::var("FATIGUEX_CONFIG") {
        Ok(document) => AnalysisConfig::from_json_str(&document)?,
        Err(_) => AnalysisConfig::default(),
    };

    // Build the bracket inputs: a static preload case, a vibratory case, the
    // aluminium material, a three level duty spectrum and a mesh study.
    let scenario = bracket_scenario();
    let inputs = AssessmentInputs {
        static_case: &scenario.static_case,
        vibratory_case: &scenario.vibratory_case,
        material: &scenario.material,
        duty_cycle: Some(scenario.duty_cycle.as_slice()),
        mesh_study: Some(&scenario.mesh_study),
    };

    // Reduce both cases, correct the nominal cycle for mean stress and predict
    // its Basquin life, then sum the spectrum damage with Miner's rule.
    // See: https://en.wikipedia.org/wiki/Goodman_relation
    // and https://en.wikipedia.org/wiki/Fatigue_(material)#Miner's_rule
    let assessment = FatigueAssessment::run(&inputs, &config)?;

    // Rank the design parameters by how far each one moves the fillet stress.
    let ranking = rank(scenario.baseline_stress, &scenario.variations)?;

    // Print the readable report followed by the machine-readable summary.
    println!("{}", render_summary(&assessment, &ranking));
    println!("{}", serde_json::to_string_pretty(&assessment.summary)?);

    Ok(())
}

use fatiguex::{FatigueAssessment, ParameterImpact};
use std::fmt::Write;

/// Format a pass/fail flag.
fn status(passed: bool) -> &'static str {
    if passed {
        "PASS"
    } else {
        "FAIL"
    }
}

/// Render a textual summary of the bracket fatigue assessment.
///
/// Lives and damage use scientific notation, stresses one decimal in MPa.
#[must_use]
pub fn render_summary(assessment: &FatigueAssessment, ranking: &[ParameterImpact]) -> String {
    let mut output = String::new();
    let summary = &assessment.summary;
    let verdict = &assessment.verdict;
    let config = &assessment.config;

    writeln!(
        &mut output,
        "Fatigue assessment ({} correction, design life = {:.1e} cycles)",
        config.method, config.design_life
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Peak stress: von Mises = {:.1} MPa at node {}, max principal = {:.1} MPa",
        summary.max_von_mises, summary.critical_node_id, summary.max_principal_stress
    )
    .expect("writing to string cannot fail");

    let correction = &assessment.correction;
    writeln!(
        &mut output,
        "Nominal cycle: Sa = {:.1} MPa, Sm = {:.1} MPa, Seq = {:.1} MPa",
        correction.amplitude, correction.mean_stress, correction.equivalent_stress
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Predicted life: {:.3e} cycles, duty cycle damage D = {:.3e}",
        summary.predicted_life_cycles, summary.cumulative_damage
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Yield FoS = {:.2} (required {:.2}): {}",
        summary.fos_yield,
        config.required_fos_yield,
        status(verdict.yield_ok)
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Fatigue FoS = {:.2} (required {:.2}): {}",
        summary.fos_fatigue,
        config.required_fos_fatigue,
        status(verdict.fatigue_ok)
    )
    .expect("writing to string cannot fail");

    match (&assessment.convergence, summary.mesh_convergence_pct) {
        (Some(convergence), Some(change)) => {
            writeln!(
                &mut output,
                "Mesh convergence: {:.1}% change at level {} ({})",
                change * 100.0,
                convergence.selected_index,
                if convergence.converged {
                    "converged"
                } else {
                    "not converged"
                }
            )
            .expect("writing to string cannot fail");
        }
        _ => output.push_str("Mesh convergence: no study supplied\n"),
    }

    if !ranking.is_empty() {
        output.push_str("Sensitivity ranking:\n");
        for (position, impact) in ranking.iter().enumerate() {
            writeln!(
                &mut output,
                "  {}. {} {:+.1}%",
                position + 1,
                impact.parameter,
                impact.pct_impact * 100.0
            )
            .expect("writing to string cannot fail");
        }
    }

    writeln!(&mut output, "Overall: {}", status(verdict.passed()))
        .expect("writing to string cannot fail");

    output
}

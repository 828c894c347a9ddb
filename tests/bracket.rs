#![warn(clippy::pedantic)]

use fatiguex::{
    accumulate, assess, correct, cycles_to_failure, load_case_from_records, rank, reduce,
    AnalysisConfig, AssessmentInputs, ConvergenceLevel, ConvergenceSeries, CorrectionMethod,
    DamageBlock, FatigueAssessment, LoadCaseResult, MaterialInput, MaterialModel, NodeRecord,
    ParameterVariation, RefinementOrder, StressCycle, StressTensor,
};

#[derive(Debug, Clone, Copy)]
struct BracketLoads {
    mean_stress: f64,
    amplitude: f64,
}

impl Default for BracketLoads {
    fn default() -> Self {
        Self {
            mean_stress: 35.0,
            amplitude: 42.0,
        }
    }
}

fn uniaxial_record(node_id: u64, sxx: f64) -> NodeRecord {
    NodeRecord {
        node_id,
        x: node_id as f64,
        y: 0.0,
        z: 0.0,
        sxx,
        syy: 0.0,
        szz: 0.0,
        sxy: 0.0,
        syz: 0.0,
        sxz: 0.0,
        ux: None,
        uy: None,
        uz: None,
    }
}

fn build_bracket_cases(loads: BracketLoads) -> (LoadCaseResult, LoadCaseResult) {
    let static_case = load_case_from_records(
        "lc1",
        [
            uniaxial_record(1, 0.4 * loads.mean_stress),
            uniaxial_record(2, loads.mean_stress),
            uniaxial_record(3, 0.7 * loads.mean_stress),
        ],
    );
    let vibratory_case = load_case_from_records(
        "lc2",
        [
            uniaxial_record(1, 0.4 * loads.amplitude),
            uniaxial_record(2, loads.amplitude),
            uniaxial_record(3, 0.7 * loads.amplitude),
        ],
    );
    (static_case, vibratory_case)
}

fn bracket_material() -> MaterialModel {
    let document = r#"{
        "E": 68900.0, "nu": 0.33, "Sy": 276.0, "Su": 310.0, "Se": 96.0,
        "sigma_f_prime": 410.0, "b": -0.085
    }"#;
    let input: MaterialInput = serde_json::from_str(document).expect("material document parses");
    MaterialModel::from(input)
}

#[test]
fn golden_goodman_correction() {
    let loads = BracketLoads::default();
    let material = bracket_material();
    let correction = correct(loads.amplitude, loads.mean_stress, &material, CorrectionMethod::Goodman)
        .expect("mean stress inside the Goodman domain");

    assert!((47.3..=47.8).contains(&correction.equivalent_stress));
    assert!((correction.equivalent_stress - 42.0 / (1.0 - 35.0 / 310.0)).abs() < 1.0e-12);
}

#[test]
fn golden_miner_damage() {
    let summary = accumulate(&[DamageBlock::new(1.0e6, 2.3e6)]).expect("valid block");
    assert!((summary.damage - 0.435).abs() < 1.0e-3);
    assert!(!summary.failure_predicted);
}

#[test]
fn golden_sensitivity_ranking() {
    let baseline = 185.2;
    let ranking = rank(
        baseline,
        &[
            ParameterVariation::new("material", baseline * 1.15),
            ParameterVariation::new("thickness", baseline * 1.18),
            ParameterVariation::new("fillet_radius", 114.8),
        ],
    )
    .expect("non-zero baseline");

    assert_eq!(ranking[0].parameter, "fillet_radius");
    assert!((ranking[0].pct_impact - 0.38).abs() < 1.0e-3);
    assert_eq!(ranking[1].parameter, "thickness");
    assert_eq!(ranking[2].parameter, "material");
}

#[test]
fn pipeline_matches_hand_calculation() {
    let loads = BracketLoads::default();
    let (static_case, vibratory_case) = build_bracket_cases(loads);
    let material = bracket_material();
    let inputs = AssessmentInputs {
        static_case: &static_case,
        vibratory_case: &vibratory_case,
        material: &material,
        duty_cycle: None,
        mesh_study: None,
    };
    let config = AnalysisConfig::default();
    let assessment = FatigueAssessment::run(&inputs, &config).expect("bracket assessment runs");

    let expected_seq = loads.amplitude / (1.0 - loads.mean_stress / material.ultimate_strength);
    let expected_life = cycles_to_failure(expected_seq, &material).expect("positive stress");

    let summary = assessment.summary;
    assert_eq!(summary.critical_node_id, 2);
    assert!((summary.max_von_mises - loads.amplitude).abs() < 1.0e-9);
    assert!((summary.max_principal_stress - loads.amplitude).abs() < 1.0e-9);
    assert!((summary.predicted_life_cycles - expected_life).abs() / expected_life < 1.0e-12);
    assert!(
        (summary.cumulative_damage - config.design_life / expected_life).abs()
            < 1.0e-12 * summary.cumulative_damage.max(1.0)
    );
    assert!((summary.fos_yield - material.yield_strength / loads.amplitude).abs() < 1.0e-9);
    assert!(summary.mesh_convergence_pct.is_none());
    assert!(assessment.verdict.yield_ok);
    assert!(assessment.verdict.life_ok);
}

#[test]
fn pipeline_reports_mesh_study() {
    let (static_case, vibratory_case) = build_bracket_cases(BracketLoads::default());
    let material = bracket_material();
    let study = ConvergenceSeries::new(
        vec![
            ConvergenceLevel::new(0.625, 614_400, 185.2),
            ConvergenceLevel::new(1.25, 76_800, 181.6),
            ConvergenceLevel::new(2.5, 9_600, 171.9),
            ConvergenceLevel::new(5.0, 1_200, 152.4),
        ],
        RefinementOrder::FineToCoarse,
    );
    let inputs = AssessmentInputs {
        static_case: &static_case,
        vibratory_case: &vibratory_case,
        material: &material,
        duty_cycle: None,
        mesh_study: Some(&study),
    };
    let assessment =
        FatigueAssessment::run(&inputs, &AnalysisConfig::default()).expect("bracket assessment runs");

    let convergence = assessment.convergence.expect("study supplied");
    assert!(convergence.converged);
    assert_eq!(convergence.selected_index, 1);
    assert_eq!(assessment.verdict.mesh_converged, Some(true));
    let direct = assess(&study, 0.05).expect("valid series");
    assert_eq!(assessment.summary.mesh_convergence_pct, Some(direct.governing_change));
}

#[test]
fn summary_serializes_with_external_field_names() {
    let (static_case, vibratory_case) = build_bracket_cases(BracketLoads::default());
    let material = bracket_material();
    let inputs = AssessmentInputs {
        static_case: &static_case,
        vibratory_case: &vibratory_case,
        material: &material,
        duty_cycle: None,
        mesh_study: None,
    };
    let assessment =
        FatigueAssessment::run(&inputs, &AnalysisConfig::default()).expect("bracket assessment runs");

    let value = serde_json::to_value(assessment.summary).expect("summary serializes");
    for field in [
        "max_von_mises",
        "max_principal_stress",
        "critical_node_id",
        "predicted_life_cycles",
        "cumulative_damage",
        "fos_yield",
        "fos_fatigue",
        "mesh_convergence_pct",
    ] {
        assert!(value.get(field).is_some(), "missing {field}");
    }
}

#[test]
fn stress_cycle_feeds_correction() {
    let material = bracket_material();
    let cycle = StressCycle::from_mean_and_amplitude(35.0, 42.0);
    let from_cycle = cycle
        .correct(&material, CorrectionMethod::Goodman)
        .expect("valid cycle");
    let direct = correct(42.0, 35.0, &material, CorrectionMethod::Goodman).expect("valid cycle");
    assert!((from_cycle.equivalent_stress - direct.equivalent_stress).abs() < 1.0e-12);
}

#[test]
fn nodal_reduction_of_exported_row() {
    let record: NodeRecord = serde_json::from_str(
        r#"{"node_id": 7, "x": 0.0, "y": 0.0, "z": 0.0,
            "sxx": 50.0, "syy": -20.0, "szz": 10.0, "sxy": 30.0, "syz": -15.0, "sxz": 5.0}"#,
    )
    .expect("row parses");
    let tensor = StressTensor::new(50.0, -20.0, 10.0, 30.0, -15.0, 5.0);
    let principal = reduce(&tensor).expect("finite tensor");

    let load_case = load_case_from_records("lc1", [record]);
    let extremes = load_case.extremes().expect("one valid node");
    assert!((extremes.max_von_mises - principal.von_mises).abs() < 1.0e-12);
    assert!((principal.s1 + principal.s2 + principal.s3 - 40.0).abs() < 1.0e-9);
}

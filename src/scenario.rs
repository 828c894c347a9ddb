use fatiguex::{
    load_case_from_records, Amplitude, ConvergenceLevel, ConvergenceSeries, CycleShare,
    DutyBlockInput, LoadCaseResult, MarinFactors, MaterialInput, MaterialModel, NodeRecord,
    ParameterVariation, RefinementOrder,
};

/// Inputs of the bracket demonstration: one aluminium mounting bracket under a
/// static preload and a vibratory load.
#[derive(Debug, Clone)]
pub struct BracketScenario {
    /// Static preload case supplying the mean stress.
    pub static_case: LoadCaseResult,
    /// Vibratory case supplying the alternating stress.
    pub vibratory_case: LoadCaseResult,
    /// Bracket material.
    pub material: MaterialModel,
    /// Vibration spectrum as fractions of the vibratory amplitude.
    pub duty_cycle: Vec<DutyBlockInput>,
    /// Fillet stress over four mesh refinements.
    pub mesh_study: ConvergenceSeries,
    /// Baseline fillet stress used by the sensitivity study.
    pub baseline_stress: f64,
    /// Fillet stress after changing one design parameter at a time.
    pub variations: Vec<ParameterVariation>,
}

/// Exported row for a node, without displacements.
fn row(node_id: u64, position: [f64; 3], normal: [f64; 3], shear: [f64; 3]) -> NodeRecord {
    NodeRecord {
        node_id,
        x: position[0],
        y: position[1],
        z: position[2],
        sxx: normal[0],
        syy: normal[1],
        szz: normal[2],
        sxy: shear[0],
        syz: shear[1],
        sxz: shear[2],
        ux: None,
        uy: None,
        uz: None,
    }
}

/// Build the bracket demonstration inputs.
///
/// Node 104 sits in the fillet and governs both load cases.
pub fn bracket_scenario() -> BracketScenario {
    let static_case = load_case_from_records(
        "lc1_static",
        [
            row(101, [0.0, 0.0, 0.0], [12.0, 2.0, 0.0], [1.5, 0.0, 0.0]),
            row(102, [10.0, 0.0, 0.0], [18.5, 3.1, 0.0], [2.0, 0.0, 0.4]),
            row(103, [20.0, 5.0, 0.0], [26.0, 4.0, 0.5], [3.2, 0.2, 0.0]),
            row(104, [25.0, 8.0, 0.0], [34.0, 5.2, 0.6], [4.1, 0.3, 0.2]),
            row(105, [30.0, 15.0, 0.0], [21.0, 2.7, 0.1], [1.0, 0.0, 0.0]),
        ],
    );
    let vibratory_case = load_case_from_records(
        "lc2_vibration",
        [
            NodeRecord {
                uz: Some(0.08),
                ..row(101, [0.0, 0.0, 0.0], [14.0, 2.5, 0.0], [1.8, 0.0, 0.0])
            },
            NodeRecord {
                uz: Some(0.21),
                ..row(102, [10.0, 0.0, 0.0], [22.0, 3.6, 0.0], [2.4, 0.0, 0.5])
            },
            NodeRecord {
                uz: Some(0.37),
                ..row(103, [20.0, 5.0, 0.0], [31.5, 4.8, 0.6], [3.9, 0.3, 0.0])
            },
            NodeRecord {
                uz: Some(0.44),
                ..row(104, [25.0, 8.0, 0.0], [40.5, 6.1, 0.7], [4.9, 0.4, 0.3])
            },
            NodeRecord {
                uz: Some(0.52),
                ..row(105, [30.0, 15.0, 0.0], [25.0, 3.2, 0.1], [1.2, 0.0, 0.0])
            },
        ],
    );

    let material = MaterialModel::from(MaterialInput {
        elastic_modulus: 68_900.0,
        poisson_ratio: 0.33,
        yield_strength: 276.0,
        ultimate_strength: 310.0,
        endurance_limit: Some(96.0),
        sigma_f_prime: 410.0,
        b: -0.085,
        marin: MarinFactors::default(),
    });

    let duty_cycle = vec![
        DutyBlockInput {
            amplitude: Amplitude::Fraction(0.6),
            share: CycleShare::Fraction(0.7),
        },
        DutyBlockInput {
            amplitude: Amplitude::Fraction(1.0),
            share: CycleShare::Fraction(0.25),
        },
        DutyBlockInput {
            amplitude: Amplitude::Fraction(1.5),
            share: CycleShare::Fraction(0.05),
        },
    ];

    let mesh_study = ConvergenceSeries::new(
        vec![
            ConvergenceLevel::new(5.0, 1_850, 152.4),
            ConvergenceLevel::new(2.5, 14_200, 171.9),
            ConvergenceLevel::new(1.25, 112_600, 181.6),
            ConvergenceLevel::new(0.625, 899_000, 185.2),
        ],
        RefinementOrder::CoarseToFine,
    );

    let baseline_stress = 185.2;
    let variations = vec![
        ParameterVariation::numeric("thickness", 6.0, 5.0, 218.5),
        ParameterVariation::numeric("fillet_radius", 3.0, 6.0, 114.8),
        ParameterVariation::new("material", 213.0),
    ];

    BracketScenario {
        static_case,
        vibratory_case,
        material,
        duty_cycle,
        mesh_study,
        baseline_stress,
        variations,
    }
}

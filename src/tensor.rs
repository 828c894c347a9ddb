//! Reduction of nodal stress tensors to principal and von Mises stresses.

use std::f64::consts::PI;

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::{AnalysisError, DataShapeError, InvalidTensorError};
use crate::geometry::{Displacement, Point};

/// Symmetric Cauchy stress tensor at a node, in megapascals.
///
/// Only the six independent components are stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StressTensor {
    /// Normal stress along X.
    pub sxx: f64,
    /// Normal stress along Y.
    pub syy: f64,
    /// Normal stress along Z.
    pub szz: f64,
    /// Shear stress in the XY plane.
    pub sxy: f64,
    /// Shear stress in the YZ plane.
    pub syz: f64,
    /// Shear stress in the XZ plane.
    pub sxz: f64,
}

impl StressTensor {
    /// Create a tensor from its six independent components.
    #[must_use]
    pub const fn new(sxx: f64, syy: f64, szz: f64, sxy: f64, syz: f64, sxz: f64) -> Self {
        Self {
            sxx,
            syy,
            szz,
            sxy,
            syz,
            sxz,
        }
    }

    /// Pure hydrostatic state with equal normal stresses and no shear.
    #[must_use]
    pub const fn hydrostatic_state(pressure: f64) -> Self {
        Self::new(pressure, pressure, pressure, 0.0, 0.0, 0.0)
    }

    /// Named components in storage order.
    #[must_use]
    pub fn components(&self) -> [(&'static str, f64); 6] {
        [
            ("sxx", self.sxx),
            ("syy", self.syy),
            ("szz", self.szz),
            ("sxy", self.sxy),
            ("syz", self.syz),
            ("sxz", self.sxz),
        ]
    }

    /// Check that every component is finite.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTensorError::NonFiniteComponent`] for the first NaN or infinite
    /// component.
    pub fn validate(&self) -> Result<(), InvalidTensorError> {
        match self.components().iter().find(|(_, value)| !value.is_finite()) {
            Some(&(component, value)) => {
                Err(InvalidTensorError::NonFiniteComponent { component, value })
            }
            None => Ok(()),
        }
    }

    /// Full symmetric 3×3 matrix view of the tensor.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.sxx, self.sxy, self.sxz, //
            self.sxy, self.syy, self.syz, //
            self.sxz, self.syz, self.szz,
        )
    }

    /// Mean normal stress, one third of the trace.
    #[must_use]
    pub fn hydrostatic(&self) -> f64 {
        (self.sxx + self.syy + self.szz) / 3.0
    }
}

/// Principal stresses and von Mises equivalent stress derived from a [`StressTensor`].
///
/// Always satisfies `s1 >= s2 >= s3` and `von_mises >= 0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrincipalStressSet {
    /// Maximum principal stress.
    pub s1: f64,
    /// Intermediate principal stress.
    pub s2: f64,
    /// Minimum principal stress.
    pub s3: f64,
    /// Von Mises equivalent stress.
    pub von_mises: f64,
}

impl PrincipalStressSet {
    /// Maximum shear stress, half the spread of the principal stresses.
    #[must_use]
    pub fn tresca_shear(&self) -> f64 {
        0.5 * (self.s1 - self.s3)
    }
}

/// Reduce a stress tensor to its principal stresses and von Mises stress.
///
/// The eigenvalues of the symmetric matrix are found in closed form with the
/// trigonometric solution of the characteristic cubic, so repeated roots are
/// handled without iteration.
///
/// # Errors
///
/// Returns [`InvalidTensorError`] when any component is not finite.
///
/// # Examples
/// ```
/// use fatiguex::{reduce, StressTensor};
///
/// let uniaxial = StressTensor::new(120.0, 0.0, 0.0, 0.0, 0.0, 0.0);
/// let principal = reduce(&uniaxial).expect("finite tensor");
/// assert!((principal.s1 - 120.0).abs() < 1.0e-9);
/// assert!((principal.von_mises - 120.0).abs() < 1.0e-9);
/// ```
pub fn reduce(tensor: &StressTensor) -> Result<PrincipalStressSet, InvalidTensorError> {
    tensor.validate()?;

    let mut principal = symmetric_eigenvalues(&tensor.to_matrix());
    principal.sort_by(|a, b| b.total_cmp(a));
    let [s1, s2, s3] = principal;

    let magnitude = s1.abs().max(s3.abs());
    let von_mises = if magnitude == 0.0 {
        0.0
    } else {
        let (u1, u2, u3) = (s1 / magnitude, s2 / magnitude, s3 / magnitude);
        magnitude * (0.5 * ((u1 - u2).powi(2) + (u2 - u3).powi(2) + (u3 - u1).powi(2))).sqrt()
    };

    Ok(PrincipalStressSet {
        s1,
        s2,
        s3,
        von_mises,
    })
}

/// Eigenvalues of a real symmetric 3×3 matrix, unsorted.
fn symmetric_eigenvalues(matrix: &Matrix3<f64>) -> [f64; 3] {
    if matrix[(0, 1)] == 0.0 && matrix[(0, 2)] == 0.0 && matrix[(1, 2)] == 0.0 {
        return [matrix[(0, 0)], matrix[(1, 1)], matrix[(2, 2)]];
    }

    // Solved on the matrix scaled to a unit largest component so that the
    // squared terms stay finite for any finite tensor.
    let magnitude = matrix.amax();
    let unit = matrix / magnitude;

    let mean = unit.trace() / 3.0;
    let off_diagonal = unit[(0, 1)].powi(2) + unit[(0, 2)].powi(2) + unit[(1, 2)].powi(2);
    let spread = (unit[(0, 0)] - mean).powi(2)
        + (unit[(1, 1)] - mean).powi(2)
        + (unit[(2, 2)] - mean).powi(2)
        + 2.0 * off_diagonal;
    let scale = (spread / 6.0).sqrt();

    let shifted = (unit - Matrix3::identity() * mean) / scale;
    // Rounding can push the half determinant just outside [-1, 1].
    let half_det = (shifted.determinant() / 2.0).clamp(-1.0, 1.0);
    let angle = half_det.acos() / 3.0;

    let largest = mean + 2.0 * scale * angle.cos();
    let smallest = mean + 2.0 * scale * (angle + 2.0 * PI / 3.0).cos();
    let middle = 3.0 * mean - largest - smallest;
    [largest * magnitude, middle * magnitude, smallest * magnitude]
}

/// Stress and displacement output for a single FEA node.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodalResult {
    /// Solver node identifier.
    pub node_id: u64,
    /// Nodal coordinates in millimetres.
    pub position: Point,
    /// Stress tensor in megapascals.
    pub stress: StressTensor,
    /// Nodal displacement in millimetres when exported.
    pub displacement: Option<Displacement>,
}

/// Nodal results for one applied load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoadCaseResult {
    /// Load case identifier, e.g. `lc2`.
    id: String,
    /// Nodal results in solver order.
    nodes: Vec<NodalResult>,
}

/// Extreme values found while reducing every node of a load case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoadCaseExtremes {
    /// Identifier of the reduced load case.
    pub load_case: String,
    /// Number of nodes reduced.
    pub node_count: usize,
    /// Largest von Mises stress in megapascals.
    pub max_von_mises: f64,
    /// Arithmetic mean of the nodal von Mises stresses.
    pub mean_von_mises: f64,
    /// Sample standard deviation of the nodal von Mises stresses, zero for a
    /// single node.
    pub std_von_mises: f64,
    /// Node carrying the largest von Mises stress.
    pub critical_node_id: u64,
    /// Position of the critical node.
    pub critical_position: Point,
    /// Largest maximum principal stress over all nodes.
    pub max_principal: f64,
    /// Smallest minimum principal stress over all nodes.
    pub min_principal: f64,
    /// Largest displacement magnitude, absent when no displacements were exported.
    pub max_displacement: Option<f64>,
    /// Position of the node with the largest displacement.
    pub max_displacement_location: Option<Point>,
}

/// Stress sampled at one point of a straight path through a load case.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathSample {
    /// Path parameter, 0 at the start and 1 at the end.
    pub position: f64,
    /// Interpolated sample location.
    pub location: Point,
    /// Node nearest to the sample location.
    pub node_id: u64,
    /// Stress tensor of that node.
    pub stress: StressTensor,
    /// Principal and von Mises stresses of that node.
    pub principal: PrincipalStressSet,
}

impl LoadCaseResult {
    /// Create a load case from its identifier and nodal results.
    pub fn new(id: impl Into<String>, nodes: Vec<NodalResult>) -> Self {
        Self {
            id: id.into(),
            nodes,
        }
    }

    /// Load case identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Nodal results in solver order.
    #[must_use]
    pub fn nodes(&self) -> &[NodalResult] {
        &self.nodes
    }

    /// Reduce every node, keeping the solver order.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidNode`] for the first node with a non-finite
    /// component.
    pub fn reduce_all(&self) -> Result<Vec<(u64, PrincipalStressSet)>, AnalysisError> {
        self.nodes
            .iter()
            .map(|node| {
                reduce(&node.stress)
                    .map(|principal| (node.node_id, principal))
                    .map_err(|source| AnalysisError::InvalidNode {
                        load_case: self.id.clone(),
                        node_id: node.node_id,
                        source,
                    })
            })
            .collect()
    }

    /// Reduce every node and collect the extreme values of the field.
    ///
    /// Ties on the maximum von Mises stress keep the first node in solver order.
    ///
    /// # Errors
    ///
    /// Returns [`DataShapeError::EmptyLoadCase`] when there are no nodes and
    /// [`AnalysisError::InvalidNode`] when a tensor is invalid.
    #[instrument(skip(self), fields(load_case = %self.id, nodes = self.nodes.len()))]
    pub fn extremes(&self) -> Result<LoadCaseExtremes, AnalysisError> {
        let Some(first) = self.nodes.first() else {
            return Err(DataShapeError::EmptyLoadCase {
                load_case: self.id.clone(),
            }
            .into());
        };
        let reduced = self.reduce_all()?;

        let mut max_von_mises = f64::NEG_INFINITY;
        let mut critical = first;
        let mut max_principal = f64::NEG_INFINITY;
        let mut min_principal = f64::INFINITY;
        let mut von_mises_sum = 0.0;
        for (node, (_, principal)) in self.nodes.iter().zip(&reduced) {
            if principal.von_mises > max_von_mises {
                max_von_mises = principal.von_mises;
                critical = node;
            }
            max_principal = max_principal.max(principal.s1);
            min_principal = min_principal.min(principal.s3);
            von_mises_sum += principal.von_mises;
        }

        let count = self.nodes.len() as f64;
        let mean_von_mises = von_mises_sum / count;
        let std_von_mises = if self.nodes.len() > 1 {
            let squares: f64 = reduced
                .iter()
                .map(|(_, principal)| (principal.von_mises - mean_von_mises).powi(2))
                .sum();
            (squares / (count - 1.0)).sqrt()
        } else {
            0.0
        };

        let displaced = self
            .nodes
            .iter()
            .filter_map(|node| {
                node.displacement
                    .map(|displacement| (displacement.magnitude(), node.position))
            })
            .reduce(|largest, candidate| if candidate.0 > largest.0 { candidate } else { largest });

        debug!(
            max_von_mises,
            critical_node = critical.node_id,
            max_principal,
            min_principal,
            "load case reduced"
        );

        Ok(LoadCaseExtremes {
            load_case: self.id.clone(),
            node_count: self.nodes.len(),
            max_von_mises,
            mean_von_mises,
            std_von_mises,
            critical_node_id: critical.node_id,
            critical_position: critical.position,
            max_principal,
            min_principal,
            max_displacement: displaced.map(|(magnitude, _)| magnitude),
            max_displacement_location: displaced.map(|(_, location)| location),
        })
    }

    /// Node closest to `target`, if one lies within `tolerance` millimetres.
    #[must_use]
    pub fn nearest_node(&self, target: Point, tolerance: f64) -> Option<&NodalResult> {
        self.nodes
            .iter()
            .map(|node| (node.position.distance_to(target), node))
            .filter(|(distance, _)| *distance <= tolerance)
            .min_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, node)| node)
    }

    /// Sample the stress field at `points` evenly spaced locations from `start`
    /// to `end`, each taken from the nearest node within `tolerance`.
    ///
    /// Locations with no node in reach are left out, so the path can hold fewer
    /// than `points` samples.
    ///
    /// # Errors
    ///
    /// Returns [`DataShapeError::TooFewPathPoints`] for fewer than two points and
    /// [`AnalysisError::InvalidNode`] when a sampled node has an invalid tensor.
    pub fn critical_path(
        &self,
        start: Point,
        end: Point,
        points: usize,
        tolerance: f64,
    ) -> Result<Vec<PathSample>, AnalysisError> {
        if points < 2 {
            return Err(DataShapeError::TooFewPathPoints { points }.into());
        }

        let last = (points - 1) as f64;
        let mut samples = Vec::with_capacity(points);
        for index in 0..points {
            let position = index as f64 / last;
            let location = Point::new(
                start.x + position * (end.x - start.x),
                start.y + position * (end.y - start.y),
                start.z + position * (end.z - start.z),
            );
            let Some(node) = self.nearest_node(location, tolerance) else {
                continue;
            };
            let principal = reduce(&node.stress).map_err(|source| AnalysisError::InvalidNode {
                load_case: self.id.clone(),
                node_id: node.node_id,
                source,
            })?;
            samples.push(PathSample {
                position,
                location,
                node_id: node.node_id,
                stress: node.stress,
                principal,
            });
        }
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::{displacement, point};

    fn node(node_id: u64, stress: StressTensor) -> NodalResult {
        NodalResult {
            node_id,
            position: point(node_id as f64, 0.0, 0.0),
            stress,
            displacement: None,
        }
    }

    #[test]
    fn isotropic_tensor_has_zero_von_mises() {
        let tensor = StressTensor::hydrostatic_state(-85.0);
        let principal = reduce(&tensor).expect("finite");
        assert_eq!(tensor.hydrostatic(), -85.0);
        assert_eq!(principal.von_mises, 0.0);
        assert_eq!(principal.s1, -85.0);
        assert_eq!(principal.s3, -85.0);
    }

    #[test]
    fn diagonal_tensor_is_sorted_descending() {
        let tensor = StressTensor::new(-20.0, 75.0, 10.0, 0.0, 0.0, 0.0);
        let principal = reduce(&tensor).expect("finite");
        assert_eq!((principal.s1, principal.s2, principal.s3), (75.0, 10.0, -20.0));
    }

    #[test]
    fn pure_shear_gives_symmetric_principals() {
        let tensor = StressTensor::new(0.0, 0.0, 0.0, 50.0, 0.0, 0.0);
        let principal = reduce(&tensor).expect("finite");
        assert_relative_eq!(principal.s1, 50.0, epsilon = 1.0e-9);
        assert_relative_eq!(principal.s2, 0.0, epsilon = 1.0e-9);
        assert_relative_eq!(principal.s3, -50.0, epsilon = 1.0e-9);
        assert_relative_eq!(principal.von_mises, 50.0 * 3.0_f64.sqrt(), epsilon = 1.0e-9);
        assert_relative_eq!(principal.tresca_shear(), 50.0, epsilon = 1.0e-9);
    }

    #[test]
    fn general_tensor_matches_known_eigenvalues() {
        // Eigenvalues of [[2,1,0],[1,2,0],[0,0,5]] are 5, 3 and 1.
        let tensor = StressTensor::new(2.0, 2.0, 5.0, 1.0, 0.0, 0.0);
        let principal = reduce(&tensor).expect("finite");
        assert_relative_eq!(principal.s1, 5.0, epsilon = 1.0e-12);
        assert_relative_eq!(principal.s2, 3.0, epsilon = 1.0e-12);
        assert_relative_eq!(principal.s3, 1.0, epsilon = 1.0e-12);
    }

    #[test]
    fn repeated_root_with_shear_is_stable() {
        // [[1,1,1],[1,1,1],[1,1,1]] has eigenvalues 3, 0, 0.
        let tensor = StressTensor::new(1.0, 1.0, 1.0, 1.0, 1.0, 1.0);
        let principal = reduce(&tensor).expect("finite");
        assert_relative_eq!(principal.s1, 3.0, epsilon = 1.0e-12);
        assert_relative_eq!(principal.s2, 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(principal.s3, 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(principal.von_mises, 3.0, epsilon = 1.0e-12);
    }

    #[test]
    fn large_finite_tensor_stays_ordered() {
        // [[1,1,0],[1,0,0],[0,0,0]] has eigenvalues (1 ± √5)/2 and 0.
        let scale = 1.0e160;
        let tensor = StressTensor::new(scale, 0.0, 0.0, scale, 0.0, 0.0);
        let principal = reduce(&tensor).expect("finite tensor");
        let root = 5.0_f64.sqrt();
        assert!(principal.s1.is_finite() && principal.s3.is_finite());
        assert!(principal.s1 >= principal.s2 && principal.s2 >= principal.s3);
        assert_relative_eq!(principal.s1, scale * (1.0 + root) / 2.0, max_relative = 1.0e-12);
        assert_relative_eq!(principal.s3, scale * (1.0 - root) / 2.0, max_relative = 1.0e-12);
        assert!(principal.s2.abs() < 1.0e-12 * scale);
        // Component form: sqrt(0.5 * (1 + 0 + 1) + 3) = 2.
        assert_relative_eq!(principal.von_mises, 2.0 * scale, max_relative = 1.0e-12);
    }

    #[test]
    fn non_finite_component_is_named() {
        let tensor = StressTensor::new(1.0, 2.0, 3.0, 0.0, f64::NAN, 0.0);
        let error = reduce(&tensor).expect_err("NaN rejected");
        match error {
            InvalidTensorError::NonFiniteComponent { component, value } => {
                assert_eq!(component, "syz");
                assert!(value.is_nan());
            }
        }

        let tensor = StressTensor::new(f64::INFINITY, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert!(matches!(
            reduce(&tensor),
            Err(InvalidTensorError::NonFiniteComponent { component: "sxx", .. })
        ));
    }

    #[test]
    fn extremes_locate_critical_node() {
        let mut nodes = vec![
            node(10, StressTensor::new(40.0, 0.0, 0.0, 0.0, 0.0, 0.0)),
            node(11, StressTensor::new(150.0, 20.0, 0.0, 10.0, 0.0, 0.0)),
            node(12, StressTensor::new(-90.0, 0.0, 0.0, 0.0, 0.0, 0.0)),
        ];
        nodes[0].displacement = Some(displacement(0.0, 0.3, 0.4));
        let load_case = LoadCaseResult::new("lc2", nodes);

        let extremes = load_case.extremes().expect("valid field");
        assert_eq!(extremes.critical_node_id, 11);
        assert_eq!(extremes.critical_position, point(11.0, 0.0, 0.0));
        assert_eq!(extremes.node_count, 3);
        assert_relative_eq!(extremes.min_principal, -90.0, epsilon = 1.0e-12);
        assert!(extremes.max_principal > 150.0);
        assert_relative_eq!(
            extremes.max_displacement.expect("one displacement exported"),
            0.5,
            epsilon = 1.0e-12
        );
        assert_eq!(extremes.max_displacement_location, Some(point(10.0, 0.0, 0.0)));
    }

    #[test]
    fn extremes_report_von_mises_spread() {
        let mut nodes = vec![
            node(1, StressTensor::new(10.0, 0.0, 0.0, 0.0, 0.0, 0.0)),
            node(2, StressTensor::new(20.0, 0.0, 0.0, 0.0, 0.0, 0.0)),
            node(3, StressTensor::new(-30.0, 0.0, 0.0, 0.0, 0.0, 0.0)),
        ];
        nodes[0].displacement = Some(displacement(0.1, 0.0, 0.0));
        nodes[2].displacement = Some(displacement(0.0, 0.0, -0.4));
        let extremes = LoadCaseResult::new("lc2", nodes).extremes().expect("valid field");

        // Von Mises values 10, 20 and 30: mean 20, sample deviation 10.
        assert_relative_eq!(extremes.mean_von_mises, 20.0, epsilon = 1.0e-12);
        assert_relative_eq!(extremes.std_von_mises, 10.0, epsilon = 1.0e-12);
        assert_eq!(extremes.max_displacement_location, Some(point(3.0, 0.0, 0.0)));

        let single = LoadCaseResult::new("lc1", vec![node(4, StressTensor::default())])
            .extremes()
            .expect("valid field");
        assert_eq!(single.std_von_mises, 0.0);
        assert!(single.max_displacement_location.is_none());
    }

    #[test]
    fn extremes_report_failing_node() {
        let load_case = LoadCaseResult::new(
            "lc1",
            vec![
                node(1, StressTensor::default()),
                node(7, StressTensor::new(0.0, f64::NAN, 0.0, 0.0, 0.0, 0.0)),
            ],
        );
        let error = load_case.extremes().expect_err("NaN rejected");
        match error {
            AnalysisError::InvalidNode {
                load_case,
                node_id,
                source: InvalidTensorError::NonFiniteComponent { component, .. },
            } => {
                assert_eq!(load_case, "lc1");
                assert_eq!(node_id, 7);
                assert_eq!(component, "syy");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_load_case_is_rejected() {
        let error = LoadCaseResult::new("lc3", Vec::new())
            .extremes()
            .expect_err("no nodes");
        assert_eq!(
            error,
            AnalysisError::DataShape(DataShapeError::EmptyLoadCase {
                load_case: "lc3".to_string()
            })
        );
    }

    #[test]
    fn nearest_node_respects_tolerance() {
        let load_case = LoadCaseResult::new(
            "lc1",
            vec![
                node(1, StressTensor::default()),
                node(2, StressTensor::default()),
            ],
        );
        let found = load_case
            .nearest_node(point(1.8, 0.0, 0.0), 0.5)
            .expect("node 2 within tolerance");
        assert_eq!(found.node_id, 2);
        assert!(load_case.nearest_node(point(5.0, 0.0, 0.0), 1.0).is_none());
    }

    #[test]
    fn critical_path_samples_nearest_nodes() {
        let load_case = LoadCaseResult::new(
            "lc2",
            vec![
                node(0, StressTensor::new(10.0, 0.0, 0.0, 0.0, 0.0, 0.0)),
                node(1, StressTensor::new(20.0, 0.0, 0.0, 0.0, 0.0, 0.0)),
                node(2, StressTensor::new(30.0, 0.0, 0.0, 0.0, 0.0, 0.0)),
                node(4, StressTensor::new(50.0, 0.0, 0.0, 0.0, 0.0, 0.0)),
            ],
        );

        let path = load_case
            .critical_path(point(0.0, 0.0, 0.0), point(4.0, 0.0, 0.0), 5, 0.25)
            .expect("valid path");
        // The location at x = 3 has no node within tolerance.
        let nodes: Vec<u64> = path.iter().map(|sample| sample.node_id).collect();
        assert_eq!(nodes, vec![0, 1, 2, 4]);
        assert_eq!(path[0].position, 0.0);
        assert_eq!(path[3].position, 1.0);
        assert_eq!(path[1].location, point(1.0, 0.0, 0.0));
        assert_relative_eq!(path[3].principal.von_mises, 50.0, epsilon = 1.0e-12);
        assert_eq!(path[2].stress.sxx, 30.0);
    }

    #[test]
    fn critical_path_needs_two_points() {
        let load_case = LoadCaseResult::new("lc1", vec![node(1, StressTensor::default())]);
        assert_eq!(
            load_case.critical_path(point(0.0, 0.0, 0.0), point(1.0, 0.0, 0.0), 1, 1.0),
            Err(AnalysisError::DataShape(DataShapeError::TooFewPathPoints { points: 1 }))
        );
    }
}

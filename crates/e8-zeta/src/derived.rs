//! # Derived Constants
//!
//! Closed-form combinations of the E8 constant table. Every rational input
//! (248/3875, 5/3, 8/5) is divided once at working precision; nothing is
//! typed as a decimal literal.
//!
//! ```text
//! φ_E8    = (1 + √5)/2 · √(8/5)
//! α_grav  = 1/(8π) · (248/3875)² · (1 + (5/3)/(24π²))
//! M_P/M_EW ≈ φ_E8^63 · √(α_grav / 2π)
//! ```

use serde::Serialize;

use e8_core::constants::{
    zeta_convergence_bound, ANOMALY_COEFFICIENT, E8_ADJOINT_DIM, E8_REP_3875, E8_ROOTS,
    PLANCK_SCALE_EXPONENT,
};
use e8_core::{Arith, BigFloat, E8Result};

use crate::spectral::SpectralZeta;

/// One fixed input of the derived formulas and where it comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterProvenance {
    pub parameter: &'static str,
    pub value: String,
    pub source: &'static str,
}

/// The derived scalars, rendered at working precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedConstants {
    pub phi_e8: String,
    pub gravitational_coupling: String,
    pub planck_scale_ratio: String,
    pub provenance: Vec<ParameterProvenance>,
}

impl SpectralZeta {
    /// Golden-ratio scale `(1 + √5)/2 · √(8/5)`.
    ///
    /// # Errors
    ///
    /// Fails only if the arithmetic session cannot be opened.
    pub fn phi_e8(&self) -> E8Result<BigFloat> {
        let ar = self.context().session()?;
        phi_in(&ar)
    }

    /// `α_grav = 1/(8π) · (248/3875)² · (1 + (5/3)/(24π²))`.
    ///
    /// # Errors
    ///
    /// Fails only if the arithmetic session cannot be opened.
    pub fn gravitational_coupling(&self) -> E8Result<BigFloat> {
        let mut ar = self.context().session()?;
        coupling_in(&mut ar)
    }

    /// `φ_E8^63 · √(α_grav / 2π)`.
    ///
    /// # Errors
    ///
    /// Fails only if the arithmetic session cannot be opened.
    pub fn planck_scale_ratio(&self) -> E8Result<BigFloat> {
        let mut ar = self.context().session()?;
        let phi = phi_in(&ar)?;
        let alpha = coupling_in(&mut ar)?;
        let two_pi = ar.tau();
        let root = ar.sqrt(&ar.div(&alpha, &two_pi)?);
        Ok(ar.mul(&ar.powi(&phi, PLANCK_SCALE_EXPONENT), &root))
    }

    /// Every fixed input of the derived formulas and the evaluators, with
    /// the structural property it is taken from.
    pub fn parameter_provenance(&self) -> Vec<ParameterProvenance> {
        let (num, den) = ANOMALY_COEFFICIENT;
        vec![
            ParameterProvenance {
                parameter: "phi_e8",
                value: "(1 + sqrt 5)/2 * sqrt(8/5)".to_string(),
                source: "golden ratio scaled by the E8 root-system geometry",
            },
            ParameterProvenance {
                parameter: "exponent",
                value: PLANCK_SCALE_EXPONENT.to_string(),
                source: "power of the golden-ratio scale in the Planck-ratio estimate",
            },
            ParameterProvenance {
                parameter: "alpha_grav",
                value: format!("{E8_ADJOINT_DIM}/{E8_REP_3875}"),
                source: "ratio of the adjoint and 3875 representation dimensions",
            },
            ParameterProvenance {
                parameter: "convergence",
                value: zeta_convergence_bound().to_string(),
                source: "E8 center density 2^-4 plus the root count",
            },
            ParameterProvenance {
                parameter: "multiplicity",
                value: format!("{E8_ROOTS} * sigma_3(n)"),
                source: "coefficients of the E8 theta series",
            },
            ParameterProvenance {
                parameter: "functional_equation",
                value: "s <-> 8 - s".to_string(),
                source: "weight-4 modularity of the E8 theta series",
            },
            ParameterProvenance {
                parameter: "anomaly_coefficient",
                value: format!("{num}/{den}"),
                source: "E8 branching to the Standard Model gauge group",
            },
        ]
    }

    /// All derived scalars plus provenance.
    ///
    /// # Errors
    ///
    /// Fails only if the arithmetic session cannot be opened.
    pub fn derived_constants(&self) -> E8Result<DerivedConstants> {
        Ok(DerivedConstants {
            phi_e8: self.phi_e8()?.to_string(),
            gravitational_coupling: self.gravitational_coupling()?.to_string(),
            planck_scale_ratio: self.planck_scale_ratio()?.to_string(),
            provenance: self.parameter_provenance(),
        })
    }
}

fn phi_in(ar: &Arith) -> E8Result<BigFloat> {
    let golden = ar.div(&ar.add(&ar.one(), &ar.sqrt(&ar.int(5))), &ar.int(2))?;
    let scale = ar.sqrt(&ar.ratio(8, 5)?);
    Ok(ar.mul(&golden, &scale))
}

fn coupling_in(ar: &mut Arith) -> E8Result<BigFloat> {
    let pi = ar.pi();
    let (num, den) = ANOMALY_COEFFICIENT;
    let ratio = ar.ratio(i64::from(E8_ADJOINT_DIM), i64::from(E8_REP_3875))?;
    let anomaly = ar.ratio(num, den)?;
    let pi_sq = ar.mul(&pi, &pi);
    let correction = ar.add(
        &ar.one(),
        &ar.div(&anomaly, &ar.mul(&ar.int(24), &pi_sq))?,
    );
    let prefactor = ar.div(&ar.one(), &ar.mul(&ar.int(8), &pi))?;
    Ok(ar.mul(&ar.mul(&prefactor, &ar.mul(&ratio, &ratio)), &correction))
}

#[cfg(test)]
mod tests {
    use e8_core::{less_than, NumericContext};

    use super::*;

    fn zeta() -> SpectralZeta {
        SpectralZeta::new(NumericContext::with_digits(30).unwrap())
    }

    fn assert_rel(actual: &BigFloat, expected: f64, tol: f64) {
        let ar = zeta().context().session().unwrap();
        let expected = ar.float(expected);
        let rel = ar.div(&ar.sub(actual, &expected).abs(), &expected).unwrap();
        assert!(less_than(&rel, &ar.float(tol)), "got {actual}");
    }

    #[test]
    fn phi_matches_double_precision_formula() {
        let expected = (1.0 + 5f64.sqrt()) / 2.0 * (8.0f64 / 5.0).sqrt();
        assert_rel(&zeta().phi_e8().unwrap(), expected, 1e-14);
    }

    #[test]
    fn gravitational_coupling_matches_double_precision_formula() {
        let pi = std::f64::consts::PI;
        let ratio = 248.0f64 / 3875.0;
        let expected = 1.0 / (8.0 * pi) * ratio * ratio * (1.0 + (5.0 / 3.0) / (24.0 * pi * pi));
        assert_rel(&zeta().gravitational_coupling().unwrap(), expected, 1e-13);
    }

    #[test]
    fn planck_ratio_matches_double_precision_formula() {
        let pi = std::f64::consts::PI;
        let phi = (1.0 + 5f64.sqrt()) / 2.0 * (8.0f64 / 5.0).sqrt();
        let ratio = 248.0f64 / 3875.0;
        let alpha = 1.0 / (8.0 * pi) * ratio * ratio * (1.0 + (5.0 / 3.0) / (24.0 * pi * pi));
        let expected = phi.powi(63) * (alpha / (2.0 * pi)).sqrt();
        assert_rel(&zeta().planck_scale_ratio().unwrap(), expected, 1e-11);
    }

    #[test]
    fn provenance_lists_every_fixed_input() {
        let names: Vec<_> = zeta()
            .parameter_provenance()
            .iter()
            .map(|p| p.parameter)
            .collect();
        for expected in ["phi_e8", "alpha_grav", "convergence", "anomaly_coefficient"] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn derived_constants_serialize() {
        let json = serde_json::to_value(zeta().derived_constants().unwrap()).unwrap();
        assert!(!json["phi_e8"].as_str().unwrap().is_empty());
        assert_eq!(json["provenance"].as_array().unwrap().len(), 7);
    }
}

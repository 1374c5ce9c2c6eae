// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Arithmetic backends.
//!
//! A [`DlogGroup`](crate::DlogGroup) never implements modular or point
//! arithmetic itself; it orchestrates calls to an [`ArithmeticBackend`]
//! that supplies the raw single-operation primitives:
//!
//! - multiply two elements (`modMul` for Zp*, point addition for EC)
//! - invert an element (`modInverse` for Zp*, point negation for EC)
//! - raise one element to one exponent (`modExp` / scalar multiplication)
//! - test set membership (Euler criterion / curve equation)
//! - sample a random member
//!
//! The backend is injected when the group is constructed, so alternative
//! arithmetic libraries can be swapped in without touching the group layer.
//! [`NumBackend`] is the built-in implementation on top of `num-bigint`.

pub mod f2m;
pub mod fp;
pub mod zp;

use num_bigint::BigUint;

use crate::element::ElementKind;
use crate::errors::DlogError;
use crate::params::GroupParameters;

use f2m::{Curve2m, Field2m};
use fp::CurveFp;

/// Raw arithmetic primitives for one family of group parameters.
///
/// Implementations operate on [`ElementKind`] values; group-instance
/// bookkeeping (tags, identities, the uninitialized state) stays in the
/// group layer.
pub trait ArithmeticBackend: Send + Sync {
    /// The group operation.
    fn multiply(
        &self,
        params: &GroupParameters,
        e1: &ElementKind,
        e2: &ElementKind,
    ) -> Result<ElementKind, DlogError>;

    /// The group inverse.
    fn invert(
        &self,
        params: &GroupParameters,
        element: &ElementKind,
    ) -> Result<ElementKind, DlogError>;

    /// Single-base exponentiation.
    fn exponentiate(
        &self,
        params: &GroupParameters,
        base: &ElementKind,
        exponent: &BigUint,
    ) -> Result<ElementKind, DlogError>;

    /// Set-membership test against the group's defining equation.
    fn is_member(
        &self,
        params: &GroupParameters,
        candidate: &ElementKind,
    ) -> Result<bool, DlogError>;

    /// Uniform sampling of a group member.
    fn random_element(&self, params: &GroupParameters) -> Result<ElementKind, DlogError>;
}

/// The built-in backend over `num-bigint` arithmetic.
#[derive(Debug, Clone, Default)]
pub struct NumBackend;

impl NumBackend {
    pub fn new() -> Self {
        NumBackend
    }
}

fn zp_value(element: &ElementKind) -> Result<&BigUint, DlogError> {
    match element {
        ElementKind::Zp(value) => Ok(value),
        _ => Err(DlogError::TypeMismatch),
    }
}

fn f2m_curve(params: &GroupParameters) -> Result<Curve2m, DlogError> {
    match params {
        GroupParameters::ECF2m { m, basis, a, b, .. } => Ok(Curve2m::new(
            Field2m::new(*m, basis.reduction_polynomial(*m)),
            a.clone(),
            b.clone(),
        )),
        _ => Err(DlogError::TypeMismatch),
    }
}

impl ArithmeticBackend for NumBackend {
    fn multiply(
        &self,
        params: &GroupParameters,
        e1: &ElementKind,
        e2: &ElementKind,
    ) -> Result<ElementKind, DlogError> {
        match params {
            GroupParameters::Zp { p, .. } => Ok(ElementKind::Zp(zp::multiply(
                p,
                zp_value(e1)?,
                zp_value(e2)?,
            ))),
            GroupParameters::ECFp { p, a, b, .. } => CurveFp::new(p, a, b).add(e1, e2),
            GroupParameters::ECF2m { .. } => f2m_curve(params)?.add(e1, e2),
        }
    }

    fn invert(
        &self,
        params: &GroupParameters,
        element: &ElementKind,
    ) -> Result<ElementKind, DlogError> {
        match params {
            GroupParameters::Zp { p, .. } => {
                Ok(ElementKind::Zp(zp::invert(p, zp_value(element)?)?))
            }
            GroupParameters::ECFp { p, a, b, .. } => CurveFp::new(p, a, b).negate(element),
            GroupParameters::ECF2m { .. } => f2m_curve(params)?.negate(element),
        }
    }

    fn exponentiate(
        &self,
        params: &GroupParameters,
        base: &ElementKind,
        exponent: &BigUint,
    ) -> Result<ElementKind, DlogError> {
        match params {
            GroupParameters::Zp { p, .. } => Ok(ElementKind::Zp(zp::exponentiate(
                p,
                zp_value(base)?,
                exponent,
            ))),
            GroupParameters::ECFp { p, a, b, .. } => {
                CurveFp::new(p, a, b).scalar_multiply(base, exponent)
            }
            GroupParameters::ECF2m { .. } => f2m_curve(params)?.scalar_multiply(base, exponent),
        }
    }

    fn is_member(
        &self,
        params: &GroupParameters,
        candidate: &ElementKind,
    ) -> Result<bool, DlogError> {
        match params {
            GroupParameters::Zp { p, q, .. } => {
                Ok(zp::is_member(p, q, zp_value(candidate)?))
            }
            GroupParameters::ECFp { p, a, b, .. } => match candidate {
                ElementKind::Infinity => Ok(true),
                ElementKind::Point { x, y } => Ok(CurveFp::new(p, a, b).is_on_curve(x, y)),
                ElementKind::Zp(_) => Err(DlogError::TypeMismatch),
            },
            GroupParameters::ECF2m { .. } => match candidate {
                ElementKind::Infinity => Ok(true),
                ElementKind::Point { x, y } => Ok(f2m_curve(params)?.is_on_curve(x, y)),
                ElementKind::Zp(_) => Err(DlogError::TypeMismatch),
            },
        }
    }

    fn random_element(&self, params: &GroupParameters) -> Result<ElementKind, DlogError> {
        match params {
            GroupParameters::Zp { p, .. } => Ok(ElementKind::Zp(zp::random_element(p)?)),
            GroupParameters::ECFp { p, a, b, .. } => CurveFp::new(p, a, b).random_point(),
            GroupParameters::ECF2m { .. } => f2m_curve(params)?.random_point(),
        }
    }
}

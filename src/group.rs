// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! The discrete logarithm group abstraction.
//!
//! A [`DlogGroup`] owns a validated [`GroupParameters`] instance, a
//! distinguished generator and the group order, and exposes one uniform
//! operation set over safe-prime Zp* groups and elliptic-curve groups.
//! Single-element primitives are delegated to the injected
//! [`ArithmeticBackend`]; the multi-step exponentiation optimizations are
//! performed by the group itself.
//!
//! # Lifecycle
//!
//! A group is constructed uninitialized and becomes usable after a
//! successful [`init`](DlogGroup::init) (or
//! [`init_named_curve`](DlogGroup::init_named_curve)); every operation
//! before that fails with [`DlogError::Uninitialized`].
//!
//! # Threading
//!
//! Elements are immutable and freely shareable. The fixed-base
//! exponentiation cache is the one piece of shared mutable state; it is
//! lock-protected internally, so a `&DlogGroup` can be used from several
//! threads without external synchronization.

use num_bigint::BigUint;
use num_primes::Verification;
use num_traits::identities::{One, Zero};
use std::sync::Mutex;

use crate::backend::{ArithmeticBackend, NumBackend};
use crate::curves;
use crate::element::{next_id, ElementKind, GroupElement};
use crate::errors::DlogError;
use crate::exponentiation::{
    identity_kind, simultaneous_multiple_exponentiations, FixedBaseCache,
};
use crate::params::GroupParameters;

struct GroupState {
    group_id: u64,
    params: GroupParameters,
    generator: GroupElement,
    curve_name: Option<String>,
}

pub struct DlogGroup {
    backend: Box<dyn ArithmeticBackend>,
    state: Option<GroupState>,
    cache: Mutex<FixedBaseCache>,
}

impl DlogGroup {
    /// Creates an uninitialized group over the given backend.
    pub fn new(backend: Box<dyn ArithmeticBackend>) -> Self {
        DlogGroup {
            backend,
            state: None,
            cache: Mutex::new(FixedBaseCache::new()),
        }
    }

    /// Creates an uninitialized group over the built-in `num-bigint`
    /// backend.
    pub fn with_num_backend() -> Self {
        DlogGroup::new(Box::new(NumBackend::new()))
    }

    /// Validates the parameters and makes the group usable.
    ///
    /// Re-initializing an already usable group replaces its parameters and
    /// discards every cached power table; elements created under the old
    /// parameters no longer belong to this group.
    pub fn init(&mut self, params: GroupParameters) -> Result<(), DlogError> {
        self.init_inner(params, None)
    }

    /// Initializes the group with a NIST recommended curve by name.
    pub fn init_named_curve(&mut self, name: &str) -> Result<(), DlogError> {
        let params = curves::recommended_parameters(name)?;
        self.init_inner(params, Some(name.to_string()))
    }

    fn init_inner(
        &mut self,
        params: GroupParameters,
        curve_name: Option<String>,
    ) -> Result<(), DlogError> {
        let generator_kind = validate_params(&params, self.backend.as_ref())?;

        let group_id = next_id();
        let generator = GroupElement::new(group_id, generator_kind);
        self.state = Some(GroupState {
            group_id,
            params,
            generator,
            curve_name,
        });
        *self.lock_cache() = FixedBaseCache::new();
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    fn state(&self) -> Result<&GroupState, DlogError> {
        self.state.as_ref().ok_or(DlogError::Uninitialized)
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, FixedBaseCache> {
        match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Checks that the element belongs to this group instance and returns
    /// its value.
    fn checked_kind<'e>(
        &self,
        state: &GroupState,
        element: &'e GroupElement,
    ) -> Result<&'e ElementKind, DlogError> {
        if element.group_id() != state.group_id {
            return Err(DlogError::TypeMismatch);
        }
        Ok(element.kind())
    }

    /// The generator of the group.
    pub fn generator(&self) -> Result<GroupElement, DlogError> {
        Ok(self.state()?.generator.clone())
    }

    pub fn group_params(&self) -> Result<&GroupParameters, DlogError> {
        Ok(&self.state()?.params)
    }

    /// The order of the group: `q` for Zp*, the subgroup order for
    /// elliptic curves.
    pub fn order(&self) -> Result<&BigUint, DlogError> {
        Ok(self.state()?.params.order())
    }

    pub fn group_type(&self) -> Result<&'static str, DlogError> {
        Ok(self.state()?.params.group_type())
    }

    /// The identity element: the residue 1 for Zp*, the point at infinity
    /// for elliptic curves.
    pub fn identity(&self) -> Result<GroupElement, DlogError> {
        let state = self.state()?;
        Ok(GroupElement::new(
            state.group_id,
            identity_kind(&state.params),
        ))
    }

    /// Membership test against the group's defining equation.
    pub fn is_member(&self, element: &GroupElement) -> Result<bool, DlogError> {
        let state = self.state()?;
        let kind = self.checked_kind(state, element)?;
        self.backend.is_member(&state.params, kind)
    }

    /// Probabilistic primality test on the group order.
    pub fn is_prime_order(&self) -> Result<bool, DlogError> {
        Ok(Verification::is_prime(self.order()?))
    }

    /// Whether the order exceeds `2^bits`.
    pub fn is_order_greater_than(&self, bits: usize) -> Result<bool, DlogError> {
        Ok(*self.order()? > (BigUint::one() << bits))
    }

    /// Whether the configured generator actually generates the
    /// prime-order subgroup: it is not the identity and its order divides
    /// the group order.
    pub fn is_generator(&self) -> Result<bool, DlogError> {
        let state = self.state()?;
        let generator = state.generator.kind();
        if *generator == identity_kind(&state.params) {
            return Ok(false);
        }
        let raised = self
            .backend
            .exponentiate(&state.params, generator, state.params.order())?;
        Ok(raised == identity_kind(&state.params))
    }

    /// Re-checks the structural validity of the group.
    ///
    /// For a group initialized from a named curve, the stored parameters
    /// and generator coordinates are compared byte-for-byte against the
    /// published constants; any deviation fails the check.
    pub fn validate_group(&self) -> Result<bool, DlogError> {
        let state = self.state()?;
        if let Some(name) = &state.curve_name {
            let published = curves::recommended_parameters(name)?;
            if published != state.params {
                log::warn!("group parameters deviate from the {} constants", name);
                return Ok(false);
            }
            return Ok(true);
        }
        match &state.params {
            GroupParameters::Zp { p, q, .. } => Ok(Verification::is_prime(q)
                && Verification::is_prime(p)
                && *p == q * 2_u32 + BigUint::one()
                && self.is_generator()?),
            GroupParameters::ECFp { .. } | GroupParameters::ECF2m { .. } => {
                Ok(self.is_prime_order()? && self.is_generator()?)
            }
        }
    }

    /// The group inverse of an element.
    pub fn element_inverse(&self, element: &GroupElement) -> Result<GroupElement, DlogError> {
        let state = self.state()?;
        let kind = self.checked_kind(state, element)?;
        let inverted = self.backend.invert(&state.params, kind)?;
        Ok(GroupElement::new(state.group_id, inverted))
    }

    /// The group operation.
    pub fn mul(
        &self,
        e1: &GroupElement,
        e2: &GroupElement,
    ) -> Result<GroupElement, DlogError> {
        let state = self.state()?;
        let k1 = self.checked_kind(state, e1)?;
        let k2 = self.checked_kind(state, e2)?;
        let product = self.backend.multiply(&state.params, k1, k2)?;
        Ok(GroupElement::new(state.group_id, product))
    }

    /// Raises `base` to `exponent` with a single backend call.
    pub fn exp(
        &self,
        base: &GroupElement,
        exponent: &BigUint,
    ) -> Result<GroupElement, DlogError> {
        let state = self.state()?;
        let kind = self.checked_kind(state, base)?;
        let raised = self.backend.exponentiate(&state.params, kind, exponent)?;
        Ok(GroupElement::new(state.group_id, raised))
    }

    /// Samples a uniformly random member of the group.
    pub fn random_element(&self) -> Result<GroupElement, DlogError> {
        let state = self.state()?;
        let kind = self.backend.random_element(&state.params)?;
        Ok(GroupElement::new(state.group_id, kind))
    }

    /// Computes `∏ basesᵢ ^ exponentsᵢ` with the shared square-and-multiply
    /// pass of the simultaneous multi-exponentiation algorithm.
    ///
    /// Exponents must lie in `[0, order)`. The batch size is limited to
    /// [`MAX_SIMULTANEOUS_BASES`](crate::exponentiation::MAX_SIMULTANEOUS_BASES)
    /// because the precomputation table has `2^n` entries.
    pub fn simultaneous_multiple_exponentiations(
        &self,
        bases: &[GroupElement],
        exponents: &[BigUint],
    ) -> Result<GroupElement, DlogError> {
        let state = self.state()?;
        if bases.len() != exponents.len() {
            return Err(DlogError::InvalidArgument(
                "bases and exponents differ in length".into(),
            ));
        }
        let order = state.params.order();
        for exponent in exponents {
            if exponent >= order {
                return Err(DlogError::InvalidArgument(
                    "exponent out of range".into(),
                ));
            }
        }
        let kinds: Vec<&ElementKind> = bases
            .iter()
            .map(|base| self.checked_kind(state, base))
            .collect::<Result<_, _>>()?;
        let result = simultaneous_multiple_exponentiations(
            self.backend.as_ref(),
            &state.params,
            &kinds,
            exponents,
        )?;
        Ok(GroupElement::new(state.group_id, result))
    }

    /// Raises `base` to `exponent`, reusing this group's cached powers of
    /// the base.
    ///
    /// The cache is keyed by the element *instance*, persists for the
    /// lifetime of the group and only ever grows; a one-off exponentiation
    /// of a base used nowhere else should call [`exp`](DlogGroup::exp)
    /// instead to avoid needless cache growth.
    pub fn exp_with_precomputed_values(
        &self,
        base: &GroupElement,
        exponent: &BigUint,
    ) -> Result<GroupElement, DlogError> {
        let state = self.state()?;
        let kind = self.checked_kind(state, base)?;
        let result = self.lock_cache().exponentiate(
            self.backend.as_ref(),
            &state.params,
            base.element_id(),
            kind,
            exponent,
        )?;
        Ok(GroupElement::new(state.group_id, result))
    }

    /// Creates a Zp* element from a residue value.
    ///
    /// The value must lie in `[1, p-1]`; with `check_membership` the Euler
    /// criterion is verified as well.
    pub fn zp_element(
        &self,
        value: BigUint,
        check_membership: bool,
    ) -> Result<GroupElement, DlogError> {
        let state = self.state()?;
        let (p, q) = match &state.params {
            GroupParameters::Zp { p, q, .. } => (p, q),
            _ => return Err(DlogError::TypeMismatch),
        };
        if value.is_zero() || value >= *p {
            return Err(DlogError::InvalidArgument("element out of range".into()));
        }
        if check_membership && value.modpow(q, p) != BigUint::one() {
            return Err(DlogError::InvalidArgument(
                "value is not a member of the group".into(),
            ));
        }
        Ok(GroupElement::new(state.group_id, ElementKind::Zp(value)))
    }

    /// Creates an elliptic-curve element from affine coordinates, checking
    /// the curve equation.
    pub fn ec_point(&self, x: BigUint, y: BigUint) -> Result<GroupElement, DlogError> {
        let state = self.state()?;
        if matches!(state.params, GroupParameters::Zp { .. }) {
            return Err(DlogError::TypeMismatch);
        }
        let kind = ElementKind::Point { x, y };
        if !self.backend.is_member(&state.params, &kind)? {
            return Err(DlogError::InvalidArgument(
                "x, y values are not a point on this curve".into(),
            ));
        }
        Ok(GroupElement::new(state.group_id, kind))
    }

    /// Field element byte width used by the point encoding.
    fn coordinate_len(params: &GroupParameters) -> usize {
        match params {
            GroupParameters::Zp { p, .. } => (p.bits() + 7) / 8,
            GroupParameters::ECFp { p, .. } => (p.bits() + 7) / 8,
            GroupParameters::ECF2m { m, .. } => (*m as usize + 7) / 8,
        }
    }

    /// Encodes an element as bytes.
    ///
    /// Zp* residues use the minimal-length big-endian unsigned encoding.
    /// Points use the uncompressed form `0x04 ‖ X ‖ Y` with both
    /// coordinates zero-padded to the field width; the point at infinity
    /// is the single byte `0x00`. The encoding round-trips exactly through
    /// [`bytes_to_element`](DlogGroup::bytes_to_element).
    pub fn element_to_bytes(&self, element: &GroupElement) -> Result<Vec<u8>, DlogError> {
        let state = self.state()?;
        let kind = self.checked_kind(state, element)?;
        match kind {
            ElementKind::Zp(value) => Ok(value.to_bytes_be()),
            ElementKind::Infinity => Ok(vec![0x00]),
            ElementKind::Point { x, y } => {
                let len = Self::coordinate_len(&state.params);
                let mut bytes = Vec::with_capacity(1 + 2 * len);
                bytes.push(0x04);
                bytes.extend(pad_left(&x.to_bytes_be(), len));
                bytes.extend(pad_left(&y.to_bytes_be(), len));
                Ok(bytes)
            }
        }
    }

    /// Decodes an element encoded by
    /// [`element_to_bytes`](DlogGroup::element_to_bytes), validating
    /// membership.
    pub fn bytes_to_element(&self, bytes: &[u8]) -> Result<GroupElement, DlogError> {
        let state = self.state()?;
        match &state.params {
            GroupParameters::Zp { .. } => {
                self.zp_element(BigUint::from_bytes_be(bytes), true)
            }
            GroupParameters::ECFp { .. } | GroupParameters::ECF2m { .. } => {
                if bytes == [0x00] {
                    return Ok(GroupElement::new(state.group_id, ElementKind::Infinity));
                }
                let len = Self::coordinate_len(&state.params);
                if bytes.len() != 1 + 2 * len || bytes[0] != 0x04 {
                    return Err(DlogError::InvalidArgument(
                        "malformed point encoding".into(),
                    ));
                }
                let x = BigUint::from_bytes_be(&bytes[1..1 + len]);
                let y = BigUint::from_bytes_be(&bytes[1 + len..]);
                self.ec_point(x, y)
            }
        }
    }
}

impl Default for DlogGroup {
    fn default() -> Self {
        DlogGroup::with_num_backend()
    }
}

fn pad_left(bytes: &[u8], len: usize) -> Vec<u8> {
    let mut padded = vec![0_u8; len.saturating_sub(bytes.len())];
    padded.extend_from_slice(bytes);
    padded
}

/// Structural validation run at init time. Returns the generator value on
/// success.
fn validate_params(
    params: &GroupParameters,
    backend: &dyn ArithmeticBackend,
) -> Result<ElementKind, DlogError> {
    match params {
        GroupParameters::Zp { p, q, generator } => {
            if q * 2_u32 + BigUint::one() != *p {
                return Err(DlogError::InvalidGroupParameters(
                    "p must be equal to 2q+1".into(),
                ));
            }
            if !Verification::is_prime(p) {
                return Err(DlogError::InvalidGroupParameters("p must be a prime".into()));
            }
            if !Verification::is_prime(q) {
                return Err(DlogError::InvalidGroupParameters("q must be a prime".into()));
            }
            if *generator <= BigUint::one() || generator >= p {
                return Err(DlogError::InvalidGroupParameters(
                    "generator value is not valid".into(),
                ));
            }
            if generator.modpow(q, p) != BigUint::one() {
                return Err(DlogError::InvalidGroupParameters(
                    "generator value is not valid".into(),
                ));
            }
            Ok(ElementKind::Zp(generator.clone()))
        }
        GroupParameters::ECFp { p, a, b, gx, gy, .. } => {
            if !Verification::is_prime(p) {
                return Err(DlogError::InvalidGroupParameters("p must be a prime".into()));
            }
            if a >= p || b >= p {
                return Err(DlogError::InvalidGroupParameters(
                    "curve coefficients must be reduced modulo p".into(),
                ));
            }
            let generator = ElementKind::Point {
                x: gx.clone(),
                y: gy.clone(),
            };
            if !backend.is_member(params, &generator)? {
                return Err(DlogError::InvalidGroupParameters(
                    "generator is not a point on the curve".into(),
                ));
            }
            Ok(generator)
        }
        GroupParameters::ECF2m { m, gx, gy, .. } => {
            // random sampling solves the curve equation with the
            // half-trace, which exists for odd extension degrees
            if m % 2 == 0 {
                return Err(DlogError::InvalidGroupParameters(
                    "extension degree must be odd".into(),
                ));
            }
            let generator = ElementKind::Point {
                x: gx.clone(),
                y: gy.clone(),
            };
            if !backend.is_member(params, &generator)? {
                return Err(DlogError::InvalidGroupParameters(
                    "generator is not a point on the curve".into(),
                ));
            }
            Ok(generator)
        }
    }
}

// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Residue arithmetic for safe-prime Zp* groups.
//!
//! The group is the subgroup of quadratic residues modulo a safe prime
//! `p = 2q + 1`. Membership is the Euler criterion `x^q ≡ 1 (mod p)`;
//! random sampling squares a uniform residue, which always lands in the
//! subgroup.

use num_bigint::{BigUint, RandBigInt};
use num_traits::identities::{One, Zero};

use crate::errors::DlogError;
use crate::util::Util;

pub(crate) fn multiply(p: &BigUint, a: &BigUint, b: &BigUint) -> BigUint {
    (a * b) % p
}

pub(crate) fn exponentiate(p: &BigUint, base: &BigUint, exponent: &BigUint) -> BigUint {
    base.modpow(exponent, p)
}

pub(crate) fn invert(p: &BigUint, a: &BigUint) -> Result<BigUint, DlogError> {
    Util::mod_inverse_uint(a, p)
        .ok_or_else(|| DlogError::InvalidArgument("element is not invertible".into()))
}

/// Euler criterion membership test: `1 <= x <= p-1` and `x^q ≡ 1 (mod p)`.
pub(crate) fn is_member(p: &BigUint, q: &BigUint, x: &BigUint) -> bool {
    if x.is_zero() || x >= p {
        return false;
    }
    x.modpow(q, p) == BigUint::one()
}

/// Samples a random member of the quadratic-residue subgroup.
///
/// Draws `bitlength(p)`-bit candidates until one falls in `[1, p)`, then
/// squares it modulo `p`. The retry bound is `2 * bitlength(p)`; running it
/// out is a degenerate condition that is logged and surfaced as
/// [`DlogError::SamplingExhausted`].
pub(crate) fn random_element(p: &BigUint) -> Result<BigUint, DlogError> {
    let bits = p.bits();
    let mut rng = rand::thread_rng();

    for _ in 0..2 * bits {
        let x = rng.gen_biguint(bits);
        if !x.is_zero() && x < *p {
            return Ok((&x * &x) % p);
        }
    }
    log::warn!("couldn't find a random element in {} attempts", 2 * bits);
    Err(DlogError::SamplingExhausted)
}

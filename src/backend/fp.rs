// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Affine point arithmetic for elliptic curves over prime fields.
//!
//! The curve is `y² = x³ + a·x + b` over F_p. All formulas are the plain
//! affine chord-and-tangent rules; the point at infinity is represented by
//! [`ElementKind::Infinity`].

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::identities::{One, Zero};

use crate::element::ElementKind;
use crate::errors::DlogError;
use crate::util::Util;

pub(crate) struct CurveFp<'a> {
    pub p: &'a BigUint,
    pub a: &'a BigUint,
    pub b: &'a BigUint,
}

/// `(lhs - rhs) mod p` for operands already reduced modulo `p`.
fn mod_sub(lhs: &BigUint, rhs: &BigUint, p: &BigUint) -> BigUint {
    ((lhs + p) - rhs) % p
}

impl<'a> CurveFp<'a> {
    pub fn new(p: &'a BigUint, a: &'a BigUint, b: &'a BigUint) -> Self {
        CurveFp { p, a, b }
    }

    /// Evaluates the curve equation at `(x, y)`.
    pub fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        if x >= self.p || y >= self.p {
            return false;
        }
        let y2 = (y * y) % self.p;
        y2 == self.rhs(x)
    }

    /// `x³ + a·x + b mod p`.
    fn rhs(&self, x: &BigUint) -> BigUint {
        let x3 = (x * x % self.p) * x % self.p;
        (x3 + self.a * x % self.p + self.b) % self.p
    }

    fn expect_point<'e>(
        &self,
        element: &'e ElementKind,
    ) -> Result<Option<(&'e BigUint, &'e BigUint)>, DlogError> {
        match element {
            ElementKind::Infinity => Ok(None),
            ElementKind::Point { x, y } => Ok(Some((x, y))),
            ElementKind::Zp(_) => Err(DlogError::TypeMismatch),
        }
    }

    fn invert_mod_p(&self, value: &BigUint) -> Result<BigUint, DlogError> {
        Util::mod_inverse_uint(value, self.p)
            .ok_or_else(|| DlogError::InvalidArgument("denominator is not invertible".into()))
    }

    /// Group operation (written multiplicatively at the group layer, point
    /// addition here).
    pub fn add(&self, e1: &ElementKind, e2: &ElementKind) -> Result<ElementKind, DlogError> {
        let p1 = self.expect_point(e1)?;
        let p2 = self.expect_point(e2)?;
        let ((x1, y1), (x2, y2)) = match (p1, p2) {
            (None, _) => return Ok(e2.clone()),
            (_, None) => return Ok(e1.clone()),
            (Some(p1), Some(p2)) => (p1, p2),
        };

        let lambda = if x1 == x2 {
            if (y1 + y2) % self.p == BigUint::zero() {
                // P + (-P); also covers doubling a point with y = 0
                return Ok(ElementKind::Infinity);
            }
            // tangent slope (3x² + a) / 2y
            let numerator = (BigUint::from(3_u32) * x1 % self.p * x1 + self.a) % self.p;
            let denominator = self.invert_mod_p(&(BigUint::from(2_u32) * y1 % self.p))?;
            numerator * denominator % self.p
        } else {
            // chord slope (y2 - y1) / (x2 - x1)
            let numerator = mod_sub(y2, y1, self.p);
            let denominator = self.invert_mod_p(&mod_sub(x2, x1, self.p))?;
            numerator * denominator % self.p
        };

        let x3 = mod_sub(&mod_sub(&(&lambda * &lambda % self.p), x1, self.p), x2, self.p);
        let y3 = mod_sub(&(lambda * mod_sub(x1, &x3, self.p) % self.p), y1, self.p);
        Ok(ElementKind::Point { x: x3, y: y3 })
    }

    pub fn negate(&self, element: &ElementKind) -> Result<ElementKind, DlogError> {
        match self.expect_point(element)? {
            None => Ok(ElementKind::Infinity),
            Some((x, y)) => Ok(ElementKind::Point {
                x: x.clone(),
                y: mod_sub(&BigUint::zero(), y, self.p),
            }),
        }
    }

    /// Left-to-right double-and-add scalar multiplication.
    pub fn scalar_multiply(
        &self,
        element: &ElementKind,
        scalar: &BigUint,
    ) -> Result<ElementKind, DlogError> {
        self.expect_point(element)?;
        let mut accumulator = ElementKind::Infinity;
        for i in (0..scalar.bits()).rev() {
            accumulator = self.add(&accumulator, &accumulator)?;
            if Util::test_bit(scalar, i) {
                accumulator = self.add(&accumulator, element)?;
            }
        }
        Ok(accumulator)
    }

    /// Samples a random point by drawing x-coordinates until the curve
    /// equation has a square root, up to `2 * bitlength(p)` attempts.
    pub fn random_point(&self) -> Result<ElementKind, DlogError> {
        let bits = self.p.bits();
        let mut rng = rand::thread_rng();

        for _ in 0..2 * bits {
            let x = rng.gen_biguint(bits);
            if x >= *self.p {
                continue;
            }
            if let Some(y) = sqrt_mod(&self.rhs(&x), self.p) {
                return Ok(ElementKind::Point { x, y });
            }
        }
        log::warn!("couldn't find a random point in {} attempts", 2 * bits);
        Err(DlogError::SamplingExhausted)
    }
}

/// Modular square root for a prime modulus.
///
/// Fast path for `p ≡ 3 (mod 4)`, Tonelli–Shanks otherwise. Returns `None`
/// when `n` is a non-residue.
pub(crate) fn sqrt_mod(n: &BigUint, p: &BigUint) -> Option<BigUint> {
    if n.is_zero() {
        return Some(BigUint::zero());
    }
    let one = BigUint::one();
    let p_minus_1 = p - &one;
    let legendre_exponent = &p_minus_1 / 2_u32;
    if n.modpow(&legendre_exponent, p) != one {
        return None;
    }
    if p % 4_u32 == BigUint::from(3_u32) {
        return Some(n.modpow(&((p + &one) / 4_u32), p));
    }

    // Tonelli–Shanks: write p - 1 = q * 2^s with q odd
    let mut q = p_minus_1.clone();
    let mut s = 0_usize;
    while q.is_even() {
        q = q / 2_u32;
        s += 1;
    }

    // find a quadratic non-residue z
    let mut z = BigUint::from(2_u32);
    while z.modpow(&legendre_exponent, p) != p_minus_1 {
        z = z + 1_u32;
    }

    let mut m = s;
    let mut c = z.modpow(&q, p);
    let mut t = n.modpow(&q, p);
    let mut r = n.modpow(&((&q + &one) / 2_u32), p);

    while t != one {
        let mut i = 0_usize;
        let mut t2 = t.clone();
        while t2 != one {
            t2 = (&t2 * &t2) % p;
            i += 1;
        }
        let exponent = BigUint::one() << (m - i - 1);
        let b = c.modpow(&exponent, p);
        r = (&r * &b) % p;
        c = (&b * &b) % p;
        t = (&t * &c) % p;
        m = i;
    }
    Some(r)
}

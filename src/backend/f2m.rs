// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Affine point arithmetic for elliptic curves over binary fields.
//!
//! Field elements of F_2^m are bit polynomials reduced modulo the curve's
//! trinomial or pentanomial. The curve is the non-supersingular
//! `y² + xy = x³ + a·x² + b`. Random sampling solves the curve equation
//! with the half-trace, which requires an odd extension degree; every
//! supported NIST binary curve has one.

use num_bigint::{BigUint, RandBigInt};
use num_traits::identities::{One, Zero};

use crate::element::ElementKind;
use crate::errors::DlogError;

/// The field F_2^m with its reduction polynomial.
pub(crate) struct Field2m {
    pub m: u32,
    modulus: BigUint,
}

impl Field2m {
    pub fn new(m: u32, modulus: BigUint) -> Self {
        Field2m { m, modulus }
    }

    fn degree(value: &BigUint) -> usize {
        value.bits().saturating_sub(1)
    }

    /// Reduces an arbitrary bit polynomial modulo the field polynomial.
    fn reduce(&self, mut value: BigUint) -> BigUint {
        while value.bits() > self.m as usize {
            let shift = Self::degree(&value) - self.m as usize;
            value = value ^ (&self.modulus << shift);
        }
        value
    }

    /// Carry-less shift-and-xor multiplication followed by reduction.
    /// Addition in characteristic two is plain xor, done inline at the
    /// call sites.
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let mut product = BigUint::zero();
        let bytes = b.to_bytes_le();
        for i in 0..b.bits() {
            if (bytes[i / 8] >> (i % 8)) & 1 == 1 {
                product = product ^ (a << i);
            }
        }
        self.reduce(product)
    }

    pub fn sqr(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    /// Inversion by the extended Euclidean algorithm over GF(2)[x].
    pub fn invert(&self, a: &BigUint) -> Option<BigUint> {
        if a.is_zero() {
            return None;
        }
        let mut u = a.clone();
        let mut v = self.modulus.clone();
        let mut g1 = BigUint::one();
        let mut g2 = BigUint::zero();

        while u != BigUint::one() {
            if u.is_zero() {
                return None;
            }
            let mut j = Self::degree(&u) as i64 - Self::degree(&v) as i64;
            if j < 0 {
                std::mem::swap(&mut u, &mut v);
                std::mem::swap(&mut g1, &mut g2);
                j = -j;
            }
            u = u ^ (&v << j as usize);
            g1 = g1 ^ (&g2 << j as usize);
        }
        Some(self.reduce(g1))
    }

    /// The absolute trace `Tr(a) = a + a² + a⁴ + … + a^(2^(m-1))`,
    /// always 0 or 1.
    pub fn trace(&self, a: &BigUint) -> BigUint {
        let mut sum = a.clone();
        let mut power = a.clone();
        for _ in 1..self.m {
            power = self.sqr(&power);
            sum = sum ^ &power;
        }
        sum
    }

    /// The half-trace `H(a) = Σ a^(2^(2i))` for `i` in `0..=(m-1)/2`.
    ///
    /// For odd `m` and `Tr(a) = 0`, `z = H(a)` solves `z² + z = a`.
    pub fn half_trace(&self, a: &BigUint) -> BigUint {
        let mut sum = a.clone();
        let mut power = a.clone();
        for _ in 0..(self.m - 1) / 2 {
            power = self.sqr(&self.sqr(&power));
            sum = sum ^ &power;
        }
        sum
    }
}

/// A non-supersingular binary curve together with its field.
pub(crate) struct Curve2m {
    pub field: Field2m,
    pub a: BigUint,
    pub b: BigUint,
}

impl Curve2m {
    pub fn new(field: Field2m, a: BigUint, b: BigUint) -> Self {
        Curve2m { field, a, b }
    }

    /// Evaluates `y² + xy = x³ + a·x² + b` at `(x, y)`.
    pub fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        if x.bits() > self.field.m as usize || y.bits() > self.field.m as usize {
            return false;
        }
        let left = self.field.sqr(y) ^ self.field.mul(x, y);
        left == self.rhs(x)
    }

    fn rhs(&self, x: &BigUint) -> BigUint {
        let x2 = self.field.sqr(x);
        self.field.mul(&x2, x) ^ self.field.mul(&self.a, &x2) ^ &self.b
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

    pub fn add(&self, e1: &ElementKind, e2: &ElementKind) -> Result<ElementKind, DlogError> {
        let p1 = self.expect_point(e1)?;
        let p2 = self.expect_point(e2)?;
        let ((x1, y1), (x2, y2)) = match (p1, p2) {
            (None, _) => return Ok(e2.clone()),
            (_, None) => return Ok(e1.clone()),
            (Some(p1), Some(p2)) => (p1, p2),
        };
        let field = &self.field;

        if x1 == x2 {
            if *y2 == (x1 ^ y1) {
                // P + (-P); also covers doubling a point with x = 0
                return Ok(ElementKind::Infinity);
            }
            // tangent: λ = x + y/x
            let inverse_x = field
                .invert(x1)
                .ok_or_else(|| DlogError::InvalidArgument("denominator is not invertible".into()))?;
            let lambda = x1 ^ field.mul(y1, &inverse_x);
            let x3 = field.sqr(&lambda) ^ &lambda ^ &self.a;
            let y3 = field.sqr(x1) ^ field.mul(&(&lambda ^ BigUint::one()), &x3);
            return Ok(ElementKind::Point { x: x3, y: y3 });
        }

        // chord: λ = (y1 + y2) / (x1 + x2)
        let inverse = field
            .invert(&(x1 ^ x2))
            .ok_or_else(|| DlogError::InvalidArgument("denominator is not invertible".into()))?;
        let lambda = field.mul(&(y1 ^ y2), &inverse);
        let x3 = field.sqr(&lambda) ^ &lambda ^ x1 ^ x2 ^ &self.a;
        let y3 = field.mul(&lambda, &(x1 ^ &x3)) ^ &x3 ^ y1;
        Ok(ElementKind::Point { x: x3, y: y3 })
    }

    pub fn negate(&self, element: &ElementKind) -> Result<ElementKind, DlogError> {
        match self.expect_point(element)? {
            None => Ok(ElementKind::Infinity),
            Some((x, y)) => Ok(ElementKind::Point {
                x: x.clone(),
                y: x ^ y,
            }),
        }
    }

    pub fn scalar_multiply(
        &self,
        element: &ElementKind,
        scalar: &BigUint,
    ) -> Result<ElementKind, DlogError> {
        self.expect_point(element)?;
        let mut accumulator = ElementKind::Infinity;
        for i in (0..scalar.bits()).rev() {
            accumulator = self.add(&accumulator, &accumulator)?;
            if crate::util::Util::test_bit(scalar, i) {
                accumulator = self.add(&accumulator, element)?;
            }
        }
        Ok(accumulator)
    }

    /// Samples a random point by drawing x-coordinates and solving the
    /// curve equation with the half-trace, up to `2 * m` attempts.
    pub fn random_point(&self) -> Result<ElementKind, DlogError> {
        let field = &self.field;
        let mut rng = rand::thread_rng();

        for _ in 0..2 * field.m {
            let x = rng.gen_biguint(field.m as usize);
            if x.is_zero() {
                continue;
            }
            // substitute y = x·z: z² + z = x + a + b/x²
            let inverse_x2 = match field.invert(&field.sqr(&x)) {
                Some(inverse) => inverse,
                None => continue,
            };
            let c = &x ^ &self.a ^ field.mul(&self.b, &inverse_x2);
            if !field.trace(&c).is_zero() {
                continue;
            }
            let z = field.half_trace(&c);
            let y = field.mul(&x, &z);
            if self.is_on_curve(&x, &y) {
                return Ok(ElementKind::Point { x, y });
            }
        }
        log::warn!("couldn't find a random point in {} attempts", 2 * field.m);
        Err(DlogError::SamplingExhausted)
    }
}

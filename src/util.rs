// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

use num_bigint::{BigInt, BigUint, ToBigInt};
use num_traits::identities::{One, Zero};
use std::clone::Clone;

pub struct Util {}

impl Util {
    /// Finds the greatest common denominator of two integers *a* and *b*, and two
    /// integers *x* and *y* such that *ax* + *by* is the greatest common
    /// denominator of *a* and *b* (Bézout coefficients).
    ///
    /// This function is an implementation of the [extended Euclidean
    /// algorithm](https://en.wikipedia.org/wiki/Extended_Euclidean_algorithm).
    pub fn extend_gcd(a: BigInt, b: BigInt) -> (BigInt, BigInt, BigInt) {
        if a == BigInt::zero() {
            (b.clone(), BigInt::zero(), BigInt::one())
        } else {
            let (g, x, y) = Util::extend_gcd(b.clone() % a.clone(), a.clone());
            (g, y - (b.clone() / a.clone()) * x.clone(), x.clone())
        }
    }

    /// Calculates the [modular multiplicative
    /// inverse](https://en.wikipedia.org/wiki/Modular_multiplicative_inverse) *x*
    /// of an integer *a* such that *ax* ≡ 1 (mod *m*).
    ///
    /// Such an integer may not exist. If so, this function will return `None`.
    /// Otherwise, the inverse will be returned wrapped up in a `Some`.
    pub fn mod_inverse(a: BigInt, modular: BigInt) -> Option<BigInt> {
        let (g, x, _) = Util::extend_gcd(a.clone(), modular.clone());
        if g != BigInt::one() {
            None
        } else {
            let result = (x.clone() % modular.clone() + modular.clone()) % modular.clone();
            Some(result)
        }
    }

    /// Unsigned counterpart of [`Util::mod_inverse`] used by the residue and
    /// prime-field arithmetic.
    pub fn mod_inverse_uint(a: &BigUint, modular: &BigUint) -> Option<BigUint> {
        let inverse = Util::mod_inverse(
            a.to_bigint().unwrap(),
            modular.to_bigint().unwrap(),
        )?;
        inverse.to_biguint()
    }

    /// Tests bit *i* of an unsigned big integer.
    pub fn test_bit(value: &BigUint, i: usize) -> bool {
        let bytes = value.to_bytes_le();
        let byte = i / 8;
        if byte >= bytes.len() {
            return false;
        }
        (bytes[byte] >> (i % 8)) & 1 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_gcd() {
        let a = BigInt::from(26);
        let b = BigInt::from(3);
        let (g, x, y) = Util::extend_gcd(a.clone(), b.clone());

        assert_eq!(g, BigInt::one());
        assert_eq!(x, BigInt::from(-1));
        assert_eq!(y, BigInt::from(9));
        assert_eq!((a.clone() * x) + (b.clone() * y), g);
    }

    #[test]
    fn test_mod_inverse() {
        // 3*inverse = 1 mod 26
        let does_exist = Util::mod_inverse(BigInt::from(3), BigInt::from(26));
        // 4*inverse = 1 mod 32
        let does_not_exist = Util::mod_inverse(BigInt::from(4), BigInt::from(32));

        assert_eq!(does_exist, Some(BigInt::from(9)));
        assert_eq!(does_not_exist, None);
    }

    #[test]
    fn test_mod_inverse_uint() {
        let inverse = Util::mod_inverse_uint(&BigUint::from(3_u32), &BigUint::from(26_u32));
        assert_eq!(inverse, Some(BigUint::from(9_u32)));
    }

    #[test]
    fn test_test_bit() {
        let value = BigUint::from(0b1011_0100_u32);
        assert!(!Util::test_bit(&value, 0));
        assert!(Util::test_bit(&value, 2));
        assert!(Util::test_bit(&value, 7));
        assert!(!Util::test_bit(&value, 8));
        assert!(!Util::test_bit(&value, 200));
    }
}

// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Group parameter descriptions.
//!
//! A [`GroupParameters`] value is an immutable description of one specific
//! group instance: the modulus/order pair of a safe-prime Zp* group, or the
//! field description, curve coefficients and generator coordinates of an
//! elliptic-curve group. Parameters are validated once, when they are
//! attached to a [`DlogGroup`](crate::DlogGroup), and never change for the
//! lifetime of that group.

use num_bigint::{BigUint, RandBigInt};
use num_primes::{Generator, Verification};
use num_traits::identities::{One, Zero};

use crate::errors::DlogError;

/// Field basis of a binary-field elliptic curve.
///
/// A curve over F2m is defined relative to an irreducible reduction
/// polynomial, either a trinomial `x^m + x^k1 + 1` or a pentanomial
/// `x^m + x^k3 + x^k2 + x^k1 + 1`. A Koblitz curve wraps an underlying
/// basis and adds the order and cofactor of the main subgroup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum F2mBasis {
    Trinomial {
        k1: u32,
    },
    Pentanomial {
        k1: u32,
        k2: u32,
        k3: u32,
    },
    Koblitz {
        underlying: Box<F2mBasis>,
        subgroup_order: BigUint,
        cofactor: BigUint,
    },
}

impl F2mBasis {
    /// Builds the reduction polynomial of the field as a bit polynomial,
    /// resolving through a Koblitz wrapper to the underlying basis.
    pub fn reduction_polynomial(&self, m: u32) -> BigUint {
        match self {
            F2mBasis::Trinomial { k1 } => {
                (BigUint::one() << m as usize) | (BigUint::one() << *k1 as usize) | BigUint::one()
            }
            F2mBasis::Pentanomial { k1, k2, k3 } => {
                (BigUint::one() << m as usize)
                    | (BigUint::one() << *k3 as usize)
                    | (BigUint::one() << *k2 as usize)
                    | (BigUint::one() << *k1 as usize)
                    | BigUint::one()
            }
            F2mBasis::Koblitz { underlying, .. } => underlying.reduction_polynomial(m),
        }
    }

    pub fn is_koblitz(&self) -> bool {
        matches!(self, F2mBasis::Koblitz { .. })
    }
}

/// Description of a specific dlog group instance.
///
/// # Variants
/// - `Zp`: multiplicative subgroup of quadratic residues modulo a safe
///   prime, with `p = 2q + 1` and both `p`, `q` prime.
/// - `ECFp`: curve `y² = x³ + a·x + b` over the prime field F_p.
/// - `ECF2m`: curve `y² + xy = x³ + a·x² + b` over the binary field F_2^m.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupParameters {
    Zp {
        /// Safe prime modulus.
        p: BigUint,
        /// Prime order of the quadratic-residue subgroup, `q = (p - 1) / 2`.
        q: BigUint,
        /// Generator value of the subgroup.
        generator: BigUint,
    },
    ECFp {
        /// Prime field modulus.
        p: BigUint,
        a: BigUint,
        b: BigUint,
        /// Generator point coordinates.
        gx: BigUint,
        gy: BigUint,
        /// Order of the generated subgroup.
        order: BigUint,
        cofactor: Option<BigUint>,
    },
    ECF2m {
        /// Field extension degree.
        m: u32,
        basis: F2mBasis,
        a: BigUint,
        b: BigUint,
        gx: BigUint,
        gy: BigUint,
        order: BigUint,
        cofactor: Option<BigUint>,
    },
}

impl GroupParameters {
    /// Constructs validated Zp* parameters.
    ///
    /// Checks that `p` and `q` are probable primes and that `p = 2q + 1`.
    pub fn zp(p: BigUint, q: BigUint, generator: BigUint) -> Result<Self, DlogError> {
        if &q * 2_u32 + BigUint::one() != p {
            return Err(DlogError::InvalidGroupParameters(
                "p must be equal to 2q+1".into(),
            ));
        }
        if !Verification::is_prime(&p) {
            return Err(DlogError::InvalidGroupParameters("p must be a prime".into()));
        }
        if !Verification::is_prime(&q) {
            return Err(DlogError::InvalidGroupParameters("q must be a prime".into()));
        }
        Ok(GroupParameters::Zp { p, q, generator })
    }

    /// Zp* parameters over the 2048-bit MODP safe prime from RFC 3526
    /// (group id 14), with generator 2.
    ///
    /// The prime is `2^2048 - 2^1984 - 1 + 2^64 * { [2^1918 pi] + 124476 }`.
    pub fn rfc3526_2048() -> Self {
        let p: BigUint = BigUint::parse_bytes(
            b"ffffffffffffffffc90fdaa22168c234c4c6628b80dc1cd129024e088a67cc74\
              020bbea63b139b22514a08798e3404ddef9519b3cd3a431b302b0a6df25f14374fe1\
              356d6d51c245e485b576625e7ec6f44c42e9a637ed6b0bff5cb6f406b7edee386bfb\
              5a899fa5ae9f24117c4b1fe649286651ece45b3dc2007cb8a163bf0598da48361c55d\
              39a69163fa8fd24cf5f83655d23dca3ad961c62f356208552bb9ed529077096966d67\
              0c354e4abc9804f1746c08ca18217c32905e462e36ce3be39e772c180e86039b2783a\
              2ec07a28fb5c55df06f4c52c9de2bcbf6955817183995497cea956ae515d2261898fa0\
              51015728e5a8aacaa68ffffffffffffffff",
            16,
        )
        .unwrap();
        let q: BigUint = (p.clone() - BigUint::one()) / BigUint::from(2_u64);

        GroupParameters::Zp {
            p,
            q,
            generator: BigUint::from(2_u64),
        }
    }

    /// Generates Zp* parameters over a fresh random safe prime of `bits`
    /// bit length.
    ///
    /// The generator is chosen as the square of a random residue, which
    /// guarantees it lies in the quadratic-residue subgroup.
    pub fn random_zp(bits: u32) -> Self {
        let p: BigUint = Generator::safe_prime(bits as usize);
        let q: BigUint = (p.clone() - BigUint::one()) / BigUint::from(2_u64);

        let mut rng = rand::thread_rng();
        let generator = loop {
            let h = rng.gen_biguint_below(&p);
            let g = (&h * &h) % &p;
            if !g.is_zero() && g != BigUint::one() {
                break g;
            }
        };

        GroupParameters::Zp { p, q, generator }
    }

    /// The order of the group the parameters describe.
    ///
    /// For Zp* this is `q`, the order of the quadratic-residue subgroup;
    /// for elliptic curves it is the order of the generated subgroup.
    pub fn order(&self) -> &BigUint {
        match self {
            GroupParameters::Zp { q, .. } => q,
            GroupParameters::ECFp { order, .. } => order,
            GroupParameters::ECF2m { order, basis, .. } => match basis {
                F2mBasis::Koblitz { subgroup_order, .. } => subgroup_order,
                _ => order,
            },
        }
    }

    /// A human-readable group type tag.
    pub fn group_type(&self) -> &'static str {
        match self {
            GroupParameters::Zp { .. } => "Zp*",
            GroupParameters::ECFp { .. } => "elliptic curve over Fp",
            GroupParameters::ECF2m { .. } => "elliptic curve over F2m",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc3526_2048() {
        let params = GroupParameters::rfc3526_2048();
        match &params {
            GroupParameters::Zp { p, q, generator } => {
                assert!(Verification::is_safe_prime(p));
                assert!(Verification::is_prime(q));
                assert_eq!(p, &(q * 2_u32 + BigUint::one()));
                assert_eq!(generator, &BigUint::from(2_u32));
            }
            _ => panic!("expected Zp parameters"),
        }
    }

    #[test]
    fn test_zp_rejects_wrong_structure() {
        // 23 = 2 * 11 + 1 is a safe prime; 25 is not prime at all.
        let good = GroupParameters::zp(
            BigUint::from(23_u32),
            BigUint::from(11_u32),
            BigUint::from(4_u32),
        );
        assert!(good.is_ok());

        let not_two_q_plus_one = GroupParameters::zp(
            BigUint::from(23_u32),
            BigUint::from(7_u32),
            BigUint::from(4_u32),
        );
        assert_eq!(
            not_two_q_plus_one,
            Err(DlogError::InvalidGroupParameters("p must be equal to 2q+1".into()))
        );

        let composite = GroupParameters::zp(
            BigUint::from(25_u32),
            BigUint::from(12_u32),
            BigUint::from(4_u32),
        );
        assert!(composite.is_err());
    }

    #[test]
    fn test_random_zp() {
        let params = GroupParameters::random_zp(64);
        match &params {
            GroupParameters::Zp { p, q, generator } => {
                assert!(Verification::is_prime(p));
                assert!(Verification::is_prime(q));
                // generator is a square, hence a member of the subgroup
                assert_eq!(generator.modpow(q, p), BigUint::one());
            }
            _ => panic!("expected Zp parameters"),
        }
    }

    #[test]
    fn test_reduction_polynomial() {
        // x^163 + x^7 + x^6 + x^3 + 1
        let basis = F2mBasis::Pentanomial { k1: 3, k2: 6, k3: 7 };
        let poly = basis.reduction_polynomial(163);
        assert_eq!(poly.bits(), 164);
        assert!(crate::util::Util::test_bit(&poly, 0));
        assert!(crate::util::Util::test_bit(&poly, 3));
        assert!(crate::util::Util::test_bit(&poly, 6));
        assert!(crate::util::Util::test_bit(&poly, 7));
        assert!(!crate::util::Util::test_bit(&poly, 8));

        // a Koblitz wrapper resolves to the basis of the underlying curve
        let koblitz = F2mBasis::Koblitz {
            underlying: Box::new(basis.clone()),
            subgroup_order: BigUint::from(5_u32),
            cofactor: BigUint::from(2_u32),
        };
        assert!(koblitz.is_koblitz());
        assert_eq!(koblitz.reduction_polynomial(163), poly);
    }
}

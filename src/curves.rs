// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! NIST recommended curve parameters.
//!
//! A compiled-in, read-only table of standard curves, keyed by the names
//! used in FIPS 186 / SEC 2. The table is the single authority the group
//! validator compares against when a group was initialized from a curve
//! name: every coefficient and generator coordinate must match these
//! constants exactly.
//!
//! # Supported curves
//! - Prime field: `P-192`, `P-224`, `P-256`, `P-384`, `P-521` (all with
//!   `a = p - 3` and cofactor 1)
//! - Binary field: `B-163`, `B-233`, `B-283`
//! - Koblitz: `K-163`, `K-233`, `K-283` (cofactor 2 for `a = 1`, 4 for
//!   `a = 0`)

use num_bigint::BigUint;

use crate::errors::DlogError;
use crate::params::{F2mBasis, GroupParameters};

const CURVE_NAMES: [&str; 11] = [
    "P-192", "P-224", "P-256", "P-384", "P-521", "B-163", "B-233", "B-283", "K-163", "K-233",
    "K-283",
];

/// The names accepted by [`recommended_parameters`].
pub fn recommended_curve_names() -> &'static [&'static str] {
    &CURVE_NAMES
}

/// Parses a hex constant from this table.
fn hex(digits: &[u8]) -> BigUint {
    BigUint::parse_bytes(digits, 16).unwrap()
}

/// Prime-field curve `y² = x³ - 3x + b` with cofactor 1.
fn fp_params(p: &[u8], b: &[u8], gx: &[u8], gy: &[u8], order: &[u8]) -> GroupParameters {
    let p = hex(p);
    let a = &p - 3_u32;
    GroupParameters::ECFp {
        p,
        a,
        b: hex(b),
        gx: hex(gx),
        gy: hex(gy),
        order: hex(order),
        cofactor: Some(BigUint::from(1_u32)),
    }
}

/// Binary-field curve; Koblitz entries wrap the basis with the main
/// subgroup order and cofactor.
#[allow(clippy::too_many_arguments)]
fn f2m_params(
    m: u32,
    basis: F2mBasis,
    a: u32,
    b: &[u8],
    gx: &[u8],
    gy: &[u8],
    order: &[u8],
    koblitz: bool,
) -> GroupParameters {
    let order = hex(order);
    let cofactor = BigUint::from(if a == 1 { 2_u32 } else { 4_u32 });
    let basis = if koblitz {
        F2mBasis::Koblitz {
            underlying: Box::new(basis),
            subgroup_order: order.clone(),
            cofactor: cofactor.clone(),
        }
    } else {
        basis
    };
    GroupParameters::ECF2m {
        m,
        basis,
        a: BigUint::from(a),
        b: hex(b),
        gx: hex(gx),
        gy: hex(gy),
        order,
        cofactor: Some(if koblitz { cofactor } else { BigUint::from(2_u32) }),
    }
}

/// Looks up the parameters of a NIST recommended curve by name.
pub fn recommended_parameters(name: &str) -> Result<GroupParameters, DlogError> {
    match name {
        "P-192" => Ok(fp_params(
            b"fffffffffffffffffffffffffffffffeffffffffffffffff",
            b"64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1",
            b"188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012",
            b"07192b95ffc8da78631011ed6b24cdd573f977a11e794811",
            b"ffffffffffffffffffffffff99def836146bc9b1b4d22831",
        )),
        "P-224" => Ok(fp_params(
            b"ffffffffffffffffffffffffffffffff000000000000000000000001",
            b"b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4",
            b"b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21",
            b"bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34",
            b"ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d",
        )),
        "P-256" => Ok(fp_params(
            b"ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
            b"5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
            b"6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
            b"4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
            b"ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
        )),
        "P-384" => Ok(fp_params(
            b"fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe\
              ffffffff0000000000000000ffffffff",
            b"b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875a\
              c656398d8a2ed19d2a85c8edd3ec2aef",
            b"aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a38\
              5502f25dbf55296c3a545e3872760ab7",
            b"3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c0\
              0a60b1ce1d7e819d7a431d7c90ea0e5f",
            b"ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf\
              581a0db248b0a77aecec196accc52973",
        )),
        "P-521" => Ok(fp_params(
            b"01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff\
              ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff\
              ffff",
            b"0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef1\
              09e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b50\
              3f00",
            b"00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d\
              3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5\
              bd66",
            b"011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e\
              662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd1\
              6650",
            b"01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff\
              fffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e9138\
              6409",
        )),
        "B-163" => Ok(f2m_params(
            163,
            F2mBasis::Pentanomial { k1: 3, k2: 6, k3: 7 },
            1,
            b"020a601907b8c953ca1481eb10512f78744a3205fd",
            b"03f0eba16286a2d57ea0991168d4994637e8343e36",
            b"00d51fbc6c71a0094fa2cdd545b11c5c0c797324f1",
            b"040000000000000000000292fe77e70c12a4234c33",
            false,
        )),
        "B-233" => Ok(f2m_params(
            233,
            F2mBasis::Trinomial { k1: 74 },
            1,
            b"0066647ede6c332c7f8c0923bb58213b333b20e9ce4281fe115f7d8f90ad",
            b"00fac9dfcbac8313bb2139f1bb755fef65bc391f8b36f8f8eb7371fd558b",
            b"01006a08a41903350678e58528bebf8a0beff867a7ca36716f7e01f81052",
            b"01000000000000000000000000000013e974e72f8a6922031d2603cfe0d7",
            false,
        )),
        "B-283" => Ok(f2m_params(
            283,
            F2mBasis::Pentanomial { k1: 5, k2: 7, k3: 12 },
            1,
            b"027b680ac8b8596da5a4af8a19a0303fca97fd7645309fa2a581485af6263e313b79a2f5",
            b"05f939258db7dd90e1934f8c70b0dfec2eed25b8557eac9c80e2e198f8cdbecd86b12053",
            b"03676854fe24141cb98fe6d4b20d02b4516ff702350eddb0826779c813f0df45be8112f4",
            b"03ffffffffffffffffffffffffffffffffffef90399660fc938a90165b042a7cefadb307",
            false,
        )),
        "K-163" => Ok(f2m_params(
            163,
            F2mBasis::Pentanomial { k1: 3, k2: 6, k3: 7 },
            1,
            b"01",
            b"02fe13c0537bbc11acaa07d793de4e6d5e5c94eee8",
            b"0289070fb05d38ff58321f2e800536d538ccdaa3d9",
            b"04000000000000000000020108a2e0cc0d99f8a5ef",
            true,
        )),
        "K-233" => Ok(f2m_params(
            233,
            F2mBasis::Trinomial { k1: 74 },
            0,
            b"01",
            b"017232ba853a7e731af129f22ff4149563a419c26bf50a4c9d6eefad6126",
            b"01db537dece819b7f70f555a67c427a8cd9bf18aeb9b56e0c11056fae6a3",
            b"008000000000000000000000000000069d5bb915bcd46efb1ad5f173abdf",
            true,
        )),
        "K-283" => Ok(f2m_params(
            283,
            F2mBasis::Pentanomial { k1: 5, k2: 7, k3: 12 },
            0,
            b"01",
            b"0503213f78ca44883f1a3b8162f188e553cd265f23c1567a16876913b0c2ac2458492836",
            b"01ccda380f1c9e318d90f95d07e5426fe87e45c0e8184698e45962364e34116177dd2259",
            b"01ffffffffffffffffffffffffffffffffffe9ae2ed07577265dff7f94451e061e163c61",
            true,
        )),
        _ => Err(DlogError::InvalidArgument(format!(
            "no such recommended elliptic curve: {}",
            name
        ))),
    }
}

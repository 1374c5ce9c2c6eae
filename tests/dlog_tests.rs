// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

use dlog_groups::curves::{recommended_curve_names, recommended_parameters};
use dlog_groups::{DlogError, DlogGroup, GroupParameters};
use num_bigint::BigUint;
use num_traits::identities::{One, Zero};

fn rfc3526_group() -> DlogGroup {
    let mut group = DlogGroup::with_num_backend();
    group.init(GroupParameters::rfc3526_2048()).unwrap();
    group
}

fn named_curve_group(name: &str) -> DlogGroup {
    let mut group = DlogGroup::with_num_backend();
    group.init_named_curve(name).unwrap();
    group
}

#[test]
fn test_uninitialized_group_rejects_operations() {
    let group = DlogGroup::with_num_backend();
    assert_eq!(group.generator().unwrap_err(), DlogError::Uninitialized);
    assert_eq!(group.identity().unwrap_err(), DlogError::Uninitialized);
    assert_eq!(
        group.random_element().unwrap_err(),
        DlogError::Uninitialized
    );
    assert_eq!(group.validate_group().unwrap_err(), DlogError::Uninitialized);
}

#[test]
fn test_safe_prime_group_validates() {
    let group = rfc3526_group();
    assert!(group.validate_group().unwrap());
    assert!(group.is_prime_order().unwrap());
    assert!(group.is_generator().unwrap());
    assert!(group.is_order_greater_than(2046).unwrap());
}

#[test]
fn test_perturbed_safe_prime_is_rejected() {
    let (p, q, generator) = match GroupParameters::rfc3526_2048() {
        GroupParameters::Zp { p, q, generator } => (p, q, generator),
        _ => unreachable!(),
    };
    let mut group = DlogGroup::with_num_backend();
    let result = group.init(GroupParameters::Zp {
        p: p + BigUint::one(),
        q,
        generator,
    });
    assert!(matches!(result, Err(DlogError::InvalidGroupParameters(_))));
}

#[test]
fn test_group_laws_hold_for_random_elements() {
    let group = rfc3526_group();
    let a = group.random_element().unwrap();
    let b = group.random_element().unwrap();
    let c = group.random_element().unwrap();

    // associativity
    let left = group.mul(&group.mul(&a, &b).unwrap(), &c).unwrap();
    let right = group.mul(&a, &group.mul(&b, &c).unwrap()).unwrap();
    assert_eq!(left, right);

    // inverse law
    let identity = group.identity().unwrap();
    let inverse = group.element_inverse(&a).unwrap();
    assert_eq!(group.mul(&a, &inverse).unwrap(), identity);

    // closure
    assert!(group.is_member(&left).unwrap());
}

#[test]
fn test_exponentiation_consistency() {
    let group = rfc3526_group();
    let g = group.generator().unwrap();
    assert_eq!(
        group.exp(&g, &BigUint::zero()).unwrap(),
        group.identity().unwrap()
    );
    let mut expected = group.identity().unwrap();
    for e in 1_u32..6 {
        expected = group.mul(&g, &expected).unwrap();
        assert_eq!(group.exp(&g, &BigUint::from(e)).unwrap(), expected);
    }
}

#[test]
fn test_simultaneous_exponentiations_match_naive_product() {
    let group = rfc3526_group();
    let g1 = group.random_element().unwrap();
    let g2 = group.random_element().unwrap();
    let exponents = [BigUint::from(17_u32), BigUint::from(5_u32)];

    let expected = group
        .mul(
            &group.exp(&g1, &exponents[0]).unwrap(),
            &group.exp(&g2, &exponents[1]).unwrap(),
        )
        .unwrap();
    let result = group
        .simultaneous_multiple_exponentiations(&[g1, g2], &exponents)
        .unwrap();
    assert_eq!(result, expected);
}

#[test]
fn test_simultaneous_exponentiations_larger_batch() {
    let group = rfc3526_group();
    let bases: Vec<_> = (0..6).map(|_| group.random_element().unwrap()).collect();
    let exponents: Vec<BigUint> = (0..6_u32).map(|i| BigUint::from(3 * i + 1)).collect();

    let mut expected = group.identity().unwrap();
    for (base, exponent) in bases.iter().zip(&exponents) {
        expected = group
            .mul(&expected, &group.exp(base, exponent).unwrap())
            .unwrap();
    }
    assert_eq!(
        group
            .simultaneous_multiple_exponentiations(&bases, &exponents)
            .unwrap(),
        expected
    );
}

#[test]
fn test_simultaneous_exponentiations_call_shape() {
    let group = rfc3526_group();
    let g = group.generator().unwrap();

    assert_eq!(
        group
            .simultaneous_multiple_exponentiations(&[], &[])
            .unwrap(),
        group.identity().unwrap()
    );
    assert!(matches!(
        group.simultaneous_multiple_exponentiations(
            std::slice::from_ref(&g),
            &[BigUint::one(), BigUint::one()]
        ),
        Err(DlogError::InvalidArgument(_))
    ));
}

#[test]
fn test_fixed_base_cache_agrees_with_plain_exponentiation() {
    let group = rfc3526_group();
    let g = group.random_element().unwrap();
    for e in [3_u64, 100, 7, 99999] {
        let e = BigUint::from(e);
        assert_eq!(
            group.exp_with_precomputed_values(&g, &e).unwrap(),
            group.exp(&g, &e).unwrap()
        );
    }
    // repeated and interleaved lookups stay consistent
    let h = group.random_element().unwrap();
    for e in [99999_u64, 3, 100] {
        let e = BigUint::from(e);
        assert_eq!(
            group.exp_with_precomputed_values(&h, &e).unwrap(),
            group.exp(&h, &e).unwrap()
        );
        assert_eq!(
            group.exp_with_precomputed_values(&g, &e).unwrap(),
            group.exp(&g, &e).unwrap()
        );
    }
}

#[test]
fn test_zp_encoding_round_trip() {
    let group = rfc3526_group();
    for _ in 0..4 {
        let element = group.random_element().unwrap();
        let bytes = group.element_to_bytes(&element).unwrap();
        let decoded = group.bytes_to_element(&bytes).unwrap();
        assert_eq!(decoded, element);
    }
}

#[test]
fn test_named_curves_initialize_with_published_generators() {
    for name in recommended_curve_names() {
        let group = named_curve_group(name);
        let generator = group.generator().unwrap();

        let (gx, gy) = match recommended_parameters(name).unwrap() {
            GroupParameters::ECFp { gx, gy, .. } => (gx, gy),
            GroupParameters::ECF2m { gx, gy, .. } => (gx, gy),
            GroupParameters::Zp { .. } => unreachable!(),
        };
        assert_eq!(generator.coordinates(), Some((&gx, &gy)), "curve {}", name);
        assert!(group.is_member(&generator).unwrap(), "curve {}", name);
        assert!(group.validate_group().unwrap(), "curve {}", name);
        assert!(group.is_prime_order().unwrap(), "curve {}", name);
    }
}

#[test]
fn test_unknown_curve_name_is_rejected() {
    let mut group = DlogGroup::with_num_backend();
    assert!(matches!(
        group.init_named_curve("P-999"),
        Err(DlogError::InvalidArgument(_))
    ));
    assert!(!group.is_initialized());
}

#[test]
fn test_prime_curve_group_laws() {
    let group = named_curve_group("P-256");
    let a = group.random_element().unwrap();
    let b = group.random_element().unwrap();
    let identity = group.identity().unwrap();

    assert!(group.is_member(&a).unwrap());
    let product = group.mul(&a, &b).unwrap();
    assert!(group.is_member(&product).unwrap());

    let inverse = group.element_inverse(&a).unwrap();
    assert_eq!(group.mul(&a, &inverse).unwrap(), identity);
    assert_eq!(group.mul(&a, &identity).unwrap(), a);
}

#[test]
fn test_prime_curve_multi_exponentiation() {
    let group = named_curve_group("P-256");
    let g1 = group.generator().unwrap();
    let g2 = group.random_element().unwrap();
    let exponents = [BigUint::from(17_u32), BigUint::from(5_u32)];

    let expected = group
        .mul(
            &group.exp(&g1, &exponents[0]).unwrap(),
            &group.exp(&g2, &exponents[1]).unwrap(),
        )
        .unwrap();
    assert_eq!(
        group
            .simultaneous_multiple_exponentiations(&[g1, g2], &exponents)
            .unwrap(),
        expected
    );
}

#[test]
fn test_prime_curve_fixed_base_cache() {
    let group = named_curve_group("P-256");
    let g = group.generator().unwrap();
    for e in [3_u64, 100, 7, 9999] {
        let e = BigUint::from(e);
        assert_eq!(
            group.exp_with_precomputed_values(&g, &e).unwrap(),
            group.exp(&g, &e).unwrap()
        );
    }
}

#[test]
fn test_prime_curve_encoding_round_trip() {
    let group = named_curve_group("P-256");
    let element = group.random_element().unwrap();
    let bytes = group.element_to_bytes(&element).unwrap();
    assert_eq!(bytes.len(), 65);
    assert_eq!(group.bytes_to_element(&bytes).unwrap(), element);

    let infinity = group.identity().unwrap();
    let bytes = group.element_to_bytes(&infinity).unwrap();
    assert_eq!(bytes, vec![0x00]);
    assert_eq!(group.bytes_to_element(&bytes).unwrap(), infinity);
}

#[test]
fn test_prime_curve_membership_rejection() {
    let group = named_curve_group("P-256");
    // (1, 1) does not satisfy the P-256 curve equation
    assert!(matches!(
        group.ec_point(BigUint::one(), BigUint::one()),
        Err(DlogError::InvalidArgument(_))
    ));
}

#[test]
fn test_binary_curve_group_laws() {
    for name in ["K-163", "B-233"] {
        let group = named_curve_group(name);
        let a = group.random_element().unwrap();
        let b = group.random_element().unwrap();
        let identity = group.identity().unwrap();

        assert!(group.is_member(&a).unwrap(), "curve {}", name);
        let product = group.mul(&a, &b).unwrap();
        assert!(group.is_member(&product).unwrap(), "curve {}", name);

        let inverse = group.element_inverse(&a).unwrap();
        assert_eq!(group.mul(&a, &inverse).unwrap(), identity, "curve {}", name);
    }
}

#[test]
fn test_binary_curve_multi_exponentiation() {
    let group = named_curve_group("K-163");
    let g1 = group.generator().unwrap();
    let g2 = group.random_element().unwrap();
    let exponents = [BigUint::from(29_u32), BigUint::from(12_u32)];

    let expected = group
        .mul(
            &group.exp(&g1, &exponents[0]).unwrap(),
            &group.exp(&g2, &exponents[1]).unwrap(),
        )
        .unwrap();
    assert_eq!(
        group
            .simultaneous_multiple_exponentiations(&[g1, g2], &exponents)
            .unwrap(),
        expected
    );
}

#[test]
fn test_binary_curve_encoding_round_trip() {
    let group = named_curve_group("B-163");
    let element = group.random_element().unwrap();
    let bytes = group.element_to_bytes(&element).unwrap();
    // 1 prefix byte + two 21-byte coordinates
    assert_eq!(bytes.len(), 43);
    assert_eq!(group.bytes_to_element(&bytes).unwrap(), element);
}

#[test]
fn test_elements_do_not_cross_groups() {
    let p256 = named_curve_group("P-256");
    let k163 = named_curve_group("K-163");
    let foreign = p256.generator().unwrap();

    assert_eq!(k163.is_member(&foreign), Err(DlogError::TypeMismatch));
    assert_eq!(
        k163.exp(&foreign, &BigUint::from(2_u32)),
        Err(DlogError::TypeMismatch)
    );

    let zp = rfc3526_group();
    let residue = zp.generator().unwrap();
    assert_eq!(p256.mul(&residue, &residue), Err(DlogError::TypeMismatch));
}

#[test]
fn test_zp_membership_rejection() {
    let group = rfc3526_group();
    let p = match group.group_params().unwrap() {
        GroupParameters::Zp { p, .. } => p.clone(),
        _ => unreachable!(),
    };
    assert!(matches!(
        group.zp_element(BigUint::zero(), false),
        Err(DlogError::InvalidArgument(_))
    ));
    assert!(matches!(
        group.zp_element(p, false),
        Err(DlogError::InvalidArgument(_))
    ));
}

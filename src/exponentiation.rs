// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Composite exponentiation algorithms.
//!
//! Both optimizations here are built purely from the backend's
//! single-operation primitives:
//!
//! - [`simultaneous_multiple_exponentiations`] computes `∏ gᵢ^eᵢ` with one
//!   shared square-and-multiply pass over all exponent bit columns, at the
//!   price of a `2^n`-entry table of subset products.
//! - [`FixedBaseCache`] amortizes repeated exponentiations of one base by
//!   remembering its ascending powers of two (`base`, `base²`, `base⁴`, …)
//!   for the lifetime of the owning group.

use num_bigint::BigUint;
use num_traits::identities::{One, Zero};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::backend::ArithmeticBackend;
use crate::element::ElementKind;
use crate::errors::DlogError;
use crate::params::GroupParameters;

/// Upper bound on the batch size of a simultaneous multi-exponentiation.
///
/// The precomputation table has `2^n` entries, so the algorithm is only
/// appropriate for small batches; larger ones are rejected outright rather
/// than silently exhausting memory.
pub const MAX_SIMULTANEOUS_BASES: usize = 20;

/// The identity element value for the given parameters: the residue `1`
/// for Zp*, the point at infinity for elliptic curves.
pub(crate) fn identity_kind(params: &GroupParameters) -> ElementKind {
    match params {
        GroupParameters::Zp { .. } => ElementKind::Zp(BigUint::one()),
        GroupParameters::ECFp { .. } | GroupParameters::ECF2m { .. } => ElementKind::Infinity,
    }
}

fn test_bit(le_bytes: &[u8], i: usize) -> bool {
    let byte = i / 8;
    byte < le_bytes.len() && (le_bytes[byte] >> (i % 8)) & 1 == 1
}

/// Computes the product of several exponentiations with distinct bases and
/// distinct exponents in one pass.
///
/// The precomputation stores the subset product `T[k] = ∏_{bit i of k set}
/// gᵢ` for every bit mask `k`, each entry derived from an already computed
/// subset with a single multiplication. The accumulation then walks the bit
/// columns of the exponents from the most significant down, squaring once
/// and multiplying by at most one table entry per column.
pub(crate) fn simultaneous_multiple_exponentiations(
    backend: &dyn ArithmeticBackend,
    params: &GroupParameters,
    bases: &[&ElementKind],
    exponents: &[BigUint],
) -> Result<ElementKind, DlogError> {
    if bases.len() != exponents.len() {
        return Err(DlogError::InvalidArgument(
            "bases and exponents differ in length".into(),
        ));
    }
    let n = bases.len();
    if n == 0 {
        return Ok(identity_kind(params));
    }
    if n > MAX_SIMULTANEOUS_BASES {
        return Err(DlogError::InvalidArgument(format!(
            "batch of {} bases exceeds the supported maximum of {}",
            n, MAX_SIMULTANEOUS_BASES
        )));
    }

    // subset-product table, T[0] = identity
    let table_len = 1_usize << n;
    let mut table: Vec<ElementKind> = Vec::with_capacity(table_len);
    table.push(identity_kind(params));
    for k in 1..table_len {
        let lowest = k.trailing_zeros() as usize;
        let rest = k & (k - 1);
        let entry = if rest == 0 {
            bases[lowest].clone()
        } else {
            backend.multiply(params, &table[rest], bases[lowest])?
        };
        table.push(entry);
    }

    let t = exponents.iter().map(|e| e.bits()).max().unwrap_or(0);
    if t == 0 {
        return Ok(identity_kind(params));
    }

    // one table index per bit column, most significant column first
    let exponent_bytes: Vec<Vec<u8>> = exponents.iter().map(|e| e.to_bytes_le()).collect();
    let column_index = |j: usize| -> usize {
        let mut index = 0_usize;
        for (i, bytes) in exponent_bytes.iter().enumerate() {
            if test_bit(bytes, t - 1 - j) {
                index |= 1 << i;
            }
        }
        index
    };

    let mut accumulator = table[column_index(0)].clone();
    for j in 1..t {
        accumulator = backend.multiply(params, &accumulator, &accumulator)?;
        let index = column_index(j);
        if index != 0 {
            accumulator = backend.multiply(params, &accumulator, &table[index])?;
        }
    }
    Ok(accumulator)
}

/// Per-base tables of ascending powers of two.
///
/// `powers[k] = base^(2^k)`; the table is seeded with the first four
/// entries on first use and extended lazily by squaring. Tables grow
/// monotonically and persist for the lifetime of the owning group. The map
/// is keyed by element *instance* identity, so distinct element instances
/// with equal value are cached independently.
pub(crate) struct FixedBaseCache {
    tables: HashMap<u64, Vec<ElementKind>>,
}

impl FixedBaseCache {
    pub fn new() -> Self {
        FixedBaseCache {
            tables: HashMap::new(),
        }
    }

    /// Number of bases with a cached table (test hook).
    #[cfg(test)]
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Exponentiates `base` reusing (and growing) its cached power table.
    ///
    /// The closest power of two at or below the exponent is taken from the
    /// table; the residual `exponent - 2^idx` is then applied by naive
    /// repeated multiplication with the base. The residual step is linear,
    /// not a second square-and-multiply ladder, so this path only pays off
    /// for exponents close to a power of two or small enough for the
    /// residual walk; see the crate documentation.
    pub fn exponentiate(
        &mut self,
        backend: &dyn ArithmeticBackend,
        params: &GroupParameters,
        base_id: u64,
        base: &ElementKind,
        exponent: &BigUint,
    ) -> Result<ElementKind, DlogError> {
        if exponent.is_zero() {
            return Ok(identity_kind(params));
        }

        let powers = match self.tables.entry(base_id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let mut powers = vec![base.clone()];
                for k in 1..4 {
                    let squared = backend.multiply(params, &powers[k - 1], &powers[k - 1])?;
                    powers.push(squared);
                }
                entry.insert(powers)
            }
        };

        // closest power-of-two exponent at or below the requested one
        let index = exponent.bits() - 1;
        while powers.len() <= index {
            let last = &powers[powers.len() - 1];
            let squared = backend.multiply(params, last, last)?;
            powers.push(squared);
        }

        let mut result = powers[index].clone();
        let mut covered = BigUint::one() << index;
        while &covered < exponent {
            result = backend.multiply(params, base, &result)?;
            covered = covered + 1_u32;
        }
        Ok(result)
    }
}

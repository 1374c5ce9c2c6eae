// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Group elements.
//!
//! A [`GroupElement`] is an opaque algebraic value belonging to exactly one
//! group instance. Elements are immutable: every group operation returns a
//! new element. Besides its mathematical value, each element carries two
//! pieces of bookkeeping:
//!
//! - a *group tag*, identifying the [`DlogGroup`](crate::DlogGroup) instance
//!   that created it. Operations across mismatched tags fail with
//!   [`TypeMismatch`](crate::DlogError::TypeMismatch) instead of silently
//!   coercing.
//! - an *instance identity*, unique per constructed element and preserved by
//!   `Clone`. The fixed-base exponentiation cache is keyed by this identity,
//!   not by value, so two independently constructed elements of equal value
//!   are cached independently.

use num_bigint::BigUint;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Hands out process-unique identifiers for group and element instances.
pub(crate) fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// The algebraic value of a group element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A residue in a Zp* group.
    Zp(BigUint),
    /// An affine point on an elliptic curve, over a prime or binary field.
    Point { x: BigUint, y: BigUint },
    /// The point at infinity, the identity of an elliptic-curve group.
    Infinity,
}

impl ElementKind {
    pub fn is_infinity(&self) -> bool {
        matches!(self, ElementKind::Infinity)
    }
}

/// An immutable element of one specific dlog group.
#[derive(Debug, Clone)]
pub struct GroupElement {
    element_id: u64,
    group_id: u64,
    kind: ElementKind,
}

impl GroupElement {
    /// Creates an element with a fresh instance identity, tagged with the
    /// group that produced it.
    pub(crate) fn new(group_id: u64, kind: ElementKind) -> Self {
        GroupElement {
            element_id: next_id(),
            group_id,
            kind,
        }
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// The instance identity used as the fixed-base cache key.
    pub fn element_id(&self) -> u64 {
        self.element_id
    }

    pub(crate) fn group_id(&self) -> u64 {
        self.group_id
    }

    /// The residue value, for elements of a Zp* group.
    pub fn value(&self) -> Option<&BigUint> {
        match &self.kind {
            ElementKind::Zp(value) => Some(value),
            _ => None,
        }
    }

    /// The affine coordinates, for non-infinity elliptic-curve points.
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match &self.kind {
            ElementKind::Point { x, y } => Some((x, y)),
            _ => None,
        }
    }

    pub fn is_infinity(&self) -> bool {
        self.kind.is_infinity()
    }
}

/// Equality compares the mathematical value and the owning group, never the
/// instance identity.
impl PartialEq for GroupElement {
    fn eq(&self, other: &Self) -> bool {
        self.group_id == other.group_id && self.kind == other.kind
    }
}

impl Eq for GroupElement {}

impl Hash for GroupElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.group_id.hash(state);
        self.kind.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_fresh_per_instance() {
        let a = GroupElement::new(7, ElementKind::Zp(BigUint::from(5_u32)));
        let b = GroupElement::new(7, ElementKind::Zp(BigUint::from(5_u32)));
        assert_eq!(a, b);
        assert_ne!(a.element_id(), b.element_id());
    }

    #[test]
    fn test_clone_preserves_identity() {
        let a = GroupElement::new(7, ElementKind::Zp(BigUint::from(5_u32)));
        let b = a.clone();
        assert_eq!(a.element_id(), b.element_id());
    }

    #[test]
    fn test_cross_group_elements_are_unequal() {
        let a = GroupElement::new(1, ElementKind::Zp(BigUint::from(5_u32)));
        let b = GroupElement::new(2, ElementKind::Zp(BigUint::from(5_u32)));
        assert_ne!(a, b);
    }

    #[test]
    fn test_accessors() {
        let point = GroupElement::new(
            1,
            ElementKind::Point {
                x: BigUint::from(3_u32),
                y: BigUint::from(9_u32),
            },
        );
        assert_eq!(
            point.coordinates(),
            Some((&BigUint::from(3_u32), &BigUint::from(9_u32)))
        );
        assert_eq!(point.value(), None);
        assert!(!point.is_infinity());
        assert!(GroupElement::new(1, ElementKind::Infinity).is_infinity());
    }
}

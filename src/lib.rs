// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! A discrete logarithm group abstraction over safe-prime Zp* groups and
//! elliptic curves, with simultaneous multi-exponentiation and fixed-base
//! exponentiation caching.

pub mod backend;
pub mod curves;
pub mod element;
pub mod errors;
pub mod exponentiation;
pub mod group;
pub mod params;
pub mod util;

pub use backend::{ArithmeticBackend, NumBackend};
pub use element::{ElementKind, GroupElement};
pub use errors::DlogError;
pub use group::DlogGroup;
pub use params::{F2mBasis, GroupParameters};

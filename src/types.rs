//! Shared types used across the codebase

use std::fmt::Debug;
use std::marker::PhantomData;

use thiserror::Error;

/// A closed set of enum variants with a stable declaration order.
///
/// The order of `VARIANTS` is the ordinal used when pairing two enums that
/// describe the same concept under different symbol names.
pub trait ClosedEnum: Copy + Eq + Debug + Send + Sync + 'static {
    /// Type name reported in compatibility errors
    const NAME: &'static str;

    /// All variants, in declaration order
    const VARIANTS: &'static [Self];

    /// Symbol this variant is written as
    fn symbol(self) -> &'static str;

    /// Position of this variant inside `VARIANTS`
    fn ordinal(self) -> Option<usize> {
        Self::VARIANTS.iter().position(|v| *v == self)
    }
}

/// Two enum definitions that do not describe the same variant set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Enum {left} ({left_len} variants) is incompatible with {right} ({right_len} variants)")]
pub struct EnumIncompatible {
    pub left: &'static str,
    pub right: &'static str,
    pub left_len: usize,
    pub right_len: usize,
}

/// Check whether two enums can be paired variant by variant
pub fn is_compatible<A: ClosedEnum, B: ClosedEnum>() -> bool {
    A::VARIANTS.len() == B::VARIANTS.len()
}

/// Ordinal mapping table between two compatible enums.
///
/// Construction is the only place cardinality is checked; once built, both
/// directions are total.
#[derive(Debug, Clone, Copy)]
pub struct EnumTable<A, B> {
    _pair: PhantomData<(A, B)>,
}

impl<A: ClosedEnum, B: ClosedEnum> EnumTable<A, B> {
    pub fn new() -> Result<Self, EnumIncompatible> {
        if !is_compatible::<A, B>() {
            return Err(Self::incompatible());
        }
        Ok(Self { _pair: PhantomData })
    }

    /// Map a left-hand variant onto its right-hand counterpart
    pub fn forward(&self, value: A) -> Result<B, EnumIncompatible> {
        value
            .ordinal()
            .and_then(|i| B::VARIANTS.get(i).copied())
            .ok_or_else(Self::incompatible)
    }

    /// Map a right-hand variant back onto its left-hand counterpart
    pub fn backward(&self, value: B) -> Result<A, EnumIncompatible> {
        value
            .ordinal()
            .and_then(|i| A::VARIANTS.get(i).copied())
            .ok_or_else(Self::incompatible)
    }

    /// Symbol pairs in ordinal order, for diagnostics
    pub fn pairs(&self) -> Vec<(&'static str, &'static str)> {
        A::VARIANTS
            .iter()
            .zip(B::VARIANTS.iter())
            .map(|(a, b)| (a.symbol(), b.symbol()))
            .collect()
    }

    fn incompatible() -> EnumIncompatible {
        EnumIncompatible {
            left: A::NAME,
            right: B::NAME,
            left_len: A::VARIANTS.len(),
            right_len: B::VARIANTS.len(),
        }
    }
}

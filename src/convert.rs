//! Conditional byte-order reversal
//!
//! Converts values between a source and a target byte order, reversing
//! only when the two orders disagree after native resolution. The
//! decision is available in two forms:
//!
//! - **Compile-time**: [`conditional_reverse`] over two [`tag`] types,
//!   plus the four named wrappers (`native_to_big`, `big_to_native`, ...)
//! - **Runtime**: [`runtime_conditional_reverse`] over two [`Order`]
//!   values, for code that learns orders from configuration or frame
//!   headers
//!
//! Both forms produce identical results for every order combination.

use crate::order::Order;
use crate::reverse::ReverseEndian;

// ============================================================================
// Compile-Time Order Tags
// ============================================================================

/// Type-level order tags for [`conditional_reverse`]
///
/// Each tag is an uninhabited type carrying one [`Order`] value, so a
/// source/target pair can be fixed in a function signature:
///
/// ```
/// use voltage_endian::{conditional_reverse, tag};
///
/// let wire = conditional_reverse::<tag::Native, tag::Big, u32>(0x12345678);
/// # let _ = wire;
/// ```
pub mod tag {
    /// Big-endian order tag
    pub enum Big {}

    /// Little-endian order tag
    pub enum Little {}

    /// Host order tag
    pub enum Native {}
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::tag::Big {}
    impl Sealed for super::tag::Little {}
    impl Sealed for super::tag::Native {}
}

/// Compile-time byte order tag
///
/// Sealed: the three types in [`tag`] are the only implementations.
pub trait OrderTag: sealed::Sealed {
    /// The order this tag denotes
    const ORDER: Order;
}

impl OrderTag for tag::Big {
    const ORDER: Order = Order::Big;
}

impl OrderTag for tag::Little {
    const ORDER: Order = Order::Little;
}

impl OrderTag for tag::Native {
    const ORDER: Order = Order::Native;
}

// ============================================================================
// Compile-Time Conditional Reversal
// ============================================================================

/// Convert `value` from `Src` order to `Dst` order
///
/// Identity when both tags resolve to the same physical order, otherwise
/// a full byte reversal. The comparison is between associated constants,
/// so each instantiation folds to one of the two branches.
#[inline]
#[must_use]
pub fn conditional_reverse<Src, Dst, T>(value: T) -> T
where
    Src: OrderTag,
    Dst: OrderTag,
    T: ReverseEndian,
{
    if Src::ORDER.resolve() == Dst::ORDER.resolve() {
        value
    } else {
        value.reverse_endian()
    }
}

/// Convert `value` from `Src` order to `Dst` order in place
#[inline]
pub fn conditional_reverse_in_place<Src, Dst, T>(value: &mut T)
where
    Src: OrderTag,
    Dst: OrderTag,
    T: ReverseEndian,
{
    if Src::ORDER.resolve() != Dst::ORDER.resolve() {
        value.reverse_endian_in_place();
    }
}

// ============================================================================
// Named Convenience Wrappers
// ============================================================================

/// Convert `value` from host order to big-endian
#[inline]
#[must_use]
pub fn native_to_big<T: ReverseEndian>(value: T) -> T {
    conditional_reverse::<tag::Native, tag::Big, T>(value)
}

/// Convert `value` from host order to little-endian
#[inline]
#[must_use]
pub fn native_to_little<T: ReverseEndian>(value: T) -> T {
    conditional_reverse::<tag::Native, tag::Little, T>(value)
}

/// Convert `value` from big-endian to host order
#[inline]
#[must_use]
pub fn big_to_native<T: ReverseEndian>(value: T) -> T {
    conditional_reverse::<tag::Big, tag::Native, T>(value)
}

/// Convert `value` from little-endian to host order
#[inline]
#[must_use]
pub fn little_to_native<T: ReverseEndian>(value: T) -> T {
    conditional_reverse::<tag::Little, tag::Native, T>(value)
}

/// Convert `value` from host order to big-endian in place
#[inline]
pub fn native_to_big_in_place<T: ReverseEndian>(value: &mut T) {
    conditional_reverse_in_place::<tag::Native, tag::Big, T>(value);
}

/// Convert `value` from host order to little-endian in place
#[inline]
pub fn native_to_little_in_place<T: ReverseEndian>(value: &mut T) {
    conditional_reverse_in_place::<tag::Native, tag::Little, T>(value);
}

/// Convert `value` from big-endian to host order in place
#[inline]
pub fn big_to_native_in_place<T: ReverseEndian>(value: &mut T) {
    conditional_reverse_in_place::<tag::Big, tag::Native, T>(value);
}

/// Convert `value` from little-endian to host order in place
#[inline]
pub fn little_to_native_in_place<T: ReverseEndian>(value: &mut T) {
    conditional_reverse_in_place::<tag::Little, tag::Native, T>(value);
}

// ============================================================================
// Runtime Conditional Reversal
// ============================================================================

/// Convert `value` from `from` order to `to` order
///
/// Same decision rule as [`conditional_reverse`] with the orders supplied
/// at run time; agrees with the compile-time form for every combination.
#[inline]
#[must_use]
pub fn runtime_conditional_reverse<T: ReverseEndian>(value: T, from: Order, to: Order) -> T {
    if from.resolve() == to.resolve() {
        value
    } else {
        value.reverse_endian()
    }
}

/// Convert `value` from `from` order to `to` order in place
#[inline]
pub fn runtime_conditional_reverse_in_place<T: ReverseEndian>(
    value: &mut T,
    from: Order,
    to: Order,
) {
    if from.resolve() != to.resolve() {
        value.reverse_endian_in_place();
    }
}

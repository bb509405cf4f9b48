// SPDX-License-Identifier: Apache-2.0

use core::cmp::PartialEq;
use core::ops::{BitAnd, BitOr, Shl, Shr};

/// Trait for bit stacks.
/// This trait is implemented for both integer and [T; N] types.
///
/// NOTE: BitStack implementations do NOT implement depth tracking.
/// This is the responsibility of the caller.
pub trait BitStack {
    /// Returns a default-initialized bit stack.
    fn default() -> Self;
    /// Pushes a bit (true for 1, false for 0) onto the stack.
    fn push(&mut self, bit: bool);
    /// Pops the top bit off the stack, returning it.
    fn pop(&mut self) -> bool;
    /// Returns the top bit without removing it.
    fn top(&self) -> bool;
    /// Number of bits the stack can hold before the oldest ones are lost.
    fn capacity() -> usize
    where
        Self: Sized,
    {
        core::mem::size_of::<Self>() * 8
    }
}

/// Automatic implementation for builtin-types ( u8, u32 etc ).
impl<T> BitStack for T
where
    T: Shl<u8, Output = T>
        + Shr<u8, Output = T>
        + BitAnd<T, Output = T>
        + BitOr<Output = T>
        + PartialEq
        + Clone,
    T: From<u8>, // To create 0 and 1 constants
{
    fn default() -> Self {
        T::from(0)
    }

    fn push(&mut self, bit: bool) {
        *self = (self.clone() << 1u8) | T::from(bit as u8);
    }

    fn pop(&mut self) -> bool {
        let bit = (self.clone() & T::from(1)) != T::from(0);
        *self = self.clone() >> 1u8;
        bit
    }

    fn top(&self) -> bool {
        (self.clone() & T::from(1)) != T::from(0)
    }
}

/// Wrapper for arrays to implement BitStack trait.
/// Provides large BitStack storage using multiple elements,
/// for walking very deeply nested documents.
#[derive(Debug)]
pub struct ArrayBitStack<const N: usize, T>(pub [T; N]);

impl<const N: usize, T> BitStack for ArrayBitStack<N, T>
where
    T: Shl<u8, Output = T>
        + Shr<u8, Output = T>
        + BitAnd<T, Output = T>
        + BitOr<Output = T>
        + PartialEq
        + Clone
        + From<u8>,
{
    fn default() -> Self {
        ArrayBitStack(core::array::from_fn(|_| T::from(0)))
    }

    fn push(&mut self, bit: bool) {
        // Array is big-endian storage: shift every element left, carrying
        // each element's MSB into its left neighbour
        let mut carry = T::from(bit as u8);
        let msb_shift = (core::mem::size_of::<T>() * 8 - 1) as u8;
        for element in self.0.iter_mut().rev() {
            let old_msb = (element.clone() >> msb_shift) & T::from(1);
            *element = (element.clone() << 1u8) | carry;
            carry = old_msb;
        }
    }

    fn pop(&mut self) -> bool {
        let bit = self.top();
        let mut carry = T::from(0);
        let msb_shift = (core::mem::size_of::<T>() * 8 - 1) as u8;
        for element in self.0.iter_mut() {
            let old_lsb = element.clone() & T::from(1);
            *element = (element.clone() >> 1u8) | (carry << msb_shift);
            carry = old_lsb;
        }
        bit
    }

    fn top(&self) -> bool {
        match self.0.last() {
            Some(last) => (last.clone() & T::from(1)) != T::from(0),
            None => false,
        }
    }
}

/// Selects the storage the walker uses to remember which containers are open.
///
/// Each open container takes one bit, so the bucket's bit width is the
/// deepest nesting the walker accepts.
pub trait BitStackConfig {
    type Bucket: BitStack;
}

/// Default configuration: a `u64` bucket, 64 levels of nesting.
pub struct DefaultConfig;

impl BitStackConfig for DefaultConfig {
    type Bucket = u64;
}

/// User-facing configuration over any bucket type.
/// Usage: `BitStackStruct<u32>` for 32 levels, `BitStackStruct<ArrayBitStack<4, u64>>` for 256.
pub struct BitStackStruct<B> {
    _phantom: core::marker::PhantomData<B>,
}

impl<B: BitStack> BitStackConfig for BitStackStruct<B> {
    type Bucket = B;
}

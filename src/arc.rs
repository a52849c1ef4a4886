//! Object identifier arcs.
//!
//! This is a private module. Its public content is being re-exported by the
//! parent module.

use std::{cmp, fmt};
use smallvec::SmallVec;


//------------ Arc -----------------------------------------------------------

/// A single component of an object identifier.
///
/// Arcs are non-negative integers. Neither the text form nor the encoded
/// form of an object identifier put an upper bound on them, so this type
/// keeps an arbitrary-precision value. Anything that fits into a `u64` is
/// kept inline without allocating.
///
/// Apart from comparison and formatting there is little you can do with an
/// arc. If you need a native integer, try [`to_u32`] or [`to_u64`].
///
/// [`to_u32`]: #method.to_u32
/// [`to_u64`]: #method.to_u64
#[derive(Clone, Default, Eq, Hash, PartialEq)]
pub struct Arc {
    /// The value as 32 bit limbs, least significant first.
    ///
    /// There are never any trailing zero limbs, so zero is the empty
    /// vector and equal values have equal limbs.
    limbs: SmallVec<[u32; 2]>,
}

impl Arc {
    /// Returns an arc with value zero.
    pub fn zero() -> Self {
        Arc { limbs: SmallVec::new() }
    }

    /// Returns whether the arc is zero.
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Parses an arc from its decimal representation.
    ///
    /// The string must consist of ASCII digits only and must not have a
    /// leading zero unless it is exactly `"0"`. Returns `None` otherwise.
    pub fn from_decimal(s: &str) -> Option<Self> {
        let digits = s.as_bytes();
        match digits.first().copied() {
            None => return None,
            Some(b'0') if digits.len() > 1 => return None,
            _ => { }
        }
        let mut res = Arc::zero();
        for &ch in digits {
            if !ch.is_ascii_digit() {
                return None
            }
            res.mul_add(10, u32::from(ch - b'0'));
        }
        Some(res)
    }

    /// Attempts to convert the arc to a `u32`.
    pub fn to_u32(&self) -> Option<u32> {
        match self.limbs.len() {
            0 => Some(0),
            1 => Some(self.limbs[0]),
            _ => None
        }
    }

    /// Attempts to convert the arc to a `u64`.
    pub fn to_u64(&self) -> Option<u64> {
        match self.limbs.len() {
            0 => Some(0),
            1 => Some(u64::from(self.limbs[0])),
            2 => {
                Some(u64::from(self.limbs[1]) << 32 | u64::from(self.limbs[0]))
            }
            _ => None
        }
    }

    /// Drops trailing zero limbs.
    fn normalize(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }
}


/// # Arithmetic
///
/// The codec needs only a handful of operations with small operands.
impl Arc {
    /// Multiplies the value by `mul` and then adds `add`.
    pub(crate) fn mul_add(&mut self, mul: u32, add: u32) {
        let mut carry = u64::from(add);
        for limb in self.limbs.iter_mut() {
            // At most (2^32 - 1)^2 + 2^32 - 1 which is below 2^64.
            let value = u64::from(*limb) * u64::from(mul) + carry;
            *limb = value as u32;
            carry = value >> 32;
        }
        if carry != 0 {
            self.limbs.push(carry as u32);
        }
        self.normalize();
    }

    /// Adds `add` to the value.
    pub(crate) fn add_small(&mut self, add: u32) {
        self.mul_add(1, add)
    }

    /// Returns the value minus `sub` or `None` if that would be negative.
    pub(crate) fn checked_sub_small(&self, sub: u32) -> Option<Self> {
        if *self < Arc::from(sub) {
            return None
        }
        let mut res = self.clone();
        let mut borrow = u64::from(sub);
        for limb in res.limbs.iter_mut() {
            if borrow == 0 {
                break
            }
            let value = u64::from(*limb);
            if value >= borrow {
                *limb = (value - borrow) as u32;
                borrow = 0;
            }
            else {
                *limb = (value + (1 << 32) - borrow) as u32;
                borrow = 1;
            }
        }
        res.normalize();
        Some(res)
    }

    /// Divides the value by `div` in place and returns the remainder.
    ///
    /// `div` must not be zero.
    fn div_rem(&mut self, div: u32) -> u32 {
        let div = u64::from(div);
        let mut rem = 0u64;
        for limb in self.limbs.iter_mut().rev() {
            let value = rem << 32 | u64::from(*limb);
            *limb = (value / div) as u32;
            rem = value % div;
        }
        self.normalize();
        rem as u32
    }

    /// Returns the number of significant bits.
    fn bit_len(&self) -> usize {
        match self.limbs.last() {
            Some(last) => {
                (self.limbs.len() - 1) * 32
                    + (32 - last.leading_zeros() as usize)
            }
            None => 0
        }
    }

    /// Returns the seven bit group with the given index.
    ///
    /// Group 0 contains the least significant bits.
    fn group(&self, index: usize) -> u8 {
        let bit = index * 7;
        let (limb, shift) = (bit / 32, bit % 32);
        let mut value = u64::from(
            self.limbs.get(limb).copied().unwrap_or(0)
        ) >> shift;
        if shift > 25 {
            value |= u64::from(
                self.limbs.get(limb + 1).copied().unwrap_or(0)
            ) << (32 - shift);
        }
        (value & 0x7F) as u8
    }
}


/// # Base-128 Encoding
///
/// Each arc is encoded as a sequence of seven bit groups, most significant
/// group first, with bit 8 set on all octets but the last. The encoding is
/// always minimal, i.e., never starts with the octet 0x80.
impl Arc {
    /// Returns the number of octets of the base-128 encoding.
    pub(crate) fn base128_len(&self) -> usize {
        cmp::max(1, (self.bit_len() + 6) / 7)
    }

    /// Appends the base-128 encoding to `target`.
    pub(crate) fn write_base128(&self, target: &mut Vec<u8>) {
        for index in (0..self.base128_len()).rev() {
            let mut octet = self.group(index);
            if index != 0 {
                octet |= 0x80
            }
            target.push(octet)
        }
    }
}


//--- From

impl From<u8> for Arc {
    fn from(value: u8) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<u16> for Arc {
    fn from(value: u16) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<u32> for Arc {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<u64> for Arc {
    fn from(value: u64) -> Self {
        let mut res = Arc {
            limbs: SmallVec::from_buf([value as u32, (value >> 32) as u32])
        };
        res.normalize();
        res
    }
}


//--- PartialOrd and Ord

impl PartialOrd for Arc {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Arc {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        // Normalized limbs mean more limbs is a bigger value.
        self.limbs.len().cmp(&other.limbs.len()).then_with(|| {
            self.limbs.iter().rev().cmp(other.limbs.iter().rev())
        })
    }
}


//--- Display and Debug

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(value) = self.to_u64() {
            return write!(f, "{}", value)
        }

        // Peel off nine decimal digits at a time, least significant first.
        let mut value = self.clone();
        let mut chunks = Vec::new();
        while !value.is_zero() {
            chunks.push(value.div_rem(1_000_000_000));
        }
        let mut chunks = chunks.into_iter().rev();
        if let Some(first) = chunks.next() {
            write!(f, "{}", first)?;
        }
        for chunk in chunks {
            write!(f, "{:09}", chunk)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Arc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Arc({})", self)
    }
}


//============ Tests =========================================================

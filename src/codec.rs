//! Encoding and decoding of object identifier contents.
//!
//! The contents octets of an object identifier are a sequence of
//! subidentifiers, each an unsigned integer in base-128 with bit 8 of every
//! octet but the last one set. The first two arcs share the first
//! subidentifier: its value is `40 * first + second`. Because the second
//! arc is limited to 0 to 39 for a first arc of 0 or 1, values below 80
//! belong to these and anything else has a first arc of 2.
//!
//! DER requires the shortest possible encoding of each subidentifier, so
//! a subidentifier must never start with the octet 0x80.

use std::mem;
use bytes::Bytes;
use crate::arc::Arc;
use crate::arcs::Arcs;
use crate::config::Limits;
use crate::error::DecodeError;


//------------ encode --------------------------------------------------------

/// Returns the contents octets for a sequence of arcs.
pub fn encode(arcs: &Arcs) -> Bytes {
    let mut target = Vec::with_capacity(encoded_len(arcs));
    first_subidentifier(arcs).write_base128(&mut target);
    for arc in &arcs.as_slice()[2..] {
        arc.write_base128(&mut target);
    }
    target.into()
}

/// Returns the number of contents octets for a sequence of arcs.
pub fn encoded_len(arcs: &Arcs) -> usize {
    first_subidentifier(arcs).base128_len()
        + arcs.as_slice()[2..].iter().map(Arc::base128_len).sum::<usize>()
}

/// Packs the first two arcs into one subidentifier.
fn first_subidentifier(arcs: &Arcs) -> Arc {
    // The first arc is at most 2 for a valid sequence.
    let first = arcs.first().to_u32().unwrap_or(2);
    let mut res = arcs.second().clone();
    res.add_small(40 * first);
    res
}


//------------ decode --------------------------------------------------------

/// Decodes contents octets using the default limits.
pub fn decode(octets: &[u8]) -> Result<Arcs, DecodeError> {
    decode_with(octets, &Limits::default())
}

/// Decodes contents octets subject to the given limits.
pub fn decode_with(
    octets: &[u8], limits: &Limits
) -> Result<Arcs, DecodeError> {
    if octets.is_empty() {
        xerr!(return Err(DecodeError::Empty))
    }
    if octets.len() > limits.max_octets {
        xerr!(return Err(DecodeError::TooLong))
    }

    let mut subidentifiers = Vec::new();
    let mut current = Arc::zero();
    let mut at_start = true;
    for (index, &octet) in octets.iter().enumerate() {
        if at_start && octet == 0x80 && index + 1 < octets.len() {
            xerr!(return Err(DecodeError::NonMinimal))
        }
        current.mul_add(0x80, u32::from(octet & 0x7F));
        at_start = octet & 0x80 == 0;
        if at_start {
            subidentifiers.push(mem::take(&mut current));
        }
    }
    if !at_start {
        xerr!(return Err(DecodeError::Truncated))
    }

    let mut subidentifiers = subidentifiers.into_iter();
    let mut arcs = match subidentifiers.next() {
        Some(first) => unpack_first(first),
        None => xerr!(return Err(DecodeError::InvalidStructure))
    };
    arcs.extend(subidentifiers);
    Arcs::from_vec_with(arcs, limits).map_err(|_| {
        xerr!(DecodeError::InvalidStructure)
    })
}

/// Unpacks the first subidentifier into the first two arcs.
fn unpack_first(first: Arc) -> Vec<Arc> {
    match first.checked_sub_small(80) {
        Some(second) => vec![Arc::from(2u8), second],
        None => {
            // Below 80, so it fits into a u32.
            let value = first.to_u32().unwrap_or(0);
            vec![Arc::from(value / 40), Arc::from(value % 40)]
        }
    }
}


//============ Tests =========================================================

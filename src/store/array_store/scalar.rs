//! Linear two-pointer merges over sorted `u16` slices.
//!
//! Used directly for small inputs, and as the fallback tail of the galloping
//! merge in [`super::gallop`] once the size ratio between operands drops
//! below the galloping threshold.

use core::cmp::Ordering;

pub fn or(lhs: &[u16], rhs: &[u16]) -> Vec<u16> {
    let mut out = Vec::with_capacity(lhs.len() + rhs.len());
    let (mut i, mut j) = (0, 0);
    while i < lhs.len() && j < rhs.len() {
        let (a, b) = (lhs[i], rhs[j]);
        match a.cmp(&b) {
            Ordering::Less => {
                out.push(a);
                i += 1;
            }
            Ordering::Greater => {
                out.push(b);
                j += 1;
            }
            Ordering::Equal => {
                out.push(a);
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&lhs[i..]);
    out.extend_from_slice(&rhs[j..]);
    out
}

pub fn and(lhs: &[u16], rhs: &[u16]) -> Vec<u16> {
    let mut out = Vec::with_capacity(lhs.len().min(rhs.len()));
    let (mut i, mut j) = (0, 0);
    while i < lhs.len() && j < rhs.len() {
        let (a, b) = (lhs[i], rhs[j]);
        match a.cmp(&b) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                out.push(a);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

pub fn sub(lhs: &[u16], rhs: &[u16]) -> Vec<u16> {
    let mut out = Vec::with_capacity(lhs.len());
    let (mut i, mut j) = (0, 0);
    while i < lhs.len() && j < rhs.len() {
        let (a, b) = (lhs[i], rhs[j]);
        match a.cmp(&b) {
            Ordering::Less => {
                out.push(a);
                i += 1;
            }
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&lhs[i..]);
    out
}

pub fn xor(lhs: &[u16], rhs: &[u16]) -> Vec<u16> {
    let mut out = Vec::with_capacity(lhs.len() + rhs.len());
    let (mut i, mut j) = (0, 0);
    while i < lhs.len() && j < rhs.len() {
        let (a, b) = (lhs[i], rhs[j]);
        match a.cmp(&b) {
            Ordering::Less => {
                out.push(a);
                i += 1;
            }
            Ordering::Greater => {
                out.push(b);
                j += 1;
            }
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&lhs[i..]);
    out.extend_from_slice(&rhs[j..]);
    out
}

/// Intersection cardinality without materializing the result.
pub fn and_cardinality(lhs: &[u16], rhs: &[u16]) -> u64 {
    let mut count = 0u64;
    let (mut i, mut j) = (0, 0);
    while i < lhs.len() && j < rhs.len() {
        let (a, b) = (lhs[i], rhs[j]);
        match a.cmp(&b) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                count += 1;
                i += 1;
                j += 1;
            }
        }
    }
    count
}

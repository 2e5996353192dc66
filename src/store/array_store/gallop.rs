//! Galloping (exponential) merges, used when the two operand slices differ
//! greatly in size (`larger.len() / smaller.len() > 64`, per the dispatch
//! rule in [`super::mod`]).
//!
//! Each step probes ahead by doubling offsets (1, 2, 4, 8, ...) in the larger
//! slice until overshooting the target, then binary-searches the bracket.
//! This keeps the cost near `O(small * log(large))` instead of `O(small +
//! large)` for the linear merge, which dominates when one side is much
//! sparser in-range than the other.

use super::scalar;

/// Threshold above which a galloping merge is selected over the linear
/// two-pointer merge, per the size-ratio rule.
pub const GALLOP_THRESHOLD: usize = 64;

pub fn should_gallop(lhs_len: usize, rhs_len: usize) -> bool {
    let (small, large) = if lhs_len <= rhs_len {
        (lhs_len, rhs_len)
    } else {
        (rhs_len, lhs_len)
    };
    small > 0 && large / small > GALLOP_THRESHOLD
}

/// Finds the index of the first element of `slice` that is `>= target`,
/// starting the exponential probe at `hint`.
fn gallop_lower_bound(slice: &[u16], hint: usize, target: u16) -> usize {
    if hint >= slice.len() || slice[hint] >= target {
        return slice[..hint.min(slice.len())].partition_point(|&v| v < target);
    }
    let mut lo = hint;
    let mut step = 1usize;
    loop {
        let probe = lo + step;
        if probe >= slice.len() || slice[probe] >= target {
            let hi = probe.min(slice.len());
            return lo + slice[lo..hi].partition_point(|&v| v < target);
        }
        lo = probe;
        step *= 2;
    }
}

pub fn and(lhs: &[u16], rhs: &[u16]) -> Vec<u16> {
    let (small, large) = if lhs.len() <= rhs.len() { (lhs, rhs) } else { (rhs, lhs) };
    let mut out = Vec::with_capacity(small.len());
    let mut large_pos = 0usize;
    for &value in small {
        large_pos = gallop_lower_bound(large, large_pos, value);
        if large_pos < large.len() && large[large_pos] == value {
            out.push(value);
        }
    }
    out
}

pub fn and_cardinality(lhs: &[u16], rhs: &[u16]) -> u64 {
    and(lhs, rhs).len() as u64
}

pub fn or(lhs: &[u16], rhs: &[u16]) -> Vec<u16> {
    // `or` gains little from galloping (every element of both sides is
    // emitted regardless); fall back to the linear merge.
    scalar::or(lhs, rhs)
}

pub fn sub(lhs: &[u16], rhs: &[u16]) -> Vec<u16> {
    let mut out = Vec::with_capacity(lhs.len());
    let mut rhs_pos = 0usize;
    for &value in lhs {
        rhs_pos = gallop_lower_bound(rhs, rhs_pos, value);
        if rhs_pos >= rhs.len() || rhs[rhs_pos] != value {
            out.push(value);
        }
    }
    out
}

pub fn xor(lhs: &[u16], rhs: &[u16]) -> Vec<u16> {
    scalar::xor(lhs, rhs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallop_matches_scalar_and() {
        let small: Vec<u16> = (0..20).collect();
        let large: Vec<u16> = (0..4000).map(|i| i * 2).collect();
        assert_eq!(and(&small, &large), scalar::and(&small, &large));
    }

    #[test]
    fn gallop_matches_scalar_sub() {
        let small: Vec<u16> = (0..20).map(|i| i * 3).collect();
        let large: Vec<u16> = (0..4000).collect();
        assert_eq!(sub(&small, &large), scalar::sub(&small, &large));
    }
}

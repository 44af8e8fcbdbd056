//! Unbiased integer sampling from coin flips
//!
//! Reducing a hash modulo `max` favours small values whenever `max` does
//! not divide a power of two. This module instead uses Lumbroso's fast
//! dice roller ("Optimal Discrete Uniform Generation from Coin Flips, and
//! Applications", 2013), which is exactly uniform and consumes
//! `log2(max) + O(1)` bits on average.
//!
//! The algorithm keeps a `range` and a `value` uniformly distributed in
//! `[0, range)`. Each coin flip doubles both. Once `range >= max`, a
//! `value` below `max` is accepted; otherwise `max` is subtracted from
//! both, which leaves `value` uniform over the smaller leftover range, and
//! the loop continues. No bits are discarded.
//!
//! Both counters are arbitrary precision so that the comparison against
//! `max` is exact for any `max`.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::error::{DrawError, Result};
use crate::rng::BitSource;

/// Draws a uniform integer in `[0, max)`.
///
/// Returns [`DrawError::EmptyRange`] when `max` is zero.
pub fn uniform_below<S: BitSource>(source: &mut S, max: &BigUint) -> Result<BigUint> {
    if max.is_zero() {
        return Err(DrawError::EmptyRange);
    }

    let mut range = BigUint::one();
    let mut value = BigUint::zero();

    loop {
        range <<= 1u32;
        value <<= 1u32;
        value += source.next_bit() as u32;

        if range >= *max {
            if value < *max {
                return Ok(value);
            }

            range -= max;
            value -= max;
        }
    }
}

/// Draws a uniform position in `[0, len)`.
///
/// With `len == 1` the only possible answer is returned without reading
/// any bit.
pub fn index_below<S: BitSource>(source: &mut S, len: usize) -> Result<usize> {
    match len {
        0 => Err(DrawError::EmptyRange),
        1 => Ok(0),
        _ => {
            let value = uniform_below(source, &BigUint::from(len))?;

            // value < len, so it always fits.
            Ok(value.to_usize().unwrap_or_default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed bit sequence, then zeros.
    struct Script {
        bits: Vec<u8>,
        pos: usize,
    }

    impl Script {
        fn new(bits: &[u8]) -> Self {
            Self {
                bits: bits.to_vec(),
                pos: 0,
            }
        }
    }

    impl BitSource for Script {
        fn next_bit(&mut self) -> u8 {
            let bit = self.bits.get(self.pos).copied().unwrap_or(0);
            self.pos += 1;
            bit
        }
    }

    #[test]
    fn zero_max_is_rejected() {
        let mut src = Script::new(&[]);

        assert_eq!(uniform_below(&mut src, &BigUint::zero()), Err(DrawError::EmptyRange));
        assert_eq!(index_below(&mut src, 0), Err(DrawError::EmptyRange));
    }

    #[test]
    fn single_slot_reads_no_bits() {
        let mut src = Script::new(&[1, 1, 1]);

        assert_eq!(index_below(&mut src, 1), Ok(0));
        assert_eq!(src.pos, 0);
    }

    #[test]
    fn power_of_two_reads_bits_msb_first() {
        // max = 4: two flips, first flip is the high bit.
        let mut src = Script::new(&[1, 0]);
        assert_eq!(index_below(&mut src, 4), Ok(2));
        assert_eq!(src.pos, 2);

        let mut src = Script::new(&[0, 1]);
        assert_eq!(index_below(&mut src, 4), Ok(1));
    }

    #[test]
    fn rejected_value_is_recycled() {
        // max = 3. Flips 1,1 give range 4, value 3: rejected, leaving
        // range 1, value 0. Next flip 1 gives range 2, value 1, still
        // below max. Flip 0 gives range 4, value 2: accepted.
        let mut src = Script::new(&[1, 1, 1, 0]);

        assert_eq!(index_below(&mut src, 3), Ok(2));
        assert_eq!(src.pos, 4);
    }

    #[test]
    fn accepts_as_soon_as_range_covers_max() {
        // max = 3, flips 1,0 give value 2 < 3 after two flips.
        let mut src = Script::new(&[1, 0]);

        assert_eq!(index_below(&mut src, 3), Ok(2));
        assert_eq!(src.pos, 2);
    }

    #[test]
    fn all_ones_always_terminates() {
        // With max = 3 a stream of ones cycles through value 3 and 1;
        // feed ones then zeros and make sure the answer stays in range.
        let mut bits = vec![1u8; 64];
        bits.push(0);
        let mut src = Script::new(&bits);

        let v = index_below(&mut src, 3).unwrap();
        assert!(v < 3);
    }

    #[test]
    fn handles_values_beyond_machine_words() {
        let max = BigUint::one() << 300u32;
        let mut src = Script::new(&[1u8; 300]);

        let v = uniform_below(&mut src, &max).unwrap();
        assert_eq!(v, &max - BigUint::one());
    }
}

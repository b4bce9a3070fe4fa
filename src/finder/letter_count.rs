//! Distinct-letter counting over 26-bit letter masks

/// Set bits in every 9-bit value
const BIT_COUNT: [u8; 512] = build_bit_count();

const fn build_bit_count() -> [u8; 512] {
    let mut table = [0u8; 512];
    let mut i = 0;
    while i < 512 {
        table[i] = (i as u32).count_ones() as u8;
        i += 1;
    }
    table
}

/// Number of distinct letters in a mask, summed over three 9-bit chunks
#[inline]
#[must_use]
pub const fn letter_count(mask: u32) -> u32 {
    BIT_COUNT[(mask & 0x1ff) as usize] as u32
        + BIT_COUNT[((mask >> 9) & 0x1ff) as usize] as u32
        + BIT_COUNT[((mask >> 18) & 0x1ff) as usize] as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_edges() {
        assert_eq!(BIT_COUNT[0], 0);
        assert_eq!(BIT_COUNT[1], 1);
        assert_eq!(BIT_COUNT[0b1_0110_1001], 5);
        assert_eq!(BIT_COUNT[511], 9);
    }

    #[test]
    fn agrees_with_count_ones() {
        for mask in [0, 1, 0x3ff_ffff, 0x155_5555, 1 << 25, (1 << 9) | (1 << 18)] {
            assert_eq!(letter_count(mask), mask.count_ones());
        }
    }

    #[test]
    fn counts_all_letters() {
        assert_eq!(letter_count((1 << 26) - 1), 26);
    }
}

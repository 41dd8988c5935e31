//! Range classification of the character register.
//!
//! The 32-bit register value space is partitioned into disjoint,
//! lexicographically contiguous regions. Classification is a chain of
//! unsigned comparisons — no table lookups, no state. Every status flag
//! except `retry` (and the one parked-surrogate `ready` override) derives
//! from the region alone, so the classifier gives identical answers no
//! matter which decoder produced the value.
//!
//! # Layout
//!
//! ```text
//! 00000000 ┬ Codepoint        valid Unicode scalar values + surrogates
//! 00110000 ┼ Extended         FSS-UTF values beyond Unicode (NONUNI)
//! 80000000 ┼ Reserved         unreachable gap (INVALID)
//! DDD80000 ┼ PairPartial      high surrogate + 1 stray byte (UNDERFLOW)
//! DDDC0000 ┼ Reserved
//! DDDDDD00 ┼ UnitPartial      1 stray UTF-16 byte (UNDERFLOW)
//! DDDDDE00 ┼ Reserved
//! F0000000 ┼ Overlong         6-byte overlong (low 26 bits = target)
//! F4000000 ┼ Unmasked         6-byte with preserved lead payload (INVALID)
//! F8000000 ┼ Overlong         5-byte overlong (low 21 bits = target)
//! F8200000 ┼ Unmasked         5-byte (INVALID)
//! FC000000 ┼ Truncated        5 of 6 bytes consumed (UNDERFLOW)
//! FE000000 ┼ Reserved
//! FFC00000 ┼ Overlong         4-byte overlong (low 16 bits = target)
//! FFC10000 ┼ Unmasked         4-byte (INVALID)
//! FFE00000 ┼ Truncated        4 of 5/6 bytes consumed
//! FFF80000 ┼ Reserved
//! FFFE0000 ┼ Overlong         3-byte overlong
//! FFFE0800 ┼ Unmasked         3-byte (INVALID)
//! FFFF0000 ┼ Truncated        3 of 4/5/6 bytes consumed
//! FFFFE000 ┼ Reserved
//! FFFFF000 ┼ Overlong         2-byte overlong
//! FFFFF080 ┼ Unmasked         2-byte (INVALID)
//! FFFFF800 ┼ Truncated        2 of 3/4/5/6 bytes consumed
//! FFFFFF80 ┼ LoneContinuation sign-extended 80..BF (INVALID)
//! FFFFFFC0 ┼ LoneLead         sign-extended C0..FD (UNDERFLOW)
//! FFFFFFFE ┴ InvalidByte      sign-extended FE/FF (INVALID)
//! ```

use super::constants::{
    EXTENDED_MAX, FIVE_BYTE_BASE, FOUR_BYTE_BASE, INVALID_BYTE_BASE, LONE_BYTE_BASE,
    LONE_LEAD_BASE, PAIR_PARTIAL_BASE, PAIR_PARTIAL_END, SIX_BYTE_BASE, THREE_BYTE_BASE,
    TRUNC_2_BASE, TRUNC_3_BASE, TRUNC_4_BASE, TRUNC_5OF6_BASE, TWO_BYTE_BASE, UNICODE_MAX,
    UNIT_PARTIAL_BASE, UNIT_PARTIAL_END,
};

/// The region a register value falls in.
///
/// Regions that appear in several windows of the layout (`Overlong`,
/// `Unmasked`, `Truncated`, `Reserved`) are merged into one variant each:
/// their status semantics are identical, and the associated sequence length
/// remains recoverable from the raw value (see `codec::utf8::encoded_len`).
///
/// # Example
///
/// ```
/// use utfcell::Region;
///
/// assert_eq!(Region::of(0x2603), Region::Codepoint);
/// assert_eq!(Region::of(0x0011_0000), Region::Extended);
/// assert_eq!(Region::of(0xFFFF_F000), Region::Overlong);
/// assert_eq!(Region::of(0xFFFF_F898), Region::Truncated);
/// assert_eq!(Region::of(0xFFFF_FF99), Region::LoneContinuation);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Valid Unicode code point, `0..=0x10FFFF` (surrogates included).
    Codepoint,
    /// Non-Unicode extended code point, `0x110000..=0x7FFFFFFF`.
    Extended,
    /// Unreachable gap between meaningful windows.
    Reserved,
    /// Parked UTF-16 high surrogate plus one stray byte.
    PairPartial,
    /// One parked UTF-16 byte.
    UnitPartial,
    /// Overlong FSS-UTF sequence of any length 2–6.
    Overlong,
    /// Syntactically impossible sequence with preserved lead payload bits.
    Unmasked,
    /// Truncated FSS-UTF sequence: a proper prefix of 2–5 consumed bytes.
    Truncated,
    /// A single continuation byte with no lead.
    LoneContinuation,
    /// A single leading byte awaiting continuations.
    LoneLead,
    /// A single `0xFE` or `0xFF` byte.
    InvalidByte,
}

impl Region {
    /// Classifies a register value.
    ///
    /// This is the single routing point for all state transitions: a chain
    /// of unsigned range comparisons over the layout above.
    #[must_use]
    pub const fn of(r: u32) -> Self {
        if r <= UNICODE_MAX {
            Self::Codepoint
        } else if r <= EXTENDED_MAX {
            Self::Extended
        } else if r < PAIR_PARTIAL_BASE {
            Self::Reserved
        } else if r < PAIR_PARTIAL_END {
            Self::PairPartial
        } else if r < UNIT_PARTIAL_BASE {
            Self::Reserved
        } else if r < UNIT_PARTIAL_END {
            Self::UnitPartial
        } else if r < SIX_BYTE_BASE {
            Self::Reserved
        } else if r < 0xF400_0000 {
            Self::Overlong
        } else if r < FIVE_BYTE_BASE {
            Self::Unmasked
        } else if r < 0xF820_0000 {
            Self::Overlong
        } else if r < TRUNC_5OF6_BASE {
            Self::Unmasked
        } else if r < 0xFE00_0000 {
            Self::Truncated
        } else if r < FOUR_BYTE_BASE {
            Self::Reserved
        } else if r < 0xFFC1_0000 {
            Self::Overlong
        } else if r < TRUNC_4_BASE {
            Self::Unmasked
        } else if r < 0xFFF8_0000 {
            Self::Truncated
        } else if r < THREE_BYTE_BASE {
            Self::Reserved
        } else if r < 0xFFFE_0800 {
            Self::Overlong
        } else if r < TRUNC_3_BASE {
            Self::Unmasked
        } else if r < 0xFFFF_E000 {
            Self::Truncated
        } else if r < TWO_BYTE_BASE {
            Self::Reserved
        } else if r < 0xFFFF_F080 {
            Self::Overlong
        } else if r < TRUNC_2_BASE {
            Self::Unmasked
        } else if r < LONE_BYTE_BASE {
            Self::Truncated
        } else if r < LONE_LEAD_BASE {
            Self::LoneContinuation
        } else if r < INVALID_BYTE_BASE {
            Self::LoneLead
        } else {
            Self::InvalidByte
        }
    }

    /// True for regions holding a proper prefix of an encoding: more input
    /// bytes are required before the register is a complete character.
    #[inline]
    #[must_use]
    pub const fn is_underflow(self) -> bool {
        matches!(
            self,
            Self::PairPartial | Self::UnitPartial | Self::Truncated | Self::LoneLead
        )
    }

    /// True where the register cannot correspond to any legal encoding.
    #[inline]
    #[must_use]
    pub const fn is_invalid(self) -> bool {
        matches!(
            self,
            Self::Reserved | Self::Unmasked | Self::LoneContinuation | Self::InvalidByte
        )
    }

    /// True for overlong FSS-UTF encodings.
    #[inline]
    #[must_use]
    pub const fn is_overlong(self) -> bool {
        matches!(self, Self::Overlong)
    }

    /// True for valid encodings of values beyond the Unicode range.
    #[inline]
    #[must_use]
    pub const fn is_nonuni(self) -> bool {
        matches!(self, Self::Extended)
    }

    /// True where the register holds an in-progress UTF-8 accumulator that
    /// a continuation byte may extend.
    #[inline]
    #[must_use]
    pub const fn is_utf8_partial(self) -> bool {
        matches!(self, Self::Truncated | Self::LoneLead)
    }

    /// True where the register holds parked UTF-16 input.
    #[inline]
    #[must_use]
    pub const fn is_utf16_partial(self) -> bool {
        matches!(self, Self::PairPartial | Self::UnitPartial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Every boundary row of the layout table, first and last value.
    const EDGES: &[(u32, u32, Region)] = &[
        (0x0000_0000, 0x0010_FFFF, Region::Codepoint),
        (0x0011_0000, 0x7FFF_FFFF, Region::Extended),
        (0x8000_0000, 0xDDD7_FFFF, Region::Reserved),
        (0xDDD8_0000, 0xDDDB_FFFF, Region::PairPartial),
        (0xDDDC_0000, 0xDDDD_DCFF, Region::Reserved),
        (0xDDDD_DD00, 0xDDDD_DDFF, Region::UnitPartial),
        (0xDDDD_DE00, 0xEFFF_FFFF, Region::Reserved),
        (0xF000_0000, 0xF3FF_FFFF, Region::Overlong),
        (0xF400_0000, 0xF7FF_FFFF, Region::Unmasked),
        (0xF800_0000, 0xF81F_FFFF, Region::Overlong),
        (0xF820_0000, 0xFBFF_FFFF, Region::Unmasked),
        (0xFC00_0000, 0xFDFF_FFFF, Region::Truncated),
        (0xFE00_0000, 0xFFBF_FFFF, Region::Reserved),
        (0xFFC0_0000, 0xFFC0_FFFF, Region::Overlong),
        (0xFFC1_0000, 0xFFDF_FFFF, Region::Unmasked),
        (0xFFE0_0000, 0xFFF7_FFFF, Region::Truncated),
        (0xFFF8_0000, 0xFFFD_FFFF, Region::Reserved),
        (0xFFFE_0000, 0xFFFE_07FF, Region::Overlong),
        (0xFFFE_0800, 0xFFFE_FFFF, Region::Unmasked),
        (0xFFFF_0000, 0xFFFF_DFFF, Region::Truncated),
        (0xFFFF_E000, 0xFFFF_EFFF, Region::Reserved),
        (0xFFFF_F000, 0xFFFF_F07F, Region::Overlong),
        (0xFFFF_F080, 0xFFFF_F7FF, Region::Unmasked),
        (0xFFFF_F800, 0xFFFF_FF7F, Region::Truncated),
        (0xFFFF_FF80, 0xFFFF_FFBF, Region::LoneContinuation),
        (0xFFFF_FFC0, 0xFFFF_FFFD, Region::LoneLead),
        (0xFFFF_FFFE, 0xFFFF_FFFF, Region::InvalidByte),
    ];

    #[test]
    fn test_every_window_edge() {
        for &(lo, hi, region) in EDGES {
            assert_eq!(Region::of(lo), region, "low edge {lo:#010X}");
            assert_eq!(Region::of(hi), region, "high edge {hi:#010X}");
        }
    }

    #[test]
    fn test_windows_are_contiguous() {
        // Each window's high edge + 1 is the next window's low edge.
        for pair in EDGES.windows(2) {
            assert_eq!(pair[0].1 + 1, pair[1].0);
        }
        assert_eq!(EDGES[0].0, u32::MIN);
        assert_eq!(EDGES[EDGES.len() - 1].1, u32::MAX);
    }

    #[test]
    fn test_underflow_partition() {
        for &(lo, _, region) in EDGES {
            let underflow = matches!(
                region,
                Region::PairPartial | Region::UnitPartial | Region::Truncated | Region::LoneLead
            );
            assert_eq!(Region::of(lo).is_underflow(), underflow);
        }
    }

    #[test]
    fn test_flag_exclusivity() {
        // invalid, overlong, nonuni and underflow are mutually exclusive.
        for &(lo, hi, _) in EDGES {
            for r in [lo, hi] {
                let region = Region::of(r);
                let set = region.is_invalid() as u8
                    + region.is_overlong() as u8
                    + region.is_nonuni() as u8
                    + region.is_underflow() as u8;
                assert!(set <= 1, "{r:#010X} sets {set} flags");
            }
        }
    }

    #[test]
    fn test_surrogates_are_codepoints() {
        // Surrogate values classify as code points; the property classifier
        // flags them, not the status classifier.
        assert_eq!(Region::of(0xD800), Region::Codepoint);
        assert_eq!(Region::of(0xDFFF), Region::Codepoint);
    }
}

//! The byte-serial transcoder cell.
//!
//! One instance is one hardware unit: the 32-bit character register, six
//! byte pointers, the sticky `retry` latch, one stored `ready` bit and the
//! two policy bits. Every operation consumes or produces exactly one byte
//! and completes in bounded time; flags are re-derived from the register's
//! region after each mutation, so they agree no matter which decoder put
//! the value there.

use super::op::Op;
use crate::codec::{utf16, utf32, utf8};
use crate::core::constants::{LOW_SURROGATE_BASE, SURROGATE_BASE};
use crate::core::{CharRegister, Props, Region, Status};

/// The two policy bits of the unit.
///
/// Both may be flipped between steps; neither is consulted by the state
/// transitions themselves except where documented (`cbe` orders UTF-32 and
/// UTF-16 bytes, `chk_range` folds `nonuni` into `error` and trims the
/// property bits above U+10FFFF).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Treat values beyond U+10FFFF as errors and suppress their
    /// in-range-only property bits.
    pub chk_range: bool,
    /// Big-endian byte order for UTF-32 and UTF-16 I/O.
    pub big_endian: bool,
}

impl Default for Config {
    /// Both bits high, matching the hardware's pulled-up reset state.
    fn default() -> Self {
        Self {
            chk_range: true,
            big_endian: true,
        }
    }
}

/// The transcoder unit.
///
/// # Example
///
/// ```
/// use utfcell::TranscoderCell;
///
/// let mut cell = TranscoderCell::default();
/// for b in [0xF0, 0x9F, 0x8D, 0x8D] {
///     cell.write_utf8(b);
/// }
/// assert_eq!(cell.register(), 0x1_F34D);
/// assert!(cell.status().ready && !cell.status().error);
///
/// // The same character read back as UTF-16 (big-endian by default).
/// let pair: Vec<u8> = (0..4).map(|_| cell.read_utf16()).collect();
/// assert_eq!(pair, [0xD8, 0x3D, 0xDE, 0x4D]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscoderCell {
    r: CharRegister,
    config: Config,
    /// No byte has been written since the last full reset.
    empty: bool,
    /// Stored ready bit. Equal to "not underflow" for every state except a
    /// parked UTF-16 high surrogate, which sits in the code-point window
    /// but is not a completed character.
    ready: bool,
    /// Sticky reject latch.
    retry: bool,
    rcip: u8,
    rcop: u8,
    rbop: u8,
    ruip: u8,
    ruop: u8,
}

impl Default for TranscoderCell {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl TranscoderCell {
    /// Creates a cleared cell with the given policy bits.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            r: CharRegister::ZERO,
            config,
            empty: true,
            ready: false,
            retry: false,
            rcip: 0,
            rcop: 0,
            rbop: 0,
            ruip: 0,
            ruop: 0,
        }
    }

    // ========================================================================
    // Dispatcher
    // ========================================================================

    /// Executes one step. Read requests return the consumed byte.
    pub fn step(&mut self, op: Op) -> Option<u8> {
        match op {
            Op::ResetAll => {
                self.reset_all();
                None
            }
            Op::ResetRead => {
                self.reset_read();
                None
            }
            Op::WriteUtf32(b) => {
                self.write_utf32(b);
                None
            }
            Op::WriteUtf8(b) => {
                self.write_utf8(b);
                None
            }
            Op::WriteUtf16(b) => {
                self.write_utf16(b);
                None
            }
            Op::ReadUtf32 => Some(self.read_utf32()),
            Op::ReadUtf8 => Some(self.read_utf8()),
            Op::ReadUtf16 => Some(self.read_utf16()),
        }
    }

    // ========================================================================
    // Resets
    // ========================================================================

    /// Clears the register, all pointers and all flags.
    pub fn reset_all(&mut self) {
        let config = self.config;
        *self = Self::new(config);
    }

    /// Rewinds the three output pointers so the current contents replay.
    pub fn reset_read(&mut self) {
        self.rcop = 0;
        self.rbop = 0;
        self.ruop = 0;
    }

    // ========================================================================
    // UTF-32 ingress / egress
    // ========================================================================

    /// Writes one raw UTF-32 byte in the configured byte order.
    ///
    /// The first byte of a load replaces the register contents; the fifth
    /// and later writes are rejected with `retry`.
    pub fn write_utf32(&mut self, b: u8) {
        if self.rcip >= 4 {
            self.retry = true;
            return;
        }
        if self.rcip == 0 {
            self.r = CharRegister::ZERO;
            self.empty = false;
            self.retry = false;
        }
        self.r = CharRegister::new(utf32::load(
            self.r.value(),
            b,
            self.rcip,
            self.config.big_endian,
        ));
        self.rcip += 1;
        self.ready = !self.r.region().is_underflow();
    }

    /// Reads one raw UTF-32 byte; `0` once all four are consumed.
    pub fn read_utf32(&mut self) -> u8 {
        if self.rcop >= 4 {
            return 0;
        }
        let b = utf32::byte_at(self.r.value(), self.rcop, self.config.big_endian);
        self.rcop += 1;
        b
    }

    // ========================================================================
    // FSS-UTF (UTF-8) decode / encode
    // ========================================================================

    /// Feeds one FSS-UTF byte to the decoder.
    ///
    /// A write onto a completed character, a continuation byte with the
    /// wrong shape, or a byte aimed at a foreign partial state is rejected
    /// with `retry` and leaves the register untouched.
    pub fn write_utf8(&mut self, b: u8) {
        if self.empty {
            self.r = CharRegister::new(utf8::entry(b));
            self.empty = false;
            self.retry = false;
            self.ready = !self.r.region().is_underflow();
            return;
        }
        if self.ready || !self.r.region().is_utf8_partial() || !utf8::is_continuation(b) {
            self.retry = true;
            return;
        }
        self.r = CharRegister::new(utf8::advance(self.r.value(), b));
        self.ready = !self.r.region().is_underflow();
    }

    /// Reads one byte of the register's FSS-UTF emission; `0` past the end.
    pub fn read_utf8(&mut self) -> u8 {
        let len = self.rbip();
        if self.rbop >= len {
            return 0;
        }
        let b = utf8::byte_at(self.r.value(), len, self.rbop);
        self.rbop += 1;
        b
    }

    // ========================================================================
    // UTF-16 decode / encode
    // ========================================================================

    /// Feeds one UTF-16 byte to the decoder.
    ///
    /// A write onto a completed character starts a fresh 16-bit word (this
    /// is how an orphaned word is resubmitted after a revert); a write onto
    /// a foreign partial state, or past the fourth byte, is rejected with
    /// `retry`.
    pub fn write_utf16(&mut self, b: u8) {
        if self.ruip >= 4 {
            self.retry = true;
            return;
        }
        if self.empty || self.ready {
            self.r = CharRegister::new(utf16::park_byte(b));
            self.empty = false;
            self.retry = false;
            self.ready = false;
            self.ruip += 1;
            return;
        }
        let r = self.r.value();
        match self.r.region() {
            Region::UnitPartial => {
                let w1 = utf16::unit(utf16::parked_byte(r), b, self.config.big_endian);
                self.r = CharRegister::new(w1 as u32);
                // A high surrogate stays parked awaiting its partner; any
                // other unit (BMP or lone low surrogate) is the character.
                self.ready = !utf16::is_high_surrogate(w1);
                self.ruip += 1;
            }
            Region::Codepoint
                if (SURROGATE_BASE..LOW_SURROGATE_BASE).contains(&r) =>
            {
                // Parked high surrogate: park the first byte of W₂ with it.
                self.r = CharRegister::new(utf16::park_pair(r as u16, b));
                self.ruip += 1;
            }
            Region::PairPartial => {
                let w1 = utf16::parked_unit(r);
                let w2 = utf16::unit(utf16::parked_byte(r), b, self.config.big_endian);
                if utf16::is_low_surrogate(w2) {
                    self.r = CharRegister::new(utf16::combine(w1, w2));
                    self.ready = true;
                    self.ruip += 1;
                } else {
                    // Revert: the high surrogate becomes the character and
                    // the orphaned word must be resubmitted.
                    self.r = CharRegister::new(w1 as u32);
                    self.ready = true;
                    self.retry = true;
                    self.ruip = 2;
                }
            }
            _ => {
                self.retry = true;
            }
        }
    }

    /// Reads one byte of the register's UTF-16 emission; `0` past the end.
    pub fn read_utf16(&mut self) -> u8 {
        let len = self.utf16_len();
        if self.ruop >= len {
            return 0;
        }
        let b = utf16::byte_at(self.r.value(), len, self.ruop, self.config.big_endian);
        self.ruop += 1;
        b
    }

    // ========================================================================
    // Observables
    // ========================================================================

    /// The raw register value.
    #[inline]
    #[must_use]
    pub const fn register(&self) -> u32 {
        self.r.value()
    }

    /// The register's region classification.
    #[inline]
    #[must_use]
    pub const fn region(&self) -> Region {
        self.r.region()
    }

    /// The status flag set.
    #[must_use]
    pub fn status(&self) -> Status {
        if self.empty {
            return Status {
                retry: self.retry,
                error: self.retry,
                ..Status::default()
            };
        }
        Status::derive(self.r.region(), self.ready, self.retry, self.config.chk_range)
    }

    /// The six character-property bits.
    #[must_use]
    pub fn props(&self) -> Props {
        if self.empty {
            return Props::NONE;
        }
        Props::classify(self.r.value(), self.config.chk_range, self.ready)
    }

    /// UTF-32 bytes written (saturates at 4).
    #[inline]
    #[must_use]
    pub const fn rcip(&self) -> u8 {
        self.rcip
    }

    /// UTF-32 bytes read (saturates at 4).
    #[inline]
    #[must_use]
    pub const fn rcop(&self) -> u8 {
        self.rcop
    }

    /// FSS-UTF encoded length / bytes consumed, derived from the register.
    #[inline]
    #[must_use]
    pub const fn rbip(&self) -> u8 {
        if self.empty {
            0
        } else {
            utf8::encoded_len(self.r.value())
        }
    }

    /// FSS-UTF bytes read (saturates at the encoded length).
    #[inline]
    #[must_use]
    pub const fn rbop(&self) -> u8 {
        self.rbop
    }

    /// UTF-16 bytes written (saturates at 4).
    #[inline]
    #[must_use]
    pub const fn ruip(&self) -> u8 {
        self.ruip
    }

    /// UTF-16 bytes read (saturates at the encoded length).
    #[inline]
    #[must_use]
    pub const fn ruop(&self) -> u8 {
        self.ruop
    }

    /// UTF-32 input exhausted.
    #[inline]
    #[must_use]
    pub const fn cin_eof(&self) -> bool {
        self.rcip >= 4
    }

    /// UTF-32 output exhausted.
    #[inline]
    #[must_use]
    pub const fn cout_eof(&self) -> bool {
        self.rcop >= 4
    }

    /// FSS-UTF input exhausted (six bytes consumed).
    #[inline]
    #[must_use]
    pub const fn bin_eof(&self) -> bool {
        self.rbip() >= 6
    }

    /// FSS-UTF output exhausted.
    #[inline]
    #[must_use]
    pub const fn bout_eof(&self) -> bool {
        self.rbop >= self.rbip()
    }

    /// UTF-16 input exhausted (four bytes consumed).
    #[inline]
    #[must_use]
    pub const fn uin_eof(&self) -> bool {
        self.ruip >= 4
    }

    /// UTF-16 output exhausted.
    #[inline]
    #[must_use]
    pub const fn uout_eof(&self) -> bool {
        self.ruop >= self.utf16_len()
    }

    /// The current policy bits.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> Config {
        self.config
    }

    /// Reconfigures the policy bits between steps.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    const fn utf16_len(&self) -> u8 {
        if self.empty {
            0
        } else {
            utf16::encoded_len(self.r.value())
        }
    }
}

//! Decode-side validator: FSS-UTF byte streams against reached registers,
//! flags, replays and the retry contract.

use crate::oracle;
use crate::report::{CheckResult, ConformanceReport, Family};
use utfcell::TranscoderCell;

const VALIDATOR: &str = "decode";

/// Runs the decode families. `stride` thins the sweeps (1 = exhaustive).
#[must_use]
pub fn validate(stride: u32) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    report.push(unicode_sweep(stride));
    report.push(overlong_sweep());
    report.push(truncation_sweep());
    report.push(lone_bytes());
    report.push(retry_padding());
    report
}

fn decode(bytes: &[u8]) -> TranscoderCell {
    let mut cell = TranscoderCell::default();
    for &b in bytes {
        cell.write_utf8(b);
    }
    cell
}

fn replay(cell: &mut TranscoderCell) -> Vec<u8> {
    let mut out = Vec::new();
    while !cell.bout_eof() {
        out.push(cell.read_utf8());
    }
    out
}

/// Minimal encodings of every Unicode code point decode to themselves.
fn unicode_sweep(stride: u32) -> CheckResult {
    let mut family = Family::new(VALIDATOR, "unicode-sweep");
    let mut cp = 0u32;
    while cp <= 0x10_FFFF {
        let bytes = oracle::utf8(cp);
        let mut cell = decode(&bytes);
        family.eq(&format!("U+{cp:04X} register"), cell.register(), cp);
        let status = cell.status();
        family.case(
            status.ready && !status.error && !status.retry,
            || format!("U+{cp:04X}: flags {status:?}"),
        );
        family.eq(&format!("U+{cp:04X} rbip"), cell.rbip(), bytes.len() as u8);
        family.eq(&format!("U+{cp:04X} replay"), replay(&mut cell), bytes);
        cp = cp.saturating_add(stride);
    }
    family.finish()
}

/// Non-minimal encodings land in the overlong window for their length,
/// with the target value recoverable from the low register bits.
fn overlong_sweep() -> CheckResult {
    // Window base per encoded length; the largest value the next-shorter
    // form could carry bounds the overlong targets.
    const WINDOWS: [(u32, u32); 5] = [
        (0xFFFF_F000, 0x7F),
        (0xFFFE_0000, 0x7FF),
        (0xFFC0_0000, 0xFFFF),
        (0xF800_0000, 0x1F_FFFF),
        (0xF000_0000, 0x3FF_FFFF),
    ];

    let mut family = Family::new(VALIDATOR, "overlong-sweep");
    for (len, &(base, limit)) in (2usize..=6).zip(WINDOWS.iter()) {
        let mut target = 0u32;
        while target <= limit {
            let bytes = oracle::overlong_utf8(target, len);
            let mut cell = decode(&bytes);
            let status = cell.status();
            family.case(
                status.ready && status.overlong && status.error && !status.invalid,
                || format!("{bytes:02X?}: flags {status:?}"),
            );
            family.eq(
                &format!("{bytes:02X?} register"),
                cell.register(),
                base | target,
            );
            family.eq(&format!("{bytes:02X?} replay"), replay(&mut cell), bytes);
            target = target * 5 + 3; // touches 0 and climbs the window
        }
    }
    family.finish()
}

/// Every proper prefix of a clean sequence is an underflow state that
/// replays its bytes and still completes afterwards.
fn truncation_sweep() -> CheckResult {
    const PROBES: &[u32] = &[
        0x80, 0x7FF, 0x800, 0x2603, 0xFFFF, 0x1_0000, 0x1_F34D, 0x10_FFFF, 0x11_0000, 0x20_0000,
        0x3FF_FFFF, 0x400_0000, 0x7FFF_FFFF,
    ];

    let mut family = Family::new(VALIDATOR, "truncation-sweep");
    for &cp in PROBES {
        let bytes = oracle::utf8(cp);
        for cut in 1..bytes.len() {
            let mut cell = decode(&bytes[..cut]);
            let status = cell.status();
            family.case(
                !status.ready && !status.invalid && !status.error,
                || format!("{:02X?}: flags {status:?}", &bytes[..cut]),
            );
            family.case(!cell.bin_eof(), || {
                format!("{:02X?}: premature input EOF", &bytes[..cut])
            });
            family.eq(
                &format!("{:02X?} replay", &bytes[..cut]),
                replay(&mut cell),
                bytes[..cut].to_vec(),
            );
            // The accumulator is still live: finishing the sequence works.
            for &b in &bytes[cut..] {
                cell.write_utf8(b);
            }
            family.eq(&format!("{bytes:02X?} completion"), cell.register(), cp);
        }
    }
    family.finish()
}

/// All 128 single-byte entries above ASCII.
fn lone_bytes() -> CheckResult {
    let mut family = Family::new(VALIDATOR, "lone-bytes");
    for b in 0x80..=0xFFu8 {
        let mut cell = decode(&[b]);
        let status = cell.status();
        let expect_underflow = (0xC0..0xFE).contains(&b);
        family.case(
            status.ready != expect_underflow && status.invalid != expect_underflow,
            || format!("{b:#04X}: flags {status:?}"),
        );
        family.eq(
            &format!("{b:#04X} register"),
            cell.register(),
            0xFFFF_FF00 | b as u32,
        );
        family.eq(&format!("{b:#04X} replay"), replay(&mut cell), vec![b]);
    }
    family.finish()
}

/// After READY, any byte is rejected with a sticky retry; after underflow,
/// continuations are consumed and anything else is rejected.
fn retry_padding() -> CheckResult {
    let mut family = Family::new(VALIDATOR, "retry-padding");
    let sequences: &[&[u8]] = &[
        &[0x41],
        &[0xC2, 0x80],
        &[0xE2, 0x98, 0x83],
        &[0xF4, 0x8F, 0xBF, 0xBF],
        &[0xC0, 0x80],
        &[0x80],
        &[0xFE],
        &[0xE2, 0x98],
        &[0xF0, 0x80],
        &[0xFC, 0x80, 0x80, 0x80, 0x80],
        &[0xC0],
    ];
    for bytes in sequences {
        for pad in [0x00u8, 0x41, 0x80, 0x9C, 0xBF, 0xC2, 0xE0, 0xFE, 0xFF] {
            let mut cell = decode(bytes);
            let ready = cell.status().ready;
            let register = cell.register();
            cell.write_utf8(pad);
            if ready || !(0x80..0xC0).contains(&pad) {
                let status = cell.status();
                family.case(
                    status.retry && status.error && cell.register() == register,
                    || format!("{bytes:02X?}+{pad:#04X}: flags {status:?}"),
                );
                // The reject is sticky until a reset or a fresh first byte.
                cell.write_utf8(pad);
                family.case(cell.status().retry, || {
                    format!("{bytes:02X?}+{pad:#04X}: latch dropped")
                });
                cell.reset_all();
                family.case(!cell.status().retry, || {
                    format!("{bytes:02X?}+{pad:#04X}: latch survived reset")
                });
            } else {
                family.case(!cell.status().retry && cell.register() != register, || {
                    format!("{bytes:02X?}+{pad:#04X}: continuation rejected")
                });
            }
        }
    }
    family.finish()
}

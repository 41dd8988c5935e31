//! UTF-16 validator: unit and pair decoding, parking, the revert pathway,
//! in both byte orders.

use crate::oracle;
use crate::report::{CheckResult, ConformanceReport, Family};
use utfcell::{Config, TranscoderCell};

const VALIDATOR: &str = "utf16";

/// Runs the UTF-16 families. `stride` thins the sweeps (1 = exhaustive).
#[must_use]
pub fn validate(stride: u32) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    report.push(bmp_sweep(stride));
    report.push(pair_sweep(stride));
    report.push(parking());
    report.push(revert());
    report
}

fn cell(big_endian: bool) -> TranscoderCell {
    TranscoderCell::new(Config {
        chk_range: true,
        big_endian,
    })
}

fn write_all(cell: &mut TranscoderCell, bytes: &[u8]) {
    for &b in bytes {
        cell.write_utf16(b);
    }
}

fn replay(cell: &mut TranscoderCell) -> Vec<u8> {
    let mut out = Vec::new();
    while !cell.uout_eof() {
        out.push(cell.read_utf16());
    }
    out
}

/// Every BMP unit decodes to itself and replays, in both byte orders.
/// High surrogates park instead of completing.
fn bmp_sweep(stride: u32) -> CheckResult {
    let mut family = Family::new(VALIDATOR, "bmp-sweep");
    for big_endian in [false, true] {
        let mut w = 0u32;
        while w <= 0xFFFF {
            let bytes = if big_endian {
                (w as u16).to_be_bytes()
            } else {
                (w as u16).to_le_bytes()
            };
            let mut c = cell(big_endian);
            write_all(&mut c, &bytes);
            family.eq(&format!("unit {w:#06X} register"), c.register(), w);
            let parked = (0xD800..0xDC00).contains(&w);
            let status = c.status();
            family.case(
                status.ready != parked && !status.retry,
                || format!("unit {w:#06X}: flags {status:?} be={big_endian}"),
            );
            family.eq(
                &format!("unit {w:#06X} replay"),
                replay(&mut c),
                bytes.to_vec(),
            );
            w = w.saturating_add(stride);
        }
    }
    family.finish()
}

/// Every supplementary-plane code point round-trips through its pair.
fn pair_sweep(stride: u32) -> CheckResult {
    let mut family = Family::new(VALIDATOR, "pair-sweep");
    for big_endian in [false, true] {
        let mut cp = 0x1_0000u32;
        while cp <= 0x10_FFFF {
            let bytes = oracle::utf16(cp, big_endian);
            let mut c = cell(big_endian);
            write_all(&mut c, &bytes);
            family.eq(&format!("U+{cp:05X} register"), c.register(), cp);
            let status = c.status();
            family.case(
                status.ready && !status.error && c.uin_eof(),
                || format!("U+{cp:05X}: flags {status:?} be={big_endian}"),
            );
            family.eq(&format!("U+{cp:05X} replay"), replay(&mut c), bytes);
            cp = cp.saturating_add(stride);
        }
    }
    family.finish()
}

/// Parked partial input replays losslessly at one and three bytes.
fn parking() -> CheckResult {
    let mut family = Family::new(VALIDATOR, "parking");
    for big_endian in [false, true] {
        for stray in [0x00u8, 0x41, 0x9C, 0xD8, 0xFF] {
            let mut c = cell(big_endian);
            c.write_utf16(stray);
            family.eq(
                &format!("stray {stray:#04X} register"),
                c.register(),
                0xDDDD_DD00 | stray as u32,
            );
            let status = c.status();
            family.case(!status.ready && !status.error, || {
                format!("stray {stray:#04X}: flags {status:?}")
            });
            family.eq(
                &format!("stray {stray:#04X} replay"),
                replay(&mut c),
                vec![stray],
            );
        }

        for high in [0xD800u16, 0xD83D, 0xDBFF] {
            for stray in [0x00u8, 0x4D, 0xFF] {
                let unit = if big_endian {
                    high.to_be_bytes()
                } else {
                    high.to_le_bytes()
                };
                let mut c = cell(big_endian);
                write_all(&mut c, &[unit[0], unit[1], stray]);
                family.eq(
                    &format!("{high:#06X}+{stray:#04X} register"),
                    c.register(),
                    0xDD00_0000 | ((high as u32) << 8) | stray as u32,
                );
                family.case(!c.status().ready, || {
                    format!("{high:#06X}+{stray:#04X}: unexpectedly ready")
                });
                family.eq(
                    &format!("{high:#06X}+{stray:#04X} replay"),
                    replay(&mut c),
                    vec![unit[0], unit[1], stray],
                );
            }
        }
    }
    family.finish()
}

/// A high surrogate followed by a non-low unit reverts: the surrogate is
/// republished with retry, and the orphaned word resubmits cleanly.
fn revert() -> CheckResult {
    let mut family = Family::new(VALIDATOR, "revert");
    for big_endian in [false, true] {
        for high in [0xD800u16, 0xD83D, 0xDBFF] {
            for orphan in [0x0041u16, 0x2603, 0xD7FF, 0xD800, 0xE000, 0xFFFD] {
                let hu = if big_endian {
                    high.to_be_bytes()
                } else {
                    high.to_le_bytes()
                };
                let ou = if big_endian {
                    orphan.to_be_bytes()
                } else {
                    orphan.to_le_bytes()
                };
                let mut c = cell(big_endian);
                write_all(&mut c, &[hu[0], hu[1], ou[0], ou[1]]);

                family.eq(
                    &format!("{high:#06X}/{orphan:#06X} reverted register"),
                    c.register(),
                    high as u32,
                );
                let status = c.status();
                family.case(
                    status.ready && status.retry && status.error && !status.invalid,
                    || format!("{high:#06X}/{orphan:#06X}: flags {status:?}"),
                );
                family.eq(&format!("{high:#06X}/{orphan:#06X} ruip"), c.ruip(), 2);

                // Consume, rewind, resubmit the orphaned word.
                family.eq(
                    &format!("{high:#06X}/{orphan:#06X} surrogate out"),
                    replay(&mut c),
                    hu.to_vec(),
                );
                c.reset_read();
                write_all(&mut c, &[ou[0], ou[1]]);
                family.eq(
                    &format!("{high:#06X}/{orphan:#06X} resubmitted register"),
                    c.register(),
                    orphan as u32,
                );
                family.case(!c.status().retry, || {
                    format!("{high:#06X}/{orphan:#06X}: latch survived resubmit")
                });
                let parked_again = (0xD800..0xDC00).contains(&(orphan as u32));
                family.case(c.status().ready != parked_again, || {
                    format!("{high:#06X}/{orphan:#06X}: resubmit readiness")
                });
            }
        }
    }
    family.finish()
}

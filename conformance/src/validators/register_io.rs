//! Raw register I/O validator: UTF-32 loads, byte-buffer sequences,
//! pointer saturation, and the two reset operations.

use crate::report::{CheckResult, ConformanceReport, Family};
use utfcell::{Config, Op, TranscoderCell};

const VALIDATOR: &str = "register-io";

/// Runs the register I/O families.
#[must_use]
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();
    report.push(utf32_loads());
    report.push(byte_buffer());
    report.push(resets());
    report
}

fn cell(big_endian: bool) -> TranscoderCell {
    TranscoderCell::new(Config {
        chk_range: true,
        big_endian,
    })
}

fn read_utf32(cell: &mut TranscoderCell) -> Vec<u8> {
    (0..4).map(|_| cell.read_utf32()).collect()
}

/// Full and partial UTF-32 loads, both byte orders, with saturation.
fn utf32_loads() -> CheckResult {
    let mut family = Family::new(VALIDATOR, "utf32-loads");

    for (big_endian, register) in [(true, 0x0B16_212Cu32), (false, 0x2C21_160B)] {
        let mut c = cell(big_endian);
        for (i, b) in [11u8, 22, 33, 44].into_iter().enumerate() {
            family.case(!c.cin_eof(), || format!("input EOF after {i} bytes"));
            c.write_utf32(b);
        }
        family.case(c.cin_eof(), || "no input EOF after 4 bytes".into());
        family.eq("full load register", c.register(), register);

        // The fifth write is rejected and leaves the register alone.
        c.write_utf32(55);
        family.case(c.status().retry, || "fifth write accepted".into());
        family.eq("register after reject", c.register(), register);

        family.eq("readback", read_utf32(&mut c), vec![11, 22, 33, 44]);
        family.case(c.cout_eof(), || "no output EOF after 4 reads".into());
        family.eq("saturated read", c.read_utf32(), 0);

        c.reset_read();
        family.eq("replay", read_utf32(&mut c), vec![11, 22, 33, 44]);
    }

    // Partial loads keep the written bytes in the low lanes (big-endian)
    // or the bottom lanes (little-endian), zeros elsewhere.
    let mut c = cell(true);
    c.write_utf32(111);
    c.write_utf32(222);
    family.eq("partial BE readback", read_utf32(&mut c), vec![0, 0, 111, 222]);

    let mut c = cell(false);
    c.write_utf32(111);
    c.write_utf32(222);
    family.eq("partial LE readback", read_utf32(&mut c), vec![111, 222, 0, 0]);

    family.finish()
}

/// The six-byte buffer sequence from the hardware qualification run.
fn byte_buffer() -> CheckResult {
    let mut family = Family::new(VALIDATOR, "byte-buffer");
    let bytes = [0xFDu8, 0xBE, 0xAC, 0x97, 0x86, 0xB5];

    let mut c = cell(true);
    for (i, &b) in bytes.iter().enumerate() {
        c.write_utf8(b);
        family.eq(&format!("input EOF after byte {i}"), c.bin_eof(), i == 5);
    }
    // A seventh byte bounces off the completed register.
    c.write_utf8(0xA4);
    family.case(c.status().retry, || "seventh byte accepted".into());

    let mut out = Vec::new();
    for i in 0..6 {
        family.eq(&format!("output EOF before byte {i}"), c.bout_eof(), false);
        out.push(c.read_utf8());
    }
    family.eq("readback", out.clone(), bytes.to_vec());
    family.case(c.bout_eof(), || "no output EOF after 6 reads".into());
    family.eq("saturated read", c.read_utf8(), 0);

    c.reset_read();
    let replay: Vec<u8> = (0..6).map(|_| c.read_utf8()).collect();
    family.eq("replay", replay, bytes.to_vec());

    // A three-byte partial buffer reads back exactly three bytes.
    let mut c = cell(true);
    for b in [0xFD, 0xBE, 0xAC] {
        c.write_utf8(b);
    }
    let partial: Vec<u8> = (0..3).map(|_| c.read_utf8()).collect();
    family.eq("partial readback", partial, vec![0xFD, 0xBE, 0xAC]);
    family.case(c.bout_eof(), || "no output EOF after partial".into());

    family.finish()
}

/// Reset semantics: read-reset rewinds outputs only, full reset clears
/// everything, and the dispatcher honours one request per step.
fn resets() -> CheckResult {
    let mut family = Family::new(VALIDATOR, "resets");

    let mut c = cell(true);
    for b in [0xE2, 0x98, 0x83] {
        c.step(Op::WriteUtf8(b));
    }
    family.eq("decode via dispatcher", c.register(), 0x2603);
    family.eq("first read", c.step(Op::ReadUtf8), Some(0xE2));
    family.eq("reset-read", c.step(Op::ResetRead), None);
    family.eq("reread", c.step(Op::ReadUtf8), Some(0xE2));
    family.eq("register unscathed", c.register(), 0x2603);

    family.eq("reset-all", c.step(Op::ResetAll), None);
    family.eq("cleared register", c.register(), 0);
    let status = c.status();
    family.case(
        !status.ready && !status.retry && !status.error,
        || format!("flags after reset: {status:?}"),
    );
    family.eq("cleared props", c.props(), utfcell::Props::NONE);
    family.eq("cleared rbip", c.rbip(), 0);
    family.case(c.bout_eof(), || "output not at EOF after reset".into());
    family.case(!c.cin_eof(), || "input at EOF after reset".into());

    family.finish()
}

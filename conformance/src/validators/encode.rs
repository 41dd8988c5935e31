//! Encode-side validator: UTF-32 loads against flags, properties and
//! FSS-UTF emissions.

use crate::oracle;
use crate::report::{ConformanceReport, Family};
use utfcell::{Config, TranscoderCell};

const VALIDATOR: &str = "encode";

/// Runs the encode families. `stride` thins the sweeps (1 = exhaustive).
#[must_use]
pub fn validate(stride: u32) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    report.push(unicode_sweep(stride));
    report.push(extended_sweep());
    report.push(error_windows());
    report
}

fn load(r: u32, chk_range: bool) -> TranscoderCell {
    let mut cell = TranscoderCell::new(Config {
        chk_range,
        big_endian: true,
    });
    for b in r.to_be_bytes() {
        cell.write_utf32(b);
    }
    cell
}

fn emission(cell: &mut TranscoderCell) -> Vec<u8> {
    let mut out = Vec::new();
    while !cell.bout_eof() {
        out.push(cell.read_utf8());
    }
    out
}

/// Every Unicode code point: ready, error-free (surrogates included at this
/// layer), correct properties, correct emission.
fn unicode_sweep(stride: u32) -> crate::report::CheckResult {
    let mut family = Family::new(VALIDATOR, "unicode-sweep");
    let mut cp = 0u32;
    while cp <= 0x10_FFFF {
        let mut cell = load(cp, true);
        let status = cell.status();
        family.case(
            status.ready && !status.error && cell.cin_eof(),
            || format!("U+{cp:04X}: flags {status:?}"),
        );
        family.eq(
            &format!("U+{cp:04X} props"),
            cell.props(),
            oracle::props(cp, true),
        );
        family.eq(
            &format!("U+{cp:04X} emission"),
            emission(&mut cell),
            oracle::utf8(cp),
        );
        cp = cp.saturating_add(stride);
    }
    family.finish()
}

/// Strided sweep of the extended range: nonuni, error only under the range
/// check, properties per policy, 4-6 byte emissions.
fn extended_sweep() -> crate::report::CheckResult {
    let mut family = Family::new(VALIDATOR, "extended-sweep");
    let mut probes = vec![0x11_0000u32, 0x1F_FFFF, 0x20_0000, 0x3FF_FFFF, 0x400_0000, 0x7FFF_FFFF];
    let mut cp = 0x11_0000u32;
    while cp < 0x7FFF_FFFF {
        probes.push(cp);
        cp = cp.saturating_add(0x8_B523); // coprime stride, ~3800 samples
    }
    for &cp in &probes {
        let mut cell = load(cp, true);
        let checked = cell.status();
        family.case(
            checked.ready && checked.nonuni && checked.error && !checked.invalid,
            || format!("{cp:#010X}: flags {checked:?}"),
        );
        family.eq(
            &format!("{cp:#010X} props (checked)"),
            cell.props(),
            oracle::props(cp, true),
        );

        let mut config = cell.config();
        config.chk_range = false;
        cell.set_config(config);
        let unchecked = cell.status();
        family.case(
            unchecked.nonuni && !unchecked.error,
            || format!("{cp:#010X}: flags {unchecked:?} without range check"),
        );
        family.eq(
            &format!("{cp:#010X} props (unchecked)"),
            cell.props(),
            oracle::props(cp, false),
        );
        family.eq(
            &format!("{cp:#010X} emission"),
            emission(&mut cell),
            oracle::utf8(cp),
        );
    }
    family.finish()
}

/// Edge probes of every top-half window: flags and byte-exact emissions.
fn error_windows() -> crate::report::CheckResult {
    // (register, ready, invalid, overlong, emission)
    #[allow(clippy::type_complexity)]
    const CASES: &[(u32, bool, bool, bool, &[u8])] = &[
        (0x8000_0000, true, true, false, &[]),
        (0xDDD7_FFFF, true, true, false, &[]),
        (0xDDDC_0000, true, true, false, &[]),
        (0xDDDD_DCFF, true, true, false, &[]),
        (0xDDDD_DE00, true, true, false, &[]),
        (0xEFFF_FFFF, true, true, false, &[]),
        (0xF000_0000, true, false, true, &[0xFC, 0x80, 0x80, 0x80, 0x80, 0x80]),
        (0xF3FF_FFFF, true, false, true, &[0xFC, 0x83, 0xBF, 0xBF, 0xBF, 0xBF]),
        (0xF400_0000, true, true, false, &[0xFC, 0x84, 0x80, 0x80, 0x80, 0x80]),
        (0xF7FF_FFFF, true, true, false, &[0xFC, 0x87, 0xBF, 0xBF, 0xBF, 0xBF]),
        (0xF800_0000, true, false, true, &[0xF8, 0x80, 0x80, 0x80, 0x80]),
        (0xF81F_FFFF, true, false, true, &[0xF8, 0x87, 0xBF, 0xBF, 0xBF]),
        (0xF820_0000, true, true, false, &[0xF8, 0x88, 0x80, 0x80, 0x80]),
        (0xFBFF_FFFF, true, true, false, &[0xFB, 0xBF, 0xBF, 0xBF, 0xBF]),
        (0xFC00_0000, false, false, false, &[0xFC, 0x80, 0x80, 0x80, 0x80]),
        (0xFDFF_FFFF, false, false, false, &[0xFD, 0xBF, 0xBF, 0xBF, 0xBF]),
        (0xFE00_0000, true, true, false, &[0xFE, 0x80, 0x80, 0x80, 0x80]),
        (0xFFBF_FFFF, true, true, false, &[0xFF, 0xAF, 0xBF, 0xBF, 0xBF]),
        (0xFFC0_0000, true, false, true, &[0xF0, 0x80, 0x80, 0x80]),
        (0xFFC0_FFFF, true, false, true, &[0xF0, 0x8F, 0xBF, 0xBF]),
        (0xFFC1_0000, true, true, false, &[0xF0, 0x90, 0x80, 0x80]),
        (0xFFDF_FFFF, true, true, false, &[0xF7, 0xBF, 0xBF, 0xBF]),
        (0xFFE0_0000, false, false, false, &[0xF8, 0x80, 0x80, 0x80]),
        (0xFFF7_FFFF, false, false, false, &[0xFD, 0xBF, 0xBF, 0xBF]),
        (0xFFF8_0000, true, true, false, &[0xFE, 0x80, 0x80, 0x80]),
        (0xFFFD_FFFF, true, true, false, &[0xFF, 0x9F, 0xBF, 0xBF]),
        (0xFFFE_0000, true, false, true, &[0xE0, 0x80, 0x80]),
        (0xFFFE_07FF, true, false, true, &[0xE0, 0x9F, 0xBF]),
        (0xFFFE_0800, true, true, false, &[0xE0, 0xA0, 0x80]),
        (0xFFFE_FFFF, true, true, false, &[0xEF, 0xBF, 0xBF]),
        (0xFFFF_0000, false, false, false, &[0xF0, 0x80, 0x80]),
        (0xFFFF_DFFF, false, false, false, &[0xFD, 0xBF, 0xBF]),
        (0xFFFF_E000, true, true, false, &[0xFE, 0x80, 0x80]),
        (0xFFFF_EFFF, true, true, false, &[0xFE, 0xBF, 0xBF]),
        (0xFFFF_F000, true, false, true, &[0xC0, 0x80]),
        (0xFFFF_F07F, true, false, true, &[0xC1, 0xBF]),
        (0xFFFF_F080, true, true, false, &[0xC2, 0x80]),
        (0xFFFF_F7FF, true, true, false, &[0xDF, 0xBF]),
        (0xFFFF_F800, false, false, false, &[0xE0, 0x80]),
        (0xFFFF_FF7F, false, false, false, &[0xFD, 0xBF]),
        (0xFFFF_FF80, true, true, false, &[0x80]),
        (0xFFFF_FFBF, true, true, false, &[0xBF]),
        (0xFFFF_FFC0, false, false, false, &[0xC0]),
        (0xFFFF_FFFD, false, false, false, &[0xFD]),
        (0xFFFF_FFFE, true, true, false, &[0xFE]),
        (0xFFFF_FFFF, true, true, false, &[0xFF]),
    ];

    let mut family = Family::new(VALIDATOR, "error-windows");
    for &(r, ready, invalid, overlong, bytes) in CASES {
        let mut cell = load(r, true);
        let status = cell.status();
        family.case(
            status.ready == ready
                && status.invalid == invalid
                && status.overlong == overlong
                && status.error == (invalid || overlong),
            || format!("{r:#010X}: flags {status:?}"),
        );
        // Top-half values are property-dark.
        family.eq(&format!("{r:#010X} props"), cell.props(), utfcell::Props::NONE);
        family.eq(&format!("{r:#010X} emission"), emission(&mut cell), bytes.to_vec());
        // Replays identically after a read rewind.
        cell.reset_read();
        family.eq(&format!("{r:#010X} replay"), emission(&mut cell), bytes.to_vec());
    }
    family.finish()
}

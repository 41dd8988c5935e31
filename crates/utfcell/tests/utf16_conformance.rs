//! UTF-16 conformance: BMP units, surrogate pairs, parked partial states,
//! the revert-and-retry pathway, and both byte orders.

use utfcell::{Config, TranscoderCell};

fn cell(big_endian: bool) -> TranscoderCell {
    TranscoderCell::new(Config {
        chk_range: true,
        big_endian,
    })
}

fn unit_bytes(w: u16, big_endian: bool) -> [u8; 2] {
    if big_endian {
        w.to_be_bytes()
    } else {
        w.to_le_bytes()
    }
}

fn read_utf16(cell: &mut TranscoderCell) -> Vec<u8> {
    let mut out = Vec::new();
    while !cell.uout_eof() {
        out.push(cell.read_utf16());
    }
    // Saturated reads produce zero with EOF held.
    assert_eq!(cell.read_utf16(), 0);
    out
}

#[test]
fn bmp_units_decode_in_both_orders() {
    for big_endian in [false, true] {
        for w in [0x0000u16, 0x0041, 0x2603, 0xD7FF, 0xE000, 0xFFFD] {
            let mut cell = cell(big_endian);
            let bytes = unit_bytes(w, big_endian);
            cell.write_utf16(bytes[0]);
            assert!(!cell.status().ready);
            assert_eq!(cell.ruip(), 1);
            cell.write_utf16(bytes[1]);
            assert_eq!(cell.register(), w as u32, "unit {w:#06X} be={big_endian}");
            assert!(cell.status().ready && !cell.status().error);
            assert_eq!(cell.ruip(), 2);
            assert!(!cell.uin_eof());
            assert_eq!(read_utf16(&mut cell), bytes);
        }
    }
}

#[test]
fn surrogate_pairs_decode_in_both_orders() {
    for big_endian in [false, true] {
        for (cp, high, low) in [
            (0x1_0000u32, 0xD800u16, 0xDC00u16),
            (0x1_F34D, 0xD83D, 0xDE4D),
            (0xE_FFFF, 0xDB7F, 0xDFFF),
            (0x10_FFFF, 0xDBFF, 0xDFFF),
        ] {
            let mut cell = cell(big_endian);
            let hb = unit_bytes(high, big_endian);
            let lb = unit_bytes(low, big_endian);
            for b in [hb[0], hb[1], lb[0], lb[1]] {
                cell.write_utf16(b);
            }
            assert_eq!(cell.register(), cp, "pair {high:#06X} {low:#06X}");
            assert!(cell.status().ready && !cell.status().error);
            assert!(cell.uin_eof());
            assert_eq!(read_utf16(&mut cell), [hb[0], hb[1], lb[0], lb[1]]);
        }
    }
}

#[test]
fn lone_low_surrogate_is_a_character() {
    let mut cell = cell(false);
    cell.write_utf16(0x00);
    cell.write_utf16(0xDC);
    assert_eq!(cell.register(), 0xDC00);
    let s = cell.status();
    assert!(s.ready && !s.invalid && !s.error);
    let p = cell.props();
    assert!(p.surrogate && !p.highchar && !p.normal);
}

#[test]
fn parked_states_replay_losslessly() {
    // One byte parked.
    {
        let mut cell = cell(false);
        cell.write_utf16(0x9C);
        assert_eq!(cell.register(), 0xDDDD_DD9C);
        assert!(!cell.status().ready && !cell.status().error);
        assert_eq!(cell.ruip(), 1);
        assert_eq!(read_utf16(&mut cell), [0x9C]);
    }

    // High surrogate plus one stray byte parked.
    {
        let mut cell = cell(false);
        for b in [0x3D, 0xD8, 0x4D] {
            cell.write_utf16(b);
        }
        assert_eq!(cell.register(), 0xDDD8_3D4D);
        assert!(!cell.status().ready && !cell.status().error);
        assert_eq!(cell.ruip(), 3);
        assert_eq!(read_utf16(&mut cell), [0x3D, 0xD8, 0x4D]);
    }

    // Same park, big-endian input.
    let mut cell = cell(true);
    for b in [0xD8, 0x3D, 0x4D] {
        cell.write_utf16(b);
    }
    assert_eq!(cell.register(), 0xDDD8_3D4D);
    assert_eq!(read_utf16(&mut cell), [0xD8, 0x3D, 0x4D]);
}

#[test]
fn revert_publishes_the_high_surrogate() {
    // Little-endian: D83D then 'A'; the pair never completes.
    let mut cell = cell(false);
    for b in [0x3D, 0xD8, 0x41, 0x00] {
        cell.write_utf16(b);
    }
    assert_eq!(cell.register(), 0xD83D);
    let s = cell.status();
    assert!(s.ready && s.retry && s.error);
    assert!(!s.invalid, "revert is a retry, not an encoding error");
    assert_eq!(cell.ruip(), 2);

    // The surrogate reads back; the orphaned word is then resubmitted.
    assert_eq!(read_utf16(&mut cell), [0x3D, 0xD8]);
    cell.reset_read();
    cell.write_utf16(0x41);
    assert!(!cell.status().retry);
    cell.write_utf16(0x00);
    assert_eq!(cell.register(), 0x41);
    assert!(cell.status().ready && !cell.status().error);
    assert!(cell.uin_eof());
    assert_eq!(read_utf16(&mut cell), [0x41, 0x00]);
}

#[test]
fn revert_on_second_high_surrogate() {
    // A high surrogate followed by another high surrogate reverts too;
    // the resubmitted word then parks as its own high surrogate.
    let mut cell = cell(false);
    for b in [0x3D, 0xD8, 0x00, 0xD8] {
        cell.write_utf16(b);
    }
    assert_eq!(cell.register(), 0xD83D);
    assert!(cell.status().retry);
    assert_eq!(cell.ruip(), 2);

    cell.reset_read();
    cell.write_utf16(0x00);
    cell.write_utf16(0xD8);
    assert_eq!(cell.register(), 0xD800);
    assert!(!cell.status().ready, "the fresh word parks again");
    assert!(cell.uin_eof());
}

#[test]
fn write_after_complete_pair_is_rejected() {
    let mut cell = cell(false);
    for b in [0x3D, 0xD8, 0x4D, 0xDE] {
        cell.write_utf16(b);
    }
    assert!(cell.uin_eof());
    cell.write_utf16(0x41);
    assert!(cell.status().retry);
    assert_eq!(cell.register(), 0x1_F34D);
}

#[test]
fn fresh_word_after_bmp_character() {
    // Within the four-byte input window a completed BMP character is overwritten
    // by the next word, no reset required.
    let mut cell = cell(false);
    cell.write_utf16(0x41);
    cell.write_utf16(0x00);
    assert_eq!(cell.register(), 0x41);
    cell.write_utf16(0x42);
    assert!(!cell.status().retry);
    assert!(!cell.status().ready);
    cell.write_utf16(0x00);
    assert_eq!(cell.register(), 0x42);
    assert!(cell.status().ready);
    assert!(cell.uin_eof());
}

#[test]
fn utf16_output_of_utf8_input() {
    // Characters that arrived through another port still emit UTF-16.
    {
        let mut cell = cell(true);
        for b in [0xE2, 0x98, 0x83] {
            cell.write_utf8(b);
        }
        assert_eq!(read_utf16(&mut cell), [0x26, 0x03]);
    }

    let mut cell = cell(true);
    for b in [0xF0, 0x9F, 0x8D, 0x8D] {
        cell.write_utf8(b);
    }
    assert_eq!(read_utf16(&mut cell), [0xD8, 0x3D, 0xDE, 0x4D]);
}

#[test]
fn no_utf16_image_beyond_unicode() {
    let mut cell = cell(true);
    for b in [0xF4, 0x90, 0x80, 0x80] {
        cell.write_utf8(b);
    }
    assert_eq!(cell.register(), 0x11_0000);
    assert!(cell.uout_eof(), "no UTF-16 emission for extended values");
    assert_eq!(cell.read_utf16(), 0);
}

#[test]
fn error_encodings_have_no_utf16_image() {
    let mut cell = TranscoderCell::default();
    cell.write_utf8(0xC0);
    cell.write_utf8(0x80);
    assert_eq!(cell.register(), 0xFFFF_F000);
    assert!(cell.uout_eof());
    assert_eq!(cell.read_utf16(), 0);
}

//! Property-based tests for the decoders.

use proptest::prelude::*;

use rv_disasm::{bitsel, decode16, decode32, disassemble, reg_name, Xlen};

fn any_xlen() -> impl Strategy<Value = Xlen> {
    prop_oneof![Just(Xlen::Rv32), Just(Xlen::Rv64), Just(Xlen::Rv128)]
}

/// A 16-bit parcel, or a 32-bit word whose low bits select the 32-bit decoder.
fn well_formed_word() -> impl Strategy<Value = u32> {
    prop_oneof![any::<u16>().prop_map(u32::from), any::<u32>().prop_map(|w| w | 0b11)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(5000))]

    /// Every well-formed word renders a single tagged line.
    #[test]
    fn disassemble_is_total(xlen in any_xlen(), word in well_formed_word()) {
        let s = disassemble(xlen, word as i64);
        prop_assert!(!s.is_empty());
        prop_assert!(!s.contains('\n'));
        prop_assert!(s.ends_with(')'));
        prop_assert!(s.contains("    ("));
    }

    /// Low bits 0b11 route to the 32-bit decoder; anything else to RVC.
    #[test]
    fn width_routing(xlen in any_xlen(), word in any::<u32>()) {
        let s = disassemble(xlen, word as i64);
        if bitsel(word, 1, 0) == 0b11 {
            prop_assert_eq!(&s, &decode32(xlen, word as u64));
            prop_assert!(s.contains("(class_"));
        } else {
            // upper half set: the compressed decoder rejects the width
            prop_assert_eq!(&s, &decode16(xlen, word as u64));
            if word >> 16 == 0 {
                prop_assert!(s.contains("(Quadrant_"));
            } else {
                prop_assert!(s.contains("> 16 bits"));
            }
        }
    }

    /// Decoders hold no shared state: another thread renders the same lines
    /// for every register width.
    #[test]
    fn decode_is_repeatable_across_threads(word in well_formed_word()) {
        let render = move || {
            [Xlen::Rv32, Xlen::Rv64, Xlen::Rv128]
                .map(|xlen| disassemble(xlen, word as i64))
        };
        let here = render();
        let there = std::thread::spawn(render).join().expect("decoder thread panicked");
        prop_assert_eq!(here, there);
    }

    #[test]
    fn bitsel_matches_shift_and_mask(word in any::<u32>(), lo in 0u32..31, width in 1u32..32) {
        let hi = (lo + width - 1).min(31);
        let expected = (word as u64 >> lo) & ((1u64 << (hi - lo + 1)) - 1);
        prop_assert_eq!(bitsel(word, hi, lo) as u64, expected);
    }

    #[test]
    fn register_names_keep_index(i in 0u32..32) {
        let suffix = format!("(x{i})");
        prop_assert!(reg_name(i).ends_with(&suffix));
    }

    #[test]
    fn negative_words_are_marked(xlen in any_xlen(), word in i64::MIN..0) {
        prop_assert!(disassemble(xlen, word).starts_with("[ERROR: 'instr' is negative: -"));
    }
}

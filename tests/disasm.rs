use rv_disasm::{disassemble, DecodeError, Disassembler, Xlen};

#[test]
fn canonical_encodings() {
    // LUI a0, 0
    let s = disassemble(Xlen::Rv64, 0x0000_0537);
    assert!(s.contains("LUI"));
    assert!(s.contains("x10"));

    // JALR zero, 0(ra) (ret)
    let s = disassemble(Xlen::Rv64, 0x0000_8067);
    assert!(s.starts_with("JALR"));

    // C.LI a0, 0
    let s = disassemble(Xlen::Rv64, 0x4501);
    assert!(s.contains("C.LI"));
    assert!(s.ends_with("(Quadrant_1)"));
}

#[test]
fn full_lines() {
    assert_eq!(
        disassemble(Xlen::Rv64, 0x1234_5537),
        "LUI a0(x10) := 1234_5000    (class_LUI)"
    );
    assert_eq!(
        disassemble(Xlen::Rv64, 0x0000_8067),
        "JALR ra(x1)+0; zero(x0) := PC    (class_JALR)"
    );
    assert_eq!(disassemble(Xlen::Rv64, 0x4501), "C.LI a0(x10) := 0    (Quadrant_1)");
}

#[test]
fn error_markers_are_strings() {
    assert_eq!(disassemble(Xlen::Rv64, -1), "[ERROR: 'instr' is negative: -1]");
    assert!(disassemble(Xlen::Rv64, 0x1_0000_0003).starts_with("[ERROR: 'instr' is > 32 bits"));
    assert!(disassemble(Xlen::Rv64, 0x1_0000).starts_with("[ERROR: 'instr' is > 16 bits"));
}

#[test]
fn structured_errors() {
    let d = Disassembler::new(Xlen::Rv32);
    assert_eq!(d.disassemble(-7), Err(DecodeError::NegativeWord(-7)));
    assert_eq!(d.disassemble(0x2_0000_0013), Err(DecodeError::Oversized32(0x2_0000_0013)));
    assert_eq!(d.disassemble(0x3_0000), Err(DecodeError::Oversized16(0x3_0000)));
}

#[test]
fn unknown_fallback() {
    // custom-0 opcode, all other fields zero
    assert_eq!(disassemble(Xlen::Rv64, 0x0000_000B), "<UNKNOWN>    (class_UNKNOWN)");
    // JALR with funct3 != 0 is not JALR
    assert_eq!(disassemble(Xlen::Rv64, 0x0085_10E7), "<UNKNOWN>    (class_UNKNOWN)");
}

#[test]
fn line_shape() {
    for word in [0x0000_0537i64, 0x4501, 0x0000_000B, 0x0000, 0x9D6D] {
        let s = disassemble(Xlen::Rv64, word);
        assert!(!s.contains('\n'));
        let tag = s.rfind("    (").expect("tag separator");
        assert!(s.ends_with(')'));
        assert!(!s[tag + 5..].contains(' '), "{s}");
    }
}

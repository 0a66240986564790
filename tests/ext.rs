use pretty_assertions::assert_eq;
use rv_disasm::{decode32, Xlen};

fn rv64(word: u64) -> String {
    decode32(Xlen::Rv64, word)
}
fn rv32(word: u64) -> String {
    decode32(Xlen::Rv32, word)
}

#[test]
fn muldiv_is_reachable() {
    assert_eq!(rv64(0x02C5_8533), "MUL a0(x10) := a1(x11), a2(x12)    (class_MULDIV)");
    assert_eq!(rv64(0x02C5_F533), "REMU a0(x10) := a1(x11), a2(x12)    (class_MULDIV)");
    assert_eq!(rv64(0x02C5_F53B), "REMUW a0(x10) := a1(x11), a2(x12)    (class_MULDIV_W)");
    assert!(rv32(0x02C5_F53B).contains("(ILLEGAL for RV32)"));
    assert!(!rv32(0x02C5_F533).contains("ILLEGAL"));
}

#[test]
fn atomics() {
    assert_eq!(rv64(0x1405_A52F), "LR.W.aq a0(x10) := MEM [a1(x11)]    (class_AMO)");
    assert_eq!(
        rv64(0x1AC5_B52F),
        "SC.D.rl a0(x10) := success/fail; MEM [a1(x11)] := a2(x12)    (class_AMO)"
    );
    assert!(rv32(0x1AC5_B52F).contains("(ILLEGAL for RV32)"));
    assert_eq!(
        rv64(0x06C5_A52F),
        "AMOADD.W.aqrl a0(x10) := MEM [a1(x11)] op= a2(x12)    (class_AMO)"
    );
    assert!(rv64(0xE0C5_C52F).starts_with("AMOMAXU.Q "));
    assert!(rv64(0x08C5_D52F).starts_with("AMOSWAP.<UNKNOWN_size: funct3 5> "));
}

#[test]
fn csr_access() {
    assert_eq!(
        rv64(0x3005_9573),
        "CSRRW a0(x10) := mstatus (csr 300) := a1(x11)    (class_CSRRx)"
    );
    assert_eq!(rv64(0x0012_E573), "CSRRSI a0(x10) := fflags (csr 1) := 5    (class_CSRRx)");
    assert_eq!(rv64(0x7C00_3073), "CSRRC zero(x0) := (csr 7c0) := zero(x0)    (class_CSRRx)");
    // funct3 = 4 is neither a CSR op nor SYSTEM
    assert_eq!(rv64(0x0000_4073), "<UNKNOWN>    (class_UNKNOWN)");
}

#[test]
fn system() {
    for (word, text) in [
        (0x0000_0073, "ECALL"),
        (0x0010_0073, "EBREAK"),
        (0x0020_0073, "URET"),
        (0x1020_0073, "SRET"),
        (0x3020_0073, "MRET"),
        (0x1050_0073, "WFI"),
    ] {
        assert_eq!(rv64(word), format!("{text}    (class_SYSTEM)"));
    }
    assert_eq!(
        rv64(0x12B5_0073),
        "SFENCE.VMA rs2 a1(x11)  rs1 a0(x10)    (class_SYSTEM)"
    );
    assert!(rv64(0xA2B5_0073).starts_with("HFENCE.GVMA rs2 a1(x11)"));
    assert_eq!(rv64(0xFE30_0073), "<UNKNOWN>    (class_SYSTEM)");
    // rd != 0 with funct3 = 0 matches no row
    assert_eq!(rv64(0x0000_00F3), "<UNKNOWN>    (class_UNKNOWN)");
}

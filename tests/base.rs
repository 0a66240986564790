use pretty_assertions::assert_eq;
use rv_disasm::{decode32, Xlen};

fn enc_r(op: u32, rd: u32, f3: u32, rs1: u32, rs2: u32, f7: u32) -> u64 {
    ((f7 << 25) | (rs2 << 20) | (rs1 << 15) | (f3 << 12) | (rd << 7) | op) as u64
}
fn enc_i(op: u32, rd: u32, f3: u32, rs1: u32, imm: u32) -> u64 {
    (((imm & 0xFFF) << 20) | (rs1 << 15) | (f3 << 12) | (rd << 7) | op) as u64
}

fn rv64(word: u64) -> String {
    decode32(Xlen::Rv64, word)
}
fn rv32(word: u64) -> String {
    decode32(Xlen::Rv32, word)
}

#[test]
fn upper_immediates_and_jumps() {
    assert_eq!(rv64(0x0000_1097), "AUIPC ra(x1) := PC+1000    (class_AUIPC)");
    assert_eq!(rv64(0x0010_00EF), "JAL PC+800; ra(x1) := PC    (class_JAL)");
    assert_eq!(rv64(0x0085_00E7), "JALR a0(x10)+8; ra(x1) := PC    (class_JALR)");
}

#[test]
fn branches() {
    assert_eq!(rv64(0x00B5_1863), "BNE a0(x10) a1(x11); PC+10    (class_BRANCH)");
    assert_eq!(rv64(0x8020_F063), "BGEU ra(x1) sp(x2); PC+1000    (class_BRANCH)");
    // funct3 010 is not a branch, but the row still owns the opcode
    assert!(rv64(0x0000_2063).starts_with("<UNKNOWN> zero(x0) zero(x0)"));
}

#[test]
fn loads_and_stores() {
    assert_eq!(rv64(0x0101_3503), "LD a0(x10) := MEM [sp(x2) + 10]    (class_LOAD)");
    assert_eq!(
        rv32(0x0101_3503),
        "LD a0(x10) := MEM [sp(x2) + 10]  (ILLEGAL for RV32)    (class_LOAD)"
    );
    assert!(rv32(0x0041_6503).starts_with("LWU"));
    assert!(rv32(0x0041_6503).contains("(ILLEGAL for RV32)"));
    assert!(rv64(0x0041_7503).starts_with("<UNKNOWN> a0(x10) := MEM"));

    assert_eq!(rv64(0x7EB5_2FA3), "SW MEM [a0(x10) + 7ff] := a1(x11)    (class_STORE)");
    assert_eq!(
        rv32(0x0011_3423),
        "SD MEM [sp(x2) + 8] := ra(x1)  (ILLEGAL for RV32)    (class_STORE)"
    );
}

#[test]
fn immediate_alu() {
    // immediates are shown raw, without sign extension
    assert_eq!(rv64(0xFFF5_0513), "ADDI a0(x10) := a0(x10), fff    (class_ALU_I)");
    assert_eq!(rv64(enc_i(0x13, 5, 0b111, 6, 0xFF)), "ANDI t0(x5) := t1(x6), ff    (class_ALU_I)");
    assert_eq!(rv64(0x4035_5513), "SRAI a0(x10) := a0(x10) shiftby 3    (class_ALU_I)");
}

#[test]
fn wide_shift_amount_is_illegal_on_rv32() {
    // slli a0, a0, 33
    assert_eq!(rv64(0x0215_1513), "SLLI a0(x10) := a0(x10) shiftby 21    (class_ALU_I)");
    assert_eq!(
        rv32(0x0215_1513),
        "SLLI a0(x10) := a0(x10) shiftby 21  (ILLEGAL for RV32)    (class_ALU_I)"
    );
    // shamt < 32 is fine everywhere
    assert!(!rv32(0x4035_5513).contains("ILLEGAL"));
}

#[test]
fn register_alu() {
    assert_eq!(rv64(0x40C5_8533), "SUB a0(x10) := a1(x11), a2(x12)    (class_ALU)");
    assert_eq!(rv64(enc_r(0x33, 7, 0b101, 8, 9, 0x20)), "SRA t2(x7) := s0/fp(x8), s1(x9)    (class_ALU)");
    // funct7 = 2 selects nothing
    assert_eq!(rv64(0x04C5_8533), "<UNKNOWN> a0(x10) := a1(x11), a2(x12)    (class_ALU)");
}

#[test]
fn word_ops() {
    assert_eq!(rv64(0x0015_051B), "ADDIW a0(x10) := a0(x10), 1    (class_ALU_IW)");
    assert_eq!(
        rv32(0x4055_551B),
        "SRAIW a0(x10) := a0(x10) shiftby 5  (ILLEGAL for RV32)    (class_ALU_IW)"
    );
    assert_eq!(rv64(0x00C5_953B), "SLLW a0(x10) := a1(x11), a2(x12)    (class_ALU_W)");
    assert_eq!(rv64(0x40C5_D53B), "SRAW a0(x10) := a1(x11), a2(x12)    (class_ALU_W)");
    assert!(rv32(0x00C5_953B).ends_with("(ILLEGAL for RV32)    (class_ALU_W)"));
}

#[test]
fn fences() {
    assert_eq!(rv64(0x0FF0_000F), "FENCE fm 0 pred f succ f    (class_FENCE)");
    assert_eq!(rv64(0x0000_100F), "FENCE.I zero(x0) := zero(x0), 0    (class_FENCE)");
    assert_eq!(rv64(0x0000_200F), "<UNKNOWN>    (class_FENCE)");
}

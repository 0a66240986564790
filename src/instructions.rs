//! 32-bit instruction classes.
//!
//! [`RULES`] is the decode priority list: the decoder walks it in order and
//! the first row whose predicate accepts the word renders it. A row that
//! owns an opcode but finds no operation for the funct fields still wins
//! and renders `<UNKNOWN>` under its own class tag.

use crate::bits::bitsel;
use crate::decoder::Xlen;
use crate::disasm::{csr, f, imm, x, Annot, Body, UNKNOWN};
use crate::isa::rv32::Fields;

pub mod opcode {
    pub const LOAD: u32 = 0b000_0011;
    pub const LOAD_FP: u32 = 0b000_0111;
    pub const MISC_MEM: u32 = 0b000_1111;
    pub const OP_IMM: u32 = 0b001_0011;
    pub const AUIPC: u32 = 0b001_0111;
    pub const OP_IMM_32: u32 = 0b001_1011;
    pub const STORE: u32 = 0b010_0011;
    pub const STORE_FP: u32 = 0b010_0111;
    pub const AMO: u32 = 0b010_1111;
    pub const OP: u32 = 0b011_0011;
    pub const LUI: u32 = 0b011_0111;
    pub const OP_32: u32 = 0b011_1011;
    pub const MADD: u32 = 0b100_0011;
    pub const MSUB: u32 = 0b100_0111;
    pub const NMSUB: u32 = 0b100_1011;
    pub const NMADD: u32 = 0b100_1111;
    pub const OP_FP: u32 = 0b101_0011;
    pub const BRANCH: u32 = 0b110_0011;
    pub const JALR: u32 = 0b110_0111;
    pub const JAL: u32 = 0b110_1111;
    pub const SYSTEM: u32 = 0b111_0011;
}

const MULDIV_FUNCT7: u32 = 0b000_0001;

pub struct Rule {
    pub class: &'static str,
    pub matches: fn(&Fields) -> bool,
    pub render: fn(&Fields, Xlen) -> Body,
}

pub const RULES: &[Rule] = &[
    Rule {
        class: "class_LUI",
        matches: |fl| fl.opcode == opcode::LUI,
        render: |fl, _| Body::new(format!("LUI {} := {}", x(fl.rd), imm(fl.imm_u()))),
    },
    Rule {
        class: "class_AUIPC",
        matches: |fl| fl.opcode == opcode::AUIPC,
        render: |fl, _| Body::new(format!("AUIPC {} := PC+{}", x(fl.rd), imm(fl.imm_u()))),
    },
    Rule {
        class: "class_JAL",
        matches: |fl| fl.opcode == opcode::JAL,
        render: |fl, _| Body::new(format!("JAL PC+{}; {} := PC", imm(fl.imm_j()), x(fl.rd))),
    },
    Rule {
        class: "class_JALR",
        matches: |fl| fl.opcode == opcode::JALR && fl.funct3 == 0,
        render: |fl, _| {
            Body::new(format!("JALR {}+{}; {} := PC", x(fl.rs1), imm(fl.imm12()), x(fl.rd)))
        },
    },
    Rule {
        class: "class_BRANCH",
        matches: |fl| fl.opcode == opcode::BRANCH,
        render: render_branch,
    },
    Rule {
        class: "class_LOAD",
        matches: |fl| fl.opcode == opcode::LOAD,
        render: render_load,
    },
    Rule {
        class: "class_STORE",
        matches: |fl| fl.opcode == opcode::STORE,
        render: render_store,
    },
    Rule {
        class: "class_ALU_I",
        matches: |fl| fl.opcode == opcode::OP_IMM,
        render: render_alu_imm,
    },
    Rule {
        class: "class_ALU",
        matches: |fl| fl.opcode == opcode::OP && fl.funct7 != MULDIV_FUNCT7,
        render: |fl, _| render_reg_reg(ALU, fl, false),
    },
    Rule {
        class: "class_ALU_IW",
        matches: |fl| fl.opcode == opcode::OP_IMM_32,
        render: render_alu_imm_word,
    },
    Rule {
        class: "class_ALU_W",
        matches: |fl| fl.opcode == opcode::OP_32 && fl.funct7 != MULDIV_FUNCT7,
        render: |fl, xlen| render_reg_reg(ALU_W, fl, xlen.is_rv32()),
    },
    Rule {
        class: "class_FENCE",
        matches: |fl| fl.opcode == opcode::MISC_MEM,
        render: render_fence,
    },
    Rule {
        class: "class_MULDIV",
        matches: |fl| fl.opcode == opcode::OP && fl.funct7 == MULDIV_FUNCT7,
        render: |fl, _| render_reg_reg(MULDIV, fl, false),
    },
    Rule {
        class: "class_MULDIV_W",
        matches: |fl| fl.opcode == opcode::OP_32 && fl.funct7 == MULDIV_FUNCT7,
        render: |fl, xlen| render_reg_reg(MULDIV_W, fl, xlen.is_rv32()),
    },
    Rule {
        class: "class_AMO",
        matches: |fl| fl.opcode == opcode::AMO,
        render: render_amo,
    },
    Rule {
        class: "class_CSRRx",
        matches: |fl| fl.opcode == opcode::SYSTEM && (1..=3).contains(&fl.funct3),
        render: |fl, _| render_csr(fl, x(fl.rs1)),
    },
    Rule {
        class: "class_CSRRx",
        matches: |fl| fl.opcode == opcode::SYSTEM && (5..=7).contains(&fl.funct3),
        render: |fl, _| render_csr(fl, imm(fl.rs1)),
    },
    Rule {
        class: "class_SYSTEM",
        matches: |fl| fl.opcode == opcode::SYSTEM && fl.funct3 == 0 && fl.rd == 0,
        render: render_system,
    },
    Rule {
        class: "class_FP_LOAD",
        matches: |fl| fl.opcode == opcode::LOAD_FP && matches!(fl.funct3, 0b010 | 0b011),
        render: |fl, _| {
            let op = if fl.funct3 == 0b010 { "FLW" } else { "FLD" };
            Body::new(format!("{op} {} := MEM [{} + {}]", f(fl.rd), x(fl.rs1), imm(fl.imm12())))
        },
    },
    Rule {
        class: "class_FP_STORE",
        matches: |fl| fl.opcode == opcode::STORE_FP && matches!(fl.funct3, 0b010 | 0b011),
        render: |fl, _| {
            let op = if fl.funct3 == 0b010 { "FSW" } else { "FSD" };
            Body::new(format!("{op} MEM [{} + {}] := {}", x(fl.rs1), imm(fl.imm_s()), f(fl.rs2)))
        },
    },
    Rule {
        class: "class_FP_R4",
        matches: |fl| {
            matches!(fl.opcode, opcode::MADD | opcode::MSUB | opcode::NMSUB | opcode::NMADD)
                && fl.fmt <= 0b01
        },
        render: render_fused,
    },
    Rule {
        class: "class_FP_R",
        matches: |fl| fl.opcode == opcode::OP_FP && FP_R.iter().any(|op| op.funct7 == fl.funct7),
        render: |fl, xlen| render_fp(FP_R, fl, xlen),
    },
    Rule {
        class: "class_FP_R2",
        matches: |fl| fl.opcode == opcode::OP_FP && FP_R2.iter().any(|op| op.funct7 == fl.funct7),
        render: |fl, xlen| render_fp(FP_R2, fl, xlen),
    },
];

// ---- integer ops

/// Register-register operation selected by (funct3, funct7).
#[derive(Debug, Clone, Copy)]
pub struct RegOp {
    pub funct3: u32,
    pub funct7: u32,
    pub mnemonic: &'static str,
}

const fn r(funct3: u32, funct7: u32, mnemonic: &'static str) -> RegOp {
    RegOp { funct3, funct7, mnemonic }
}

pub const ALU: &[RegOp] = &[
    r(0b000, 0b000_0000, "ADD"),
    r(0b000, 0b010_0000, "SUB"),
    r(0b001, 0b000_0000, "SLL"),
    r(0b010, 0b000_0000, "SLT"),
    r(0b011, 0b000_0000, "SLTU"),
    r(0b100, 0b000_0000, "XOR"),
    r(0b101, 0b000_0000, "SRL"),
    r(0b101, 0b010_0000, "SRA"),
    r(0b110, 0b000_0000, "OR"),
    r(0b111, 0b000_0000, "AND"),
];

pub const ALU_W: &[RegOp] = &[
    r(0b000, 0b000_0000, "ADDW"),
    r(0b000, 0b010_0000, "SUBW"),
    r(0b001, 0b000_0000, "SLLW"),
    r(0b101, 0b000_0000, "SRLW"),
    r(0b101, 0b010_0000, "SRAW"),
];

pub const MULDIV: &[RegOp] = &[
    r(0b000, MULDIV_FUNCT7, "MUL"),
    r(0b001, MULDIV_FUNCT7, "MULH"),
    r(0b010, MULDIV_FUNCT7, "MULHSU"),
    r(0b011, MULDIV_FUNCT7, "MULHU"),
    r(0b100, MULDIV_FUNCT7, "DIV"),
    r(0b101, MULDIV_FUNCT7, "DIVU"),
    r(0b110, MULDIV_FUNCT7, "REM"),
    r(0b111, MULDIV_FUNCT7, "REMU"),
];

pub const MULDIV_W: &[RegOp] = &[
    r(0b000, MULDIV_FUNCT7, "MULW"),
    r(0b100, MULDIV_FUNCT7, "DIVW"),
    r(0b101, MULDIV_FUNCT7, "DIVUW"),
    r(0b110, MULDIV_FUNCT7, "REMW"),
    r(0b111, MULDIV_FUNCT7, "REMUW"),
];

fn lookup(table: &[RegOp], fl: &Fields) -> Option<&'static str> {
    table
        .iter()
        .find(|op| op.funct3 == fl.funct3 && op.funct7 == fl.funct7)
        .map(|op| op.mnemonic)
}

/// `illegal` is set for the word tables when decoding for RV32.
fn render_reg_reg(table: &[RegOp], fl: &Fields, illegal: bool) -> Body {
    let op = lookup(table, fl);
    Body::new(format!(
        "{} {} := {}, {}",
        op.unwrap_or(UNKNOWN),
        x(fl.rd),
        x(fl.rs1),
        x(fl.rs2)
    ))
    .note(Annot::ILLEGAL_RV32, illegal && op.is_some())
}

fn render_branch(fl: &Fields, _: Xlen) -> Body {
    let op = match fl.funct3 {
        0b000 => "BEQ",
        0b001 => "BNE",
        0b100 => "BLT",
        0b101 => "BGE",
        0b110 => "BLTU",
        0b111 => "BGEU",
        _ => UNKNOWN,
    };
    Body::new(format!("{op} {} {}; PC+{}", x(fl.rs1), x(fl.rs2), imm(fl.imm_b())))
}

fn render_load(fl: &Fields, xlen: Xlen) -> Body {
    let op = match fl.funct3 {
        0b000 => "LB",
        0b001 => "LH",
        0b010 => "LW",
        0b011 => "LD",
        0b100 => "LBU",
        0b101 => "LHU",
        0b110 => "LWU",
        _ => UNKNOWN,
    };
    Body::new(format!("{op} {} := MEM [{} + {}]", x(fl.rd), x(fl.rs1), imm(fl.imm12())))
        .note(Annot::ILLEGAL_RV32, xlen.is_rv32() && matches!(fl.funct3, 0b011 | 0b110))
}

fn render_store(fl: &Fields, xlen: Xlen) -> Body {
    let op = match fl.funct3 {
        0b000 => "SB",
        0b001 => "SH",
        0b010 => "SW",
        0b011 => "SD",
        _ => UNKNOWN,
    };
    Body::new(format!("{op} MEM [{} + {}] := {}", x(fl.rs1), imm(fl.imm_s()), x(fl.rs2)))
        .note(Annot::ILLEGAL_RV32, xlen.is_rv32() && fl.funct3 == 0b011)
}

fn render_alu_imm(fl: &Fields, xlen: Xlen) -> Body {
    // shifts are keyed on funct6 so that shamt[5] stays part of the amount
    let shift = match (fl.funct3, fl.funct6) {
        (0b001, 0b00_0000) => Some("SLLI"),
        (0b101, 0b00_0000) => Some("SRLI"),
        (0b101, 0b01_0000) => Some("SRAI"),
        _ => None,
    };
    if let Some(op) = shift {
        return Body::new(format!("{op} {} := {} shiftby {}", x(fl.rd), x(fl.rs1), imm(fl.shamt64())))
            .note(Annot::ILLEGAL_RV32, xlen.is_rv32() && fl.shamt64() >= 32);
    }
    let op = match fl.funct3 {
        0b000 => "ADDI",
        0b010 => "SLTI",
        0b011 => "SLTIU",
        0b100 => "XORI",
        0b110 => "ORI",
        0b111 => "ANDI",
        _ => UNKNOWN,
    };
    Body::new(format!("{op} {} := {}, {}", x(fl.rd), x(fl.rs1), imm(fl.imm12())))
}

fn render_alu_imm_word(fl: &Fields, xlen: Xlen) -> Body {
    let shift = match (fl.funct3, fl.funct7) {
        (0b001, 0b000_0000) => Some("SLLIW"),
        (0b101, 0b000_0000) => Some("SRLIW"),
        (0b101, 0b010_0000) => Some("SRAIW"),
        _ => None,
    };
    let body = match (shift, fl.funct3) {
        (Some(op), _) => {
            Body::new(format!("{op} {} := {} shiftby {}", x(fl.rd), x(fl.rs1), imm(fl.shamt32())))
        }
        (None, 0b000) => {
            Body::new(format!("ADDIW {} := {}, {}", x(fl.rd), x(fl.rs1), imm(fl.imm12())))
        }
        (None, _) => {
            return Body::new(format!("{UNKNOWN} {} := {}, {}", x(fl.rd), x(fl.rs1), imm(fl.imm12())))
        }
    };
    body.note(Annot::ILLEGAL_RV32, xlen.is_rv32())
}

fn render_fence(fl: &Fields, _: Xlen) -> Body {
    let raw = fl.raw;
    match fl.funct3 {
        0b000 => Body::new(format!(
            "FENCE fm {} pred {} succ {}",
            imm(bitsel(raw, 31, 28)),
            imm(bitsel(raw, 27, 24)),
            imm(bitsel(raw, 23, 20)),
        )),
        0b001 => Body::new(format!("FENCE.I {} := {}, {}", x(fl.rd), x(fl.rs1), imm(fl.imm12()))),
        _ => Body::new(UNKNOWN),
    }
}

// ---- atomics

const AMO_OPS: &[(u32, &str)] = &[
    (0b00010, "LR"),
    (0b00011, "SC"),
    (0b00001, "AMOSWAP"),
    (0b00000, "AMOADD"),
    (0b00100, "AMOXOR"),
    (0b01100, "AMOAND"),
    (0b01000, "AMOOR"),
    (0b10000, "AMOMIN"),
    (0b10100, "AMOMAX"),
    (0b11000, "AMOMINU"),
    (0b11100, "AMOMAXU"),
];

fn render_amo(fl: &Fields, xlen: Xlen) -> Body {
    let op = AMO_OPS
        .iter()
        .find(|&&(funct5, _)| funct5 == fl.funct5)
        .map_or(UNKNOWN, |&(_, name)| name);
    let size = match fl.funct3 {
        0b010 => ".W".to_string(),
        0b011 => ".D".to_string(),
        0b100 => ".Q".to_string(),
        n => format!(".<UNKNOWN_size: funct3 {n}>"),
    };
    let order = match (fl.aq(), fl.rl()) {
        (true, true) => ".aqrl",
        (true, false) => ".aq",
        (false, true) => ".rl",
        (false, false) => "",
    };
    let (rd, rs1, rs2) = (x(fl.rd), x(fl.rs1), x(fl.rs2));
    let text = match op {
        "LR" => format!("{op}{size}{order} {rd} := MEM [{rs1}]"),
        "SC" => format!("{op}{size}{order} {rd} := success/fail; MEM [{rs1}] := {rs2}"),
        _ => format!("{op}{size}{order} {rd} := MEM [{rs1}] op= {rs2}"),
    };
    Body::new(text).note(Annot::ILLEGAL_RV32, xlen.is_rv32() && fl.funct3 == 0b011)
}

// ---- CSR and SYSTEM

fn render_csr(fl: &Fields, source: String) -> Body {
    let op = match fl.funct3 {
        0b001 => "CSRRW",
        0b010 => "CSRRS",
        0b011 => "CSRRC",
        0b101 => "CSRRWI",
        0b110 => "CSRRSI",
        0b111 => "CSRRCI",
        _ => UNKNOWN,
    };
    Body::new(format!("{op} {} := {} := {source}", x(fl.rd), csr(fl.imm12())))
}

fn render_system(fl: &Fields, _: Xlen) -> Body {
    let op = match (fl.funct7, fl.rs2, fl.rs1) {
        _ if fl.imm12() == 0 && fl.rs1 == 0 => "ECALL",
        _ if fl.imm12() == 1 && fl.rs1 == 0 => "EBREAK",
        (0b000_0000, 0b00010, 0) => "URET",
        (0b000_1000, 0b00010, 0) => "SRET",
        (0b001_1000, 0b00010, 0) => "MRET",
        (0b000_1000, 0b00101, 0) => "WFI",
        (0b000_1001, _, _) => "SFENCE.VMA",
        (0b001_0001, _, _) => "HFENCE.BVMA",
        (0b101_0001, _, _) => "HFENCE.GVMA",
        _ => UNKNOWN,
    };
    if op.contains("FENCE") {
        Body::new(format!("{op} rs2 {}  rs1 {}", x(fl.rs2), x(fl.rs1)))
    } else {
        Body::new(op)
    }
}

// ---- floating point

fn precision(fmt: u32) -> &'static str {
    if fmt == 0b00 {
        ".S"
    } else {
        ".D"
    }
}

fn render_fused(fl: &Fields, _: Xlen) -> Body {
    let op = match fl.opcode {
        opcode::MADD => "FMADD",
        opcode::MSUB => "FMSUB",
        opcode::NMSUB => "FNMSUB",
        _ => "FNMADD",
    };
    Body::new(format!(
        "{op}{} {} := {}, {}, {}; rm {}",
        precision(fl.fmt),
        f(fl.rd),
        f(fl.rs1),
        f(fl.rs2),
        f(fl.rs3),
        imm(fl.rm())
    ))
}

/// Which register file each operand slot reads, and whether a rounding
/// mode is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FpForm {
    /// `frd := frs1, frs2; rm`
    Arith,
    /// `frd := frs1, frs2`
    Sign,
    /// `rd := frs1, frs2`
    Compare,
    /// `frd := frs1; rm`
    Unary,
    /// `rd := frs1; rm`
    ToInt,
    /// `frd := rs1; rm`
    FromInt,
    /// `rd := frs1`
    MoveToInt,
    /// `frd := rs1`
    MoveFromInt,
}

/// How an OP-FP entry is picked out once funct7 matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FpSel {
    Any,
    Funct3(u32),
    Rs2(u32),
    Both { funct3: u32, rs2: u32 },
}

#[derive(Debug, Clone, Copy)]
pub struct FpOp {
    pub funct7: u32,
    pub sel: FpSel,
    pub mnemonic: &'static str,
    pub form: FpForm,
    pub rv64_only: bool,
}

impl FpOp {
    fn selects(&self, fl: &Fields) -> bool {
        self.funct7 == fl.funct7
            && match self.sel {
                FpSel::Any => true,
                FpSel::Funct3(v) => fl.funct3 == v,
                FpSel::Rs2(v) => fl.rs2 == v,
                FpSel::Both { funct3, rs2 } => fl.funct3 == funct3 && fl.rs2 == rs2,
            }
    }
}

const fn fp(funct7: u32, sel: FpSel, mnemonic: &'static str, form: FpForm) -> FpOp {
    FpOp { funct7, sel, mnemonic, form, rv64_only: false }
}

const fn fp64(funct7: u32, sel: FpSel, mnemonic: &'static str, form: FpForm) -> FpOp {
    FpOp { funct7, sel, mnemonic, form, rv64_only: true }
}

use FpForm::*;
use FpSel::*;

/// OP-FP operations reading two source registers.
pub const FP_R: &[FpOp] = &[
    fp(0b000_0000, Any, "FADD.S", Arith),
    fp(0b000_0100, Any, "FSUB.S", Arith),
    fp(0b000_1000, Any, "FMUL.S", Arith),
    fp(0b000_1100, Any, "FDIV.S", Arith),
    fp(0b000_0001, Any, "FADD.D", Arith),
    fp(0b000_0101, Any, "FSUB.D", Arith),
    fp(0b000_1001, Any, "FMUL.D", Arith),
    fp(0b000_1101, Any, "FDIV.D", Arith),
    fp(0b001_0000, Funct3(0b000), "FSGNJ.S", Sign),
    fp(0b001_0000, Funct3(0b001), "FSGNJN.S", Sign),
    fp(0b001_0000, Funct3(0b010), "FSGNJX.S", Sign),
    fp(0b001_0001, Funct3(0b000), "FSGNJ.D", Sign),
    fp(0b001_0001, Funct3(0b001), "FSGNJN.D", Sign),
    fp(0b001_0001, Funct3(0b010), "FSGNJX.D", Sign),
    fp(0b001_0100, Funct3(0b000), "FMIN.S", Sign),
    fp(0b001_0100, Funct3(0b001), "FMAX.S", Sign),
    fp(0b001_0101, Funct3(0b000), "FMIN.D", Sign),
    fp(0b001_0101, Funct3(0b001), "FMAX.D", Sign),
    fp(0b101_0000, Funct3(0b010), "FEQ.S", Compare),
    fp(0b101_0000, Funct3(0b001), "FLT.S", Compare),
    fp(0b101_0000, Funct3(0b000), "FLE.S", Compare),
    fp(0b101_0001, Funct3(0b010), "FEQ.D", Compare),
    fp(0b101_0001, Funct3(0b001), "FLT.D", Compare),
    fp(0b101_0001, Funct3(0b000), "FLE.D", Compare),
];

/// OP-FP operations reading one source register; rs2 is an opcode extension.
pub const FP_R2: &[FpOp] = &[
    fp(0b010_1100, Rs2(0), "FSQRT.S", Unary),
    fp(0b010_1101, Rs2(0), "FSQRT.D", Unary),
    fp(0b010_0000, Rs2(1), "FCVT.S.D", Unary),
    fp(0b010_0001, Rs2(0), "FCVT.D.S", Unary),
    fp(0b110_0000, Rs2(0), "FCVT.W.S", ToInt),
    fp(0b110_0000, Rs2(1), "FCVT.WU.S", ToInt),
    fp64(0b110_0000, Rs2(2), "FCVT.L.S", ToInt),
    fp64(0b110_0000, Rs2(3), "FCVT.LU.S", ToInt),
    fp(0b110_0001, Rs2(0), "FCVT.W.D", ToInt),
    fp(0b110_0001, Rs2(1), "FCVT.WU.D", ToInt),
    fp64(0b110_0001, Rs2(2), "FCVT.L.D", ToInt),
    fp64(0b110_0001, Rs2(3), "FCVT.LU.D", ToInt),
    fp(0b110_1000, Rs2(0), "FCVT.S.W", FromInt),
    fp(0b110_1000, Rs2(1), "FCVT.S.WU", FromInt),
    fp64(0b110_1000, Rs2(2), "FCVT.S.L", FromInt),
    fp64(0b110_1000, Rs2(3), "FCVT.S.LU", FromInt),
    fp(0b110_1001, Rs2(0), "FCVT.D.W", FromInt),
    fp(0b110_1001, Rs2(1), "FCVT.D.WU", FromInt),
    fp64(0b110_1001, Rs2(2), "FCVT.D.L", FromInt),
    fp64(0b110_1001, Rs2(3), "FCVT.D.LU", FromInt),
    fp(0b111_0000, Both { funct3: 0b000, rs2: 0 }, "FMV.X.W", MoveToInt),
    fp(0b111_0000, Both { funct3: 0b001, rs2: 0 }, "FCLASS.S", MoveToInt),
    fp64(0b111_0001, Both { funct3: 0b000, rs2: 0 }, "FMV.X.D", MoveToInt),
    fp(0b111_0001, Both { funct3: 0b001, rs2: 0 }, "FCLASS.D", MoveToInt),
    fp(0b111_1000, Both { funct3: 0b000, rs2: 0 }, "FMV.W.X", MoveFromInt),
    fp64(0b111_1001, Both { funct3: 0b000, rs2: 0 }, "FMV.D.X", MoveFromInt),
];

fn render_fp(table: &[FpOp], fl: &Fields, xlen: Xlen) -> Body {
    let Some(op) = table.iter().find(|op| op.selects(fl)) else {
        return Body::new(UNKNOWN);
    };
    let name = op.mnemonic;
    let rm = imm(fl.rm());
    let text = match op.form {
        Arith => format!("{name} {} := {}, {}; rm {rm}", f(fl.rd), f(fl.rs1), f(fl.rs2)),
        Sign => format!("{name} {} := {}, {}", f(fl.rd), f(fl.rs1), f(fl.rs2)),
        Compare => format!("{name} {} := {}, {}", x(fl.rd), f(fl.rs1), f(fl.rs2)),
        Unary => format!("{name} {} := {}; rm {rm}", f(fl.rd), f(fl.rs1)),
        ToInt => format!("{name} {} := {}; rm {rm}", x(fl.rd), f(fl.rs1)),
        FromInt => format!("{name} {} := {}; rm {rm}", f(fl.rd), x(fl.rs1)),
        MoveToInt => format!("{name} {} := {}", x(fl.rd), f(fl.rs1)),
        MoveFromInt => format!("{name} {} := {}", f(fl.rd), x(fl.rs1)),
    };
    Body::new(text).note(Annot::ILLEGAL_RV32, op.rv64_only && xlen.is_rv32())
}

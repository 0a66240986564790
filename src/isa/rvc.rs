//! Compressed (RVC) 16-bit instructions.
//!
//! The quadrant (bits [1:0]) and funct3 (bits [15:13]) pick the encoding
//! group; several groups mean different things depending on XLEN.

use tracing::{debug, trace};

use crate::bits::{bit, bitsel};
use crate::decoder::{DecodeError, Decoder, Xlen};
use crate::disasm::{f, fmt_line, fp, imm, x, xp, Annot, Body, UNKNOWN};
use crate::imm::{self as layout, ImmLayout};

const SP: u32 = 2;
const RA: u32 = 1;

#[derive(Debug, Clone, Copy, Default)]
pub struct RvcDecoder {
    xlen: Xlen,
}

impl RvcDecoder {
    pub fn new(xlen: Xlen) -> Self {
        Self { xlen }
    }

    /// Render a word already known to fit in 16 bits.
    pub fn render(&self, raw: u16) -> String {
        let w = raw as u32;
        let quadrant = bitsel(w, 1, 0);
        let body = match quadrant {
            0b00 => self.quadrant0(w),
            0b01 => self.quadrant1(w),
            0b10 => self.quadrant2(w),
            // 0b11 is the 32-bit length marker; only reachable by calling
            // this decoder directly
            _ => Body::new(UNKNOWN),
        };
        if body.text == UNKNOWN {
            trace!(word = w, quadrant, "no compressed encoding matched");
        }
        fmt_line(&body, &format!("Quadrant_{quadrant}"))
    }

    fn quadrant0(&self, w: u32) -> Body {
        let funct3 = bitsel(w, 15, 13);
        let rd = bitsel(w, 4, 2);
        let rs2 = rd;
        let rs1 = bitsel(w, 9, 7);
        let xlen = self.xlen;

        if bitsel(w, 15, 2) == 0 {
            return Body::new("ILLEGAL_INSTR");
        }

        let load = |op: &str, dst: String, l: &ImmLayout| {
            Body::new(format!("{op} {dst} := MEM [{} + {}]", xp(rs1), imm(l.extract(w))))
        };
        let store = |op: &str, src: String, l: &ImmLayout| {
            Body::new(format!("{op} MEM [{} + {}] := {src}", xp(rs1), imm(l.extract(w))))
        };

        match funct3 {
            0b000 => {
                let nzuimm = layout::CIW_ADDI4SPN.extract(w);
                Body::new(format!("C.ADDI4SPN {} := {} + {}", xp(rd), x(SP), imm(nzuimm)))
                    .note(Annot::RESERVED, nzuimm == 0)
            }
            0b001 if xlen == Xlen::Rv128 => load("C.LQ", xp(rd), &layout::CL_Q),
            0b001 => load("C.FLD", fp(rd), &layout::CL_D),
            0b010 => load("C.LW", xp(rd), &layout::CL_W),
            0b011 if xlen.is_rv32() => load("C.FLW", fp(rd), &layout::CL_W),
            0b011 => load("C.LD", xp(rd), &layout::CL_D),
            0b101 if xlen == Xlen::Rv128 => store("C.SQ", xp(rs2), &layout::CL_Q),
            0b101 => store("C.FSD", fp(rs2), &layout::CL_D),
            0b110 => store("C.SW", xp(rs2), &layout::CL_W),
            0b111 if xlen.is_rv32() => store("C.FSW", fp(rs2), &layout::CL_W),
            0b111 => store("C.SD", xp(rs2), &layout::CL_D),
            // 0b100 is reserved
            _ => Body::new(UNKNOWN),
        }
    }

    fn quadrant1(&self, w: u32) -> Body {
        let funct3 = bitsel(w, 15, 13);
        let rd = bitsel(w, 11, 7);
        let xlen = self.xlen;

        match funct3 {
            0b000 => {
                let nzimm = layout::CI.extract(w);
                if rd == 0 {
                    Body::new("C.NOP").note(Annot::HINT, nzimm != 0)
                } else {
                    Body::new(format!("C.ADDI {} := {} + {}", x(rd), x(rd), imm(nzimm)))
                        .note(Annot::HINT, nzimm == 0)
                }
            }
            0b001 if xlen.is_rv32() => {
                Body::new(format!("C.JAL PC + {}; {} := PC", imm(layout::CJ.extract(w)), x(RA)))
            }
            0b001 if rd != 0 => Body::new(format!(
                "C.ADDIW {} := {} + {}",
                x(rd),
                x(rd),
                imm(layout::CI.extract(w))
            )),
            0b001 => Body::new(UNKNOWN),
            0b010 => Body::new(format!("C.LI {} := {}", x(rd), imm(layout::CI.extract(w))))
                .note(Annot::HINT, rd == 0),
            0b011 if rd == SP => {
                let nzimm = layout::CI_ADDI16SP.extract(w);
                Body::new(format!("C.ADDI16SP {} := {} + {}", x(SP), x(SP), imm(nzimm)))
                    .note(Annot::RESERVED, nzimm == 0)
            }
            0b011 => {
                let nzimm = layout::CI_LUI.extract(w);
                Body::new(format!("C.LUI {} := {}", x(rd), imm(nzimm)))
                    .note(Annot::HINT, rd == 0)
                    .note(Annot::RESERVED, nzimm == 0)
            }
            0b100 => self.arith(w),
            0b101 => Body::new(format!("C.J PC + {}", imm(layout::CJ.extract(w)))),
            0b110 => Body::new(format!(
                "C.BEQZ {}; PC + {}",
                xp(bitsel(w, 9, 7)),
                imm(layout::CB.extract(w))
            )),
            _ => Body::new(format!(
                "C.BNEZ {}; PC + {}",
                xp(bitsel(w, 9, 7)),
                imm(layout::CB.extract(w))
            )),
        }
    }

    /// Quadrant 1, funct3 = 100: shifts, C.ANDI and the register-register ops.
    fn arith(&self, w: u32) -> Body {
        let rd = bitsel(w, 9, 7);
        let rs2 = bitsel(w, 4, 2);
        let op_hi = bitsel(w, 11, 10);
        let op_lo = bitsel(w, 6, 5);
        let hi_bit = bit(w, 12);
        let shamt = layout::CI.extract(w);
        let rv32 = self.xlen.is_rv32();
        let narrow = matches!(self.xlen, Xlen::Rv32 | Xlen::Rv64);

        let shift = |op: &str| {
            if shamt != 0 {
                Body::new(format!("C.{op} {} := {} by {}", xp(rd), xp(rd), imm(shamt)))
                    .note(Annot::NON_STD_RV32, rv32 && hi_bit)
            } else {
                Body::new(format!("C.{op}64 {} := {}", xp(rd), xp(rd))).note(Annot::HINT, narrow)
            }
        };
        let reg = |op: &str| Body::new(format!("C.{op} {} := {}, {}", xp(rd), xp(rd), xp(rs2)));

        match (op_hi, hi_bit, op_lo) {
            (0b00, _, _) => shift("SRLI"),
            (0b01, _, _) => shift("SRAI"),
            (0b10, _, _) => Body::new(format!("C.ANDI {} := {}, {}", xp(rd), xp(rd), imm(shamt))),
            (_, false, 0b00) => reg("SUB"),
            (_, false, 0b01) => reg("XOR"),
            (_, false, 0b10) => reg("OR"),
            (_, false, _) => reg("AND"),
            (_, true, 0b00) => reg("SUBW").note(Annot::RESERVED, rv32),
            (_, true, 0b01) => reg("ADDW").note(Annot::RESERVED, rv32),
            (_, true, _) => Body::new("(RESERVED)"),
        }
    }

    fn quadrant2(&self, w: u32) -> Body {
        let funct3 = bitsel(w, 15, 13);
        let rd = bitsel(w, 11, 7);
        let rs2 = bitsel(w, 6, 2);
        let hi_bit = bit(w, 12);
        let xlen = self.xlen;

        let load = |op: &str, dst: String, l: &ImmLayout| {
            Body::new(format!("{op} {dst} := MEM [{} + {}]", x(SP), imm(l.extract(w))))
        };
        let store = |op: &str, src: String, l: &ImmLayout| {
            Body::new(format!("{op} MEM [{} + {}] := {src}", x(SP), imm(l.extract(w))))
        };

        match funct3 {
            0b000 => {
                let shamt = layout::CI.extract(w);
                if shamt != 0 {
                    Body::new(format!("C.SLLI {} := {}, {}", x(rd), x(rd), imm(shamt)))
                        .note(Annot::HINT, rd == 0)
                        .note(Annot::NON_STD_RV32, xlen.is_rv32() && hi_bit)
                } else {
                    Body::new(format!("C.SLLI64 {} := {}", x(rd), x(rd)))
                        .note(Annot::HINT, xlen != Xlen::Rv128 || rd == 0)
                }
            }
            0b001 if xlen == Xlen::Rv128 => {
                load("C.FLQSP", x(rd), &layout::CI_LQSP).note(Annot::RESERVED, rd == 0)
            }
            0b001 => load("C.FLDSP", f(rd), &layout::CI_LDSP),
            0b010 => load("C.LWSP", x(rd), &layout::CI_LWSP).note(Annot::RESERVED, rd == 0),
            0b011 if xlen.is_rv32() => load("C.FLWSP", f(rd), &layout::CI_LWSP),
            0b011 => load("C.LDSP", x(rd), &layout::CI_LDSP).note(Annot::RESERVED, rd == 0),
            0b100 => match (hi_bit, rd, rs2) {
                (false, rs1, 0) => Body::new(format!("C.JR {}", x(rs1))).note(Annot::RESERVED, rs1 == 0),
                (false, _, _) => {
                    Body::new(format!("C.MV {} := {}", x(rd), x(rs2))).note(Annot::HINT, rd == 0)
                }
                (true, 0, 0) => Body::new("C.EBREAK"),
                (true, rs1, 0) => Body::new(format!("C.JALR {}; {} := PC", x(rs1), x(RA))),
                (true, _, _) => Body::new(format!("C.ADD {} := {}, {}", x(rd), x(rd), x(rs2)))
                    .note(Annot::HINT, rd == 0),
            },
            0b101 if xlen == Xlen::Rv128 => store("C.SQSP", x(rs2), &layout::CSS_SQSP),
            0b101 => store("C.FSDSP", f(rs2), &layout::CSS_SDSP),
            0b110 => store("C.SWSP", x(rs2), &layout::CSS_SWSP),
            0b111 if xlen.is_rv32() => store("C.FSWSP", f(rs2), &layout::CSS_SWSP),
            _ => store("C.SDSP", x(rs2), &layout::CSS_SDSP),
        }
    }
}

impl Decoder for RvcDecoder {
    fn decode(&self, word: u64) -> Result<String, DecodeError> {
        let raw = u16::try_from(word).map_err(|_| {
            debug!(word, "word wider than 16 bits");
            DecodeError::Oversized16(word)
        })?;
        Ok(self.render(raw))
    }
}

pub fn decode16(xlen: Xlen, word: u64) -> String {
    try_decode16(xlen, word).unwrap_or_else(|e| e.to_string())
}

pub fn try_decode16(xlen: Xlen, word: u64) -> Result<String, DecodeError> {
    RvcDecoder::new(xlen).decode(word)
}

use tracing::{debug, trace};

use crate::bits::{bit, bitsel};
use crate::decoder::{DecodeError, Decoder, Xlen};
use crate::disasm::{fmt_line, Body, UNKNOWN};
use crate::imm;
use crate::instructions::RULES;

/// Fixed-position fields of a 32-bit instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields {
    pub raw: u32,
    pub opcode: u32,
    pub rd: u32,
    pub funct3: u32,
    pub rs1: u32,
    pub rs2: u32,
    pub rs3: u32,
    pub funct7: u32,
    pub funct6: u32,
    pub funct5: u32,
    /// FP format, bits [26:25]
    pub fmt: u32,
}

impl Fields {
    pub fn new(raw: u32) -> Self {
        Self {
            raw,
            opcode: bitsel(raw, 6, 0),
            rd: bitsel(raw, 11, 7),
            funct3: bitsel(raw, 14, 12),
            rs1: bitsel(raw, 19, 15),
            rs2: bitsel(raw, 24, 20),
            rs3: bitsel(raw, 31, 27),
            funct7: bitsel(raw, 31, 25),
            funct6: bitsel(raw, 31, 26),
            funct5: bitsel(raw, 31, 27),
            fmt: bitsel(raw, 26, 25),
        }
    }

    #[inline]
    pub fn imm12(&self) -> u32 {
        imm::I.extract(self.raw)
    }

    #[inline]
    pub fn imm_s(&self) -> u32 {
        imm::S.extract(self.raw)
    }

    #[inline]
    pub fn imm_b(&self) -> u32 {
        imm::B.extract(self.raw)
    }

    #[inline]
    pub fn imm_u(&self) -> u32 {
        imm::U.extract(self.raw)
    }

    #[inline]
    pub fn imm_j(&self) -> u32 {
        imm::J.extract(self.raw)
    }

    pub fn shamt32(&self) -> u32 {
        bitsel(self.raw, 24, 20)
    }

    pub fn shamt64(&self) -> u32 {
        bitsel(self.raw, 25, 20)
    }

    /// Rounding mode shares the funct3 slot.
    pub fn rm(&self) -> u32 {
        self.funct3
    }

    pub fn aq(&self) -> bool {
        bit(self.raw, 26)
    }

    pub fn rl(&self) -> bool {
        bit(self.raw, 25)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Rv32Decoder {
    xlen: Xlen,
}

impl Rv32Decoder {
    pub fn new(xlen: Xlen) -> Self {
        Self { xlen }
    }

    /// Render a word already known to fit in 32 bits.
    pub fn render(&self, raw: u32) -> String {
        let fl = Fields::new(raw);
        match RULES.iter().find(|rule| (rule.matches)(&fl)) {
            Some(rule) => fmt_line(&(rule.render)(&fl, self.xlen), rule.class),
            None => {
                trace!(word = raw, opcode = fl.opcode, "no 32-bit rule matched");
                fmt_line(&Body::new(UNKNOWN), "class_UNKNOWN")
            }
        }
    }
}

impl Decoder for Rv32Decoder {
    fn decode(&self, word: u64) -> Result<String, DecodeError> {
        let raw = u32::try_from(word).map_err(|_| {
            debug!(word, "word wider than 32 bits");
            DecodeError::Oversized32(word)
        })?;
        Ok(self.render(raw))
    }
}

pub fn decode32(xlen: Xlen, word: u64) -> String {
    try_decode32(xlen, word).unwrap_or_else(|e| e.to_string())
}

pub fn try_decode32(xlen: Xlen, word: u64) -> Result<String, DecodeError> {
    Rv32Decoder::new(xlen).decode(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fields_of_add() {
        // add a0, a1, a2
        let fl = Fields::new(0x00C5_8533);
        assert_eq!(fl.opcode, 0x33);
        assert_eq!(fl.rd, 10);
        assert_eq!(fl.funct3, 0);
        assert_eq!(fl.rs1, 11);
        assert_eq!(fl.rs2, 12);
        assert_eq!(fl.funct7, 0);
    }

    #[test]
    fn amo_ordering_bits() {
        let fl = Fields::new(0x0600_0000);
        assert!(fl.aq());
        assert!(fl.rl());
        assert_eq!(fl.funct5, 0);
    }

    #[test]
    fn oversized_word_is_rejected() {
        assert_eq!(
            try_decode32(Xlen::Rv64, 0x1_0000_0000),
            Err(DecodeError::Oversized32(0x1_0000_0000))
        );
        assert_eq!(decode32(Xlen::Rv64, 0x1_0000_0000), "[ERROR: 'instr' is > 32 bits: 1_0000_0000]");
    }

    #[test]
    fn unmatched_opcode_falls_back() {
        // opcode 0b1111111 is not owned by any row
        assert_eq!(decode32(Xlen::Rv64, 0x0000_007F), "<UNKNOWN>    (class_UNKNOWN)");
    }
}

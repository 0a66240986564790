//! Immediate layouts.
//!
//! RISC-V scatters immediate bits across the instruction word. Each format
//! is described here as a list of chunks: bits `[hi:lo]` of the word land at
//! bit `to` of the immediate. Assembly ORs the shifted chunks together, so a
//! layout is exactly the "immediate bit placement" table from the ISA manual
//! and can be checked without going through a decoder.
//!
//! The assembled values are raw: no sign extension is applied.

use crate::bits::bitsel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub hi: u32,
    pub lo: u32,
    pub to: u32,
}

const fn c(hi: u32, lo: u32, to: u32) -> Chunk {
    Chunk { hi, lo, to }
}

#[derive(Debug, Clone, Copy)]
pub struct ImmLayout {
    pub name: &'static str,
    pub chunks: &'static [Chunk],
}

impl ImmLayout {
    /// Reassemble the immediate from an instruction word.
    #[inline]
    pub fn extract(&self, word: u32) -> u32 {
        self.chunks
            .iter()
            .fold(0, |acc, ch| acc | (bitsel(word, ch.hi, ch.lo) << ch.to))
    }

    /// Bits of the immediate this layout can set.
    pub fn dest_mask(&self) -> u32 {
        self.chunks.iter().fold(0, |acc, ch| {
            let width = ch.hi - ch.lo + 1;
            acc | (((1u64 << width) - 1) << ch.to) as u32
        })
    }

    /// Bits of the instruction word this layout reads.
    pub fn source_mask(&self) -> u32 {
        self.chunks.iter().fold(0, |acc, ch| {
            let width = ch.hi - ch.lo + 1;
            acc | (((1u64 << width) - 1) << ch.lo) as u32
        })
    }
}

// ---- 32-bit formats

pub const I: ImmLayout = ImmLayout { name: "I", chunks: &[c(31, 20, 0)] };
pub const S: ImmLayout = ImmLayout { name: "S", chunks: &[c(11, 7, 0), c(31, 25, 5)] };
pub const B: ImmLayout = ImmLayout {
    name: "B",
    chunks: &[c(7, 7, 11), c(11, 8, 1), c(30, 25, 5), c(31, 31, 12)],
};
pub const U: ImmLayout = ImmLayout { name: "U", chunks: &[c(31, 12, 12)] };
pub const J: ImmLayout = ImmLayout {
    name: "J",
    chunks: &[c(19, 12, 12), c(20, 20, 11), c(30, 21, 1), c(31, 31, 20)],
};

// ---- compressed formats

/// C.ADDI4SPN nzuimm[9:2]
pub const CIW_ADDI4SPN: ImmLayout = ImmLayout {
    name: "CIW.addi4spn",
    chunks: &[c(5, 5, 3), c(6, 6, 2), c(10, 7, 6), c(12, 11, 4)],
};
/// C.LW / C.SW / C.FLW / C.FSW offset
pub const CL_W: ImmLayout = ImmLayout {
    name: "CL.w",
    chunks: &[c(5, 5, 6), c(6, 6, 2), c(12, 10, 3)],
};
/// C.LD / C.SD / C.FLD / C.FSD offset
pub const CL_D: ImmLayout = ImmLayout { name: "CL.d", chunks: &[c(6, 5, 6), c(12, 10, 3)] };
/// C.LQ / C.SQ offset
pub const CL_Q: ImmLayout = ImmLayout {
    name: "CL.q",
    chunks: &[c(6, 5, 6), c(10, 10, 8), c(12, 11, 4)],
};
/// 6-bit CI immediate: C.ADDI, C.ADDIW, C.LI, C.ANDI and the shift amounts
pub const CI: ImmLayout = ImmLayout { name: "CI", chunks: &[c(6, 2, 0), c(12, 12, 5)] };
pub const CI_ADDI16SP: ImmLayout = ImmLayout {
    name: "CI.addi16sp",
    chunks: &[c(2, 2, 5), c(4, 3, 7), c(5, 5, 6), c(6, 6, 4), c(12, 12, 9)],
};
pub const CI_LUI: ImmLayout = ImmLayout { name: "CI.lui", chunks: &[c(6, 2, 12), c(12, 12, 17)] };
pub const CI_LWSP: ImmLayout = ImmLayout {
    name: "CI.lwsp",
    chunks: &[c(3, 2, 6), c(6, 4, 2), c(12, 12, 5)],
};
pub const CI_LDSP: ImmLayout = ImmLayout {
    name: "CI.ldsp",
    chunks: &[c(4, 2, 6), c(6, 5, 3), c(12, 12, 5)],
};
pub const CI_LQSP: ImmLayout = ImmLayout {
    name: "CI.lqsp",
    chunks: &[c(5, 2, 6), c(6, 6, 4), c(12, 12, 5)],
};
pub const CSS_SWSP: ImmLayout = ImmLayout { name: "CSS.swsp", chunks: &[c(8, 7, 6), c(12, 9, 2)] };
pub const CSS_SDSP: ImmLayout = ImmLayout { name: "CSS.sdsp", chunks: &[c(9, 7, 6), c(12, 10, 3)] };
pub const CSS_SQSP: ImmLayout = ImmLayout { name: "CSS.sqsp", chunks: &[c(10, 7, 6), c(12, 11, 4)] };
/// C.J / C.JAL offset
pub const CJ: ImmLayout = ImmLayout {
    name: "CJ",
    chunks: &[
        c(2, 2, 5),
        c(5, 3, 1),
        c(6, 6, 7),
        c(7, 7, 6),
        c(8, 8, 10),
        c(10, 9, 8),
        c(11, 11, 4),
        c(12, 12, 11),
    ],
};
/// C.BEQZ / C.BNEZ offset
pub const CB: ImmLayout = ImmLayout {
    name: "CB",
    chunks: &[c(2, 2, 5), c(4, 3, 1), c(6, 5, 6), c(11, 10, 3), c(12, 12, 8)],
};

pub const ALL: &[ImmLayout] = &[
    I, S, B, U, J, CIW_ADDI4SPN, CL_W, CL_D, CL_Q, CI, CI_ADDI16SP, CI_LUI, CI_LWSP, CI_LDSP,
    CI_LQSP, CSS_SWSP, CSS_SDSP, CSS_SQSP, CJ, CB,
];

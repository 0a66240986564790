use bitflags::bitflags;

use crate::bits::hex;
use crate::names::{csr_name, fprime_name, freg_name, reg_name, rprime_name};

bitflags! {
    /// Architectural notes appended after an instruction's operands.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Annot: u8 {
        const HINT = 1 << 0;
        const RESERVED = 1 << 1;
        const ILLEGAL_RV32 = 1 << 2;
        const NON_STD_RV32 = 1 << 3;
    }
}

impl Annot {
    fn label(self) -> &'static str {
        if self == Annot::HINT {
            "(HINT)"
        } else if self == Annot::RESERVED {
            "(RESERVED)"
        } else if self == Annot::ILLEGAL_RV32 {
            "(ILLEGAL for RV32)"
        } else if self == Annot::NON_STD_RV32 {
            "(RV32 Non_Std_Extn)"
        } else {
            ""
        }
    }
}

/// Mnemonic and operands of one instruction, before the class tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    pub text: String,
    pub annot: Annot,
}

impl Body {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), annot: Annot::empty() }
    }

    /// Add `flag` when `cond` holds.
    pub fn note(mut self, flag: Annot, cond: bool) -> Self {
        self.annot.set(flag, cond);
        self
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

pub const UNKNOWN: &str = "<UNKNOWN>";

/// `<body>  (NOTE)...    (<tag>)`
pub fn fmt_line(body: &Body, tag: &str) -> String {
    let mut s = body.text.clone();
    for flag in body.annot.iter() {
        s.push_str("  ");
        s.push_str(flag.label());
    }
    s.push_str("    (");
    s.push_str(tag);
    s.push(')');
    s
}

// Operand renderers, short names so the decoders read like the encodings.

pub fn x(index: u32) -> String {
    reg_name(index)
}

pub fn xp(index: u32) -> String {
    rprime_name(index)
}

pub fn f(index: u32) -> String {
    freg_name(index)
}

pub fn fp(index: u32) -> String {
    fprime_name(index)
}

pub fn imm(v: u32) -> String {
    hex(v as u64)
}

pub fn csr(addr: u32) -> String {
    csr_name(addr)
}

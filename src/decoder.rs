use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bits::{bitsel, hex};
use crate::isa::rv32::Rv32Decoder;
use crate::isa::rvc::RvcDecoder;

/// Integer register width of the target; selects between encodings that
/// mean different things on RV32, RV64 and RV128.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Xlen {
    Rv32,
    #[default]
    Rv64,
    Rv128,
}

impl Xlen {
    pub fn bits(self) -> u32 {
        match self {
            Xlen::Rv32 => 32,
            Xlen::Rv64 => 64,
            Xlen::Rv128 => 128,
        }
    }

    #[inline]
    pub fn is_rv32(self) -> bool {
        self == Xlen::Rv32
    }
}

impl TryFrom<u32> for Xlen {
    type Error = DecodeError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            32 => Ok(Xlen::Rv32),
            64 => Ok(Xlen::Rv64),
            128 => Ok(Xlen::Rv128),
            other => Err(DecodeError::UnsupportedXlen(other)),
        }
    }
}

impl From<Xlen> for u32 {
    fn from(x: Xlen) -> u32 {
        x.bits()
    }
}

impl FromStr for Xlen {
    type Err = DecodeError;

    /// Accepts `32`, `64`, `128`, optionally prefixed by `rv`/`RV`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let digits = t
            .strip_prefix("rv")
            .or_else(|| t.strip_prefix("RV"))
            .unwrap_or(t);
        let bits = digits.parse::<u32>().map_err(|_| DecodeError::InvalidXlen(s.to_string()))?;
        Xlen::try_from(bits)
    }
}

impl fmt::Display for Xlen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RV{}", self.bits())
    }
}

/// Encoded length of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Width {
    W16 = 2,
    W32 = 4,
}

impl Width {
    /// Bits `[1:0] == 0b11` mark a 32-bit instruction; anything else is compressed.
    #[inline]
    pub fn of(word: u64) -> Width {
        if bitsel(word, 1, 0) == 0b11 {
            Width::W32
        } else {
            Width::W16
        }
    }

    pub fn bytes(self) -> u32 {
        self as u32
    }
}

/// Malformed input to the decoders. The `Display` text of the first three
/// variants is the marker string the string-returning API hands back.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("[ERROR: 'instr' is negative: {}]", neg_hex_of(.0))]
    NegativeWord(i64),
    #[error("[ERROR: 'instr' is > 32 bits: {}]", hex_of(.0))]
    Oversized32(u64),
    #[error("[ERROR: 'instr' is > 16 bits: {}]", hex_of(.0))]
    Oversized16(u64),
    #[error("unsupported xlen {0} (expected 32, 64 or 128)")]
    UnsupportedXlen(u32),
    #[error("invalid xlen {0:?} (expected 32, 64 or 128)")]
    InvalidXlen(String),
}

fn hex_of(word: &u64) -> String {
    hex(*word)
}

fn neg_hex_of(word: &i64) -> String {
    format!("-{}", hex(word.unsigned_abs()))
}

pub trait Decoder {
    /// Render one instruction word.
    fn decode(&self, word: u64) -> Result<String, DecodeError>;
}

/// Routes a word to the 32-bit or the compressed decoder by its low two bits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Disassembler {
    xlen: Xlen,
}

impl Disassembler {
    pub fn new(xlen: Xlen) -> Self {
        Self { xlen }
    }

    pub fn xlen(&self) -> Xlen {
        self.xlen
    }

    /// Entry point for callers holding signed words (e.g. parsed from text).
    pub fn disassemble(&self, word: i64) -> Result<String, DecodeError> {
        if word < 0 {
            debug!(word, "negative instruction word");
            return Err(DecodeError::NegativeWord(word));
        }
        self.decode(word as u64)
    }
}

impl Decoder for Disassembler {
    fn decode(&self, word: u64) -> Result<String, DecodeError> {
        match Width::of(word) {
            Width::W32 => Rv32Decoder::new(self.xlen).decode(word),
            Width::W16 => RvcDecoder::new(self.xlen).decode(word),
        }
    }
}

/// Disassemble one instruction, returning a marker string for a negative
/// or oversized word.
pub fn disassemble(xlen: Xlen, word: i64) -> String {
    try_disassemble(xlen, word).unwrap_or_else(|e| e.to_string())
}

pub fn try_disassemble(xlen: Xlen, word: i64) -> Result<String, DecodeError> {
    Disassembler::new(xlen).disassemble(word)
}

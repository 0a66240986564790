use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;
use tracing::warn;

use rv_disasm::{disassemble, Width, Xlen};

use crate::model::{fetch, read_u8, Image};

/// One output line. `word`/`width` are absent for an out-of-image fetch and
/// `addr` is absent for words given directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addr: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bytes: Vec<u8>,
    pub text: String,
}

pub fn parse_u32(s: &str) -> Result<u32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u32::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u32>()?)
    }
}

/// Parse an instruction word in `radix` (16 or 10). `_` separators and, for
/// hex, a `0x` prefix are accepted; a leading `-` is kept so negative words
/// reach the dispatcher.
pub fn parse_word(s: &str, radix: u32) -> Result<i64> {
    let cleaned: String = s.trim().chars().filter(|&c| c != '_').collect();
    let (neg, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };
    let digits = if radix == 16 {
        digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")).unwrap_or(digits)
    } else {
        digits
    };
    anyhow::ensure!(!digits.is_empty(), "empty instruction word {s:?}");
    let v = i64::from_str_radix(digits, radix)
        .with_context(|| format!("invalid instruction word {s:?}"))?;
    Ok(if neg { -v } else { v })
}

/// Disassemble free-standing words. Blank entries and `#` comments are
/// skipped; a token that does not parse becomes an error record in place.
pub fn words_to_records<S: AsRef<str>>(xlen: Xlen, words: &[S], radix: u32) -> Vec<Record> {
    let mut out = Vec::new();
    for w in words {
        let w = w.as_ref().trim();
        if w.is_empty() || w.starts_with('#') {
            continue;
        }
        let word = match parse_word(w, radix) {
            Ok(word) => word,
            Err(e) => {
                warn!(token = w, error = %e, "skipping unparsable word");
                out.push(Record {
                    addr: None,
                    word: None,
                    width: None,
                    bytes: Vec::new(),
                    text: format!("[ERROR: invalid word {w:?}]"),
                });
                continue;
            }
        };
        let width = (word >= 0).then(|| Width::of(word as u64).bytes());
        out.push(Record { addr: None, word: Some(word), width, bytes: Vec::new(), text: disassemble(xlen, word) });
    }
    out
}

/// Linear sweep of `[start, end)`; stops after the first out-of-image fetch.
pub fn sweep(img: &Image, start: u32, end: u32, xlen: Xlen, show_bytes: bool) -> Vec<Record> {
    let mut out = Vec::new();
    let mut pc = start;
    while pc < end {
        let Some((raw, width)) = fetch(img, pc) else {
            out.push(Record { addr: Some(pc), word: None, width: None, bytes: Vec::new(), text: "<oob>".into() });
            break;
        };
        let bytes = if show_bytes {
            (0..width.bytes()).map(|i| read_u8(img, pc + i).unwrap_or(0)).collect()
        } else {
            Vec::new()
        };
        out.push(Record {
            addr: Some(pc),
            word: Some(raw as i64),
            width: Some(width.bytes()),
            bytes,
            text: disassemble(xlen, raw as i64),
        });
        pc = pc.wrapping_add(width.bytes());
        if pc == 0 {
            break;
        }
    }
    out
}

pub fn render_text(records: &[Record]) -> String {
    let mut buf = String::new();
    for r in records {
        if let Some(pc) = r.addr {
            let _ = write!(buf, "{pc:#010x}: ");
        }
        if !r.bytes.is_empty() {
            for b in &r.bytes {
                let _ = write!(buf, "{b:02x} ");
            }
            buf.push_str("  ");
        }
        let _ = writeln!(buf, "{}", r.text);
    }
    buf
}

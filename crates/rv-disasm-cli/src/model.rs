use anyhow::Result;
use std::path::Path;

use rv_disasm::Width;

#[derive(Debug, Clone)]
pub struct Segment {
    pub base: u32,
    pub bytes: Vec<u8>,
}

impl Segment {
    fn contains(&self, addr: u32) -> bool {
        let end = self.base as u64 + self.bytes.len() as u64;
        addr >= self.base && (addr as u64) < end
    }
}

#[derive(Debug, Clone)]
pub struct Image {
    pub segments: Vec<Segment>,
}

pub fn load_raw_bin(path: &Path, base: u32, skip: usize, len: Option<usize>) -> Result<Image> {
    let file = std::fs::read(path)?;
    anyhow::ensure!(skip <= file.len(), "--skip exceeds file size");
    let mut payload = &file[skip..];
    if let Some(lim) = len {
        anyhow::ensure!(lim <= payload.len(), "--len exceeds remaining file size after skip");
        payload = &payload[..lim];
    }
    let seg = Segment { base, bytes: payload.to_vec() };
    Ok(Image { segments: vec![seg] })
}

pub fn read_u8(img: &Image, addr: u32) -> Option<u8> {
    img.segments
        .iter()
        .find(|s| s.contains(addr))
        .map(|s| s.bytes[(addr - s.base) as usize])
}

pub fn read_u16(img: &Image, addr: u32) -> Option<u16> {
    let b0 = read_u8(img, addr)?;
    let b1 = read_u8(img, addr.wrapping_add(1))?;
    Some(u16::from_le_bytes([b0, b1]))
}

/// Fetch one instruction at `addr`: the low parcel decides whether a second
/// 16-bit parcel follows. `None` if any needed byte is outside the image.
pub fn fetch(img: &Image, addr: u32) -> Option<(u32, Width)> {
    let lo = read_u16(img, addr)? as u32;
    match Width::of(lo as u64) {
        Width::W16 => Some((lo, Width::W16)),
        Width::W32 => {
            let hi = read_u16(img, addr.wrapping_add(2))? as u32;
            Some((hi << 16 | lo, Width::W32))
        }
    }
}

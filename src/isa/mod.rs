pub mod rv32; // base 32-bit encodings
pub mod rvc; // compressed 16-bit encodings

pub mod bits;
pub mod decoder;
pub mod disasm;
pub mod imm;
pub mod instructions;
pub mod isa;
pub mod names;

pub use bits::bitsel;
pub use decoder::{disassemble, try_disassemble, DecodeError, Decoder, Disassembler, Width, Xlen};
pub use isa::rv32::{decode32, try_decode32, Rv32Decoder};
pub use isa::rvc::{decode16, try_decode16, RvcDecoder};
pub use names::{csr_name, freg_name, reg_name, rprime_name};

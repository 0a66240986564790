pub mod listing;
pub mod model;

pub use listing::{parse_u32, parse_word, render_text, sweep, words_to_records, Record};
pub use model::{fetch, load_raw_bin, read_u16, read_u8, Image, Segment};

mod input;
mod payload;

pub use input::{decode_stdin_bytes, read_stdin_text};
pub use payload::parse_payload;

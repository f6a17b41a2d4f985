mod load;
mod types;

pub use load::load_file;
pub use types::*;

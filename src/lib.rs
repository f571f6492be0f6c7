mod chunks;
mod error;
mod hexdump;
mod lister;

pub use error::{ListError, ReadPhase};
pub use hexdump::HexDumper;
pub use lister::{list_chunks, list_png};

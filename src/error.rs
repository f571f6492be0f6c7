use std::fmt;
use std::io;

use thiserror::Error;

/// The read the stream was performing when it came up short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadPhase {
    Signature,
    ChunkHeader,
    ChunkData,
    ChunkCrc,
}

impl fmt::Display for ReadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReadPhase::Signature => "the PNG signature",
            ReadPhase::ChunkHeader => "a PNG chunk header",
            ReadPhase::ChunkData => "PNG chunk data",
            ReadPhase::ChunkCrc => "the PNG chunk crc",
        })
    }
}

#[derive(Debug, Error)]
pub enum ListError {
    #[error("error reading {0}")]
    TruncatedRead(ReadPhase),
    #[error("invalid PNG chunk length: {0}")]
    InvalidChunkLength(u32),
    #[error("chunk {chunk} data too short for {field}: need {need} bytes, have {have}")]
    TruncatedPayload {
        chunk: String,
        field: &'static str,
        need: usize,
        have: usize,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

use std::io::Write;

use log::debug;
use nom::bytes::complete::take;
use nom::IResult;

use crate::chunks::render_payload;
use crate::error::{ListError, ReadPhase};
use crate::hexdump::HexDumper;

const IEND: [u8; 4] = *b"IEND";

/// Chunk lengths with the high bit set are rejected outright.
const LENGTH_LIMIT: u32 = 0x8000_0000;

struct ChunkHeader {
    length_raw: [u8; 4],
    type_raw: [u8; 4],
}

impl ChunkHeader {
    fn length(&self) -> u32 {
        u32::from_be_bytes(self.length_raw)
    }
}

/// Takes exactly `want` bytes off the front of `input`, or fails with the
/// truncation error for `phase`.
fn read_exact(input: &[u8], want: usize, phase: ReadPhase) -> Result<(&[u8], &[u8]), ListError> {
    let taken: IResult<&[u8], &[u8]> = take(want)(input);
    taken.map_err(|_| ListError::TruncatedRead(phase))
}

fn chunk_header(input: &[u8]) -> Result<(&[u8], ChunkHeader), ListError> {
    let (rest, raw) = read_exact(input, 8, ReadPhase::ChunkHeader)?;
    let header = ChunkHeader {
        length_raw: raw[0..4].try_into().expect("4 bytes should have been taken"),
        type_raw: raw[4..8].try_into().expect("4 bytes should have been taken"),
    };
    Ok((rest, header))
}

/// Lists a whole PNG byte stream: the 8-byte file signature, then every chunk
/// through IEND. The signature bytes are displayed as found, never checked
/// against the canonical magic. Returns whatever follows the IEND chunk.
pub fn list_png<'a, W: Write>(
    input: &'a [u8],
    dumper: &HexDumper,
    out: &mut W,
) -> Result<&'a [u8], ListError> {
    let (rest, signature) = read_exact(input, 8, ReadPhase::Signature)?;
    writeln!(out, "PNG signature:")?;
    dumper.dump(out, signature)?;
    writeln!(out)?;
    list_chunks(rest, dumper, out)
}

/// Lists a chunk stream until its IEND chunk. Sections are written as soon as
/// the bytes backing them have been read, so a stream that fails mid-chunk
/// keeps everything printed up to the failing read.
pub fn list_chunks<'a, W: Write>(
    mut input: &'a [u8],
    dumper: &HexDumper,
    out: &mut W,
) -> Result<&'a [u8], ListError> {
    loop {
        let (rest, header) = chunk_header(input)?;
        writeln!(out, "chunk length:")?;
        dumper.dump(out, &header.length_raw)?;
        writeln!(out, "chunk type:")?;
        dumper.dump(out, &header.type_raw)?;

        let length = header.length();
        if length >= LENGTH_LIMIT {
            return Err(ListError::InvalidChunkLength(length));
        }
        debug!(
            "chunk {} with {length} data bytes",
            String::from_utf8_lossy(&header.type_raw)
        );

        let (rest, payload) = read_exact(rest, length as usize, ReadPhase::ChunkData)?;
        render_payload(out, dumper, header.type_raw, payload)?;

        let (rest, crc) = read_exact(rest, 4, ReadPhase::ChunkCrc)?;
        writeln!(out, "chunk crc:")?;
        dumper.dump(out, crc)?;
        writeln!(out)?;

        input = rest;
        if header.type_raw == IEND {
            debug!("IEND reached, {} trailing bytes left unread", input.len());
            return Ok(input);
        }
    }
}

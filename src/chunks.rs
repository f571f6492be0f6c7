use std::io::Write;

use crate::error::ListError;
use crate::hexdump::HexDumper;

struct Field {
    label: &'static str,
    offset: usize,
    width: usize,
}

struct ChunkLayout {
    tag: [u8; 4],
    fields: &'static [Field],
}

/// Field breakdowns for the chunk types this tool interprets. Offsets index
/// into the chunk payload. Everything else gets a raw dump.
const KNOWN_LAYOUTS: &[ChunkLayout] = &[
    ChunkLayout {
        tag: *b"IHDR",
        fields: &[
            Field { label: "width", offset: 0, width: 4 },
            Field { label: "height", offset: 4, width: 4 },
            Field { label: "bit depth", offset: 8, width: 1 },
            Field { label: "color type", offset: 9, width: 1 },
            Field { label: "compression method", offset: 10, width: 1 },
            Field { label: "filter method", offset: 11, width: 1 },
            Field { label: "interlace method", offset: 12, width: 1 },
        ],
    },
    ChunkLayout {
        tag: *b"pHYs",
        fields: &[
            Field { label: "pixels per unit, X axis", offset: 0, width: 4 },
            Field { label: "pixels per unit, Y axis", offset: 4, width: 4 },
            Field { label: "unit specifier", offset: 8, width: 1 },
        ],
    },
];

fn layout_for(tag: [u8; 4]) -> Option<&'static ChunkLayout> {
    KNOWN_LAYOUTS.iter().find(|layout| layout.tag == tag)
}

/// Prints the `chunk data:` section for one chunk: a labelled dump per field
/// for known chunk types, one undifferentiated dump for everything else.
pub(crate) fn render_payload<W: Write>(
    out: &mut W,
    dumper: &HexDumper,
    tag: [u8; 4],
    payload: &[u8],
) -> Result<(), ListError> {
    writeln!(out, "chunk data:")?;
    match layout_for(tag) {
        Some(layout) => {
            for field in layout.fields {
                let end = field.offset + field.width;
                let span =
                    payload
                        .get(field.offset..end)
                        .ok_or_else(|| ListError::TruncatedPayload {
                            chunk: String::from_utf8_lossy(&tag).into_owned(),
                            field: field.label,
                            need: end,
                            have: payload.len(),
                        })?;
                write!(out, "  {}\n  ", field.label)?;
                dumper.dump(out, span)?;
            }
        }
        None => dumper.dump(out, payload)?,
    }
    Ok(())
}

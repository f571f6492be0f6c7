use std::io::{self, Write};

/// Renders byte buffers as rows of uppercase hex octets, sixteen to a row in two
/// groups of eight, with an optional trailing ASCII column. Short final rows are
/// padded so the hex region of every row comes out the same width.
pub struct HexDumper {
    show_ascii: bool,
}

impl HexDumper {
    pub fn new(show_ascii: bool) -> Self {
        Self { show_ascii }
    }

    pub fn dump<W: Write>(&self, out: &mut W, bytes: &[u8]) -> io::Result<()> {
        let mut ascii_row = [0u8; 16];
        for (i, byte) in bytes.iter().enumerate() {
            write!(out, "{byte:02X} ")?;
            ascii_row[i % 16] = match *byte {
                0x20..=0x7E => *byte,
                _ => b'.',
            };
            // Gap between the two half-rows, and before closing a short final row.
            if i % 8 == 7 || i + 1 == bytes.len() {
                write!(out, " ")?;
            }
            if i % 16 == 15 {
                self.finish_row(out, &ascii_row)?;
            } else if i + 1 == bytes.len() {
                let used = i % 16 + 1;
                // A row that never crossed the half-row boundary is still owed
                // that gap space before the slot padding.
                if used <= 8 {
                    write!(out, " ")?;
                }
                for _ in used..16 {
                    write!(out, "   ")?;
                }
                self.finish_row(out, &ascii_row[..used])?;
            }
        }
        Ok(())
    }

    fn finish_row<W: Write>(&self, out: &mut W, ascii_row: &[u8]) -> io::Result<()> {
        if self.show_ascii {
            out.write_all(ascii_row)?;
        }
        writeln!(out)
    }
}

//! Plain-text ("P3") portable pixmap output.

use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::image_utils::PixelBuffer;

pub const MAX_CHANNEL_VALUE: u8 = 255;

/// Writes the header, then one line per row with each `R G B` triple
/// followed by two spaces.
pub fn write_ppm<W: Write>(buffer: &PixelBuffer, mut writer: W) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", buffer.resolution(), buffer.resolution())?;
    writeln!(writer, "{}", MAX_CHANNEL_VALUE)?;
    for row in buffer.rows() {
        for pixel in row {
            write!(writer, "{} {} {}  ", pixel[0], pixel[1], pixel[2])?;
        }
        writeln!(writer)?;
    }
    writer.flush()
}

pub fn write_ppm_file(buffer: &PixelBuffer, path: &Path) -> io::Result<()> {
    let file = std::fs::File::create(path)?;
    write_ppm(buffer, BufWriter::new(file))
}

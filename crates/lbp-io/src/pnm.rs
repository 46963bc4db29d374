//! PNM (Portable Any Map) format support
//!
//! Reads PGM (P2 ASCII, P5 binary) and PPM (P3 ASCII, P6 binary) with a
//! maxval of at most 255, and writes gray images as binary PGM (P5).
//! Samples read from files with a maxval below 255 are rescaled to the full
//! 8-bit range.

use crate::{IoError, IoResult};
use lbp_core::{GrayImage, Image};
use std::io::{Read, Write};

/// Cursor over the raw bytes of a PNM file.
struct Header<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Header<'a> {
    fn new(data: &'a [u8]) -> Self {
        Header { data, pos: 0 }
    }

    /// Skip whitespace and `#` comments.
    fn skip_blank(&mut self) {
        while let Some(&b) = self.data.get(self.pos) {
            if b == b'#' {
                while let Some(&c) = self.data.get(self.pos) {
                    self.pos += 1;
                    if c == b'\n' || c == b'\r' {
                        break;
                    }
                }
            } else if b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn token(&mut self) -> IoResult<&'a [u8]> {
        self.skip_blank();
        let start = self.pos;
        while self
            .data
            .get(self.pos)
            .is_some_and(|b| !b.is_ascii_whitespace() && *b != b'#')
        {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(IoError::InvalidData("unexpected end of PNM data".to_string()));
        }
        Ok(&self.data[start..self.pos])
    }

    fn number(&mut self) -> IoResult<u32> {
        let token = self.token()?;
        std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                IoError::InvalidData(format!(
                    "expected a number in PNM header, got {:?}",
                    String::from_utf8_lossy(token)
                ))
            })
    }

    /// Binary raster start: exactly one whitespace byte after maxval.
    fn raster(&self) -> IoResult<&'a [u8]> {
        match self.data.get(self.pos) {
            Some(b) if b.is_ascii_whitespace() => Ok(&self.data[self.pos + 1..]),
            _ => Err(IoError::InvalidData(
                "missing whitespace before PNM raster".to_string(),
            )),
        }
    }
}

/// Read a PNM image (P2/P3/P5/P6) from a reader.
///
/// # Returns
/// A 1-channel image for PGM or a 3-channel image for PPM.
pub fn read_pnm<R: Read>(mut reader: R) -> IoResult<Image> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let mut header = Header::new(&bytes);

    let (channels, binary) = match header.token()? {
        b"P2" => (1u32, false),
        b"P3" => (3, false),
        b"P5" => (1, true),
        b"P6" => (3, true),
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM type: {}",
                String::from_utf8_lossy(other)
            )));
        }
    };
    let width = header.number()?;
    let height = header.number()?;
    let maxval = header.number()?;
    if maxval == 0 || maxval > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNM maxval: {}",
            maxval
        )));
    }

    let count = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels as usize))
        .ok_or_else(|| {
            IoError::InvalidData(format!("PNM dimensions too large: {}x{}", width, height))
        })?;
    let mut samples = if binary {
        let raster = header.raster()?;
        if raster.len() < count {
            return Err(IoError::InvalidData(format!(
                "PNM raster too short: expected {} bytes, got {}",
                count,
                raster.len()
            )));
        }
        raster[..count].to_vec()
    } else {
        // every ASCII sample takes at least two bytes
        let mut samples = Vec::with_capacity(count.min(bytes.len() / 2));
        for _ in 0..count {
            let value = header.number()?;
            if value > maxval {
                return Err(IoError::InvalidData(format!(
                    "PNM sample {} exceeds maxval {}",
                    value, maxval
                )));
            }
            samples.push(value as u8);
        }
        samples
    };

    if maxval != 255 {
        for sample in &mut samples {
            *sample = ((*sample as u32 * 255 + maxval / 2) / maxval).min(255) as u8;
        }
    }

    Ok(Image::from_raw(width, height, channels, samples)?)
}

/// Write a gray image as binary PGM (P5).
pub fn write_pnm<W: Write>(gray: &GrayImage, mut writer: W) -> IoResult<()> {
    write!(writer, "P5\n{} {}\n255\n", gray.width(), gray.height())?;
    writer.write_all(gray.data())?;
    writer.flush()?;
    Ok(())
}

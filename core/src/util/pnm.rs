//! Reading and writing NetPBM (PNM) images.
//!
//! PNM is a family of extremely simple image formats, each consisting of a
//! textual header followed by either text or binary pixel data. It is the
//! easiest way to get a framebuffer onto disk without any dependencies.
//!
//! Type  | Magic | Pixel format     | Read | Write
//! ----- | ------| ---------------- | ---- | -----
//! PGM   | P5    | 8 bpp grayscale  | yes  | no
//! PPM   | P3    | 3x8 bpp RGB text | yes  | no
//! PPM   | P6    | 3x8 bpp RGB      | yes  | yes
//!
//! Images with a maximum sample value other than 255 are rejected.

use alloc::{string::String, vec::Vec};
use core::fmt::{self, Display, Formatter};
use core::num::{IntErrorKind, ParseIntError};
#[cfg(feature = "std")]
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use Error::*;
use Format::*;

use crate::math::color::{Color3, rgb};
use crate::util::buf::Buf2;

/// The header of a PNM image.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Header {
    format: Format,
    width: usize,
    height: usize,
    max: u16,
}

/// The supported PNM sub-formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Format {
    /// `P3`: ASCII decimal RGB triplets.
    TextPixmap,
    /// `P5`: one gray byte per pixel.
    BinaryGraymap,
    /// `P6`: three RGB bytes per pixel.
    BinaryPixmap,
}

/// Error during decoding a PNM image.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// The magic number is not one of P3, P5, or P6.
    Unsupported([u8; 2]),
    /// The input ended before the header or all the pixels were read.
    UnexpectedEnd,
    /// A header field or text pixel value is not a valid number.
    InvalidNumber,
    /// The maximum sample value is not 255; only 8-bit samples are read.
    UnsupportedMaxval(u16),
    /// The image dimensions overflow `usize` when multiplied.
    TooLarge { width: usize, height: usize },
}

/// Result of decoding a PNM image.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Unsupported([a, b]) => write!(
                f,
                "unsupported pnm format {:?}",
                [*a as char, *b as char]
            ),
            UnexpectedEnd => f.write_str("unexpected end of pnm data"),
            InvalidNumber => f.write_str("invalid number in pnm header"),
            UnsupportedMaxval(max) => {
                write!(f, "unsupported pnm maximum value {max}, expected 255")
            }
            TooLarge { width, height } => {
                write!(f, "pnm dimensions {width}×{height} are too large")
            }
        }
    }
}

impl From<ParseIntError> for Error {
    fn from(e: ParseIntError) -> Self {
        if *e.kind() == IntErrorKind::Empty {
            UnexpectedEnd
        } else {
            InvalidNumber
        }
    }
}

impl Format {
    fn magic(self) -> &'static str {
        match self {
            TextPixmap => "P3",
            BinaryGraymap => "P5",
            BinaryPixmap => "P6",
        }
    }
}

impl TryFrom<[u8; 2]> for Format {
    type Error = Error;
    fn try_from(magic: [u8; 2]) -> Result<Self> {
        match &magic {
            b"P3" => Ok(TextPixmap),
            b"P5" => Ok(BinaryGraymap),
            b"P6" => Ok(BinaryPixmap),
            _ => Err(Unsupported(magic)),
        }
    }
}

impl Header {
    /// Attempts to parse a PNM header from `src`, consuming exactly one
    /// whitespace byte after the last field.
    fn parse(src: &mut impl Iterator<Item = u8>) -> Result<Self> {
        let magic = [
            src.next().ok_or(UnexpectedEnd)?,
            src.next().ok_or(UnexpectedEnd)?,
        ];
        let format = magic.try_into()?;
        let width = parse_num(&mut *src)?;
        let height = parse_num(&mut *src)?;
        let max = parse_num(&mut *src)?;
        Ok(Self { format, width, height, max })
    }
}

impl Display for Header {
    /// Formats `self` as a valid PNM header, without a trailing newline.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self { format, width, height, max } = self;
        write!(f, "{} {width} {height} {max}", format.magic())
    }
}

/// Decodes a PNM image from a sequence of bytes.
///
/// Currently supported formats are P3, P5, and P6, with a maximum sample
/// value of 255.
///
/// # Errors
/// Returns [`pnm::Error`][Error] in case of an invalid, unsupported, or
/// truncated image.
pub fn read_pnm(src: impl IntoIterator<Item = u8>) -> Result<Buf2<Color3>> {
    let mut it = src.into_iter();
    let Header { format, width, height, max } = Header::parse(&mut it)?;
    if max != 255 {
        return Err(UnsupportedMaxval(max));
    }
    let (count, n_bytes) = width
        .checked_mul(height)
        .and_then(|n| Some((n, n.checked_mul(3)?)))
        .ok_or(TooLarge { width, height })?;

    let data: Vec<Color3> = match format {
        BinaryPixmap => {
            let bytes: Vec<u8> = it.take(n_bytes).collect();
            bytes
                .chunks_exact(3)
                .map(|c| rgb(c[0], c[1], c[2]))
                .collect()
        }
        BinaryGraymap => it.take(count).map(|c| rgb(c, c, c)).collect(),
        TextPixmap => (0..count)
            .map(|_| -> Result<Color3> {
                let mut ch = || parse_num::<u8>(&mut it);
                Ok(rgb(ch()?, ch()?, ch()?))
            })
            .collect::<Result<_>>()?,
    };

    if data.len() < count {
        Err(UnexpectedEnd)
    } else {
        Ok(Buf2::new_from((width, height), data))
    }
}

/// Saves `buf` to the file at `path` as a binary (P6) PPM image,
/// replacing the file if it exists.
///
/// # Errors
/// If the file cannot be created or written to.
#[cfg(feature = "std")]
pub fn save_ppm(path: impl AsRef<Path>, buf: &Buf2<Color3>) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_ppm(&mut out, buf)?;
    out.flush()
}

/// Encodes `buf` as a binary (P6) PPM image into `out`.
///
/// # Errors
/// If writing to `out` fails.
#[cfg(feature = "std")]
pub fn write_ppm(mut out: impl Write, buf: &Buf2<Color3>) -> io::Result<()> {
    let (width, height) = buf.dims();
    let hdr = Header { format: BinaryPixmap, width, height, max: 255 };
    writeln!(out, "{hdr}")?;
    buf.data()
        .iter()
        .try_for_each(|c| out.write_all(&c.0))
}

/// Parses the next whitespace-delimited number in `src`, skipping any
/// leading whitespace and `#` comments.
fn parse_num<T>(src: impl IntoIterator<Item = u8>) -> Result<T>
where
    T: core::str::FromStr<Err = ParseIntError>,
{
    let mut in_comment = false;
    let mut whitespace_or_comment = |b: u8| {
        match b {
            b'#' => in_comment = true,
            b'\n' => in_comment = false,
            _ => {}
        }
        in_comment || b == b'#' || b.is_ascii_whitespace()
    };
    let str: String = src
        .into_iter()
        .skip_while(|&b| whitespace_or_comment(b))
        .take_while(|b| !b.is_ascii_whitespace())
        .map(char::from)
        .collect();

    Ok(str.parse()?)
}

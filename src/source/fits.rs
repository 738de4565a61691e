//! Minimal reader for the primary HDU of FITS image files.
//!
//! Supports 2D images and 3D cubes with any standard `BITPIX`. Extensions,
//! `BLANK` handling for integer data and world coordinates are ignored.

use std::path::Path;

use crate::cube::model::Cube;
use crate::foundation::core::Dims;
use crate::foundation::error::{BlendError, BlendResult};
use crate::source::loader::{CubeLoader, read_source};

const BLOCK: usize = 2880;
const CARD: usize = 80;

/// Loads the primary HDU of a FITS file as a cube.
///
/// `NAXIS1` is the width, `NAXIS2` the height and `NAXIS3` the slice axis.
#[derive(Clone, Copy, Debug, Default)]
pub struct FitsLoader;

impl CubeLoader for FitsLoader {
    #[tracing::instrument(skip(self))]
    fn load(&self, path: &Path) -> BlendResult<Cube> {
        let bytes = read_source(path)?;
        parse_fits(&bytes)
            .map_err(|e| BlendError::load(format!("FITS file '{}': {e}", path.display())))
    }
}

#[derive(Debug, Default)]
struct Header {
    bitpix: Option<i64>,
    naxis: Vec<usize>,
    bscale: f64,
    bzero: f64,
    len: usize,
}

/// Decode an in-memory FITS file.
///
/// Errors are returned as plain messages; [`FitsLoader`] wraps them into
/// [`BlendError::Load`].
pub fn parse_fits(bytes: &[u8]) -> Result<Cube, String> {
    let header = parse_header(bytes)?;
    let bitpix = header.bitpix.ok_or("missing BITPIX")?;

    let (width, height, slices) = match header.naxis.as_slice() {
        [w, h] => (*w, *h, 1),
        [w, h, s] => (*w, *h, *s),
        other => return Err(format!("expected NAXIS 2 or 3, got {}", other.len())),
    };

    let value_bytes = bytes_per_value(bitpix)?;
    let count = width
        .checked_mul(height)
        .and_then(|v| v.checked_mul(slices))
        .ok_or("data size overflow")?;
    let data_len = count.checked_mul(value_bytes).ok_or("data size overflow")?;
    let end = header
        .len
        .checked_add(data_len)
        .ok_or("data size overflow")?;
    let raw = bytes
        .get(header.len..end)
        .ok_or_else(|| format!("truncated data: need {data_len} bytes after header"))?;

    let mut data = Vec::with_capacity(count);
    for chunk in raw.chunks_exact(value_bytes) {
        let v = decode_value(bitpix, chunk);
        data.push(header.bzero + header.bscale * v);
    }
    tracing::debug!(bitpix, width, height, slices, "decoded FITS primary HDU");

    Cube::new(slices, Dims::new(width, height), data).map_err(|e| e.to_string())
}

fn parse_header(bytes: &[u8]) -> Result<Header, String> {
    let mut header = Header {
        bscale: 1.0,
        bzero: 0.0,
        ..Header::default()
    };
    let mut naxis_count: Option<usize> = None;

    for (idx, card) in bytes.chunks(CARD).enumerate() {
        if card.len() < CARD {
            break;
        }
        let card = std::str::from_utf8(card)
            .ok()
            .filter(|c| c.is_ascii())
            .ok_or("header card is not ASCII")?;
        let keyword = card[..8].trim_end();

        if idx == 0 && keyword != "SIMPLE" {
            return Err("not a FITS file (first card is not SIMPLE)".to_owned());
        }
        if keyword == "END" {
            let used = (idx + 1) * CARD;
            header.len = used.div_ceil(BLOCK) * BLOCK;
            if let Some(n) = naxis_count {
                if header.naxis.len() != n || header.naxis.contains(&0) {
                    return Err(format!("incomplete axis sizes for NAXIS = {n}"));
                }
            } else {
                return Err("missing NAXIS".to_owned());
            }
            return Ok(header);
        }
        let Some(value) = card_value(card) else {
            continue;
        };

        match keyword {
            "BITPIX" => header.bitpix = Some(parse_int(keyword, value)?),
            "NAXIS" => naxis_count = Some(parse_int(keyword, value)?),
            "BSCALE" => header.bscale = parse_real(keyword, value)?,
            "BZERO" => header.bzero = parse_real(keyword, value)?,
            k if k.starts_with("NAXIS") => {
                let axis: usize = k[5..]
                    .parse()
                    .map_err(|_| format!("bad axis keyword {k}"))?;
                if axis != header.naxis.len() + 1 {
                    return Err(format!("{k} out of order"));
                }
                header.naxis.push(parse_int(k, value)?);
            }
            _ => {}
        }
    }
    Err("header has no END card".to_owned())
}

/// Value field of a `KEYWORD = value / comment` card.
fn card_value(card: &str) -> Option<&str> {
    if card.get(8..10) != Some("= ") {
        return None;
    }
    let rest = &card[10..];
    let value = match rest.find('/') {
        Some(i) if !rest.trim_start().starts_with('\'') => &rest[..i],
        _ => rest,
    };
    Some(value.trim())
}

fn parse_int<T: std::str::FromStr>(keyword: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("{keyword}: '{value}' is not an integer"))
}

fn parse_real(keyword: &str, value: &str) -> Result<f64, String> {
    value
        .replace(['D', 'd'], "E")
        .parse()
        .map_err(|_| format!("{keyword}: '{value}' is not a number"))
}

fn bytes_per_value(bitpix: i64) -> Result<usize, String> {
    match bitpix {
        8 => Ok(1),
        16 => Ok(2),
        32 | -32 => Ok(4),
        64 | -64 => Ok(8),
        other => Err(format!("unsupported BITPIX {other}")),
    }
}

fn decode_value(bitpix: i64, b: &[u8]) -> f64 {
    match bitpix {
        8 => f64::from(b[0]),
        16 => f64::from(i16::from_be_bytes([b[0], b[1]])),
        32 => f64::from(i32::from_be_bytes([b[0], b[1], b[2], b[3]])),
        64 => i64::from_be_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]) as f64,
        -32 => f64::from(f32::from_be_bytes([b[0], b[1], b[2], b[3]])),
        _ => f64::from_be_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/fits.rs"]
mod tests;

//! Minimal PNG encoder
//!
//! Serializes an RGBA pixel buffer as a baseline PNG: signature, IHDR, a
//! single zlib-compressed IDAT, and IEND. Each scanline is prefixed with
//! filter type 0 (none). Chunk framing is 4-byte big-endian length, 4-byte
//! type tag, payload, then a CRC-32 over tag + payload. The zlib stream
//! comes from miniz_oxide; no imaging library is involved.

use log::debug;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};

/// The 8-byte PNG file signature
pub const SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Encode `width * height * 4` bytes of row-major RGBA as a PNG file image.
pub fn encode(width: u32, height: u32, rgba: &[u8]) -> Vec<u8> {
    debug_assert_eq!(rgba.len(), (width * height * 4) as usize);

    let mut png = Vec::with_capacity(rgba.len() / 2 + 64);
    png.extend_from_slice(&SIGNATURE);

    // IHDR: dimensions, 8-bit depth, RGBA color type, default flags
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.push(8); // bit depth
    ihdr.push(6); // color type: RGBA
    ihdr.push(0); // compression
    ihdr.push(0); // filter
    ihdr.push(0); // interlace
    write_chunk(&mut png, b"IHDR", &ihdr);

    // Scanline stream: filter byte 0 (none) before each row of pixels
    let stride = (width * 4) as usize;
    let mut raw = Vec::with_capacity((stride + 1) * height as usize);
    for y in 0..height as usize {
        raw.push(0);
        raw.extend_from_slice(&rgba[y * stride..(y + 1) * stride]);
    }

    let compressed = compress_to_vec_zlib(&raw, CompressionLevel::BestCompression as u8);
    debug!("compressed {} scanline bytes to {}", raw.len(), compressed.len());
    write_chunk(&mut png, b"IDAT", &compressed);

    write_chunk(&mut png, b"IEND", &[]);

    png
}

fn write_chunk(out: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(chunk_type);
    out.extend_from_slice(data);
    out.extend_from_slice(&crc32(chunk_type, data).to_be_bytes());
}

// CRC-32 (PNG/zlib polynomial), computed over chunk type + payload
fn crc32(chunk_type: &[u8], data: &[u8]) -> u32 {
    let mut crc: u32 = 0xFFFF_FFFF;
    for &b in chunk_type.iter().chain(data.iter()) {
        crc ^= b as u32;
        for _ in 0..8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ 0xEDB8_8320;
            } else {
                crc >>= 1;
            }
        }
    }
    crc ^ 0xFFFF_FFFF
}

#[cfg(test)]
mod tests {
    use super::*;
    use miniz_oxide::inflate::decompress_to_vec_zlib;

    /// Walk the chunk sequence after the signature.
    /// Returns (tag, payload, stored crc) per chunk.
    fn chunks(png: &[u8]) -> Vec<([u8; 4], Vec<u8>, u32)> {
        assert_eq!(&png[..8], &SIGNATURE);
        let mut out = Vec::new();
        let mut pos = 8;
        while pos < png.len() {
            let len = u32::from_be_bytes(png[pos..pos + 4].try_into().unwrap()) as usize;
            let tag: [u8; 4] = png[pos + 4..pos + 8].try_into().unwrap();
            let payload = png[pos + 8..pos + 8 + len].to_vec();
            let crc =
                u32::from_be_bytes(png[pos + 8 + len..pos + 12 + len].try_into().unwrap());
            out.push((tag, payload, crc));
            pos += 12 + len;
        }
        assert_eq!(pos, png.len(), "trailing bytes after IEND");
        out
    }

    #[test]
    fn test_signature_and_chunk_order() {
        let png = encode(1, 1, &[10, 20, 30, 255]);
        assert_eq!(&png[..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);

        let tags: Vec<[u8; 4]> = chunks(&png).into_iter().map(|(t, _, _)| t).collect();
        assert_eq!(tags, vec![*b"IHDR", *b"IDAT", *b"IEND"]);
    }

    #[test]
    fn test_ihdr_declares_dimensions_and_format() {
        let png = encode(660, 400, &vec![0u8; 660 * 400 * 4]);
        let (tag, ihdr, _) = chunks(&png).into_iter().next().unwrap();
        assert_eq!(&tag, b"IHDR");
        assert_eq!(ihdr.len(), 13);
        assert_eq!(u32::from_be_bytes(ihdr[0..4].try_into().unwrap()), 660);
        assert_eq!(u32::from_be_bytes(ihdr[4..8].try_into().unwrap()), 400);
        assert_eq!(ihdr[8], 8); // bit depth
        assert_eq!(ihdr[9], 6); // color type RGBA
        assert_eq!(&ihdr[10..13], &[0, 0, 0]);
    }

    #[test]
    fn test_crc_matches_known_value() {
        // Canonical CRC of an empty IEND chunk
        assert_eq!(crc32(b"IEND", &[]), 0xAE42_6082);
    }

    #[test]
    fn test_stored_crcs_validate() {
        let png = encode(3, 2, &vec![7u8; 3 * 2 * 4]);
        for (tag, payload, stored) in chunks(&png) {
            assert_eq!(crc32(&tag, &payload), stored);
        }
    }

    #[test]
    fn test_idat_roundtrip_reproduces_pixels() {
        let (width, height) = (3u32, 2u32);
        let rgba: Vec<u8> = (0..width * height * 4).map(|i| (i * 7 % 251) as u8).collect();
        let png = encode(width, height, &rgba);

        let (_, idat, _) = chunks(&png)
            .into_iter()
            .find(|(tag, _, _)| tag == b"IDAT")
            .unwrap();
        let raw = decompress_to_vec_zlib(&idat).expect("valid zlib stream");

        let stride = (width * 4) as usize;
        assert_eq!(raw.len(), (stride + 1) * height as usize);
        for y in 0..height as usize {
            let row = &raw[y * (stride + 1)..(y + 1) * (stride + 1)];
            assert_eq!(row[0], 0, "filter byte must be none");
            assert_eq!(&row[1..], &rgba[y * stride..(y + 1) * stride]);
        }
    }
}

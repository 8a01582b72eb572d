//! Smallest files that pass file-type signature checks
//!
//! Each buffer is the format's magic bytes followed by a little padding, so
//! upload handlers that sniff the leading bytes accept it as that format.
//! Add a format by copying its signature from a file-type signature table.

use std::io::Cursor;

pub const PDF_SIGNATURE: [u8; 4] = [0x25, 0x50, 0x44, 0x46];
pub const JPEG_SIGNATURE: [u8; 3] = [0xff, 0xd8, 0xff];

const PADDING: u8 = 0xff;

fn signed_buffer(signature: &[u8], len: usize) -> Cursor<Vec<u8>> {
    let mut bytes = signature.to_vec();
    bytes.resize(len, PADDING);
    Cursor::new(bytes)
}

/// A fresh readable PDF
pub fn valid_pdf() -> Cursor<Vec<u8>> {
    signed_buffer(&PDF_SIGNATURE, 8)
}

pub fn valid_jpeg() -> Cursor<Vec<u8>> {
    signed_buffer(&JPEG_SIGNATURE, 8)
}

pub fn valid_jpg() -> Cursor<Vec<u8>> {
    valid_jpeg()
}

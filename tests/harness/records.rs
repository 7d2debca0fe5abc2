//! A small record decoder used as the "code under test" for the fault streams.
//!
//! Wire format per record: `[4-byte LE payload length | 2 reserved bytes | payload]`.

use faultstream::{InputStream, Result};

pub const HEADER_LEN: usize = 6;

#[allow(dead_code)]
pub fn encode(payloads: &[Vec<u8>]) -> Vec<u8> {
    let mut out = Vec::new();
    for p in payloads {
        out.extend_from_slice(&(p.len() as u32).to_le_bytes());
        out.extend_from_slice(&[0xFF, 0xFF]);
        out.extend_from_slice(p);
    }
    out
}

/// Decodes records until a clean end of stream. Records completed before a
/// failure are handed to `on_record` before the error is returned.
#[allow(dead_code)]
pub fn decode_all<S, F>(stream: &mut S, mut on_record: F) -> Result<usize>
where
    S: InputStream + ?Sized,
    F: FnMut(&[u8]),
{
    let mut count = 0;
    let mut buf = Vec::new();
    loop {
        let mut len_bytes = [0u8; 4];
        match stream.read(&mut len_bytes[..1])? {
            0 => return Ok(count),
            _ => stream.read_exact(&mut len_bytes[1..])?,
        }
        stream.skip(2)?;

        let len = u32::from_le_bytes(len_bytes) as usize;
        buf.resize(len, 0);
        stream.read_exact(&mut buf)?;
        on_record(&buf);
        count += 1;
    }
}

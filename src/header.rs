use std::io::{self, ErrorKind, Read, Write};

use byteorder::{ByteOrder, LE};
use fehler::{throw, throws};
use thiserror::Error;

use crate::params::{Parameters, ParametersError};
use crate::props::Properties;

/// Length of the classic LZMA header in bytes.
pub const HEADER_LEN: usize = 13;

/// The size field carries this sentinel when the uncompressed size is unknown
/// and the stream is terminated by an end-of-stream marker instead.
const UNKNOWN_SIZE: u64 = u64::max_value();

/// Errors when reading or writing a classic LZMA header.
#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("error talking to the stream you gave me")]
    Io(#[from] io::Error),
    #[error("refusing to serialize an invalid parameter set")]
    Params(#[from] ParametersError),
    #[error("uncompressed size {0} in header exceeds the signed 64-bit range")]
    UnsupportedSize(u64),
    #[error("dictionary size {0} does not fit the header's 32-bit field")]
    DictSizeOverflow32(i64),
}
type Error = HeaderError; // do it this way for better docs

impl From<Error> for io::Error {
    fn from(e: Error) -> io::Error {
        io::Error::new(ErrorKind::Other, e)
    }
}

/// Reads and decodes the 13-byte classic LZMA header.
///
/// Short input surfaces the reader's own error condition (typically
/// `UnexpectedEof`); a partial header is never interpreted. The returned
/// parameter set is already normalized.
#[throws]
pub fn read_header<R: Read>(mut reader: R) -> Parameters {
    let mut buf = [0u8; HEADER_LEN];
    reader.read_exact(&mut buf)?;

    let mut p = Parameters::default();
    p.set_properties(Properties(buf[0]));
    p.dict_size = i64::from(LE::read_u32(&buf[1..5]));

    let size = LE::read_u64(&buf[5..13]);
    if size == UNKNOWN_SIZE {
        p.size = 0;
        p.eos = true;
        p.size_in_header = false;
    } else {
        if size > i64::max_value() as u64 {
            throw!(Error::UnsupportedSize(size));
        }
        p.size = size as i64;
        p.eos = false;
        p.size_in_header = true;
    }

    p.normalize();
    p
}

/// Verifies a parameter set and writes it as a 13-byte classic LZMA header.
///
/// The header is assembled in full before any byte reaches the writer, so a
/// failed write never leaves a truncated header behind on our account.
#[throws]
pub fn write_header<W: Write>(mut writer: W, p: &Parameters) {
    p.verify()?;

    let mut buf = [0u8; HEADER_LEN];
    buf[0] = p.properties().map_err(ParametersError::from)?.0;

    // verify already bounds dict_size logically; this guards the wire field
    // width itself
    if p.dict_size > i64::from(u32::max_value()) {
        throw!(Error::DictSizeOverflow32(p.dict_size));
    }
    LE::write_u32(&mut buf[1..5], p.dict_size as u32);

    let size = if p.size_in_header {
        p.size as u64
    } else {
        UNKNOWN_SIZE
    };
    LE::write_u64(&mut buf[5..13], size);

    writer.write_all(&buf)?;
}

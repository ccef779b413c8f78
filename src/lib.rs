#![forbid(unsafe_code)]

//! Codec for the classic 13-byte LZMA stream header.
//!
//! Every interoperating LZMA reader and writer agrees on this header: one
//! packed properties byte (the LC/LP/PB context widths), a 32-bit
//! little-endian dictionary size, and a 64-bit little-endian uncompressed
//! size, where an all-ones size means "unknown, terminate on the
//! end-of-stream marker".
//!
//! This crate covers only that contract. The compression engine itself
//! (match finding, range coding, dictionary management) lives elsewhere and
//! consumes the [`Parameters`] produced here.
//!
//! ```
//! use lzma_header::{read_header, write_header, Parameters};
//!
//! let params = Parameters {
//!     dict_size: 1 << 20,
//!     size: 1000,
//!     size_in_header: true,
//!     ..Parameters::default()
//! };
//!
//! let mut encoded = Vec::new();
//! write_header(&mut encoded, &params)?;
//! assert_eq!(encoded.len(), 13);
//!
//! let decoded = read_header(encoded.as_slice())?;
//! assert_eq!(decoded.size, 1000);
//! # Ok::<(), lzma_header::HeaderError>(())
//! ```

mod header;
mod params;
mod props;

pub use header::{read_header, write_header, HeaderError, HEADER_LEN};
pub use params::{
    Parameters, ParametersError, MAX_DICT_SIZE, MAX_LENGTH, MIN_DICT_SIZE, MIN_LENGTH,
};
pub use props::{verify_properties, InvalidProperties, Properties};

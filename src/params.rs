use std::convert::TryFrom;

use fehler::{throw, throws};
use thiserror::Error;

use crate::props::{verify_properties, InvalidProperties, Properties};

/// Smallest dictionary the format supports, 4 KiB.
pub const MIN_DICT_SIZE: i64 = 1 << 12;
/// Largest dictionary expressible in the header's 32-bit field.
pub const MAX_DICT_SIZE: i64 = (1 << 32) - 1;

/// Shortest match length the LZMA model encodes.
pub const MIN_LENGTH: i64 = 2;
/// Longest match length the LZMA model encodes.
pub const MAX_LENGTH: i64 = 273;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParametersError {
    #[error("the literal/position context widths are invalid")]
    Properties(#[from] InvalidProperties),
    #[error("dictionary size {0} outside the supported range")]
    DictSizeOutOfRange(i64),
    #[error("dictionary size {0} is not addressable on this platform")]
    DictSizeOverflow(i64),
    #[error("uncompressed size {0} must not be negative")]
    NegativeSize(i64),
}

/// Everything a reader and a writer of a classic LZMA stream must agree on,
/// plus the operational settings the surrounding machinery cares about.
///
/// This is a plain value: build one with a struct literal over
/// [`Parameters::default`], or obtain one from [`crate::read_header`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    /// Number of literal context bits.
    pub lc: u32,
    /// Number of literal position bits.
    pub lp: u32,
    /// Number of position bits.
    pub pb: u32,
    /// Size of the dictionary window in bytes.
    pub dict_size: i64,
    /// Size of the uncompressed payload in bytes.
    pub size: i64,
    /// Whether the header carries the uncompressed size explicitly.
    pub size_in_header: bool,
    /// Whether the stream is terminated by an end-of-stream marker instead.
    pub eos: bool,
    /// I/O buffering hint. Never serialized; negative means "unset, ignore".
    pub buffer_size: i64,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            lc: 3,
            lp: 0,
            pb: 2,
            dict_size: MIN_DICT_SIZE,
            size: 0,
            size_in_header: false,
            eos: false,
            buffer_size: 4096,
        }
    }
}

impl Parameters {
    /// Packs LC, LP and PB into the properties byte.
    ///
    /// After a successful [`Parameters::verify`] this cannot fail.
    #[throws(InvalidProperties)]
    pub fn properties(&self) -> Properties {
        Properties::new(self.lc, self.lp, self.pb)?
    }

    /// Overwrites LC, LP and PB from a properties byte.
    pub fn set_properties(&mut self, props: Properties) {
        self.lc = props.lc();
        self.lp = props.lp();
        self.pb = props.pb();
    }

    /// Fills unset or too-small size fields with usable values, in place.
    ///
    /// Zero means "unset" for `dict_size` and `buffer_size` and is replaced by
    /// the default. A negative `buffer_size` is an explicit "ignore me" and is
    /// left alone. Idempotent.
    pub fn normalize(&mut self) {
        let default = Parameters::default();
        if self.dict_size == 0 {
            self.dict_size = default.dict_size;
        }
        if self.dict_size < MIN_DICT_SIZE {
            self.dict_size = MIN_DICT_SIZE;
        }
        if self.buffer_size == 0 {
            self.buffer_size = default.buffer_size;
        }
        if 0 <= self.buffer_size && self.buffer_size < MIN_LENGTH {
            self.buffer_size = MAX_LENGTH;
        }
    }

    /// Checks the parameter set for errors. Performs no mutation; callers
    /// wanting the defaulting behavior run [`Parameters::normalize`] first.
    #[throws(ParametersError)]
    pub fn verify(&self) {
        verify_properties(self.lc, self.lp, self.pb)?;
        if !(MIN_DICT_SIZE..=MAX_DICT_SIZE).contains(&self.dict_size) {
            throw!(ParametersError::DictSizeOutOfRange(self.dict_size));
        }
        // the dictionary must fit the native addressing width, which rules
        // out anything past 2 GiB on 32-bit targets
        if isize::try_from(self.dict_size).is_err() {
            throw!(ParametersError::DictSizeOverflow(self.dict_size));
        }
        if self.size < 0 {
            throw!(ParametersError::NegativeSize(self.size));
        }
    }
}

use fehler::{throw, throws};
use thiserror::Error;

/// Largest number of literal context bits the format allows.
pub const MAX_LC: u32 = 8;
/// Largest number of literal position bits the format allows.
pub const MAX_LP: u32 = 4;
/// Largest number of position bits the format allows.
pub const MAX_PB: u32 = 4;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidProperties {
    #[error("literal context bits {0} exceed the maximum of 8")]
    LcTooLarge(u32),
    #[error("literal position bits {0} exceed the maximum of 4")]
    LpTooLarge(u32),
    #[error("position bits {0} exceed the maximum of 4")]
    PbTooLarge(u32),
}

/// Checks the three context widths against their wire-format domain.
#[throws(InvalidProperties)]
pub fn verify_properties(lc: u32, lp: u32, pb: u32) {
    if lc > MAX_LC {
        throw!(InvalidProperties::LcTooLarge(lc));
    }
    if lp > MAX_LP {
        throw!(InvalidProperties::LpTooLarge(lp));
    }
    if pb > MAX_PB {
        throw!(InvalidProperties::PbTooLarge(pb));
    }
}

/// The properties byte of an LZMA header: LC, LP and PB packed as
/// `(pb * 5 + lp) * 9 + lc`.
///
/// Canonical values lie in `0..=224`. Packing rejects out-of-domain widths;
/// unpacking accepts any byte, since every value decomposes to *some* triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Properties(pub u8);

impl Properties {
    #[throws(InvalidProperties)]
    pub fn new(lc: u32, lp: u32, pb: u32) -> Self {
        verify_properties(lc, lp, pb)?;
        Properties(((pb * 5 + lp) * 9 + lc) as u8)
    }

    pub fn lc(&self) -> u32 { u32::from(self.0) % 9 }
    pub fn lp(&self) -> u32 { (u32::from(self.0) / 9) % 5 }
    pub fn pb(&self) -> u32 { u32::from(self.0) / 45 }
}

//! Error types for catalog reads and epoch-state initialization.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for catalog and initialization operations.
pub type Result<T> = std::result::Result<T, SatDataError>;

/// Failures raised while locating, reading or initializing a satellite.
///
/// Every failed read or initialization maps to exactly one variant; a
/// partially-populated state is never handed back as a success.
#[derive(Debug, Error)]
pub enum SatDataError {
    /// No catalog file mentions the requested catalog number.
    #[error("satellite #{0} is not listed in any catalog file")]
    NotInIndex(u32),

    /// The file the locator named was scanned to the end without a match.
    #[error("satellite #{catnum} not found in {}", path.display())]
    NotInFile { catnum: u32, path: PathBuf },

    /// The matching three-line group failed checksum or format validation.
    #[error("element set for satellite #{catnum} failed validation")]
    InvalidElements {
        catnum: u32,
        #[source]
        source: TleError,
    },

    /// A catalog file or the catalog directory could not be opened or read.
    #[error("cannot read {}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The state handed to the initializer is structurally unusable
    /// (caller error, never retried).
    #[error("satellite state cannot be initialized: {0}")]
    Precondition(&'static str),

    /// The propagated epoch position lies at or below the Earth's surface,
    /// so the ground geometry (footprint, sub-satellite point) is undefined.
    #[error("geocentric radius {radius_km:.1} km is at or below the Earth's surface")]
    SubOrbital { radius_km: f64 },
}

/// Validation failures for a single three-line element group.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TleError {
    /// A data line is shorter than the 69 columns the format requires.
    #[error("element line {line} is truncated ({len} bytes)")]
    Truncated { line: u8, len: usize },

    /// A data line does not start with its expected line number.
    #[error("element line {line} does not start with '{line}'")]
    LineNumber { line: u8 },

    /// The modulo-10 checksum does not match the digit in column 69.
    #[error("checksum mismatch on line {line}: computed {computed}, found {found:?}")]
    Checksum { line: u8, computed: u8, found: char },

    /// The two data lines carry different catalog numbers.
    #[error("catalog number differs between lines ({line1} vs {line2})")]
    CatalogNumber { line1: u32, line2: u32 },

    /// A fixed-column field did not parse as a number.
    #[error("field '{0}' is not a valid number")]
    Field(&'static str),
}

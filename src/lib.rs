//! Satellite catalog ingestion and epoch-state initialization.
//!
//! The crate reads NORAD three-line element sets from a directory of `.tle`
//! files, locates the record for a requested catalog number, validates it,
//! and produces a [`Sat`] initialized at its reference epoch: position and
//! velocity in kilometers, look angles for an optional observer, the
//! sub-satellite point, footprint radius, orbit number and an orbit-class
//! label. The bundled [`sgpsdp`] module carries the SGP4/SDP4 models the
//! initializer runs, and stays usable on its own for time-stepped tracking.
//!
//! ```no_run
//! use sattrack::{Catalog, TleDir};
//!
//! let catalog = Catalog::open(TleDir::new("/var/lib/sattrack/tle"))?;
//! let sat = catalog.read_satellite(25544)?;
//! println!("{} at {:.1} km altitude", sat.tle.sat_name, sat.alt);
//! # Ok::<(), sattrack::SatDataError>(())
//! ```

#[cfg(test)]
#[macro_use]
extern crate assert_approx_eq;

pub mod catalog;
pub mod config;
pub mod coords;
pub mod error;
pub mod lookup;
pub mod orbit;
pub mod sat;
pub mod sgpsdp;
pub mod time;
pub mod tle;

pub use catalog::Catalog;
pub use config::TleDir;
pub use error::{SatDataError, TleError};
pub use lookup::TleIndex;
pub use orbit::OrbitType;
pub use sat::{Qth, Sat};
pub use sgpsdp::Ephemeris;
pub use tle::Tle;

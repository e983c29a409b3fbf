//! Coarse orbit classification from the mean elements.

use crate::sat::Sat;
use crate::sgpsdp::math;
use crate::sgpsdp::vals::{TWOPI, XMNPDA};

/// Revolutions per day of an ideal synchronous orbit.
const SYNC_MEAN_MOTION: f64 = 1.0027;
/// Half-width of the mean-motion band treated as synchronous, rev/day.
const SYNC_BAND: f64 = 0.0002;
/// Eccentricity cap for the geostationary label.
const GEOSTAT_ECC: f64 = 0.01;
/// Inclination cap for the geostationary label, degrees.
const GEOSTAT_INCL_DEG: f64 = 1.0;
/// Eccentricity at and above which an orbit is called highly elliptical.
const HIGH_ECC: f64 = 0.25;
/// Mean-motion floor for low earth orbits, rev/day.
const LEO_MEAN_MOTION: f64 = 11.25;
/// Mean motion of a satellite on the verge of reentry, rev/day.
const DECAY_MEAN_MOTION: f64 = 16.666666;

/// Orbit class of a satellite, derived from its mean elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrbitType {
    #[default]
    Unknown,
    LowEarth,
    MediumEarth,
    Geosynchronous,
    Geostationary,
    HighlyElliptical,
    Decayed,
}

/// Mean motion in revolutions per day.
fn mean_motion(sat: &Sat) -> f64 {
    sat.tle.xno * XMNPDA / TWOPI
}

/// Whether the mean motion sits in the synchronous band.
pub fn geosynchronous(sat: &Sat) -> bool {
    (mean_motion(sat) - SYNC_MEAN_MOTION).abs() < SYNC_BAND
}

/// Crude decay test: epoch plus a lifetime estimate from the mean motion
/// and its first derivative, compared against the state's current time.
/// With the time still at zero, as right after initialization, this never
/// fires.
pub fn decayed(sat: &Sat) -> bool {
    let xndt2o = sat.tle.xndt2o / (TWOPI / XMNPDA / XMNPDA);
    /* A zero drag derivative makes the lifetime estimate infinite; the
     * comparison then never fires. */
    sat.jul_epoch + (DECAY_MEAN_MOTION - mean_motion(sat)) / (10.0 * xndt2o.abs()) < sat.jul_utc
}

/// Classifies the orbit. Deterministic and side-effect-free; consults only
/// the elements and the state's epoch/current timestamps, never the wall
/// clock.
pub fn classify(sat: &Sat) -> OrbitType {
    if decayed(sat) {
        return OrbitType::Decayed;
    }

    if geosynchronous(sat) {
        return if sat.tle.eo < GEOSTAT_ECC && math::degrees(sat.tle.xincl) < GEOSTAT_INCL_DEG {
            OrbitType::Geostationary
        } else {
            OrbitType::Geosynchronous
        };
    }

    let meanmo = mean_motion(sat);
    if sat.tle.eo >= HIGH_ECC {
        OrbitType::HighlyElliptical
    } else if meanmo >= LEO_MEAN_MOTION {
        OrbitType::LowEarth
    } else if meanmo > SYNC_MEAN_MOTION {
        OrbitType::MediumEarth
    } else {
        OrbitType::Unknown
    }
}

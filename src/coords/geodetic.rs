use super::vector::Vector;
use crate::sgpsdp::math::{ac_tan, fmod2p};
use crate::sgpsdp::vals::{FLAT, MFACTOR, PIO2, TWOPI, XKMPER};
use crate::time::theta_g_jd;

/// Geodetic position: latitude and longitude in radians, altitude in
/// kilometers above the reference ellipsoid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Geodetic {
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
}

impl Geodetic {
    pub fn new(lat: f64, lon: f64, alt: f64) -> Geodetic {
        Geodetic { lat, lon, alt }
    }
}

/// Local mean sidereal time at an east longitude, in [0, 2pi).
pub(crate) fn lmst(jul: f64, lon: f64) -> f64 {
    fmod2p(theta_g_jd(jul) + lon)
}

/// ECI position (km) and velocity (km/s) of a ground observer at a Julian
/// time, on the oblate rotating Earth.
pub fn observer_pos_vel(jul: f64, geo: &Geodetic) -> (Vector, Vector) {
    let theta = lmst(jul, geo.lon);
    let (sin_lat, cos_lat) = geo.lat.sin_cos();
    let c = 1.0 / (1.0 + FLAT * (FLAT - 2.0) * sin_lat * sin_lat).sqrt();
    let sq = (1.0 - FLAT) * (1.0 - FLAT) * c;
    let achcp = (XKMPER * c + geo.alt) * cos_lat;
    let pos = Vector::new(
        achcp * theta.cos(),
        achcp * theta.sin(),
        (XKMPER * sq + geo.alt) * sin_lat,
    );
    let vel = Vector::new(-MFACTOR * pos.y, MFACTOR * pos.x, 0.0);
    (pos, vel)
}

/// Geodetic sub-satellite point under an ECI position at a Julian time.
///
/// Latitude comes from the iterative method of the 1992 Astronomical
/// Almanac, page K12. Longitude is returned in [0, 2pi).
pub fn lat_lon_alt(jul: f64, pos: &Vector) -> Geodetic {
    let theta = ac_tan(pos.y, pos.x);
    let lon = fmod2p(theta - theta_g_jd(jul));
    let r = (pos.x * pos.x + pos.y * pos.y).sqrt();
    let e2 = FLAT * (2.0 - FLAT);
    let mut lat = ac_tan(pos.z, r);
    let mut c;
    let mut iterations = 0;
    loop {
        let phi = lat;
        c = 1.0 / (1.0 - e2 * phi.sin() * phi.sin()).sqrt();
        lat = ac_tan(pos.z + XKMPER * c * e2 * phi.sin(), r);
        iterations += 1;
        if (lat - phi).abs() < 1E-10 || iterations >= 10 {
            break;
        }
    }
    let alt = r / lat.cos() - XKMPER * c;
    if lat > PIO2 {
        lat -= TWOPI;
    }
    Geodetic { lat, lon, alt }
}

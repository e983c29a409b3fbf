//! Satellite state and the epoch-state initializer.

use crate::coords::{self, Geodetic, Vector};
use crate::error::{SatDataError, TleError};
use crate::orbit::{self, OrbitType};
use crate::sgpsdp::math;
use crate::sgpsdp::vals::{AE, DE2RA, PI, TWOPI, XKMPER, XMNPDA};
use crate::sgpsdp::{Ephemeris, Propagator};
use crate::tle::Tle;

/// Wraps a longitude into (-pi, pi] by repeated full turns.
fn wrap_longitude(mut lon: f64) -> f64 {
    while lon < -PI {
        lon += TWOPI;
    }
    while lon > PI {
        lon -= TWOPI;
    }
    lon
}

/// Observer ground station: latitude and longitude in degrees (north and
/// east positive), altitude in meters above sea level.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Qth {
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
}

impl Qth {
    pub fn new(lat: f64, lon: f64, alt: f64) -> Qth {
        Qth { lat, lon, alt }
    }
}

/// Satellite state: the element set plus every derived observable.
///
/// Derived fields hold zeros until [`Sat::initialize`] returns `Ok`; the
/// state must not be read for tracking purposes before that.
#[derive(Debug, Clone)]
pub struct Sat {
    pub tle: Tle,
    /// Model variant chosen from the elements. Recorded before the
    /// propagator is ever built or invoked.
    pub ephemeris: Ephemeris,
    propagator: Option<Propagator>,
    /// Geocentric position, km.
    pub pos: Vector,
    /// Geocentric velocity, km/s.
    pub vel: Vector,
    /// Julian date of the element set epoch.
    pub jul_epoch: f64,
    /// Julian date of the last update; stays zero at epoch initialization.
    pub jul_utc: f64,
    /// Minutes since epoch.
    pub tsince: f64,
    /// Azimuth from the observer, degrees.
    pub az: f64,
    /// Elevation above the observer's horizon, degrees.
    pub el: f64,
    /// Slant range to the observer, km.
    pub range: f64,
    /// Range rate, km/s, positive receding.
    pub range_rate: f64,
    /// Right ascension, degrees; zero until a later update computes it.
    pub ra: f64,
    /// Declination, degrees; zero until a later update computes it.
    pub dec: f64,
    /// Sub-satellite latitude, degrees north.
    pub ssplat: f64,
    /// Sub-satellite longitude, degrees east, in (-180, 180].
    pub ssplon: f64,
    /// Altitude above the ellipsoid, km.
    pub alt: f64,
    /// Speed, km/s.
    pub velo: f64,
    /// Mean anomaly scaled to 0..256.
    pub ma: f64,
    /// Footprint diameter, km.
    pub footprint: f64,
    /// Orbital phase, rad.
    pub phase: f64,
    /// Next acquisition of signal, Julian date; placeholder, zero until a
    /// pass prediction fills it.
    pub aos: f64,
    /// Next loss of signal, Julian date; placeholder like `aos`.
    pub los: f64,
    /// Revolution number at the current state.
    pub orbit: i64,
    pub otype: OrbitType,
}

impl Sat {
    /// Wraps a parsed element set in a fresh, uninitialized state.
    pub fn new(tle: Tle) -> Sat {
        let ephemeris = Ephemeris::select(&tle);
        Sat {
            tle,
            ephemeris,
            propagator: None,
            pos: Vector::ZERO,
            vel: Vector::ZERO,
            jul_epoch: 0.0,
            jul_utc: 0.0,
            tsince: 0.0,
            az: 0.0,
            el: 0.0,
            range: 0.0,
            range_rate: 0.0,
            ra: 0.0,
            dec: 0.0,
            ssplat: 0.0,
            ssplon: 0.0,
            alt: 0.0,
            velo: 0.0,
            ma: 0.0,
            footprint: 0.0,
            phase: 0.0,
            aos: 0.0,
            los: 0.0,
            orbit: 0,
            otype: OrbitType::Unknown,
        }
    }

    /// Parses an element set string and wraps it in a fresh state.
    pub fn from_tle(s: &str) -> Result<Sat, TleError> {
        Ok(Sat::new(Tle::parse(s)?))
    }

    /// Computes the satellite state at epoch, ie. at time-since-epoch zero.
    ///
    /// Every derived field is reset first so that nothing stale survives a
    /// reinitialization, the model variant is recorded, the propagator runs
    /// once at t = 0 and the full set of observables is derived from its
    /// output. `qth` selects the observer for the topocentric numbers; when
    /// absent a (0, 0, 0) reference location is used.
    pub fn initialize(&mut self, qth: Option<&Qth>) -> Result<(), SatDataError> {
        self.reset_derived();

        if !self.tle.xno.is_finite() || self.tle.xno <= 0.0 {
            return Err(SatDataError::Precondition("mean motion not positive"));
        }
        if !(0.0..1.0).contains(&self.tle.eo) {
            return Err(SatDataError::Precondition("eccentricity outside [0, 1)"));
        }

        /* The model variant must be on record before the propagator runs */
        self.ephemeris = Ephemeris::select(&self.tle);

        let jul_utc = self.tle.epoch_jd();
        self.jul_epoch = jul_utc;

        let obs_geodetic = match qth {
            Some(qth) => Geodetic::new(qth.lat * DE2RA, qth.lon * DE2RA, qth.alt / 1000.0),
            None => Geodetic::new(0.0, 0.0, 0.0),
        };

        let mut propagator = Propagator::new(self.ephemeris, &self.tle);
        let prediction = propagator.run(&self.tle, 0.0);
        self.propagator = Some(propagator);

        self.pos = prediction.position_km();
        self.vel = prediction.velocity_km_s();
        self.phase = prediction.phase;
        self.velo = self.vel.magnitude();

        let obs_set = coords::calculate_obs(jul_utc, &self.pos, &self.vel, &obs_geodetic);
        let mut sat_geodetic = coords::lat_lon_alt(jul_utc, &self.pos);
        sat_geodetic.lon = wrap_longitude(sat_geodetic.lon);

        self.az = math::degrees(obs_set.az);
        self.el = math::degrees(obs_set.el);
        self.range = obs_set.range;
        self.range_rate = obs_set.range_rate;
        self.ssplat = math::degrees(sat_geodetic.lat);
        self.ssplon = math::degrees(sat_geodetic.lon);
        self.alt = sat_geodetic.alt;

        let r = self.pos.magnitude();
        if r <= XKMPER {
            self.reset_derived();
            return Err(SatDataError::SubOrbital { radius_km: r });
        }
        self.footprint = 2.0 * XKMPER * (XKMPER / r).acos();

        self.ma = math::degrees(self.phase) * 256.0 / 360.0;

        let age = 0.0;
        self.orbit = ((self.tle.xno * XMNPDA / TWOPI + age * self.tle.bstar * AE) * age
            + self.tle.xmo / TWOPI)
            .floor() as i64
            + self.tle.revnum
            - 1;

        self.otype = orbit::classify(self);

        Ok(())
    }

    /// Puts every derived field back to its pristine zero and drops the
    /// cached propagator, so coefficients are rebuilt from the elements.
    fn reset_derived(&mut self) {
        self.propagator = None;
        self.pos = Vector::ZERO;
        self.vel = Vector::ZERO;
        self.jul_epoch = 0.0;
        self.jul_utc = 0.0;
        self.tsince = 0.0;
        self.az = 0.0;
        self.el = 0.0;
        self.range = 0.0;
        self.range_rate = 0.0;
        self.ra = 0.0;
        self.dec = 0.0;
        self.ssplat = 0.0;
        self.ssplon = 0.0;
        self.alt = 0.0;
        self.velo = 0.0;
        self.ma = 0.0;
        self.footprint = 0.0;
        self.phase = 0.0;
        self.aos = 0.0;
        self.los = 0.0;
        self.orbit = 0;
        self.otype = OrbitType::Unknown;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISS: &str = "ISS (ZARYA)
1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927
2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

    const MOLNIYA: &str = "MOLNIYA TEST SAT
1 11111U 98054A   08264.40000000  .00000150  00000-0  00000-0 0  9991
2 11111  63.4000 245.0000 7222000 270.0000  14.0000  2.00600000 75008";

    /* Eccentricity written as 0000000 exercises the dropped c3 and
     * delta-m coefficients. */
    const CIRCULAR: &str = "CIRCULAR TEST SAT
1 55555U 10001A   08264.40000000  .00000000  00000-0  00000-0 0  9991
2 55555  51.6000 247.0000 0000000 130.0000 325.0000 15.70000000    10";

    /* ISS set with the ascending node turned half a revolution, putting
     * the sub-satellite point in the western hemisphere. */
    const ISS_WEST: &str = "ISS WEST
1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927
2 25544  51.6416  67.4627 0006703 130.5360 325.0288 15.72125391563537";

    /* Mean motion 16.5 rev/day with e = 0.1 dips below the surface. */
    const SUBORBITAL: &str = "DECAYING OBJECT
1 90000U 09001A   09001.50000000  .00099000  00000-0  00000-0 0  9992
2 90000  28.5000   0.0000 1000000   0.0000   0.0000 16.50000000    10";

    fn initialized(tle: &str, qth: Option<&Qth>) -> Sat {
        let mut sat = Sat::from_tle(tle).unwrap();
        sat.initialize(qth).unwrap();
        sat
    }

    #[test]
    fn epoch_state_of_a_low_earth_satellite() {
        let sat = initialized(ISS, None);

        assert_eq!(sat.ephemeris, Ephemeris::NearEarth);
        assert_approx_eq!(sat.jul_epoch, 2454730.01782528, 1e-6);
        assert_approx_eq!(sat.jul_utc, 0.0);
        assert_approx_eq!(sat.tsince, 0.0);

        assert_approx_eq!(sat.pos.x, 4083.9024, 0.01);
        assert_approx_eq!(sat.pos.y, -993.6321, 0.01);
        assert_approx_eq!(sat.pos.z, 5243.6037, 0.01);
        assert_approx_eq!(sat.velo, 7.704617, 1e-4);
        assert_approx_eq!(sat.velo, sat.vel.magnitude());

        assert_approx_eq!(sat.ssplat, 51.4636, 1e-3);
        assert_approx_eq!(sat.ssplon, 160.1432, 1e-3);
        assert_approx_eq!(sat.alt, 355.098, 0.01);

        assert_eq!(sat.orbit, 56352);
        assert_eq!(sat.otype, OrbitType::LowEarth);
    }

    #[test]
    fn reference_observer_look_angles() {
        let sat = initialized(ISS, None);
        assert_approx_eq!(sat.az, 15.2304, 1e-3);
        assert_approx_eq!(sat.el, -62.2547, 1e-3);
        assert_approx_eq!(sat.range, 11673.43, 0.01);
        assert_approx_eq!(sat.range_rate, 1.73419, 1e-4);
    }

    #[test]
    fn observer_changes_the_look_angles() {
        let qth = Qth::new(40.0, -75.0, 100.0);
        let sat = initialized(ISS, Some(&qth));
        assert_approx_eq!(sat.az, 328.2892, 1e-3);
        assert_approx_eq!(sat.el, -36.4083, 1e-3);
        assert_approx_eq!(sat.range, 8152.90, 0.01);
    }

    #[test]
    fn footprint_and_scaled_mean_anomaly() {
        let sat = initialized(ISS, None);

        let r = sat.pos.magnitude();
        assert_approx_eq!(sat.footprint, 2.0 * XKMPER * (XKMPER / r).acos(), 1e-9);
        assert_approx_eq!(sat.footprint, 4087.47, 0.01);

        assert_approx_eq!(sat.ma, math::degrees(sat.phase) * 256.0 / 360.0, 1e-9);
        assert_approx_eq!(sat.ma, 231.1316, 1e-3);
    }

    #[test]
    fn deep_space_selection_is_recorded() {
        let sat = initialized(MOLNIYA, None);
        assert_eq!(sat.ephemeris, Ephemeris::DeepSpace);
        assert_eq!(sat.otype, OrbitType::HighlyElliptical);
    }

    #[test]
    fn circular_elements_initialize_to_a_finite_state() {
        let sat = initialized(CIRCULAR, None);
        assert!(sat.pos.x.is_finite() && sat.pos.y.is_finite() && sat.pos.z.is_finite());
        assert!(sat.az.is_finite() && sat.el.is_finite() && sat.range.is_finite());
        assert!(sat.alt > 300.0 && sat.alt < 450.0);
        assert!(sat.footprint > 0.0);
        assert!(sat.velo > 7.0 && sat.velo < 8.0);
    }

    #[test]
    fn longitude_is_normalized() {
        let sat = initialized(ISS, None);
        assert!(sat.ssplon > -180.0 && sat.ssplon <= 180.0);
        assert!(sat.ssplat >= -90.0 && sat.ssplat <= 90.0);
    }

    #[test]
    fn western_sub_point_has_negative_longitude() {
        let east = initialized(ISS, None);
        let west = initialized(ISS_WEST, None);

        /* A half-turn of the node rotates the position about the pole,
         * leaving latitude and altitude untouched. */
        assert_approx_eq!(west.ssplat, east.ssplat, 1e-6);
        assert_approx_eq!(west.alt, east.alt, 1e-6);
        assert_approx_eq!(west.ssplon, east.ssplon - 180.0, 1e-6);
        assert!(west.ssplon < 0.0 && west.ssplon > -180.0);
    }

    #[test]
    fn longitude_wraps_by_whole_turns() {
        assert_approx_eq!(wrap_longitude(2.5), 2.5);
        assert_approx_eq!(wrap_longitude(2.5 + TWOPI), 2.5, 1e-12);
        assert_approx_eq!(wrap_longitude(2.5 - 2.0 * TWOPI), 2.5, 1e-12);
        assert_approx_eq!(wrap_longitude(-2.5 + TWOPI), -2.5, 1e-12);
        assert_approx_eq!(wrap_longitude(4.0), 4.0 - TWOPI, 1e-12);
        assert_approx_eq!(wrap_longitude(-4.0), TWOPI - 4.0, 1e-12);
    }

    #[test]
    fn reinitialization_clears_stale_fields() {
        let mut sat = Sat::from_tle(ISS).unwrap();
        sat.initialize(None).unwrap();
        let az = sat.az;

        /* Fields only a later update would set must not leak through */
        sat.aos = 2454730.3;
        sat.los = 2454730.4;
        sat.ra = 45.0;
        sat.dec = -10.0;

        sat.initialize(None).unwrap();
        assert_approx_eq!(sat.aos, 0.0);
        assert_approx_eq!(sat.los, 0.0);
        assert_approx_eq!(sat.ra, 0.0);
        assert_approx_eq!(sat.dec, 0.0);
        assert_approx_eq!(sat.az, az);
    }

    #[test]
    fn sub_orbital_geometry_is_rejected_and_zeroed() {
        let mut sat = Sat::from_tle(SUBORBITAL).unwrap();
        match sat.initialize(None) {
            Err(SatDataError::SubOrbital { radius_km }) => assert!(radius_km <= XKMPER),
            other => panic!("expected SubOrbital, got {:?}", other),
        }
        assert_approx_eq!(sat.footprint, 0.0);
        assert_approx_eq!(sat.az, 0.0);
        assert_approx_eq!(sat.velo, 0.0);
        assert_approx_eq!(sat.jul_epoch, 0.0);
        assert_eq!(sat.otype, OrbitType::Unknown);
    }

    #[test]
    fn degenerate_elements_fail_the_precondition() {
        let mut sat = Sat::from_tle(ISS).unwrap();
        sat.tle.xno = 0.0;
        match sat.initialize(None) {
            Err(SatDataError::Precondition(_)) => {}
            other => panic!("expected Precondition, got {:?}", other),
        }

        let mut sat = Sat::from_tle(ISS).unwrap();
        sat.tle.eo = 1.5;
        assert!(matches!(
            sat.initialize(None),
            Err(SatDataError::Precondition(_))
        ));
    }
}

use super::geodetic::{lmst, observer_pos_vel, Geodetic};
use super::vector::Vector;

/// Topocentric observation of a satellite: azimuth and elevation in
/// radians, slant range in km, range rate in km/s.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObsSet {
    pub az: f64,
    pub el: f64,
    pub range: f64,
    pub range_rate: f64,
}

/// Look angles from an observer to a satellite ECI state (km, km/s) at a
/// Julian time. A negative elevation means the satellite is below the
/// observer's horizon.
pub fn calculate_obs(jul: f64, pos: &Vector, vel: &Vector, geo: &Geodetic) -> ObsSet {
    let (obs_pos, obs_vel) = observer_pos_vel(jul, geo);
    let range = *pos - obs_pos;
    let rgvel = *vel - obs_vel;
    let range_mag = range.magnitude();

    let theta = lmst(jul, geo.lon);
    let (sin_lat, cos_lat) = geo.lat.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    let top_s = sin_lat * cos_theta * range.x + sin_lat * sin_theta * range.y - cos_lat * range.z;
    let top_e = -sin_theta * range.x + cos_theta * range.y;
    let top_z = cos_lat * cos_theta * range.x + cos_lat * sin_theta * range.y + sin_lat * range.z;

    let mut az = (-top_e / top_s).atan();
    if top_s > 0.0 {
        az += std::f64::consts::PI;
    }
    if az < 0.0 {
        az += 2.0 * std::f64::consts::PI;
    }
    let el = (top_z / range_mag).asin();

    ObsSet {
        az,
        el,
        range: range_mag,
        range_rate: range.dot(&rgvel) / range_mag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sgpsdp::vals::XKMPER;

    const JD: f64 = 2449991.875;

    #[test]
    fn overhead_satellite_is_at_zenith() {
        let geo = Geodetic::new(0.0, 0.0, 0.0);
        let (obs_pos, _) = observer_pos_vel(JD, &geo);
        // place the satellite 400 km straight up from the observer
        let sat_pos = obs_pos.scale((XKMPER + 400.0) / XKMPER);
        let obs = calculate_obs(JD, &sat_pos, &Vector::ZERO, &geo);
        assert_approx_eq!(obs.el.to_degrees(), 90.0, 1e-6);
        assert_approx_eq!(obs.range, 400.0, 1e-6);
    }

    #[test]
    fn antipodal_satellite_is_below_horizon() {
        let geo = Geodetic::new(0.0, 0.0, 0.0);
        let (obs_pos, _) = observer_pos_vel(JD, &geo);
        let sat_pos = obs_pos.scale(-(XKMPER + 400.0) / XKMPER);
        let obs = calculate_obs(JD, &sat_pos, &Vector::ZERO, &geo);
        assert_approx_eq!(obs.el.to_degrees(), -90.0, 1e-6);
        assert_approx_eq!(obs.range, 2.0 * XKMPER + 400.0, 1e-6);
    }

    #[test]
    fn receding_satellite_has_positive_range_rate() {
        let geo = Geodetic::new(0.0, 0.0, 0.0);
        let (obs_pos, obs_vel) = observer_pos_vel(JD, &geo);
        let sat_pos = obs_pos.scale((XKMPER + 400.0) / XKMPER);
        // satellite moving radially outward
        let sat_vel = Vector::new(
            obs_vel.x + obs_pos.x / XKMPER,
            obs_vel.y + obs_pos.y / XKMPER,
            obs_vel.z + obs_pos.z / XKMPER,
        );
        let obs = calculate_obs(JD, &sat_pos, &sat_vel, &geo);
        assert_approx_eq!(obs.range_rate, 1.0, 1e-6);
    }
}

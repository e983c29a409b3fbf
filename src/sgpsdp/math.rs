use super::vals::*;

/* Four-quadrant arctan, result in [0, 2pi) */
pub fn ac_tan(sinx: f64, cosx: f64) -> f64 {
    if cosx == 0.0 {
        if sinx > 0.0 {
            PIO2
        } else {
            X3PIO2
        }
    } else if cosx > 0.0 {
        if sinx > 0.0 {
            (sinx / cosx).atan()
        } else {
            TWOPI + (sinx / cosx).atan()
        }
    } else {
        PI + (sinx / cosx).atan()
    }
}

/* Returns mod 2pi of argument */
pub fn fmod2p(x: f64) -> f64 {
    let mut ret_val = x;
    let i = (ret_val / TWOPI) as i32;
    ret_val -= i as f64 * TWOPI;
    if ret_val < 0.0 {
        ret_val += TWOPI;
    }

    ret_val
}

pub fn degrees(rad: f64) -> f64 {
    rad / DE2RA
}

/* Greenwich Mean Sidereal Time for an epoch specified in the format   */
/* used in the NORAD two-line element sets, returned together with the */
/* days since 1950 Jan 0.0 UTC that the deep-space terms are built on. */
pub fn theta_g(epoch: f64) -> (f64, f64) {
    /* Reference:  The 1992 Astronomical Almanac, page B6. */
    let (year, day) = crate::time::epoch_year_day(epoch);

    let ut = day.fract();
    let day = day.floor();
    let jd = crate::time::julian_date_of_year(year) + day;
    let ds50 = jd - 2433281.5 + ut;

    (fmod2p(6.3003880987 * ds50 + 1.72944494), ds50)
}

//! Julian date and sidereal time conversions.

/// Calculates the Julian date for a given point in time.
pub fn julian_date(date: chrono::DateTime<chrono::Utc>) -> f64 {
    use chrono::{Datelike, Timelike};

    let year = julian_date_of_year(date.year());
    let doy = julian_day_of_year(date.year(), date.month(), date.day());
    let f_day =
        julian_fraction_of_day(date.hour(), date.minute(), date.second(), date.nanosecond());
    year + doy as f64 + f_day
}

/// Julian date of day 0.0 of `year` (Meeus, Astronomical Formulae for
/// Calculators, pages 23-25).
pub fn julian_date_of_year(year: i32) -> f64 {
    let year = year - 1;
    let a = year / 100;
    let b = 2 - a + (a / 4);
    (365.25 * year as f64).floor() + (30.6001f64 * 14.0).floor() + 1720994.5 + b as f64
}

const DAYS: [u16; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub fn julian_day_of_year(yr: i32, mo: u32, dy: u32) -> u16 {
    let mut day: u16 = 0;
    for i in 0..(mo - 1) as usize {
        day = day + DAYS[i];
    }

    let mut day = day + dy as u16;

    if ((yr % 4) == 0) && (((yr % 100) != 0) || ((yr % 400) == 0)) && (mo > 2) {
        day = day + 1;
    }

    day
}

pub fn julian_fraction_of_day(h: u32, m: u32, s: u32, ns: u32) -> f64 {
    (h as f64 / 24.0)
        + (m as f64 / (24.0 * 60.0))
        + (s as f64 / (24.0 * 3600.0))
        + (ns as f64 / (24.0 * 3600.0 * 1.0e+9))
}

/// Splits a NORAD epoch (`yyddd.dddddddd`) into a full year and the day of
/// year. Two-digit years below 57 are in the 2000s; the window is valid
/// 1957 through 2056.
pub fn epoch_year_day(epoch: f64) -> (i32, f64) {
    let mut year = (epoch * 1E-3) as i32;
    let day = (epoch * 1E-3).fract() * 1E3;
    if year < 57 {
        year += 2000;
    } else {
        year += 1900;
    }
    (year, day)
}

/// Julian date of a NORAD element-set epoch.
pub fn julian_date_of_epoch(epoch: f64) -> f64 {
    let (year, day) = epoch_year_day(epoch);
    julian_date_of_year(year) + day
}

/// Greenwich Mean Sidereal Time in radians at a Julian date.
pub fn theta_g_jd(jd: f64) -> f64 {
    // Adapted from https://celestrak.com/columns/v02n02/
    let ut = (jd + 0.5).fract();
    let jd = jd - ut;
    let tu = (jd - 2451545.0) / 36525.0;
    let gmst = 24110.54841 + tu * (8640184.812866 + tu * (0.093104 - tu * 6.2E-6));
    let gmst = (gmst + 86400.0 * 1.00273790934 * ut).rem_euclid(86400.0);
    2.0 * std::f64::consts::PI * gmst / 86400.0
}

/// Calculates the Greenwich Mean Sidereal Time (GMST) in radians at a point in time.
pub fn gmst(date: chrono::DateTime<chrono::Utc>) -> f64 {
    theta_g_jd(julian_date(date))
}

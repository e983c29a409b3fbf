use std::ops::Range;

use crate::error::TleError;
use crate::sgpsdp::vals::{AE, DE2RA, TWOPI, XMNPDA};

/// A NORAD two-line element set, converted to the units the propagators
/// work in: angles in radians, mean motion in radians/min, drag terms in
/// the corresponding powers of minutes.
#[derive(Debug, Clone, PartialEq)]
pub struct Tle {
    pub catnr: u32,
    pub sat_name: String,
    pub idesg: String,
    /// Epoch time, [yy]yyddd.dddddddd as written on line 1.
    pub epoch: f64,
    /// First time derivative of mean motion, rad/min^2.
    pub xndt2o: f64,
    /// Second time derivative of mean motion, rad/min^3.
    pub xndd6o: f64,
    /// Drag term, 1/AE.
    pub bstar: f64,
    /// Inclination, rad.
    pub xincl: f64,
    /// Right ascension of the ascending node, rad.
    pub xnodeo: f64,
    /// Eccentricity.
    pub eo: f64,
    /// Argument of perigee, rad.
    pub omegao: f64,
    /// Mean anomaly at epoch, rad.
    pub xmo: f64,
    /// Mean motion, rad/min.
    pub xno: f64,
    pub elset: u32,
    pub revnum: i64,
}

impl Tle {
    /// Parses a two- or three-line element set string. With three lines the
    /// first is taken as the satellite name.
    pub fn parse(s: &str) -> Result<Tle, TleError> {
        let lines: Vec<&str> = s.lines().collect();
        match *lines.as_slice() {
            [line1, line2] => Self::from_lines("", line1, line2),
            [name, line1, line2] => Self::from_lines(name, line1, line2),
            _ => Err(TleError::Truncated {
                line: 1,
                len: lines.first().map_or(0, |l| l.len()),
            }),
        }
    }

    /// Parses one element set from its name line and two data lines,
    /// validating line numbers and checksums.
    pub fn from_lines(name: &str, line1: &str, line2: &str) -> Result<Tle, TleError> {
        check_line(line1, 1)?;
        check_line(line2, 2)?;

        let catnr = num_field(line1, 2..7, "catalog number")?;
        let catnr2 = num_field(line2, 2..7, "catalog number")?;
        if catnr != catnr2 {
            return Err(TleError::CatalogNumber {
                line1: catnr,
                line2: catnr2,
            });
        }

        let mut tle = Tle {
            catnr,
            sat_name: name.trim().to_owned(),
            idesg: field(line1, 9..17, "designator")?.trim().to_owned(),
            epoch: num_field(line1, 18..32, "epoch")?,
            xndt2o: num_field(line1, 33..43, "mean motion dot")?,
            xndd6o: implied_decimal(line1, 44..52, "mean motion dot dot")?,
            bstar: implied_decimal(line1, 53..61, "bstar")?,
            xincl: num_field(line2, 8..16, "inclination")?,
            xnodeo: num_field(line2, 17..25, "right ascension")?,
            eo: f64::from(num_field::<u32>(line2, 26..33, "eccentricity")?) * 1.0e-7,
            omegao: num_field(line2, 34..42, "argument of perigee")?,
            xmo: num_field(line2, 43..51, "mean anomaly")?,
            xno: num_field(line2, 52..63, "mean motion")?,
            elset: count_field(line1, 64..68, "element set number")?,
            revnum: count_field(line2, 63..68, "revolution number")?,
        };

        /* Preprocess to model units */
        tle.xnodeo *= DE2RA;
        tle.omegao *= DE2RA;
        tle.xmo *= DE2RA;
        tle.xincl *= DE2RA;
        let temp = TWOPI / XMNPDA / XMNPDA;
        tle.xno = tle.xno * temp * XMNPDA;
        tle.xndt2o *= temp;
        tle.xndd6o = tle.xndd6o * temp / XMNPDA;
        tle.bstar /= AE;

        Ok(tle)
    }

    /// Julian date of the element set epoch.
    pub fn epoch_jd(&self) -> f64 {
        crate::time::julian_date_of_epoch(self.epoch)
    }
}

/// Catalog number from columns 3-7 of a data line, if the field holds one.
pub(crate) fn catalog_number(line: &str) -> Option<u32> {
    let s = line.get(2..7)?.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn checksum(line: &str) -> u8 {
    let mut sum = 0u32;
    for &b in &line.as_bytes()[..68] {
        match b {
            b'0'..=b'9' => sum += u32::from(b - b'0'),
            b'-' => sum += 1,
            _ => {}
        }
    }
    (sum % 10) as u8
}

fn check_line(line: &str, which: u8) -> Result<(), TleError> {
    if line.len() < 69 {
        return Err(TleError::Truncated {
            line: which,
            len: line.len(),
        });
    }
    if line.as_bytes()[0] != which + b'0' {
        return Err(TleError::LineNumber { line: which });
    }
    let computed = checksum(line);
    let found = line.as_bytes()[68] as char;
    if found.to_digit(10) != Some(u32::from(computed)) {
        return Err(TleError::Checksum {
            line: which,
            computed,
            found,
        });
    }
    Ok(())
}

fn field<'a>(line: &'a str, range: Range<usize>, name: &'static str) -> Result<&'a str, TleError> {
    line.get(range).ok_or(TleError::Field(name))
}

fn num_field<T: std::str::FromStr>(
    line: &str,
    range: Range<usize>,
    name: &'static str,
) -> Result<T, TleError> {
    field(line, range, name)?
        .trim()
        .parse()
        .map_err(|_| TleError::Field(name))
}

/// Elset and revolution counters, where an all-blank field reads as zero.
fn count_field<T: std::str::FromStr + Default>(
    line: &str,
    range: Range<usize>,
    name: &'static str,
) -> Result<T, TleError> {
    let s = field(line, range, name)?.trim();
    if s.is_empty() {
        return Ok(T::default());
    }
    s.parse().map_err(|_| TleError::Field(name))
}

/// Decodes a `±ddddd±e` field as `±0.ddddd x 10^±e`.
fn implied_decimal(line: &str, range: Range<usize>, name: &'static str) -> Result<f64, TleError> {
    let s = field(line, range, name)?;
    let mantissa: f64 = s
        .get(..6)
        .ok_or(TleError::Field(name))?
        .trim()
        .parse()
        .map_err(|_| TleError::Field(name))?;
    let exponent: i32 = s
        .get(6..)
        .ok_or(TleError::Field(name))?
        .trim()
        .parse()
        .map_err(|_| TleError::Field(name))?;
    Ok(mantissa * 1.0e-5 * 10f64.powi(exponent))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISS_NAME: &str = "ISS (ZARYA)";
    const ISS1: &str = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
    const ISS2: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

    const SGP1: &str = "1 88888U 88888A   80275.98708465  .00073094  13844-3  66816-4 0  5554";
    const SGP2: &str = "2 88888  72.8435 115.9689 0086731  52.6988 110.5714 16.05824518   103";

    #[test]
    fn parses_fields_into_model_units() {
        let tle = Tle::from_lines(ISS_NAME, ISS1, ISS2).unwrap();
        assert_eq!(tle.catnr, 25544);
        assert_eq!(tle.sat_name, "ISS (ZARYA)");
        assert_eq!(tle.idesg, "98067A");
        assert_approx_eq!(tle.epoch, 8264.51782528, 1e-9);
        assert_approx_eq!(tle.xincl, 0.90131595, 1e-8);
        assert_approx_eq!(tle.xnodeo, 4.31903889, 1e-8);
        assert_approx_eq!(tle.eo, 0.0006703, 1e-12);
        assert_approx_eq!(tle.omegao, 2.27828299, 1e-8);
        assert_approx_eq!(tle.xmo, 5.67282272, 1e-8);
        assert_approx_eq!(tle.xno, 0.068596911, 1e-9);
        assert_approx_eq!(tle.xndt2o, -6.6116466e-11, 1e-17);
        assert_approx_eq!(tle.bstar, -1.1606e-5, 1e-12);
        assert_eq!(tle.elset, 292);
        assert_eq!(tle.revnum, 56353);
    }

    #[test]
    fn epoch_julian_date() {
        let tle = Tle::from_lines(ISS_NAME, ISS1, ISS2).unwrap();
        assert_approx_eq!(tle.epoch_jd(), 2454730.01782528, 1e-6);
    }

    #[test]
    fn decodes_implied_decimal_fields() {
        let tle = Tle::from_lines("", SGP1, SGP2).unwrap();
        assert_approx_eq!(tle.bstar, 6.6816e-5, 1e-10);
        assert_approx_eq!(tle.xndd6o, 2.9130905e-13, 1e-19);
        assert_approx_eq!(tle.eo, 0.0086731, 1e-12);
        assert_eq!(tle.revnum, 10);
        assert_eq!(tle.elset, 555);
    }

    #[test]
    fn three_line_string_carries_the_name() {
        let s = format!("{ISS_NAME}\n{ISS1}\n{ISS2}");
        let tle = Tle::parse(&s).unwrap();
        assert_eq!(tle.sat_name, ISS_NAME);
        let bare = Tle::parse(&format!("{ISS1}\n{ISS2}")).unwrap();
        assert_eq!(bare.sat_name, "");
        assert_eq!(bare.catnr, tle.catnr);
    }

    #[test]
    fn rejects_bad_checksum() {
        let corrupted = format!("{}8", &ISS1[..68]);
        let err = Tle::from_lines("", &corrupted, ISS2).unwrap_err();
        assert_eq!(
            err,
            TleError::Checksum {
                line: 1,
                computed: 7,
                found: '8'
            }
        );
    }

    #[test]
    fn rejects_truncated_line() {
        let err = Tle::from_lines("", ISS1, &ISS2[..40]).unwrap_err();
        assert_eq!(err, TleError::Truncated { line: 2, len: 40 });
    }

    #[test]
    fn rejects_swapped_lines() {
        let err = Tle::from_lines("", ISS2, ISS1).unwrap_err();
        assert_eq!(err, TleError::LineNumber { line: 1 });
    }

    #[test]
    fn rejects_mismatched_catalog_numbers() {
        // same element set renumbered to 25545 with its checksum fixed up
        let line2 = "2 25545  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563538";
        let err = Tle::from_lines("", ISS1, line2).unwrap_err();
        assert_eq!(
            err,
            TleError::CatalogNumber {
                line1: 25544,
                line2: 25545
            }
        );
    }

    #[test]
    fn rejects_garbage_in_numeric_field() {
        // epoch digit replaced by a letter, checksum adjusted to match
        let line1 = "1 25544U 98067A   0826A.51782528 -.00002182  00000-0 -11606-4 0  2923";
        let err = Tle::from_lines("", line1, ISS2).unwrap_err();
        assert_eq!(err, TleError::Field("epoch"));
    }

    #[test]
    fn catalog_number_field() {
        assert_eq!(catalog_number(ISS1), Some(25544));
        assert_eq!(catalog_number("1 2554A U"), None);
        assert_eq!(catalog_number("1      U"), None);
        assert_eq!(catalog_number("1 255"), None);
    }
}

//! Satellite catalog reader.
//!
//! A catalog is a directory of plain-text element files, three lines per
//! satellite (name line, then the two fixed-column data lines). `Catalog`
//! ties the file index, the file scanner, the element parser and the
//! epoch-state initializer together behind one call.

use crate::config::TleDir;
use crate::error::{Result, SatDataError};
use crate::lookup::TleIndex;
use crate::sat::Sat;
use crate::tle::{self, Tle};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Reads the next three-line group. `Ok(None)` is end of file, clean or
/// mid-group; line endings with a trailing carriage return are tolerated.
pub(crate) fn next_group<B: BufRead>(lines: &mut io::Lines<B>) -> io::Result<Option<[String; 3]>> {
    let name = match lines.next().transpose()? {
        Some(line) => line,
        None => return Ok(None),
    };
    let line1 = match lines.next().transpose()? {
        Some(line) => line,
        None => return Ok(None),
    };
    let line2 = match lines.next().transpose()? {
        Some(line) => line,
        None => return Ok(None),
    };
    Ok(Some([name, line1, line2]))
}

/// Scans a catalog file for the satellite with the given catalog number.
///
/// The first group whose catalog-number field matches wins; its lines go
/// straight to the parser, and a validation failure there ends the search
/// as `InvalidElements`. A data line too short to carry the field ends the
/// scan early as not found, and a group whose field is not numeric is
/// skipped.
pub fn find_in_file(path: &Path, catnum: u32) -> Result<Tle> {
    let file = File::open(path).map_err(|source| SatDataError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let mut lines = BufReader::new(file).lines();

    loop {
        let group = next_group(&mut lines).map_err(|source| SatDataError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let (name, line1, line2) = match group {
            Some([name, line1, line2]) => (name, line1, line2),
            None => break,
        };
        if line1.len() < 7 {
            break;
        }
        if tle::catalog_number(&line1) == Some(catnum) {
            return Tle::from_lines(&name, &line1, &line2)
                .map_err(|source| SatDataError::InvalidElements { catnum, source });
        }
    }

    Err(SatDataError::NotInFile {
        catnum,
        path: path.to_path_buf(),
    })
}

/// Directory-backed satellite catalog.
///
/// Holds the index built when the catalog was opened; element data itself is
/// read back from the files on every lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    dir: TleDir,
    index: TleIndex,
}

impl Catalog {
    /// Indexes every `.tle` file under `dir`.
    pub fn open(dir: TleDir) -> Result<Catalog> {
        let index = TleIndex::scan(&dir)?;
        Ok(Catalog { dir, index })
    }

    /// Reads one satellite's element set and builds its epoch state.
    ///
    /// The state is initialized without an observer; callers tracking from
    /// a station re-initialize with `Some(&qth)`.
    pub fn read_satellite(&self, catnum: u32) -> Result<Sat> {
        let name = match self.index.lookup(catnum) {
            Some(name) => name,
            None => {
                log::error!("satellite #{} is in none of the catalog files", catnum);
                return Err(SatDataError::NotInIndex(catnum));
            }
        };
        let tle = match find_in_file(&self.dir.file_path(name), catnum) {
            Ok(tle) => tle,
            Err(err) => {
                log::error!("{}", err);
                return Err(err);
            }
        };
        log::debug!("read data for #{} ({}) from {}", catnum, tle.sat_name, name);

        let mut sat = Sat::new(tle);
        sat.initialize(None)?;
        Ok(sat)
    }

    pub fn dir(&self) -> &TleDir {
        &self.dir
    }

    pub fn index(&self) -> &TleIndex {
        &self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TleError;
    use crate::orbit::OrbitType;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    const ISS: &str = "ISS (ZARYA)
1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927
2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537
";

    const GEO: &str = "GEO TEST SAT
1 33333U 97086A   08264.40000000  .00000000  00000-0  00000-0 0  9999
2 33333   0.0500  95.3044 0002000 130.0000 230.0000  1.00270000 39493
";

    fn unique_temp_dir(test_name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        std::env::temp_dir().join(format!(
            "sattrack-catalog-{}-{}-{}",
            test_name,
            std::process::id(),
            nanos
        ))
    }

    fn write_catalog(test_name: &str, files: &[(&str, &str)]) -> TleDir {
        let dir = unique_temp_dir(test_name);
        fs::create_dir_all(&dir).expect("Failed to create catalog dir");
        for (name, contents) in files {
            fs::write(dir.join(name), contents).expect("Failed to write catalog file");
        }
        TleDir::new(dir)
    }

    #[test]
    fn finds_the_matching_group_in_a_multi_satellite_file() {
        let dir = write_catalog("multi", &[("mixed.tle", &format!("{}{}", GEO, ISS))]);
        let tle = find_in_file(&dir.file_path("mixed.tle"), 25544).expect("scan failed");
        assert_eq!(tle.catnr, 25544);
        assert_eq!(tle.sat_name, "ISS (ZARYA)");
    }

    #[test]
    fn absent_number_is_not_in_file() {
        let dir = write_catalog("absent", &[("mixed.tle", &format!("{}{}", GEO, ISS))]);
        let path = dir.file_path("mixed.tle");
        match find_in_file(&path, 99999) {
            Err(SatDataError::NotInFile { catnum, path: p }) => {
                assert_eq!(catnum, 99999);
                assert_eq!(p, path);
            }
            other => panic!("expected NotInFile, got {:?}", other),
        }
    }

    #[test]
    fn first_matching_group_wins() {
        let duplicate = ISS.replace("ISS (ZARYA)", "ISS DUPLICATE");
        let dir = write_catalog("first-wins", &[("dup.tle", &format!("{}{}", ISS, duplicate))]);
        let tle = find_in_file(&dir.file_path("dup.tle"), 25544).expect("scan failed");
        assert_eq!(tle.sat_name, "ISS (ZARYA)");
    }

    #[test]
    fn corrupt_element_data_stops_the_search() {
        /* A checksum failure on the matched group must not fall through to
         * the valid duplicate that follows it. */
        let broken = ISS.replace("0  2927", "0  2920");
        let dir = write_catalog("corrupt", &[("bad.tle", &format!("{}{}", broken, ISS))]);
        match find_in_file(&dir.file_path("bad.tle"), 25544) {
            Err(SatDataError::InvalidElements { catnum, source }) => {
                assert_eq!(catnum, 25544);
                assert!(matches!(source, TleError::Checksum { line: 1, .. }));
            }
            other => panic!("expected InvalidElements, got {:?}", other),
        }
    }

    #[test]
    fn short_data_line_ends_the_scan() {
        let contents = format!("TRUNCATED OBJECT\n1 255\n2 255\n{}", ISS);
        let dir = write_catalog("short-line", &[("cut.tle", &contents)]);
        assert!(matches!(
            find_in_file(&dir.file_path("cut.tle"), 25544),
            Err(SatDataError::NotInFile { .. })
        ));
    }

    #[test]
    fn non_numeric_catalog_field_is_skipped() {
        let contents = format!(
            "COMMENT BLOCK\n1 NOTES from the ground station\n2 NOTES continued\n{}",
            ISS
        );
        let dir = write_catalog("non-numeric", &[("mixed.tle", &contents)]);
        let tle = find_in_file(&dir.file_path("mixed.tle"), 25544).expect("scan failed");
        assert_eq!(tle.catnr, 25544);
    }

    #[test]
    fn truncated_final_group_is_not_found() {
        let partial = GEO
            .lines()
            .take(2)
            .fold(String::new(), |acc, l| acc + l + "\n");
        let dir = write_catalog("truncated", &[("cut.tle", &format!("{}{}", ISS, partial))]);
        assert!(matches!(
            find_in_file(&dir.file_path("cut.tle"), 33333),
            Err(SatDataError::NotInFile { .. })
        ));
    }

    #[test]
    fn carriage_return_endings_are_tolerated() {
        let contents = ISS.replace('\n', "\r\n");
        let dir = write_catalog("crlf", &[("dos.tle", &contents)]);
        let tle = find_in_file(&dir.file_path("dos.tle"), 25544).expect("scan failed");
        assert_eq!(tle.sat_name, "ISS (ZARYA)");
    }

    #[test]
    fn unopenable_file_is_reported() {
        let dir = TleDir::new(unique_temp_dir("no-such-dir"));
        assert!(matches!(
            find_in_file(&dir.file_path("absent.tle"), 25544),
            Err(SatDataError::FileUnreadable { .. })
        ));
    }

    #[test]
    fn open_reads_initialized_satellites() {
        let dir = write_catalog("end-to-end", &[("geo.tle", GEO), ("stations.tle", ISS)]);
        let catalog = Catalog::open(dir).expect("open failed");

        let sat = catalog.read_satellite(25544).expect("read failed");
        assert_eq!(sat.tle.catnr, 25544);
        assert_eq!(sat.otype, OrbitType::LowEarth);
        assert!(sat.alt > 300.0 && sat.alt < 400.0);

        assert!(matches!(
            catalog.read_satellite(99999),
            Err(SatDataError::NotInIndex(99999))
        ));
    }
}

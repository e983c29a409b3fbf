//! Catalog-number index over a directory of element files.

use crate::catalog;
use crate::config::TleDir;
use crate::error::{Result, SatDataError};
use crate::tle;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Maps catalog numbers to the name of the catalog file carrying them.
#[derive(Debug, Clone, Default)]
pub struct TleIndex {
    entries: HashMap<u32, String>,
}

impl TleIndex {
    /// Scans every `.tle` file under `dir`.
    ///
    /// Files are visited in sorted name order and the first file mentioning
    /// a catalog number keeps it, so repeated scans of the same directory
    /// resolve duplicates identically. Files that cannot be read are skipped
    /// with a warning; a missing directory is an error.
    pub fn scan(dir: &TleDir) -> Result<TleIndex> {
        let entries = fs::read_dir(dir.base()).map_err(|source| SatDataError::FileUnreadable {
            path: dir.base().to_path_buf(),
            source,
        })?;

        let mut names: Vec<String> = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!(
                        "skipping unreadable entry in {}: {}",
                        dir.base().display(),
                        err
                    );
                    continue;
                }
            };
            let path = entry.path();
            if path.extension().and_then(OsStr::to_str) != Some("tle") {
                continue;
            }
            if let Some(name) = path.file_name().and_then(OsStr::to_str) {
                names.push(name.to_owned());
            }
        }
        names.sort();

        let mut index = TleIndex::default();
        for name in &names {
            let path = dir.file_path(name);
            if let Err(err) = index.scan_file(&path, name) {
                log::warn!(
                    "skipping unreadable catalog file {}: {}",
                    path.display(),
                    err
                );
            }
        }
        log::info!(
            "indexed {} satellites from {} catalog files in {}",
            index.entries.len(),
            names.len(),
            dir.base().display()
        );
        Ok(index)
    }

    /// Records every catalog number in one file, keeping existing entries.
    fn scan_file(&mut self, path: &Path, name: &str) -> io::Result<()> {
        let file = File::open(path)?;
        let mut lines = BufReader::new(file).lines();
        while let Some([_, line1, _]) = catalog::next_group(&mut lines)? {
            if line1.len() < 7 {
                break;
            }
            if let Some(catnum) = tle::catalog_number(&line1) {
                self.entries
                    .entry(catnum)
                    .or_insert_with(|| name.to_owned());
            }
        }
        Ok(())
    }

    /// Name of the file holding the given catalog number. Paths are
    /// assembled by [`TleDir::file_path`].
    pub fn lookup(&self, catnum: u32) -> Option<&str> {
        self.entries.get(&catnum).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    const MOLNIYA: &str = "MOLNIYA TEST SAT
1 11111U 98054A   08264.40000000  .00000150  00000-0  00000-0 0  9991
2 11111  63.4000 245.0000 7222000 270.0000  14.0000  2.00600000 75008
";

    fn unique_temp_dir(test_name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        std::env::temp_dir().join(format!(
            "sattrack-lookup-{}-{}-{}",
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
    fn maps_each_number_to_the_first_file_in_sorted_order() {
        let dir = write_catalog(
            "sorted",
            &[
                ("b.tle", &format!("{}{}", ISS, GEO)),
                ("a.tle", GEO),
                ("notes.txt", MOLNIYA),
            ],
        );
        let index = TleIndex::scan(&dir).expect("scan failed");
        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup(33333), Some("a.tle"));
        assert_eq!(index.lookup(25544), Some("b.tle"));
        assert_eq!(index.lookup(11111), None);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TleDir::new(unique_temp_dir("missing"));
        assert!(matches!(
            TleIndex::scan(&dir),
            Err(SatDataError::FileUnreadable { .. })
        ));
    }

    #[test]
    fn malformed_group_stops_indexing_that_file() {
        let cut = format!("CUT OBJECT\n1 2\n2 2\n{}", ISS);
        let dir = write_catalog("malformed", &[("cut.tle", &cut), ("ok.tle", GEO)]);
        let index = TleIndex::scan(&dir).expect("scan failed");
        assert_eq!(index.lookup(25544), None);
        assert_eq!(index.lookup(33333), Some("ok.tle"));
    }

    #[test]
    fn empty_directory_yields_an_empty_index() {
        let dir = write_catalog("empty", &[]);
        let index = TleIndex::scan(&dir).expect("scan failed");
        assert!(index.is_empty());
    }
}

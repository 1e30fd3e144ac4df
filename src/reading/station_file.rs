//! Station identity and discovery of the split per-station files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Result};

/// Index written by the splitting step alongside the station files.
const STATION_INDEX_FILE: &str = "station.csv";

#[derive(Debug, Clone, PartialEq)]
/// A per-station hourly file. The station id is the file stem.
pub struct StationFile {
    pub station: String,
    pub path: PathBuf,
}

impl StationFile {
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;

        if file_name == STATION_INDEX_FILE {
            return None;
        }

        let station = file_name.strip_suffix(".csv")?;
        if station.is_empty() {
            return None;
        }

        Some(StationFile {
            station: station.to_string(),
            path: path.to_path_buf(),
        })
    }
}

/// Lists the station files in `data_dir`, sorted by path.
pub fn list_station_files(data_dir: &Path) -> Result<Vec<StationFile>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(data_dir)? {
        let path = entry?.path();

        if !path.is_file() {
            continue;
        }
        if let Some(file) = StationFile::from_path(&path) {
            files.push(file);
        }
    }

    if files.is_empty() {
        return Err(anyhow!(
            "No station files found in `{}`",
            data_dir.display()
        ));
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn should_take_station_from_stem() {
        let file = StationFile::from_path(Path::new("/data/BIL.csv")).unwrap();

        assert_eq!(file.station, "BIL");
        assert_eq!(file.path, PathBuf::from("/data/BIL.csv"));
    }

    #[test]
    fn should_skip_index_and_other_files() {
        assert!(StationFile::from_path(Path::new("/data/station.csv")).is_none());
        assert!(StationFile::from_path(Path::new("/data/notes.txt")).is_none());
        assert!(StationFile::from_path(Path::new("/data/.csv")).is_none());
    }

    #[test]
    fn should_list_sorted_station_files() {
        let dir = TempDir::new().unwrap();
        for name in ["GGW.csv", "BIL.csv", "station.csv", "readme.md"] {
            File::create(dir.path().join(name)).unwrap();
        }
        fs::create_dir(dir.path().join("nested.csv")).unwrap();

        let files = list_station_files(dir.path()).unwrap();
        let stations: Vec<&str> = files.iter().map(|f| f.station.as_str()).collect();

        assert_eq!(stations, vec!["BIL", "GGW"]);
    }

    #[test]
    fn should_fail_on_empty_directory() {
        let dir = TempDir::new().unwrap();

        assert!(list_station_files(dir.path()).is_err());
    }
}

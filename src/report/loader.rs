//! Report retrieval.
//!
//! A [`ReportSource`] fetches a named JSON resource and parses it into one of
//! the report shapes. Failures are typed (`Io` for retrieval, `Parse` for
//! malformed or schema-violating documents) and left to the view layer to
//! convert into a visible error state. No retry, no timeout.

use std::fs;
use std::io::{BufReader, Read};
use std::path::PathBuf;

use serde::de::DeserializeOwned;

use crate::errors::{DashboardError, Result};
use crate::report::{AreaReport, GlobalReport};

/// Resource name of the cross-area summary report.
pub const GLOBAL_REPORT: &str = "general.json";

pub trait ReportSource {
    /// Fetch the raw contents of a named resource.
    fn read(&self, resource: &str) -> Result<String>;

    fn load_global(&self, resource: &str) -> Result<GlobalReport> {
        parse_report(resource, &self.read(resource)?)
    }

    fn load_area(&self, resource: &str) -> Result<AreaReport> {
        parse_report(resource, &self.read(resource)?)
    }
}

fn parse_report<T: DeserializeOwned>(resource: &str, contents: &str) -> Result<T> {
    serde_json::from_str(contents).map_err(|source| DashboardError::Parse {
        path: PathBuf::from(resource),
        source,
    })
}

/// Reads reports from a data directory on the local filesystem.
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ReportSource for FileSource {
    fn read(&self, resource: &str) -> Result<String> {
        let path = self.root.join(resource);
        let file = fs::File::open(&path).map_err(|source| DashboardError::Io {
            path: path.clone(),
            source,
        })?;
        let mut reader = BufReader::new(file);
        let mut contents = String::new();
        reader
            .read_to_string(&mut contents)
            .map_err(|source| DashboardError::Io { path, source })?;
        Ok(contents)
    }
}

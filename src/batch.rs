// Batch module: the employee record type and loading a batch of them from
// a JSON file. Records are kept as opaque JSON objects so whatever the
// file holds is forwarded to the API unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up next to the executable when no path is given.
pub const DEFAULT_BATCH_FILE: &str = "employees.json";

/// One employee as read from the batch file. Only `email` is interpreted,
/// and only for reporting.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Employee(Map<String, Value>);

impl Employee {
    pub fn new(fields: Map<String, Value>) -> Self {
        Employee(fields)
    }

    /// The `email` field when it is present and a string.
    pub fn email(&self) -> Option<&str> {
        self.0.get("email").and_then(Value::as_str)
    }
}

/// Fatal errors raised while loading the batch. Nothing is submitted when
/// one of these occurs.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed batch in {}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot locate the running executable")]
    Executable(#[source] std::io::Error),
}

/// Parse `path` as a JSON array of employee objects, keeping file order.
pub fn load_batch(path: &Path) -> Result<Vec<Employee>, LoadError> {
    let data = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| LoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// `employees.json` in the directory holding the current executable.
pub fn default_batch_path() -> Result<PathBuf, LoadError> {
    let exe = std::env::current_exe().map_err(LoadError::Executable)?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(DEFAULT_BATCH_FILE))
}

//! YAML suite files.
//!
//! A suite names the test method its rows feed and lists the cases:
//!
//! ```yaml
//! method: LoginTest
//! cases:
//!   - definition: Invalid login
//!     throws: { type_name: ArgumentException }
//!     args: ["", "secret"]
//!   - definition: Adds two numbers
//!     returns: 3
//!     args: [1, 2]
//!   - definition: Greets
//!     expected: greets the user
//!     args: [Ada]
//! ```
//!
//! Each case states exactly one of `expected`, `returns` or `throws`.

use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::case::{Arguments, Expectation, Fault, TestCase};
use crate::errors::{CaseError, CaseResult};
use crate::value::Value;

/// A case as written in a suite file.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct CaseSpec {
    #[serde(default)]
    pub definition: String,
    pub expected: Option<String>,
    /// `returns: ~` is kept as `Some(Value::Nil)` so it can be rejected.
    #[serde(default, deserialize_with = "present")]
    pub returns: Option<Value>,
    pub throws: Option<Fault>,
    #[serde(default)]
    pub args: Vec<Value>,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
struct SuiteFile {
    #[serde(default)]
    method: Option<String>,
    #[serde(default)]
    cases: Vec<CaseSpec>,
}

/// A loaded suite.
#[derive(Debug, Clone)]
pub struct Suite {
    pub path: PathBuf,
    pub method: Option<String>,
    pub cases: Vec<TestCase>,
}

impl CaseSpec {
    /// Builds the case, or explains why the entry does not describe one.
    pub fn to_case(&self) -> Result<TestCase, String> {
        let expectation = match (&self.expected, &self.returns, &self.throws) {
            (Some(expected), None, None) => Expectation::Plain(expected.clone()),
            (None, Some(Value::Nil), None) => return Err("'returns' must not be null".into()),
            (None, Some(value), None) => Expectation::Returns(value.clone()),
            (None, None, Some(fault)) => Expectation::Throws(fault.clone()),
            (None, None, None) => {
                return Err("one of 'expected', 'returns' or 'throws' is required".into())
            }
            _ => return Err("only one of 'expected', 'returns' or 'throws' may be given".into()),
        };
        let arguments = Arguments::try_from(self.args.clone()).map_err(|e| e.to_string())?;
        Ok(TestCase::new(self.definition.clone(), expectation, arguments))
    }
}

/// Parses suite text. `path` is only used for error reporting.
pub fn parse_suite(path: &Path, text: &str) -> CaseResult<Suite> {
    let file: SuiteFile = serde_yaml::from_str(text).map_err(|source| CaseError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;
    let cases = file
        .cases
        .iter()
        .enumerate()
        .map(|(index, spec)| {
            spec.to_case().map_err(|reason| CaseError::Suite {
                path: path.to_path_buf(),
                index,
                reason,
            })
        })
        .collect::<CaseResult<Vec<_>>>()?;
    debug!(path = %path.display(), cases = cases.len(), "loaded suite");
    Ok(Suite {
        path: path.to_path_buf(),
        method: file.method.filter(|m| !m.is_empty()),
        cases,
    })
}

/// Reads and parses a suite file.
pub fn load_suite(path: &Path) -> CaseResult<Suite> {
    let text = fs::read_to_string(path).map_err(|source| CaseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_suite(path, &text)
}

/// Discovers all YAML files recursively under the given root directory,
/// in a stable order.
pub fn discover_suite_files<P: AsRef<Path>>(root: P) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_type().is_file()
                && e.path()
                    .extension()
                    .map(|ext| ext == "yaml" || ext == "yml")
                    .unwrap_or(false)
        })
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();
    files
}

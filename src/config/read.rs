//! Read configuration types.

use serde::Deserialize;

use crate::format::FormatKind;

/// Configuration for one multi-source table read.
///
/// Every field has a default, so an empty document is a valid config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReadConfig {
    /// Number of worker threads; 1 reads sequentially
    pub nproc: usize,
    /// Log each completed source at info level
    pub verbose: bool,
    /// Options forwarded to the table reader
    pub table: TableReadOptions,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            nproc: 1,
            verbose: false,
            table: TableReadOptions::default(),
        }
    }
}

impl ReadConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of worker threads.
    pub fn with_nproc(mut self, nproc: usize) -> Self {
        self.nproc = nproc;
        self
    }

    /// Set verbose progress logging.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the table options.
    pub fn with_table(mut self, table: TableReadOptions) -> Self {
        self.table = table;
        self
    }

    /// Parse a configuration from JSON.
    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Parse a configuration from YAML.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }
}

/// Options forwarded to every table read.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TableReadOptions {
    /// Explicit format; inferred from the first source when absent
    pub format: Option<FormatKind>,
    /// Field delimiter for CSV
    pub delimiter: char,
    /// Whether the first CSV row names the columns
    pub has_headers: bool,
}

impl Default for TableReadOptions {
    fn default() -> Self {
        Self {
            format: None,
            delimiter: ',',
            has_headers: true,
        }
    }
}

impl TableReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the explicit format.
    pub fn with_format(mut self, format: FormatKind) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }
}

//! Loading subject data from JSON and YAML files.

use std::fs::read_to_string;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use thiserror::Error;
use tracing::debug;
use varpath::Value;

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Option<DataFormat> {
        match path.extension()?.to_str()? {
            "json" => Some(DataFormat::Json),
            "yaml" | "yml" => Some(DataFormat::Yaml),
            _ => None,
        }
    }
}

/// Errors that occur while loading a data file.
#[derive(Debug, Error)]
pub enum DataError {
    /// File I/O error when reading the data file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No `--format` given and the extension is not recognized.
    #[error("cannot infer the format of '{path}', pass --format json or --format yaml")]
    UnknownFormat { path: PathBuf },

    /// Parse error with file location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
        content: String,
    },
}

/// Data file arguments shared by all commands.
#[derive(Debug, Args)]
pub struct DataArgs {
    /// Data file to resolve paths against (.json, .yaml, .yml)
    #[arg(short, long, env = "VARPATH_DATA")]
    pub data: PathBuf,

    /// Data format, inferred from the file extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<DataFormat>,
}

impl DataArgs {
    /// Read and parse the data file.
    pub fn load(&self) -> Result<Value, DataError> {
        let format = self
            .format
            .or_else(|| DataFormat::from_path(&self.data))
            .ok_or_else(|| DataError::UnknownFormat {
                path: self.data.clone(),
            })?;
        let content = read_to_string(&self.data).map_err(|source| DataError::Io {
            path: self.data.clone(),
            source,
        })?;
        debug!(path = %self.data.display(), ?format, bytes = content.len(), "loading data");
        parse_data(&self.data, content, format)
    }
}

/// Parse data file content in the given format.
pub fn parse_data(path: &Path, content: String, format: DataFormat) -> Result<Value, DataError> {
    let parsed = match format {
        DataFormat::Json => serde_json::from_str::<Value>(&content)
            .map_err(|e| (e.line(), e.column(), e.to_string())),
        DataFormat::Yaml => serde_yaml::from_str::<Value>(&content).map_err(|e| {
            let (line, column) = e
                .location()
                .map_or((1, 1), |location| (location.line(), location.column()));
            (line, column, e.to_string())
        }),
    };

    parsed.map_err(|(line, column, message)| DataError::Parse {
        path: path.to_path_buf(),
        line,
        column,
        message,
        content,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;
    use varpath::{Value, resolve};

    use super::{DataArgs, DataError, DataFormat, parse_data};

    fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            DataFormat::from_path("ctx.json".as_ref()),
            Some(DataFormat::Json)
        );
        assert_eq!(
            DataFormat::from_path("ctx.yml".as_ref()),
            Some(DataFormat::Yaml)
        );
        assert_eq!(DataFormat::from_path("ctx.toml".as_ref()), None);
        assert_eq!(DataFormat::from_path("ctx".as_ref()), None);
    }

    #[test]
    fn loads_json_file() {
        let file = temp_file(".json", r#"{"user": {"name": "Ada"}}"#);
        let args = DataArgs {
            data: file.path().to_path_buf(),
            format: None,
        };
        let subject = args.load().unwrap();
        assert_eq!(resolve(&subject, "user.name"), Some(Value::from("Ada")));
    }

    #[test]
    fn loads_yaml_file_with_explicit_format() {
        let file = temp_file(".txt", "user:\n  roles: [admin, dev]\n");
        let args = DataArgs {
            data: file.path().to_path_buf(),
            format: Some(DataFormat::Yaml),
        };
        let subject = args.load().unwrap();
        assert_eq!(resolve(&subject, "user.roles.1"), Some(Value::from("dev")));
    }

    #[test]
    fn unknown_extension_needs_format() {
        let file = temp_file(".txt", "{}");
        let args = DataArgs {
            data: file.path().to_path_buf(),
            format: None,
        };
        assert!(matches!(args.load(), Err(DataError::UnknownFormat { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let args = DataArgs {
            data: "does/not/exist.json".into(),
            format: None,
        };
        assert!(matches!(args.load(), Err(DataError::Io { .. })));
    }

    #[test]
    fn json_parse_error_carries_location() {
        let err = parse_data(
            "bad.json".as_ref(),
            "{\n  \"a\": ,\n}".to_string(),
            DataFormat::Json,
        )
        .unwrap_err();
        let DataError::Parse { line, .. } = err else {
            panic!("expected parse error, got {err:?}");
        };
        assert_eq!(line, 2);
    }

    #[test]
    fn yaml_scalar_keys_become_strings() {
        let subject = parse_data(
            "keys.yaml".as_ref(),
            "1: one\nfalse: off\n".to_string(),
            DataFormat::Yaml,
        )
        .unwrap();
        assert_eq!(subject.keys(), vec!["1", ""]);
        assert_eq!(resolve(&subject, "1"), Some(Value::from("one")));
    }
}

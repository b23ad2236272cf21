use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "ilphone";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_ENTITY_COLUMN: &str = "חפ";
pub const DEFAULT_PHONE_COLUMN: &str = "טלפון בעלים";
pub const DEFAULT_PROCESSED_PREFIX: &str = "processed_calls";
pub const DEFAULT_MERGED_PREFIX: &str = "merged_calls";
pub const DEFAULT_SPECIAL_PREFIX: &str = "special_format_entries";
pub const DEFAULT_EXAMPLES: usize = 3;
pub const MAX_EXAMPLES: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub columns: ColumnsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnsConfig {
    pub entity: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub prefix: String,
    pub merged_prefix: String,
    pub special_prefix: String,
    pub examples: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            columns: ColumnsConfig {
                entity: DEFAULT_ENTITY_COLUMN.to_string(),
                phone: DEFAULT_PHONE_COLUMN.to_string(),
            },
            output: OutputConfig {
                dir: PathBuf::from("."),
                prefix: DEFAULT_PROCESSED_PREFIX.to_string(),
                merged_prefix: DEFAULT_MERGED_PREFIX.to_string(),
                special_prefix: DEFAULT_SPECIAL_PREFIX.to_string(),
                examples: DEFAULT_EXAMPLES,
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid column name for {field}: must not be blank")]
    InvalidColumn { field: &'static str },
    #[error("columns.entity and columns.phone must differ: {0}")]
    DuplicateColumn(String),
    #[error("invalid output {field}: {value:?}")]
    InvalidPrefix { field: &'static str, value: String },
    #[error("invalid output.dir: must not be empty")]
    InvalidOutputDir,
    #[error("invalid output.examples value: {0}")]
    InvalidExamples(usize),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    columns: Option<ColumnsFile>,
    output: Option<OutputFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ColumnsFile {
    entity: Option<String>,
    phone: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputFile {
    dir: Option<PathBuf>,
    prefix: Option<String>,
    merged_prefix: Option<String>,
    special_prefix: Option<String>,
    examples: Option<usize>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(columns) = parsed.columns {
        if let Some(entity) = columns.entity {
            config.columns.entity = validate_column("columns.entity", entity)?;
        }
        if let Some(phone) = columns.phone {
            config.columns.phone = validate_column("columns.phone", phone)?;
        }
    }
    if config.columns.entity == config.columns.phone {
        return Err(ConfigError::DuplicateColumn(config.columns.entity));
    }

    if let Some(output) = parsed.output {
        if let Some(dir) = output.dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::InvalidOutputDir);
            }
            config.output.dir = dir;
        }
        if let Some(prefix) = output.prefix {
            config.output.prefix = validate_prefix("prefix", prefix)?;
        }
        if let Some(prefix) = output.merged_prefix {
            config.output.merged_prefix = validate_prefix("merged_prefix", prefix)?;
        }
        if let Some(prefix) = output.special_prefix {
            config.output.special_prefix = validate_prefix("special_prefix", prefix)?;
        }
        if let Some(examples) = output.examples {
            if examples > MAX_EXAMPLES {
                return Err(ConfigError::InvalidExamples(examples));
            }
            config.output.examples = examples;
        }
    }

    Ok(config)
}

fn validate_column(field: &'static str, value: String) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidColumn { field });
    }
    Ok(trimmed.to_string())
}

fn validate_prefix(field: &'static str, value: String) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.contains(['/', '\\']) || trimmed == "." || trimmed == ".." {
        return Err(ConfigError::InvalidPrefix { field, value });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{
        load, load_at_path, merge_config, ColumnsFile, ConfigError, ConfigFile, OutputFile,
        DEFAULT_PHONE_COLUMN,
    };
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            columns: Some(ColumnsFile {
                entity: Some(" company ".to_string()),
                phone: None,
            }),
            output: Some(OutputFile {
                dir: Some(PathBuf::from("out")),
                prefix: Some("phones".to_string()),
                merged_prefix: None,
                special_prefix: None,
                examples: Some(5),
            }),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.columns.entity, "company");
        assert_eq!(merged.columns.phone, DEFAULT_PHONE_COLUMN);
        assert_eq!(merged.output.dir, PathBuf::from("out"));
        assert_eq!(merged.output.prefix, "phones");
        assert_eq!(merged.output.merged_prefix, "merged_calls");
        assert_eq!(merged.output.examples, 5);
    }

    #[test]
    fn merge_config_rejects_blank_column() {
        let parsed = ConfigFile {
            columns: Some(ColumnsFile {
                entity: None,
                phone: Some("  ".to_string()),
            }),
            output: None,
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidColumn {
                field: "columns.phone"
            }
        ));
    }

    #[test]
    fn merge_config_rejects_same_column_twice() {
        let parsed = ConfigFile {
            columns: Some(ColumnsFile {
                entity: Some("id".to_string()),
                phone: Some("id".to_string()),
            }),
            output: None,
        };
        assert!(matches!(
            merge_config(parsed),
            Err(ConfigError::DuplicateColumn(_))
        ));
    }

    #[test]
    fn merge_config_rejects_prefix_with_separator() {
        let parsed = ConfigFile {
            columns: None,
            output: Some(OutputFile {
                prefix: Some("../escape".to_string()),
                ..OutputFile::default()
            }),
        };
        assert!(matches!(
            merge_config(parsed),
            Err(ConfigError::InvalidPrefix {
                field: "prefix",
                ..
            })
        ));
    }

    #[test]
    fn merge_config_rejects_too_many_examples() {
        let parsed = ConfigFile {
            columns: None,
            output: Some(OutputFile {
                examples: Some(1_000),
                ..OutputFile::default()
            }),
        };
        assert!(matches!(
            merge_config(parsed),
            Err(ConfigError::InvalidExamples(1_000))
        ));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
        assert!(load_at_path(&missing, false).expect("optional").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[columns]\nentity = \"id\"\nphone = \"phone\"\n[output]\nexamples = 0\n",
        )
        .expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.columns.entity, "id");
        assert_eq!(config.columns.phone, "phone");
        assert_eq!(config.output.examples, 0);
    }

    #[test]
    fn load_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "[columns]\nowner = \"id\"\n").expect("write config");

        let err = load(Some(path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}

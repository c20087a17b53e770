//! Benchmark table configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::adapters::StaticBenchmarkSource;
use crate::ports::BenchmarkSourceError;

/// Benchmark configuration
///
/// Without a `table_path` the built-in cross-industry table is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BenchmarkConfig {
    /// YAML file mapping axis ids to reference points
    pub table_path: Option<PathBuf>,
}

impl BenchmarkConfig {
    /// Builds the configured benchmark source.
    pub fn source(&self) -> Result<StaticBenchmarkSource, BenchmarkSourceError> {
        match &self.table_path {
            Some(path) => StaticBenchmarkSource::from_yaml_file(path),
            None => Ok(StaticBenchmarkSource::default()),
        }
    }

    /// Validate benchmark configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.table_path {
            if !path.is_file() {
                return Err(ValidationError::BenchmarkTableNotFound(path.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::BenchmarkTable;
    use std::io::Write;

    #[test]
    fn test_default_uses_built_in_table() {
        let config = BenchmarkConfig::default();
        assert!(config.validate().is_ok());

        let source = config.source().unwrap();
        assert_eq!(source.table(), BenchmarkTable::default_industry());
    }

    #[test]
    fn test_missing_table_file_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let config = BenchmarkConfig {
            table_path: Some(dir.path().join("missing.yaml")),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::BenchmarkTableNotFound(_))
        ));
    }

    #[test]
    fn test_table_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "culture:\n  industryAverage: 3.0\n  topPerformer: 5.0").unwrap();

        let config = BenchmarkConfig {
            table_path: Some(file.path().to_path_buf()),
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.source().unwrap().table().len(), 1);
    }
}

//! In-memory implementation of BenchmarkSource.
//!
//! Serves either the built-in cross-industry table or a table parsed once
//! from YAML. The YAML maps axis ids to reference points:
//!
//! ```yaml
//! processes:
//!   industryAverage: 3.5
//!   topPerformer: 5.5
//! aiMaturity:
//!   industryAverage: 2.2
//!   topPerformer: 4.5
//! ```

use std::path::Path;

use async_trait::async_trait;

use crate::domain::analysis::BenchmarkTable;
use crate::ports::{BenchmarkSource, BenchmarkSourceError};

/// BenchmarkSource backed by a table held in memory.
#[derive(Debug, Clone)]
pub struct StaticBenchmarkSource {
    table: BenchmarkTable,
}

impl Default for StaticBenchmarkSource {
    fn default() -> Self {
        Self::new(BenchmarkTable::default_industry().clone())
    }
}

impl StaticBenchmarkSource {
    /// Serves the given table.
    pub fn new(table: BenchmarkTable) -> Self {
        Self { table }
    }

    /// Parses a YAML table.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, BenchmarkSourceError> {
        let table: BenchmarkTable =
            serde_yaml::from_str(yaml).map_err(|e| BenchmarkSourceError::Parse(e.to_string()))?;
        table
            .validate()
            .map_err(|e| BenchmarkSourceError::Parse(e.to_string()))?;
        tracing::debug!("Parsed benchmark table with {} axes", table.len());
        Ok(Self::new(table))
    }

    /// Reads and parses a YAML table from disk.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, BenchmarkSourceError> {
        let path = path.as_ref();
        tracing::debug!("Loading benchmark table from {}", path.display());
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            tracing::error!("Failed to read benchmark table {}: {}", path.display(), e);
            BenchmarkSourceError::Unavailable(format!("{}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// The table this source serves.
    pub fn table(&self) -> &BenchmarkTable {
        &self.table
    }
}

#[async_trait]
impl BenchmarkSource for StaticBenchmarkSource {
    async fn load_table(&self) -> Result<BenchmarkTable, BenchmarkSourceError> {
        Ok(self.table.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::AxisId;
    use std::io::Write;

    const TWO_AXES: &str = r#"
processes:
  industryAverage: 3.5
  topPerformer: 5.5
aiMaturity:
  industryAverage: 2.0
  topPerformer: 4.0
"#;

    #[tokio::test]
    async fn default_source_serves_built_in_table() {
        let source = StaticBenchmarkSource::default();
        let table = source.load_table().await.unwrap();

        assert_eq!(&table, BenchmarkTable::default_industry());
        assert_eq!(table.len(), AxisId::all().len());
    }

    #[test]
    fn parses_camel_case_yaml() {
        let source = StaticBenchmarkSource::from_yaml_str(TWO_AXES).unwrap();
        let table = source.table();

        assert_eq!(table.len(), 2);
        let reference = table.get(AxisId::AiMaturity).unwrap();
        assert_eq!(reference.industry_average, 2.0);
        assert_eq!(reference.top_performer, 4.0);
        assert!(table.get(AxisId::Culture).is_none());
    }

    #[test]
    fn rejects_unknown_axis() {
        let yaml = "quantumReadiness:\n  industryAverage: 1.0\n  topPerformer: 2.0\n";
        let result = StaticBenchmarkSource::from_yaml_str(yaml);
        assert!(matches!(result, Err(BenchmarkSourceError::Parse(_))));
    }

    #[test]
    fn rejects_negative_reference() {
        let yaml = "culture:\n  industryAverage: -1.0\n  topPerformer: 2.0\n";
        let result = StaticBenchmarkSource::from_yaml_str(yaml);
        assert!(matches!(result, Err(BenchmarkSourceError::Parse(_))));
    }

    #[tokio::test]
    async fn loads_table_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_AXES.as_bytes()).unwrap();

        let source = StaticBenchmarkSource::from_yaml_file(file.path()).unwrap();
        let table = source.load_table().await.unwrap();

        assert_eq!(table.get(AxisId::Processes).unwrap().industry_average, 3.5);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let result = StaticBenchmarkSource::from_yaml_file(dir.path().join("absent.yaml"));
        assert!(matches!(result, Err(BenchmarkSourceError::Unavailable(_))));
    }
}

//! Financial projection configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::InvestmentCategory;

/// Financial configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FinancialConfig {
    /// Budget lines summed into the baseline investment range
    #[serde(default = "InvestmentCategory::default_catalog")]
    pub investment_categories: Vec<InvestmentCategory>,
}

impl FinancialConfig {
    /// Validate financial configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.investment_categories.is_empty() {
            return Err(ValidationError::NoInvestmentCategories);
        }
        for (index, category) in self.investment_categories.iter().enumerate() {
            category
                .validate()
                .map_err(|e| ValidationError::InvalidInvestmentCategory {
                    name: category
                        .name
                        .clone()
                        .unwrap_or_else(|| format!("#{}", index)),
                    reason: e.to_string(),
                })?;
        }
        Ok(())
    }
}

impl Default for FinancialConfig {
    fn default() -> Self {
        Self {
            investment_categories: InvestmentCategory::default_catalog(),
        }
    }
}

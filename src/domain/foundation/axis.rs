//! The fixed catalog of transformation axes and business areas.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Highest maturity level any axis or area can be scored at.
pub const MAX_SUPPORTED_LEVEL: u8 = 7;

/// The 7 digital-transformation axes of the Digital Readiness assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisId {
    Processes,
    DigitalProducts,
    BusinessModels,
    DataManagement,
    Culture,
    Cybersecurity,
    AiMaturity,
}

impl AxisId {
    /// Returns all axes in canonical order.
    pub fn all() -> &'static [AxisId] {
        &[
            AxisId::Processes,
            AxisId::DigitalProducts,
            AxisId::BusinessModels,
            AxisId::DataManagement,
            AxisId::Culture,
            AxisId::Cybersecurity,
            AxisId::AiMaturity,
        ]
    }

    /// Returns the wire identifier used by the report-data layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            AxisId::Processes => "processes",
            AxisId::DigitalProducts => "digitalProducts",
            AxisId::BusinessModels => "businessModels",
            AxisId::DataManagement => "dataManagement",
            AxisId::Culture => "culture",
            AxisId::Cybersecurity => "cybersecurity",
            AxisId::AiMaturity => "aiMaturity",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            AxisId::Processes => "Digital Processes",
            AxisId::DigitalProducts => "Digital Products",
            AxisId::BusinessModels => "Business Models",
            AxisId::DataManagement => "Data Management",
            AxisId::Culture => "Culture",
            AxisId::Cybersecurity => "Cybersecurity",
            AxisId::AiMaturity => "AI Maturity",
        }
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AxisId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AxisId::all()
            .iter()
            .copied()
            .find(|axis| axis.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("axis_id", format!("unknown axis '{}'", s))
            })
    }
}

/// The 9 business areas scored within every axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BusinessArea {
    Sales,
    Marketing,
    Technology,
    Purchasing,
    Logistics,
    Production,
    Quality,
    Finance,
    HumanResources,
}

impl BusinessArea {
    /// Returns all areas in canonical order.
    pub fn all() -> &'static [BusinessArea] {
        &[
            BusinessArea::Sales,
            BusinessArea::Marketing,
            BusinessArea::Technology,
            BusinessArea::Purchasing,
            BusinessArea::Logistics,
            BusinessArea::Production,
            BusinessArea::Quality,
            BusinessArea::Finance,
            BusinessArea::HumanResources,
        ]
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            BusinessArea::Sales => "Sales",
            BusinessArea::Marketing => "Marketing",
            BusinessArea::Technology => "Technology",
            BusinessArea::Purchasing => "Purchasing",
            BusinessArea::Logistics => "Logistics",
            BusinessArea::Production => "Production",
            BusinessArea::Quality => "Quality",
            BusinessArea::Finance => "Finance",
            BusinessArea::HumanResources => "Human Resources",
        }
    }
}

impl fmt::Display for BusinessArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

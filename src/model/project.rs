//! Investment project records

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityDescriptor};

/// Remote table backing investment projects
pub const PROJECT_TABLE: &str = "investment_projects";

static PROJECT_DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    name: "InvestmentProject",
    table: Some(PROJECT_TABLE),
    id_prefix: "proj",
    aliases: &[],
};

/// Project lifecycle status
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Proposed,
    UnderReview,
    Approved,
    InProgress,
    Completed,
}

/// A proposed or running resilience investment against one asset
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct InvestmentProject {
    /// Record id; assigned on create when empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Asset the project targets
    #[serde(default)]
    pub asset_id: String,

    #[serde(default)]
    pub status: ProjectStatus,

    /// Estimated cost in dollars
    #[serde(default)]
    pub cost: f64,

    /// Expected risk reduction, 0-1
    #[serde(default)]
    pub risk_reduction_impact: f64,

    /// Share of served population benefiting, 0-1
    #[serde(default)]
    pub population_benefit: f64,

    /// Equity weighting, 0-1
    #[serde(default)]
    pub equity_score: f64,

    #[serde(default)]
    pub cost_benefit_ratio: f64,

    /// Rank within the current prioritization, 1 = highest
    #[serde(default)]
    pub priority_rank: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Entity for InvestmentProject {
    fn descriptor() -> &'static EntityDescriptor {
        &PROJECT_DESCRIPTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_uses_snake_case_wire_names() {
        let status = serde_json::to_value(ProjectStatus::UnderReview).unwrap();
        assert_eq!(status, serde_json::json!("under_review"));

        let parsed: ProjectStatus = serde_json::from_value(serde_json::json!("in_progress")).unwrap();
        assert_eq!(parsed, ProjectStatus::InProgress);
    }
}

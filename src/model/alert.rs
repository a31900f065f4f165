//! Risk alert records
//!
//! Alerts are local-only by construction: the descriptor maps them to no
//! remote table, so they are always served from the seeded store regardless
//! of backend configuration.

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityDescriptor};

static ALERT_DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    name: "RiskAlert",
    table: None,
    id_prefix: "alert",
    aliases: &[],
};

/// Alert severity
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Low,
    Medium,
    High,
    Critical,
}

/// Whether an alert still demands attention
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    #[default]
    Active,
    Resolved,
}

/// Point the alert applies to, with a human-readable region label
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Geolocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(default)]
    pub region: String,
}

/// A live-monitoring alert tied to a risk change or external signal
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RiskAlert {
    /// Record id; assigned on create when empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub severity: Severity,

    #[serde(default)]
    pub status: AlertStatus,

    /// Alert category label (e.g. "weather", "public_concern", "infrastructure")
    #[serde(default)]
    pub alert_category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geolocation: Option<Geolocation>,

    #[serde(default)]
    pub previous_risk_score: f64,

    #[serde(default)]
    pub new_risk_score: f64,

    /// Delta between new and previous score
    #[serde(default)]
    pub risk_score_change: f64,

    #[serde(default)]
    pub affected_population: u64,

    /// Ordered response playbook for operators
    #[serde(default)]
    pub recommended_actions: Vec<String>,

    /// Feed or system the alert originated from
    #[serde(default)]
    pub data_source: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Entity for RiskAlert {
    fn descriptor() -> &'static EntityDescriptor {
        &ALERT_DESCRIPTOR
    }
}

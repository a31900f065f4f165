//! Infrastructure asset records
//!
//! A scored piece of public infrastructure: where it is, who it serves, and
//! how exposed it is to climate hazards.

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityDescriptor, FieldAlias};

/// Remote table backing infrastructure assets
pub const ASSET_TABLE: &str = "infrastructure_assets";

static ASSET_DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    name: "InfrastructureAsset",
    table: Some(ASSET_TABLE),
    id_prefix: "asset",
    // API-facing lat/lng map to latitude/longitude columns on the backend
    aliases: &[
        FieldAlias {
            api: "lat",
            column: "latitude",
        },
        FieldAlias {
            api: "lng",
            column: "longitude",
        },
    ],
};

/// Whether a risk score reflects today's exposure or a projected future one
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimeHorizon {
    /// Present-day exposure
    #[default]
    Current,
    /// Projected future exposure
    Projected,
}

/// Breakdown of the aggregate risk score into named sub-risks (percentages)
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ClimateRisks {
    #[serde(default)]
    pub wildfire_risk: f64,
    #[serde(default)]
    pub flood_risk: f64,
    #[serde(default)]
    pub heat_risk: f64,
    #[serde(default)]
    pub storm_risk: f64,
}

/// A tracked piece of public infrastructure with its climate-risk profile
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct InfrastructureAsset {
    /// Record id; assigned on create when empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Asset category label (e.g. "Bridge", "Electrical Substation")
    #[serde(default)]
    pub asset_type: String,

    #[serde(default)]
    pub region: String,

    #[serde(default)]
    pub municipality: String,

    /// Latitude; map placement requires both coordinates to be finite
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    /// Longitude; map placement requires both coordinates to be finite
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,

    #[serde(default)]
    pub time_horizon: TimeHorizon,

    /// Aggregate risk score, 0-100
    #[serde(default)]
    pub overall_risk_score: f64,

    #[serde(default)]
    pub climate_risks: ClimateRisks,

    #[serde(default)]
    pub population_served: u64,

    /// Equity weighting, 0-1
    #[serde(default)]
    pub equity_score: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl InfrastructureAsset {
    /// Whether the asset can be placed on a map
    ///
    /// Both coordinates must resolve to finite numbers. Assets that fail this
    /// are hidden from map views only, never from list views.
    pub fn has_coordinates(&self) -> bool {
        matches!((self.lat, self.lng), (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite())
    }
}

impl Entity for InfrastructureAsset {
    fn descriptor() -> &'static EntityDescriptor {
        &ASSET_DESCRIPTOR
    }
}

//! Simulated external actions
//!
//! Name-dispatched stand-ins for the real weather, social-sentiment, and
//! rescoring integrations, used to make the live-monitoring demo feel
//! dynamic. Each recognized action fabricates an alert in the local store or
//! nudges a risk score; unrecognized names are a no-op success, treated as a
//! forward-compatible extension point rather than a fault.

use serde_json::Value;
use tracing::{debug, info};

use crate::entity::generate_id;
use crate::error::Result;
use crate::model::{now_iso, AlertStatus, Geolocation, RiskAlert, Severity};
use crate::store::LocalStore;

/// Maximum value a risk score can be nudged to
const RISK_SCORE_CEILING: f64 = 100.0;

/// The fixed set of recognized simulated actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatedAction {
    /// Fabricate a weather alert
    FetchWeatherAlerts,
    /// Fabricate a public-concern alert from social signals
    AnalyzeSocialMedia,
    /// Bump the first asset's risk score, clamped to 100
    UpdateRiskScores,
}

impl SimulatedAction {
    /// Resolve an action name case- and punctuation-insensitively
    ///
    /// `fetchWeatherAlerts`, `fetch_weather_alerts`, and `Fetch Weather
    /// Alerts` all resolve to the same action.
    pub fn parse(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "fetchweatheralerts" => Some(Self::FetchWeatherAlerts),
            "analyzesocialmedia" => Some(Self::AnalyzeSocialMedia),
            "updateriskscores" => Some(Self::UpdateRiskScores),
            _ => None,
        }
    }
}

/// Result of an action invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Always true: unknown actions succeed as no-ops
    pub ok: bool,
    /// Number of records the action created, when it creates any
    pub created: Option<u32>,
}

impl ActionOutcome {
    fn noop() -> Self {
        Self {
            ok: true,
            created: None,
        }
    }

    fn created(count: u32) -> Self {
        Self {
            ok: true,
            created: Some(count),
        }
    }
}

/// Invoke a simulated action by name against the local store
pub fn invoke(store: &LocalStore, name: &str) -> Result<ActionOutcome> {
    let Some(action) = SimulatedAction::parse(name) else {
        debug!(name, "unrecognized simulated action; treating as no-op");
        return Ok(ActionOutcome::noop());
    };

    match action {
        SimulatedAction::FetchWeatherAlerts => prepend_alert(store, weather_alert()),
        SimulatedAction::AnalyzeSocialMedia => prepend_alert(store, social_alert()),
        SimulatedAction::UpdateRiskScores => bump_first_asset_score(store),
    }
}

fn prepend_alert(store: &LocalStore, alert: RiskAlert) -> Result<ActionOutcome> {
    let mut data = store.load()?;
    info!(id = %alert.id, category = %alert.alert_category, "fabricating alert");
    data.collection_mut("RiskAlert")
        .insert(0, serde_json::to_value(alert)?);
    store.save(&data)?;
    Ok(ActionOutcome::created(1))
}

fn bump_first_asset_score(store: &LocalStore) -> Result<ActionOutcome> {
    let mut data = store.load()?;
    if let Some(asset) = data.collection_mut("InfrastructureAsset").first_mut() {
        if let Some(obj) = asset.as_object_mut() {
            let previous = obj
                .get("overall_risk_score")
                .and_then(Value::as_f64)
                .unwrap_or(0.0);
            let next = (previous + 5.0).min(RISK_SCORE_CEILING);
            obj.insert("overall_risk_score".to_string(), Value::from(next));
            info!(previous, next, "bumped first asset risk score");
        }
    }
    store.save(&data)?;
    Ok(ActionOutcome::noop())
}

fn weather_alert() -> RiskAlert {
    RiskAlert {
        id: generate_id("alert"),
        title: "Winter Storm Advisory — Prairie Region".to_string(),
        description: "ECCC issued a winter storm advisory. Monitor road access and backup \
                      power readiness."
            .to_string(),
        severity: Severity::Medium,
        status: AlertStatus::Active,
        alert_category: "weather".to_string(),
        geolocation: Some(Geolocation {
            lat: None,
            lng: None,
            region: "Prairie Region".to_string(),
        }),
        previous_risk_score: 0.0,
        new_risk_score: 0.0,
        risk_score_change: 7.0,
        affected_population: 18_000,
        recommended_actions: vec![
            "Monitor road access on affected corridors".to_string(),
            "Verify backup power readiness".to_string(),
        ],
        data_source: "Environment Canada (demo)".to_string(),
        issued_at: Some(now_iso()),
        updated_at: None,
    }
}

fn social_alert() -> RiskAlert {
    RiskAlert {
        id: generate_id("alert"),
        title: "Public Concern Alert — Transit Cooling Centres".to_string(),
        description: "Social signals indicate rising concern about heat impacts and cooling \
                      centre access."
            .to_string(),
        severity: Severity::High,
        status: AlertStatus::Active,
        alert_category: "public_concern".to_string(),
        geolocation: Some(Geolocation {
            lat: None,
            lng: None,
            region: "Urban Corridor".to_string(),
        }),
        previous_risk_score: 0.0,
        new_risk_score: 0.0,
        risk_score_change: 12.0,
        affected_population: 52_000,
        recommended_actions: vec![
            "Increase cooling-centre capacity messaging".to_string(),
            "Coordinate with public health partners".to_string(),
        ],
        data_source: "Social Signals (demo)".to_string(),
        issued_at: Some(now_iso()),
        updated_at: None,
    }
}

//! Seed fixtures for the local store
//!
//! Demo dataset covering ten scored assets across Canadian regions, three
//! investment projects, and three live alerts. Written on first access and
//! used to repair emptied collections.

use serde_json::Value;

use crate::model::{
    now_iso, AlertStatus, ClimateRisks, Geolocation, InfrastructureAsset, InvestmentProject,
    ProjectStatus, RiskAlert, Severity, TimeHorizon,
};

use super::{StoreData, SCHEMA_VERSION};

/// Build a fully seeded store at the current schema version
pub(super) fn seed_store() -> StoreData {
    let ts = now_iso();

    let mut store = StoreData::empty(SCHEMA_VERSION);
    store.set_collection(
        "InfrastructureAsset",
        to_values(seed_assets(&ts)),
    );
    store.set_collection("InvestmentProject", to_values(seed_projects(&ts)));
    store.set_collection("RiskAlert", to_values(seed_alerts(&ts)));
    store
}

fn to_values<T: serde::Serialize>(records: Vec<T>) -> Vec<Value> {
    records
        .into_iter()
        .map(|r| serde_json::to_value(r).expect("seed records serialize"))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn asset(
    id: &str,
    name: &str,
    asset_type: &str,
    region: &str,
    municipality: &str,
    coords: (f64, f64),
    overall_risk_score: f64,
    risks: [f64; 4],
    population_served: u64,
    equity_score: f64,
    ts: &str,
) -> InfrastructureAsset {
    let [wildfire_risk, flood_risk, heat_risk, storm_risk] = risks;
    InfrastructureAsset {
        id: id.to_string(),
        name: name.to_string(),
        asset_type: asset_type.to_string(),
        region: region.to_string(),
        municipality: municipality.to_string(),
        lat: Some(coords.0),
        lng: Some(coords.1),
        time_horizon: TimeHorizon::Current,
        overall_risk_score,
        climate_risks: ClimateRisks {
            wildfire_risk,
            flood_risk,
            heat_risk,
            storm_risk,
        },
        population_served,
        equity_score,
        updated_at: Some(ts.to_string()),
    }
}

fn seed_assets(ts: &str) -> Vec<InfrastructureAsset> {
    vec![
        asset(
            "asset_01",
            "North Substation A",
            "Electrical Substation",
            "Ontario",
            "Brampton",
            (43.7315, -79.7624),
            72.0,
            [12.0, 65.0, 54.0, 78.0],
            125_000,
            0.62,
            ts,
        ),
        asset(
            "asset_02",
            "Trans-Canada Highway Bridge — Calgary Section",
            "Bridge",
            "Alberta",
            "Calgary",
            (51.0447, -114.0719),
            83.0,
            [28.0, 44.0, 61.0, 32.0],
            125_000,
            0.58,
            ts,
        ),
        asset(
            "asset_03",
            "Metro Vancouver — Pumping Station 7",
            "Water Pump Station",
            "British Columbia",
            "Vancouver",
            (49.2827, -123.1207),
            58.0,
            [9.0, 52.0, 33.0, 48.0],
            210_000,
            0.49,
            ts,
        ),
        asset(
            "asset_04",
            "Downtown Toronto — Transit Hub",
            "Transit Station",
            "Ontario",
            "Toronto",
            (43.6532, -79.3832),
            49.0,
            [3.0, 39.0, 44.0, 41.0],
            420_000,
            0.67,
            ts,
        ),
        asset(
            "asset_05",
            "Halifax Harbour — Coastal Protection Segment",
            "Coastal Barrier",
            "Nova Scotia",
            "Halifax",
            (44.6488, -63.5752),
            64.0,
            [6.0, 71.0, 21.0, 69.0],
            98_000,
            0.44,
            ts,
        ),
        asset(
            "asset_06",
            "Montréal — Hospital District Power Feed",
            "Electrical Feeder",
            "Quebec",
            "Montréal",
            (45.5017, -73.5673),
            57.0,
            [4.0, 42.0, 55.0, 28.0],
            150_000,
            0.72,
            ts,
        ),
        asset(
            "asset_07",
            "Winnipeg — Water Treatment Intake",
            "Water Treatment Plant",
            "Manitoba",
            "Winnipeg",
            (49.8951, -97.1384),
            46.0,
            [10.0, 31.0, 49.0, 35.0],
            70_500,
            0.51,
            ts,
        ),
        asset(
            "asset_08",
            "Saskatoon — Rail Junction",
            "Rail",
            "Saskatchewan",
            "Saskatoon",
            (52.1332, -106.67),
            52.0,
            [18.0, 26.0, 50.0, 30.0],
            64_000,
            0.39,
            ts,
        ),
        asset(
            "asset_09",
            "St. John's — Emergency Operations Centre",
            "EOC",
            "Newfoundland and Labrador",
            "St. John's",
            (47.5615, -52.7126),
            60.0,
            [2.0, 55.0, 18.0, 74.0],
            21_000,
            0.46,
            ts,
        ),
        asset(
            "asset_10",
            "Ottawa — Government Services Data Node",
            "Data Centre",
            "Ontario",
            "Ottawa",
            (45.4215, -75.6972),
            41.0,
            [3.0, 29.0, 36.0, 27.0],
            300_000,
            0.63,
            ts,
        ),
    ]
}

fn seed_projects(ts: &str) -> Vec<InvestmentProject> {
    vec![
        InvestmentProject {
            id: "proj_01".to_string(),
            title: "Bridge Deck Drainage Retrofit".to_string(),
            description: "Reduce flood exposure and icing risk on critical corridor.".to_string(),
            asset_id: "asset_02".to_string(),
            status: ProjectStatus::UnderReview,
            cost: 1_200_000.0,
            risk_reduction_impact: 0.78,
            population_benefit: 0.62,
            equity_score: 0.41,
            cost_benefit_ratio: 1.9,
            priority_rank: 1,
            updated_at: Some(ts.to_string()),
        },
        InvestmentProject {
            id: "proj_02".to_string(),
            title: "Substation Flood Barrier + SCADA Hardening".to_string(),
            description: "Add perimeter protection and improve sensor redundancy.".to_string(),
            asset_id: "asset_01".to_string(),
            status: ProjectStatus::Approved,
            cost: 850_000.0,
            risk_reduction_impact: 0.66,
            population_benefit: 0.70,
            equity_score: 0.55,
            cost_benefit_ratio: 1.6,
            priority_rank: 2,
            updated_at: Some(ts.to_string()),
        },
        InvestmentProject {
            id: "proj_03".to_string(),
            title: "Coastal Surge Gate Upgrade".to_string(),
            description: "Mitigate surge risk and extend lifespan of coastal barrier segment."
                .to_string(),
            asset_id: "asset_05".to_string(),
            status: ProjectStatus::Proposed,
            cost: 2_300_000.0,
            risk_reduction_impact: 0.72,
            population_benefit: 0.48,
            equity_score: 0.43,
            cost_benefit_ratio: 1.3,
            priority_rank: 3,
            updated_at: Some(ts.to_string()),
        },
    ]
}

fn seed_alerts(ts: &str) -> Vec<RiskAlert> {
    vec![
        RiskAlert {
            id: "alert_01".to_string(),
            title: "Rapid Risk Increase — Trans-Canada Highway Bridge (Calgary Section)"
                .to_string(),
            description: "Risk score increased due to multiple active alerts and short-term \
                          forecast conditions. Immediate attention recommended."
                .to_string(),
            severity: Severity::High,
            status: AlertStatus::Active,
            alert_category: "infrastructure".to_string(),
            geolocation: Some(Geolocation {
                lat: Some(51.0447),
                lng: Some(-114.0719),
                region: "Calgary, Alberta".to_string(),
            }),
            previous_risk_score: 68.0,
            new_risk_score: 83.0,
            risk_score_change: 15.0,
            affected_population: 125_000,
            recommended_actions: vec![
                "Activate emergency response readiness team".to_string(),
                "Inspect drainage + expansion joints".to_string(),
                "Coordinate with municipal traffic management".to_string(),
            ],
            data_source: "ClimateReady Signals".to_string(),
            issued_at: Some(ts.to_string()),
            updated_at: None,
        },
        RiskAlert {
            id: "alert_02".to_string(),
            title: "Public Concern Alert — Calgary".to_string(),
            description: "Online discussions indicate increased concern related to heat impacts \
                          and vulnerable populations."
                .to_string(),
            severity: Severity::High,
            status: AlertStatus::Active,
            alert_category: "public_concern".to_string(),
            geolocation: Some(Geolocation {
                lat: Some(51.0447),
                lng: Some(-114.0719),
                region: "Calgary, Alberta".to_string(),
            }),
            previous_risk_score: 0.0,
            new_risk_score: 0.0,
            risk_score_change: 0.0,
            affected_population: 98_000,
            recommended_actions: vec![
                "Increase cooling-centre capacity messaging".to_string(),
                "Coordinate with public health partners".to_string(),
            ],
            data_source: "Social Signals (demo)".to_string(),
            issued_at: Some(ts.to_string()),
            updated_at: None,
        },
        RiskAlert {
            id: "alert_03".to_string(),
            title: "Heat Advisory — Metro Vancouver".to_string(),
            description: "Prolonged heat event expected; elevated heat-stress risk for \
                          vulnerable populations."
                .to_string(),
            severity: Severity::Medium,
            status: AlertStatus::Active,
            alert_category: "weather".to_string(),
            geolocation: Some(Geolocation {
                lat: Some(49.2827),
                lng: Some(-123.1207),
                region: "Vancouver, British Columbia".to_string(),
            }),
            previous_risk_score: 0.0,
            new_risk_score: 0.0,
            risk_score_change: 0.0,
            affected_population: 50_000,
            recommended_actions: vec![
                "Coordinate transit cooling measures".to_string(),
                "Monitor water demand + pump station loads".to_string(),
            ],
            data_source: "Environment Canada (demo)".to_string(),
            issued_at: Some(ts.to_string()),
            updated_at: None,
        },
    ]
}

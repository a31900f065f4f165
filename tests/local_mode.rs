//! End-to-end coverage of the local-fixture mode through the public client

use std::sync::Arc;

use serde_json::json;

use resilientgov_data::store::{FileBackend, StorageBackend, STORAGE_KEY};
use resilientgov_data::{DataClient, RemoteConfig, Where};

#[tokio::test]
async fn top_risk_assets_come_back_in_descending_score_order() {
    let client = DataClient::in_memory();
    let top = client
        .assets()
        .list(Some("-overall_risk_score"), Some(3))
        .await
        .unwrap();

    assert_eq!(top.len(), 3);
    assert_eq!(top[0].id, "asset_02");
    assert!(top[0].overall_risk_score >= top[1].overall_risk_score);
    assert!(top[1].overall_risk_score >= top[2].overall_risk_score);
}

#[tokio::test]
async fn created_project_is_immediately_listed_with_fresh_id() {
    let client = DataClient::in_memory();
    let created = client
        .projects()
        .create(resilientgov_data::InvestmentProject {
            title: "Culvert Expansion Program".to_string(),
            asset_id: "asset_07".to_string(),
            cost: 400_000.0,
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(created.id.starts_with("proj_"));
    assert!(created.updated_at.is_some());

    let listed = client.projects().list(None, None).await.unwrap();
    assert_eq!(listed.len(), 4);
    assert_eq!(listed[0].id, created.id);
}

#[tokio::test]
async fn updating_one_field_leaves_siblings_alone() {
    let client = DataClient::in_memory();
    let before = client
        .assets()
        .filter(&Where::new().eq("id", "asset_01"), None, None)
        .await
        .unwrap()
        .remove(0);

    client
        .assets()
        .update("asset_01", json!({ "overall_risk_score": 90 }))
        .await
        .unwrap();

    let after = client
        .assets()
        .filter(&Where::new().eq("id", "asset_01"), None, None)
        .await
        .unwrap()
        .remove(0);

    assert_eq!(after.overall_risk_score, 90.0);
    assert_eq!(after.name, before.name);
    assert_eq!(after.region, before.region);
    assert_eq!(after.climate_risks, before.climate_risks);
    assert_eq!(after.population_served, before.population_served);
}

#[tokio::test]
async fn severity_membership_filter_excludes_lower_grades() {
    let client = DataClient::in_memory();
    let urgent = client
        .alerts()
        .filter(&Where::new().any("severity", ["high", "critical"]), None, None)
        .await
        .unwrap();

    assert_eq!(urgent.len(), 2);
    assert!(urgent.iter().all(|a| a.alert_category != "weather"));
}

#[tokio::test]
async fn weather_action_feeds_the_alert_list() {
    let client = DataClient::in_memory();

    let outcome = client.invoke("fetch_weather_alerts").await.unwrap();
    assert!(outcome.ok);
    assert_eq!(outcome.created, Some(1));

    let alerts = client.alerts().list(None, None).await.unwrap();
    assert_eq!(alerts.len(), 4);
    assert_eq!(alerts[0].alert_category, "weather");

    // Assets and projects are untouched
    assert_eq!(client.assets().list(None, None).await.unwrap().len(), 10);
    assert_eq!(client.projects().list(None, None).await.unwrap().len(), 3);
}

#[tokio::test]
async fn file_backed_store_survives_client_restarts() {
    let dir = tempfile::tempdir().unwrap();

    let backend = Arc::new(FileBackend::new(dir.path()).unwrap());
    let client = DataClient::new(&RemoteConfig::disabled(), backend.clone());
    client
        .assets()
        .update("asset_03", json!({ "overall_risk_score": 61 }))
        .await
        .unwrap();
    let raw_before = backend.read(STORAGE_KEY).unwrap().unwrap();

    // A fresh client over the same directory sees the same bytes and data
    let backend = Arc::new(FileBackend::new(dir.path()).unwrap());
    let client = DataClient::new(&RemoteConfig::disabled(), backend.clone());
    let reloaded = client
        .assets()
        .filter(&Where::new().eq("id", "asset_03"), None, None)
        .await
        .unwrap()
        .remove(0);

    assert_eq!(reloaded.overall_risk_score, 61.0);
    assert_eq!(backend.read(STORAGE_KEY).unwrap().unwrap(), raw_before);
}

#[tokio::test]
async fn missing_record_update_reports_entity_and_id() {
    let client = DataClient::in_memory();
    let err = client
        .projects()
        .update("proj_99", json!({ "status": "approved" }))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "InvestmentProject not found: proj_99");
}

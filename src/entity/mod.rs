//! Entity access facade
//!
//! One four-operation surface (`list`, `filter`, `create`, `update`) per
//! entity, regardless of backend. Each entity carries a static
//! [`EntityDescriptor`] naming its store key, optional remote table, id
//! prefix, and field aliases; the generic [`EntityHandle`] does the rest, so
//! there is no branching on entity identity anywhere.
//!
//! Backend policy: the hosted backend is used when it is configured and the
//! descriptor maps to a table. Read paths that come back empty from the
//! remote consult an explicit [`EmptyRemotePolicy`]; writes never fall back.

pub mod query;

pub use query::Where;

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{DataError, Result};
use crate::model::now_iso;
use crate::remote::RemoteTableClient;
use crate::store::LocalStore;

/// API-facing field name paired with its remote column name
#[derive(Debug, Clone, Copy)]
pub struct FieldAlias {
    pub api: &'static str,
    pub column: &'static str,
}

/// Static description of one entity kind
#[derive(Debug)]
pub struct EntityDescriptor {
    /// Store key and entity name
    pub name: &'static str,
    /// Remote table backing this entity; `None` keeps it local-only
    pub table: Option<&'static str>,
    /// Prefix for generated ids
    pub id_prefix: &'static str,
    /// Field-name bridges applied on remote reads and writes
    pub aliases: &'static [FieldAlias],
}

/// A record kind served by the facade
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    fn descriptor() -> &'static EntityDescriptor;
}

/// What a read does when the remote table exists but holds zero rows
///
/// The original behavior masks a genuinely-empty table as "use demo data";
/// keeping that implicit conflates "not populated yet" with "empty result".
/// The policy is explicit here so callers choose, and tests pin the choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyRemotePolicy {
    /// Serve the seeded local data instead of an empty remote result
    #[default]
    SeedFallback,
    /// Return the empty remote result as-is
    TrustRemote,
}

/// Rows to serve from a remote read, or `None` to fall back to the seed
fn remote_rows(rows: Vec<Value>, policy: EmptyRemotePolicy) -> Option<Vec<Value>> {
    if rows.is_empty() && policy == EmptyRemotePolicy::SeedFallback {
        None
    } else {
        Some(rows)
    }
}

/// Four-operation handle for one entity kind
///
/// Stateless per call: every operation re-reads whatever backend it targets.
#[derive(Clone)]
pub struct EntityHandle<E: Entity> {
    store: LocalStore,
    remote: Option<RemoteTableClient>,
    policy: EmptyRemotePolicy,
    _marker: PhantomData<E>,
}

impl<E: Entity> EntityHandle<E> {
    pub(crate) fn new(
        store: LocalStore,
        remote: Option<RemoteTableClient>,
        policy: EmptyRemotePolicy,
    ) -> Self {
        Self {
            store,
            remote,
            policy,
            _marker: PhantomData,
        }
    }

    fn remote_table(&self) -> Option<(&RemoteTableClient, &'static str)> {
        match (&self.remote, E::descriptor().table) {
            (Some(client), Some(table)) => Some((client, table)),
            _ => None,
        }
    }

    /// All records, optionally sorted and truncated
    ///
    /// `order_by` is a field name; prefix `-` for descending.
    pub async fn list(&self, order_by: Option<&str>, limit: Option<usize>) -> Result<Vec<E>> {
        self.read(None, order_by, limit).await
    }

    /// Records matching every clause of `where_`, optionally sorted and truncated
    pub async fn filter(
        &self,
        where_: &Where,
        order_by: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<E>> {
        self.read(Some(where_), order_by, limit).await
    }

    async fn read(
        &self,
        where_: Option<&Where>,
        order_by: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<E>> {
        let descriptor = E::descriptor();

        if let Some((client, table)) = self.remote_table() {
            let rows = client.select(table, where_, order_by, limit).await?;
            match remote_rows(rows, self.policy) {
                Some(rows) => {
                    let rows = rows
                        .into_iter()
                        .map(|row| normalize_row(row, descriptor))
                        .collect();
                    return decode_records(rows);
                }
                None => {
                    debug!(
                        entity = descriptor.name,
                        "remote returned no rows; serving seeded local data"
                    );
                }
            }
        }

        let data = self.store.load()?;
        let records = query::apply_query(
            data.collection(descriptor.name).to_vec(),
            where_,
            order_by,
            limit,
        );
        decode_records(records)
    }

    /// Store a new record, assigning an id and timestamp, and return it
    ///
    /// Locally the record is prepended so recent entries list first.
    pub async fn create(&self, record: E) -> Result<E> {
        let descriptor = E::descriptor();
        let mut value = serde_json::to_value(&record)?;

        if let Some((client, table)) = self.remote_table() {
            apply_aliases_outbound(&mut value, descriptor)?;
            let row = client.insert(table, &value).await?;
            return decode_record(normalize_row(row, descriptor));
        }

        let obj = as_object_mut(&mut value)?;
        if !has_id(obj) {
            obj.insert(
                "id".to_string(),
                Value::String(generate_id(descriptor.id_prefix)),
            );
        }
        obj.insert("updated_at".to_string(), Value::String(now_iso()));
        let id = obj.get("id").cloned();

        let mut data = self.store.load()?;
        data.collection_mut(descriptor.name).insert(0, value.clone());
        self.store.save(&data)?;
        debug!(entity = descriptor.name, ?id, "created record");

        decode_record(value)
    }

    /// Merge `patch` over the record with the given id and return the result
    ///
    /// The patch must be a JSON object; matched fields are replaced and the
    /// timestamp is restamped. A local miss is [`DataError::NotFound`].
    pub async fn update(&self, id: &str, patch: Value) -> Result<E> {
        let descriptor = E::descriptor();
        let Value::Object(patch) = patch else {
            return Err(serde_error("update patch must be a JSON object"));
        };

        if let Some((client, table)) = self.remote_table() {
            let mut payload = Value::Object(patch);
            apply_aliases_outbound(&mut payload, descriptor)?;
            let row = client.update(table, id, &payload).await?;
            return decode_record(normalize_row(row, descriptor));
        }

        let mut data = self.store.load()?;
        let records = data.collection_mut(descriptor.name);
        let index = records
            .iter()
            .position(|r| r.get("id").and_then(Value::as_str) == Some(id))
            .ok_or_else(|| DataError::not_found(descriptor.name, id))?;

        let obj = as_object_mut(&mut records[index])?;
        for (key, value) in patch {
            obj.insert(key, value);
        }
        obj.insert("updated_at".to_string(), Value::String(now_iso()));
        let merged = records[index].clone();

        self.store.save(&data)?;
        debug!(entity = descriptor.name, id, "updated record");

        decode_record(merged)
    }
}

/// Bridge remote column names to API-facing names on a fetched row
///
/// The API name is filled from the column when absent; the column value is
/// kept alongside, as the original rows carried both.
fn normalize_row(mut row: Value, descriptor: &EntityDescriptor) -> Value {
    if let Some(obj) = row.as_object_mut() {
        for alias in descriptor.aliases {
            let api_missing = matches!(obj.get(alias.api), None | Some(Value::Null));
            if api_missing {
                if let Some(value) = obj.get(alias.column).cloned() {
                    obj.insert(alias.api.to_string(), value);
                }
            }
        }
    }
    row
}

/// Bridge API-facing names to remote column names on an outbound payload
///
/// The API key is moved, not copied: a relational backend rejects unknown
/// columns.
fn apply_aliases_outbound(payload: &mut Value, descriptor: &EntityDescriptor) -> Result<()> {
    let obj = as_object_mut(payload)?;
    for alias in descriptor.aliases {
        if let Some(value) = obj.remove(alias.api) {
            obj.entry(alias.column.to_string()).or_insert(value);
        }
    }
    Ok(())
}

fn has_id(obj: &Map<String, Value>) -> bool {
    match obj.get("id") {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

pub(crate) fn generate_id(prefix: &str) -> String {
    let slug = uuid::Uuid::new_v4().simple().to_string();
    format!("{prefix}_{}", &slug[..8])
}

fn as_object_mut(value: &mut Value) -> Result<&mut Map<String, Value>> {
    match value.as_object_mut() {
        Some(obj) => Ok(obj),
        None => Err(serde_error("record is not a JSON object")),
    }
}

fn serde_error(message: &str) -> DataError {
    use serde::de::Error;
    DataError::Serialization(serde_json::Error::custom(message))
}

fn decode_records<E: Entity>(records: Vec<Value>) -> Result<Vec<E>> {
    records.into_iter().map(decode_record).collect()
}

fn decode_record<E: Entity>(record: Value) -> Result<E> {
    Ok(serde_json::from_value(record)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InfrastructureAsset, RiskAlert};
    use crate::store::MemoryBackend;
    use serde_json::json;
    use std::sync::Arc;

    fn local_handle<E: Entity>() -> EntityHandle<E> {
        let store = LocalStore::new(Arc::new(MemoryBackend::new()));
        EntityHandle::new(store, None, EmptyRemotePolicy::default())
    }

    #[tokio::test]
    async fn test_list_sorts_and_limits_seed_assets() {
        let assets = local_handle::<InfrastructureAsset>();
        let top = assets.list(Some("-overall_risk_score"), Some(3)).await.unwrap();

        let ids: Vec<&str> = top.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["asset_02", "asset_01", "asset_05"]);
        assert_eq!(top[0].overall_risk_score, 83.0);
    }

    #[tokio::test]
    async fn test_filter_by_region() {
        let assets = local_handle::<InfrastructureAsset>();
        let ontario = assets
            .filter(&Where::new().eq("region", "Ontario"), Some("name"), None)
            .await
            .unwrap();

        assert_eq!(ontario.len(), 3);
        assert!(ontario.iter().all(|a| a.region == "Ontario"));
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamp_and_prepends() {
        let assets = local_handle::<InfrastructureAsset>();
        let created = assets
            .create(InfrastructureAsset {
                name: "New Flood Gate".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(created.id.starts_with("asset_"));
        assert!(created.updated_at.is_some());

        let all = assets.list(None, None).await.unwrap();
        assert_eq!(all.len(), 11);
        assert_eq!(all[0].id, created.id);
    }

    #[tokio::test]
    async fn test_create_keeps_supplied_id() {
        let alerts = local_handle::<RiskAlert>();
        let created = alerts
            .create(RiskAlert {
                id: "alert_custom".to_string(),
                title: "Manual entry".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(created.id, "alert_custom");
    }

    #[tokio::test]
    async fn test_update_merges_patch_and_restamps() {
        let assets = local_handle::<InfrastructureAsset>();
        let before = assets
            .filter(&Where::new().eq("id", "asset_01"), None, None)
            .await
            .unwrap()
            .remove(0);

        let updated = assets
            .update("asset_01", json!({ "overall_risk_score": 90 }))
            .await
            .unwrap();
        assert_eq!(updated.overall_risk_score, 90.0);
        assert_eq!(updated.name, before.name);
        assert_eq!(updated.population_served, before.population_served);
        assert_ne!(updated.updated_at, before.updated_at);

        // The merge is persisted, not just returned
        let reread = assets
            .filter(&Where::new().eq("id", "asset_01"), None, None)
            .await
            .unwrap()
            .remove(0);
        assert_eq!(reread.overall_risk_score, 90.0);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let assets = local_handle::<InfrastructureAsset>();
        let err = assets
            .update("asset_99", json!({ "overall_risk_score": 1 }))
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::NotFound { .. }));
        assert_eq!(err.to_string(), "InfrastructureAsset not found: asset_99");
    }

    #[tokio::test]
    async fn test_update_rejects_non_object_patch() {
        let assets = local_handle::<InfrastructureAsset>();
        let err = assets.update("asset_01", json!(42)).await.unwrap_err();
        assert!(matches!(err, DataError::Serialization(_)));
    }

    #[test]
    fn test_empty_remote_policy_decision() {
        // Default masks an empty remote table with seeded data
        assert!(remote_rows(vec![], EmptyRemotePolicy::SeedFallback).is_none());
        // TrustRemote surfaces the genuinely-empty result
        assert_eq!(
            remote_rows(vec![], EmptyRemotePolicy::TrustRemote),
            Some(vec![])
        );
        // Non-empty results are served either way
        let rows = vec![json!({ "id": "asset_01" })];
        assert_eq!(
            remote_rows(rows.clone(), EmptyRemotePolicy::SeedFallback),
            Some(rows)
        );
    }

    #[test]
    fn test_normalize_row_bridges_columns_to_api_names() {
        let row = json!({ "id": "asset_01", "latitude": 43.7, "longitude": -79.8 });
        let normalized = normalize_row(row, InfrastructureAsset::descriptor());
        assert_eq!(normalized["lat"], json!(43.7));
        assert_eq!(normalized["lng"], json!(-79.8));
        // Column names stay alongside
        assert_eq!(normalized["latitude"], json!(43.7));
    }

    #[test]
    fn test_normalize_row_keeps_existing_api_values() {
        let row = json!({ "lat": 1.0, "latitude": 2.0 });
        let normalized = normalize_row(row, InfrastructureAsset::descriptor());
        assert_eq!(normalized["lat"], json!(1.0));
    }

    #[test]
    fn test_outbound_aliases_move_api_names_to_columns() {
        let mut payload = json!({ "name": "A", "lat": 43.7, "lng": -79.8 });
        apply_aliases_outbound(&mut payload, InfrastructureAsset::descriptor()).unwrap();
        assert_eq!(payload["latitude"], json!(43.7));
        assert_eq!(payload["longitude"], json!(-79.8));
        assert!(payload.get("lat").is_none());
        assert!(payload.get("lng").is_none());
    }

    #[test]
    fn test_generated_ids_carry_prefix() {
        let id = generate_id("asset");
        assert!(id.starts_with("asset_"));
        assert_eq!(id.len(), "asset_".len() + 8);
        assert_ne!(generate_id("asset"), generate_id("asset"));
    }
}

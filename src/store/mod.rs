//! Local store - durable, versioned, self-healing JSON store
//!
//! One JSON blob keyed by entity name, persisted through an injected
//! [`StorageBackend`]. First access seeds a demo fixture; an old version tag
//! triggers a merge-and-upgrade; emptied collections are repaired from the
//! seed; an unparsable blob is treated as absent and reseeded. Writes are
//! synchronous whole-blob overwrites with no transaction concept.

pub mod backend;
mod seed;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::Result;

/// Fixed key the blob is persisted under
pub const STORAGE_KEY: &str = "resilient_gov_data_v1";

/// Schema version written by this build
pub const SCHEMA_VERSION: u64 = 2;

/// Entity names tracked by the store, in blob order
pub const ENTITY_NAMES: [&str; 3] = ["InfrastructureAsset", "InvestmentProject", "RiskAlert"];

const VERSION_KEY: &str = "__schemaVersion";

/// Decoded store blob: a version tag plus one record array per entity
#[derive(Debug, Clone, PartialEq)]
pub struct StoreData {
    pub schema_version: u64,
    collections: BTreeMap<String, Vec<Value>>,
    /// Untracked top-level keys, carried through migrations untouched
    extra: Map<String, Value>,
}

impl StoreData {
    fn empty(schema_version: u64) -> Self {
        Self {
            schema_version,
            collections: BTreeMap::new(),
            extra: Map::new(),
        }
    }

    /// Records for an entity; empty when the collection is missing
    pub fn collection(&self, name: &str) -> &[Value] {
        self.collections.get(name).map_or(&[], Vec::as_slice)
    }

    /// Mutable records for an entity, creating the collection if missing
    pub fn collection_mut(&mut self, name: &str) -> &mut Vec<Value> {
        self.collections.entry(name.to_string()).or_default()
    }

    pub fn set_collection(&mut self, name: &str, records: Vec<Value>) {
        self.collections.insert(name.to_string(), records);
    }

    /// Decode a persisted blob; `None` when the value is not an object
    fn from_value(value: Value) -> Option<Self> {
        let Value::Object(mut obj) = value else {
            return None;
        };

        // Absent or non-numeric version tags read as version 1
        let schema_version = obj
            .get(VERSION_KEY)
            .and_then(Value::as_u64)
            .unwrap_or(1);
        obj.remove(VERSION_KEY);

        let mut collections = BTreeMap::new();
        for name in ENTITY_NAMES {
            // A tracked key holding a non-array counts as missing (repairable)
            if let Some(Value::Array(records)) = obj.remove(name) {
                collections.insert(name.to_string(), records);
            }
        }

        Some(Self {
            schema_version,
            collections,
            extra: obj,
        })
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert(VERSION_KEY.to_string(), Value::from(self.schema_version));
        for (key, value) in &self.extra {
            obj.insert(key.clone(), value.clone());
        }
        for (name, records) in &self.collections {
            obj.insert(name.clone(), Value::Array(records.clone()));
        }
        Value::Object(obj)
    }
}

/// Handle on the persisted local store
///
/// Cheap to clone; every operation re-reads the blob, so concurrent handles
/// see last-write-wins semantics with no coordination, matching the single
/// browser-profile model this store stands in for.
#[derive(Clone)]
pub struct LocalStore {
    backend: Arc<dyn StorageBackend>,
    key: String,
}

impl LocalStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            backend,
            key: STORAGE_KEY.to_string(),
        }
    }

    /// Load the store, seeding, migrating, or repairing as needed
    pub fn load(&self) -> Result<StoreData> {
        let parsed = match self.backend.read(&self.key)? {
            Some(raw) => match serde_json::from_str::<Value>(&raw) {
                Ok(value) => StoreData::from_value(value),
                Err(e) => {
                    // Corrupt blobs are recovered silently, never surfaced
                    warn!("discarding unparsable local store blob: {}", e);
                    None
                }
            },
            None => None,
        };

        let Some(mut data) = parsed else {
            let seeded = seed::seed_store();
            self.save(&seeded)?;
            info!(key = %self.key, "seeded local store");
            return Ok(seeded);
        };

        if data.schema_version != SCHEMA_VERSION {
            // Merge seed defaults under persisted data, preferring persisted
            // arrays when non-empty, then bump the version in place
            let from_version = data.schema_version;
            let seeded = seed::seed_store();
            for name in ENTITY_NAMES {
                if data.collection(name).is_empty() {
                    data.set_collection(name, seeded.collection(name).to_vec());
                }
            }
            data.schema_version = SCHEMA_VERSION;
            self.save(&data)?;
            info!(from_version, to_version = SCHEMA_VERSION, "migrated local store");
            return Ok(data);
        }

        // Current version: re-seed just the collections someone emptied
        let mut repaired = Vec::new();
        for name in ENTITY_NAMES {
            if data.collection(name).is_empty() {
                let seeded = seed::seed_store();
                data.set_collection(name, seeded.collection(name).to_vec());
                repaired.push(name);
            }
        }
        if !repaired.is_empty() {
            self.save(&data)?;
            debug!(collections = ?repaired, "repaired emptied collections from seed");
        }

        Ok(data)
    }

    /// Persist the whole blob
    pub fn save(&self, data: &StoreData) -> Result<()> {
        let raw = serde_json::to_string(&data.to_value())?;
        self.backend.write(&self.key, &raw)
    }
}

//! resilientgov-data - data access for the ResilientGov climate-risk dashboard
//!
//! Tracks climate-risk scores of public infrastructure assets, investment
//! projects against them, and live risk alerts. One CRUD surface per entity
//! over two interchangeable backends:
//!
//! - a hosted PostgREST-style table store, used when endpoint credentials are
//!   configured
//! - a seeded, versioned, self-healing local JSON store behind an injectable
//!   persistence port, used otherwise (and always, for alerts)
//!
//! Plus a simulated-action invoker that fabricates alert records so the
//! live-monitoring demo stays dynamic without real external feeds.

pub mod actions;
pub mod client;
pub mod config;
pub mod entity;
pub mod error;
pub mod model;
pub mod remote;
pub mod store;

pub use actions::{ActionOutcome, SimulatedAction};
pub use client::DataClient;
pub use config::RemoteConfig;
pub use entity::{EmptyRemotePolicy, EntityHandle, Where};
pub use error::{DataError, Result};
pub use model::{InfrastructureAsset, InvestmentProject, RiskAlert};

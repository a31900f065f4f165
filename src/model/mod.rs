//! Record kinds tracked by the dashboard
//!
//! Three flat, optional-field-tolerant record shapes: infrastructure assets,
//! investment projects, and risk alerts. Records are stored as JSON objects;
//! these types are the typed edge of the API and decode any record the store
//! or the hosted backend can hold.

pub mod alert;
pub mod asset;
pub mod project;

pub use alert::{AlertStatus, Geolocation, RiskAlert, Severity};
pub use asset::{ClimateRisks, InfrastructureAsset, TimeHorizon};
pub use project::{InvestmentProject, ProjectStatus};

use chrono::{SecondsFormat, Utc};

/// Current UTC time as an RFC 3339 string
///
/// Microsecond precision, so a create-then-update sequence restamps visibly.
pub(crate) fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_iso_is_utc_rfc3339() {
        let ts = now_iso();
        assert!(ts.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}

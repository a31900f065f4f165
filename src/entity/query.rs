//! Query helpers shared by the local and remote paths
//!
//! Ordering: a field name, with a leading `-` for descending. Values compare
//! numerically when both sides are JSON numbers, otherwise lexicographically
//! on their string renderings (null and missing render as ""). The sort is
//! stable and descending reverses the comparator, so equal keys keep their
//! original relative order in both directions.

use std::cmp::Ordering;

use serde_json::Value;

/// One restriction in a [`Where`] clause
#[derive(Debug, Clone)]
pub(crate) enum Match {
    /// Field equals the value
    Eq(Value),
    /// Field is a member of the list
    In(Vec<Value>),
}

/// Conjunction of per-field restrictions
///
/// Every clause must match. Records missing a restricted field never match.
/// Leaving a key out of the builder is the "ignore this field" case.
#[derive(Debug, Clone, Default)]
pub struct Where {
    clauses: Vec<(String, Match)>,
}

impl Where {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `field` to equal `value`
    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.clauses.push((field.to_string(), Match::Eq(value.into())));
        self
    }

    /// Require `field` to be one of `values`
    pub fn any<V: Into<Value>>(mut self, field: &str, values: impl IntoIterator<Item = V>) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        self.clauses.push((field.to_string(), Match::In(values)));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub(crate) fn clauses(&self) -> &[(String, Match)] {
        &self.clauses
    }

    /// Whether a record satisfies every clause
    pub(crate) fn matches(&self, record: &Value) -> bool {
        self.clauses.iter().all(|(field, m)| {
            let Some(actual) = record.get(field) else {
                return false;
            };
            match m {
                Match::Eq(expected) => actual == expected,
                Match::In(allowed) => allowed.contains(actual),
            }
        })
    }
}

/// Split an order-by expression into field name and direction
pub(crate) fn parse_order(order_by: &str) -> (&str, bool) {
    match order_by.strip_prefix('-') {
        Some(field) => (field, true),
        None => (order_by, false),
    }
}

fn compare_fields(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    if let (Some(Value::Number(a)), Some(Value::Number(b))) = (a, b) {
        let (a, b) = (a.as_f64().unwrap_or(0.0), b.as_f64().unwrap_or(0.0));
        return a.partial_cmp(&b).unwrap_or(Ordering::Equal);
    }
    render(a).cmp(&render(b))
}

fn render(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Sort records in place by an order-by expression
pub(crate) fn sort_records(records: &mut [Value], order_by: &str) {
    let (field, descending) = parse_order(order_by);
    records.sort_by(|a, b| {
        let ordering = compare_fields(a.get(field), b.get(field));
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

/// Filter, sort, and truncate one collection's records
pub(crate) fn apply_query(
    mut records: Vec<Value>,
    where_: Option<&Where>,
    order_by: Option<&str>,
    limit: Option<usize>,
) -> Vec<Value> {
    if let Some(where_) = where_ {
        records.retain(|r| where_.matches(r));
    }
    if let Some(order_by) = order_by {
        sort_records(&mut records, order_by);
    }
    if let Some(limit) = limit {
        records.truncate(limit);
    }
    records
}

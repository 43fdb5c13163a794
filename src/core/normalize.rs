//! Record normalization
//!
//! Maps each feed's native record shape into the unified [`Alert`]
//! representation. Normalization is total: a record missing fields, or not
//! even an object, yields an alert with absent fields. Nothing here panics
//! or propagates an error per record.
//!
//! Field mapping:
//! - SOS feed: `location.latitude` / `location.longitude` / `location.address`,
//!   `message`, `timestamp`, `image`, `person`, `severity`
//! - emergency feed: `latitude` / `longitude` at top level, `name` → person,
//!   `alert_message` → message, `severity`

use crate::core::alert::{Alert, AlertId, Coordinates};
use crate::core::feeds::FeedKind;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic alert identity allocator
///
/// Shared by both feed clients so ids are unique across feeds for the whole
/// session.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    /// Allocate the next id
    pub fn next_id(&self) -> AlertId {
        AlertId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

/// Normalize a whole feed response, assigning ids in record order
pub fn normalize_batch(kind: FeedKind, records: &[Value], ids: &IdAllocator) -> Vec<Alert> {
    records
        .iter()
        .map(|record| normalize(kind, record, ids.next_id()))
        .collect()
}

/// Normalize a single record
pub fn normalize(kind: FeedKind, record: &Value, id: AlertId) -> Alert {
    let Some(obj) = record.as_object() else {
        return Alert::empty(id, kind);
    };

    let mut alert = Alert::empty(id, kind);
    match kind {
        FeedKind::Sos => {
            let location = obj.get("location").and_then(Value::as_object);
            alert.message = string_field(record, "message");
            alert.coordinates = location.and_then(|loc| {
                coordinate_pair(loc.get("latitude"), loc.get("longitude"))
            });
            alert.address = location
                .and_then(|loc| loc.get("address"))
                .and_then(Value::as_str)
                .map(str::to_string);
            alert.timestamp = string_field(record, "timestamp");
            alert.image = string_field(record, "image");
            alert.person = string_field(record, "person");
            alert.severity = string_field(record, "severity");
        }
        FeedKind::Emergency => {
            alert.message = string_field(record, "alert_message");
            alert.coordinates = coordinate_pair(obj.get("latitude"), obj.get("longitude"));
            alert.person = string_field(record, "name");
            alert.severity = string_field(record, "severity");
        }
    }
    alert
}

/// Parse one coordinate component from a JSON value
///
/// Feeds disagree on representation: the SOS feed sends numeric strings, the
/// emergency feed sends numbers. Anything that does not parse to a finite
/// float is absent — never zero.
pub fn parse_coordinate(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// A pair is present only when BOTH components parse
fn coordinate_pair(latitude: Option<&Value>, longitude: Option<&Value>) -> Option<Coordinates> {
    let lat = parse_coordinate(latitude?)?;
    let lon = parse_coordinate(longitude?)?;
    Coordinates::new(lat, lon)
}

fn string_field(record: &Value, key: &str) -> Option<String> {
    record.get(key).and_then(Value::as_str).map(str::to_string)
}

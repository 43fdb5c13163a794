//! Render-plan types
//!
//! The rendering engine is an external collaborator that knows how to draw
//! a marker at a position with a popup and to fit the viewport to a region.
//! This module produces those draw requests: one marker per located alert
//! on the overview map, and a detail view pairing the selected alert with
//! the configured safe zones.

use crate::core::alert::{Alert, Coordinates};
use crate::core::feeds::FeedKind;
use crate::core::selection::SelectionState;
use serde::{Deserialize, Serialize};

/// Marker style understood by the render layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerIcon {
    /// Distinguished blinking marker
    Blinking,
    /// Standard pin
    Default,
}

/// One marker draw request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerDraw {
    /// Where to place the marker
    pub position: Coordinates,
    /// Which icon to use
    pub icon: MarkerIcon,
    /// Popup body, one line per field
    pub popup: String,
}

/// A configured safe zone shown next to the selected alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafeZone {
    /// Zone identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Zone location
    pub coordinates: Coordinates,
}

/// The secondary "selected alert and nearby safe zones" map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    /// Map center: the selected alert's location
    pub center: Coordinates,
    /// Selected-alert marker followed by one marker per safe zone
    pub markers: Vec<MarkerDraw>,
}

/// Overview-map marker for one alert, absent when it has no location
///
/// Every located alert blinks on the overview map; the icon distinction by
/// severity belongs to the detail view.
pub fn alert_marker(alert: &Alert) -> Option<MarkerDraw> {
    let position = alert.coordinates?;
    Some(MarkerDraw {
        position,
        icon: MarkerIcon::Blinking,
        popup: alert_popup(alert, position),
    })
}

fn alert_popup(alert: &Alert, position: Coordinates) -> String {
    match alert.feed {
        FeedKind::Sos => format!(
            "{}\nAddress: {}\nLatitude: {}\nLongitude: {}",
            alert.message.as_deref().unwrap_or("N/A"),
            alert.address.as_deref().unwrap_or("N/A"),
            position.latitude,
            position.longitude,
        ),
        FeedKind::Emergency => format!(
            "Name: {}\nMessage: {}\nLatitude: {}\nLongitude: {}",
            alert.person.as_deref().unwrap_or("N/A"),
            alert.message.as_deref().unwrap_or("N/A"),
            position.latitude,
            position.longitude,
        ),
    }
}

/// Build the detail view for the current selection
///
/// Nothing renders while unselected, or when the selected alert carries no
/// location. HIGH severity (case-insensitive) selects the blinking marker;
/// everything else gets the default pin.
pub fn detail_view(selection: &SelectionState, safe_zones: &[SafeZone]) -> Option<DetailView> {
    let alert = selection.selected()?;
    let center = alert.coordinates?;

    let icon = if alert.is_high_severity() {
        MarkerIcon::Blinking
    } else {
        MarkerIcon::Default
    };
    let popup = format!(
        "{}\n{}\nSeverity: {}",
        alert.address.as_deref().unwrap_or("Unknown Location"),
        alert.person.as_deref().unwrap_or("Unknown Person"),
        alert.severity_label(),
    );

    let mut markers = vec![MarkerDraw {
        position: center,
        icon,
        popup,
    }];
    markers.extend(safe_zones.iter().map(|zone| MarkerDraw {
        position: zone.coordinates,
        icon: MarkerIcon::Default,
        popup: format!("{}\nThis is a safe zone.", zone.name),
    }));

    Some(DetailView { center, markers })
}

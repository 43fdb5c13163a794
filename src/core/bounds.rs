//! Viewport bounds derivation
//!
//! Computes the minimal axis-aligned region covering every alert with a
//! valid location, across both feed collections jointly. When nothing has a
//! location the result is absent and the caller leaves the viewport alone —
//! a degenerate forced bound is never produced.
//!
//! Re-fit requests are keyed by a fingerprint of the filtered coordinate
//! set so an unchanged snapshot never triggers a second fit (the naive
//! fit-on-every-render approach makes the map visibly jitter).

use crate::core::alert::{Alert, Coordinates};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Minimal axis-aligned geographic region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingRegion {
    /// Smallest latitude
    pub south: f64,
    /// Smallest longitude
    pub west: f64,
    /// Largest latitude
    pub north: f64,
    /// Largest longitude
    pub east: f64,
}

impl BoundingRegion {
    /// Region covering a single point
    pub fn point(c: Coordinates) -> Self {
        Self {
            south: c.latitude,
            west: c.longitude,
            north: c.latitude,
            east: c.longitude,
        }
    }

    /// Grow the region to cover one more point
    pub fn extend(&mut self, c: Coordinates) {
        self.south = self.south.min(c.latitude);
        self.west = self.west.min(c.longitude);
        self.north = self.north.max(c.latitude);
        self.east = self.east.max(c.longitude);
    }

    /// Whether a point lies inside the region (edges inclusive)
    pub fn contains(&self, c: &Coordinates) -> bool {
        c.latitude >= self.south
            && c.latitude <= self.north
            && c.longitude >= self.west
            && c.longitude <= self.east
    }

    /// Geometric center of the region
    pub fn center(&self) -> Coordinates {
        Coordinates {
            latitude: (self.south + self.north) / 2.0,
            longitude: (self.west + self.east) / 2.0,
        }
    }
}

/// Compute the minimal region covering every located alert
///
/// Returns `None` when no alert has a valid location.
pub fn compute_bounds<'a, I>(alerts: I) -> Option<BoundingRegion>
where
    I: IntoIterator<Item = &'a Alert>,
{
    region_of(alerts.into_iter().filter_map(|a| a.coordinates))
}

fn region_of<I>(coords: I) -> Option<BoundingRegion>
where
    I: IntoIterator<Item = Coordinates>,
{
    let mut region: Option<BoundingRegion> = None;
    for c in coords {
        match region.as_mut() {
            Some(r) => r.extend(c),
            None => region = Some(BoundingRegion::point(c)),
        }
    }
    region
}

/// Keys viewport re-fits by a stable fingerprint of the coordinate set
///
/// Normalization guarantees finite floats, so bit-exact equality of the
/// coordinate list is the right change detector.
#[derive(Debug, Default)]
pub struct ViewportTracker {
    last_fingerprint: Option<u64>,
}

impl ViewportTracker {
    /// New tracker that has never fitted
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a fit region only when the located coordinate set changed
    ///
    /// With no located alerts this returns `None` and leaves the last
    /// fingerprint in place, so the viewport stays where it was.
    pub fn fit_target<'a, I>(&mut self, alerts: I) -> Option<BoundingRegion>
    where
        I: IntoIterator<Item = &'a Alert>,
    {
        let coords: Vec<Coordinates> = alerts
            .into_iter()
            .filter_map(|a| a.coordinates)
            .collect();
        if coords.is_empty() {
            return None;
        }

        let fingerprint = fingerprint(&coords);
        if self.last_fingerprint == Some(fingerprint) {
            return None;
        }
        self.last_fingerprint = Some(fingerprint);

        region_of(coords)
    }
}

fn fingerprint(coords: &[Coordinates]) -> u64 {
    let mut hasher = ahash::AHasher::default();
    coords.len().hash(&mut hasher);
    for c in coords {
        c.latitude.to_bits().hash(&mut hasher);
        c.longitude.to_bits().hash(&mut hasher);
    }
    hasher.finish()
}

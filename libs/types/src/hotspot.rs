//! Map hotspots: static points of interest
//!
//! Hotspots are reference data and never mutate. Positions are stored as
//! geographic degrees and projected onto the fixed 800x400 map canvas with a
//! plain equirectangular formula.

use crate::errors::TypesError;
use crate::ids::HotspotId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Map canvas width in SVG units.
pub const MAP_WIDTH: f64 = 800.0;
/// Map canvas height in SVG units.
pub const MAP_HEIGHT: f64 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl FromStr for Intensity {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Intensity::Low),
            "medium" => Ok(Intensity::Medium),
            "high" => Ok(Intensity::High),
            _ => Err(TypesError::UnknownIntensity(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotspotKind {
    Conflict,
    Economic,
    Political,
    Natural,
}

impl FromStr for HotspotKind {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "conflict" => Ok(HotspotKind::Conflict),
            "economic" => Ok(HotspotKind::Economic),
            "political" => Ok(HotspotKind::Political),
            "natural" => Ok(HotspotKind::Natural),
            _ => Err(TypesError::UnknownHotspotKind(s.to_string())),
        }
    }
}

/// Longitude/latitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lng: f64,
    pub lat: f64,
}

/// Position on the map canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

impl GeoPoint {
    pub fn project(&self) -> MapPoint {
        MapPoint {
            x: (self.lng + 180.0) / 360.0 * MAP_WIDTH,
            y: (90.0 - self.lat) / 180.0 * MAP_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub id: HotspotId,
    pub country: String,
    pub location: GeoPoint,
    pub intensity: Intensity,
    pub kind: HotspotKind,
    pub title: String,
}

impl Hotspot {
    pub fn position(&self) -> MapPoint {
        self.location.project()
    }
}

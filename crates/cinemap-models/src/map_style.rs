//! Built-in basemap styles.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default basemap used by new projects.
pub const DEFAULT_MAP_STYLE: &str = "mapbox://styles/mapbox/dark-v11";

/// Named basemap style. Projects store the style URL, so any string is
/// accepted there; these are the styles offered out of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum MapStyle {
    #[default]
    Dark,
    Satellite,
    Light,
    Outdoors,
}

impl MapStyle {
    pub const ALL: &'static [MapStyle] = &[
        MapStyle::Dark,
        MapStyle::Satellite,
        MapStyle::Light,
        MapStyle::Outdoors,
    ];

    /// Style URL understood by the map renderer.
    pub fn url(&self) -> &'static str {
        match self {
            MapStyle::Dark => DEFAULT_MAP_STYLE,
            MapStyle::Satellite => "mapbox://styles/mapbox/satellite-v9",
            MapStyle::Light => "mapbox://styles/mapbox/light-v11",
            MapStyle::Outdoors => "mapbox://styles/mapbox/outdoors-v12",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MapStyle::Dark => "Dark",
            MapStyle::Satellite => "Satellite",
            MapStyle::Light => "Light",
            MapStyle::Outdoors => "Outdoors",
        }
    }

    /// Reverse lookup from a stored style URL.
    pub fn from_url(url: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|style| style.url() == url)
    }
}

impl fmt::Display for MapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

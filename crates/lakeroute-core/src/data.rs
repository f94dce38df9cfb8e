//! Built-in land mask and demo ice coverage for the Great Lakes grid.

use crate::features::{IceFeature, LandFeature};
use crate::spatial::LonLat;

const LAND_POLYGONS: &[(&str, &[LonLat])] = &[
    (
        "Minnesota/North Shore",
        &[
            [-93.0, 49.0],
            [-90.0, 49.0],
            [-89.0, 48.0],
            [-90.0, 47.0],
            [-91.0, 47.0],
            [-92.0, 46.5],
            [-93.0, 47.0],
            [-93.0, 49.0],
        ],
    ),
    (
        "Keweenaw Peninsula",
        &[
            [-89.0, 47.3],
            [-88.5, 47.5],
            [-88.0, 47.3],
            [-87.8, 47.0],
            [-88.3, 47.0],
            [-88.8, 47.2],
            [-89.0, 47.3],
        ],
    ),
    (
        "Upper Peninsula (West)",
        &[
            [-90.0, 47.0],
            [-87.0, 47.0],
            [-87.0, 46.5],
            [-85.0, 46.2],
            [-84.8, 45.9],
            [-84.8, 45.7],
            [-85.0, 45.5],
            [-86.5, 45.3],
            [-87.5, 45.0],
            [-88.0, 45.3],
            [-88.5, 45.5],
            [-90.0, 46.0],
            [-90.0, 47.0],
        ],
    ),
    (
        "Lower Peninsula (East)",
        &[
            [-84.7, 45.8],
            [-84.7, 45.0],
            [-84.0, 44.0],
            [-83.5, 43.0],
            [-83.0, 42.0],
            [-82.5, 41.8],
            [-82.3, 42.5],
            [-82.0, 43.5],
            [-82.5, 44.5],
            [-83.0, 45.0],
            [-83.5, 45.5],
            [-84.0, 45.7],
            [-84.7, 45.8],
        ],
    ),
    (
        "Wisconsin/Door Peninsula",
        &[
            [-88.5, 45.5],
            [-88.0, 45.3],
            [-87.5, 45.0],
            [-87.0, 44.5],
            [-86.8, 45.0],
            [-87.0, 45.2],
            [-87.5, 44.5],
            [-87.8, 44.0],
            [-88.0, 42.5],
            [-88.5, 43.0],
            [-88.5, 44.0],
            [-88.5, 45.5],
        ],
    ),
    (
        "Manitoulin Island",
        &[
            [-83.0, 45.9],
            [-82.0, 45.8],
            [-81.8, 45.5],
            [-82.5, 45.4],
            [-83.2, 45.7],
            [-83.0, 45.9],
        ],
    ),
    (
        "Land South of Erie",
        &[
            [-83.5, 41.8],
            [-83.0, 41.5],
            [-82.0, 41.3],
            [-81.0, 41.4],
            [-80.0, 41.8],
            [-80.0, 41.0],
            [-83.5, 41.0],
            [-83.5, 41.8],
        ],
    ),
    (
        "Land S of Erie (East)",
        &[
            [-80.0, 42.0],
            [-79.0, 42.2],
            [-79.0, 41.0],
            [-80.0, 41.0],
            [-80.0, 42.0],
        ],
    ),
];

const ICE_POLYGONS: &[(f64, &[LonLat])] = &[
    (
        90.0,
        &[
            [-90.6, 48.8],
            [-89.8, 48.9],
            [-88.9, 48.8],
            [-88.4, 48.6],
            [-88.8, 48.4],
            [-89.7, 48.3],
            [-90.4, 48.4],
            [-90.6, 48.8],
        ],
    ),
    (
        70.0,
        &[
            [-87.2, 48.4],
            [-86.2, 48.5],
            [-85.4, 48.3],
            [-85.0, 48.1],
            [-85.4, 47.9],
            [-86.1, 47.9],
            [-86.8, 48.0],
            [-87.2, 48.4],
        ],
    ),
    (
        60.0,
        &[
            [-87.8, 45.9],
            [-87.2, 46.2],
            [-86.6, 46.1],
            [-86.2, 45.9],
            [-86.3, 45.6],
            [-86.9, 45.5],
            [-87.5, 45.6],
            [-87.8, 45.9],
        ],
    ),
    (
        40.0,
        &[
            [-86.4, 44.9],
            [-85.8, 45.0],
            [-85.3, 44.7],
            [-85.1, 44.2],
            [-85.4, 43.9],
            [-86.0, 43.9],
            [-86.4, 44.4],
            [-86.4, 44.9],
        ],
    ),
    (
        50.0,
        &[
            [-84.6, 46.2],
            [-83.8, 46.4],
            [-83.1, 46.2],
            [-82.7, 45.9],
            [-82.9, 45.7],
            [-83.6, 45.7],
            [-84.3, 45.8],
            [-84.6, 46.2],
        ],
    ),
    (
        30.0,
        &[
            [-82.0, 45.3],
            [-81.4, 45.4],
            [-80.9, 45.1],
            [-80.8, 44.7],
            [-81.1, 44.4],
            [-81.7, 44.5],
            [-82.0, 44.9],
            [-82.0, 45.3],
        ],
    ),
    (
        80.0,
        &[
            [-83.4, 42.3],
            [-82.7, 42.4],
            [-81.9, 42.3],
            [-81.6, 42.1],
            [-81.8, 41.9],
            [-82.5, 41.9],
            [-83.2, 42.0],
            [-83.4, 42.3],
        ],
    ),
    (
        20.0,
        &[
            [-81.9, 42.1],
            [-81.1, 42.2],
            [-80.4, 42.1],
            [-80.2, 41.9],
            [-80.5, 41.7],
            [-81.3, 41.7],
            [-81.9, 41.8],
            [-81.9, 42.1],
        ],
    ),
];

/// Hand-drawn land polygons used as the routing mask.
pub fn builtin_land() -> Vec<LandFeature> {
    LAND_POLYGONS
        .iter()
        .map(|(name, ring)| LandFeature::new(*name, ring.to_vec()))
        .collect()
}

/// Demo ice polygons, used when no generated concentration data is available.
pub fn builtin_ice() -> Vec<IceFeature> {
    ICE_POLYGONS
        .iter()
        .map(|(value, ring)| IceFeature::new(*value, ring.to_vec()))
        .collect()
}

//! Routing grid geometry and lon/lat <-> cell conversion.

use crate::error::RouteError;
use crate::spatial::LonLat;
use serde::{Deserialize, Serialize};

pub const DEFAULT_GRID_WIDTH: usize = 120;
pub const DEFAULT_GRID_HEIGHT: usize = 90;
pub const OPEN_WATER_COST: f64 = 1.0;
/// Cost = 1 + ice_percent * 3
pub const ICE_COST_MULTIPLIER: f64 = 3.0;
pub const DIAGONAL_COST: f64 = std::f64::consts::SQRT_2;

/// Geographic rectangle covered by the routing grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridBounds {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl GridBounds {
    /// Western Lake Superior to eastern Lake Erie.
    pub const GREAT_LAKES: GridBounds = GridBounds {
        min_lon: -93.0,
        max_lon: -80.0,
        min_lat: 41.5,
        max_lat: 49.0,
    };

    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        Self::GREAT_LAKES
    }
}

/// A grid cell; `row` 0 is the northern edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCell {
    pub col: usize,
    pub row: usize,
}

impl GridCell {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub bounds: GridBounds,
    pub width: usize,
    pub height: usize,
    pub open_water_cost: f64,
    pub ice_cost_multiplier: f64,
    pub diagonal_cost: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            bounds: GridBounds::GREAT_LAKES,
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            open_water_cost: OPEN_WATER_COST,
            ice_cost_multiplier: ICE_COST_MULTIPLIER,
            diagonal_cost: DIAGONAL_COST,
        }
    }
}

impl GridConfig {
    pub fn with_dimensions(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Validate grid configuration.
    pub fn validate(&self) -> Result<(), RouteError> {
        if self.width == 0 || self.height == 0 {
            return Err(RouteError::Configuration(format!(
                "grid dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        let b = &self.bounds;
        let finite = [b.min_lon, b.max_lon, b.min_lat, b.max_lat]
            .iter()
            .all(|v| v.is_finite());
        if !finite || b.lon_span() <= 0.0 || b.lat_span() <= 0.0 {
            return Err(RouteError::Configuration(format!(
                "bounding region is degenerate: lon {}..{}, lat {}..{}",
                b.min_lon, b.max_lon, b.min_lat, b.max_lat
            )));
        }
        if !(self.open_water_cost.is_finite() && self.open_water_cost > 0.0) {
            return Err(RouteError::Configuration(format!(
                "open water cost must be positive, got {}",
                self.open_water_cost
            )));
        }
        if !(self.ice_cost_multiplier.is_finite() && self.ice_cost_multiplier >= 0.0) {
            return Err(RouteError::Configuration(format!(
                "ice cost multiplier must be non-negative, got {}",
                self.ice_cost_multiplier
            )));
        }
        if !(self.diagonal_cost.is_finite() && self.diagonal_cost >= 1.0) {
            return Err(RouteError::Configuration(format!(
                "diagonal cost must be at least 1, got {}",
                self.diagonal_cost
            )));
        }
        Ok(())
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Map a lon/lat onto the nearest grid cell.
    ///
    /// Points outside the bounding region clamp to the nearest edge cell.
    pub fn to_grid(&self, lon: f64, lat: f64) -> GridCell {
        let b = &self.bounds;
        let x = (lon - b.min_lon) / b.lon_span() * self.width as f64;
        // Inverted: row 0 is max_lat.
        let y = (b.max_lat - lat) / b.lat_span() * self.height as f64;

        GridCell {
            col: clamp_index(x, self.width),
            row: clamp_index(y, self.height),
        }
    }

    /// Exact inverse of the linear mapping used by [`GridConfig::to_grid`].
    pub fn to_lon_lat(&self, col: usize, row: usize) -> LonLat {
        let b = &self.bounds;
        let lon = (col as f64 / self.width as f64) * b.lon_span() + b.min_lon;
        let lat = b.max_lat - (row as f64 / self.height as f64) * b.lat_span();
        [lon, lat]
    }

    pub fn cell_lon_lat(&self, cell: GridCell) -> LonLat {
        self.to_lon_lat(cell.col, cell.row)
    }

    /// Human readable resolution, e.g. `120x90`.
    pub fn resolution_label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

fn clamp_index(value: f64, len: usize) -> usize {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    let max = len.saturating_sub(1);
    let rounded = value.round();
    if rounded >= max as f64 {
        max
    } else {
        rounded as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_edge_cells() {
        let config = GridConfig::default();
        assert_eq!(config.to_grid(-93.0, 49.0), GridCell::new(0, 0));
        assert_eq!(config.to_grid(-80.0, 41.5), GridCell::new(119, 89));
    }

    #[test]
    fn out_of_bounds_points_clamp() {
        let config = GridConfig::default();
        assert_eq!(config.to_grid(-120.0, 60.0), GridCell::new(0, 0));
        assert_eq!(config.to_grid(-10.0, 10.0), GridCell::new(119, 89));
        assert_eq!(config.to_grid(-86.5, 80.0).row, 0);
        assert_eq!(config.to_grid(f64::NAN, f64::INFINITY), GridCell::new(0, 0));
        // Scaled offsets that overflow to infinity still pick the nearest edge.
        assert_eq!(config.to_grid(1e308, 45.0).col, 119);
        assert_eq!(config.to_grid(-86.5, -1e308).row, 89);
        assert_eq!(config.to_grid(-1e308, 1e308), GridCell::new(0, 0));
    }

    #[test]
    fn known_port_cells() {
        let config = GridConfig::default();
        // Chicago
        assert_eq!(config.to_grid(-87.6298, 41.8781), GridCell::new(50, 85));
        // Milwaukee
        assert_eq!(config.to_grid(-87.9065, 43.0389), GridCell::new(47, 72));
    }

    #[test]
    fn round_trip_is_stable_for_every_cell() {
        for config in [
            GridConfig::default(),
            GridConfig::with_dimensions(7, 3),
            GridConfig::with_dimensions(1, 1),
        ] {
            for row in 0..config.height {
                for col in 0..config.width {
                    let [lon, lat] = config.to_lon_lat(col, row);
                    assert_eq!(config.to_grid(lon, lat), GridCell::new(col, row));
                }
            }
        }
    }

    #[test]
    fn validate_rejects_degenerate_configs() {
        assert!(GridConfig::default().validate().is_ok());
        assert!(matches!(
            GridConfig::with_dimensions(0, 90).validate(),
            Err(RouteError::Configuration(_))
        ));

        let mut flat = GridConfig::default();
        flat.bounds.max_lat = flat.bounds.min_lat;
        assert!(flat.validate().is_err());

        let mut inverted = GridConfig::default();
        inverted.bounds.min_lon = -70.0;
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn resolution_label_names_dimensions() {
        assert_eq!(GridConfig::default().resolution_label(), "120x90");
    }
}

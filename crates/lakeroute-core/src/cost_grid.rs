//! Rasterized traversal-cost surface over the routing grid.

use crate::error::RouteError;
use crate::features::{IceFeature, LandFeature};
use crate::grid::{GridCell, GridConfig};
use serde::{Deserialize, Serialize};

/// Cost sentinel for land cells.
pub const IMPASSABLE: f64 = f64::INFINITY;

/// Per-cell traversal costs, row-major with row 0 at the northern edge.
///
/// Built once from land and ice polygons and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CostGrid {
    config: GridConfig,
    cells: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostGridStats {
    pub width: usize,
    pub height: usize,
    pub land_cells: usize,
    pub ice_cells: usize,
    pub open_water_cells: usize,
}

impl CostGrid {
    /// Rasterize land and ice polygons onto the grid.
    ///
    /// Every cell starts at the open-water cost. A cell whose lon/lat falls in
    /// any land feature becomes impassable; otherwise the first ice feature
    /// containing it sets `open_water + value * multiplier`. Overlaps resolve
    /// by feature order.
    pub fn build(
        config: &GridConfig,
        land: &[LandFeature],
        ice: &[IceFeature],
    ) -> Result<Self, RouteError> {
        config.validate()?;

        let mut cells = vec![config.open_water_cost; config.cell_count()];

        for row in 0..config.height {
            for col in 0..config.width {
                let point = config.to_lon_lat(col, row);
                if land.iter().any(|feature| feature.contains(point)) {
                    cells[row * config.width + col] = IMPASSABLE;
                }
            }
        }

        for row in 0..config.height {
            for col in 0..config.width {
                let idx = row * config.width + col;
                if cells[idx] == IMPASSABLE {
                    continue;
                }
                let point = config.to_lon_lat(col, row);
                if let Some(feature) = ice.iter().find(|feature| feature.contains(point)) {
                    cells[idx] = config.open_water_cost + feature.value * config.ice_cost_multiplier;
                }
            }
        }

        Ok(Self {
            config: config.clone(),
            cells,
        })
    }

    /// Build a grid directly from row-major costs.
    pub fn from_costs(config: GridConfig, cells: Vec<f64>) -> Result<Self, RouteError> {
        config.validate()?;
        if cells.len() != config.cell_count() {
            return Err(RouteError::Configuration(format!(
                "expected {} cells for a {} grid, got {}",
                config.cell_count(),
                config.resolution_label(),
                cells.len()
            )));
        }
        if let Some(bad) = cells
            .iter()
            .find(|cost| cost.is_nan() || **cost < config.open_water_cost)
        {
            return Err(RouteError::Configuration(format!(
                "cell cost {} is below the open water baseline {}",
                bad, config.open_water_cost
            )));
        }
        Ok(Self { config, cells })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn width(&self) -> usize {
        self.config.width
    }

    pub fn height(&self) -> usize {
        self.config.height
    }

    pub fn contains_cell(&self, cell: GridCell) -> bool {
        cell.col < self.config.width && cell.row < self.config.height
    }

    /// Cost of entering `cell`; out-of-range cells are impassable.
    pub fn cost(&self, cell: GridCell) -> f64 {
        if !self.contains_cell(cell) {
            return IMPASSABLE;
        }
        self.cells[cell.row * self.config.width + cell.col]
    }

    pub fn is_impassable(&self, cell: GridCell) -> bool {
        self.cost(cell).is_infinite()
    }

    pub fn stats(&self) -> CostGridStats {
        let base = self.config.open_water_cost;
        let land_cells = self.cells.iter().filter(|cost| cost.is_infinite()).count();
        let open_water_cells = self.cells.iter().filter(|cost| **cost == base).count();
        CostGridStats {
            width: self.config.width,
            height: self.config.height,
            land_cells,
            ice_cells: self.cells.len() - land_cells - open_water_cells,
            open_water_cells,
        }
    }
}

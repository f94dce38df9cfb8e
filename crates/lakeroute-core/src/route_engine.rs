//! A* search over the 8-connected cost grid.
//!
//! Entering a cell costs its grid cost times the move factor (1 orthogonal,
//! diagonal factor from the grid config). Land cells are closed as soon as
//! they are seen and never expanded. The heuristic is the Euclidean distance
//! in cells scaled by the open-water cost, which never overestimates.

use crate::cost_grid::CostGrid;
use crate::grid::GridCell;
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathNode {
    pub cell: GridCell,
    /// Cumulative cost from the start cell.
    pub g_score: f64,
    /// `g_score` plus the heuristic estimate to the goal.
    pub f_score: f64,
    pub parent: Option<GridCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPath {
    pub nodes: Vec<PathNode>,
    pub cost: f64,
    pub nodes_visited: usize,
}

impl SearchPath {
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.nodes.iter().map(|node| node.cell)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenNode {
    cell: GridCell,
    g_score: FloatOrd,
    f_score: FloatOrd,
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    // Lowest f first; ties go to lower g, then row/col so runs are repeatable.
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_score
            .cmp(&other.f_score)
            .then_with(|| self.g_score.cmp(&other.g_score))
            .then_with(|| self.cell.row.cmp(&other.cell.row))
            .then_with(|| self.cell.col.cmp(&other.cell.col))
    }
}

fn euclidean(a: GridCell, b: GridCell) -> f64 {
    let dx = a.col as f64 - b.col as f64;
    let dy = a.row as f64 - b.row as f64;
    (dx * dx + dy * dy).sqrt()
}

/// In-bounds neighbours of `cell` with their move factor.
fn neighbors(
    cell: GridCell,
    width: usize,
    height: usize,
    diagonal_cost: f64,
) -> impl Iterator<Item = (GridCell, f64)> {
    const OFFSETS: [(isize, isize); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];

    OFFSETS.into_iter().filter_map(move |(dx, dy)| {
        let col = cell.col.checked_add_signed(dx)?;
        let row = cell.row.checked_add_signed(dy)?;
        if col >= width || row >= height {
            return None;
        }
        let factor = if dx != 0 && dy != 0 { diagonal_cost } else { 1.0 };
        Some((GridCell { col, row }, factor))
    })
}

/// Find the cheapest path from `start` to `goal`.
///
/// Returns `None` when either endpoint is land or out of range, or when no
/// water path connects them. That is an expected outcome, not an error.
pub fn search(grid: &CostGrid, start: GridCell, goal: GridCell) -> Option<SearchPath> {
    if grid.is_impassable(start) || grid.is_impassable(goal) {
        return None;
    }

    let width = grid.width();
    let height = grid.height();
    let config = grid.config();
    let index = |cell: GridCell| cell.row * width + cell.col;
    let heuristic = |cell: GridCell| euclidean(cell, goal) * config.open_water_cost;

    let mut g_score = vec![f64::INFINITY; width * height];
    let mut came_from: Vec<Option<GridCell>> = vec![None; width * height];
    let mut closed = vec![false; width * height];
    let mut open_set: BinaryHeap<Reverse<OpenNode>> = BinaryHeap::new();

    g_score[index(start)] = 0.0;
    open_set.push(Reverse(OpenNode {
        cell: start,
        g_score: FloatOrd(0.0),
        f_score: FloatOrd(heuristic(start)),
    }));

    let mut nodes_visited = 0usize;

    while let Some(Reverse(current)) = open_set.pop() {
        let current_idx = index(current.cell);
        // Superseded heap entry for a cell that is already final.
        if closed[current_idx] {
            continue;
        }

        nodes_visited += 1;

        if current.cell == goal {
            return Some(reconstruct_path(
                goal,
                &came_from,
                &g_score,
                width,
                &heuristic,
                nodes_visited,
            ));
        }

        closed[current_idx] = true;
        let best_g = g_score[current_idx];

        for (neighbor, move_factor) in neighbors(current.cell, width, height, config.diagonal_cost)
        {
            let neighbor_idx = index(neighbor);
            if closed[neighbor_idx] {
                continue;
            }

            let cell_cost = grid.cost(neighbor);
            if cell_cost.is_infinite() {
                closed[neighbor_idx] = true;
                continue;
            }

            let tentative_g = best_g + cell_cost * move_factor;
            if tentative_g < g_score[neighbor_idx] {
                g_score[neighbor_idx] = tentative_g;
                came_from[neighbor_idx] = Some(current.cell);
                open_set.push(Reverse(OpenNode {
                    cell: neighbor,
                    g_score: FloatOrd(tentative_g),
                    f_score: FloatOrd(tentative_g + heuristic(neighbor)),
                }));
            }
        }
    }

    None
}

fn reconstruct_path<H>(
    goal: GridCell,
    came_from: &[Option<GridCell>],
    g_score: &[f64],
    width: usize,
    heuristic: H,
    nodes_visited: usize,
) -> SearchPath
where
    H: Fn(GridCell) -> f64,
{
    let mut nodes = Vec::new();
    let mut current = Some(goal);
    while let Some(cell) = current {
        let idx = cell.row * width + cell.col;
        let parent = came_from[idx];
        nodes.push(PathNode {
            cell,
            g_score: g_score[idx],
            f_score: g_score[idx] + heuristic(cell),
            parent,
        });
        current = parent;
    }
    nodes.reverse();

    SearchPath {
        cost: g_score[goal.row * width + goal.col],
        nodes,
        nodes_visited,
    }
}

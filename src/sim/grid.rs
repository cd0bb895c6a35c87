//! Procedural block grid layout
//!
//! Rows descend from the anchor by block height. Within a row the cursor
//! advances by `(i + 1) * sign(i) * width` after column `i`, with `sign`
//! alternating +1/-1. That fans the blocks out around the anchor with growing
//! offsets instead of a uniform grid:
//!
//! ```text
//! column:   0    1    2    3    4
//! offset:   0   +1   -1   +2   -2   (in block widths)
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::registry::BlockRegistry;
use crate::column_sign;
use crate::settings::{BlockTemplate, GridSpec};

/// One placed cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub template_index: usize,
    pub pos: Vec2,
}

/// Compute block placements. Pure: same inputs, same cells.
pub fn generate(anchor: Vec2, columns: u32, rows: u32, templates: &[BlockTemplate]) -> Vec<GridCell> {
    if templates.is_empty() {
        if columns > 0 && rows > 0 {
            log::warn!("Grid has no block templates, nothing to place");
        }
        return Vec::new();
    }

    let mut cells = Vec::with_capacity(columns as usize * rows as usize);
    let mut pos = anchor;
    let mut block_height = 0.0;

    for j in 0..rows {
        let template_index = j as usize % templates.len();
        let size = templates[template_index].size;

        for i in 0..columns {
            cells.push(GridCell { template_index, pos });
            block_height = size.y;
            pos.x += (i + 1) as f32 * column_sign(i) * size.x;
        }

        pos = Vec2::new(anchor.x, pos.y - block_height);
    }

    cells
}

/// Places a `GridSpec` into a block registry
#[derive(Debug, Clone)]
pub struct GridGenerator {
    spec: GridSpec,
}

impl GridGenerator {
    pub fn new(spec: GridSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn cells(&self) -> Vec<GridCell> {
        generate(
            self.spec.anchor,
            self.spec.columns,
            self.spec.rows,
            &self.spec.templates,
        )
    }

    /// Clear the registry and fill it with a fresh grid.
    /// Returns the number of blocks placed.
    pub fn populate(&self, registry: &mut BlockRegistry) -> usize {
        registry.clear();

        let cells = self.cells();
        for cell in &cells {
            registry.insert(&self.spec.templates[cell.template_index], cell.pos);
        }

        log::info!(
            "Generated {} blocks ({}x{}) at {:?}",
            cells.len(),
            self.spec.columns,
            self.spec.rows,
            self.spec.anchor
        );
        cells.len()
    }
}

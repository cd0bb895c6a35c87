//! Live block container owned by the level
//!
//! Replaces scene-wide "find every block" queries: the grid generator fills
//! it, contacts mutate it and the ball controller asks it for a count.

use glam::Vec2;

use super::block::{Block, BlockOutcome, EntityKind, SpawnedEntity};
use crate::settings::BlockTemplate;

#[derive(Debug, Clone)]
pub struct BlockRegistry {
    /// Live blocks (sorted by id)
    blocks: Vec<Block>,
    /// Entities spawned by destroyed blocks
    spawned: Vec<SpawnedEntity>,
    next_id: u32,
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            spawned: Vec::new(),
            next_id: 1,
        }
    }

    /// Instantiate a block from a template
    pub fn insert(&mut self, template: &BlockTemplate, pos: Vec2) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.blocks.push(Block::from_template(id, template, pos));
        id
    }

    pub fn live_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Block> {
        self.index_of(id).map(|i| &self.blocks[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    pub fn spawned(&self) -> &[SpawnedEntity] {
        &self.spawned
    }

    /// Destroy every block and spawned entity
    pub fn clear(&mut self) {
        if !self.blocks.is_empty() {
            log::debug!("Clearing {} blocks", self.blocks.len());
        }
        self.blocks.clear();
        self.spawned.clear();
    }

    /// Route a contact to a block. `None` if the block is already gone.
    pub fn contact(&mut self, id: u32, other: EntityKind) -> Option<BlockOutcome> {
        let index = self.index_of(id)?;
        let outcome = self.blocks[index].on_contact(other);

        if let BlockOutcome::Destroyed { spawn } = &outcome {
            let block = self.blocks.remove(index);
            log::debug!("Block {} ({}) destroyed at {:?}", block.id, block.template, block.pos);
            if let Some(spawn) = spawn {
                self.spawned.push(spawn.clone());
            }
        }
        Some(outcome)
    }

    /// Route a trigger overlap. Returns true if the block was removed.
    pub fn sensor_overlap(&mut self, id: u32, other: EntityKind) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if !self.blocks[index].on_sensor_overlap(other) {
            return false;
        }
        let block = self.blocks.remove(index);
        log::debug!("Block {} removed by sensor overlap", block.id);
        true
    }

    fn index_of(&self, id: u32) -> Option<usize> {
        self.blocks.binary_search_by_key(&id, |b| b.id).ok()
    }
}

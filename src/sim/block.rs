//! Destructible blocks

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::BlockTemplate;

/// Kinds of entity a block can be touched by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Ball,
    Paddle,
    Block,
    Wall,
    KillBoundary,
    Other,
}

/// An entity left behind by a destroyed block (pickup, reward, debris)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnedEntity {
    pub template: String,
    pub pos: Vec2,
    /// Always identity; spawns are never rotated
    pub rotation: f32,
}

/// What a contact did to a block
#[derive(Debug, Clone, PartialEq)]
pub enum BlockOutcome {
    /// Not a ball, nothing happened
    Ignored,
    /// Lost a hit point and survived
    Damaged { remaining: u32 },
    /// Out of hit points
    Destroyed { spawn: Option<SpawnedEntity> },
}

/// A block entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    hp: u32,
    score_value: u32,
    spawn: Option<String>,
    pub hit_sound: bool,
    pub template: String,
}

impl Block {
    pub fn from_template(id: u32, template: &BlockTemplate, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            size: template.size,
            hp: template.life.max(1),
            score_value: template.score_value,
            spawn: template.spawn.clone(),
            hit_sound: template.hit_sound,
            template: template.name.clone(),
        }
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    /// Points the ball collects for touching this block
    pub fn score_value(&self) -> u32 {
        self.score_value
    }

    pub fn spawn_template(&self) -> Option<&str> {
        self.spawn.as_deref()
    }

    /// Physical contact. Only the ball does damage.
    pub fn on_contact(&mut self, other: EntityKind) -> BlockOutcome {
        if other != EntityKind::Ball {
            return BlockOutcome::Ignored;
        }

        self.hp = self.hp.saturating_sub(1);
        if self.hp >= 1 {
            return BlockOutcome::Damaged { remaining: self.hp };
        }

        let spawn = self.spawn.as_ref().map(|template| SpawnedEntity {
            template: template.clone(),
            pos: self.pos,
            rotation: 0.0,
        });
        BlockOutcome::Destroyed { spawn }
    }

    /// Trigger-region overlap: the ball removes the block outright
    pub fn on_sensor_overlap(&self, other: EntityKind) -> bool {
        other == EntityKind::Ball
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(life: u32, spawn: Option<&str>) -> Block {
        let template = BlockTemplate {
            life,
            score_value: 100,
            spawn: spawn.map(str::to_string),
            ..Default::default()
        };
        Block::from_template(1, &template, Vec2::new(2.0, 3.0))
    }

    #[test]
    fn test_destroyed_after_exactly_life_contacts() {
        let mut b = block(3, None);
        assert_eq!(b.on_contact(EntityKind::Ball), BlockOutcome::Damaged { remaining: 2 });
        assert_eq!(b.on_contact(EntityKind::Ball), BlockOutcome::Damaged { remaining: 1 });
        assert_eq!(b.on_contact(EntityKind::Ball), BlockOutcome::Destroyed { spawn: None });
        assert_eq!(b.hp(), 0);
    }

    #[test]
    fn test_spawn_at_last_position() {
        let mut b = block(1, Some("gem"));
        match b.on_contact(EntityKind::Ball) {
            BlockOutcome::Destroyed { spawn: Some(spawn) } => {
                assert_eq!(spawn.template, "gem");
                assert_eq!(spawn.pos, Vec2::new(2.0, 3.0));
                assert_eq!(spawn.rotation, 0.0);
            }
            other => panic!("expected destroyed with spawn, got {:?}", other),
        }
    }

    #[test]
    fn test_non_ball_contacts_are_ignored() {
        let mut b = block(2, None);
        assert_eq!(b.on_contact(EntityKind::Paddle), BlockOutcome::Ignored);
        assert_eq!(b.on_contact(EntityKind::Block), BlockOutcome::Ignored);
        assert_eq!(b.hp(), 2);
    }

    #[test]
    fn test_zero_life_template_still_takes_one_hit() {
        let mut b = block(0, None);
        assert_eq!(b.hp(), 1);
        assert!(matches!(b.on_contact(EntityKind::Ball), BlockOutcome::Destroyed { .. }));
    }

    #[test]
    fn test_sensor_only_reacts_to_ball() {
        let b = block(2, None);
        assert!(b.on_sensor_overlap(EntityKind::Ball));
        assert!(!b.on_sensor_overlap(EntityKind::Wall));
    }
}

//! Level session: the single entry point for a host driver loop
//!
//! Owns the ball controller, the live block registry and the grid generator,
//! and routes host physics events to them in a fixed order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::{BallController, GamePhase};
use super::block::EntityKind;
use super::body::PhysicsBody;
use super::grid::GridGenerator;
use super::registry::BlockRegistry;
use crate::hooks::{Cue, Hooks};
use crate::settings::Settings;

/// What the ball touched
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Contact {
    /// A block, by registry id
    Block(u32),
    /// The paddle's center and collider width
    Paddle { pos: Vec2, width: f32 },
    Wall,
    KillBoundary,
    Other,
}

/// Non-physical overlap regions the ball can enter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    KillBoundary,
    Other,
}

/// Host events, in delivery order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HostEvent {
    ContactBegin(Contact),
    ContactEnd(Contact),
    OverlapBegin(Region),
    /// Something entered a block's trigger region
    BlockSensorOverlap { block: u32, other: EntityKind },
    Launch,
    Reset,
}

/// Observable state of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    pub blocks: Vec<(Vec2, u32)>,
    pub spawned: usize,
}

pub struct Session<B: PhysicsBody> {
    ball: BallController<B>,
    blocks: BlockRegistry,
    generator: GridGenerator,
}

impl<B: PhysicsBody> Session<B> {
    pub fn new(settings: Settings, body: B, hooks: Hooks) -> Self {
        let settings = settings.sanitized();
        Self {
            ball: BallController::new(body, settings.ball, settings.labels, hooks),
            blocks: BlockRegistry::new(),
            generator: GridGenerator::new(settings.grid),
        }
    }

    /// Build the grid and initialize the ball (auto-launching when there is
    /// no start control)
    pub fn start(&mut self) {
        self.generator.populate(&mut self.blocks);
        self.ball.start(&self.blocks);
    }

    pub fn launch(&mut self) -> bool {
        self.ball.launch()
    }

    pub fn reset(&mut self) {
        self.ball.reset(&mut self.blocks, &self.generator);
    }

    pub fn score(&self) -> u64 {
        self.ball.score()
    }

    pub fn phase(&self) -> GamePhase {
        self.ball.phase()
    }

    pub fn ball(&self) -> &BallController<B> {
        &self.ball
    }

    pub fn ball_mut(&mut self) -> &mut BallController<B> {
        &mut self.ball
    }

    pub fn blocks(&self) -> &BlockRegistry {
        &self.blocks
    }

    /// Contact-begin for the ball. A block reacts first, then the ball
    /// scores it and checks the remaining count.
    pub fn ball_contact(&mut self, contact: Contact) {
        match contact {
            Contact::Block(id) => {
                let Some((score_value, hit_sound)) =
                    self.blocks.get(id).map(|b| (b.score_value(), b.hit_sound))
                else {
                    log::debug!("Contact with unknown block {}", id);
                    self.ball.on_plain_contact();
                    return;
                };

                self.blocks.contact(id, EntityKind::Ball);
                if hit_sound {
                    self.ball.hooks_mut().play(Cue::BlockHit);
                }
                self.ball.on_block_contact(score_value, &self.blocks);
            }
            Contact::Paddle { pos, width } => self.ball.on_paddle_contact(pos, width),
            Contact::KillBoundary => self.ball.on_kill_contact(),
            Contact::Wall | Contact::Other => self.ball.on_plain_contact(),
        }
    }

    /// Contact-end for the ball, whatever the partner was
    pub fn ball_separation(&mut self, _contact: Contact) {
        self.ball.on_separation();
    }

    pub fn ball_overlap(&mut self, region: Region) {
        if region == Region::KillBoundary {
            self.ball.on_kill_overlap();
        }
    }

    pub fn block_sensor_overlap(&mut self, block: u32, other: EntityKind) {
        self.blocks.sensor_overlap(block, other);
    }

    /// Route one host event
    pub fn dispatch(&mut self, event: HostEvent) {
        match event {
            HostEvent::ContactBegin(contact) => self.ball_contact(contact),
            HostEvent::ContactEnd(contact) => self.ball_separation(contact),
            HostEvent::OverlapBegin(region) => self.ball_overlap(region),
            HostEvent::BlockSensorOverlap { block, other } => {
                self.block_sensor_overlap(block, other)
            }
            HostEvent::Launch => {
                self.launch();
            }
            HostEvent::Reset => self.reset(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase(),
            score: self.score(),
            ball_pos: self.ball.body().position(),
            ball_vel: self.ball.body().velocity(),
            blocks: self.blocks.iter().map(|b| (b.pos, b.hp())).collect(),
            spawned: self.blocks.spawned().len(),
        }
    }
}

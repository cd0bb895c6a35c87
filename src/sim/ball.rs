//! Ball controller and game phase state machine
//!
//! Every method here is called synchronously from a host contact callback.
//! Nothing blocks or fails: degenerate input (zero velocity, zero-width
//! paddle, events in the wrong phase) turns into a no-op.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::PhysicsBody;
use super::grid::GridGenerator;
use super::registry::BlockRegistry;
use crate::consts::CLEAR_THRESHOLD;
use crate::hooks::{Cue, Hooks};
use crate::settings::{BallSettings, Labels};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for launch
    #[default]
    NotStarted,
    /// Ball in flight
    Playing,
    /// Ball crossed the kill boundary
    GameOver,
    /// Fewer than two blocks left
    GameClear,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::GameClear)
    }
}

/// Where along the paddle the ball hit: 0 at the center, +0.5 at the right
/// edge, -0.5 at the left edge. Not clamped.
pub fn hit_factor(ball_x: f32, paddle_x: f32, paddle_width: f32) -> f32 {
    if paddle_width <= 0.0 {
        log::warn!("Paddle width {} is not positive, no deflection", paddle_width);
        return 0.0;
    }
    (ball_x - paddle_x) / paddle_width
}

/// Drives the ball body and owns score and phase
pub struct BallController<B: PhysicsBody> {
    body: B,
    settings: BallSettings,
    labels: Labels,
    hooks: Hooks,
    score: u64,
    phase: GamePhase,
    initial_pos: Vec2,
}

impl<B: PhysicsBody> BallController<B> {
    pub fn new(body: B, settings: BallSettings, labels: Labels, hooks: Hooks) -> Self {
        let initial_pos = body.position();
        Self {
            body,
            settings,
            labels,
            hooks,
            score: 0,
            phase: GamePhase::NotStarted,
            initial_pos,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn hooks_mut(&mut self) -> &mut Hooks {
        &mut self.hooks
    }

    pub fn settings(&self) -> &BallSettings {
        &self.settings
    }

    pub fn initial_position(&self) -> Vec2 {
        self.initial_pos
    }

    /// Level start: snapshot the spawn position, zero the score and launch
    /// straight away when there is no start control to wait for.
    pub fn start(&mut self, blocks: &BlockRegistry) {
        self.initial_pos = self.body.position();
        self.score = 0;
        self.add_score(0, blocks);

        if !self.hooks.has_start_control() {
            log::info!("No start control, launching immediately");
            self.launch();
        }
    }

    /// Kick the ball off. Returns false outside `NotStarted`.
    pub fn launch(&mut self) -> bool {
        if self.phase != GamePhase::NotStarted {
            log::debug!("Ignoring launch in {:?}", self.phase);
            return false;
        }

        let impulse = self.settings.power_direction.normalize_or_zero() * self.settings.power_scale;
        self.body.apply_impulse(impulse);
        self.hooks.set_start_visible(false);
        self.adjust_speed();
        self.phase = GamePhase::Playing;

        log::info!("Ball launched, velocity {:?}", self.body.velocity());
        true
    }

    /// Ball touched a block worth `score_value`. `blocks` must already
    /// reflect the block's own reaction to this contact.
    pub fn on_block_contact(&mut self, score_value: u32, blocks: &BlockRegistry) {
        if self.phase == GamePhase::Playing {
            self.add_score(score_value as u64, blocks);
        }
        self.hooks.play(Cue::Impact);
    }

    /// Ball touched the paddle: steer it by where it hit
    pub fn on_paddle_contact(&mut self, paddle_pos: Vec2, paddle_width: f32) {
        if self.phase == GamePhase::Playing {
            let factor = hit_factor(self.body.position().x, paddle_pos.x, paddle_width);
            self.body
                .apply_impulse(Vec2::X * factor * self.settings.hit_coefficient);
            self.adjust_speed();
            log::debug!("Paddle hit, factor {:.3}", factor);
        }
        self.hooks.play(Cue::Impact);
    }

    /// Ball touched the kill boundary
    pub fn on_kill_contact(&mut self) {
        self.hooks.play(Cue::Impact);
        if self.phase == GamePhase::Playing {
            self.game_over();
        }
    }

    /// Walls and anything unrecognized: the physics engine bounces, we only
    /// make noise
    pub fn on_plain_contact(&mut self) {
        self.hooks.play(Cue::Impact);
    }

    /// Contact ended. Break up near-horizontal trajectories that would never
    /// come back down, then re-clamp.
    pub fn on_separation(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }

        let dir = self.body.velocity().normalize_or_zero();
        if dir == Vec2::ZERO {
            return;
        }
        if dir.y.abs() < self.settings.horizontal_limit {
            log::debug!("Near-horizontal trajectory {:?}, correcting", dir);
            self.body.apply_impulse(self.settings.adjust_impulse);
        }
        self.adjust_speed();
    }

    /// Sensor form of the kill boundary
    pub fn on_kill_overlap(&mut self) {
        if self.phase == GamePhase::Playing {
            self.game_over();
        }
    }

    /// Add points, refresh the readout and check for a clear
    pub fn add_score(&mut self, amount: u64, blocks: &BlockRegistry) {
        self.score += amount;
        log::info!("Score: {}", self.score);
        self.hooks.set_score_text(&self.labels.score_text(self.score));

        let remaining = blocks.live_count();
        log::debug!("{} blocks remaining", remaining);
        if remaining < CLEAR_THRESHOLD && self.phase == GamePhase::Playing {
            self.game_clear();
        }
    }

    /// Clamp speed into `[min_speed, max_speed]`, keeping direction
    pub fn adjust_speed(&mut self) {
        let (min, max) = (self.settings.min_speed, self.settings.max_speed);
        if let Some(vel) = crate::clamp_length(self.body.velocity(), min, max) {
            self.body.set_velocity(vel);
        }
    }

    /// Back to a fresh, unlaunched level
    pub fn reset(&mut self, blocks: &mut BlockRegistry, generator: &GridGenerator) {
        self.phase = GamePhase::NotStarted;
        self.score = 0;
        self.add_score(0, blocks);

        self.body.set_position(self.initial_pos);
        self.body.set_velocity(Vec2::ZERO);

        blocks.clear();
        generator.populate(blocks);

        self.hooks.hide_message();
        self.hooks.set_restart_visible(false);
        self.hooks.set_start_visible(true);

        log::info!("Game reset");
    }

    fn game_over(&mut self) {
        log::info!("Game over with score {}", self.score);
        let message = self.labels.game_over.clone();
        self.finish(GamePhase::GameOver, &message, Cue::GameOver);
    }

    fn game_clear(&mut self) {
        log::info!("Clear! Score {}", self.score);
        let message = self.labels.game_clear.clone();
        self.finish(GamePhase::GameClear, &message, Cue::GameClear);
    }

    fn finish(&mut self, phase: GamePhase, message: &str, cue: Cue) {
        self.body.set_velocity(Vec2::ZERO);
        self.phase = phase;
        self.hooks.show_message(message);
        self.hooks.play(cue);
        self.hooks.set_restart_visible(true);
    }
}

//! Block Breaker headless demo
//!
//! Plays seeded autoplay rounds against the gameplay core, feeding it the
//! contact events a physics engine would report.
//!
//! Usage: `block-breaker [settings.json] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use block_breaker::Settings;
    use block_breaker::hooks::logging;
    use block_breaker::sim::{GamePhase, KinematicBody, Session};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345u64);

    log::info!("Block Breaker starting with seed {}", seed);

    let body = KinematicBody::new(Vec2::new(0.0, -3.0), settings.ball.mass);
    let mut session = Session::new(settings, body, logging::hooks(true));
    session.start();

    let mut rng = Pcg32::seed_from_u64(seed);
    for round in 1..=ROUNDS {
        session.launch();
        let steps = autoplay::run(&mut session, &mut rng);

        let snapshot = session.snapshot();
        log::info!(
            "Round {} finished after {} events: {:?}, score {}, {} blocks left",
            round,
            steps,
            snapshot.phase,
            snapshot.score,
            snapshot.blocks.len()
        );
        match serde_json::to_string(&snapshot) {
            Ok(json) => println!("{}", json),
            Err(e) => log::warn!("Could not serialize snapshot: {}", e),
        }

        if session.phase() == GamePhase::Playing {
            log::info!("Event budget exhausted");
        }
        session.reset();
    }
}

#[cfg(not(target_arch = "wasm32"))]
const ROUNDS: u32 = 2;

#[cfg(not(target_arch = "wasm32"))]
mod autoplay {
    use block_breaker::sim::{Contact, GamePhase, HostEvent, KinematicBody, PhysicsBody, Session};
    use glam::Vec2;
    use rand::Rng;
    use rand_pcg::Pcg32;

    /// Upper bound on contacts per round
    const MAX_EVENTS: u32 = 2_000;
    const PADDLE_WIDTH: f32 = 2.0;
    /// Chance (percent) that a paddle return misses
    const MISS_CHANCE: u32 = 3;

    /// Feed random contact pairs until the round ends. Returns the number of
    /// contacts delivered.
    pub fn run(session: &mut Session<KinematicBody>, rng: &mut Pcg32) -> u32 {
        let mut steps = 0;
        while session.phase() == GamePhase::Playing && steps < MAX_EVENTS {
            let contact = next_contact(session, rng);
            session.dispatch(HostEvent::ContactBegin(contact));
            session.dispatch(HostEvent::ContactEnd(contact));

            let body = session.ball_mut().body_mut();
            body.integrate(1.0 / 60.0);
            // Stand-in for the engine's bounce resolution
            if matches!(contact, Contact::Paddle { .. }) {
                let vel = body.velocity();
                body.set_velocity(Vec2::new(vel.x, vel.y.abs()));
            } else {
                let vel = body.velocity();
                body.set_velocity(Vec2::new(vel.x, -vel.y.abs()));
            }
            steps += 1;
        }
        steps
    }

    fn next_contact(session: &Session<KinematicBody>, rng: &mut Pcg32) -> Contact {
        let ball_pos = session.ball().body().position();
        let descending = session.ball().body().velocity().y < 0.0;

        if descending {
            if rng.random_range(0..100) < MISS_CHANCE {
                return Contact::KillBoundary;
            }
            let offset = rng.random_range(-0.6..0.6) * PADDLE_WIDTH;
            return Contact::Paddle {
                pos: Vec2::new(ball_pos.x - offset, ball_pos.y - 0.5),
                width: PADDLE_WIDTH,
            };
        }

        let live = session.blocks().live_count();
        if live == 0 || rng.random_range(0..4) == 0 {
            return Contact::Wall;
        }
        let pick = rng.random_range(0..live);
        match session.blocks().iter().nth(pick) {
            Some(block) => Contact::Block(block.id),
            None => Contact::Wall,
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Headless demo is native-only; web hosts drive `Session` directly.
}

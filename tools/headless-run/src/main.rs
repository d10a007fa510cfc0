//! headless-run: drives the simulation without a window or GPU.
//!
//! Usage:
//!   headless-run [--config sim.json] [--ticks 600]
//!
//! Spawns a seeded arena, lets enemies walk toward the player while both
//! sides swing attacks, and logs a summary once per simulated second.
//! Set `RUST_LOG=quilly_sim=debug` to see individual hits.

use std::path::PathBuf;
use std::process;

use glam::{Mat4, Vec2};
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use quilly_core::components::{EntityTypeTag, Removed, Stats, Transform};
use quilly_core::config::SimConfig;
use quilly_core::enums::EntityType;
use quilly_core::types::{SpriteRect, TextureId};
use quilly_sim::gfx::{PhysicsWorld, SpriteBatch, Viewport};
use quilly_sim::{world_setup, SimulationEngine};

const DEFAULT_TICKS: u64 = 600;
const ENEMY_SPEED: f32 = 2.0;
const ATTACK_INTERVAL_TICKS: u64 = 30;
const PLAYER_ATTACK_DAMAGE: f32 = 8.0;
const ENEMY_ATTACK_DAMAGE: f32 = 3.0;
const ATTACK_LIFE_SPAN: f32 = 0.2;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let config = match parse_path(&args, "--config") {
        Some(path) => match SimConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                error!("{err}");
                process::exit(1);
            }
        },
        None => SimConfig::default(),
    };
    let ticks = match parse_flag(&args, "--ticks") {
        Some(value) => match value.parse::<u64>() {
            Ok(n) => n,
            Err(_) => {
                error!("--ticks expects a number, got {value}");
                process::exit(1);
            }
        },
        None => DEFAULT_TICKS,
    };

    run(config, ticks);
}

fn print_usage() {
    eprintln!(
        "headless-run: run the Quilly Jumper simulation without a window\n\
         \n\
           --config <path>  JSON SimConfig (optional, defaults apply)\n\
           --ticks <N>      Number of ticks to simulate (default: {DEFAULT_TICKS})\n"
    );
}

fn parse_flag<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_path(args: &[String], flag: &str) -> Option<PathBuf> {
    parse_flag(args, flag).map(PathBuf::from)
}

fn run(config: SimConfig, ticks: u64) {
    let dt = config.dt();
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut engine = SimulationEngine::new(config.clone());
    let player = world_setup::spawn_arena(engine.store_mut(), &mut rng, &config.arena);

    let mut viewport = OrthoViewport {
        combined: Mat4::orthographic_rh(
            0.0,
            config.arena.width,
            0.0,
            config.arena.height,
            -1.0,
            1.0,
        ),
    };
    let mut batch = CountingBatch::default();
    let mut drawn_total = 0;

    for tick in 0..ticks {
        move_enemies(engine.store_mut().world_mut(), player, dt);
        if tick % ATTACK_INTERVAL_TICKS == 0 {
            swing_attacks(&mut engine, player);
        }

        let mut physics = AabbPhysics::from_world(engine.world());
        engine.tick(dt, &physics);
        drawn_total += engine.render(&mut viewport, &mut batch, &mut physics).drawn;

        if !engine.world().contains(player) {
            info!(tick, "player defeated");
            break;
        }
        if (tick + 1) % u64::from(config.tick_rate) == 0 {
            log_summary(engine.world(), player, tick + 1);
        }
    }

    info!(
        ticks = engine.time().tick,
        elapsed_secs = engine.time().elapsed_secs,
        drawn_total,
        batches = batch.batches,
        "run finished"
    );
    engine.shutdown();
}

fn log_summary(world: &World, player: Entity, tick: u64) {
    let enemies = world
        .query::<&EntityTypeTag>()
        .iter()
        .filter(|(_, tag)| tag.kind == EntityType::Enemy)
        .count();
    let player_life = world.get::<&Stats>(player).map(|s| s.life).unwrap_or(0.0);
    info!(tick, enemies, player_life, "arena status");
}

/// Walk every living enemy toward the player.
fn move_enemies(world: &mut World, player: Entity, dt: f32) {
    let Ok(target) = world.get::<&Transform>(player).map(|t| t.position) else {
        return;
    };
    for (_entity, (transform, tag)) in world
        .query_mut::<(&mut Transform, &EntityTypeTag)>()
        .without::<&Removed>()
    {
        if tag.kind != EntityType::Enemy {
            continue;
        }
        let step = (target - transform.position).clamp_length_max(ENEMY_SPEED * dt);
        transform.position += step;
        transform.interpolated_position = transform.position;
    }
}

/// The player swings around itself; every enemy swings at its own position.
fn swing_attacks(engine: &mut SimulationEngine, player: Entity) {
    let swings: Vec<(Entity, Vec2, f32)> = engine
        .world()
        .query::<(&Transform, &EntityTypeTag)>()
        .iter()
        .filter_map(|(entity, (transform, tag))| match tag.kind {
            EntityType::Player if entity == player => Some((
                entity,
                transform.position - transform.size,
                PLAYER_ATTACK_DAMAGE,
            )),
            EntityType::Enemy => Some((entity, transform.position, ENEMY_ATTACK_DAMAGE)),
            _ => None,
        })
        .collect();

    for (source, position, damage) in swings {
        let size = if source == player {
            Vec2::splat(3.0)
        } else {
            Vec2::ONE
        };
        world_setup::spawn_attack(
            engine.store_mut(),
            source,
            position,
            size,
            damage,
            ATTACK_LIFE_SPAN,
        );
    }
}

/// Brute-force AABB overlap test over every entity with a `Transform`.
struct AabbPhysics {
    pairs: Vec<(Entity, Entity)>,
}

impl AabbPhysics {
    fn from_world(world: &World) -> Self {
        let boxes: Vec<(Entity, Vec2, Vec2)> = world
            .query::<&Transform>()
            .iter()
            .map(|(entity, t)| (entity, t.position, t.position + t.size))
            .collect();

        let mut pairs = Vec::new();
        for (i, (a, a_min, a_max)) in boxes.iter().enumerate() {
            for (b, b_min, b_max) in &boxes[i + 1..] {
                let overlaps = a_min.x < b_max.x
                    && b_min.x < a_max.x
                    && a_min.y < b_max.y
                    && b_min.y < a_max.y;
                if overlaps {
                    pairs.push((*a, *b));
                }
            }
        }

        Self { pairs }
    }
}

impl PhysicsWorld for AabbPhysics {
    fn contacts(&self) -> Vec<(Entity, Entity)> {
        self.pairs.clone()
    }

    // No body outlines to draw without a GPU.
    fn debug_render(&mut self, _projection: &Mat4) {}
}

struct OrthoViewport {
    combined: Mat4,
}

impl Viewport for OrthoViewport {
    fn apply(&mut self) {}

    fn combined(&self) -> Mat4 {
        self.combined
    }
}

#[derive(Default)]
struct CountingBatch {
    batches: u64,
}

impl SpriteBatch for CountingBatch {
    fn set_projection(&mut self, _projection: Mat4) {}

    fn begin(&mut self) {}

    fn draw(&mut self, _texture: TextureId, _rect: SpriteRect) {}

    fn end(&mut self) {
        self.batches += 1;
    }
}

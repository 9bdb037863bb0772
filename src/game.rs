//! This module contains the main game state and the frame orchestrator.

use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::query::With;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::{schedule::Schedule, world::World};
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{error, info};

use crate::constants::{GOBLIN_RADIUS, MAX_HEALTH, PLAYER_RADIUS, TREASURE_RADIUS};
use crate::error::{GameError, GameResult};
use crate::events::{GameCommand, GameEvent};
use crate::map::builder::{Maze, Obstacle};
use crate::map::direction::Direction;
use crate::map::spawn::plan_spawns;
use crate::systems::{
    collision_system, damage_system, goblin_ai_system, pickup_system, player_movement_system, random_heading, Animated,
    Collider, DeltaTime, EntityKind, GameRng, Goblin, GoblinBundle, Health, InputState, PlayerBundle, PlayerControlled,
    Position, Score, SessionState, Treasure, TreasureBundle,
};

/// The player's state as seen by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct PlayerView {
    pub position: Vec2,
    pub facing: Option<Direction>,
    pub frame: usize,
    pub health: f32,
    pub score: u32,
}

/// A moving entity's pose as seen by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct SpriteView {
    pub position: Vec2,
    pub facing: Direction,
    pub frame: usize,
}

/// Everything the renderer needs to draw one frame. Plain data; the renderer
/// cannot reach back into the simulation through it.
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    pub player: PlayerView,
    pub goblins: Vec<SpriteView>,
    pub treasures: Vec<Vec2>,
    pub obstacles: Vec<Obstacle>,
    pub paused: bool,
    pub defeated: bool,
    pub victorious: bool,
}

/// The `Game` struct is the main entry point for the simulation.
///
/// It owns the ECS world and the per-tick schedule, and is responsible for
/// spawning the session's entities and sequencing one simulation tick.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Creates a session on the standard board with OS-seeded randomness.
    pub fn new() -> GameResult<Game> {
        Game::with_maze(Maze::standard()?, SmallRng::from_os_rng())
    }

    /// Creates a session on the standard board with a fixed seed, for
    /// reproducible runs.
    pub fn new_seeded(seed: u64) -> GameResult<Game> {
        Game::with_maze(Maze::standard()?, SmallRng::seed_from_u64(seed))
    }

    /// Creates a session on an arbitrary maze.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::MazeError::NoSpawnPositions`] (wrapped) when
    /// the maze has no floor cells.
    pub fn with_maze(maze: Maze, mut rng: SmallRng) -> GameResult<Game> {
        let mut world = World::default();
        let mut schedule = Schedule::default();

        EventRegistry::register_event::<GameError>(&mut world);
        EventRegistry::register_event::<GameEvent>(&mut world);

        let plan = plan_spawns(&maze.spawn_points, &mut rng)?;

        world.spawn(PlayerBundle {
            player: PlayerControlled,
            kind: EntityKind::Player,
            position: Position(plan.player),
            collider: Collider { radius: PLAYER_RADIUS },
            health: Health(MAX_HEALTH),
            score: Score(0),
            animated: Animated::default(),
        });

        for site in &plan.treasures {
            world.spawn(TreasureBundle {
                kind: EntityKind::Treasure,
                position: Position(*site),
                collider: Collider {
                    radius: TREASURE_RADIUS,
                },
                treasure: Treasure,
            });
        }

        for site in &plan.goblins {
            world.spawn(GoblinBundle {
                kind: EntityKind::Goblin,
                position: Position(*site),
                collider: Collider { radius: GOBLIN_RADIUS },
                goblin: Goblin {
                    heading: random_heading(&mut rng),
                    redirect_timer: 0.0,
                },
                animated: Animated::default(),
            });
        }

        info!(
            treasures = plan.treasures.len(),
            goblins = plan.goblins.len(),
            "Session entities spawned"
        );

        world.insert_resource(maze);
        world.insert_resource(DeltaTime(0.0));
        world.insert_resource(InputState::default());
        world.insert_resource(SessionState::default());
        world.insert_resource(GameRng(rng));

        schedule.add_systems(
            (
                player_movement_system,
                goblin_ai_system,
                collision_system,
                pickup_system,
                damage_system,
            )
                .chain(),
        );

        Ok(Game { world, schedule })
    }

    /// Advances the simulation by one tick.
    ///
    /// Discrete commands are applied first, so a pause or exit pressed this
    /// frame takes effect this frame. While paused no simulation state
    /// mutates at all; rendering may keep going on the last snapshot.
    ///
    /// Returns true if the game should exit.
    pub fn tick(&mut self, dt: f32, input: InputState, commands: &[GameCommand]) -> bool {
        for command in commands {
            match command {
                GameCommand::TogglePause => {
                    let mut session = self.world.resource_mut::<SessionState>();
                    session.paused = !session.paused;
                    info!(paused = session.paused, "Pause toggled");
                }
                GameCommand::Exit => {
                    self.world.resource_mut::<SessionState>().exit = true;
                    info!("Exit requested");
                }
            }
        }

        if !self.world.resource::<SessionState>().paused {
            // Double-buffered events: drop last frame's collisions, then run
            // the chained systems, which write and consume this frame's.
            self.world.resource_mut::<Events<GameEvent>>().update();
            self.world.insert_resource(DeltaTime(dt));
            self.world.insert_resource(input);
            self.schedule.run(&mut self.world);
        }

        self.drain_errors();
        self.world.resource::<SessionState>().exit
    }

    /// Builds the frame snapshot handed to the renderer.
    pub fn frame(&mut self) -> FrameSnapshot {
        let mut players = self
            .world
            .query_filtered::<(&Position, &Animated, &Health, &Score), With<PlayerControlled>>();
        let (position, animated, health, score) = players
            .single(&self.world)
            .expect("Player entity missing from the world");
        let player = PlayerView {
            position: position.0,
            facing: animated.facing,
            frame: animated.frame,
            health: health.0,
            score: score.0,
        };

        let mut goblins = self.world.query::<(&Position, &Goblin, &Animated)>();
        let goblins: Vec<SpriteView> = goblins
            .iter(&self.world)
            .map(|(position, goblin, animated)| SpriteView {
                position: position.0,
                facing: goblin.heading,
                frame: animated.frame,
            })
            .collect();

        let mut treasures = self.world.query_filtered::<&Position, With<Treasure>>();
        let treasures: Vec<Vec2> = treasures.iter(&self.world).map(|position| position.0).collect();

        let session = *self.world.resource::<SessionState>();

        FrameSnapshot {
            defeated: player.health <= 0.0,
            victorious: treasures.is_empty(),
            player,
            goblins,
            treasures,
            obstacles: self.world.resource::<Maze>().obstacles.clone(),
            paused: session.paused,
        }
    }

    fn drain_errors(&mut self) {
        let mut errors = self.world.resource_mut::<Events<GameError>>();
        for game_error in errors.drain() {
            error!(%game_error, "Simulation error");
        }
    }
}

use std::time::{Duration, Instant};

use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::{EventPump, Sdl};
use tracing::{error, warn};

use crate::constants::{LOOP_TIME, SCREEN_SIZE};
use crate::error::{GameError, GameResult};
use crate::formatter;
use crate::game::Game;
use crate::input::{read_input, Bindings};
use crate::renderer::Renderer;

pub struct App {
    game: Game,
    canvas: Canvas<Window>,
    event_pump: EventPump,
    bindings: Bindings,
    last_tick: Instant,
    _sdl_context: Sdl,
}

impl App {
    pub fn new() -> GameResult<Self> {
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;

        let window = video_subsystem
            .window("Mazebound", SCREEN_SIZE.x as u32, SCREEN_SIZE.y as u32)
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let mut canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        canvas
            .set_logical_size(SCREEN_SIZE.x as u32, SCREEN_SIZE.y as u32)
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;
        let game = Game::new()?;

        Ok(Self {
            game,
            canvas,
            event_pump,
            bindings: Bindings::default(),
            last_tick: Instant::now(),
            _sdl_context: sdl_context,
        })
    }

    /// Runs one iteration of the main loop. Returns false once the game
    /// has asked to exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();
        formatter::increment_tick();

        let commands = self.bindings.poll_commands(&mut self.event_pump);
        let input = read_input(&self.event_pump.keyboard_state());

        let dt = self.last_tick.elapsed().as_secs_f32();
        self.last_tick = Instant::now();

        if self.game.tick(dt, input, &commands) {
            return false;
        }

        let snapshot = self.game.frame();
        if let Err(e) = Renderer::draw(&mut self.canvas, &snapshot) {
            error!("Failed to draw frame: {e}");
        }

        if start.elapsed() < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(start.elapsed());
            if time != Duration::ZERO {
                spin_sleep::sleep(time);
            }
        } else {
            warn!("Game loop behind schedule by: {:?}", start.elapsed() - LOOP_TIME);
        }

        true
    }
}

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, trace};

use crate::game::{Action, Game, Status, StepOutcome, View};

pub trait Renderer {
    fn draw(&mut self, view: &View<'_>) -> Result<()>;
    fn show_game_over(&mut self, view: &View<'_>) -> Result<()>;
}

pub trait Clock {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Feeds gravity ticks and player actions into the game and repaints after each.
pub struct Driver<R, C> {
    game: Game,
    renderer: R,
    clock: C,
    next_tick: Option<Instant>,
}

impl<R: Renderer, C: Clock> Driver<R, C> {
    pub fn new(game: Game, renderer: R, clock: C) -> Self {
        Self {
            game,
            renderer,
            clock,
            next_tick: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn start(&mut self) -> Result<()> {
        self.arm(self.game.speed());
        self.redraw()
    }

    /// Time left before the next gravity tick. `None` once no tick is scheduled.
    pub fn time_until_tick(&self) -> Option<Duration> {
        self.next_tick.map(|at| at.saturating_duration_since(self.clock.now()))
    }

    /// Runs the gravity tick if it is due.
    pub fn poll(&mut self) -> Result<Option<StepOutcome>> {
        let Some(at) = self.next_tick else {
            return Ok(None);
        };
        if self.clock.now() < at {
            return Ok(None);
        }

        let outcome = self.game.step();
        trace!(?outcome, "tick");
        match outcome {
            StepOutcome::GameOver | StepOutcome::Halted => {
                self.next_tick = None;
            }
            StepOutcome::Fell => self.arm(self.game.speed()),
            StepOutcome::Locked { cleared } => {
                // A clear may have changed the speed.
                if cleared > 0 {
                    debug!(cleared, speed = ?self.game.speed(), "re-arming after clear");
                }
                self.arm(self.game.speed());
            }
        }
        self.redraw()?;
        Ok(Some(outcome))
    }

    pub fn dispatch(&mut self, action: Action) -> Result<bool> {
        let was_over = self.game.status() == Status::GameOver;
        let changed = self.game.handle_action(action);
        if was_over && changed {
            debug!("restarting tick schedule");
            self.arm(Duration::ZERO);
        }
        self.redraw()?;
        Ok(changed)
    }

    pub fn redraw(&mut self) -> Result<()> {
        let view = self.game.view();
        match view.status {
            Status::Running => self.renderer.draw(&view),
            Status::GameOver => {
                self.renderer.draw(&view)?;
                self.renderer.show_game_over(&view)
            }
        }
    }

    fn arm(&mut self, after: Duration) {
        self.next_tick = Some(self.clock.now() + after);
    }
}

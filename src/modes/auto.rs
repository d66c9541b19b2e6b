//! The external driver: a fixed-tick scheduler around the simulation core
//!
//! Owns the timer the core deliberately does not have. Each timer fire runs
//! exactly one pilot decision plus one engine tick; pausing simply stops
//! invoking ticks and freezes the state.
//!
//! # Controls
//!
//! - Space: pause/resume the pilot
//! - R: reset the simulation
//! - 1-4: tick speed presets
//! - Q/Esc: quit

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Interval, interval};

use crate::game::GameConfig;
use crate::metrics::SessionStats;
use crate::pilot::Simulation;
use crate::render::Renderer;

/// Tick speed presets selectable at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickSpeed {
    /// 2 Hz (500ms per tick)
    Slow,
    /// The default 150ms interval
    Normal,
    /// 20 Hz (50ms per tick)
    Fast,
    /// 60 Hz (16ms per tick)
    VeryFast,
}

impl TickSpeed {
    fn tick_interval(&self) -> Duration {
        match self {
            Self::Slow => Duration::from_millis(500),
            Self::Normal => Duration::from_millis(150),
            Self::Fast => Duration::from_millis(50),
            Self::VeryFast => Duration::from_millis(16),
        }
    }
}

/// Autonomous play mode: the pilot drives, the user watches
pub struct AutoMode {
    sim: Simulation,
    stats: SessionStats,
    renderer: Renderer,
    tick_interval: Duration,
    should_quit: bool,
    paused: bool,
}

impl AutoMode {
    pub fn new(config: GameConfig, tick_interval: Duration) -> Self {
        Self {
            sim: Simulation::new(config),
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            tick_interval,
            should_quit: false,
            paused: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run the driver loop with cleanup
        let result = self.run_driver_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_driver_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.tick_interval);

        // Render at 30 FPS independently of the simulation tick
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event, &mut tick_timer);
                    }
                }

                // Simulation tick
                _ = tick_timer.tick() => {
                    if !self.paused && self.sim.state().running {
                        self.advance();
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.stats.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.sim.state(), &self.stats, self.paused);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn advance(&mut self) {
        let result = self.sim.tick();

        if result.terminated {
            self.stats.on_game_over(self.sim.state().score);
        }
    }

    fn handle_event(&mut self, event: Event, tick_timer: &mut Interval) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char(' ') => {
                    self.paused = !self.paused;
                }
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    self.reset();
                }
                KeyCode::Char('1') => self.set_speed(TickSpeed::Slow, tick_timer),
                KeyCode::Char('2') => self.set_speed(TickSpeed::Normal, tick_timer),
                KeyCode::Char('3') => self.set_speed(TickSpeed::Fast, tick_timer),
                KeyCode::Char('4') => self.set_speed(TickSpeed::VeryFast, tick_timer),
                _ => {}
            }
        }
    }

    fn reset(&mut self) {
        self.sim.reset();
        self.stats.on_game_start();
    }

    fn set_speed(&mut self, speed: TickSpeed, tick_timer: &mut Interval) {
        self.tick_interval = speed.tick_interval();
        tick_timer.reset_after(self.tick_interval);
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

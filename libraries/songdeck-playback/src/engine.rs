//! Platform-agnostic media engine trait
//!
//! Abstracts the single media element that actually produces sound. The
//! browser build drives an `HTMLAudioElement`; tests and the CLI use
//! [`HeadlessEngine`], which keeps a simulated clock instead.

use crate::error::{PlaybackError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Platform media element
///
/// Implementors stream a locator and report the clock. Methods take `&self`:
/// platform elements are handles with their own interior state.
pub trait MediaEngine {
    /// Point the element at a new source, rewinding to 0
    fn load(&self, locator: &str) -> Result<()>;

    /// Start or resume playback
    fn play(&self) -> Result<()>;

    /// Pause playback, keeping the position
    fn pause(&self) -> Result<()>;

    /// Move the playhead (seconds)
    fn seek_to(&self, seconds: f64) -> Result<()>;

    /// Set output volume (0.0-1.0)
    fn set_volume(&self, level: f64) -> Result<()>;

    /// Current playhead in seconds
    fn current_time(&self) -> f64;

    /// Source duration in seconds, once metadata has loaded
    fn duration(&self) -> Option<f64>;
}

/// Command received by a [`HeadlessEngine`]
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommand {
    Load(String),
    Play,
    Pause,
    Seek(f64),
    Volume(f64),
}

/// In-memory media engine
///
/// Records every command and simulates a playhead advanced with
/// [`tick`](HeadlessEngine::tick). Durations come from
/// [`set_track_duration`](HeadlessEngine::set_track_duration) keyed by locator;
/// unknown locators stay at an unknown duration.
#[derive(Debug)]
pub struct HeadlessEngine {
    commands: RefCell<Vec<EngineCommand>>,
    durations: RefCell<HashMap<String, f64>>,
    source: RefCell<Option<String>>,
    position: Cell<f64>,
    duration: Cell<Option<f64>>,
    playing: Cell<bool>,
    volume: Cell<f64>,
    failing: Cell<bool>,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self {
            commands: RefCell::new(Vec::new()),
            durations: RefCell::new(HashMap::new()),
            source: RefCell::new(None),
            position: Cell::new(0.0),
            duration: Cell::new(None),
            playing: Cell::new(false),
            volume: Cell::new(1.0),
            failing: Cell::new(false),
        }
    }

    /// Duration reported once `locator` is loaded
    pub fn set_track_duration(&self, locator: impl Into<String>, seconds: f64) {
        self.durations.borrow_mut().insert(locator.into(), seconds);
    }

    /// Override the duration of the current source
    pub fn set_duration(&self, seconds: Option<f64>) {
        self.duration.set(seconds);
    }

    /// Move the playhead without recording a seek command
    pub fn set_position(&self, seconds: f64) {
        self.position.set(seconds);
    }

    /// Make every following command fail (simulates a rejected `play()`)
    pub fn fail_commands(&self, failing: bool) {
        self.failing.set(failing);
    }

    /// Advance the playhead by `dt` seconds if playing
    ///
    /// Returns true when this tick reached the end of the source, at which
    /// point the engine stops on its own.
    pub fn tick(&self, dt: f64) -> bool {
        if !self.playing.get() {
            return false;
        }

        let next = self.position.get() + dt.max(0.0);
        match self.duration.get() {
            Some(total) if next >= total => {
                self.position.set(total);
                self.playing.set(false);
                true
            }
            _ => {
                self.position.set(next);
                false
            }
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing.get()
    }

    pub fn volume(&self) -> f64 {
        self.volume.get()
    }

    pub fn source(&self) -> Option<String> {
        self.source.borrow().clone()
    }

    /// Commands received so far, oldest first
    pub fn commands(&self) -> Vec<EngineCommand> {
        self.commands.borrow().clone()
    }

    /// Drain the command log
    pub fn take_commands(&self) -> Vec<EngineCommand> {
        std::mem::take(&mut *self.commands.borrow_mut())
    }

    fn record(&self, command: EngineCommand) -> Result<()> {
        if self.failing.get() {
            return Err(PlaybackError::engine(format!("rejected {command:?}")));
        }
        self.commands.borrow_mut().push(command);
        Ok(())
    }
}

impl Default for HeadlessEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaEngine for HeadlessEngine {
    fn load(&self, locator: &str) -> Result<()> {
        self.record(EngineCommand::Load(locator.to_string()))?;
        *self.source.borrow_mut() = Some(locator.to_string());
        self.position.set(0.0);
        self.playing.set(false);
        self.duration
            .set(self.durations.borrow().get(locator).copied());
        Ok(())
    }

    fn play(&self) -> Result<()> {
        self.record(EngineCommand::Play)?;
        self.playing.set(true);
        Ok(())
    }

    fn pause(&self) -> Result<()> {
        self.record(EngineCommand::Pause)?;
        self.playing.set(false);
        Ok(())
    }

    fn seek_to(&self, seconds: f64) -> Result<()> {
        self.record(EngineCommand::Seek(seconds))?;
        let clamped = match self.duration.get() {
            Some(total) => seconds.clamp(0.0, total),
            None => seconds.max(0.0),
        };
        self.position.set(clamped);
        Ok(())
    }

    fn set_volume(&self, level: f64) -> Result<()> {
        self.record(EngineCommand::Volume(level))?;
        self.volume.set(level);
        Ok(())
    }

    fn current_time(&self) -> f64 {
        self.position.get()
    }

    fn duration(&self) -> Option<f64> {
        self.duration.get()
    }
}

//! Navigation policy
//!
//! Pure functions deciding which track a command moves to. No randomness,
//! no wraparound: an edge of the list is "no movement", never an error.

use crate::error::{PlaybackError, Result};
use serde::{Deserialize, Serialize};

/// Step direction for next/previous
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Next,
    Previous,
}

/// Result of a navigation decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Navigation {
    /// Select the track at this index
    MoveTo(usize),

    /// Stay where we are (edge of the list, or nothing loaded)
    NoMovement,
}

/// A navigation request against the active track list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationCommand {
    Next,
    Previous,
    Select(usize),
    /// The current track finished playing
    TrackEnded { auto_advance: bool },
}

/// Index adjacent to `current` in a list of `len` tracks
pub fn compute_adjacent_index(
    current: Option<usize>,
    len: usize,
    direction: Direction,
) -> Navigation {
    let Some(current) = current else {
        return Navigation::NoMovement;
    };
    if current >= len {
        return Navigation::NoMovement;
    }

    match direction {
        Direction::Next if current + 1 < len => Navigation::MoveTo(current + 1),
        Direction::Previous if current >= 1 => Navigation::MoveTo(current - 1),
        _ => Navigation::NoMovement,
    }
}

/// Decide where a command leads
///
/// # Errors
/// `OutOfRange` when a selection falls outside the list.
pub fn resolve(command: NavigationCommand, current: Option<usize>, len: usize) -> Result<Navigation> {
    match command {
        NavigationCommand::Next => Ok(compute_adjacent_index(current, len, Direction::Next)),
        NavigationCommand::Previous => {
            Ok(compute_adjacent_index(current, len, Direction::Previous))
        }
        NavigationCommand::Select(index) if index < len => Ok(Navigation::MoveTo(index)),
        NavigationCommand::Select(index) => Err(PlaybackError::OutOfRange { index, len }),
        NavigationCommand::TrackEnded { auto_advance: true } => {
            Ok(compute_adjacent_index(current, len, Direction::Next))
        }
        NavigationCommand::TrackEnded { auto_advance: false } => Ok(Navigation::NoMovement),
    }
}

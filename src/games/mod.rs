//! # Game Implementations Module
//!
//! This module contains the position types that plug into the arena. Each game
//! implements the `CombinatorialGame` trait so the referee and the player
//! strategies can drive it without knowing its rules.
//!
//! ## Supported Games
//! - **Gomoku (Five in a Row)**: stone placement on a variable-size square
//!   board, first run of five or more wins, optional pie-rule swap.
//!
//! ## Adding New Games
//! To add a new game, create a new module and implement:
//! 1. A position type owning its own state (positions are values; successor
//!    generation clones, it never mutates in place)
//! 2. The `CombinatorialGame` trait: option enumeration, structural equality
//!    through `PartialEq`, and a `describe` label
//! 3. A `Display` implementation for terminal rendering

pub mod gomoku;

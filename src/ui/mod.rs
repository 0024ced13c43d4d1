//! Terminal output for the installer binary.
//!
//! - `theme` - design tokens (colors, icons, borders) and the prompt theme
//! - `terminal` - capability detection
//! - `primitives/`, `widgets/`, `blocks/` - building blocks, smallest first
//! - `views/` - whole screens assembled from blocks
//! - `location` - the install location question
//! - `error` - error rendering

pub mod blocks;
pub mod error;
pub mod location;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;

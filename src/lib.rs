//! Tetraptych - a four-quadrant conceptual poster
//!
//! Contrasts two time periods (Genesis and Modern), each split into good
//! and evil states, and regenerates any quadrant's illustrative image
//! through a hosted text-to-image API.

pub mod content;
pub mod core;
pub mod gen;
pub mod poster;

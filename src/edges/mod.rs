//! Edge processing: image gradients and thin binary edge maps.
//!
//! Building blocks for the geometric front-end:
//!
//! - Gradient computation (Sobel) returning `gx`, `gy` and magnitude.
//! - Non-maximum suppression on the gradient magnitude with a
//!   direction-aligned 4-neighborhood, followed by double-threshold
//!   hysteresis, producing a single-pixel-wide binary edge map.
//!
//! Design goals
//! - Favor clarity and cache-friendly row access over micro-optimizations.
//! - Handle borders by clamping indices (replicate).
//! - Keep outputs simple so the boundary tracer can consume them directly.

pub mod canny;
pub mod grad;

/// Per-pixel gradients with magnitude.
pub use grad::{sobel_gradients, Grad};
/// Thin binary edge map from direction-aligned NMS with hysteresis.
pub use canny::edge_mask;

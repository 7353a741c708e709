//! External boundaries of binary masks and the metrics computed on them.
//!
//! Overview
//! - `tracer` labels 8-connected foreground components in raster order and
//!   walks each component's outer boundary with Moore neighbor tracing.
//!   Holes are never traced; only external boundaries matter here.
//! - `metrics` computes the enclosed (shoelace) area, the closed perimeter
//!   and the axis-aligned bounding box of a traced boundary.
//! - `rect` fits the minimum-area oriented rectangle via convex hull and
//!   rotating calipers.
//!
//! Determinism
//! - Components are discovered in raster order of their topmost-leftmost
//!   pixel, so equal-area candidates resolve the same way on every run.

pub mod metrics;
pub mod rect;
pub mod tracer;

pub use metrics::{bounding_rect, contour_area, contour_perimeter};
pub use rect::{convex_hull, min_area_rect};
pub use tracer::{find_external_contours, Contour};

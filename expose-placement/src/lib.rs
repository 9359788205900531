//! # Expose Placement (`expose-placement`)
//!
//! Natural window placement for the window overview ("expose"). Windows keep
//! their relative positions and aspect ratios while overlaps are pushed apart,
//! the result is fitted into the target area, and free space is handed out to
//! the windows that can use it.
//!
//! The pipeline, in order:
//!
//! 1. [`resolver`]: inflate every window by the gap and repel overlapping pairs.
//! 2. [`rescaler`]: scale the resolved layout down uniformly to fit the area.
//! 3. [`gap_filler`]: grow windows into free space without new overlaps.
//! 4. [`orchestrator`]: remove the gap again and clamp the per-window zoom.
//!
//! ```rust,ignore
//! use expose_core::Rectangle;
//! use expose_placement::{compute_placement, PlacementEntry};
//!
//! let entries = vec![
//!     PlacementEntry::new(1u32, Rectangle::new(0, 0, 100, 100)),
//!     PlacementEntry::new(2u32, Rectangle::new(50, 50, 100, 100)),
//! ];
//! let placements = compute_placement(&entries, Rectangle::new(0, 0, 400, 400))?;
//! ```
//!
//! The computation is pure and synchronous. [`host`] defines the interfaces a
//! window system implements to drive it.

pub mod area;
pub mod error;
pub mod gap_filler;
pub mod host;
pub mod orchestrator;
pub mod rescaler;
pub mod resolver;
pub mod types;

pub use area::{overview_area, scaled_viewport};
pub use error::PlacementError;
pub use host::{
    Overview, PlacementApplier, RedrawScheduler, ThumbnailPlacement, WindowGeometrySource,
    WindowKind, WindowSnapshot,
};
pub use orchestrator::{compute_placement, NaturalPlacement};
pub use types::{PlacementDiagnostics, PlacementEntry, PlacementOutcome, PlacementResult};

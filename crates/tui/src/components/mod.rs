//! UI building blocks shared across rendering and state modules.

/// Header row with the artifact title and view triggers.
pub mod header;
/// Bordered body panel for the active view.
pub mod panel;
/// Scrollbar for viewports.
pub mod scrollbar;

pub use header::{HeaderContext, TabTrigger, header_height, render_header, triggers_width};
pub use panel::{BodyContext, render_body};
pub use scrollbar::{ScrollMetrics, point_in_rect, render_scrollbar};

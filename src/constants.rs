//! Crate-wide constants.
//!
//! Centralizes magic numbers and tuning values to make the codebase
//! more maintainable and self-documenting.

use gpui::Rgba;
use once_cell::sync::Lazy;
use std::collections::HashMap;

// ============================================================================
// Simulation Extent
// ============================================================================

/// Width of the logical simulation space, independent of viewport size
pub const EXTENT_WIDTH: f32 = 4000.0;

/// Height of the logical simulation space
pub const EXTENT_HEIGHT: f32 = 3000.0;

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 5.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Zoom factor applied per wheel line
pub const WHEEL_ZOOM_STEP: f32 = 1.1;

// ============================================================================
// Input Handling
// ============================================================================

/// Screen-pixel displacement below which a pointer down/up pair is a click.
/// At or beyond this, the gesture commits a drag or pan instead.
pub const DRAG_THRESHOLD: f32 = 4.0;

/// Maximum screen-pixel distance from an edge segment that still hits it
pub const EDGE_HIT_TOLERANCE: f32 = 8.0;

/// Minimum segment length used in place of degenerate (zero-length) edges
pub const MIN_SEGMENT_LENGTH: f32 = 1e-3;

// ============================================================================
// Node Sizing
// ============================================================================

/// Radius of a regular entity node at zoom 1.0
pub const ENTITY_NODE_RADIUS: f32 = 9.0;

/// Radius of an episode node at zoom 1.0
pub const EPISODE_NODE_RADIUS: f32 = 14.0;

/// Extra clearance kept between node discs by the collision force
pub const COLLISION_PADDING: f32 = 6.0;

// ============================================================================
// Force Simulation
// ============================================================================

/// Rest length of the spring force along links
pub const SPRING_LENGTH: f32 = 110.0;

/// Spring stiffness along links
pub const SPRING_STIFFNESS: f32 = 0.05;

/// Pairwise repulsion ("charge") strength between nodes
pub const CHARGE_STRENGTH: f32 = 2400.0;

/// Strength of the weak centering pull toward the extent midpoint
pub const CENTER_STRENGTH: f32 = 0.015;

/// Geometric alpha decay per tick: `alpha *= 1.0 - ALPHA_DECAY`
pub const ALPHA_DECAY: f32 = 0.028;

/// Simulation stops once alpha falls below this
pub const ALPHA_MIN: f32 = 0.001;

/// Alpha value restored when a drag reheats the simulation
pub const REHEAT_ALPHA: f32 = 0.3;

/// Velocity retained after damping each tick
pub const VELOCITY_RETENTION: f32 = 0.6;

/// Cap on synchronous initial-layout iterations
pub const MAX_INITIAL_TICKS: usize = 300;

/// Spacing factor of the golden-angle seed spiral
pub const SEED_SPACING: f32 = 55.0;

// ============================================================================
// Rendering
// ============================================================================

/// Multiplier applied to each RGB channel of dimmed elements
pub const DIM_FACTOR: f32 = 0.35;

/// Margin in screen pixels around the viewport for culling (prevents pop-in)
pub const CULLING_MARGIN: f32 = 50.0;

/// Maximum pixel width of a node label before ellipsis truncation
pub const NODE_LABEL_MAX_WIDTH: f32 = 140.0;

/// Approximate advance width of one glyph as a fraction of the font size,
/// used for label truncation without a text system
pub const GLYPH_WIDTH_RATIO: f32 = 0.6;

/// Node label font size at zoom 1.0
pub const NODE_LABEL_FONT_SIZE: f32 = 11.0;

/// Font size bump applied to hovered or selected node labels
pub const FOCUS_LABEL_FONT_BUMP: f32 = 2.0;

/// Edge label font size at zoom 1.0
pub const EDGE_LABEL_FONT_SIZE: f32 = 9.0;

/// Perpendicular offset of an edge label from its segment, in pixels
pub const EDGE_LABEL_OFFSET: f32 = 10.0;

/// Focus-layer edge labels are suppressed entirely above this count
pub const MAX_FOCUS_EDGE_LABELS: usize = 6;

/// Stroke width of a regular edge at zoom 1.0
pub const EDGE_STROKE_WIDTH: f32 = 1.5;

/// Stroke width of focus/active edges at zoom 1.0
pub const ACTIVE_EDGE_STROKE_WIDTH: f32 = 2.5;

/// Extra radius of the highlight ring drawn around highlighted nodes
pub const HIGHLIGHT_RING_WIDTH: f32 = 3.0;

// ============================================================================
// Colors
// ============================================================================

/// Edge stroke color
pub const EDGE_COLOR: u32 = 0x8a8f98;

/// Edge label text color
pub const EDGE_LABEL_COLOR: u32 = 0xb8bcc4;

/// Node label text color
pub const NODE_LABEL_COLOR: u32 = 0xe6e8eb;

/// Highlight ring color
pub const HIGHLIGHT_RING_COLOR: u32 = 0xf5c518;

/// Color for nodes carrying a `user` tag, overriding kind-based colors
pub const USER_NODE_COLOR: u32 = 0x4f9cf9;

/// Fallback color for kinds outside [`KIND_COLORS`]
pub const DEFAULT_NODE_COLOR: u32 = 0x7a7f8a;

/// Palette cycled through for unknown kinds, keyed by a deterministic hash
pub const FALLBACK_PALETTE: [u32; 6] = [
    0xe06c75, 0x98c379, 0xc678dd, 0x56b6c2, 0xd19a66, 0x61afef,
];

/// Kind-based node colors
pub static KIND_COLORS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("entity", 0x98c379),
        ("episode", 0xc678dd),
        ("episodic", 0xc678dd),
        ("community", 0x56b6c2),
        ("topic", 0xd19a66),
        ("user", USER_NODE_COLOR),
    ])
});

/// Convert a packed `0xRRGGBB` constant into an [`Rgba`]
pub fn color(hex: u32) -> Rgba {
    gpui::rgb(hex)
}

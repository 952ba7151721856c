//! # Configuration Constants
//!
//! Centralized constants for the gothic window generator. Geometry
//! proportions, default build parameters, tessellation resolution and
//! material values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Curve tessellation parameters
//! - **Defaults**: Default window parameters
//! - **Proportions**: Arch, panel, mullion and tracery ratios
//! - **Materials**: Stone and glass shading values
//! - **Names**: Object and material names used in the scene

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Smallest accepted ratio between a triangle's doubled area and its
/// longest squared edge.
///
/// Faces below it are slivers: collinear or nearly so at any scale.
///
/// # Example
///
/// ```rust
/// use config::constants::SLIVER_RATIO;
///
/// // Right isosceles triangle with unit legs
/// let ratio = 1.0 / 2.0;
/// assert!(ratio > SLIVER_RATIO);
/// ```
pub const SLIVER_RATIO: f64 = 1e-9;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Samples emitted per curved Bezier segment when a curve is converted to
/// a mesh.
///
/// Straight segments only emit their start point regardless of this value.
///
/// # Example
///
/// ```rust
/// use config::constants::CURVE_RESOLUTION_U;
///
/// // A cyclic spline with 2 curved segments
/// let samples = 2 * CURVE_RESOLUTION_U as usize;
/// assert_eq!(samples, 24);
/// ```
pub const CURVE_RESOLUTION_U: u32 = 12;

/// Divisor applied to a chord length to get an auto handle length.
///
/// Matches the handle length used by common DCC tools for smooth Bezier
/// points, roughly 39% of the adjacent chord.
pub const AUTO_HANDLE_DIVISOR: f64 = 2.5614;

/// Fraction of the chord a vector handle points along.
pub const VECTOR_HANDLE_FRACTION: f64 = 1.0 / 3.0;

// =============================================================================
// DEFAULT PARAMETERS
// =============================================================================

/// Default overall window width.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_WIDTH, DEFAULT_HEIGHT};
/// assert!(DEFAULT_HEIGHT > DEFAULT_WIDTH);
/// ```
pub const DEFAULT_WIDTH: f64 = 2.4;

/// Default overall window height (base to arch tip).
pub const DEFAULT_HEIGHT: f64 = 4.0;

/// Default frame depth along the y axis.
pub const DEFAULT_DEPTH: f64 = 0.24;

/// Default frame thickness, drives the panel inset and mullion width.
pub const DEFAULT_FRAME_THICKNESS: f64 = 0.2;

/// Whether a build clears every existing mesh object first.
pub const DEFAULT_CLEAR_EXISTING: bool = true;

// =============================================================================
// ARCH PROPORTIONS
// =============================================================================

/// Shoulder height as a fraction of the total window height.
///
/// The shoulder is where the straight jamb turns into the arch curve.
///
/// # Example
///
/// ```rust
/// use config::constants::SHOULDER_RATIO;
/// let height = 4.0;
/// assert!((height * SHOULDER_RATIO - 2.48).abs() < 1e-12);
/// ```
pub const SHOULDER_RATIO: f64 = 0.62;

// =============================================================================
// PANEL PROPORTIONS
// =============================================================================

/// Width shrink of the glass panel, in frame thicknesses.
///
/// This is a tuned visual margin, not `2 * thickness`.
///
/// # Example
///
/// ```rust
/// use config::constants::PANEL_WIDTH_INSET;
/// let inset_width = 2.4 - 0.2 * PANEL_WIDTH_INSET;
/// assert!((inset_width - 2.04).abs() < 1e-12);
/// ```
pub const PANEL_WIDTH_INSET: f64 = 1.8;

/// Height shrink of the glass panel, in frame thicknesses.
pub const PANEL_HEIGHT_INSET: f64 = 1.6;

/// Panel depth as a fraction of the frame depth.
pub const PANEL_DEPTH_RATIO: f64 = 0.4;

/// Vertical lift of the panel origin, in frame thicknesses.
pub const PANEL_LIFT: f64 = 0.2;

// =============================================================================
// MULLION PROPORTIONS
// =============================================================================

/// Mullion half-width as a fraction of the frame thickness.
pub const MULLION_WIDTH_RATIO: f64 = 0.28;

/// Mullion depth as a fraction of the frame depth.
pub const MULLION_DEPTH_RATIO: f64 = 0.55;

/// Horizontal positions of the vertical mullions, as fractions of the width.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTICAL_MULLION_OFFSETS;
/// assert_eq!(VERTICAL_MULLION_OFFSETS.len(), 3);
/// assert_eq!(VERTICAL_MULLION_OFFSETS[1], 0.0);
/// ```
pub const VERTICAL_MULLION_OFFSETS: [f64; 3] = [-0.2, 0.0, 0.2];

/// Half-height of a vertical mullion as a fraction of the shoulder height.
///
/// The same ratio places its center, so bars rise from the sill to
/// `0.9 * shoulder_h`.
pub const VERTICAL_MULLION_HALF_HEIGHT: f64 = 0.45;

// =============================================================================
// TRACERY PROPORTIONS
// =============================================================================

/// Where tracery starts, as a fraction of the arch rise above the shoulder.
pub const TRACERY_START_RATIO: f64 = 0.15;

/// Tracery bar length as a fraction of the remaining rise to the tip.
pub const TRACERY_LENGTH_RATIO: f64 = 0.95;

/// Tracery bar center, as a fraction of its length above the start height.
pub const TRACERY_CENTER_RATIO: f64 = 0.4;

/// Tracery bar width relative to the mullion width.
pub const TRACERY_WIDTH_RATIO: f64 = 0.8;

/// Tracery rotations about the depth axis, in degrees.
///
/// # Example
///
/// ```rust
/// use config::constants::TRACERY_ANGLES_DEG;
/// assert_eq!(TRACERY_ANGLES_DEG, [-24.0, 0.0, 24.0]);
/// ```
pub const TRACERY_ANGLES_DEG: [f64; 3] = [-24.0, 0.0, 24.0];

// =============================================================================
// MATERIAL CONSTANTS
// =============================================================================

/// Stone base color (RGBA, linear).
pub const STONE_COLOR: [f32; 4] = [0.72, 0.70, 0.66, 1.0];

/// Stone roughness.
pub const STONE_ROUGHNESS: f32 = 0.55;

/// Glass base color (RGBA, linear).
pub const GLASS_COLOR: [f32; 4] = [0.60, 0.74, 0.96, 1.0];

/// Glass roughness.
pub const GLASS_ROUGHNESS: f32 = 0.08;

/// Glass transmission weight.
pub const GLASS_TRANSMISSION: f32 = 0.92;

/// Glass index of refraction.
///
/// # Example
///
/// ```rust
/// use config::constants::GLASS_IOR;
/// assert!(GLASS_IOR > 1.0);
/// ```
pub const GLASS_IOR: f32 = 1.45;

/// Roughness assigned to a freshly created material.
pub const DEFAULT_ROUGHNESS: f32 = 0.5;

/// Index of refraction assigned to a freshly created material.
pub const DEFAULT_IOR: f32 = 1.5;

/// Base color assigned to a freshly created material (light gray).
pub const DEFAULT_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];

// =============================================================================
// NAMES
// =============================================================================

/// Name of the stone material.
pub const STONE_MATERIAL: &str = "Stone";

/// Name of the glass material.
pub const GLASS_MATERIAL: &str = "Glass";

/// Name given to a freshly created arch object.
pub const ARCH_OBJECT_NAME: &str = "GothicArch";

/// Name of the frame object before mullions are merged into it.
pub const FRAME_OBJECT_NAME: &str = "WindowFrame";

/// Name of the glass panel object.
pub const PANEL_OBJECT_NAME: &str = "GlassPanel";

/// Name of the merged frame + mullions object.
pub const MERGED_FRAME_NAME: &str = "GothicWindowFrame";

/// Name prefix of vertical mullion objects (`Vertical_1` ..).
pub const VERTICAL_PREFIX: &str = "Vertical";

/// Name prefix of tracery objects (`Tracery_1` ..).
pub const TRACERY_PREFIX: &str = "Tracery";

/// Maximum numeric suffix tried when disambiguating object names.
pub const MAX_NAME_SUFFIX: u32 = 999;

// =============================================================================
// DEFAULTS SNAPSHOT
// =============================================================================

/// Immutable snapshot of the default window parameters.
///
/// # Examples
/// ```
/// use config::constants::WindowDefaults;
/// let defaults = WindowDefaults::default();
/// assert_eq!(defaults.width, 2.4);
/// assert!(defaults.clear_existing);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowDefaults {
    /// Overall width.
    pub width: f64,
    /// Overall height.
    pub height: f64,
    /// Frame depth.
    pub depth: f64,
    /// Frame thickness.
    pub frame_thickness: f64,
    /// Clear existing mesh objects before building.
    pub clear_existing: bool,
}

impl WindowDefaults {
    /// Builds a defaults snapshot, rejecting dimensions that cannot produce
    /// a window.
    ///
    /// # Examples
    /// ```
    /// use config::constants::WindowDefaults;
    /// let defaults = WindowDefaults::new(2.0, 3.0, 0.2, 0.15).expect("valid defaults");
    /// assert_eq!(defaults.height, 3.0);
    /// assert!(WindowDefaults::new(2.0, 3.0, 0.2, 2.0).is_err());
    /// ```
    pub fn new(width: f64, height: f64, depth: f64, frame_thickness: f64) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("width", width),
            ("height", height),
            ("depth", depth),
            ("frame_thickness", frame_thickness),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if frame_thickness * PANEL_WIDTH_INSET >= width || frame_thickness * PANEL_HEIGHT_INSET >= height {
            return Err(ConfigError::ThicknessTooLarge(frame_thickness));
        }
        Ok(Self {
            width,
            height,
            depth,
            frame_thickness,
            clear_existing: DEFAULT_CLEAR_EXISTING,
        })
    }
}

impl Default for WindowDefaults {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            depth: DEFAULT_DEPTH,
            frame_thickness: DEFAULT_FRAME_THICKNESS,
            clear_existing: DEFAULT_CLEAR_EXISTING,
        }
    }
}

/// Error returned when invalid default values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when a dimension is zero, negative or not finite.
    NonPositive { name: &'static str, value: f64 },
    /// Raised when the frame thickness leaves no room for the glass panel.
    ThicknessTooLarge(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { name, value } => {
                write!(f, "{name} must be positive: {value}")
            }
            ConfigError::ThicknessTooLarge(value) => {
                write!(f, "frame_thickness leaves no room for the panel: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Shoulder height for a window of the given total height.
///
/// # Example
///
/// ```rust
/// use config::constants::shoulder_height;
/// assert!((shoulder_height(3.0) - 1.86).abs() < 1e-12);
/// ```
#[inline]
pub fn shoulder_height(height: f64) -> f64 {
    height * SHOULDER_RATIO
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

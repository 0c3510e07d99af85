//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the renderer.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (geometry, configuration, terminal output).
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FPS` | 20.0 | Target frames per second |
//! | `DEFAULT_ROTATION_DEG` | (0.5, 1.0, 0.3) | Per-axis rotation step per frame |
//! | `DEFAULT_SIZE` | 1.0 | Cube half-extent |
//! | `DEFAULT_FOCAL_LENGTH` | 2.5 | Perspective focal length |
//! | `DEFAULT_CAMERA_DISTANCE` | 5.0 | Camera distance from the origin |
//! | `DEFAULT_DENSITY` | 10 | Sample points per face edge |
//! | `DEFAULT_CHAR_ASPECT` | 2.0 | Terminal glyph aspect correction |
//!
//! # Escape sequences
//!
//! The renderer speaks raw VT/ANSI. The sequences below are the wire contract
//! with the terminal and are emitted byte-for-byte:
//!
//! - [`CURSOR_HOME`]: `ESC[H`
//! - [`CLEAR_SCREEN`]: `ESC[2J`
//! - [`RESET`]: `ESC[0m`
//! - 256-color foreground `ESC[38;5;<n>m` and background `ESC[48;5;<n>m`
//!
//! # Examples
//!
//! ```
//! use ascii_cube_types::{Shading, DEFAULT_CHARS};
//!
//! let shading = Shading::new(DEFAULT_CHARS.chars().collect(), vec![42; 9]);
//!
//! // Intensity 0 is the sparsest glyph, intensity 1 the densest.
//! assert_eq!(shading.glyph(0.0), '.');
//! assert_eq!(shading.glyph(1.0), '@');
//! assert_eq!(shading.color(0.5), Some(42));
//! ```

/// Shading characters, sparse to dense (nine levels, matching the named gradients).
pub const DEFAULT_CHARS: &str = ".,:;*!?#@";

/// Target frame rate.
pub const DEFAULT_FPS: f64 = 20.0;

/// Rotation step per frame in degrees about X, Y and Z.
pub const DEFAULT_ROTATION_DEG: [f64; 3] = [0.5, 1.0, 0.3];

/// Cube half-extent in object units.
pub const DEFAULT_SIZE: f64 = 1.0;

/// Focal length of the perspective projection.
pub const DEFAULT_FOCAL_LENGTH: f64 = 2.5;

/// Camera distance from the origin along -Z.
pub const DEFAULT_CAMERA_DISTANCE: f64 = 5.0;

/// Light direction before normalization.
pub const DEFAULT_LIGHT: [f64; 3] = [0.5, 0.8, -1.0];

/// Light used when the configured direction has zero length (from the camera toward the scene).
pub const FALLBACK_LIGHT: [f64; 3] = [0.0, 0.0, -1.0];

/// Sample points per face edge (density 10 yields an 11x11 grid per face).
pub const DEFAULT_DENSITY: u32 = 10;

/// Width/height correction for non-square terminal glyphs.
pub const DEFAULT_CHAR_ASPECT: f64 = 2.0;

/// Terminal columns used when the size query fails.
pub const FALLBACK_COLUMNS: u16 = 80;

/// Terminal rows used when the size query fails.
pub const FALLBACK_ROWS: u16 = 24;

/// Default foreground gradient name.
pub const DEFAULT_FG_COLOR: &str = "white";

/// Default background color name.
pub const DEFAULT_BG_COLOR: &str = "black";

/// 256-color code for black (fallback background, cleanup background).
pub const BLACK: u8 = 0;

/// 256-color code for white (foreground after a colored run ends).
pub const WHITE: u8 = 15;

/// Move the cursor to the top-left cell.
pub const CURSOR_HOME: &str = "\x1b[H";

/// Erase the whole screen.
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";

/// One projected surface sample, ready to be plotted.
///
/// Produced by the sampler and consumed immediately by the framebuffer;
/// coordinates may be off-screen (the framebuffer does the bounds check).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderPoint {
    pub x: i32,
    pub y: i32,
    /// Distance from the camera plane; smaller is nearer.
    pub depth: f64,
    /// Lambert term in `[0, 1]`.
    pub intensity: f64,
}

impl RenderPoint {
    pub const fn new(x: i32, y: i32, depth: f64, intensity: f64) -> Self {
        Self {
            x,
            y,
            depth,
            intensity,
        }
    }
}

/// Quantize an intensity into one of `levels` bands.
///
/// Uses `floor(intensity * (levels - 1))` clamped to `[0, levels - 1]`, so 0 maps to
/// the first band, 1 to the last, and the mapping never decreases. Negative and NaN
/// intensities land in band 0.
///
/// ```
/// use ascii_cube_types::shading_level;
///
/// assert_eq!(shading_level(0.0, 9), 0);
/// assert_eq!(shading_level(0.5, 9), 4);
/// assert_eq!(shading_level(1.0, 9), 8);
/// assert_eq!(shading_level(7.0, 9), 8);
/// ```
#[inline]
pub fn shading_level(intensity: f64, levels: usize) -> usize {
    if levels == 0 {
        return 0;
    }
    let top = levels - 1;
    // `as usize` truncates and saturates negatives/NaN to 0.
    ((intensity * top as f64) as usize).min(top)
}

/// Shading ramp: glyphs and foreground colors, co-indexed by intensity band.
///
/// The two sequences are independently sized but conventionally the same
/// length, so `chars[i]` and `colors[i]` describe the same band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shading {
    chars: Vec<char>,
    colors: Vec<u8>,
}

impl Shading {
    /// Build a ramp. An empty character set is replaced by [`DEFAULT_CHARS`].
    pub fn new(chars: Vec<char>, colors: Vec<u8>) -> Self {
        let chars = if chars.is_empty() {
            DEFAULT_CHARS.chars().collect()
        } else {
            chars
        };
        Self { chars, colors }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn colors(&self) -> &[u8] {
        &self.colors
    }

    /// Number of character bands.
    pub fn levels(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn glyph(&self, intensity: f64) -> char {
        self.chars[shading_level(intensity, self.chars.len())]
    }

    /// Foreground color for the band, or `None` when the gradient is empty.
    #[inline]
    pub fn color(&self, intensity: f64) -> Option<u8> {
        if self.colors.is_empty() {
            return None;
        }
        Some(self.colors[shading_level(intensity, self.colors.len())])
    }
}

impl Default for Shading {
    fn default() -> Self {
        Self::new(DEFAULT_CHARS.chars().collect(), Vec::new())
    }
}

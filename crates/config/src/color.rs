//! Foreground and background color resolution.
//!
//! Bad color input is never fatal: each resolver returns a usable value plus an
//! optional [`ColorWarning`] describing the fallback it took.

use thiserror::Error;

use crate::palette::{self, GRADIENT_STEPS};
use crate::types::BLACK;

/// Brightest grayscale code, used for flat white fallbacks.
const BRIGHT_WHITE: u8 = 255;

/// Why a color input was not used as given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorWarning {
    #[error("foreground color code {0} out of range 0-255; using default white gradient")]
    ForegroundOutOfRange(i64),

    #[error("unknown fg-color name: '{0}'; using default white gradient")]
    UnknownForeground(String),

    #[error(
        "char set length ({levels}) differs from '{name}' gradient length ({steps}); using solid color"
    )]
    GradientLengthMismatch {
        name: String,
        levels: usize,
        steps: usize,
    },

    #[error("background color code {0} out of range 0-255; using black")]
    BackgroundOutOfRange(i64),

    #[error("unknown background color name: '{0}'; using black")]
    UnknownBackground(String),
}

/// A resolved value and the warning raised while resolving it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub warning: Option<ColorWarning>,
}

impl<T> Resolved<T> {
    fn ok(value: T) -> Self {
        Self {
            value,
            warning: None,
        }
    }

    fn warn(value: T, warning: ColorWarning) -> Self {
        Self {
            value,
            warning: Some(warning),
        }
    }
}

/// Parse the input as an integer color code, the way a user would type one.
fn numeric(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}

fn in_range(code: i64) -> Option<u8> {
    u8::try_from(code).ok()
}

/// Resolve the foreground input into one color per shading level.
///
/// In order:
/// 1. an integer 0-255 gives a flat gradient of that code
/// 2. a gradient name gives that gradient when it has `levels` steps, otherwise
///    a flat gradient of its brightest step (with a warning)
/// 3. a single color name gives a flat gradient of that code
/// 4. anything else falls back to the white gradient (with a warning)
pub fn resolve_foreground(input: &str, levels: usize) -> Resolved<Vec<u8>> {
    let out_of_range = match numeric(input) {
        Some(code) => match in_range(code) {
            Some(code) => return Resolved::ok(vec![code; levels]),
            None => Some(code),
        },
        None => None,
    };

    let name = input.trim().to_lowercase();
    if let Some(codes) = palette::gradient(&name) {
        if codes.len() == levels {
            return Resolved::ok(codes.to_vec());
        }
        return Resolved::warn(
            vec![codes[GRADIENT_STEPS - 1]; levels],
            ColorWarning::GradientLengthMismatch {
                name,
                levels,
                steps: codes.len(),
            },
        );
    }

    if let Some(code) = palette::color_code(&name) {
        return Resolved::ok(vec![code; levels]);
    }

    let warning = match out_of_range {
        Some(code) => ColorWarning::ForegroundOutOfRange(code),
        None => ColorWarning::UnknownForeground(input.to_string()),
    };
    Resolved::warn(white_gradient(levels), warning)
}

/// The default white gradient, or flat bright white when the level count differs.
pub fn white_gradient(levels: usize) -> Vec<u8> {
    match palette::gradient("white") {
        Some(codes) if codes.len() == levels => codes.to_vec(),
        _ => vec![BRIGHT_WHITE; levels],
    }
}

/// Resolve the background input into a single color code (black on failure).
pub fn resolve_background(input: &str) -> Resolved<u8> {
    if let Some(code) = numeric(input) {
        return match in_range(code) {
            Some(code) => Resolved::ok(code),
            None => Resolved::warn(BLACK, ColorWarning::BackgroundOutOfRange(code)),
        };
    }

    match palette::color_code(&input.trim().to_lowercase()) {
        Some(code) => Resolved::ok(code),
        None => Resolved::warn(BLACK, ColorWarning::UnknownBackground(input.to_string())),
    }
}

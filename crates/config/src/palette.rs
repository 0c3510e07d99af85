//! Named colors and gradients (xterm 256-color codes).
//!
//! Pure lookup data. Names are matched in lowercase; callers normalize first.

/// Number of steps in every predefined gradient.
pub const GRADIENT_STEPS: usize = 9;

const GRAYSCALE: [u8; GRADIENT_STEPS] = [232, 235, 238, 241, 244, 247, 250, 253, 255];

/// Predefined foreground gradients, darkest to brightest.
pub static GRADIENTS: &[(&str, [u8; GRADIENT_STEPS])] = &[
    ("white", GRAYSCALE),
    ("grey", GRAYSCALE),
    ("gray", GRAYSCALE),
    ("red", [52, 88, 124, 160, 196, 197, 198, 200, 201]),
    ("green", [22, 28, 34, 40, 46, 47, 48, 83, 119]),
    ("blue", [17, 18, 19, 20, 21, 27, 33, 39, 45]),
    ("yellow", [58, 100, 142, 184, 226, 227, 228, 229, 230]),
    ("magenta", [53, 91, 127, 163, 199, 200, 201, 206, 207]),
    ("cyan", [24, 31, 38, 45, 51, 50, 86, 122, 159]),
];

/// Single color names.
pub static COLOR_NAMES: &[(&str, u8)] = &[
    ("black", 0),
    ("maroon", 1),
    ("green", 2),
    ("olive", 3),
    ("navy", 4),
    ("purple", 5),
    ("teal", 6),
    ("silver", 7),
    ("grey", 8),
    ("red", 9),
    ("lime", 10),
    ("yellow", 11),
    ("blue", 12),
    ("fuchsia", 13),
    ("aqua", 14),
    ("white", 15),
    ("darkgrey", 232),
    ("darkgray", 232),
    ("lightgrey", 250),
    ("lightgray", 250),
    ("brightred", 196),
    ("brightgreen", 46),
    ("brightblue", 21),
    ("brightyellow", 226),
    ("brightmagenta", 199),
    ("brightcyan", 51),
    ("brightwhite", 255),
];

/// Gradient registered under `name`.
pub fn gradient(name: &str) -> Option<&'static [u8; GRADIENT_STEPS]> {
    GRADIENTS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, codes)| codes)
}

/// Color code for `name`.
///
/// Besides the names above, the decimal strings `"0"` through `"255"` resolve
/// to themselves.
pub fn color_code(name: &str) -> Option<u8> {
    COLOR_NAMES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, code)| code)
        .or_else(|| name.parse::<u8>().ok())
}

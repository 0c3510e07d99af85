//! Command-line arguments.

use clap::{Parser, ValueEnum};

use crate::types::{
    DEFAULT_BG_COLOR, DEFAULT_CAMERA_DISTANCE, DEFAULT_CHARS, DEFAULT_CHAR_ASPECT,
    DEFAULT_DENSITY, DEFAULT_FG_COLOR, DEFAULT_FOCAL_LENGTH, DEFAULT_FPS, DEFAULT_LIGHT,
    DEFAULT_ROTATION_DEG, DEFAULT_SIZE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "ascii-cube")]
#[command(version)]
#[command(about = "Render a rotating ASCII cube in the terminal.")]
#[command(long_about = "
Renders a continuously rotating, shaded cube using perspective projection,
per-cell depth testing and directional lighting. Press Ctrl-C to exit.

Example usage:
  ascii-cube --fg-color blue --rotation-y 2
  ascii-cube --chars ' .:-=+*#%@' --fg-color 208 --density 20
")]
pub struct Cli {
    /// Frames per second.
    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = positive_f64)]
    pub fps: f64,

    /// Rotation speed around the X axis (degrees/frame).
    #[arg(long, default_value_t = DEFAULT_ROTATION_DEG[0], allow_negative_numbers = true)]
    pub rotation_x: f64,

    /// Rotation speed around the Y axis (degrees/frame).
    #[arg(long, default_value_t = DEFAULT_ROTATION_DEG[1], allow_negative_numbers = true)]
    pub rotation_y: f64,

    /// Rotation speed around the Z axis (degrees/frame).
    #[arg(long, default_value_t = DEFAULT_ROTATION_DEG[2], allow_negative_numbers = true)]
    pub rotation_z: f64,

    /// Cube half-size.
    #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = positive_f64)]
    pub size: f64,

    /// Focal length for perspective projection.
    #[arg(long, default_value_t = DEFAULT_FOCAL_LENGTH, allow_negative_numbers = true)]
    pub focal_length: f64,

    /// Camera distance from the origin.
    #[arg(long, default_value_t = DEFAULT_CAMERA_DISTANCE, allow_negative_numbers = true)]
    pub cam_distance: f64,

    /// Shading characters, sparse to dense.
    #[arg(long, default_value = DEFAULT_CHARS, value_parser = non_empty, allow_hyphen_values = true)]
    pub chars: String,

    /// Foreground: gradient or color name (e.g. 'blue'), or a 256-color code 0-255.
    #[arg(long, default_value = DEFAULT_FG_COLOR, allow_hyphen_values = true)]
    pub fg_color: String,

    /// Background: color name or 256-color code 0-255.
    #[arg(long, default_value = DEFAULT_BG_COLOR, allow_hyphen_values = true)]
    pub bg_color: String,

    /// X component of the light direction.
    #[arg(long, default_value_t = DEFAULT_LIGHT[0], allow_negative_numbers = true)]
    pub light_x: f64,

    /// Y component of the light direction.
    #[arg(long, default_value_t = DEFAULT_LIGHT[1], allow_negative_numbers = true)]
    pub light_y: f64,

    /// Z component of the light direction (negative points from the camera into the scene).
    #[arg(long, default_value_t = DEFAULT_LIGHT[2], allow_negative_numbers = true)]
    pub light_z: f64,

    /// Sample points per cube edge (10 means 11x11 points per face).
    #[arg(
        long,
        default_value_t = DEFAULT_DENSITY,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub density: u32,

    /// Width/height aspect ratio correction for terminal glyphs.
    #[arg(long, default_value_t = DEFAULT_CHAR_ASPECT, value_parser = positive_f64)]
    pub char_aspect: f64,

    /// Set logging level (overrides RUST_LOG). Logs go to stderr.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

fn positive_f64(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("`{s}` is not a number: {e}"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("`{s}` must be a finite number greater than 0"))
    }
}

fn non_empty(s: &str) -> Result<String, String> {
    if s.is_empty() {
        Err("must contain at least one character".to_string())
    } else {
        Ok(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("ascii-cube").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_match_reference_values() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.fps, 20.0);
        assert_eq!((cli.rotation_x, cli.rotation_y, cli.rotation_z), (0.5, 1.0, 0.3));
        assert_eq!(cli.size, 1.0);
        assert_eq!(cli.focal_length, 2.5);
        assert_eq!(cli.cam_distance, 5.0);
        assert_eq!(cli.chars, ".,:;*!?#@");
        assert_eq!(cli.fg_color, "white");
        assert_eq!(cli.bg_color, "black");
        assert_eq!((cli.light_x, cli.light_y, cli.light_z), (0.5, 0.8, -1.0));
        assert_eq!(cli.density, 10);
        assert_eq!(cli.char_aspect, 2.0);
        assert_eq!(cli.log_level, None);
    }

    #[test]
    fn negative_values_are_accepted_where_meaningful() {
        let cli = parse(&["--rotation-y", "-2.5", "--light-z", "1", "--fg-color", "-1"])
            .unwrap();
        assert_eq!(cli.rotation_y, -2.5);
        assert_eq!(cli.light_z, 1.0);
        assert_eq!(cli.fg_color, "-1");
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(parse(&["--fps", "0"]).is_err());
        assert!(parse(&["--fps", "-5"]).is_err());
        assert!(parse(&["--char-aspect", "nan"]).is_err());
        assert!(parse(&["--density", "0"]).is_err());
        assert!(parse(&["--chars", ""]).is_err());
        assert!(parse(&["--size", "abc"]).is_err());
    }

    #[test]
    fn log_level_parses() {
        let cli = parse(&["--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert_eq!(LogLevel::Debug.to_string(), "debug");
    }
}

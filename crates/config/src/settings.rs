//! Resolved, immutable run configuration.

use crate::args::Cli;
use crate::color::{resolve_background, resolve_foreground, ColorWarning};
use crate::core::math::{light_direction, DVec3};
use crate::types::Shading;

/// Everything the frame loop needs, resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub fps: f64,
    /// Rotation added per frame, radians about X, Y and Z.
    pub rotation_step: DVec3,
    pub size: f64,
    pub focal_length: f64,
    pub camera_distance: f64,
    pub shading: Shading,
    pub background: u8,
    /// Unit light direction.
    pub light: DVec3,
    pub density: u32,
    pub char_aspect: f64,
}

impl Settings {
    /// Resolve parsed arguments, collecting color warnings instead of logging them.
    pub fn resolve(cli: &Cli) -> (Self, Vec<ColorWarning>) {
        let chars: Vec<char> = cli.chars.chars().collect();
        let foreground = resolve_foreground(&cli.fg_color, chars.len());
        let background = resolve_background(&cli.bg_color);
        let warnings = foreground
            .warning
            .iter()
            .chain(background.warning.iter())
            .cloned()
            .collect();

        let settings = Self {
            fps: cli.fps,
            rotation_step: DVec3::new(
                cli.rotation_x.to_radians(),
                cli.rotation_y.to_radians(),
                cli.rotation_z.to_radians(),
            ),
            size: cli.size,
            focal_length: cli.focal_length,
            camera_distance: cli.cam_distance,
            shading: Shading::new(chars, foreground.value),
            background: background.value,
            light: light_direction(DVec3::new(cli.light_x, cli.light_y, cli.light_z)),
            density: cli.density,
            char_aspect: cli.char_aspect,
        };
        (settings, warnings)
    }
}

impl Cli {
    /// Resolve into [`Settings`], logging any color fallbacks.
    pub fn into_settings(self) -> Settings {
        let (settings, warnings) = Settings::resolve(&self);
        for warning in &warnings {
            tracing::warn!("{warning}");
        }
        tracing::debug!(?settings, "settings resolved");
        settings
    }
}

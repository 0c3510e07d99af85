//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are encoded into a reusable byte buffer and written with a single
//! `write_all`, so the terminal never sees half a frame. Escape sequences that
//! make up the visual contract are written literally; crossterm only supplies
//! the cursor visibility commands.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{cursor, QueueableCommand};

use crate::core::Cube;
use crate::cube_view::CubeView;
use crate::fb::FrameBuffer;
use crate::types::{BLACK, CLEAR_SCREEN, CURSOR_HOME, RESET, WHITE};
use crate::viewport::Viewport;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
    background: u8,
    active: bool,
}

impl TerminalRenderer {
    pub fn new(background: u8) -> Self {
        Self::with_writer(io::stdout(), background)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W, background: u8) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(64 * 1024),
            background,
            active: false,
        }
    }

    /// Clear the screen and hide the cursor.
    ///
    /// From here until [`TerminalRenderer::exit`] (or drop) the terminal is
    /// considered owned by the renderer.
    pub fn enter(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.extend_from_slice(CLEAR_SCREEN.as_bytes());
        self.buf.queue(cursor::Hide)?;
        self.active = true;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the terminal: home, black background, clear, reset, show cursor.
    ///
    /// Idempotent; also run from `Drop` if the caller never got here.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.buf.clear();
        encode_cleanup_into(&mut self.buf)?;
        self.buf.queue(cursor::Show)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Wipe the screen, e.g. after a resize left stale cells behind.
    pub fn clear_screen(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.extend_from_slice(CLEAR_SCREEN.as_bytes());
        self.flush_buf()
    }

    /// Encode and write one frame.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(fb, self.background, &mut self.buf)?;
        self.flush_buf()
    }

    /// Render `cube` at `viewport` size and put it on screen.
    ///
    /// A size change wipes the screen before the new frame is written, so
    /// cells outside the smaller frame don't linger. Returns whether it resized.
    pub fn present(
        &mut self,
        view: &mut CubeView,
        cube: &Cube,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> Result<bool> {
        let resized = view.render_into(cube, viewport, fb);
        if resized {
            self.clear_screen()?;
        }
        self.draw(fb)?;
        Ok(resized)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for TerminalRenderer<W> {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Encode a full frame into `out`.
///
/// Layout, byte for byte:
/// - `ESC[H` once
/// - per row: background `ESC[48;5;<bg>m`, then each cell, switching foreground
///   with `ESC[38;5;<n>m` only when it differs from the last one emitted on the row
/// - an uncolored cell following a colored one switches back to white
/// - `ESC[0m` after each row, plus `\n` on all rows but the last
pub fn encode_frame_into(fb: &FrameBuffer, background: u8, out: &mut Vec<u8>) -> Result<()> {
    out.extend_from_slice(CURSOR_HOME.as_bytes());

    let mut utf8 = [0u8; 4];
    for y in 0..fb.height() {
        write!(out, "\x1b[48;5;{background}m")?;

        let mut current: Option<u8> = None;
        let (glyphs, colors) = fb.row(y);
        for (&ch, &color) in glyphs.iter().zip(colors) {
            match color {
                Some(code) if current != Some(code) => {
                    write!(out, "\x1b[38;5;{code}m")?;
                    current = Some(code);
                }
                None if current.is_some() => {
                    write!(out, "\x1b[38;5;{WHITE}m")?;
                    current = None;
                }
                _ => {}
            }
            out.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
        }

        out.extend_from_slice(RESET.as_bytes());
        if y + 1 < fb.height() {
            out.push(b'\n');
        }
    }
    Ok(())
}

/// Encode the exit sequence: home, black background, clear, reset.
pub fn encode_cleanup_into(out: &mut Vec<u8>) -> Result<()> {
    out.extend_from_slice(CURSOR_HOME.as_bytes());
    write!(out, "\x1b[48;5;{BLACK}m")?;
    out.extend_from_slice(CLEAR_SCREEN.as_bytes());
    out.extend_from_slice(RESET.as_bytes());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::DVec3;
    use crate::cube_view::Lens;
    use crate::types::Shading;

    fn encode(fb: &FrameBuffer, bg: u8) -> String {
        let mut out = Vec::new();
        encode_frame_into(fb, bg, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn blank_frame_has_only_row_framing() {
        let fb = FrameBuffer::new(3, 2, Shading::new(vec!['#'], vec![9]));
        assert_eq!(
            encode(&fb, 0),
            "\x1b[H\x1b[48;5;0m   \x1b[0m\n\x1b[48;5;0m   \x1b[0m"
        );
    }

    #[test]
    fn foreground_is_emitted_once_per_run() {
        let mut fb = FrameBuffer::new(4, 1, Shading::new(vec!['a', 'b'], vec![1, 2]));
        fb.add_point(0, 0, 1.0, 0.0);
        fb.add_point(1, 0, 1.0, 0.0);
        fb.add_point(2, 0, 1.0, 1.0);
        fb.add_point(3, 0, 1.0, 1.0);
        assert_eq!(
            encode(&fb, 4),
            "\x1b[H\x1b[48;5;4m\x1b[38;5;1maa\x1b[38;5;2mbb\x1b[0m"
        );
    }

    #[test]
    fn uncolored_cell_after_color_resets_to_white() {
        let mut fb = FrameBuffer::new(3, 1, Shading::new(vec!['x'], vec![42]));
        fb.add_point(0, 0, 1.0, 1.0);
        fb.add_point(2, 0, 1.0, 1.0);
        assert_eq!(
            encode(&fb, 0),
            "\x1b[H\x1b[48;5;0m\x1b[38;5;42mx\x1b[38;5;15m \x1b[38;5;42mx\x1b[0m"
        );
    }

    #[test]
    fn color_state_resets_each_row() {
        let mut fb = FrameBuffer::new(1, 2, Shading::new(vec!['x'], vec![42]));
        fb.add_point(0, 0, 1.0, 1.0);
        fb.add_point(0, 1, 1.0, 1.0);
        assert_eq!(
            encode(&fb, 0),
            "\x1b[H\x1b[48;5;0m\x1b[38;5;42mx\x1b[0m\n\x1b[48;5;0m\x1b[38;5;42mx\x1b[0m"
        );
    }

    #[test]
    fn cleanup_sequence_is_exact() {
        let mut out = Vec::new();
        encode_cleanup_into(&mut out).unwrap();
        assert_eq!(out, b"\x1b[H\x1b[48;5;0m\x1b[2J\x1b[0m");
    }

    #[test]
    fn clear_screen_writes_only_the_clear_sequence() {
        let mut term = TerminalRenderer::with_writer(Vec::new(), 0);
        term.clear_screen().unwrap();
        assert_eq!(term.writer().as_slice(), b"\x1b[2J");
        assert!(!term.is_active());
    }

    #[test]
    fn resize_clears_screen_before_the_next_frame() {
        let cube = Cube::new(1.0);
        let mut view = CubeView::new(Lens {
            light: DVec3::NEG_Z,
            focal_length: 2.5,
            camera_distance: 5.0,
            density: 10,
            char_aspect: 2.0,
        });
        let mut fb = FrameBuffer::new(80, 24, Shading::default());
        let mut term = TerminalRenderer::with_writer(Vec::new(), 0);

        let resized = term
            .present(&mut view, &cube, Viewport::new(80, 24), &mut fb)
            .unwrap();
        assert!(!resized);
        let first = term.writer().clone();
        assert!(first.starts_with(b"\x1b[H"));
        assert!(!first.windows(4).any(|w| w == b"\x1b[2J"));

        let resized = term
            .present(&mut view, &cube, Viewport::new(40, 10), &mut fb)
            .unwrap();
        assert!(resized);
        let second = &term.writer()[first.len()..];
        assert!(second.starts_with(b"\x1b[2J\x1b[H"));

        let mut frame = Vec::new();
        encode_frame_into(&fb, 0, &mut frame).unwrap();
        assert_eq!(&second[4..], frame.as_slice());
        assert_eq!(frame.iter().filter(|&&b| b == b'\n').count(), 9);
    }

    #[test]
    fn drop_runs_cleanup_once_entered() {
        let mut sink = Vec::new();
        {
            let mut term = TerminalRenderer::with_writer(&mut sink, 0);
            term.enter().unwrap();
        }
        let text = String::from_utf8(sink).unwrap();
        assert!(text.starts_with("\x1b[2J"));
        assert!(text.contains("\x1b[H\x1b[48;5;0m\x1b[2J\x1b[0m"));
    }

    #[test]
    fn exit_is_idempotent() {
        let mut term = TerminalRenderer::with_writer(Vec::new(), 0);
        term.enter().unwrap();
        term.exit().unwrap();
        let len = term.writer().len();
        term.exit().unwrap();
        assert_eq!(term.writer().len(), len);
        assert!(!term.is_active());
    }
}

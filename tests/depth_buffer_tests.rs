//! Depth-test invariants of the framebuffer.

use std::collections::HashMap;

use ascii_cube::term::FrameBuffer;
use ascii_cube::types::{Shading, DEFAULT_CHARS};

/// Small deterministic generator so the test is reproducible.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn range(&mut self, lo: i32, hi: i32) -> i32 {
        lo + (self.next() % (hi - lo) as u64) as i32
    }

    fn unit(&mut self) -> f64 {
        (self.next() % 10_000) as f64 / 10_000.0
    }
}

fn shading() -> Shading {
    Shading::new(DEFAULT_CHARS.chars().collect(), (0..9).collect())
}

#[test]
fn each_cell_keeps_the_nearest_write() {
    let (w, h) = (16u16, 8u16);
    let mut fb = FrameBuffer::new(w, h, shading());
    let mut rng = XorShift(0x9e37_79b9_7f4a_7c15);
    let mut nearest: HashMap<(i32, i32), (f64, f64)> = HashMap::new();

    for _ in 0..5_000 {
        // Include out-of-bounds coordinates on every side.
        let x = rng.range(-4, i32::from(w) + 4);
        let y = rng.range(-4, i32::from(h) + 4);
        let depth = 1.0 + rng.unit() * 10.0;
        let intensity = rng.unit();
        fb.add_point(x, y, depth, intensity);

        if x >= 0 && y >= 0 && x < i32::from(w) && y < i32::from(h) {
            let entry = nearest.entry((x, y)).or_insert((f64::INFINITY, 0.0));
            if depth < entry.0 {
                *entry = (depth, intensity);
            }
        }
    }

    let reference = shading();
    for y in 0..h {
        for x in 0..w {
            let cell = fb.get(x, y).unwrap();
            match nearest.get(&(i32::from(x), i32::from(y))) {
                Some(&(depth, intensity)) => {
                    assert_eq!(cell.depth, depth);
                    assert_eq!(cell.ch, reference.glyph(intensity));
                    assert_eq!(cell.color, reference.color(intensity));
                }
                None => {
                    assert!(cell.depth.is_infinite());
                    assert_eq!(cell.ch, ' ');
                    assert_eq!(cell.color, None);
                }
            }
        }
    }
}

#[test]
fn intensity_extremes_select_first_and_last_band() {
    let mut fb = FrameBuffer::new(2, 1, shading());
    fb.add_point(0, 0, 1.0, 0.0);
    fb.add_point(1, 0, 1.0, 1.0);
    let first = fb.get(0, 0).unwrap();
    let last = fb.get(1, 0).unwrap();
    assert_eq!((first.ch, first.color), ('.', Some(0)));
    assert_eq!((last.ch, last.color), ('@', Some(8)));
}

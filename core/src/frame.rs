use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// A renderable snapshot of the display, indexed as `[y][x]`.
pub type Frame = [[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// The 64x32 monochrome framebuffer.
///
/// Sprites composite by XOR: drawing a lit sprite pixel over a lit
/// destination pixel turns it off and reports a collision. Coordinates
/// wrap on both axes; there is no clipping variant.
pub struct FrameBuffer {
    pixels: Frame,
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            pixels: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        }
    }

    pub fn clear(&mut self) {
        self.pixels = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    }

    /// XOR-draws an 8-wide sprite at `(x, y)`, one byte per row, most
    /// significant bit leftmost. Returns whether any lit pixel was unset.
    pub fn draw_sprite(&mut self, x: u8, y: u8, rows: &[u8]) -> bool {
        let mut collision = false;
        for (row, &bits) in rows.iter().enumerate() {
            let py = (y as usize + row) % DISPLAY_HEIGHT;
            for col in 0..8 {
                if bits & (0x80 >> col) == 0 {
                    continue;
                }
                let px = (x as usize + col) % DISPLAY_WIDTH;
                let pixel = &mut self.pixels[py][px];
                if *pixel {
                    collision = true;
                }
                *pixel = !*pixel;
            }
        }
        collision
    }

    pub fn snapshot(&self) -> Frame {
        self.pixels
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_sets_pixels() {
        let mut fb = FrameBuffer::new();
        assert!(!fb.draw_sprite(1, 2, &[0b1010_0001]));
        let frame = fb.snapshot();
        assert!(frame[2][1]);
        assert!(!frame[2][2]);
        assert!(frame[2][3]);
        assert!(frame[2][8]);
    }

    #[test]
    fn test_draw_xors_and_reports_collision() {
        let mut fb = FrameBuffer::new();
        fb.draw_sprite(0, 0, &[0b0101_0000]);
        // 1100 over 0101 leaves 1001 and collides on the shared bit
        assert!(fb.draw_sprite(0, 0, &[0b1100_0000]));
        let frame = fb.snapshot();
        assert_eq!(
            [frame[0][0], frame[0][1], frame[0][2], frame[0][3]],
            [true, false, false, true]
        );
    }

    #[test]
    fn test_double_draw_restores_prior_state() {
        let mut fb = FrameBuffer::new();
        fb.draw_sprite(4, 5, &[0xF0, 0x90, 0xF0]);
        let before = fb.snapshot();
        let sprite = [0x3C, 0x42, 0x81];
        fb.draw_sprite(6, 5, &sprite);
        // The second identical draw erases exactly what the first set,
        // colliding on every pixel it turned on.
        assert!(fb.draw_sprite(6, 5, &sprite));
        assert_eq!(fb.snapshot(), before);
    }

    #[test]
    fn test_draw_wraps_both_axes() {
        let mut fb = FrameBuffer::new();
        fb.draw_sprite(60, 30, &[0xFF; 8]);
        let frame = fb.snapshot();
        let rows: Vec<usize> = (0..DISPLAY_HEIGHT).filter(|&y| frame[y].iter().any(|&p| p)).collect();
        let cols: Vec<usize> = (0..DISPLAY_WIDTH).filter(|&x| (0..DISPLAY_HEIGHT).any(|y| frame[y][x])).collect();
        assert_eq!(rows, vec![0, 1, 2, 3, 4, 5, 30, 31]);
        assert_eq!(cols, vec![0, 1, 2, 3, 60, 61, 62, 63]);
    }

    #[test]
    fn test_zero_row_sprite_is_a_noop() {
        let mut fb = FrameBuffer::new();
        assert!(!fb.draw_sprite(0, 0, &[]));
        assert_eq!(fb.snapshot(), FrameBuffer::new().snapshot());
    }

    #[test]
    fn test_clear_unsets_everything() {
        let mut fb = FrameBuffer::new();
        fb.draw_sprite(0, 0, &[0xFF]);
        fb.clear();
        assert_eq!(fb.snapshot(), FrameBuffer::new().snapshot());
    }
}

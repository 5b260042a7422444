use sdl2::pixels::PixelFormatEnum;

use okto_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use okto_core::Frame;

/// # Screen
/// Presents the engine's 64x32 monochrome framebuffer on an SDL2 window,
/// scaled up by an integer factor. It only gets a call to `render` when
/// the engine reports a changed frame.
pub struct Screen {
    canvas: sdl2::render::WindowCanvas,
}

impl Screen {
    /// Creates a window bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `scale` the size multiplier for each framebuffer pixel
    pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Result<Self, String> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                "okto",
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        Ok(Screen { canvas })
    }

    /// Flattens a frame into an RGB24 texture buffer.
    ///
    /// Rows are concatenated, each pixel becomes an RGB triple, and the
    /// on/off state maps to full/zero intensity.
    fn frame_to_texture(frame: &Frame) -> Vec<u8> {
        frame
            .iter()
            .flat_map(|row| row.iter())
            .flat_map(|&on| std::iter::repeat(if on { 0xFF } else { 0x00 }).take(3))
            .collect()
    }

    /// Uploads the frame as an RGB24 texture and presents it.
    pub fn render(&mut self, frame: &Frame) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(|e| e.to_string())?;

        texture
            .with_lock(None, |buffer: &mut [u8], _pitch: usize| {
                buffer.copy_from_slice(&Screen::frame_to_texture(frame));
            })
            .map_err(|e| e.to_string())?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_to_texture() {
        let mut frame: Frame = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        frame[0][1] = true;
        frame[1][0] = true;
        let texture = Screen::frame_to_texture(&frame);

        let mut expected: Vec<u8> = vec![0; DISPLAY_WIDTH * DISPLAY_HEIGHT * 3];
        expected[3..6].copy_from_slice(&[0xFF, 0xFF, 0xFF]);
        expected[192..195].copy_from_slice(&[0xFF, 0xFF, 0xFF]);

        assert_eq!(texture, expected);
    }
}

use sdl2::pixels::PixelFormatEnum;

use chip8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use chip8_core::frontend;
use chip8_core::{Error, FrameBuffer};

const TITLE: &str = "Chip-8";

/// The colours lit and unlit pixels are drawn with, as RGB
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub on: [u8; 3],
    pub off: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            on: [0x74, 0x8C, 0xAB],
            off: [0xD1, 0xD4, 0xCD],
        }
    }
}

/// # Display
/// Renders the Chip-8 FrameBuffer into an SDL2 window.
///
/// Each Chip-8 pixel is drawn as a `scale` x `scale` block.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
    palette: Palette,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `scale` the size multiplier for each pixel
    /// * `palette` the colours to draw with
    pub fn new(sdl: &sdl2::Sdl, scale: u32, palette: Palette) -> Result<Self, Error> {
        let video_subsystem = sdl.video().map_err(Error::Frontend)?;
        let window = video_subsystem
            .window(
                TITLE,
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .build()
            .map_err(|e| Error::Frontend(e.to_string()))?;
        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| Error::Frontend(e.to_string()))?;

        Ok(Display { canvas, palette })
    }

    /// Formats a Chip-8 FrameBuffer for rendering as an SDL2 texture.
    ///
    /// An RGB24 texture is a 1D array of bytes that represent concatenated rows of RGB pixels,
    /// so each pixel becomes the three bytes of its palette colour.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    /// * `palette` the colours for lit and unlit pixels
    fn frame_to_rgb24(frame: &FrameBuffer, palette: &Palette) -> Vec<u8> {
        frame
            .rows()
            .flat_map(|row| row.iter())
            .flat_map(|&lit| if lit { palette.on } else { palette.off })
            .collect()
    }
}

impl frontend::Display for Display {
    /// Formats the Chip-8 FrameBuffer as an SDL2 RGB24 texture and renders it.
    fn render(&mut self, frame: &FrameBuffer) -> Result<(), Error> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(|e| Error::Frontend(e.to_string()))?;

        let pixels = Display::frame_to_rgb24(frame, &self.palette);
        texture
            .update(None, &pixels, DISPLAY_WIDTH * 3)
            .map_err(|e| Error::Frontend(e.to_string()))?;

        self.canvas
            .copy(&texture, None, None)
            .map_err(Error::Frontend)?;
        self.canvas.present();
        Ok(())
    }
}

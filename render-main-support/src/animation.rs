use crate::error::RenderError;
use crate::palette::Palette;
use crate::raster::{rasterize, IndexedFrame, RasterLayout};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};
use log::{debug, info};
use ring_grid::{Cell, Grid};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// The last frame stays up this many times longer than the others.
pub const FINAL_DELAY_FACTOR: u16 = 50;

/// Ordered frames with their delays in hundredths of a second. Owned by the
/// caller and threaded through each frame step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Animation {
    frames: Vec<IndexedFrame>,
    delays: Vec<u16>,
}

impl Animation {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_frame(mut self, frame: IndexedFrame, delay: u16) -> Self {
        self.frames.push(frame);
        self.delays.push(delay);
        self
    }

    pub fn frames(&self) -> &[IndexedFrame] {
        &self.frames
    }

    pub fn delays(&self) -> &[u16] {
        &self.delays
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// One frame per count of rows shown, from none to all `grid.height()`.
pub fn animate_grid(
    grid: &Grid<Cell>,
    layout: &RasterLayout,
    palette: &Palette,
    frame_delay: u16,
) -> Result<Animation, RenderError> {
    let frame_count = grid.height() + 1;
    (0..frame_count).try_fold(Animation::new(), |animation, rows_shown| {
        let delay = if rows_shown + 1 == frame_count {
            frame_delay.saturating_mul(FINAL_DELAY_FACTOR)
        } else {
            frame_delay
        };
        let frame = rasterize(grid, rows_shown, layout, palette)?;
        debug!("frame {rows_shown}/{}: delay {delay}", frame_count - 1);
        Ok(animation.with_frame(frame, delay))
    })
}

pub fn encode_gif<W: Write>(
    animation: &Animation,
    palette: &Palette,
    loops: u16,
    writer: W,
) -> Result<(), RenderError> {
    if animation.is_empty() {
        return Err(RenderError::EmptyAnimation);
    }

    let mut encoder = GifEncoder::new(writer);
    encoder.set_repeat(Repeat::Finite(loops))?;
    for (frame, &delay) in animation.frames().iter().zip(animation.delays()) {
        let delay = Delay::from_numer_denom_ms(u32::from(delay) * 10, 1);
        encoder.encode_frame(Frame::from_parts(frame.to_rgba(palette), 0, 0, delay))?;
    }
    Ok(())
}

pub fn write_gif<P: AsRef<Path>>(
    animation: &Animation,
    palette: &Palette,
    loops: u16,
    path: P,
) -> Result<(), RenderError> {
    let path = path.as_ref();
    let file = BufWriter::new(File::create(path)?);
    encode_gif(animation, palette, loops, file)?;
    info!("wrote {} frames to {}", animation.len(), path.display());
    Ok(())
}

//! Event capture and GIF generation for search visualization

use std::path::Path;

use image::{Frame, Rgba, RgbaImage};

use crate::algorithm::events::{SearchEvent, SearchObserver};
use crate::io::configuration::{GIF_CELL_SCALE, GIF_MAX_FRAMES, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::io::render::Appearance;
use crate::spatial::grid::Grid;
use crate::spatial::terrain::Terrain;

/// A cell's appearance right after one search event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    /// Cell index
    pub cell: usize,
    /// Appearance after the event
    pub look: Appearance,
}

/// Captures cell appearance changes for visualization
///
/// The full grid is snapshotted at the first event, once start and goal are
/// marked, and each later state transition is stored as a single change.
/// Exploratory neighbor checks are not recorded since they never change
/// appearance on their own.
pub struct SearchRecording {
    width: usize,
    height: usize,
    initial: Option<Vec<Appearance>>,
    pub(crate) changes: Vec<CellChange>,
}

impl SearchRecording {
    /// Recording sized for `grid`
    pub fn new(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            initial: None,
            changes: Vec::with_capacity(grid.passable_count()),
        }
    }

    /// Returns all recorded changes
    pub fn changes(&self) -> &[CellChange] {
        &self.changes
    }

    /// Returns the total number of recorded changes
    pub const fn change_count(&self) -> usize {
        self.changes.len()
    }

    /// Export the captured changes as a GIF with automatic frame skipping
    ///
    /// Frames are skipped when the requested delay is below what viewers
    /// honour, and further when the run would exceed `GIF_MAX_FRAMES`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No search events were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        let Some(initial) = &self.initial else {
            return Err(invalid_parameter(
                "recording",
                &0,
                &"no search events captured for visualization",
            ));
        };

        let requested_ms = frame_delay_ms.max(1);
        let effective_delay_ms = requested_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let viewer_skip = VIEWER_MIN_FRAME_DELAY_MS.div_ceil(requested_ms) as usize;
        let budget_skip = self.changes.len().div_ceil(GIF_MAX_FRAMES);
        let skip_factor = viewer_skip.max(budget_skip).max(1);

        let frames = self.generate_frames(initial, effective_delay_ms, skip_factor);

        if let Some(parent) = output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
        }

        let file = std::fs::File::create(output_path).with_path(output_path, "create file")?;
        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .with_path(output_path, "encode gif")?;

        Ok(())
    }

    fn generate_frames(
        &self,
        initial: &[Appearance],
        delay_ms: u32,
        skip_factor: usize,
    ) -> Vec<Frame> {
        let mut state = initial.to_vec();
        let mut frames = vec![self.render_frame(&state, delay_ms)];

        for (applied, change) in self.changes.iter().enumerate() {
            if let Some(slot) = state.get_mut(change.cell) {
                *slot = change.look;
            }
            if (applied + 1) % skip_factor == 0 {
                frames.push(self.render_frame(&state, delay_ms));
            }
        }

        if self.changes.len() % skip_factor != 0 {
            frames.push(self.render_frame(&state, delay_ms));
        }

        // Final frame displays longer for better visibility
        frames.push(self.render_frame(&state, delay_ms * 25));
        frames
    }

    fn render_frame(&self, state: &[Appearance], delay_ms: u32) -> Frame {
        let scale = GIF_CELL_SCALE;
        let mut img = RgbaImage::new(self.width as u32 * scale, self.height as u32 * scale);

        for (index, &look) in state.iter().enumerate() {
            let x = (index % self.width) as u32 * scale;
            let y = (index / self.width) as u32 * scale;
            let color = Rgba(colour(look));
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(x + dx, y + dy, color);
                }
            }
        }

        Frame::from_parts(img, 0, 0, image::Delay::from_numer_denom_ms(delay_ms, 1))
    }
}

/// RGBA colour of an appearance; terrain darkens with cost
const fn colour(look: Appearance) -> [u8; 4] {
    match look {
        Appearance::Terrain(Terrain::Plain) => [226, 218, 186, 255],
        Appearance::Terrain(Terrain::Rough) => [196, 176, 126, 255],
        Appearance::Terrain(Terrain::Dense) => [128, 156, 96, 255],
        Appearance::Terrain(Terrain::Steep) => [112, 102, 92, 255],
        Appearance::Terrain(Terrain::Wall) | Appearance::Wall => [32, 40, 92, 255],
        Appearance::Visited => [200, 64, 64, 255],
        Appearance::Frontier => [64, 200, 222, 255],
        Appearance::Path => [64, 200, 96, 255],
        Appearance::Start => [40, 160, 40, 255],
        Appearance::Goal => [232, 200, 40, 255],
    }
}

impl SearchObserver for SearchRecording {
    fn on_event(&mut self, grid: &Grid, event: SearchEvent) -> Result<()> {
        if self.initial.is_none() {
            self.width = grid.width();
            self.height = grid.height();
            self.initial = Some(grid.cells().map(Appearance::of).collect());
        }
        if matches!(event, SearchEvent::Examined { .. }) {
            return Ok(());
        }
        if let Some(cell) = grid.cell(event.cell()) {
            self.changes.push(CellChange {
                cell: event.cell(),
                look: Appearance::of(cell),
            });
        }
        Ok(())
    }
}

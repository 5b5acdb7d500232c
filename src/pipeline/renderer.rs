use crate::errors::{ImageGenError, ImageGenResult};
use crate::pipeline::FetchedImage;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::{queue, terminal};
use image::imageops::{self, FilterType};
use std::io::{self, BufRead, Write};

/// Column count used when the terminal size cannot be queried.
pub const FALLBACK_COLUMNS: u16 = 80;

const UPPER_HALF_BLOCK: &str = "\u{2580}";

/// Display surface for fetched images.
pub trait Renderer {
    fn render(&mut self, image: &FetchedImage) -> ImageGenResult<()>;
}

/// Discards every image. Used with `--no-display`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, image: &FetchedImage) -> ImageGenResult<()> {
        tracing::debug!(index = image.index, "Display disabled");
        Ok(())
    }
}

/// Draws images with truecolor half-block cells.
///
/// Each character cell shows two vertically stacked pixels: the foreground
/// colours the upper half, the background the lower half.
pub struct TerminalRenderer<W: Write> {
    out: W,
    columns: Option<u16>,
    pause: bool,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            columns: None,
            pause: false,
        }
    }

    /// Fixes the output width instead of querying the terminal.
    pub fn with_columns(mut self, columns: u16) -> Self {
        self.columns = Some(columns.max(1));
        self
    }

    /// Waits for Enter on stdin after each image.
    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn columns(&self) -> u16 {
        self.columns.unwrap_or_else(|| {
            terminal::size()
                .map(|(cols, _)| cols)
                .unwrap_or(FALLBACK_COLUMNS)
        })
    }

    fn draw(&mut self, image: &FetchedImage) -> io::Result<()> {
        let max_width = u32::from(self.columns());
        let pixels = if image.width > max_width {
            let height = (u64::from(image.height) * u64::from(max_width)
                / u64::from(image.width))
            .max(1) as u32;
            imageops::resize(&image.pixels, max_width, height, FilterType::Triangle)
        } else {
            image.pixels.clone()
        };

        writeln!(
            self.out,
            "Image {} ({}x{}): {}",
            image.index,
            image.width,
            image.height,
            image.path.display()
        )?;

        let (width, height) = pixels.dimensions();
        for y in (0..height).step_by(2) {
            for x in 0..width {
                let top = pixels.get_pixel(x, y).0;
                queue!(self.out, SetForegroundColor(rgb(top)))?;
                if y + 1 < height {
                    let bottom = pixels.get_pixel(x, y + 1).0;
                    queue!(self.out, SetBackgroundColor(rgb(bottom)))?;
                } else {
                    queue!(self.out, SetBackgroundColor(Color::Reset))?;
                }
                queue!(self.out, Print(UPPER_HALF_BLOCK))?;
            }
            queue!(self.out, ResetColor, Print("\n"))?;
        }

        self.out.flush()
    }

    fn wait_for_enter(&mut self) -> io::Result<()> {
        write!(self.out, "Press Enter to continue...")?;
        self.out.flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, image: &FetchedImage) -> ImageGenResult<()> {
        self.draw(image)
            .map_err(|e| ImageGenError::Render(format!("image {}: {}", image.index, e)))?;

        if self.pause {
            self.wait_for_enter()
                .map_err(|e| ImageGenError::Render(e.to_string()))?;
        }
        Ok(())
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb { r, g, b }
}

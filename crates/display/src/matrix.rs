//! RGB LED matrix backend.
//!
//! The driver needs root and real panel hardware, so it is only compiled with
//! the `hardware` feature. [`MatrixConfig`] is always available so the
//! configuration layer can parse it on any machine.

/// Panel wiring options passed to the matrix driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixConfig {
    /// Rows per panel.
    pub rows: u32,
    /// Columns per panel.
    pub cols: u32,
    /// Panels daisy-chained on one output.
    pub chain_length: u32,
    /// Parallel outputs; each stacks a chain below the previous one.
    pub parallel: u32,
    pub hardware_mapping: String,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            rows: 64,
            cols: 64,
            chain_length: 1,
            parallel: 2,
            hardware_mapping: "regular".to_string(),
        }
    }
}

impl MatrixConfig {
    /// Canvas size in pixels: `(width, height)`.
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.cols * self.chain_length, self.rows * self.parallel)
    }
}

#[cfg(feature = "hardware")]
pub use hw::MatrixDisplay;

#[cfg(feature = "hardware")]
mod hw {
    use anyhow::{anyhow, Result};
    use rpi_led_matrix::{LedCanvas, LedColor, LedMatrix, LedMatrixOptions, LedRuntimeOptions};
    use tracing::info;

    use super::MatrixConfig;
    use crate::backend::Display;
    use crate::fb::{Canvas, PixelBuffer, Rgb};

    /// Double-buffered LED matrix: frames are copied to the offscreen canvas
    /// and swapped in on vsync.
    pub struct MatrixDisplay {
        matrix: LedMatrix,
        offscreen: Option<LedCanvas>,
    }

    impl MatrixDisplay {
        pub fn open(config: &MatrixConfig) -> Result<Self> {
            let mut options = LedMatrixOptions::new();
            options.set_rows(config.rows);
            options.set_cols(config.cols);
            options.set_chain_length(config.chain_length);
            options.set_parallel(config.parallel);
            options.set_hardware_mapping(&config.hardware_mapping);

            let matrix = LedMatrix::new(Some(options), Some(LedRuntimeOptions::new()))
                .map_err(|e| anyhow!("failed to initialise LED matrix: {e}"))?;
            let offscreen = matrix.offscreen_canvas();
            let (w, h) = config.canvas_size();
            info!(width = w, height = h, mapping = %config.hardware_mapping, "LED matrix ready");

            Ok(Self {
                matrix,
                offscreen: Some(offscreen),
            })
        }

        fn swap(&mut self, canvas: LedCanvas) {
            self.offscreen = Some(self.matrix.swap(canvas));
        }
    }

    impl Display for MatrixDisplay {
        fn present(&mut self, frame: &PixelBuffer) -> Result<()> {
            let mut canvas = self
                .offscreen
                .take()
                .unwrap_or_else(|| self.matrix.offscreen_canvas());
            canvas.clear();
            for y in 0..frame.height() {
                for x in 0..frame.width() {
                    if let Some(px) = frame.get(x, y) {
                        if px != Rgb::BLACK {
                            let color = LedColor {
                                red: px.r,
                                green: px.g,
                                blue: px.b,
                            };
                            canvas.set(x, y, &color);
                        }
                    }
                }
            }
            self.swap(canvas);
            Ok(())
        }

        fn shutdown(&mut self) -> Result<()> {
            let mut canvas = self
                .offscreen
                .take()
                .unwrap_or_else(|| self.matrix.offscreen_canvas());
            canvas.clear();
            self.swap(canvas);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_wiring_is_a_64_by_128_panel() {
        let config = MatrixConfig::default();
        assert_eq!(config.canvas_size(), (64, 128));
        assert_eq!(config.hardware_mapping, "regular");
    }
}

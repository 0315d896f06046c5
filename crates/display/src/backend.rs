//! Output device seam.

use anyhow::Result;

use crate::fb::PixelBuffer;

/// A device that shows finished frames.
///
/// The game view draws into a [`PixelBuffer`]; a backend only has to put that
/// buffer on screen.
pub trait Display {
    /// Show `frame`, replacing whatever was shown before.
    fn present(&mut self, frame: &PixelBuffer) -> Result<()>;

    /// Blank the output and release the device. Called once on exit.
    fn shutdown(&mut self) -> Result<()>;
}

impl<D: Display + ?Sized> Display for Box<D> {
    fn present(&mut self, frame: &PixelBuffer) -> Result<()> {
        (**self).present(frame)
    }

    fn shutdown(&mut self) -> Result<()> {
        (**self).shutdown()
    }
}

//! Types used in render configuration
use crate::{Error, march::MarchSettings};
use nalgebra::Point2;

/// Thread pool to use for multithreaded rendering
///
/// Most users will use the global Rayon pool, but it's possible to provide your
/// own as well.
pub enum ThreadPool {
    /// User-provided pool
    Custom(rayon::ThreadPool),
    /// Global Rayon pool
    Global,
}

impl ThreadPool {
    /// Runs a function across the thread pool
    pub fn run<F: FnOnce() -> V + Send, V: Send>(&self, f: F) -> V {
        match self {
            ThreadPool::Custom(p) => p.install(f),
            ThreadPool::Global => f(),
        }
    }

    /// Returns the number of threads in the pool
    pub fn thread_count(&self) -> usize {
        match self {
            ThreadPool::Custom(p) => p.current_num_threads(),
            ThreadPool::Global => rayon::current_num_threads(),
        }
    }
}

/// Image size in pixels
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ImageSize {
    width: u32,
    height: u32,
}

impl Default for ImageSize {
    fn default() -> Self {
        Self::from(512)
    }
}

/// Builds a square image
impl From<u32> for ImageSize {
    fn from(size: u32) -> Self {
        Self::new(size, size)
    }
}

impl ImageSize {
    /// Builds a new image size
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the width, in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height, in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Checks that the image has at least one pixel
    pub fn check(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            Err(Error::BadImageSize(self.width, self.height))
        } else {
            Ok(())
        }
    }

    /// Converts a pixel position into screen coordinates
    ///
    /// The image covers the `±1` square, sampled at pixel centers.  Row 0 is
    /// at `y = -1`, matching a Vulkan-style viewport; the aspect ratio is not
    /// corrected.
    pub fn pixel_to_screen(&self, col: usize, row: usize) -> Point2<f32> {
        Point2::new(
            2.0 * (col as f32 + 0.5) / self.width as f32 - 1.0,
            2.0 * (row as f32 + 0.5) / self.height as f32 - 1.0,
        )
    }
}

/// Settings for rendering the scene into an image
pub struct RenderConfig<'a> {
    /// Render size
    pub image_size: ImageSize,

    /// Thread pool to use for rendering
    ///
    /// If this is `None`, then rendering is done in a single thread; otherwise,
    /// the provided pool is used.
    pub threads: Option<&'a ThreadPool>,

    /// March loop parameters
    pub march: MarchSettings,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        Self {
            image_size: ImageSize::default(),
            threads: Some(&ThreadPool::Global),
            march: MarchSettings::default(),
        }
    }
}

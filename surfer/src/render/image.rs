use super::{ImageSize, ThreadPool};
use rayon::prelude::*;

/// Generic image type
///
/// The image is laid out in row-major order, and can be indexed either by a
/// `usize` index or a `(row, column)` tuple.
///
/// ```text
///        0 ------------> width (columns)
///        |             |
///        |             |
///        |             |
///        V--------------
///   height (rows)
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Image<P> {
    data: Vec<P>,
    size: ImageSize,
}

/// Four-channel color image
pub type ColorImage = Image<[u8; 4]>;

impl<P: Default + Clone> Image<P> {
    /// Builds a new image filled with `P::default()`
    pub fn new(size: ImageSize) -> Self {
        Self {
            data: vec![
                P::default();
                size.width() as usize * size.height() as usize
            ],
            size,
        }
    }
}

impl<P: Send> Image<P> {
    /// Fills the image by computing a per-pixel function
    ///
    /// The closure takes `(x, y)` (column, row) tuples.  Rows are distributed
    /// across the thread pool if one is provided.
    pub fn apply_effect<F: Fn(usize, usize) -> P + Send + Sync>(
        &mut self,
        f: F,
        threads: Option<&ThreadPool>,
    ) {
        let width = (self.size.width() as usize).max(1);
        let r = |(y, row): (usize, &mut [P])| {
            for (x, v) in row.iter_mut().enumerate() {
                *v = f(x, y);
            }
        };

        if let Some(threads) = threads {
            threads.run(|| {
                self.data.par_chunks_mut(width).enumerate().for_each(r)
            })
        } else {
            self.data.chunks_mut(width).enumerate().for_each(r)
        }
    }
}

impl<P> Image<P> {
    /// Returns the image size
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Returns the image width
    pub fn width(&self) -> usize {
        self.size.width() as usize
    }

    /// Returns the image height
    pub fn height(&self) -> usize {
        self.size.height() as usize
    }

    /// Iterates over pixel values
    pub fn iter(&self) -> impl Iterator<Item = &P> + '_ {
        self.data.iter()
    }

    /// Returns a single row of pixels
    pub fn row(&self, row: usize) -> &[P] {
        let w = self.width();
        &self.data[row * w..(row + 1) * w]
    }

    /// Returns the number of pixels in the image
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks whether the image is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checks a `(row, column)` position
    ///
    /// Returns the input position in the 1D array if valid; panics otherwise
    fn decode_position(&self, pos: (usize, usize)) -> usize {
        let (row, col) = pos;
        assert!(
            row < self.height(),
            "row ({row}) must be less than image height ({})",
            self.height()
        );
        assert!(
            col < self.width(),
            "column ({col}) must be less than image width ({})",
            self.width()
        );
        row * self.width() + col
    }
}

impl ColorImage {
    /// Flattens the image into packed RGBA bytes
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.data.iter().flatten().copied().collect()
    }
}

/// Indexes an image with `(row, col)`
impl<P> std::ops::Index<(usize, usize)> for Image<P> {
    type Output = P;
    fn index(&self, pos: (usize, usize)) -> &Self::Output {
        let index = self.decode_position(pos);
        &self.data[index]
    }
}

impl<P> std::ops::IndexMut<(usize, usize)> for Image<P> {
    fn index_mut(&mut self, pos: (usize, usize)) -> &mut Self::Output {
        let index = self.decode_position(pos);
        &mut self.data[index]
    }
}

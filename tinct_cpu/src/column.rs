// Copyright 2025 the Tinct Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting a single mutable buffer into columns that can be accessed concurrently.

use tinct_common::color::Rgba8;

/// All columns of a pixel buffer.
///
/// Each column holds exclusive references to its own pixels, so the columns can be handed to
/// different threads without any further synchronization.
///
/// Pixels of a column are not contiguous in a row-major buffer, so every column stores one
/// reference per pixel. Splitting a buffer therefore allocates `width * height` pointers, twice
/// the size of the RGBA8 pixels themselves on 64-bit targets, and this happens on every render
/// call.
#[derive(Debug)]
pub struct Columns<'a> {
    columns: Vec<Column<'a>>,
}

impl<'a> Columns<'a> {
    /// Split a row-major `buffer` of `width * height` pixels into its columns.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is not of length `width * height`.
    pub fn new(width: u16, height: u16, buffer: &'a mut [Rgba8]) -> Self {
        assert_eq!(
            buffer.len(),
            usize::from(width) * usize::from(height),
            "Expected `buffer` to have length of exactly `width * height`"
        );

        let mut columns: Vec<Column<'a>> = (0..width)
            .map(|x| Column {
                x,
                pixels: Vec::with_capacity(usize::from(height)),
            })
            .collect();

        if width == 0 {
            return Self { columns };
        }

        for row in buffer.chunks_exact_mut(usize::from(width)) {
            for (column, pixel) in columns.iter_mut().zip(row) {
                column.pixels.push(pixel);
            }
        }

        Self { columns }
    }

    /// The number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether there are no columns at all.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Apply the given function to each column, from left to right.
    pub fn update_columns(&mut self, func: impl FnMut(&mut Column<'a>)) {
        self.columns.iter_mut().for_each(func);
    }
}

impl<'a> IntoIterator for Columns<'a> {
    type Item = Column<'a>;
    type IntoIter = std::vec::IntoIter<Column<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

/// The pixels of a single column, from top to bottom.
#[derive(Debug)]
pub struct Column<'a> {
    x: u16,
    pixels: Vec<&'a mut Rgba8>,
}

impl<'a> Column<'a> {
    /// The x coordinate of this column.
    pub fn x(&self) -> u16 {
        self.x
    }

    /// The number of pixels in this column.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "a column never has more pixels than the u16 height of its pixmap"
    )]
    pub fn height(&self) -> u16 {
        self.pixels.len() as u16
    }

    /// Return the pixel in row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not smaller than the column's height.
    pub fn pixel(&self, y: u16) -> Rgba8 {
        *self.pixels[usize::from(y)]
    }

    /// Overwrite the pixel in row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not smaller than the column's height.
    pub fn set_pixel(&mut self, y: u16, pixel: Rgba8) {
        *self.pixels[usize::from(y)] = pixel;
    }

    /// Iterate over the pixels of the column from top to bottom, along with their row.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = (u16, &mut Rgba8)> + use<'_, 'a> {
        (0..=u16::MAX).zip(self.pixels.iter_mut().map(|pixel| &mut **pixel))
    }
}

#[cfg(test)]
mod tests {
    use super::Columns;
    use tinct_common::color::Rgba8;

    fn gray(v: u8) -> Rgba8 {
        Rgba8 {
            r: v,
            g: v,
            b: v,
            a: 255,
        }
    }

    #[test]
    fn columns_cover_every_pixel_once() {
        let (width, height) = (5_u16, 3_u16);
        let mut buf = vec![gray(0); 15];

        let mut columns = Columns::new(width, height, &mut buf);
        assert_eq!(columns.len(), 5);

        columns.update_columns(|column| {
            assert_eq!(column.height(), height);
            let x = column.x();
            for (y, pixel) in column.rows_mut() {
                pixel.r += 1;
                pixel.g = u8::try_from(x).unwrap();
                pixel.b = u8::try_from(y).unwrap();
            }
        });

        for (idx, pixel) in buf.iter().enumerate() {
            assert_eq!(pixel.r, 1, "pixel {idx} was visited {} times", pixel.r);
            assert_eq!(usize::from(pixel.g), idx % 5);
            assert_eq!(usize::from(pixel.b), idx / 5);
        }
    }

    #[test]
    fn set_pixel_writes_through() {
        let mut buf = vec![gray(0); 6];
        {
            let columns = Columns::new(2, 3, &mut buf);
            for mut column in columns {
                let x = column.x();
                column.set_pixel(2, gray(10 + u8::try_from(x).unwrap()));
                assert_eq!(column.pixel(2), gray(10 + u8::try_from(x).unwrap()));
            }
        }

        assert_eq!(buf[4], gray(10));
        assert_eq!(buf[5], gray(11));
    }

    #[test]
    fn one_reference_per_pixel() {
        let (width, height) = (7_u16, 300_u16);
        let mut buf = vec![gray(0); usize::from(width) * usize::from(height)];
        let columns = Columns::new(width, height, &mut buf);

        let total: usize = columns
            .into_iter()
            .map(|column| usize::from(column.height()))
            .sum();
        assert_eq!(total, buf.len());
    }

    #[test]
    fn zero_sized_buffers() {
        let mut buf = vec![];
        assert!(Columns::new(0, 10, &mut buf).is_empty());

        let columns = Columns::new(4, 0, &mut buf);
        assert_eq!(columns.len(), 4);
        assert!(columns.into_iter().all(|column| column.height() == 0));
    }
}

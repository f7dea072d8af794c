// Copyright 2025 the Tinct Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simple pixmap type.

use crate::color::Rgba8;
use crate::compose::TRANSPARENT;
use crate::Error;

/// A pixmap of straight (non-premultiplied) RGBA8 values.
#[derive(Debug, Clone, PartialEq)]
pub struct Pixmap {
    /// Width of the pixmap in pixels.
    width: u16,
    /// Height of the pixmap in pixels.
    height: u16,
    /// Buffer of the pixmap in RGBA8 format.
    buf: Vec<Rgba8>,
}

impl Pixmap {
    /// Create a new pixmap with the given width and height in pixels.
    ///
    /// All pixels are initialized to transparent black.
    pub fn new(width: u16, height: u16) -> Self {
        let buf = vec![TRANSPARENT; usize::from(width) * usize::from(height)];
        Self { width, height, buf }
    }

    /// Create a new pixmap with the given straight-alpha RGBA8 data.
    ///
    /// The `data` vector must be of length `width * height` exactly.
    ///
    /// The pixels are in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if the `data` vector is not of length `width * height`.
    pub fn from_parts(data: Vec<Rgba8>, width: u16, height: u16) -> Self {
        assert_eq!(
            data.len(),
            usize::from(width) * usize::from(height),
            "Expected `data` to have length of exactly `width * height`"
        );
        Self {
            width,
            height,
            buf: data,
        }
    }

    /// Return the width of the pixmap.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Return the height of the pixmap.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Whether the pixmap has no pixels, i.e. its width or height is zero.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Create a pixmap from a PNG file.
    #[cfg(feature = "png")]
    pub fn from_png(data: impl std::io::Read) -> Result<Self, png::DecodingError> {
        let mut decoder = png::Decoder::new(data);
        decoder.set_transformations(
            png::Transformations::normalize_to_color8() | png::Transformations::ALPHA,
        );

        let mut reader = decoder.read_info()?;
        let mut pixmap = {
            let info = reader.info();
            let width: u16 = info
                .width
                .try_into()
                .map_err(|_| png::DecodingError::LimitsExceeded)?;
            let height: u16 = info
                .height
                .try_into()
                .map_err(|_| png::DecodingError::LimitsExceeded)?;
            Self::new(width, height)
        };

        // Note `reader.info()` returns the pre-transformation color type output, whereas
        // `reader.output_color_type()` takes the transformation into account.
        let (color_type, bit_depth) = reader.output_color_type();
        debug_assert_eq!(
            bit_depth,
            png::BitDepth::Eight,
            "normalize_to_color8 means the bit depth is always 8."
        );

        match color_type {
            png::ColorType::Rgb | png::ColorType::Grayscale => {
                unreachable!("We set a transformation to always convert to alpha")
            }
            png::ColorType::Indexed => {
                unreachable!("Transformation should have expanded indexed images")
            }
            png::ColorType::Rgba => {
                debug_assert_eq!(
                    pixmap.data_as_u8_slice().len(),
                    reader.output_buffer_size(),
                    "The pixmap buffer should have the same number of bytes as the image."
                );
                reader.next_frame(pixmap.data_as_u8_slice_mut())?;
            }
            png::ColorType::GrayscaleAlpha => {
                debug_assert_eq!(
                    pixmap.data().len() * 2,
                    reader.output_buffer_size(),
                    "The grayscale image should have two bytes per pixel."
                );
                let mut grayscale_data = vec![0; reader.output_buffer_size()];
                reader.next_frame(&mut grayscale_data)?;

                for (grayscale_pixel, pixmap_pixel) in
                    grayscale_data.chunks_exact(2).zip(pixmap.data_mut())
                {
                    let (gray, alpha) = (grayscale_pixel[0], grayscale_pixel[1]);
                    *pixmap_pixel = Rgba8 {
                        r: gray,
                        g: gray,
                        b: gray,
                        a: alpha,
                    };
                }
            }
        };

        log::debug!(
            "decoded {}x{} PNG as {color_type:?}",
            pixmap.width,
            pixmap.height
        );

        Ok(pixmap)
    }

    /// Return the current content of the pixmap as a PNG.
    #[cfg(feature = "png")]
    pub fn into_png(self) -> Result<Vec<u8>, png::EncodingError> {
        let mut data = Vec::new();
        let mut encoder =
            png::Encoder::new(&mut data, u32::from(self.width), u32::from(self.height));
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(self.data_as_u8_slice())?;
        writer.finish().map(|_| data)
    }

    /// Returns a reference to the underlying data as straight-alpha RGBA8.
    ///
    /// The pixels are in row-major order.
    pub fn data(&self) -> &[Rgba8] {
        &self.buf
    }

    /// Returns a mutable reference to the underlying data as straight-alpha RGBA8.
    ///
    /// The pixels are in row-major order.
    pub fn data_mut(&mut self) -> &mut [Rgba8] {
        &mut self.buf
    }

    /// Returns a reference to the underlying data as straight-alpha RGBA8.
    ///
    /// The pixels are in row-major order. Each pixel consists of four bytes in the order
    /// `[r, g, b, a]`.
    pub fn data_as_u8_slice(&self) -> &[u8] {
        bytemuck::cast_slice(&self.buf)
    }

    /// Returns a mutable reference to the underlying data as straight-alpha RGBA8.
    ///
    /// The pixels are in row-major order. Each pixel consists of four bytes in the order
    /// `[r, g, b, a]`.
    pub fn data_as_u8_slice_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.buf)
    }

    /// Sample a pixel from the pixmap.
    ///
    /// The coordinates must be inside of the pixmap. Use [`pixel`](Self::pixel) for a checked
    /// lookup.
    #[inline(always)]
    pub fn sample(&self, x: u16, y: u16) -> Rgba8 {
        self.buf[self.index(x, y)]
    }

    /// Set a pixel in the pixmap at the given coordinates.
    ///
    /// The coordinate system has its origin at the top-left corner, with `x` increasing to
    /// the right and `y` increasing downward.
    ///
    /// The coordinates must be inside of the pixmap. Use [`try_set_pixel`](Self::try_set_pixel)
    /// for a checked write.
    #[inline(always)]
    pub fn set_pixel(&mut self, x: u16, y: u16, pixel: Rgba8) {
        let idx = self.index(x, y);
        self.buf[idx] = pixel;
    }

    /// Return the pixel at the given coordinates, or [`Error::OutOfBounds`].
    pub fn pixel(&self, x: u16, y: u16) -> Result<Rgba8, Error> {
        self.check_bounds(x, y)?;
        Ok(self.sample(x, y))
    }

    /// Set the pixel at the given coordinates, or return [`Error::OutOfBounds`].
    pub fn try_set_pixel(&mut self, x: u16, y: u16, pixel: Rgba8) -> Result<(), Error> {
        self.check_bounds(x, y)?;
        self.set_pixel(x, y, pixel);
        Ok(())
    }

    /// Consume the pixmap, returning the data as the underlying [`Vec`] of RGBA8.
    ///
    /// The pixels are in row-major order.
    pub fn take(self) -> Vec<Rgba8> {
        self.buf
    }

    #[inline(always)]
    fn index(&self, x: u16, y: u16) -> usize {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        usize::from(self.width) * usize::from(y) + usize::from(x)
    }

    fn check_bounds(&self, x: u16, y: u16) -> Result<(), Error> {
        if x < self.width && y < self.height {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

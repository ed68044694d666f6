// File: crates/minichart/src/surface.rs
// Summary: Owned CPU raster surface with pixel-ratio scaling and PNG/RGBA export.

use skia_safe as skia;

use crate::error::RenderError;

/// An addressable drawing target.
///
/// The surface has a logical size in device-independent pixels; the backing
/// buffer is `pixel_ratio` times larger so output stays crisp on high-density
/// displays. The ratio is applied to the canvas transform exactly once, here,
/// so all drawing afterwards is issued in logical units.
pub struct Surface {
    raster: skia::Surface,
    logical_width: i32,
    logical_height: i32,
    pixel_ratio: f32,
}

impl Surface {
    /// Surface with a 1:1 logical-to-physical mapping.
    pub fn new(width: i32, height: i32) -> Result<Self, RenderError> {
        Self::with_pixel_ratio(width, height, 1.0)
    }

    /// Surface whose backing buffer is scaled by `pixel_ratio`.
    pub fn with_pixel_ratio(width: i32, height: i32, pixel_ratio: f32) -> Result<Self, RenderError> {
        if !pixel_ratio.is_finite() || pixel_ratio <= 0.0 {
            return Err(RenderError::InvalidPixelRatio(pixel_ratio));
        }
        let physical_width = (width as f32 * pixel_ratio).round() as i32;
        let physical_height = (height as f32 * pixel_ratio).round() as i32;
        if physical_width <= 0 || physical_height <= 0 {
            return Err(RenderError::SurfaceCreation { width: physical_width, height: physical_height });
        }
        let mut raster = skia::surfaces::raster_n32_premul((physical_width, physical_height))
            .ok_or(RenderError::SurfaceCreation { width: physical_width, height: physical_height })?;
        if pixel_ratio != 1.0 {
            raster.canvas().scale((pixel_ratio, pixel_ratio));
        }
        Ok(Self { raster, logical_width: width, logical_height: height, pixel_ratio })
    }

    pub fn canvas(&mut self) -> &skia::Canvas {
        self.raster.canvas()
    }

    pub fn logical_width(&self) -> i32 {
        self.logical_width
    }

    pub fn logical_height(&self) -> i32 {
        self.logical_height
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    pub fn physical_width(&self) -> i32 {
        self.raster.width()
    }

    pub fn physical_height(&self) -> i32 {
        self.raster.height()
    }

    /// Encode the current surface contents as PNG bytes.
    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>, RenderError> {
        let image = self.raster.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::PngEncode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Encode the current surface contents and write them to `path`,
    /// creating parent directories as needed.
    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<(), RenderError> {
        let bytes = self.to_png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Read the backing buffer as tightly packed RGBA8.
    /// Returns (pixels, width, height, stride) in physical pixels.
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, i32, i32, usize), RenderError> {
        let w = self.raster.width();
        let h = self.raster.height();
        let stride = w as usize * 4;
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut pixels = vec![0u8; stride * h as usize];
        if !self.raster.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::PixelReadback);
        }
        Ok((pixels, w, h, stride))
    }
}

//! Raster canvas sized to a projected extent.
//!
//! The map occupies the top `height` rows of the image; a fixed band below it
//! holds the legend. Projected coordinates are rescaled linearly onto pixels
//! with the latitude axis flipped so north is up.

use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, Rgb, RgbImage};
use imageproc::drawing::{draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point as PixelPoint;
use tracing::debug;

use projection::rescale;
use wx_common::{Extent, FieldError, FieldResult, Point, Region};

/// Default image width in pixels.
pub const DEFAULT_WIDTH: u32 = 1024;

/// Height of the legend band under the map.
pub const LEGEND_HEIGHT: u32 = 200;

/// Pixels of arrow length per unit of wind speed.
pub const SPEED_SCALE: f64 = 5.0;

/// Largest map height accepted, guards against degenerate aspect ratios.
const MAX_MAP_HEIGHT: f64 = 16_384.0;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// A white canvas with coordinate transforms for one extent.
pub struct Plot {
    extent: Extent,
    width: u32,
    height: u32,
    pub(crate) image: RgbImage,
}

impl Plot {
    /// Create a canvas `width` pixels wide whose map area keeps the aspect
    /// ratio of `extent`.
    pub fn new(extent: Extent, width: u32) -> FieldResult<Self> {
        extent.ensure_area()?;
        if width == 0 {
            return Err(FieldError::render("image width must be positive"));
        }

        let height = (extent.height() * width as f64 / extent.width()).trunc();
        if !(1.0..=MAX_MAP_HEIGHT).contains(&height) {
            return Err(FieldError::render(format!(
                "map height {} px is out of range for width {}",
                height, width
            )));
        }
        let height = height as u32;

        debug!(width, height, legend = LEGEND_HEIGHT, "Created plot");

        Ok(Self {
            extent,
            width,
            height,
            image: RgbImage::from_pixel(width, height + LEGEND_HEIGHT, WHITE),
        })
    }

    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the map area, legend excluded.
    pub fn map_height(&self) -> u32 {
        self.height
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Horizontal pixel position of a longitude.
    pub fn trans_long(&self, long: f64) -> FieldResult<f64> {
        rescale(
            long,
            self.extent.min_long,
            self.extent.max_long,
            self.width as f64,
        )
    }

    /// Vertical pixel position of a projected latitude, measured down from
    /// the top of the image.
    pub fn trans_lat(&self, lat: f64) -> FieldResult<f64> {
        let up = rescale(
            lat,
            self.extent.min_lat,
            self.extent.max_lat,
            self.height as f64,
        )?;
        Ok(self.height as f64 - up)
    }

    fn to_pixel(&self, (long, lat): (f64, f64)) -> FieldResult<(f64, f64)> {
        Ok((self.trans_long(long)?, self.trans_lat(lat)?))
    }

    /// Fill a region with a solid colour.
    pub fn fill_region(&mut self, region: &Region, color: Rgb<u8>) -> FieldResult<()> {
        let pixels = self.region_pixels(region)?;
        fill_polygon(&mut self.image, &pixels, color);
        Ok(())
    }

    /// Stroke the closed outline of a region.
    pub fn outline_region(&mut self, region: &Region, color: Rgb<u8>) -> FieldResult<()> {
        let pixels = self.region_pixels(region)?;
        stroke_closed(&mut self.image, &pixels, color);
        Ok(())
    }

    /// Draw a wind vector from the midpoint of `region`.
    ///
    /// The arrow is `speed · SPEED_SCALE` pixels long. Direction 0 points
    /// down the image and the arrow turns with increasing direction the same
    /// way a compass bearing does, so it shows where the wind blows to.
    pub fn draw_arrow(
        &mut self,
        region: &Region,
        speed: f64,
        direction: f64,
        color: Rgb<u8>,
    ) -> FieldResult<()> {
        let mid = region.midpoint();
        let (sx, sy) = self.to_pixel((mid.x, mid.y))?;
        let start = Point::new(sx, sy);

        let length = speed * SPEED_SCALE;
        let head = length / 10.0;
        let angle = -direction;

        let end = rotate(start, Point::new(sx, sy + length), angle);
        draw_line_segment_mut(
            &mut self.image,
            snap((start.x, start.y)),
            snap((end.x, end.y)),
            color,
        );

        if length.abs() >= 1.0 {
            let left = rotate(start, Point::new(sx + head, sy + length - head), angle);
            let right = rotate(start, Point::new(sx - head, sy + length - head), angle);
            fill_polygon(
                &mut self.image,
                &[(left.x, left.y), (end.x, end.y), (right.x, right.y)],
                color,
            );
        }
        Ok(())
    }

    /// Encode the canvas as PNG.
    pub fn encode_png(&self) -> FieldResult<Vec<u8>> {
        let mut buf = Vec::new();
        PngEncoder::new(&mut buf)
            .write_image(
                self.image.as_raw(),
                self.image.width(),
                self.image.height(),
                ColorType::Rgb8,
            )
            .map_err(|e| FieldError::render(format!("PNG encoding failed: {}", e)))?;
        Ok(buf)
    }

    /// Encode the canvas as PNG and write it to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> FieldResult<()> {
        let path = path.as_ref();
        let png = self.encode_png()?;
        std::fs::write(path, &png)
            .map_err(|e| FieldError::Io(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), bytes = png.len(), "Saved plot");
        Ok(())
    }

    fn region_pixels(&self, region: &Region) -> FieldResult<Vec<(f64, f64)>> {
        region.coords().iter().map(|&c| self.to_pixel(c)).collect()
    }
}

/// Rotate `p` about `center` by `degrees`, in image coordinates.
fn rotate(center: Point, p: Point, degrees: f64) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point::new(
        center.x + dx * cos + dy * sin,
        center.y - dx * sin + dy * cos,
    )
}

/// Round to integer pixels and drop repeated vertices, including a closing
/// vertex equal to the first.
fn polygon_points(pixels: &[(f64, f64)]) -> Vec<PixelPoint<i32>> {
    let mut points: Vec<PixelPoint<i32>> = Vec::with_capacity(pixels.len());
    for &(x, y) in pixels {
        let p = PixelPoint::new(x.round() as i32, y.round() as i32);
        if points.last() != Some(&p) {
            points.push(p);
        }
    }
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}

fn fill_polygon(image: &mut RgbImage, pixels: &[(f64, f64)], color: Rgb<u8>) {
    let points = polygon_points(pixels);
    match points.len() {
        0 => {}
        1 | 2 => stroke_closed(image, pixels, color),
        _ => draw_polygon_mut(image, &points, color),
    }
}

fn stroke_closed(image: &mut RgbImage, pixels: &[(f64, f64)], color: Rgb<u8>) {
    let Some(&first) = pixels.first() else {
        return;
    };
    let next = pixels.iter().skip(1).chain(std::iter::once(&first));
    for (&from, &to) in pixels.iter().zip(next) {
        draw_line_segment_mut(image, snap(from), snap(to), color);
    }
}

/// Nearest pixel centre; the line rasterizer truncates.
fn snap((x, y): (f64, f64)) -> (f32, f32) {
    (x.round() as f32, y.round() as f32)
}

//! Legend band: colour bar, timestamp, location and credits.

use std::path::Path;

use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use rusttype::{Font, Scale};
use tracing::debug;

use wx_common::{FieldError, FieldResult};

use crate::colorscale::ColorScale;
use crate::plot::{Plot, BLACK, LEGEND_HEIGHT, WHITE};

const FONT_SIZE: f32 = 20.0;
const LINE_HEIGHT: i32 = 22;
const BAR_LEFT: i32 = 100;
const BAR_WIDTH: i32 = 750;
const BAR_TOP: i32 = 100;
const BAR_HEIGHT: u32 = 30;
const LABEL_EVERY: i64 = 5;

pub const SOURCE_CREDIT: &str = "Source: http://aviationweather.gov/";
const VECTOR_NOTE: [&str; 2] = [
    "The wind direction and magnitude are",
    " displayed in vector form.",
];

/// Load a TrueType font for legend text.
pub fn load_font(path: impl AsRef<Path>) -> FieldResult<Font<'static>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| FieldError::Io(format!("{}: {}", path.display(), e)))?;
    Font::try_from_vec(bytes)
        .ok_or_else(|| FieldError::render(format!("{} is not a usable font", path.display())))
}

impl Plot {
    /// Draw the legend band under the map.
    ///
    /// The colour bar is always drawn. Text needs a font; without one the
    /// band carries only the bar.
    pub fn draw_legend(
        &mut self,
        section_label: &str,
        timestamp: &str,
        scale: &ColorScale,
        font: Option<&Font<'_>>,
    ) {
        let top = self.map_height() as i32;
        let width = self.width();

        // Clears arrows that overran the southern edge of the map.
        draw_filled_rect_mut(
            &mut self.image,
            Rect::at(0, top).of_size(width, LEGEND_HEIGHT),
            WHITE,
        );

        let swatch = (BAR_WIDTH / scale.len().max(1) as i32).max(1);
        let bar_top = top + BAR_TOP;
        let mut x = BAR_LEFT;
        let mut labels = Vec::new();
        for (key, color) in scale.iter() {
            draw_filled_rect_mut(
                &mut self.image,
                Rect::at(x, bar_top).of_size(swatch as u32, BAR_HEIGHT),
                color,
            );
            if key % LABEL_EVERY == 0 {
                labels.push((x, key.to_string()));
            }
            x += swatch;
        }

        let Some(font) = font else {
            debug!("No font available, legend text skipped");
            return;
        };

        let label_y = bar_top + BAR_HEIGHT as i32 + 5;
        self.text(font, 15, label_y, "Temp(C):");
        for (x, label) in &labels {
            self.text(font, *x, label_y, label);
        }

        let right = width as i32;
        self.text(font, 20, top + 5, timestamp);
        self.text(
            font,
            right / 2 - 200,
            top + 5,
            &format!("Location:{}", section_label),
        );
        for (i, line) in VECTOR_NOTE.iter().enumerate() {
            self.text(font, right - 349, top + 5 + LINE_HEIGHT * i as i32, line);
        }
        self.text(font, right - 309, top + 170, SOURCE_CREDIT);
    }

    fn text(&mut self, font: &Font<'_>, x: i32, y: i32, text: &str) {
        draw_text_mut(
            &mut self.image,
            BLACK,
            x,
            y,
            Scale::uniform(FONT_SIZE),
            font,
            text,
        );
    }
}

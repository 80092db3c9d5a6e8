//! Integer-keyed temperature colour scale.

use image::Rgb;

use wx_common::{FieldError, FieldResult};

/// One colour per whole degree Celsius from −30 to 50.
const TEMPERATURE_STOPS: [(i64, &str); 81] = [
    (-30, "#5700FF"),
    (-29, "#5700FF"),
    (-28, "#5700FF"),
    (-27, "#5700FF"),
    (-26, "#4100FF"),
    (-25, "#4100FF"),
    (-24, "#4100FF"),
    (-23, "#4100FF"),
    (-22, "#2A00FF"),
    (-21, "#2A00FF"),
    (-20, "#2A00FF"),
    (-19, "#2A00FF"),
    (-18, "#1300FF"),
    (-17, "#1300FF"),
    (-16, "#1300FF"),
    (-15, "#0003FF"),
    (-14, "#0019FF"),
    (-13, "#0030FF"),
    (-12, "#0047FF"),
    (-11, "#005EFF"),
    (-10, "#0075FF"),
    (-9, "#008BFF"),
    (-8, "#00A2FF"),
    (-7, "#00B9FF"),
    (-6, "#00D0FF"),
    (-5, "#00E6FF"),
    (-4, "#00FDFF"),
    (-3, "#00FFE9"),
    (-2, "#00FFD2"),
    (-1, "#00FFBB"),
    (0, "#00FFA5"),
    (1, "#00FF8E"),
    (2, "#00FF77"),
    (3, "#00FF60"),
    (4, "#00FF4A"),
    (5, "#00FF33"),
    (6, "#00FF1C"),
    (7, "#00FF05"),
    (8, "#11FF00"),
    (9, "#27FF00"),
    (10, "#3EFF00"),
    (11, "#55FF00"),
    (12, "#6CFF00"),
    (13, "#82FF00"),
    (14, "#99FF00"),
    (15, "#B0FF00"),
    (16, "#C7FF00"),
    (17, "#DEFF00"),
    (18, "#F4FF00"),
    (19, "#FFF200"),
    (20, "#FFDB00"),
    (21, "#FFC400"),
    (22, "#FFAE00"),
    (23, "#FF9700"),
    (24, "#FF8000"),
    (25, "#FF6900"),
    (26, "#FF5200"),
    (27, "#FF3C00"),
    (28, "#FF2500"),
    (29, "#FF0E00"),
    (30, "#FF0008"),
    (31, "#FF001E"),
    (32, "#FF0035"),
    (33, "#FF004C"),
    (34, "#FF0063"),
    (35, "#FF007A"),
    (36, "#FF0090"),
    (37, "#FF00A7"),
    (38, "#FF00BE"),
    (39, "#FF00D5"),
    (40, "#FF00EB"),
    (41, "#FF00EB"),
    (42, "#FB00FF"),
    (43, "#FB00FF"),
    (44, "#FB00FF"),
    (45, "#E400FF"),
    (46, "#E400FF"),
    (47, "#CD00FF"),
    (48, "#CD00FF"),
    (49, "#B600FF"),
    (50, "#B600FF"),
];

/// A contiguous run of integer keys, each with its own colour.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    min: i64,
    colors: Vec<Rgb<u8>>,
}

impl ColorScale {
    /// The standard −30..=50 °C temperature scale.
    pub fn temperature() -> FieldResult<Self> {
        Self::from_stops(&TEMPERATURE_STOPS)
    }

    /// Build a scale from `(key, "#RRGGBB")` stops.
    ///
    /// Keys must be consecutive integers in ascending order.
    pub fn from_stops(stops: &[(i64, &str)]) -> FieldResult<Self> {
        let Some(&(min, _)) = stops.first() else {
            return Err(FieldError::parse("colour scale has no stops"));
        };

        let mut colors = Vec::with_capacity(stops.len());
        for (offset, &(key, hex)) in stops.iter().enumerate() {
            if key != min + offset as i64 {
                return Err(FieldError::parse(format!(
                    "colour scale keys must be consecutive, found {} after {}",
                    key,
                    min + offset as i64 - 1
                )));
            }
            let rgb = hex_to_rgb(hex)
                .ok_or_else(|| FieldError::parse(format!("invalid colour {:?}", hex)))?;
            colors.push(Rgb(rgb));
        }

        Ok(Self { min, colors })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.min + self.colors.len() as i64 - 1
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Exact lookup of an integer key.
    pub fn lookup(&self, key: i64) -> FieldResult<Rgb<u8>> {
        if key < self.min || key > self.max() {
            return Err(FieldError::Lookup(key));
        }
        Ok(self.colors[(key - self.min) as usize])
    }

    /// Colour for a continuous value: rounded to the nearest key, then
    /// clamped into the scale.
    pub fn color_for(&self, value: f64) -> Rgb<u8> {
        let key = (value.round() as i64).clamp(self.min, self.max());
        self.colors[(key - self.min) as usize]
    }

    /// Whether `value` rounds to a key inside the scale.
    pub fn covers(&self, value: f64) -> bool {
        self.lookup(value.round() as i64).is_ok()
    }

    /// Keys and colours in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, Rgb<u8>)> + '_ {
        self.colors
            .iter()
            .enumerate()
            .map(move |(i, &c)| (self.min + i as i64, c))
    }
}

/// Parse a `#RRGGBB` colour.
pub fn hex_to_rgb(hex: &str) -> Option<[u8; 3]> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some([r, g, b])
}

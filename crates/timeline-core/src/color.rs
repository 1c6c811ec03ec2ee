// File: crates/timeline-core/src/color.rs
// Summary: RGBA color value and the series-name -> color lookup.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }

    pub const fn with_alpha(self, a: u8) -> Self { Self { a, ..self } }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let h = s.trim().trim_start_matches('#');
        let byte = |i: usize| u8::from_str_radix(h.get(i..i + 2)?, 16).ok();
        match h.len() {
            3 => {
                let nib = |i: usize| u8::from_str_radix(h.get(i..i + 1)?, 16).ok().map(|v| v * 17);
                Some(Self::rgb(nib(0)?, nib(1)?, nib(2)?))
            }
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self { r: byte(0)?, g: byte(2)?, b: byte(4)?, a: byte(6)? }),
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// The ten-color categorical palette used when no colors are configured.
pub const CATEGORY10: [Color; 10] = [
    Color::rgb(0x1f, 0x77, 0xb4),
    Color::rgb(0xff, 0x7f, 0x0e),
    Color::rgb(0x2c, 0xa0, 0x2c),
    Color::rgb(0xd6, 0x27, 0x28),
    Color::rgb(0x94, 0x67, 0xbd),
    Color::rgb(0x8c, 0x56, 0x4b),
    Color::rgb(0xe3, 0x77, 0xc2),
    Color::rgb(0x7f, 0x7f, 0x7f),
    Color::rgb(0xbc, 0xbd, 0x22),
    Color::rgb(0x17, 0xbe, 0xcf),
];

type LookupFn = Arc<dyn Fn(&str) -> Color + Send + Sync>;

/// Where series colors come from.
#[derive(Clone)]
pub enum ColorSource {
    /// Ordinal assignment over these colors.
    Palette(Vec<Color>),
    /// Caller-supplied scale.
    Lookup(LookupFn),
}

impl ColorSource {
    pub fn lookup<F>(f: F) -> Self
    where
        F: Fn(&str) -> Color + Send + Sync + 'static,
    {
        ColorSource::Lookup(Arc::new(f))
    }

    /// Palette from hex strings; entries that do not parse are skipped.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Self {
        ColorSource::Palette(colors.iter().filter_map(|c| Color::from_hex(c.as_ref())).collect())
    }
}

impl fmt::Debug for ColorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSource::Palette(p) => f.debug_tuple("Palette").field(p).finish(),
            ColorSource::Lookup(_) => f.write_str("Lookup(..)"),
        }
    }
}

/// Ordinal scale: each new name takes the next palette entry, wrapping around.
pub struct ColorScale {
    source: ColorSource,
    assigned: RefCell<HashMap<String, Color>>,
}

impl ColorScale {
    pub fn new(source: ColorSource) -> Self {
        let source = match source {
            ColorSource::Palette(p) if p.is_empty() => ColorSource::Palette(CATEGORY10.to_vec()),
            other => other,
        };
        Self { source, assigned: RefCell::new(HashMap::new()) }
    }

    pub fn category10() -> Self { Self::new(ColorSource::Palette(CATEGORY10.to_vec())) }

    pub fn color(&self, name: &str) -> Color {
        let palette = match &self.source {
            ColorSource::Lookup(f) => return f(name),
            ColorSource::Palette(p) => p,
        };
        let mut assigned = self.assigned.borrow_mut();
        if let Some(c) = assigned.get(name) {
            return *c;
        }
        let c = palette[assigned.len() % palette.len()];
        assigned.insert(name.to_string(), c);
        c
    }
}

impl fmt::Debug for ColorScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorScale").field("source", &self.source).finish_non_exhaustive()
    }
}

// File: src/color_utils.rs
// Ordinal color assignment for chart series (feeds, categories, ...)
use crate::config::Config;
use log::debug;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// An opaque 8-bit RGB color. Serialized as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase `#RRGGBB`, the form the palette is written in.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels scaled to [0.0, 1.0].
    pub fn to_unit_f32(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }

    fn from_unit_f32(r: f32, g: f32, b: f32) -> Self {
        let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(to_u8(r), to_u8(g), to_u8(b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = String;

    /// Accepts `#RRGGBB`, `RRGGBB` and the short `#RGB` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return Err(format!("Invalid color '{}'", s));
        }

        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|e| format!("Invalid color '{}': {}", s, e))
        };

        match hex.len() {
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                // #ABC -> #AABBCC
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            _ => Err(format!("Invalid color '{}': expected #RRGGBB or #RGB", s)),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_hex()
    }
}

#[cfg(feature = "tui")]
impl From<Rgb> for ratatui::style::Color {
    fn from(c: Rgb) -> Self {
        ratatui::style::Color::Rgb(c.r, c.g, c.b)
    }
}

/// The ten series colors, in assignment order.
pub const PALETTE: [Rgb; 10] = [
    Rgb::new(0x1F, 0x83, 0xB4),
    Rgb::new(0x18, 0xA1, 0x88),
    Rgb::new(0x54, 0xA3, 0x38),
    Rgb::new(0xAD, 0xB8, 0x28),
    Rgb::new(0xFF, 0xBD, 0x4C),
    Rgb::new(0xFF, 0x9C, 0x0E),
    Rgb::new(0xE7, 0x57, 0x27),
    Rgb::new(0xC9, 0x4D, 0x8C),
    Rgb::new(0xB4, 0x46, 0xB3),
    Rgb::new(0x80, 0x61, 0xB4),
];

/// Neutral gray for keys that have no palette slot.
pub const UNKNOWN_COLOR: Rgb = Rgb::new(0xCD, 0xC9, 0xC9);

/// What a scale hands out once every palette entry is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Start again from the first palette entry.
    #[default]
    Wrap,
    /// Every overflow key gets the fallback color.
    Fallback,
    /// Every overflow key gets its own pastel color derived from its ordinal.
    Generated,
}

/// Index-based lookup used by the older chart code: palette entry for
/// 0..=9, neutral gray for anything else.
pub fn legacy_color(index: usize) -> Rgb {
    PALETTE.get(index).copied().unwrap_or(UNKNOWN_COLOR)
}

/// Maps keys to colors in first-seen order. One scale per chart; a key
/// keeps its color for the lifetime of the scale.
#[derive(Debug, Clone)]
pub struct ColorScale<K> {
    palette: Vec<Rgb>,
    policy: OverflowPolicy,
    fallback: Rgb,
    assigned: HashMap<K, Rgb>,
    order: Vec<K>,
}

impl<K: Eq + Hash + Clone> Default for ColorScale<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> ColorScale<K> {
    /// Builtin palette, wrapping around after the tenth key.
    pub fn new() -> Self {
        Self::with_policy(OverflowPolicy::Wrap)
    }

    pub fn with_policy(policy: OverflowPolicy) -> Self {
        Self::with_palette(PALETTE.to_vec(), policy, UNKNOWN_COLOR)
    }

    /// An empty `palette` makes every key fall back to `fallback`.
    pub fn with_palette(palette: Vec<Rgb>, policy: OverflowPolicy, fallback: Rgb) -> Self {
        Self {
            palette,
            policy,
            fallback,
            assigned: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_palette(config.palette.clone(), config.overflow, config.fallback_color)
    }

    /// Color for `key`, assigning the next one if the key is new.
    pub fn color(&mut self, key: K) -> Rgb {
        if let Some(c) = self.assigned.get(&key) {
            return *c;
        }

        let ordinal = self.order.len();
        let c = self.next_color(ordinal);
        self.assigned.insert(key.clone(), c);
        self.order.push(key);
        c
    }

    /// Color already assigned to `key`, without assigning one.
    pub fn peek<Q>(&self, key: &Q) -> Option<Rgb>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.assigned.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys in the order they were first seen.
    pub fn domain(&self) -> &[K] {
        &self.order
    }

    /// Forget all assignments. The palette and policy stay.
    pub fn clear(&mut self) {
        self.assigned.clear();
        self.order.clear();
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    fn next_color(&self, ordinal: usize) -> Rgb {
        if let Some(c) = self.palette.get(ordinal) {
            return *c;
        }
        if self.palette.is_empty() {
            return self.fallback;
        }

        debug!(
            "Color scale overflow at key #{} ({:?})",
            ordinal + 1,
            self.policy
        );
        match self.policy {
            OverflowPolicy::Wrap => self.palette[ordinal % self.palette.len()],
            OverflowPolicy::Fallback => self.fallback,
            OverflowPolicy::Generated => generated_color(ordinal as u64),
        }
    }
}

/// Deterministic pastel color for a seed (High Lightness, Medium+ Saturation)
/// so generated overflow colors stay distinct from each other.
pub fn generated_color(seed: u64) -> Rgb {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    seed.hash(&mut hasher);
    let hash = hasher.finish();

    // Hue: 0-360 degrees (Primary differentiator)
    let h = (hash % 360) as f32;

    // Use different bits of the hash for S and L to avoid correlation with Hue
    let hash_s = hash >> 16;
    let hash_l = hash >> 32;

    // Saturation: 40% - 90%
    let s = 0.40 + ((hash_s % 51) as f32 / 100.0);

    // Lightness: 65% - 90%
    let l = 0.65 + ((hash_l % 26) as f32 / 100.0);

    let (r, g, b) = hsl_to_rgb(h, s, l);
    Rgb::from_unit_f32(r, g, b)
}

/// Helper: HSL to RGB conversion
fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r + m, g + m, b + m)
}

/// Determines if label text drawn on top of this color should be white.
pub fn is_dark(color: Rgb) -> bool {
    let (r, g, b) = color.to_unit_f32();
    let brightness = 0.299 * r + 0.587 * g + 0.114 * b;
    brightness < 0.5
}

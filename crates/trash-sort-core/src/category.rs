//! Waste categories, the bins that accept them, and the cosmetic variants
//! each category is drawn as.

use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrashCategory {
    Organic,
    Plastic,
    Paper,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinCategory {
    Green,
    Yellow,
    Blue,
}

pub const ALL_TRASH_CATEGORIES: [TrashCategory; 3] = [
    TrashCategory::Organic,
    TrashCategory::Plastic,
    TrashCategory::Paper,
];

pub const ALL_BIN_CATEGORIES: [BinCategory; 3] =
    [BinCategory::Green, BinCategory::Yellow, BinCategory::Blue];

impl TrashCategory {
    /// The only bin this category may be sorted into.
    #[inline]
    pub fn correct_bin(self) -> BinCategory {
        match self {
            TrashCategory::Organic => BinCategory::Green,
            TrashCategory::Plastic => BinCategory::Yellow,
            TrashCategory::Paper => BinCategory::Blue,
        }
    }

    pub fn variants(self) -> &'static [TrashVariant] {
        match self {
            TrashCategory::Organic => ORGANIC_VARIANTS,
            TrashCategory::Plastic => PLASTIC_VARIANTS,
            TrashCategory::Paper => PAPER_VARIANTS,
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        ALL_TRASH_CATEGORIES[rng.gen_range(0..ALL_TRASH_CATEGORIES.len())]
    }

    pub fn random_variant(self, rng: &mut impl Rng) -> &'static TrashVariant {
        let variants = self.variants();
        &variants[rng.gen_range(0..variants.len())]
    }

    pub fn name(self) -> &'static str {
        match self {
            TrashCategory::Organic => "organic",
            TrashCategory::Plastic => "plastic",
            TrashCategory::Paper => "paper",
        }
    }
}

impl BinCategory {
    pub fn color_rgb(self) -> [f32; 3] {
        match self {
            BinCategory::Green => hex_rgb(0x22c55e),
            BinCategory::Yellow => hex_rgb(0xf59e0b),
            BinCategory::Blue => hex_rgb(0x3b82f6),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BinCategory::Green => "green",
            BinCategory::Yellow => "yellow",
            BinCategory::Blue => "blue",
        }
    }
}

/// A concrete thing a child sees (an apple, a newspaper). Purely cosmetic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrashVariant {
    pub name: &'static str,
    pub color: u32,
}

impl TrashVariant {
    #[inline]
    pub fn color_rgb(&self) -> [f32; 3] {
        hex_rgb(self.color)
    }
}

const ORGANIC_VARIANTS: &[TrashVariant] = &[
    TrashVariant { name: "apple", color: 0xff6b6b },
    TrashVariant { name: "banana", color: 0xffed4e },
    TrashVariant { name: "fish", color: 0xff9999 },
];

const PLASTIC_VARIANTS: &[TrashVariant] = &[
    TrashVariant { name: "bottle", color: 0x4ecdc4 },
    TrashVariant { name: "water-bottle", color: 0x89cff0 },
    TrashVariant { name: "bag", color: 0xf39c12 },
];

const PAPER_VARIANTS: &[TrashVariant] = &[
    TrashVariant { name: "document", color: 0xffe66d },
    TrashVariant { name: "newspaper", color: 0xe0e0e0 },
    TrashVariant { name: "cardboard", color: 0xd2691e },
];

#[inline]
pub fn hex_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

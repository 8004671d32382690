//! Gem treasure found in chamber caves.

use serde::{Deserialize, Serialize};

/// The kind of gem. Rarity determines the multiplier applied to the base
/// value of the gem's quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GemKind {
    Diamond,
    Ruby,
    Sapphire,
}

impl GemKind {
    /// Rarity multiplier on the quality's base value.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Diamond => 2.0,
            Self::Ruby => 1.5,
            Self::Sapphire => 1.0,
        }
    }
}

/// Quality tier of a gem. Higher tiers carry a larger base value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GemQuality {
    Poor,
    Average,
    High,
}

impl GemQuality {
    /// Base value contributed by this tier.
    #[must_use]
    pub const fn base_value(self) -> f64 {
        match self {
            Self::Poor => 50.0,
            Self::Average => 100.0,
            Self::High => 200.0,
        }
    }
}

/// A single gem. Its worth is derived from kind and quality rather than
/// stored, so equality over the two fields is equality over value too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Treasure {
    pub kind: GemKind,
    pub quality: GemQuality,
}

impl Treasure {
    /// Construct a gem of the given kind and quality.
    #[must_use]
    pub const fn new(kind: GemKind, quality: GemQuality) -> Self {
        Self { kind, quality }
    }

    /// Worth of the gem: the quality's base value scaled by the kind's
    /// rarity multiplier.
    #[must_use]
    pub fn value(self) -> f64 {
        self.quality.base_value() * self.kind.multiplier()
    }

    /// Every kind/quality combination, the pool the content distributor
    /// draws from.
    #[must_use]
    pub fn all_variants() -> [Self; 9] {
        const KINDS: [GemKind; 3] = [GemKind::Diamond, GemKind::Ruby, GemKind::Sapphire];
        const QUALITIES: [GemQuality; 3] = [GemQuality::Poor, GemQuality::Average, GemQuality::High];

        let mut variants = [Self::new(GemKind::Diamond, GemQuality::Poor); 9];
        let mut slot = 0;
        for quality in QUALITIES {
            for kind in KINDS {
                variants[slot] = Self::new(kind, quality);
                slot += 1;
            }
        }
        variants
    }
}

impl std::fmt::Display for Treasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} ({:?}), value {}", self.kind, self.quality, self.value())
    }
}

use serde::{Deserialize, Serialize};

use crate::core::Category;
use crate::render::Color;

/// Category → fill color mapping.
///
/// One field per category keeps the mapping total: adding a category variant
/// fails to compile until it has a color here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryPalette {
    pub herbivore: Color,
    pub omnivore: Color,
    pub carnivore: Color,
}

impl Default for CategoryPalette {
    fn default() -> Self {
        Self {
            herbivore: Color::rgb8(0x4c, 0xaf, 0x50),
            omnivore: Color::rgb8(0xff, 0x98, 0x00),
            carnivore: Color::rgb8(0xf4, 0x43, 0x36),
        }
    }
}

impl CategoryPalette {
    #[must_use]
    pub fn color(&self, category: Category) -> Color {
        match category {
            Category::Herbivore => self.herbivore,
            Category::Omnivore => self.omnivore,
            Category::Carnivore => self.carnivore,
        }
    }

    /// Palette entries in legend order.
    #[must_use]
    pub fn legend_entries(&self) -> [(Category, Color); 3] {
        Category::LEGEND_ORDER.map(|category| (category, self.color(category)))
    }
}

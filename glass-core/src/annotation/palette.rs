use crate::consts::{DUMMY_LABEL_PREFIX, PALETTE_SLOTS};
use crate::template::Template;

/// Preview colors for palette slots, mirroring the widget's palette.
///
/// Only used when this crate draws box previews itself; the widget owns
/// its real palette.
const SLOT_COLORS: [[u8; 3]; 13] = [
    [255, 0, 0],    // Red
    [0, 255, 0],    // Green
    [0, 0, 255],    // Blue
    [255, 255, 0],  // Yellow
    [255, 0, 255],  // Magenta
    [0, 255, 255],  // Cyan
    [128, 0, 128],  // Purple
    [255, 165, 0],  // Orange
    [128, 128, 128], // Gray
    [0, 128, 0],    // Dark Green
    [255, 20, 147], // Deep Pink
    [70, 130, 180], // Steel Blue
    [210, 105, 30], // Chocolate
];

/// The label vocabulary handed to the annotation widget.
///
/// The widget colors a box by its label's index into a small palette
/// where adjacent entries look alike. To keep neighboring columns
/// distinct, each column is assigned a spread-out slot from
/// [`PALETTE_SLOTS`], and unused dummy labels pad the vocabulary so the
/// higher slots exist. Purely a rendering concern: dummies are never
/// attached to a box and nothing here touches template data.
#[derive(Clone, Debug)]
pub struct LabelVocabulary {
    labels: Vec<String>,
    slots: Vec<usize>,
}

impl LabelVocabulary {
    pub fn for_template(template: &Template) -> Self {
        let mut labels: Vec<String> = template
            .columns
            .iter()
            .map(|column| column.name.clone())
            .collect();
        let slots: Vec<usize> = (0..template.columns.len())
            .map(|index| PALETTE_SLOTS[index % PALETTE_SLOTS.len()])
            .collect();

        // Pad until every assigned slot indexes into the vocabulary
        let needed = slots.iter().max().map_or(0, |max| max + 1);
        let mut dummy = 1;
        while labels.len() < needed {
            labels.push(format!("{DUMMY_LABEL_PREFIX}{dummy}"));
            dummy += 1;
        }

        Self { labels, slots }
    }

    /// Full vocabulary: column names followed by dummy padding.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Palette slot per column, in column order.
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    /// Preview color of the slot assigned to a column.
    pub fn column_color(&self, index: usize) -> [u8; 3] {
        SLOT_COLORS[self.slots[index % self.slots.len()] % SLOT_COLORS.len()]
    }
}

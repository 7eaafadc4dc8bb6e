pub mod annotation;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod overlay;
pub mod session;
pub mod template;

// Re-export commonly used types
pub use annotation::{
    Annotation, Band, Canvas, DisplayMode, annotations_from_template, boundaries_changed,
    palette::LabelVocabulary, template_from_annotations,
};
pub use error::GlassError;
pub use session::{EditOutcome, Session};
pub use template::{Column, Template};

use tracing::{debug, info};

use crate::annotation::{
    Annotation, Band, Canvas, DisplayMode, annotations_from_template, boundaries_changed,
    template_from_annotations,
};
use crate::error::GlassError;
use crate::template::Template;

/// Result of feeding an edited box set back into the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// Boundaries are where they were; no re-render needed.
    Unchanged,
    /// The template was replaced; the caller must re-render from it.
    Updated,
}

/// Per-session refinement state.
///
/// Owns the current template together with the canvas and band used to
/// lay boxes out. Single-user, single-threaded: one edit is folded in
/// completely, swapping the template wholesale, before the next render
/// reads it. There is no other holder of this state.
#[derive(Clone, Debug)]
pub struct Session {
    template: Template,
    canvas: Canvas,
    band: Band,
}

impl Session {
    /// Creates a session over a loaded template with the stock band.
    pub fn new(template: Template, canvas: Canvas) -> Self {
        Self {
            template,
            canvas,
            band: Band::default(),
        }
    }

    /// Creates a session with an explicit vertical band.
    pub fn with_band(template: Template, canvas: Canvas, band: Band) -> Self {
        Self {
            template,
            canvas,
            band,
        }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn band(&self) -> Band {
        self.band
    }

    /// The widget-facing box set for the current template.
    ///
    /// Always exact mode, so the edit result is invertible; recomputed
    /// from the template on every render and discarded afterwards.
    pub fn annotations(&self) -> Vec<Annotation> {
        annotations_from_template(&self.template, self.canvas, self.band, DisplayMode::Exact)
    }

    /// Display-only box set in the given mode, for preview rendering.
    ///
    /// Never feed these back through [`Session::apply_edit`]: inset
    /// boxes are narrower than the columns they stand for.
    pub fn display_annotations(&self, mode: DisplayMode) -> Vec<Annotation> {
        annotations_from_template(&self.template, self.canvas, self.band, mode)
    }

    /// Folds an edit result from the widget back into the session.
    ///
    /// An empty box set is a "no edit" signal, not a deletion: the
    /// template is kept as-is. Otherwise the inverse transform runs and
    /// the template is replaced only when some boundary actually moved.
    pub fn apply_edit(&mut self, edited: &[Annotation]) -> EditOutcome {
        if edited.is_empty() {
            debug!("empty edit result, keeping current template");
            return EditOutcome::Unchanged;
        }

        let updated = template_from_annotations(edited, self.canvas.width, &self.template);
        if !boundaries_changed(&self.template.columns, &updated.columns) {
            debug!("edit left all boundaries in place");
            return EditOutcome::Unchanged;
        }

        info!(
            "applied edit: {} columns -> {} columns",
            self.template.columns.len(),
            updated.columns.len()
        );
        self.template = updated;
        EditOutcome::Updated
    }

    /// Serializes the current template for download.
    pub fn export(&self) -> Result<String, GlassError> {
        self.template.to_json()
    }
}

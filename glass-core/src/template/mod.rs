use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use tracing::info;

use crate::error::*;

/// A named column with normalized horizontal bounds.
///
/// `x_start` and `x_end` are fractions of the full page width in [0,1]
/// with `x_start < x_end` for a valid column. `data_type` is opaque
/// passthrough metadata; the crate only carries it across edits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub x_start: f64,
    pub x_end: f64,
    pub data_type: String,
}

impl Column {
    /// Human-readable horizontal extent, e.g. `10% - 30%`.
    pub fn span_percent(&self) -> String {
        format!(
            "{:.0}% - {:.0}%",
            self.x_start * 100.0,
            self.x_end * 100.0
        )
    }
}

/// A column layout template for one document type.
///
/// Column order is not meaningful after an edit: the inverse transform
/// re-derives it by sorting on `x_start`. Overlap between columns is
/// neither required nor forbidden.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub document_type: String,
    pub columns: Vec<Column>,
}

impl Template {
    /// Loads and validates a template from a JSON file.
    ///
    /// A missing or malformed file is fatal at session start; the
    /// transforms never see an unvalidated template from this path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GlassError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).context(TemplateReadSnafu {
            path: path.to_string_lossy(),
        })?;
        let template: Template = serde_json::from_str(&raw).context(TemplateParseSnafu {
            path: path.to_string_lossy(),
        })?;
        template.validate()?;

        info!(
            "loaded template `{}` with {} columns from {}",
            template.document_type,
            template.columns.len(),
            path.display()
        );
        Ok(template)
    }

    /// Checks column bounds at the load boundary.
    ///
    /// The transforms themselves trust their input; only deserialized
    /// data gets this check. Overlap between columns is not validated.
    pub fn validate(&self) -> Result<(), GlassError> {
        for column in &self.columns {
            if !(0.0..=1.0).contains(&column.x_start) || !(0.0..=1.0).contains(&column.x_end) {
                return InvalidColumnSnafu {
                    name: column.name.clone(),
                    message: format!(
                        "bounds [{}, {}] outside [0, 1]",
                        column.x_start, column.x_end
                    ),
                }
                .fail();
            }
            if column.x_start >= column.x_end {
                return InvalidColumnSnafu {
                    name: column.name.clone(),
                    message: format!(
                        "x_start {} is not below x_end {}",
                        column.x_start, column.x_end
                    ),
                }
                .fail();
            }
        }
        Ok(())
    }

    /// Serializes the template to pretty-printed JSON.
    ///
    /// This is the downloadable artifact; formatting is not contractual
    /// beyond round-tripping to equivalent column data.
    pub fn to_json(&self) -> Result<String, GlassError> {
        serde_json::to_string_pretty(self).context(TemplateSerializeSnafu {})
    }

    /// Writes the template as pretty-printed JSON to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), GlassError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json).context(IoWriteSnafu {
            path: path.to_string_lossy(),
        })?;

        info!(
            "saved template `{}` with {} columns to {}",
            self.document_type,
            self.columns.len(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "document_type": "invoice",
            "columns": [
                { "name": "Item", "x_start": 0.05, "x_end": 0.4, "data_type": "text" },
                { "name": "Qty", "x_start": 0.4, "x_end": 0.55, "data_type": "number" },
                { "name": "Price", "x_start": 0.55, "x_end": 0.95, "data_type": "currency" }
            ]
        }"#
    }

    #[test]
    fn test_template_deserialize() {
        let template: Template = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(template.document_type, "invoice");
        assert_eq!(template.columns.len(), 3);
        assert_eq!(template.columns[1].name, "Qty");
        assert_eq!(template.columns[1].x_start, 0.4);
        assert_eq!(template.columns[1].data_type, "number");
        template.validate().unwrap();
    }

    #[test]
    fn test_template_json_round_trip() {
        let template: Template = serde_json::from_str(sample_json()).unwrap();
        let json = template.to_json().unwrap();
        let reloaded: Template = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, template);
    }

    #[test]
    fn test_validate_rejects_out_of_range_bounds() {
        let template = Template {
            document_type: "invoice".into(),
            columns: vec![Column {
                name: "Item".into(),
                x_start: -0.1,
                x_end: 0.4,
                data_type: "text".into(),
            }],
        };
        let err = template.validate().unwrap_err();
        assert!(matches!(err, GlassError::InvalidColumn { .. }));

        let template = Template {
            document_type: "invoice".into(),
            columns: vec![Column {
                name: "Item".into(),
                x_start: 0.4,
                x_end: 1.2,
                data_type: "text".into(),
            }],
        };
        assert!(template.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let template = Template {
            document_type: "invoice".into(),
            columns: vec![Column {
                name: "Item".into(),
                x_start: 0.6,
                x_end: 0.4,
                data_type: "text".into(),
            }],
        };
        let err = template.validate().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Item"));
    }

    #[test]
    fn test_validate_allows_overlapping_columns() {
        // Overlap is explicitly not enforced
        let template = Template {
            document_type: "invoice".into(),
            columns: vec![
                Column {
                    name: "A".into(),
                    x_start: 0.1,
                    x_end: 0.5,
                    data_type: "text".into(),
                },
                Column {
                    name: "B".into(),
                    x_start: 0.3,
                    x_end: 0.7,
                    data_type: "text".into(),
                },
            ],
        };
        template.validate().unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let err = Template::load("/nonexistent/template.json").unwrap_err();
        assert!(matches!(err, GlassError::TemplateRead { .. }));
    }

    #[test]
    fn test_save_and_reload() {
        let template: Template = serde_json::from_str(sample_json()).unwrap();
        let dir = std::env::temp_dir().join("glass-template-tests");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("roundtrip.json");

        template.save(&path).unwrap();
        let reloaded = Template::load(&path).unwrap();
        assert_eq!(reloaded, template);
    }

    #[test]
    fn test_span_percent() {
        let column = Column {
            name: "Item".into(),
            x_start: 0.1,
            x_end: 0.3,
            data_type: "text".into(),
        };
        assert_eq!(column.span_percent(), "10% - 30%");
    }
}

use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum GlassError {
    #[snafu(display("Read template `{}` error: {}", path, source))]
    TemplateRead {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Parse template `{}` error: {}", path, source))]
    TemplateParse {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Template column `{}` invalid: {}", name, message))]
    InvalidColumn { name: String, message: String },
    #[snafu(display("Serialize template error: {}", source))]
    TemplateSerialize { source: serde_json::Error },
    #[snafu(display("Write `{}` error: {}", path, source))]
    IoWrite {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Image open `{}` error: {}", path, source))]
    ImageOpen {
        source: image::ImageError,
        path: String,
    },
    #[snafu(display("Image write `{}` error: {}", path, source))]
    ImageWrite {
        source: image::ImageError,
        path: String,
    },
}

use std::error::Error;

use clap::Parser;
use tracing::info;

use glass_core::annotation::{Band, Canvas, DisplayMode, annotations_from_template};
use glass_core::overlay::{draw_annotation_boxes, draw_column_overlay, open_page_image, save_overlay};
use glass_core::{LabelVocabulary, Template};

#[derive(Parser)]
#[command(name = "overlay")]
#[command(about = "Render a column template over a page image")]
struct Args {
    #[arg(help = "Column template JSON file")]
    template: String,

    #[arg(help = "Page image file")]
    image: String,

    #[arg(short, long, default_value = "overlay.png", help = "Output image path")]
    output: String,

    #[arg(long, help = "Also draw the widget box preview")]
    boxes: bool,

    #[arg(long, help = "Preview boxes in inset mode")]
    inset: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    info!("loading template from {}", args.template);
    let template = Template::load(&args.template)?;

    info!("loading page image from {}", args.image);
    let image = open_page_image(&args.image)?;
    let canvas = Canvas::of_image(&image);
    info!("page image is {}x{}", canvas.width, canvas.height);

    let band = Band::default();
    let mut overlay = draw_column_overlay(&image, &template, band);

    if args.boxes {
        let mode = if args.inset {
            DisplayMode::inset()
        } else {
            DisplayMode::Exact
        };
        let annotations = annotations_from_template(&template, canvas, band, mode);
        let vocabulary = LabelVocabulary::for_template(&template);
        draw_annotation_boxes(&mut overlay, &annotations, &vocabulary);
    }

    save_overlay(&overlay, &args.output)?;

    println!("\n=== Column Overlay Summary ===");
    println!("Template: {}", args.template);
    println!("Document type: {}", template.document_type);
    println!("Page image: {} ({}x{})", args.image, canvas.width, canvas.height);
    println!("Output image: {}", args.output);
    println!("\nColumns:");
    for column in &template.columns {
        println!("  - {}: {}", column.name, column.span_percent());
    }

    info!("overlay rendering completed");
    Ok(())
}

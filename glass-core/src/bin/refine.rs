use std::error::Error;

use clap::Parser;
use tracing::info;

use glass_core::annotation::Canvas;
use glass_core::consts::DISPLAY_SCALE;
use glass_core::overlay::open_page_image;
use glass_core::{EditOutcome, LabelVocabulary, Session, Template};

#[derive(Parser)]
#[command(name = "refine")]
#[command(about = "Run one column refinement session without a widget")]
struct Args {
    #[arg(help = "Column template JSON file")]
    template: String,

    #[arg(help = "Page image file")]
    image: String,

    #[arg(short, long, help = "Export the template JSON to this path")]
    output: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let template = Template::load(&args.template)?;
    let image = open_page_image(&args.image)?;

    // The widget works on the scaled display canvas, not full resolution
    let full = Canvas::of_image(&image);
    let display_canvas = full.scaled(DISPLAY_SCALE);
    info!(
        "page {}x{} displayed at {}x{}",
        full.width, full.height, display_canvas.width, display_canvas.height
    );

    let mut session = Session::new(template, display_canvas);

    println!("=== Columns ===");
    for column in &session.template().columns {
        println!("  {}: {} [{}]", column.name, column.span_percent(), column.data_type);
    }

    let annotations = session.annotations();
    println!("\n=== Widget boxes ({}x{}) ===", display_canvas.width, display_canvas.height);
    for annotation in &annotations {
        println!(
            "  {}: left={} top={} width={} height={}",
            annotation.label, annotation.left, annotation.top, annotation.width, annotation.height
        );
    }

    let vocabulary = LabelVocabulary::for_template(session.template());
    println!("\n=== Label vocabulary ===");
    println!("  labels: {:?}", vocabulary.labels());
    println!("  palette slots: {:?}", vocabulary.slots());

    // An untouched box set must land back on the same template
    match session.apply_edit(&annotations) {
        EditOutcome::Unchanged => info!("round trip is stable, no boundary moved"),
        EditOutcome::Updated => info!("round trip moved boundaries, template replaced"),
    }

    let json = session.export()?;
    match &args.output {
        Some(path) => {
            session.template().save(path)?;
            println!("\nTemplate exported to {path}");
        }
        None => {
            println!("\n=== Template JSON ===");
            println!("{json}");
        }
    }

    Ok(())
}

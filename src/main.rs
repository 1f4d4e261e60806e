use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use treedoc::{FontFamily, JsonDefinitionRenderer, PipelineBuilder, PipelineError, template};

/// Compile a JSON element tree into a document definition.
#[derive(Parser)]
#[command(name = "treedoc")]
#[command(about = "Compile a JSON element tree into a pdfmake-style document definition")]
struct Args {
    /// Path to the JSON template
    template: PathBuf,

    /// Write the output here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fail on tags outside the known vocabulary
    #[arg(long)]
    strict: bool,

    /// Keep resolved zeros instead of dropping them as blank
    #[arg(long)]
    keep_zero: bool,

    /// Directory holding `<family>-Regular.ttf`, `<family>-Bold.ttf`, ...
    #[arg(long, requires = "font_family")]
    font_dir: Option<PathBuf>,

    /// Font family name, used as file stem and as the default font
    #[arg(long, requires = "font_dir")]
    font_family: Option<String>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), PipelineError> {
    env_logger::init();
    let args = Args::parse();

    let root = template::from_json_file(&args.template)?;

    let renderer = if args.pretty {
        JsonDefinitionRenderer::pretty()
    } else {
        JsonDefinitionRenderer::new()
    };
    let mut builder = PipelineBuilder::new()
        .with_strict_tags(args.strict)
        .with_drop_zero(!args.keep_zero)
        .with_renderer(renderer);
    if let (Some(dir), Some(family)) = (&args.font_dir, &args.font_family) {
        builder = builder
            .with_font_family(family.as_str(), FontFamily::from_dir(dir, family))
            .with_default_style(serde_json::json!({
                "font": family,
                "fontSize": treedoc::CompileOptions::DEFAULT_FONT_SIZE,
            }));
    }
    let pipeline = builder.build()?;

    match &args.output {
        Some(path) => {
            pipeline.render_to_file(&root, path)?;
            log::info!("Successfully generated {}", path.display());
        }
        None => {
            let mut stdout = pipeline.render(&root, io::stdout().lock())?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

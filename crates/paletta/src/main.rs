use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use color_theory::{random_harmonious, Scheme, SeedColor};
use paletta::pipeline::{self, PipelineArgs};
use paletta::swatch;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(about = "Paletta, a 12-step color scale generator", long_about = None)]
#[command(version)]
struct Args {
    /// Seed brand color (#RRGGBB, #RGB, or the literal 'random')
    seed: String,

    /// Color harmony scheme used to derive the base palette
    #[clap(long, default_value = "analogous")]
    scheme: Scheme,

    /// Directory the .css and .html outputs are written into
    #[clap(long, default_value = ".")]
    out: PathBuf,

    /// Skip the browser and synthesize the scales locally
    #[clap(long)]
    offline: bool,

    /// Run the browser headful and slowed down so the session can be
    /// watched. Affects timing only, never the generated colors.
    #[clap(long)]
    debug_browser: bool,

    #[clap(long, default_value = "auto")]
    color: Color,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lowercase")]
enum Color {
    Always,
    Auto,
    Never,
}

impl Color {
    fn init(self) {
        // Set a supports-color override based on the variable passed in.
        match self {
            Color::Always => owo_colors::set_override(true),
            Color::Auto => {}
            Color::Never => owo_colors::set_override(false),
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    args.color.init();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> paletta::Result<()> {
    let seed: SeedColor = if args.seed.eq_ignore_ascii_case("random") {
        let seed = random_harmonious();
        println!("Random seed: {}", seed);
        seed
    } else {
        args.seed.parse()?
    };

    let palette = pipeline::generate(&PipelineArgs {
        seed,
        scheme: args.scheme,
        offline: args.offline,
        debug_browser: args.debug_browser,
    })
    .await?;

    let mut stdout = std::io::stdout();
    swatch::print_palette(&mut stdout, &palette)?;

    let (css_path, html_path) = pipeline::write_outputs(&palette, &args.out)?;
    println!("\nCSS written to {}", css_path.display());
    println!("Preview written to {}", html_path.display());

    Ok(())
}

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use cubeblend::{ColorSpec, NamedColors, Recipe, Selection};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cubeblend", version)]
struct Cli {
    /// Log debug events to stderr (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite cube slices into a PNG.
    Render(RenderArgs),
    /// Print the shape and value range of a cube.
    Info(InfoArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input cube (.fits or .json).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Recipe JSON; command-line flags override its fields.
    #[arg(long)]
    recipe: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Slices to blend, bottom first: "all", "3" or "5,0,8".
    #[arg(long)]
    slices: Option<Selection>,

    /// One color per slice, comma separated (e.g. "r,g,b" or "#ff0000,navy").
    #[arg(long, value_delimiter = ',')]
    colors: Vec<String>,

    /// One alpha per slice, comma separated. Defaults to the equal-share schedule.
    #[arg(long, value_delimiter = ',')]
    alphas: Vec<f64>,

    /// Background color.
    #[arg(long)]
    background: Option<String>,

    /// Skip normalizing the cube to its global peak.
    #[arg(long)]
    no_normalize_cube: bool,

    /// Skip normalizing each slice to its own peak.
    #[arg(long)]
    no_normalize_slices: bool,

    /// Mirror a half-size cube to full size.
    #[arg(long)]
    fullsize: bool,

    /// Flip rows (FITS images count rows bottom-up).
    #[arg(long)]
    flip_y: bool,

    /// Worker threads for layer construction.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Input cube (.fits or .json).
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Info(args) => cmd_info(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "cubeblend=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_recipe(args: &RenderArgs) -> anyhow::Result<Recipe> {
    let mut recipe = match &args.recipe {
        Some(path) => Recipe::load(path)?,
        None => Recipe::default(),
    };

    if let Some(slices) = &args.slices {
        recipe.slices = slices.clone();
    }
    if !args.colors.is_empty() {
        recipe.colors = args.colors.iter().map(|c| ColorSpec::name(c.trim())).collect();
    }
    if !args.alphas.is_empty() {
        recipe.options.alphas = Some(args.alphas.clone());
    }
    if let Some(bg) = &args.background {
        recipe.options.background = ColorSpec::name(bg.trim());
    }
    if args.no_normalize_cube {
        recipe.options.normalize_cube = false;
    }
    if args.no_normalize_slices {
        recipe.options.normalize_slices = false;
    }
    if args.threads.is_some() {
        recipe.options.threads = args.threads;
    }
    recipe.fullsize |= args.fullsize;
    recipe.flip_y |= args.flip_y;

    recipe.validate()?;
    Ok(recipe)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let recipe = build_recipe(&args)?;
    let cube = cubeblend::load_cube(&args.in_path)?;
    let composite = recipe.apply(&cube, &NamedColors)?;

    let dims = composite.image.dims();
    let width = u32::try_from(dims.width).context("image width exceeds u32")?;
    let height = u32::try_from(dims.height).context("image height exceeds u32")?;

    ensure_parent_dir(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &composite.image.to_rgba8(),
        width,
        height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let cube = cubeblend::load_cube(&args.in_path)?;
    let (slices, height, width) = cube.shape();
    println!("slices: {slices}");
    println!("height: {height}");
    println!("width:  {width}");
    for (idx, plane) in cube.iter_slices().enumerate() {
        let (min, max) = plane
            .iter()
            .filter(|v| !v.is_nan())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        println!("slice {idx}: min {min} max {max}");
    }
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "mipfill", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill the holes of an image and write the result as PNG.
    Fill(FillArgs),
    /// Print pyramid level sizes and hole counts before and after synthesis.
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Input image (any format `image` decodes); alpha 0 marks holes unless overridden.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Optional mask image; bright opaque pixels become holes.
    #[arg(long)]
    mask: Option<PathBuf>,

    /// Options JSON file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of pyramid levels including full resolution.
    #[arg(long)]
    levels: Option<usize>,

    /// Alpha value that marks a hole.
    #[arg(long)]
    mask_alpha: Option<u8>,

    /// Handling of 2x2 taps past the edge of odd-sized levels.
    #[arg(long, value_enum)]
    edge: Option<EdgeChoice>,
}

#[derive(Parser, Debug)]
struct FillArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Enable row-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    #[command(flatten)]
    input: InputArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EdgeChoice {
    Skip,
    Clamp,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Fill(args) => cmd_fill(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve_opts(input: &InputArgs) -> anyhow::Result<mipfill::InpaintOpts> {
    let mut opts = match &input.config {
        Some(path) => mipfill::InpaintOpts::from_path(path)?,
        None => mipfill::InpaintOpts::default(),
    };
    if let Some(levels) = input.levels {
        opts.levels = levels;
    }
    if let Some(a) = input.mask_alpha {
        opts.mask_alpha = a;
    }
    if let Some(edge) = input.edge {
        opts.edge_policy = match edge {
            EdgeChoice::Skip => mipfill::EdgePolicy::Skip,
            EdgeChoice::Clamp => mipfill::EdgePolicy::Clamp,
        };
    }
    opts.validate()?;
    Ok(opts)
}

fn load_input(input: &InputArgs, mask_alpha: u8) -> anyhow::Result<mipfill::PixelBuffer> {
    let mut buf = mipfill::load_image(&input.in_path)
        .with_context(|| format!("load input '{}'", input.in_path.display()))?;
    if let Some(mask_path) = &input.mask {
        let mask = mipfill::load_image(mask_path)
            .with_context(|| format!("load mask '{}'", mask_path.display()))?;
        let marked = mipfill::apply_mask(&mut buf, &mask, mask_alpha)?;
        tracing::info!(marked, mask = %mask_path.display(), "mask applied");
    }
    Ok(buf)
}

fn cmd_fill(args: FillArgs) -> anyhow::Result<()> {
    let mut opts = resolve_opts(&args.input)?;
    if args.parallel {
        opts.threading.parallel = true;
    }
    if args.threads.is_some() {
        opts.threading.threads = args.threads;
    }

    let input = load_input(&args.input, opts.mask_alpha)?;
    let (out, stats) = mipfill::inpaint_with_stats(&input, &opts)?;
    mipfill::save_png(&args.out, &out)?;

    eprintln!(
        "filled {}/{} holes ({} unfilled) using {} levels",
        stats.filled, stats.holes_in, stats.unfilled, stats.levels
    );
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let opts = resolve_opts(&args.input)?;
    let input = load_input(&args.input, opts.mask_alpha)?;

    let mut pyramid = mipfill::Pyramid::allocate(&input, opts.levels)?;
    pyramid.analyze(&opts)?;
    let after_analysis = pyramid.level_holes(opts.mask_alpha);
    let tally = pyramid.synthesize(&opts)?;
    let after_synthesis = pyramid.level_holes(opts.mask_alpha);

    println!("level  width  height  holes_analyzed  holes_synthesized");
    for (i, level) in pyramid.levels().iter().enumerate() {
        println!(
            "{i:>5}  {:>5}  {:>6}  {:>14}  {:>17}",
            level.width(),
            level.height(),
            after_analysis[i],
            after_synthesis[i]
        );
    }
    println!(
        "filled {} holes across all levels, {} unfilled",
        tally.filled, tally.unfilled
    );
    Ok(())
}

use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, ValueEnum};

use circle_render::{
    BenchOpts, CircleRenderer, EngineSummary, ExportFormat, FrameDumpReport, PairedReport,
    ParallelOpts, RendererKind, RendererOpts, SceneName,
};

#[derive(Parser, Debug)]
#[command(
    name = "circle-render",
    version,
    about = "Render translucent circle scenes and benchmark the reference and parallel renderers",
    after_help = "Valid scene names are: rgb, rgby, rand10k, rand100k, pattern"
)]
struct Cli {
    /// Scene to render.
    scene: String,

    /// Benchmark mode: render this many frames, dumping each one to disk.
    #[arg(short = 'b', long = "bench", value_name = "NUM_OF_FRAMES")]
    bench: Option<u32>,

    /// Run 10 frames on both renderers, compare the outputs and report the speedup.
    #[arg(short = 'c', long = "check")]
    check: bool,

    /// Output file name prefix.
    #[arg(short = 'f', long = "file", value_name = "FILENAME", default_value = "image")]
    file: String,

    /// Renderer used outside of check mode.
    #[arg(short = 'r', long = "renderer", value_enum, default_value_t = RendererChoice::Ref)]
    renderer: RendererChoice,

    /// Output image width and height in pixels.
    #[arg(long, default_value_t = 1024)]
    size: u32,

    /// Worker threads for the parallel renderer (default: rayon's choice).
    #[arg(long)]
    threads: Option<usize>,

    /// Image rows per parallel work item.
    #[arg(long, default_value_t = 16)]
    tile_rows: usize,

    /// Frame file format.
    #[arg(long, value_enum, default_value_t = FormatChoice::Ppm)]
    format: FormatChoice,

    /// Directory frames are written into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Write the loaded circles (count, then `x y z radius` per line) to this file.
    #[arg(long, value_name = "PATH")]
    dump_particles: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RendererChoice {
    /// Sequential reference renderer.
    Ref,
    /// Tile-parallel renderer.
    #[value(alias = "parallel")]
    Par,
}

impl From<RendererChoice> for RendererKind {
    fn from(c: RendererChoice) -> Self {
        match c {
            RendererChoice::Ref => RendererKind::Reference,
            RendererChoice::Par => RendererKind::Parallel,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Ppm,
    Png,
}

impl From<FormatChoice> for ExportFormat {
    fn from(c: FormatChoice) -> Self {
        match c {
            FormatChoice::Ppm => ExportFormat::Ppm,
            FormatChoice::Png => ExportFormat::Png,
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    init_tracing(cli.verbose);

    if let Err(err) = try_main(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn try_main(cli: Cli) -> anyhow::Result<()> {
    let scene_name: SceneName = cli.scene.parse()?;
    if cli.size == 0 {
        anyhow::bail!("--size must be > 0");
    }

    let renderer_opts = RendererOpts::default();
    let parallel_opts = ParallelOpts {
        threads: cli.threads,
        tile_rows: cli.tile_rows,
    };
    let bench_opts = BenchOpts {
        out_dir: cli.out_dir.clone(),
        prefix: cli.file.clone(),
        format: cli.format.into(),
    };
    circle_render::ensure_out_dir(&bench_opts.out_dir)?;

    if !cli.json {
        println!("Rendering to {0}x{0} image", cli.size);
    }
    let scene = circle_render::load_scene(scene_name);

    if let Some(path) = &cli.dump_particles {
        dump_particles(&scene, path)?;
    }

    let make = |kind: RendererKind| -> anyhow::Result<Box<dyn CircleRenderer>> {
        let mut r = circle_render::create_renderer(kind, &renderer_opts, &parallel_opts)
            .with_context(|| format!("create {} renderer", kind.tag()))?;
        r.alloc_output_image(cli.size, cli.size)?;
        r.set_scene(scene.clone());
        Ok(r)
    };

    if cli.check {
        let mut reference = make(RendererKind::Reference)?;
        let mut accelerated = make(RendererKind::Parallel)?;
        if !cli.json {
            println!(
                "\nRunning benchmark with {} frames, the result is an average of the results",
                circle_render::PAIRED_FRAMES
            );
            println!(
                "Dumping frames to {} and {}",
                bench_opts.single_path(reference.tag()).display(),
                bench_opts.single_path(accelerated.tag()).display()
            );
        }
        let report =
            circle_render::run_paired(reference.as_mut(), accelerated.as_mut(), &bench_opts)?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_paired(&report);
        }
        return Ok(());
    }

    let kind = RendererKind::from(cli.renderer);
    let mut renderer = make(kind)?;

    match cli.bench {
        Some(frames) => {
            if !cli.json {
                println!("\nRunning benchmark, {frames} frames...");
                println!(
                    "Dumping frames to {}",
                    bench_opts.frame_path(0, kind.tag()).display()
                );
            }
            let report = circle_render::run_frame_dump(renderer.as_mut(), frames, &bench_opts)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_frame_dump(&report);
            }
        }
        None => {
            renderer.clear_image()?;
            renderer.render()?;
            let path = bench_opts.single_path(kind.tag());
            let image = renderer
                .image()
                .context("renderer has no output image after render")?;
            circle_render::save_image(image, &path, bench_opts.format)?;
            if cli.json {
                println!("{}", serde_json::json!({ "file": path }));
            } else {
                println!("wrote {}", path.display());
            }
        }
    }

    Ok(())
}

fn dump_particles(scene: &circle_render::Scene, path: &Path) -> anyhow::Result<()> {
    let f = File::create(path)
        .with_context(|| format!("create particle dump '{}'", path.display()))?;
    scene
        .write_particles(BufWriter::new(f))
        .with_context(|| format!("write particle dump '{}'", path.display()))?;
    tracing::info!(path = %path.display(), circles = scene.len(), "dumped particles");
    Ok(())
}

fn ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

fn print_frame_dump(report: &FrameDumpReport) {
    for t in &report.frames {
        println!("Clear:    {:.4} ms", ms(t.clear));
        println!("Render:   {:.4} ms", ms(t.render));
        println!("Total:    {:.4} ms", ms(t.compute()));
        println!("File IO:  {:.4} ms", ms(t.save));
        println!();
    }
    println!();
    println!(
        "Overall:  {:.4} sec (note units are seconds)",
        report.wall.as_secs_f64()
    );
}

fn print_engine(title: &str, s: &EngineSummary) {
    println!("{title} time:");
    println!("Clear:    {:.4} ms", ms(s.mean_clear));
    println!("Render:   {:.4} ms", ms(s.mean_render));
    println!("Total:    {:.4} ms", ms(s.mean_compute()));
    println!("File IO:  {:.4} ms", ms(s.first_save));
}

fn print_paired(report: &PairedReport) {
    println!("Found {} errors", report.check.mismatches);
    println!("***************** Correctness check passed **************************\n");

    print_engine("Reference", &report.reference);
    println!("\n*********************************************************************\n");
    print_engine("Parallel", &report.accelerated);

    println!();
    println!(
        "Overall:  {:.4} sec (note units are seconds)",
        report.accelerated.wall.as_secs_f64()
    );
    match report.speedup {
        Some(s) => println!("Speedup: {s:.2}x"),
        None => println!("Speedup: undefined (parallel mean render time is zero)"),
    }
}

use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tagbloom::{ColorBand, IconSize, SiteConfig, Viewport};

#[derive(Parser, Debug)]
#[command(name = "tagbloom", version)]
struct Cli {
    /// Site configuration JSON.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured site root.
    #[arg(long, global = true)]
    site_root: Option<PathBuf>,

    /// Override the configured color band.
    #[arg(long, global = true, value_enum)]
    band: Option<Band>,

    /// More log output on stderr (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Band {
    LightCard,
    DarkBadge,
}

impl From<Band> for ColorBand {
    fn from(b: Band) -> Self {
        match b {
            Band::LightCard => ColorBand::LIGHT_CARD,
            Band::DarkBadge => ColorBand::DARK_BADGE,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the hex color of each tag.
    Color(ColorArgs),
    /// Render a petal icon as SVG or PNG.
    Icon(IconArgs),
    /// Render the dataset list as HTML cards.
    Cards(CardsArgs),
    /// Render background tiles covering a viewport.
    Tiles(TilesArgs),
    /// Print tag statistics for the dataset list as JSON.
    Stats,
}

#[derive(Parser, Debug)]
struct ColorArgs {
    /// Tags to color.
    #[arg(required = true)]
    tags: Vec<String>,
}

#[derive(Parser, Debug)]
struct IconArgs {
    /// Comma-separated tags, one petal each.
    #[arg(long, value_delimiter = ',')]
    tags: Vec<String>,

    /// Icon edge length in pixels.
    #[arg(long)]
    size: Option<u32>,

    /// Output path; `.png` rasterizes, anything else writes SVG. Stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CardsArgs {
    /// Output HTML path. Stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Show tag chips.
    #[arg(long, default_value_t = false)]
    show_tags: bool,

    /// Link titles to the dataset page.
    #[arg(long, default_value_t = false)]
    show_link: bool,
}

#[derive(Parser, Debug)]
struct TilesArgs {
    /// Viewport width in pixels.
    #[arg(long)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long)]
    height: u32,

    /// Output HTML path. Stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let cfg = load_config(&cli)?;
    match cli.cmd {
        Command::Color(args) => cmd_color(&cfg, args),
        Command::Icon(args) => cmd_icon(&cfg, args),
        Command::Cards(args) => cmd_cards(cfg, args),
        Command::Tiles(args) => cmd_tiles(&cfg, args),
        Command::Stats => cmd_stats(&cfg),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<SiteConfig> {
    let mut cfg = match &cli.config {
        Some(path) => SiteConfig::from_path(path)?,
        None => SiteConfig::default(),
    };
    if let Some(root) = &cli.site_root {
        cfg.site_root = root.clone();
    }
    if let Some(band) = cli.band {
        cfg.color_band = band.into();
    }
    Ok(cfg)
}

fn cmd_color(cfg: &SiteConfig, args: ColorArgs) -> anyhow::Result<()> {
    let assigner = cfg.assigner();
    let mut out = std::io::stdout().lock();
    for (tag, color) in assigner.colors_for(args.tags.iter().map(String::as_str)) {
        writeln!(out, "{tag}\t{color}")?;
    }
    Ok(())
}

fn cmd_icon(cfg: &SiteConfig, args: IconArgs) -> anyhow::Result<()> {
    let size = match args.size {
        Some(px) => IconSize::new(px)?,
        None => cfg.card.icon_size,
    };
    let svg = cfg.icon_renderer().render(&args.tags, size);

    let Some(out) = args.out else {
        println!("{svg}");
        return Ok(());
    };
    create_parent(&out)?;
    let is_png = out
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("png"));
    if is_png {
        let img = tagbloom::rasterize_svg(&svg, size)?;
        img.save_with_format(&out, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", out.display()))?;
    } else {
        std::fs::write(&out, svg).with_context(|| format!("write svg '{}'", out.display()))?;
    }
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_cards(mut cfg: SiteConfig, args: CardsArgs) -> anyhow::Result<()> {
    cfg.card.show_tags |= args.show_tags;
    cfg.card.show_link |= args.show_link;
    let datasets = cfg.dataset_cache()?.load()?;
    let html = cfg.card_renderer().render_all(&datasets);
    emit(args.out.as_deref(), &html)
}

fn cmd_tiles(cfg: &SiteConfig, args: TilesArgs) -> anyhow::Result<()> {
    let datasets = cfg.dataset_cache()?.load()?;
    let html = cfg
        .tile_grid()?
        .render(Viewport::new(args.width, args.height), &datasets);
    emit(args.out.as_deref(), &html)
}

fn cmd_stats(cfg: &SiteConfig) -> anyhow::Result<()> {
    let stats = cfg.dataset_cache()?.statistics()?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

fn emit(out: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            create_parent(path)?;
            std::fs::write(path, text)
                .with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn create_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

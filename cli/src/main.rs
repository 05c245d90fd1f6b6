use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wafer_color::{ColorMapper, ColorRange, Gradient, GradientColors};
use wafer_common::db::core::{WaferMap, WaferSpec};
use wafer_common::geom::point::Point;
use wafer_common::geom::viewport::Viewport;
use wafer_common::util::config::{Config, WaferConfig};
use wafer_common::util::profiler::ScopedTimer;
use wafer_common::util::visualization::{Scene, SceneDie};
use wafer_common::util::{check, generator, logger, visualization};
use wafer_layout::gridlines::GRIDLINE_REACH;
use wafer_outline::{OutlineGeometry, flat_length_for_diameter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    config: PathBuf,

    /// Ignore the [wafer] section and draw random wafer parameters.
    #[arg(long, value_name = "SEED")]
    random: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the demo wafer to a PNG.
    Render {
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the status line for a world point (mm).
    Probe {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Log the outline primitives of the configured wafer.
    Outline,
}

fn main() -> anyhow::Result<()> {
    logger::init();
    let args = Args::parse();

    let mut config = if args.config.exists() {
        log::info!("Loading configuration from {:?}", args.config);
        let config_str = std::fs::read_to_string(&args.config)
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;
        toml::from_str(&config_str)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?
    } else {
        log::warn!(
            "Configuration file {:?} not found. Using internal defaults.",
            args.config
        );
        Config::default()
    };

    if let Some(seed) = args.random {
        config.wafer = WaferConfig {
            data_type: config.wafer.data_type,
            labels: std::mem::take(&mut config.wafer.labels),
            ..generator::random_wafer_config(seed)
        };
    }

    match args.command.unwrap_or(Commands::Render { output: None }) {
        Commands::Render { output } => {
            let output = output.unwrap_or_else(|| config.render.output.clone());
            prepare_output_dir(&output)?;
            render(&config, &output)?;
        }
        Commands::Probe { x, y } => {
            let map = build_map(&config.wafer)?;
            let grid = wafer_layout::layout(&map.dies, map.info.die_size, map.info.grid_center);
            println!("{}", grid.probe(Point::new(x, y)));
        }
        Commands::Outline => {
            let w = &config.wafer;
            let spec = WaferSpec::new(w.diameter, w.edge_exclusion, w.flat_exclusion)
                .map_err(|e| anyhow::anyhow!("Invalid wafer parameters: {}", e))?;
            let geometry = OutlineGeometry::from_spec(&spec, config.render.crosshair_style);
            log::info!("Orientation: {:?}", geometry.orientation);
            for p in geometry.outline().chain(geometry.crosshairs.iter()) {
                log::info!("{:?}", p);
            }
        }
    }

    Ok(())
}

fn prepare_output_dir(path_str: &str) -> anyhow::Result<()> {
    if let Some(parent) = Path::new(path_str).parent() {
        if !parent.exists() && !parent.as_os_str().is_empty() {
            log::info!("Creating output directory: {:?}", parent);
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn build_map(cfg: &WaferConfig) -> anyhow::Result<WaferMap> {
    let _t = ScopedTimer::new("Generate wafer");
    let map = generator::generate_fake_data(cfg, flat_length_for_diameter(cfg.diameter))
        .map_err(|e| anyhow::anyhow!("Invalid wafer parameters: {}", e))?;
    check::run(&map).map_err(|e| anyhow::anyhow!("Wafer check failed: {}", e))?;
    log::info!("\n{}", map.info);
    Ok(map)
}

fn color_mapper(config: &Config, map: &WaferMap) -> anyhow::Result<ColorMapper> {
    let colors = GradientColors::from(&config.colors);
    let range = config.render.plot_range.map(ColorRange::from);
    let labels = Some(config.wafer.labels.as_slice());
    let mapper = ColorMapper::for_map(map, colors, range, labels);

    let stops = &config.colors.gradient_stops;
    match mapper {
        ColorMapper::Continuous(m) if !stops.is_empty() => {
            let mut all = vec![colors.low];
            all.extend(stops.iter().copied());
            all.push(colors.high);
            let gradient = Gradient::new(all).map_err(|e| anyhow::anyhow!(e))?;
            Ok(ColorMapper::Continuous(m.with_gradient(gradient)))
        }
        other => Ok(other),
    }
}

fn log_legend(mapper: &ColorMapper, tick_count: usize) {
    match mapper {
        ColorMapper::Continuous(m) => {
            for tick in m.ticks(tick_count).iter().rev() {
                log::info!("  {:>10}  {}", tick.label, m.color_of(tick.value));
            }
        }
        ColorMapper::Discrete(m) => {
            for (label, color) in m.legend() {
                log::info!("  {:>10}  {}", label, color);
            }
        }
    }
}

fn render(config: &Config, output: &str) -> anyhow::Result<()> {
    let _t = ScopedTimer::new("Render");
    let map = build_map(&config.wafer)?;
    let info = &map.info;
    let grid = wafer_layout::layout(&map.dies, info.die_size, info.grid_center);

    let mapper = color_mapper(config, &map)?;
    let die_colors = {
        let _t = ScopedTimer::debug("Color die");
        mapper.color_all(&map.dies)
    };
    log::info!("Legend:");
    log_legend(&mapper, config.render.tick_count);

    let palette = &config.colors;
    let mut scene = Scene::new(palette.background);
    scene.dies = grid
        .rects()
        .zip(die_colors)
        .map(|((_, rect), color)| SceneDie { rect, color })
        .collect();

    let opts = &config.render;
    if opts.show_gridlines {
        let lines = wafer_layout::gridlines(info.die_size, info.grid_center, info.spec.diameter);
        scene.stroke_all(&lines.primitives(), palette.gridline);
    }
    if opts.show_die_centers {
        scene.stroke_all(&grid.die_centers(), palette.die_center);
    }
    let geometry = OutlineGeometry::from_spec(&info.spec, opts.crosshair_style);
    if opts.show_outline {
        scene.stroke_all([&geometry.edge], palette.outline);
        scene.stroke_all(
            geometry.orientation_mark.iter().chain(geometry.exclusion.iter()),
            palette.wafer_edge,
        );
    }
    if opts.show_crosshairs {
        scene.stroke_all(&geometry.crosshairs, palette.crosshair);
    }

    let view = Viewport::fit(info.spec.radius() * GRIDLINE_REACH, opts.width, opts.height);
    visualization::draw_scene(&scene, &view, output)
        .map_err(|e| anyhow::anyhow!("Failed to write '{}': {}", output, e))?;
    log::info!("Wrote {}", output);
    Ok(())
}

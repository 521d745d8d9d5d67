use ecg_plot::api::{EcgPlot, EcgPlotSettings};
use ecg_plot::core::Viewport;
use ecg_plot::render::NullRenderer;
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: ecg_plot_tool <grid|options|render> --input <settings.json> --output <path> [--width <px>] [--height <px>]";
const DEFAULT_WIDTH: u32 = 900;
const DEFAULT_HEIGHT: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Grid,
    Options,
    Render,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    input: PathBuf,
    output: PathBuf,
    viewport: Viewport,
}

fn main() {
    let _ = ecg_plot::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let settings = EcgPlotSettings::from_json_str(&raw).map_err(|err| err.to_string())?;

    match args.command {
        CommandKind::Grid => {
            let plot = EcgPlot::new(NullRenderer::default(), args.viewport, settings)
                .map_err(|err| err.to_string())?;
            let json = serde_json::to_string_pretty(plot.grid_spec())
                .map_err(|err| format!("failed to serialize grid: {err}"))?;
            write_output(&args.output, &json)
        }
        CommandKind::Options => {
            let plot = EcgPlot::new(NullRenderer::default(), args.viewport, settings)
                .map_err(|err| err.to_string())?;
            let json = plot.options().to_json_pretty().map_err(|err| err.to_string())?;
            write_output(&args.output, &json)
        }
        CommandKind::Render => render_png(args.viewport, settings, &args.output),
    }
}

#[cfg(feature = "cairo-backend")]
fn render_png(viewport: Viewport, settings: EcgPlotSettings, output: &Path) -> Result<(), String> {
    use ecg_plot::render::CairoRenderer;

    let width = i32::try_from(viewport.width).map_err(|_| "--width is too large".to_owned())?;
    let height = i32::try_from(viewport.height).map_err(|_| "--height is too large".to_owned())?;
    let renderer = CairoRenderer::new(width, height).map_err(|err| err.to_string())?;
    let mut plot = EcgPlot::new(renderer, viewport, settings).map_err(|err| err.to_string())?;
    plot.render().map_err(|err| err.to_string())?;
    plot.into_renderer()
        .write_png(output)
        .map_err(|err| err.to_string())?;
    println!("wrote {}", output.display());
    Ok(())
}

#[cfg(not(feature = "cairo-backend"))]
fn render_png(
    _viewport: Viewport,
    _settings: EcgPlotSettings,
    _output: &Path,
) -> Result<(), String> {
    Err("`render` requires feature `cairo-backend`".to_owned())
}

fn write_output(path: &Path, content: &str) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|err| format!("failed to create `{}`: {err}", parent.display()))?;
    }
    fs::write(path, content).map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("grid") => CommandKind::Grid,
        Some("options") => CommandKind::Options,
        Some("render") => CommandKind::Render,
        _ => return Err(USAGE.to_owned()),
    };

    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--width" => width = parse_dimension("--width", args.next())?,
            "--height" => height = parse_dimension("--height", args.next())?,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let input = input.ok_or_else(|| "missing --input".to_owned())?;
    let output = output.ok_or_else(|| "missing --output".to_owned())?;
    Ok(CliArgs {
        command,
        input,
        output,
        viewport: Viewport::new(width, height),
    })
}

fn parse_dimension(flag: &str, value: Option<String>) -> Result<u32, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    value
        .parse::<u32>()
        .map_err(|err| format!("invalid value `{value}` for {flag}: {err}"))
}

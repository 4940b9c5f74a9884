use species_chart::api::{ChartEngine, ChartEngineConfig};
use species_chart::loader::{ColumnMapping, CsvFileSource};
use species_chart::render::SvgRenderer;
use species_chart::telemetry;
use std::fs;
use std::path::PathBuf;

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: PathBuf,
    width: Option<u32>,
    height: Option<u32>,
    config: Option<PathBuf>,
    snapshot: Option<PathBuf>,
}

fn main() {
    let _ = telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            ChartEngineConfig::from_json_str(&raw)
                .map_err(|err| format!("invalid config `{}`: {err}", path.display()))?
        }
        None => ChartEngineConfig::default(),
    };
    if let Some(width) = args.width {
        config.viewport.width = width;
    }
    if let Some(height) = args.height {
        config.viewport.height = height;
    }

    let mut engine = ChartEngine::new(SvgRenderer::new(), config)
        .map_err(|err| format!("failed to initialize engine: {err}"))?;
    let summary = engine
        .load_from(&CsvFileSource::new(&args.input), &ColumnMapping::default())
        .map_err(|err| format!("failed to apply dataset: {err}"))?;
    if summary.source_failed {
        eprintln!(
            "warning: could not read `{}`, rendering an empty chart",
            args.input.display()
        );
    }

    engine
        .render()
        .map_err(|err| format!("failed to render chart: {err}"))?;
    if let Some(path) = &args.snapshot {
        let json = engine
            .snapshot_json_contract_v1_pretty()
            .map_err(|err| format!("failed to build snapshot: {err}"))?;
        fs::write(path, json)
            .map_err(|err| format!("failed to write snapshot `{}`: {err}", path.display()))?;
    }
    engine
        .renderer()
        .write_to(&args.output)
        .map_err(|err| format!("failed to write `{}`: {err}", args.output.display()))?;

    println!(
        "rendered {} bars ({} rows rejected) into {}",
        summary.accepted,
        summary.rejected,
        args.output.display()
    );
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut width: Option<u32> = None;
    let mut height: Option<u32> = None;
    let mut config: Option<PathBuf> = None;
    let mut snapshot: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
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
            "--width" => width = Some(parse_dimension("--width", args.next())?),
            "--height" => height = Some(parse_dimension("--height", args.next())?),
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--snapshot" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --snapshot".to_owned())?;
                snapshot = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => {
                return Err(format!(
                    "unknown argument: {arg}\n\n{}",
                    usage_message()
                ));
            }
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| format!("--input is required\n\n{}", usage_message()))?,
        output: output.ok_or_else(|| format!("--output is required\n\n{}", usage_message()))?,
        width,
        height,
        config,
        snapshot,
    })
}

fn parse_dimension(flag: &str, value: Option<String>) -> Result<u32, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    value
        .parse::<u32>()
        .map_err(|err| format!("invalid value `{value}` for {flag}: {err}"))
}

fn print_usage() {
    println!("{}", usage_message());
}

fn usage_message() -> String {
    "Usage: cargo run --bin render_species_chart -- --input <csv> --output <svg> [options]\n\nOptions:\n  --input <path>      CSV with Animal, Average Speed (km/h) and Diet columns\n  --output <path>     SVG file to write\n  --width <px>        Reported canvas width (raised to the configured minimum)\n  --height <px>       Reported canvas height (raised to the configured minimum)\n  --config <path>     JSON engine config; missing fields use defaults\n  --snapshot <path>   Also write the engine snapshot JSON contract\n  -h, --help          Show this message".to_owned()
}

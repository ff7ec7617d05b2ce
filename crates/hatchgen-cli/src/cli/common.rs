//! Shared option handling and the hatch pipeline used by every command.

use std::fs;
use std::io::{self, Write};
use std::time::Instant;

use log::{info, warn};

use hatchgen::{HatchRequest, Point, extract_contour_from_svg};

use super::job::Job;
use super::output::{self, OutputFormat};
use super::preview::write_preview;

/// Everything needed to run one hatch.
#[derive(Debug, Clone, PartialEq)]
pub struct HatchOptions {
    pub points: Vec<Point>,
    pub angle: f64,
    pub step: f64,
    pub format: OutputFormat,
    pub output: Option<String>,
    pub png: Option<String>,
}

impl Default for HatchOptions {
    /// The 10 x 10 mm demo plate, hatched at 45° with 1 mm spacing.
    fn default() -> Self {
        Self {
            points: default_contour(),
            angle: 45.0,
            step: 1.0,
            format: OutputFormat::Text,
            output: None,
            png: None,
        }
    }
}

/// Corners of the built-in demo plate.
pub fn default_contour() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ]
}

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub job: Option<String>,
    pub points: Option<Vec<Point>>,
    pub svg: Option<String>,
    pub angle: Option<f64>,
    pub step: Option<f64>,
    pub format: Option<OutputFormat>,
    pub output: Option<String>,
    pub png: Option<String>,
    pub help: bool,
}

/// Parse hatch options.
///
/// A bare (non-flag) argument is taken as a job file when `positional_job`
/// is set and rejected otherwise. Verbosity flags are accepted here but
/// handled by the logger setup in `main`.
pub fn parse_overrides(args: &[String], positional_job: bool) -> Result<Overrides, String> {
    let mut overrides = Overrides::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-a" | "--angle" => {
                overrides.angle = Some(parse_number("angle", value_of(args, i)?)?);
                i += 1;
            }
            "-s" | "--step" => {
                overrides.step = Some(parse_number("step", value_of(args, i)?)?);
                i += 1;
            }
            "--points" => {
                overrides.points = Some(parse_points(value_of(args, i)?)?);
                i += 1;
            }
            "--svg" => {
                overrides.svg = Some(value_of(args, i)?.to_string());
                i += 1;
            }
            "--job" => {
                overrides.job = Some(value_of(args, i)?.to_string());
                i += 1;
            }
            "-f" | "--format" => {
                let name = value_of(args, i)?;
                overrides.format = Some(OutputFormat::from_name(name).ok_or_else(|| {
                    format!("Unknown format: {}. Use 'text', 'json' or 'svg'.", name)
                })?);
                i += 1;
            }
            "--json" => {
                overrides.format = Some(OutputFormat::Json);
            }
            "-o" | "--output" => {
                overrides.output = Some(value_of(args, i)?.to_string());
                i += 1;
            }
            "--png" => {
                overrides.png = Some(value_of(args, i)?.to_string());
                i += 1;
            }
            "-h" | "--help" => {
                overrides.help = true;
            }
            "-v" | "-vv" | "--verbose" | "-q" | "--quiet" => {}
            path if positional_job && !path.starts_with('-') && overrides.job.is_none() => {
                overrides.job = Some(path.to_string());
            }
            unknown => {
                return Err(format!("Unknown option: {}", unknown));
            }
        }
        i += 1;
    }

    Ok(overrides)
}

/// The value following the flag at `args[i]`.
fn value_of(args: &[String], i: usize) -> Result<&str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("Missing value for {}", args[i]))
}

fn parse_number(what: &str, text: &str) -> Result<f64, String> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid {}: '{}' is not a number", what, text))
}

/// Parse a contour given as `"x,y x,y ..."` (spaces or semicolons between points).
pub fn parse_points(text: &str) -> Result<Vec<Point>, String> {
    text.split(|c: char| c.is_whitespace() || c == ';')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (x, y) = pair
                .split_once(',')
                .ok_or_else(|| format!("Invalid point '{}': expected x,y", pair))?;
            Ok(Point::new(parse_number("x", x)?, parse_number("y", y)?))
        })
        .collect()
}

/// Merge defaults, the job file (if any) and command-line overrides.
pub fn resolve(overrides: Overrides) -> Result<HatchOptions, String> {
    let mut options = match &overrides.job {
        Some(path) => {
            info!("Loading job: {}", path);
            let job = Job::load(path)?;
            if let Some(name) = &job.name {
                info!("Job: {}", name);
            }
            options_from_job(&job)?
        }
        None => HatchOptions::default(),
    };

    if let Some(path) = &overrides.svg {
        info!("Loading contour from SVG: {}", path);
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read SVG file {}: {}", path, e))?;
        options.points = extract_contour_from_svg(&content).map_err(|e| e.to_string())?;
    }
    if let Some(points) = overrides.points {
        options.points = points;
    }
    if let Some(angle) = overrides.angle {
        options.angle = angle;
    }
    if let Some(step) = overrides.step {
        options.step = step;
    }
    if let Some(format) = overrides.format {
        options.format = format;
    }
    if overrides.output.is_some() {
        options.output = overrides.output;
    }
    if overrides.png.is_some() {
        options.png = overrides.png;
    }

    Ok(options)
}

/// Hatch options described by a job file.
pub fn options_from_job(job: &Job) -> Result<HatchOptions, String> {
    let format = match &job.format {
        Some(name) => OutputFormat::from_name(name)
            .ok_or_else(|| format!("Unknown format in job: {}", name))?,
        None => OutputFormat::Text,
    };

    Ok(HatchOptions {
        points: job.points(),
        angle: job.angle,
        step: job.step,
        format,
        output: job.output.clone(),
        png: job.png.clone(),
    })
}

/// Validate, hatch, and write every requested output.
pub fn run(options: HatchOptions) -> Result<(), String> {
    if options.points.len() < 4 {
        warn!(
            "Contour has {} points; a rectangle needs 4, the hatch may be empty",
            options.points.len()
        );
    }

    let request = HatchRequest::new(options.points, options.angle, options.step)
        .map_err(|e| e.to_string())?;

    let bounds = request.bounds();
    info!(
        "Rectangle ({}, {}) - ({}, {}), angle {}°, step {}",
        bounds.top_left.x,
        bounds.top_left.y,
        bounds.bottom_right.x,
        bounds.bottom_right.y,
        request.angle(),
        request.step()
    );

    let start = Instant::now();
    let lines = request.generate();
    info!("Generated {} lines in {:?}", lines.len(), start.elapsed());

    let rendered = output::render(options.format, &request, &lines)?;
    match &options.output {
        Some(path) => {
            fs::write(path, &rendered).map_err(|e| format!("Failed to write {}: {}", path, e))?;
            info!("Wrote: {}", path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| format!("Failed to write output: {}", e))?;
        }
    }

    if let Some(path) = &options.png {
        write_preview(path, &bounds, &lines)?;
        info!("Wrote preview: {}", path);
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn classic_invocation() {
        let parsed = parse_overrides(&args(&["--angle", "45", "--step", "1"]), false).unwrap();
        assert_eq!(parsed.angle, Some(45.0));
        assert_eq!(parsed.step, Some(1.0));

        let options = resolve(parsed).unwrap();
        assert_eq!(options.points, default_contour());
        assert_eq!(options.format, OutputFormat::Text);
    }

    #[test]
    fn short_flags_and_formats() {
        let parsed = parse_overrides(&args(&["-a", "30", "-s", "0.5", "-f", "svg", "-o", "x.svg"]), false).unwrap();
        assert_eq!(parsed.angle, Some(30.0));
        assert_eq!(parsed.step, Some(0.5));
        assert_eq!(parsed.format, Some(OutputFormat::Svg));
        assert_eq!(parsed.output.as_deref(), Some("x.svg"));

        let parsed = parse_overrides(&args(&["--json"]), false).unwrap();
        assert_eq!(parsed.format, Some(OutputFormat::Json));
    }

    #[test]
    fn verbosity_flags_are_accepted() {
        assert!(parse_overrides(&args(&["-v", "-q", "--verbose"]), false).is_ok());
    }

    #[test]
    fn non_numeric_angle_is_an_error() {
        let err = parse_overrides(&args(&["--angle", "steep"]), false).unwrap_err();
        assert!(err.contains("angle"), "{}", err);
    }

    #[test]
    fn missing_value_is_an_error() {
        let err = parse_overrides(&args(&["--step"]), false).unwrap_err();
        assert!(err.contains("--step"), "{}", err);
    }

    #[test]
    fn unknown_option_is_an_error() {
        assert!(parse_overrides(&args(&["--colour", "red"]), false).is_err());
        assert!(parse_overrides(&args(&["job.yaml"]), false).is_err());
    }

    #[test]
    fn positional_job_when_allowed() {
        let parsed = parse_overrides(&args(&["plate.yaml", "-a", "10"]), true).unwrap();
        assert_eq!(parsed.job.as_deref(), Some("plate.yaml"));
        assert_eq!(parsed.angle, Some(10.0));
    }

    #[test]
    fn points_parse_with_spaces_and_semicolons() {
        let pts = parse_points("0,0 5,0;5,2  0,2").unwrap();
        assert_eq!(
            pts,
            vec![
                Point::new(0.0, 0.0),
                Point::new(5.0, 0.0),
                Point::new(5.0, 2.0),
                Point::new(0.0, 2.0),
            ]
        );
        assert!(parse_points("0,0 5").is_err());
        assert!(parse_points("a,b").is_err());
    }

    #[test]
    fn flags_override_job_values() {
        let job = Job::from_yaml("contour: [[0, 0], [4, 4]]\nangle: 90\nstep: 2\nformat: json\n").unwrap();
        let base = options_from_job(&job).unwrap();
        assert_eq!(base.angle, 90.0);
        assert_eq!(base.format, OutputFormat::Json);

        let dir = std::env::temp_dir();
        let path = dir.join(format!("hatchgen-resolve-{}.yaml", std::process::id()));
        fs::write(&path, "contour: [[0, 0], [4, 4]]\nangle: 90\nstep: 2\n").unwrap();

        let overrides = Overrides {
            job: Some(path.to_string_lossy().into_owned()),
            step: Some(0.5),
            ..Overrides::default()
        };
        let options = resolve(overrides).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(options.angle, 90.0);
        assert_eq!(options.step, 0.5);
        assert_eq!(options.points.len(), 2);
    }

    #[test]
    fn run_rejects_bad_step() {
        let options = HatchOptions { step: -1.0, ..HatchOptions::default() };
        let err = run(options).unwrap_err();
        assert!(err.contains("step"), "{}", err);
    }

    #[test]
    fn run_writes_output_file() {
        let path = std::env::temp_dir().join(format!("hatchgen-run-{}.txt", std::process::id()));
        let options = HatchOptions {
            angle: 90.0,
            output: Some(path.to_string_lossy().into_owned()),
            ..HatchOptions::default()
        };
        run(options).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(text.lines().count(), 9);
        assert!(text.starts_with("Line 1: (1,10) -> (1,0)"));
    }
}

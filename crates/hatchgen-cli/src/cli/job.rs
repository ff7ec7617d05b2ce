//! Hatch job files.
//!
//! A job is a YAML (or JSON) document carrying the contour, angle and
//! step, plus optional output settings. Command-line flags override
//! whatever the job sets.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use hatchgen::Point;

use super::common::{parse_overrides, resolve, run};

/// A complete hatch job.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Job {
    /// Job name, only used in log output
    #[serde(default)]
    pub name: Option<String>,

    /// Contour corners as `[x, y]` pairs, any order
    pub contour: Vec<[f64; 2]>,

    /// Hatch angle in degrees (0 to 180)
    pub angle: f64,

    /// Spacing between hatch lines in millimeters
    #[serde(default = "default_step")]
    pub step: f64,

    /// Output format name (text, json, svg)
    #[serde(default)]
    pub format: Option<String>,

    /// Output file (stdout when absent)
    #[serde(default)]
    pub output: Option<String>,

    /// PNG preview file
    #[serde(default)]
    pub png: Option<String>,
}

fn default_step() -> f64 {
    1.0
}

impl Job {
    /// Load a job from a YAML or JSON file (picked by extension).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read job file {}: {}", path.display(), e))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| format!("Failed to parse job YAML: {}", e))
    }

    pub fn from_json(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|e| format!("Failed to parse job JSON: {}", e))
    }

    /// Contour as library points.
    pub fn points(&self) -> Vec<Point> {
        self.contour.iter().map(|&[x, y]| Point::new(x, y)).collect()
    }
}

/// Example job printed by `hatchgen job --example`.
pub const EXAMPLE_JOB: &str = r#"# Example hatchgen job
name: "demo plate"

# Rectangle corners, any order (x, y in millimeters, y up)
contour:
  - [0, 0]
  - [10, 0]
  - [10, 10]
  - [0, 10]

angle: 45     # degrees, 0 to 180
step: 1.0     # millimeters between lines

format: text  # text | json | svg
# output: plate_hatch.txt
# png: plate_hatch.png
"#;

/// Execute the job command.
pub fn cmd_job(args: &[String]) -> Result<(), String> {
    if args.iter().any(|a| a == "--example") {
        print!("{}", EXAMPLE_JOB);
        return Ok(());
    }

    let overrides = parse_overrides(args, true)?;
    if overrides.help {
        print_usage();
        return Ok(());
    }
    if overrides.job.is_none() {
        print_usage();
        return Err("No job file specified".to_string());
    }

    run(resolve(overrides)?)
}

fn print_usage() {
    eprintln!("hatchgen job - Run a hatch described by a YAML or JSON file");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    hatchgen job <job.yaml> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    Any hatch option (-a, -s, -f, -o, --png, ...) overrides the job");
    eprintln!("    --example              Print an example job YAML");
    eprintln!("    -h, --help             Show this help");
}

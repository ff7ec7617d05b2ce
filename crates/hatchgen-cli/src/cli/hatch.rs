//! Hatch command implementation.

use super::common::{parse_overrides, resolve, run};

/// Execute the hatch command.
pub fn cmd_hatch(args: &[String]) -> Result<(), String> {
    let overrides = parse_overrides(args, false)?;
    if overrides.help {
        print_usage();
        return Ok(());
    }

    run(resolve(overrides)?)
}

pub fn print_usage() {
    eprintln!("Usage: hatchgen [hatch] [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -a, --angle <deg>       Hatch angle, 0 to 180 (default: 45)");
    eprintln!("  -s, --step <mm>         Spacing between lines (default: 1)");
    eprintln!("  --points \"x,y x,y ..\"   Rectangle corners (default: 10x10 square)");
    eprintln!("  --svg <file>            Read the rectangle from an SVG file");
    eprintln!("  --job <file>            Load settings from a YAML/JSON job file");
    eprintln!("  -f, --format <fmt>      Output format: text, json, svg (default: text)");
    eprintln!("  --json                  Shorthand for --format json");
    eprintln!("  -o, --output <file>     Write output to file instead of stdout");
    eprintln!("  --png <file>            Also write a PNG preview");
    eprintln!("  -v, -vv / -q            More / less logging on stderr");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  hatchgen --angle 45 --step 1");
}

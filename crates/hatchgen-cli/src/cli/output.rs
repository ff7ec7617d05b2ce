//! Rendering hatch results as text, JSON or SVG.

use serde::Serialize;

use hatchgen::{Bounds, HatchRequest, Segment};

/// Output format for generated lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Svg,
}

impl OutputFormat {
    /// Parse a format name as given on the command line or in a job file.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }
}

/// A point in JSON output format.
#[derive(Serialize)]
struct JsonPoint {
    x: f64,
    y: f64,
}

/// A line in JSON output format.
#[derive(Serialize)]
struct JsonLine {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

#[derive(Serialize)]
struct JsonBounds {
    top_left: JsonPoint,
    bottom_right: JsonPoint,
}

/// Top-level JSON document.
#[derive(Serialize)]
struct JsonOutput {
    angle: f64,
    step: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    regime: Option<&'static str>,
    bounds: JsonBounds,
    lines: Vec<JsonLine>,
}

/// Render in the requested format.
pub fn render(format: OutputFormat, request: &HatchRequest, lines: &[Segment]) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(lines_to_text(lines)),
        OutputFormat::Json => lines_to_json(request, lines),
        OutputFormat::Svg => Ok(lines_to_svg(&request.bounds(), lines)),
    }
}

/// The classic listing: `Line 1: (1,10) -> (1,0)`, one segment per line.
pub fn lines_to_text(lines: &[Segment]) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        out.push_str(&format!(
            "Line {}: ({},{}) -> ({},{})\n",
            i + 1,
            line.start.x,
            line.start.y,
            line.end.x,
            line.end.y
        ));
    }
    out
}

/// Pretty-printed JSON with the request parameters and every segment.
pub fn lines_to_json(request: &HatchRequest, lines: &[Segment]) -> Result<String, String> {
    let bounds = request.bounds();
    let output = JsonOutput {
        angle: request.angle(),
        step: request.step(),
        regime: hatchgen::HatchRegime::classify(request.angle()).map(|r| r.name()),
        bounds: JsonBounds {
            top_left: JsonPoint { x: bounds.top_left.x, y: bounds.top_left.y },
            bottom_right: JsonPoint { x: bounds.bottom_right.x, y: bounds.bottom_right.y },
        },
        lines: lines
            .iter()
            .map(|l| JsonLine { x1: l.start.x, y1: l.start.y, x2: l.end.x, y2: l.end.y })
            .collect(),
    };

    serde_json::to_string_pretty(&output).map_err(|e| format!("Failed to serialize JSON: {}", e))
}

/// Convert lines to SVG output (individual <line> elements).
///
/// Hatch coordinates are y-up, so the drawing group flips the y axis
/// around the rectangle to keep the picture upright.
pub fn lines_to_svg(bounds: &Bounds, lines: &[Segment]) -> String {
    let padding = (bounds.width().max(bounds.height()) * 0.05).max(1.0);
    let min_x = bounds.top_left.x - padding;
    let min_y = bounds.bottom_right.y - padding;
    let width = bounds.width() + padding * 2.0;
    let height = bounds.height() + padding * 2.0;
    let stroke = (width.max(height) / 500.0).max(0.01);

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="{:.3} {:.3} {:.3} {:.3}">
<rect x="{:.3}" y="{:.3}" width="{:.3}" height="{:.3}" fill="white"/>
<g transform="matrix(1 0 0 -1 0 {:.3})">
"#,
        min_x, min_y, width, height,
        min_x, min_y, width, height,
        // y' = (top + bottom) - y mirrors the rectangle onto itself
        bounds.top_left.y + bounds.bottom_right.y
    ));

    svg.push_str(&format!(
        "<rect x=\"{:.3}\" y=\"{:.3}\" width=\"{:.3}\" height=\"{:.3}\" stroke=\"#999999\" stroke-width=\"{:.3}\" fill=\"none\"/>\n",
        bounds.top_left.x,
        bounds.bottom_right.y,
        bounds.width(),
        bounds.height(),
        stroke
    ));

    svg.push_str(&format!(
        "<g stroke=\"black\" stroke-width=\"{:.3}\" stroke-linecap=\"round\" fill=\"none\">\n",
        stroke
    ));
    for line in lines {
        svg.push_str(&format!(
            "  <line x1=\"{:.3}\" y1=\"{:.3}\" x2=\"{:.3}\" y2=\"{:.3}\"/>\n",
            line.start.x, line.start.y, line.end.x, line.end.y
        ));
    }
    svg.push_str("</g>\n</g>\n</svg>\n");
    svg
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use hatchgen::Point;

    fn square_request(angle: f64) -> HatchRequest {
        HatchRequest::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ],
            angle,
            1.0,
        )
        .unwrap()
    }

    #[test]
    fn format_names() {
        assert_eq!(OutputFormat::from_name("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_name("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name("svg"), Some(OutputFormat::Svg));
        assert_eq!(OutputFormat::from_name("png"), None);
    }

    #[test]
    fn text_listing_matches_classic_format() {
        let req = square_request(90.0);
        let text = lines_to_text(&req.generate());
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0], "Line 1: (1,10) -> (1,0)");
        assert_eq!(rows[8], "Line 9: (9,10) -> (9,0)");
    }

    #[test]
    fn text_listing_keeps_full_precision() {
        let lines = [Segment::new(Point::new(0.1, 2.5), Point::new(-3.25, 1e-3))];
        assert_eq!(lines_to_text(&lines), "Line 1: (0.1,2.5) -> (-3.25,0.001)\n");
    }

    #[test]
    fn empty_listing_is_empty() {
        assert_eq!(lines_to_text(&[]), "");
    }

    #[test]
    fn json_has_lines_and_bounds() {
        let req = square_request(0.0);
        let json = lines_to_json(&req, &req.generate()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["angle"], 0.0);
        assert_eq!(value["regime"], "horizontal");
        assert_eq!(value["bounds"]["top_left"]["y"], 10.0);
        assert_eq!(value["lines"].as_array().unwrap().len(), 9);
        assert_eq!(value["lines"][0]["y1"], 1.0);
        assert_eq!(value["lines"][0]["x2"], 10.0);
    }

    #[test]
    fn svg_has_one_line_element_per_segment() {
        let req = square_request(45.0);
        let lines = req.generate();
        let svg = lines_to_svg(&req.bounds(), &lines);

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("viewBox="));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<line ").count(), lines.len());
    }

    #[test]
    fn render_dispatches_on_format() {
        let req = square_request(90.0);
        let lines = req.generate();
        assert!(render(OutputFormat::Text, &req, &lines).unwrap().starts_with("Line 1:"));
        assert!(render(OutputFormat::Json, &req, &lines).unwrap().contains("\"lines\""));
        assert!(render(OutputFormat::Svg, &req, &lines).unwrap().contains("<line"));
    }
}

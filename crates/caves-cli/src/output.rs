//! Output formatting utilities

use caves_core::{CavePath, Part, PathResult, TraversalStats};
use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Answer for one part, as printed
#[derive(Debug, Serialize)]
pub struct Report {
    pub part: Part,
    pub answer: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<CavePath>>,
    pub stats: TraversalStats,
}

impl Report {
    pub fn new(part: Part, result: PathResult, list_paths: bool) -> Self {
        Self {
            part,
            answer: result.count,
            paths: list_paths.then_some(result.paths),
            stats: result.stats,
        }
    }
}

/// Format a report based on format type
pub fn render(report: &Report, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
        OutputFormat::Text => {
            let mut out = String::new();
            for path in report.paths.iter().flatten() {
                out.push_str(&path.to_string());
                out.push('\n');
            }
            out.push_str(&format!("Part {}: {}\n", report.part, report.answer));
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(paths: Option<Vec<CavePath>>) -> Report {
        Report {
            part: Part::Two,
            answer: 1,
            paths,
            stats: TraversalStats::default(),
        }
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::from("other"), OutputFormat::Text);
    }

    #[test]
    fn test_render_text() {
        let text = render(&report(None), OutputFormat::Text).unwrap();
        assert_eq!(text, "Part 2: 1\n");

        let path = CavePath {
            caves: vec!["start".to_string(), "end".to_string()],
        };
        let text = render(&report(Some(vec![path])), OutputFormat::Text).unwrap();
        assert_eq!(text, "start,end\nPart 2: 1\n");
    }

    #[test]
    fn test_render_json() {
        let json = render(&report(None), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["part"], 2);
        assert_eq!(value["answer"], 1);
        assert!(value.get("paths").is_none());
    }
}

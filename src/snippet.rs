//! Registry of the runnable snippets: names, descriptions and rendering.

use crate::config::SnippetConfig;
use crate::error::{Result, SnippetError};
use crate::{capture, count, reduce, transform, views};
use std::fmt;
use std::str::FromStr;

/// The runnable snippets, in the order they are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Snippet {
    Capture,
    Transform,
    TransformReduce,
    PipedViews,
    CountIf,
}

impl Snippet {
    pub const ALL: [Snippet; 5] = [
        Snippet::Capture,
        Snippet::Transform,
        Snippet::TransformReduce,
        Snippet::PipedViews,
        Snippet::CountIf,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Snippet::Capture => "capture",
            Snippet::Transform => "transform",
            Snippet::TransformReduce => "transform-reduce",
            Snippet::PipedViews => "piped-views",
            Snippet::CountIf => "count-if",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Snippet::Capture => "value vs. alias capture, state mutated across calls",
            Snippet::Transform => "in-place character mapping, unary and binary transform",
            Snippet::TransformReduce => "fused filter + map + reduce over a numeric sequence",
            Snippet::PipedViews => "lazy filter / map / reverse / take pipeline",
            Snippet::CountIf => "predicate-based counting",
        }
    }

    /// The exact lines this snippet prints for `config`.
    pub fn render(self, config: &SnippetConfig) -> Result<Vec<String>> {
        tracing::info!(snippet = self.name(), "rendering");
        let lines = match self {
            Snippet::Capture => capture::render(&config.capture)?,
            Snippet::Transform => transform::render(&config.transform)?,
            Snippet::TransformReduce => reduce::render(&config.transform_reduce)?,
            Snippet::PipedViews => views::render(&config.views)?,
            Snippet::CountIf => count::render(&config.count),
        };
        Ok(lines)
    }
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Snippet {
    type Err = SnippetError;

    fn from_str(s: &str) -> Result<Self> {
        Snippet::ALL
            .into_iter()
            .find(|snippet| snippet.name() == s)
            .ok_or_else(|| SnippetError::UnknownSnippet(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for snippet in Snippet::ALL {
            assert_eq!(snippet.name().parse::<Snippet>().unwrap(), snippet);
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "spaceship".parse::<Snippet>().unwrap_err();
        assert_eq!(err.to_string(), "unknown snippet 'spaceship'");
    }

    #[test]
    fn test_every_snippet_renders_with_defaults() {
        let config = SnippetConfig::default();
        for snippet in Snippet::ALL {
            let lines = snippet.render(&config).unwrap();
            assert!(!lines.is_empty(), "{} printed nothing", snippet);
        }
    }

    #[test]
    fn test_default_outputs() {
        let config = SnippetConfig::default();
        assert_eq!(
            Snippet::Capture.render(&config).unwrap(),
            vec![
                "inside Lambda x: 0 y: 77",
                "inside Lambda x: 0 y: 78",
                "final y: 79"
            ]
        );
        assert_eq!(Snippet::TransformReduce.render(&config).unwrap(), vec!["220"]);
        assert_eq!(
            Snippet::PipedViews.render(&config).unwrap(),
            vec!["12 18 16 ", "----------------"]
        );
        assert_eq!(
            Snippet::CountIf.render(&config).unwrap(),
            vec!["Number of elements greater than 5: 4"]
        );
    }

    #[test]
    fn test_config_flows_into_render() {
        let mut config = SnippetConfig::default();
        config.views.take = 1;
        config.count.threshold = 7;
        assert_eq!(
            Snippet::PipedViews.render(&config).unwrap()[0],
            "12 "
        );
        assert_eq!(
            Snippet::CountIf.render(&config).unwrap(),
            vec!["Number of elements greater than 7: 2"]
        );
    }

    #[test]
    fn test_overflowing_config_is_an_error_not_a_panic() {
        let text = "[transform_reduce]\nnumbers = [100000]\n\n[views]\nfactor = 2147483647\n";
        let config = SnippetConfig::from_toml_str(text, std::path::Path::new("inline")).unwrap();

        for snippet in [Snippet::TransformReduce, Snippet::PipedViews] {
            let err = snippet.render(&config).unwrap_err();
            assert!(matches!(err, SnippetError::Overflow(_)), "{}: {}", snippet, err);
        }
        assert!(Snippet::Capture.render(&config).is_ok());
    }
}

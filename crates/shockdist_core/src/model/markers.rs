//! Policy reference lines overlaid on the distribution plot

use serde::{Deserialize, Serialize};

/// Policy threshold that can be drawn as a vertical line.
///
/// Variants are declared in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReferenceLine {
    MinimumWage,
    PovertyLine,
    VulnerabilityLine,
}

impl ReferenceLine {
    /// Every line, in the fixed order markers are emitted
    pub const ALL: [ReferenceLine; 3] = [
        ReferenceLine::MinimumWage,
        ReferenceLine::PovertyLine,
        ReferenceLine::VulnerabilityLine,
    ];

    /// Canonical identifier used on the wire
    pub fn id(self) -> &'static str {
        match self {
            Self::MinimumWage => "MinimumWage",
            Self::PovertyLine => "PovertyLine",
            Self::VulnerabilityLine => "VulnerabilityLine",
        }
    }

    /// Parse an identifier, ignoring case, spaces, `_` and `-`.
    ///
    /// Accepts `"MinimumWage"`, `"Minimum Wage"` and `"minimum_wage"` alike.
    pub fn parse(id: &str) -> Option<Self> {
        let normalized: String = id
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "minimumwage" => Some(Self::MinimumWage),
            "povertyline" => Some(Self::PovertyLine),
            "vulnerabilityline" => Some(Self::VulnerabilityLine),
            _ => None,
        }
    }

    /// Parse a UI selection, silently dropping identifiers this version does not know
    pub fn parse_selection<I, S>(ids: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter().filter_map(|id| Self::parse(id.as_ref())).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineDash {
    Solid,
    Dash,
    Dot,
    DashDot,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub dash: LineDash,
    pub width: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            dash: LineDash::DashDot,
            width: 2.0,
        }
    }
}

/// Static description of one reference line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerDefinition {
    /// Income threshold where the vertical line is drawn
    pub x: f64,
    /// Horizontal shift of the label relative to the line
    pub label_offset: f64,
    pub label: String,
    pub color: String,
}

/// Thresholds and appearance for every reference line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerCatalog {
    pub minimum_wage: MarkerDefinition,
    pub poverty_line: MarkerDefinition,
    pub vulnerability_line: MarkerDefinition,
    #[serde(default)]
    pub style: MarkerStyle,
}

impl Default for MarkerCatalog {
    /// Thresholds in thousands of pesos
    fn default() -> Self {
        Self {
            minimum_wage: MarkerDefinition {
                x: 700.0,
                label_offset: 40.0,
                label: "Minimum wage".to_string(),
                color: "red".to_string(),
            },
            poverty_line: MarkerDefinition {
                x: 200.0,
                label_offset: 50.0,
                label: "Poverty line".to_string(),
                color: "#3C7A89".to_string(),
            },
            vulnerability_line: MarkerDefinition {
                x: 450.0,
                label_offset: 65.0,
                label: "Vulnerability line".to_string(),
                color: "#c79408".to_string(),
            },
            style: MarkerStyle::default(),
        }
    }
}

impl MarkerCatalog {
    pub fn definition(&self, line: ReferenceLine) -> &MarkerDefinition {
        match line {
            ReferenceLine::MinimumWage => &self.minimum_wage,
            ReferenceLine::PovertyLine => &self.poverty_line,
            ReferenceLine::VulnerabilityLine => &self.vulnerability_line,
        }
    }

    pub fn threshold(&self, line: ReferenceLine) -> f64 {
        self.definition(line).x
    }
}

/// Rendering-ready vertical line with its text label.
///
/// The line spans the full plot height; `label_x`/`label_y` are in data
/// coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceMarker {
    pub line: ReferenceLine,
    pub label: String,
    pub x: f64,
    pub label_x: f64,
    pub label_y: f64,
    pub color: String,
    pub style: MarkerStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        assert_eq!(ReferenceLine::parse("MinimumWage"), Some(ReferenceLine::MinimumWage));
        assert_eq!(ReferenceLine::parse("Poverty Line"), Some(ReferenceLine::PovertyLine));
        assert_eq!(
            ReferenceLine::parse("vulnerability_line"),
            Some(ReferenceLine::VulnerabilityLine)
        );
        assert_eq!(ReferenceLine::parse("Median Income"), None);
    }

    #[test]
    fn test_parse_selection_drops_unknown() {
        let lines = ReferenceLine::parse_selection(["Gini", "Vulnerability Line", "MinimumWage"]);
        assert_eq!(
            lines,
            vec![ReferenceLine::VulnerabilityLine, ReferenceLine::MinimumWage]
        );
    }

    #[test]
    fn test_id_roundtrips_through_parse() {
        for line in ReferenceLine::ALL {
            assert_eq!(ReferenceLine::parse(line.id()), Some(line));
        }
    }
}

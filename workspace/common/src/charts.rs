//! Chart projections.
//!
//! Each function maps a static table onto the geometry or series a chart
//! widget draws. They hold no rendering code so the frontend and the tests
//! share one source of truth.

use serde::Serialize;

use crate::catalog::{SkillScoreEntry, SubtopicEntry, TopicDistributionEntry, TrendPoint};

/// Upper bound of the radar radius axis.
pub const SCORE_DOMAIN_MAX: f64 = 100.0;

/// Category axis labels of bar charts are rotated by this many degrees.
pub const BAR_TICK_ANGLE: i32 = -45;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Slice {
    pub name: String,
    pub value: u32,
    /// Share of the whole pie in `[0, 1]`; this is what the pie draws
    pub fraction: f64,
    pub color: String,
    pub label: String,
}

/// Pie slices sized by question count and labelled with the authored
/// percentage.
pub fn proportional_slices(entries: &[TopicDistributionEntry]) -> Vec<Slice> {
    let total: u32 = entries.iter().map(|entry| entry.questions).sum();

    entries
        .iter()
        .map(|entry| Slice {
            name: entry.name.clone(),
            value: entry.questions,
            fraction: if total == 0 {
                0.0
            } else {
                f64::from(entry.questions) / f64::from(total)
            },
            color: entry.color.clone(),
            label: format!("{}: {}%", entry.name, entry.percentage),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RadarPolygon {
    /// One axis per skill, in table order
    pub axes: Vec<String>,
    /// Clamped to the domain, shown on hover
    pub scores: Vec<f64>,
    /// Scores divided by [`SCORE_DOMAIN_MAX`], in `[0, 1]`; the drawn radius
    pub radii: Vec<f64>,
}

impl RadarPolygon {
    /// Axis labels with the first repeated so a polar trace closes.
    pub fn closed_axes(&self) -> Vec<String> {
        let mut axes = self.axes.clone();
        axes.extend(self.axes.first().cloned());
        axes
    }

    /// Scores with the first repeated so a polar trace closes.
    pub fn closed_scores(&self) -> Vec<f64> {
        let mut scores = self.scores.clone();
        scores.extend(self.scores.first().copied());
        scores
    }

    /// Radii with the first repeated so a polar trace closes.
    pub fn closed_radii(&self) -> Vec<f64> {
        let mut radii = self.radii.clone();
        radii.extend(self.radii.first().copied());
        radii
    }
}

pub fn radar_polygon(entries: &[SkillScoreEntry]) -> RadarPolygon {
    let axes: Vec<String> = entries.iter().map(|entry| entry.skill.clone()).collect();
    let scores: Vec<f64> = entries
        .iter()
        .map(|entry| f64::from(entry.score).min(SCORE_DOMAIN_MAX))
        .collect();
    let radii: Vec<f64> = scores
        .iter()
        .map(|score| (score / SCORE_DOMAIN_MAX).clamp(0.0, 1.0))
        .collect();

    RadarPolygon {
        axes,
        scores,
        radii,
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarSeries {
    pub categories: Vec<String>,
    pub values: Vec<u32>,
    pub color: String,
    pub tick_angle: i32,
}

/// One bar per subtopic, height = question count.
pub fn bar_series(entries: &[SubtopicEntry], color: &str) -> BarSeries {
    BarSeries {
        categories: entries.iter().map(|entry| entry.topic.clone()).collect(),
        values: entries.iter().map(|entry| entry.questions).collect(),
        color: color.to_string(),
        tick_angle: BAR_TICK_ANGLE,
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<u32>,
    pub color: String,
}

/// Sales and profit lines of the illustrative trend chart.
pub fn trend_series(points: &[TrendPoint]) -> Vec<LineSeries> {
    let months: Vec<String> = points.iter().map(|point| point.month.clone()).collect();

    vec![
        LineSeries {
            name: "sales".to_string(),
            x: months.clone(),
            y: points.iter().map(|point| point.sales).collect(),
            color: "#3b82f6".to_string(),
        },
        LineSeries {
            name: "profit".to_string(),
            x: months,
            y: points.iter().map(|point| point.profit).collect(),
            color: "#10b981".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Difficulty};

    fn entry(name: &str, questions: u32, percentage: u32) -> TopicDistributionEntry {
        TopicDistributionEntry {
            name: name.to_string(),
            questions,
            percentage,
            color: "#000000".to_string(),
        }
    }

    #[test]
    fn test_slices_are_monotonic_with_counts() {
        let slices = proportional_slices(&[
            entry("Quantitative", 45, 40),
            entry("Reasoning", 35, 30),
            entry("Verbal", 25, 22),
            entry("DataInterpretation", 10, 8),
        ]);

        assert_eq!(slices.len(), 4);
        for pair in slices.windows(2) {
            assert!(pair[0].fraction >= pair[1].fraction);
        }
        let total: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!((slices[0].fraction - 45.0 / 115.0).abs() < 1e-9);
    }

    #[test]
    fn test_slices_are_labelled_with_percentage() {
        let slices = proportional_slices(&Catalog::builtin().topic_distribution);
        assert!((slices[2].fraction - 25.0 / 115.0).abs() < 1e-9);
        assert_eq!(slices[0].label, "Quantitative Aptitude: 40%");
        assert_eq!(slices[3].label, "Data Interpretation: 8%");
        assert_eq!(slices[0].color, "#3b82f6");
    }

    #[test]
    fn test_empty_pie_has_zero_fractions() {
        let slices = proportional_slices(&[entry("A", 0, 50), entry("B", 0, 50)]);
        assert!(slices.iter().all(|s| s.fraction == 0.0));
        assert!(proportional_slices(&[]).is_empty());
    }

    #[test]
    fn test_radar_scales_to_fixed_domain() {
        let polygon = radar_polygon(&[
            SkillScoreEntry { skill: "Math".into(), score: 100 },
            SkillScoreEntry { skill: "Logic".into(), score: 50 },
            SkillScoreEntry { skill: "Verbal".into(), score: 250 },
            SkillScoreEntry { skill: "Data".into(), score: 0 },
        ]);

        assert_eq!(polygon.axes, vec!["Math", "Logic", "Verbal", "Data"]);
        assert_eq!(polygon.radii, vec![1.0, 0.5, 1.0, 0.0]);
        assert_eq!(polygon.scores[2], 100.0);
        assert_eq!(polygon.closed_radii(), vec![1.0, 0.5, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_radar_closed_trace() {
        let polygon = radar_polygon(&Catalog::builtin().skill_scores);
        assert_eq!(polygon.axes.len(), 6);
        assert_eq!(polygon.closed_axes().len(), 7);
        assert_eq!(polygon.closed_scores().first(), polygon.closed_scores().last());
        assert_eq!(polygon.closed_radii()[0], 0.85);
        assert!(radar_polygon(&[]).closed_radii().is_empty());
    }

    #[test]
    fn test_bar_series_one_bar_per_entry() {
        let entries = vec![
            SubtopicEntry { topic: "Syllogisms".into(), questions: 8, difficulty: Difficulty::Hard },
            SubtopicEntry { topic: "Analogies".into(), questions: 5, difficulty: Difficulty::Easy },
        ];
        let series = bar_series(&entries, "#10b981");
        assert_eq!(series.categories, vec!["Syllogisms", "Analogies"]);
        assert_eq!(series.values, vec![8, 5]);
        assert_eq!(series.tick_angle, -45);
    }

    #[test]
    fn test_trend_has_two_six_point_series() {
        let series = trend_series(&Catalog::builtin().trend);
        assert_eq!(series.len(), 2);
        assert!(series.iter().all(|s| s.x.len() == 6 && s.y.len() == 6));
        assert_eq!(series[0].y[0], 4000);
        assert_eq!(series[1].y[2], 9800);
    }
}

//! Plotly-backed chart widgets. Geometry and series come from
//! `common::charts`; these components only translate them into traces.

mod bar;
mod distribution;
mod plot;
mod radar;
mod trend;

pub use bar::SubtopicBarChart;
pub use distribution::CategoryDistributionChart;
pub use plot::PlotlyChart;
pub use radar::SkillRadarChart;
pub use trend::TrendLineChart;

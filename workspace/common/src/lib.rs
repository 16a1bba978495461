//! Platform-neutral core of the aptitude report.
//! The frontend renders these types and the CLI validates and exports them,
//! so everything here compiles both natively and for wasm32.

pub mod catalog;
pub mod charts;
pub mod citation;
mod content;
pub mod state;

pub use catalog::{
    Catalog, Citation, CitationRegistry, CoverageRow, Difficulty, ExpandableTopic, Headline,
    ImageCatalog, ResourceEntry, SampleQuestion, SkillScoreEntry, SubtopicEntry,
    TopicCount, TopicDistributionEntry, TopicKey, TrendPoint,
};
pub use charts::{BarSeries, LineSeries, RadarPolygon, Slice};
pub use citation::{CitationMode, ResolvedCitation, resolve_citation};
pub use state::{ReportAction, ReportState, Section, UnknownSection};

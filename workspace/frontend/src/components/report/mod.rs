//! The report page and its six sections.

mod data;
mod header;
mod navigation;
mod overview;
mod quantitative;
mod reasoning;
mod references;
mod resources;
mod section;
mod topic;
mod verbal;
mod view;

pub use view::ReportPage;

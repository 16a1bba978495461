//! Stateless display primitives shared by every section.

pub mod alert;
pub mod card;
pub mod citation;

pub use alert::{Alert, AlertDescription, AlertTitle};
pub use card::{Card, CardContent, CardHeader, CardTitle};
pub use citation::CitationLink;

pub mod check;
pub mod export;
pub mod serve;

pub use check::check;
pub use export::export;
pub use serve::serve;

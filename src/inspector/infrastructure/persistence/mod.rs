pub mod quoting;
pub mod repositories;

pub mod domain;
pub mod rules;

pub use domain::*;
pub use rules::*;

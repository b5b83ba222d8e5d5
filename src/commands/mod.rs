//! Command implementations

mod install;
mod run;

pub use install::install;
pub use run::run;

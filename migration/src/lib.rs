pub mod migrations;
pub mod runner;

mod migrator;
pub use migrator::Migrator;

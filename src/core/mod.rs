pub mod editor;
pub mod grammar;
pub mod logic;
pub mod query;
pub mod range;
pub mod report;
pub mod stats;
pub mod store;

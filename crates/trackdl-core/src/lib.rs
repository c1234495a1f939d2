pub mod config;
pub mod logging;

pub mod batch;
pub mod fetcher;
pub mod options;
pub mod query;
pub mod tracklist;

pub mod config;
pub mod logging;

pub mod downloader;
pub mod extract;
pub mod page;
pub mod pipeline;
pub mod url_model;

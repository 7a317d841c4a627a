// Infrastructure module: process-level concerns

pub mod logging;

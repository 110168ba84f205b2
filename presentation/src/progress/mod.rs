//! Progress reporting for pipeline stages

pub mod reporter;

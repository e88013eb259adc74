//! URL handling module for Robots-Validator
//!
//! This module turns user input into a target URL and derives the robots.txt
//! location, origin and evaluated path from it.

mod domain;
mod normalize;

pub use domain::{origin_key, request_path, robots_url};
pub use normalize::normalize_target;

//! Fetch layer
//!
//! Retrieves the text the decision engine works on: robots.txt, the target
//! page body and headers, plus optional static resource probes.

mod fetcher;

pub use fetcher::{
    build_http_client, check_resources, fetch_page, fetch_robots_txt, PageSnapshot,
    ResourceAvailability, RESOURCE_PROBES,
};

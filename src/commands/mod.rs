mod context;
mod scan;

pub use scan::run_scan;

/// Network adapters for external calls
mod vcs_probe;

pub use vcs_probe::HttpVcsProbe;

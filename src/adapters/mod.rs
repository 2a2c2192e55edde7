// Adapters layer: concrete sinks and renderers behind the domain ports.

pub mod display;
pub mod output;

mod orchestrator;

pub use orchestrator::run;

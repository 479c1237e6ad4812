//! Process execution: the [`ProcessRunnerPort`](harvest_application::ProcessRunnerPort)
//! adapter backed by `std::process` and `which`.

mod system_runner;

pub use system_runner::SystemProcessRunner;

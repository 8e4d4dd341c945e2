//! Core step-path unit tests.


/// End-to-end single-step scenarios.
pub mod machine_steps;


/// PC-update stage behavior.
pub mod pc_update;

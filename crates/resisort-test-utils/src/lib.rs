//! Test helpers shared by the `resisort` integration tests.

pub mod sandbox;

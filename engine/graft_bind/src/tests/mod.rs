//! Engine-level test scenarios.

mod fixtures;

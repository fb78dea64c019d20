//! Test module for route-climber
//!
//! Scenario tests for the structure and array forms, plus property-based
//! tests using proptest for the invariants of walking and flattening.

#[cfg(test)]
pub mod helpers;




#[cfg(test)]
pub mod property_tests;

//! Router model tests

//! Test Module
//!
//! Cross-module test suite for the Atlas core.
//!
//! ## Test Categories
//! - `brain_tests`: Analyzer behavior on realistic mixed-language submissions
//! - `matching_tests`: Ranking properties, confidence buckets, introductions
//! - `integration_tests`: Loading from disk through ranking and introduction
pub mod matching_tests;

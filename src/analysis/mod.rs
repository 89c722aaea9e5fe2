//! Analysis result types and boundary formatting

pub mod result;

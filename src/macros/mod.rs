//! Macro utilities for named item sets

pub mod collections;

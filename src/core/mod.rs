//! Foundation layer: data types shared by all evaluation stages.

pub mod types;

#![forbid(unsafe_code)]

pub mod repository;
pub mod sample;

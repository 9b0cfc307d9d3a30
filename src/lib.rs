#![no_std]

pub mod acos;
mod acos_table;
pub mod angle;
pub mod config;
pub mod estimator;
pub mod filter;
pub mod gravity;
pub mod sample;
pub mod settings;
pub mod sqrt;

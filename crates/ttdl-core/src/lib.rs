//! Core ttdl library (API client, downloads, config, box rendering).

pub mod api;
pub mod boxes;
pub mod config;
pub mod download;
pub mod interrupt;
pub mod text;
pub mod theme;
pub mod token;

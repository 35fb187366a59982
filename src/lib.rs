//! # songmood
//!
//! Happiness scores for songs from lyrics or theme text, tempo and valence.
//! Text is embedded with a sentence encoder, compared against happy and
//! dark anchor phrases, and blended with the audio features.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod models;
pub mod processing;
pub mod runtime;
pub mod scoring;
pub mod storage;
pub mod themes;
pub mod ui;

#[cfg(test)]
mod test_support;

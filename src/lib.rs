#![warn(missing_docs)]
//! Core of an interactive editor for rectangular grid mazes: the grid model, click hit testing,
//! and the text formats used to exchange mazes and feature locations.

pub mod cli;
pub mod error;
pub mod format;
pub mod grid;
pub mod gui;
pub mod settings;

//! CLI infrastructure for the minimax toolkit
//!
//! This module provides the command-line interface for analyzing positions,
//! playing against the engine, and running self-play evaluations.

pub mod commands;
pub mod output;

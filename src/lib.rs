//! RedditPains - a terminal client for browsing Reddit pain point
//! research reports
//!
//! This library provides a terminal interface for exploring mock pain
//! point analyses: a dashboard with a subreddit search input, a history of
//! past runs, and expandable result reports. The adaptive shell around
//! them - a resizable/collapsible sidebar, a drawer for narrow terminals,
//! and a light/dark/system theme resolver - persists its preferences
//! across sessions.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`prefs`] - Persisted UI preferences (sidebar layout, theme)
//! * [`theme`] - Theme preference resolution and palettes
//! * [`reports`] - The static research dataset
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Display models for research runs and reports
pub mod models;

/// Persisted UI preference store
pub mod prefs;

/// Static research dataset and lookup
pub mod reports;

/// Theme resolution and palettes
pub mod theme;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for text shaping and date handling
pub mod utils;

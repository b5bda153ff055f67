//! Display models for research runs and pain point reports
//!
//! These are plain records consumed by the rendering layer. All instances
//! come from the static dataset in [`crate::reports`]; nothing here is
//! fetched or persisted.

use ratatui::style::Color;

use crate::theme::Palette;

/// How strongly a pain point came through in the analyzed posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Severity dot color from the active palette.
    pub fn color(self, palette: &Palette) -> Color {
        match self {
            Self::High => palette.severity_high,
            Self::Medium => palette.severity_medium,
            Self::Low => palette.severity_low,
        }
    }

    /// Sort rank, most severe first.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

/// A Reddit post cited as evidence for a pain point.
#[derive(Debug, Clone)]
pub struct RedditPost {
    pub title: &'static str,
    pub upvotes: u32,
    pub excerpt: &'static str,
    pub url: &'static str,
}

/// One extracted pain point with its supporting evidence.
#[derive(Debug, Clone)]
pub struct PainPoint {
    pub id: &'static str,
    pub title: &'static str,
    pub severity: Severity,
    pub frequency: u32,
    pub top_quote: &'static str,
    pub categories: &'static [&'static str],
    pub ai_summary: &'static str,
    pub posts: &'static [RedditPost],
}

/// A past analysis as shown on the dashboard and history cards.
#[derive(Debug, Clone)]
pub struct ResearchRun {
    pub id: &'static str,
    pub subreddits: &'static [&'static str],
    pub date: &'static str,
    pub pain_count: u32,
    pub top_pain: &'static str,
}

/// The full saved report behind a research run.
#[derive(Debug, Clone)]
pub struct ResearchReport {
    pub subreddits: &'static [&'static str],
    pub date: &'static str,
    pub post_count: u32,
    pub time_range: &'static str,
    pub pain_points: &'static [PainPoint],
}

//! Chart time windows and sampling resolution

use crate::error::{RateEngineError, Result};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Historical chart window
///
/// Each window pairs a total span with a sampling interval chosen so the
/// resulting series stays at a bounded number of points regardless of span.
/// The one-day window samples hourly; all longer windows sample in whole
/// days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartWindow {
    OneDay,
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    FiveYears,
}

impl ChartWindow {
    /// Total span covered by the window
    pub fn span(&self) -> Duration {
        match self {
            ChartWindow::OneDay => Duration::days(1),
            ChartWindow::OneMonth => Duration::days(30),
            ChartWindow::ThreeMonths => Duration::days(90),
            ChartWindow::SixMonths => Duration::days(180),
            ChartWindow::OneYear => Duration::days(365),
            ChartWindow::FiveYears => Duration::days(1825),
        }
    }

    /// Sampling interval between consecutive points
    pub fn step(&self) -> Duration {
        match self {
            ChartWindow::OneDay => Duration::hours(1),
            ChartWindow::OneMonth => Duration::days(1),
            ChartWindow::ThreeMonths => Duration::days(2),
            ChartWindow::SixMonths => Duration::days(3),
            ChartWindow::OneYear => Duration::days(7),
            ChartWindow::FiveYears => Duration::days(30),
        }
    }

    /// Number of sample points, endpoints inclusive
    ///
    /// Offsets run from the window start to "now" in whole steps, so the
    /// most recent date is always included.
    pub fn point_count(&self) -> usize {
        (self.span().num_seconds() / self.step().num_seconds()) as usize + 1
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartWindow::OneDay => "1D",
            ChartWindow::OneMonth => "1M",
            ChartWindow::ThreeMonths => "3M",
            ChartWindow::SixMonths => "6M",
            ChartWindow::OneYear => "1Y",
            ChartWindow::FiveYears => "5Y",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "1D" => Ok(ChartWindow::OneDay),
            "1M" => Ok(ChartWindow::OneMonth),
            "3M" => Ok(ChartWindow::ThreeMonths),
            "6M" => Ok(ChartWindow::SixMonths),
            "1Y" => Ok(ChartWindow::OneYear),
            "5Y" => Ok(ChartWindow::FiveYears),
            _ => Err(RateEngineError::InvalidWindow(s.to_string())),
        }
    }

    /// All windows, shortest first
    pub fn all() -> Vec<ChartWindow> {
        vec![
            ChartWindow::OneDay,
            ChartWindow::OneMonth,
            ChartWindow::ThreeMonths,
            ChartWindow::SixMonths,
            ChartWindow::OneYear,
            ChartWindow::FiveYears,
        ]
    }
}

impl fmt::Display for ChartWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_and_steps() {
        assert_eq!(ChartWindow::OneMonth.span(), Duration::days(30));
        assert_eq!(ChartWindow::OneMonth.step(), Duration::days(1));
        assert_eq!(ChartWindow::OneYear.step(), Duration::days(7));
        assert_eq!(ChartWindow::OneDay.step(), Duration::hours(1));
        assert_eq!(ChartWindow::FiveYears.span(), Duration::days(1825));
    }

    #[test]
    fn test_point_counts() {
        assert_eq!(ChartWindow::OneDay.point_count(), 25);
        assert_eq!(ChartWindow::OneMonth.point_count(), 31);
        assert_eq!(ChartWindow::ThreeMonths.point_count(), 46);
        assert_eq!(ChartWindow::SixMonths.point_count(), 61);
        assert_eq!(ChartWindow::OneYear.point_count(), 53);
        assert_eq!(ChartWindow::FiveYears.point_count(), 61);
    }

    #[test]
    fn test_point_counts_bounded() {
        for window in ChartWindow::all() {
            let count = window.point_count();
            assert!(count >= 25 && count <= 180, "{} -> {}", window, count);
        }
    }

    #[test]
    fn test_window_from_str() {
        assert_eq!(ChartWindow::from_str("1M").unwrap(), ChartWindow::OneMonth);
        assert_eq!(ChartWindow::from_str("5y").unwrap(), ChartWindow::FiveYears);
        assert!(ChartWindow::from_str("2W").is_err());
    }

    #[test]
    fn test_window_display() {
        assert_eq!(ChartWindow::ThreeMonths.to_string(), "3M");
        assert_eq!(ChartWindow::OneDay.to_string(), "1D");
    }
}

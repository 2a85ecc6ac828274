//! Threshold signal table
//!
//! A fixed decision table over a single rate. Confidence does not scale with
//! distance from the thresholds.

use serde::Serialize;
use std::fmt;

use crate::config::Thresholds;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Buy,
    Hold,
    Wait,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Bullish,
    Neutral,
    Bearish,
    Unknown,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Buy => "BUY",
            Action::Hold => "HOLD",
            Action::Wait => "WAIT",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sentiment::Bullish => "bullish",
            Sentiment::Neutral => "neutral",
            Sentiment::Bearish => "bearish",
            Sentiment::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisSignal {
    pub signal: String, // "RATE_HIGH", "RATE_LOW", "RATE_STABLE", "NO_DATA"
    pub rate: f64,
    pub action: Action,
    pub sentiment: Sentiment,
    pub reasoning: String,
    pub confidence: f64,
}

/// Classify a rate against the thresholds.
///
/// Boundaries are inclusive on the neutral band. A zero, negative or
/// non-finite rate means no data and yields `WAIT` with zero confidence.
pub fn classify(rate: f64, thresholds: &Thresholds) -> AnalysisSignal {
    if !rate.is_finite() || rate <= 0.0 {
        return AnalysisSignal {
            signal: "NO_DATA".to_string(),
            rate: 0.0,
            action: Action::Wait,
            sentiment: Sentiment::Unknown,
            reasoning: "No rate available; cannot assess the market.".to_string(),
            confidence: 0.0,
        };
    }

    let (signal, action, sentiment, reasoning) = if rate > thresholds.bearish_above {
        (
            "RATE_HIGH",
            Action::Wait,
            Sentiment::Bearish,
            format!(
                "Rate {:.2} is above the {:.2} ceiling; naira is weak, wait for a pullback.",
                rate, thresholds.bearish_above
            ),
        )
    } else if rate < thresholds.bullish_below {
        (
            "RATE_LOW",
            Action::Buy,
            Sentiment::Bullish,
            format!(
                "Rate {:.2} is below the {:.2} floor; naira is strong, a good entry point.",
                rate, thresholds.bullish_below
            ),
        )
    } else {
        (
            "RATE_STABLE",
            Action::Hold,
            Sentiment::Neutral,
            format!(
                "Rate {:.2} is within the {:.2}-{:.2} band; no clear edge.",
                rate, thresholds.bullish_below, thresholds.bearish_above
            ),
        )
    };

    AnalysisSignal {
        signal: signal.to_string(),
        rate,
        action,
        sentiment,
        reasoning,
        confidence: thresholds.confidence,
    }
}

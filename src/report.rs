//! Console report for a single run.

use serde::Serialize;
use std::fmt::Write;

use crate::signal::AnalysisSignal;
use crate::source::types::RateQuote;

const RULE_WIDTH: usize = 50;

#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub quote: &'a RateQuote,
    /// `None` when no rate could be fetched
    pub analysis: Option<&'a AnalysisSignal>,
}

impl<'a> RunReport<'a> {
    pub fn new(quote: &'a RateQuote, analysis: Option<&'a AnalysisSignal>) -> Self {
        Self { quote, analysis }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "{}", banner())?;

        let quote = self.quote;
        if !quote.is_success() {
            writeln!(out)?;
            writeln!(out, "❌ Connection failed: no source returned a {} rate.", quote.symbol)?;
            writeln!(out, "   Check your network and try again.")?;
            return Ok(());
        }

        writeln!(out)?;
        writeln!(out, "💹 Current Rate:")?;
        writeln!(out, "  {}: {}", quote.symbol, format_naira(quote.price))?;
        writeln!(out, "  Source: {}", quote.source)?;
        writeln!(out, "  Time:   {}", quote.timestamp)?;

        if let Some(analysis) = self.analysis {
            writeln!(out)?;
            writeln!(out, "🤖 Analysis:")?;
            writeln!(out, "  Signal:     {}", analysis.signal)?;
            writeln!(out, "  Sentiment:  {}", analysis.sentiment)?;
            writeln!(out, "  Action:     {}", analysis.action)?;
            writeln!(out, "  Confidence: {:.0}%", analysis.confidence * 100.0)?;
            writeln!(out, "  Reasoning:  {}", analysis.reasoning)?;
        }

        writeln!(out)?;
        writeln!(out, "✅ Scan complete!")?;
        Ok(())
    }
}

pub fn banner() -> String {
    format!(
        "🇳🇬 Naira Rate Tracker v{}\n{}",
        env!("CARGO_PKG_VERSION"),
        "=".repeat(RULE_WIDTH)
    )
}

/// `1680.5` -> `₦1,680.50`
pub fn format_naira(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}₦{}.{}", sign, grouped, frac_part)
}

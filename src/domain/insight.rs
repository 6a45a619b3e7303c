//! Advisory records: AI insights, trading signals, trending ranks, and
//! trading pairs.
//!
//! Insights carry their confidence as a fraction in `[0, 1]` while trading
//! signals carry it as a percentage in `[0, 100]`. Both are stored as a
//! [`Confidence`] so consumers never need to know which scale a record came
//! from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TokenId;

/// A confidence score normalized to a fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    /// Builds a confidence from a fraction, clamped to `[0, 1]`.
    #[must_use]
    pub fn from_fraction(value: f64) -> Self {
        Self(clamp_unit(value))
    }

    /// Builds a confidence from a percentage, clamped to `[0, 100]`.
    #[must_use]
    pub fn from_percent(value: f64) -> Self {
        Self(clamp_unit(value / 100.0))
    }

    /// Returns the fraction in `[0, 1]`.
    #[must_use]
    pub const fn as_fraction(self) -> f64 {
        self.0
    }

    /// Returns the rounded percentage in `[0, 100]`.
    #[must_use]
    pub fn as_percent(self) -> u8 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let pct = (self.0 * 100.0).round() as u8;
        pct
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Kind of AI insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    /// Forecast of future price.
    PricePrediction,
    /// Social sentiment read.
    SentimentAnalysis,
    /// Risk flags.
    RiskAssessment,
    /// Trend detection.
    TrendAnalysis,
}

impl InsightType {
    /// Human-readable label (`"price prediction"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PricePrediction => "price prediction",
            Self::SentimentAnalysis => "sentiment analysis",
            Self::RiskAssessment => "risk assessment",
            Self::TrendAnalysis => "trend analysis",
        }
    }
}

/// Free-text AI commentary on a token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiInsight {
    /// Insight identifier.
    pub id: String,
    /// Token the insight refers to.
    pub token_id: TokenId,
    /// Kind of insight.
    pub insight_type: InsightType,
    /// Model confidence.
    pub confidence: Confidence,
    /// Commentary.
    pub content: String,
    /// Publication timestamp.
    pub created_at: DateTime<Utc>,
}

/// Direction of a trading signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalType {
    /// Open or add to a position.
    Buy,
    /// Reduce or close a position.
    Sell,
    /// Keep the current position.
    Hold,
}

/// Actionable AI trading signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiTradingSignal {
    /// Signal identifier.
    pub id: String,
    /// Token the signal refers to.
    pub token_id: TokenId,
    /// Direction.
    pub signal_type: SignalType,
    /// Model confidence.
    pub confidence: Confidence,
    /// Rationale.
    pub reason: String,
    /// Take-profit level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_price: Option<f64>,
    /// Stop-loss level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<f64>,
    /// Expected horizon (`"1-3 days"`).
    pub timeframe: String,
    /// Publication timestamp.
    pub created_at: DateTime<Utc>,
}

/// Social sentiment bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    /// Positive.
    Bullish,
    /// Negative.
    Bearish,
    /// Mixed.
    Neutral,
}

/// Entry of the social trending leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingToken {
    /// Ranked token.
    pub token_id: TokenId,
    /// Leaderboard position, 1-based.
    pub rank: u32,
    /// Score delta since the previous ranking.
    pub score_change: i32,
    /// Social mentions.
    pub mentions: u64,
    /// Sentiment bucket.
    pub sentiment: Sentiment,
    /// AI score in `[0, 100]`.
    pub ai_score: u8,
}

/// A quoted market between two tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingPair {
    /// Pair identifier (`"atom-usdt"`).
    pub id: String,
    /// Base token.
    pub base_token_id: TokenId,
    /// Base token symbol.
    pub base_symbol: String,
    /// Quote token; stablecoins are not listed in the token store.
    pub quote_token_id: TokenId,
    /// Quote token symbol.
    pub quote_symbol: String,
    /// Last price in quote units.
    pub price: f64,
    /// 24h change in percent.
    pub price_change_24h: f64,
    /// 24h volume in USD.
    pub volume_24h: f64,
    /// 24h high.
    pub high_24h: f64,
    /// 24h low.
    pub low_24h: f64,
    /// Pool liquidity in USD.
    pub liquidity: f64,
}

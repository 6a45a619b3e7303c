//! AI insight, signal, trending, and trading-pair DTOs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{AiInsight, AiTradingSignal, Sentiment, SignalType, TradingPair, TrendingToken};
use crate::view::format::{format_price, format_signed_percent, format_volume};

/// AI commentary on a token.
#[derive(Debug, Serialize, ToSchema)]
pub struct InsightDto {
    /// Insight identifier.
    pub id: String,
    /// Token the insight refers to.
    pub token_id: String,
    /// Readable kind (`"price prediction"`).
    pub insight_type: String,
    /// Confidence in percent.
    pub confidence: u8,
    /// Commentary.
    pub content: String,
    /// Publication timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<&AiInsight> for InsightDto {
    fn from(insight: &AiInsight) -> Self {
        Self {
            id: insight.id.clone(),
            token_id: insight.token_id.to_string(),
            insight_type: insight.insight_type.label().to_string(),
            confidence: insight.confidence.as_percent(),
            content: insight.content.clone(),
            created_at: insight.created_at,
        }
    }
}

/// AI trading signal.
#[derive(Debug, Serialize, ToSchema)]
pub struct SignalDto {
    /// Signal identifier.
    pub id: String,
    /// Token the signal refers to.
    pub token_id: String,
    /// `buy`, `sell`, or `hold`.
    pub signal_type: String,
    /// Confidence in percent.
    pub confidence: u8,
    /// Rationale.
    pub reason: String,
    /// Formatted take-profit level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_price: Option<String>,
    /// Formatted stop-loss level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<String>,
    /// Expected horizon.
    pub timeframe: String,
    /// Publication timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<&AiTradingSignal> for SignalDto {
    fn from(signal: &AiTradingSignal) -> Self {
        let signal_type = match signal.signal_type {
            SignalType::Buy => "buy",
            SignalType::Sell => "sell",
            SignalType::Hold => "hold",
        };
        Self {
            id: signal.id.clone(),
            token_id: signal.token_id.to_string(),
            signal_type: signal_type.to_string(),
            confidence: signal.confidence.as_percent(),
            reason: signal.reason.clone(),
            target_price: signal.target_price.map(format_price),
            stop_loss: signal.stop_loss.map(format_price),
            timeframe: signal.timeframe.clone(),
            created_at: signal.created_at,
        }
    }
}

/// Social trending leaderboard entry.
#[derive(Debug, Serialize, ToSchema)]
pub struct TrendingDto {
    /// Leaderboard position.
    pub rank: u32,
    /// Ranked token.
    pub token_id: String,
    /// Score delta since the previous ranking.
    pub score_change: i32,
    /// Social mentions.
    pub mentions: u64,
    /// `bullish`, `bearish`, or `neutral`.
    pub sentiment: String,
    /// AI score in `[0, 100]`.
    pub ai_score: u8,
}

impl From<&TrendingToken> for TrendingDto {
    fn from(entry: &TrendingToken) -> Self {
        let sentiment = match entry.sentiment {
            Sentiment::Bullish => "bullish",
            Sentiment::Bearish => "bearish",
            Sentiment::Neutral => "neutral",
        };
        Self {
            rank: entry.rank,
            token_id: entry.token_id.to_string(),
            score_change: entry.score_change,
            mentions: entry.mentions,
            sentiment: sentiment.to_string(),
            ai_score: entry.ai_score,
        }
    }
}

/// Quoted market.
#[derive(Debug, Serialize, ToSchema)]
pub struct PairDto {
    /// Pair identifier.
    pub id: String,
    /// Display name (`"ATOM/USDT"`).
    pub name: String,
    /// Base token.
    pub base_token_id: String,
    /// Quote token.
    pub quote_token_id: String,
    /// Last price.
    pub price: f64,
    /// Formatted price.
    pub price_display: String,
    /// Formatted 24h change.
    pub price_change_24h_display: String,
    /// Formatted 24h volume.
    pub volume_24h_display: String,
    /// 24h high.
    pub high_24h: f64,
    /// 24h low.
    pub low_24h: f64,
    /// Formatted liquidity.
    pub liquidity_display: String,
}

impl From<&TradingPair> for PairDto {
    fn from(pair: &TradingPair) -> Self {
        Self {
            id: pair.id.clone(),
            name: format!("{}/{}", pair.base_symbol, pair.quote_symbol),
            base_token_id: pair.base_token_id.to_string(),
            quote_token_id: pair.quote_token_id.to_string(),
            price: pair.price,
            price_display: format_price(pair.price),
            price_change_24h_display: format_signed_percent(pair.price_change_24h),
            volume_24h_display: format_volume(pair.volume_24h),
            high_24h: pair.high_24h,
            low_24h: pair.low_24h,
            liquidity_display: format_volume(pair.liquidity),
        }
    }
}

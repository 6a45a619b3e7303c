//! Built-in market data loaded at startup.
//!
//! Everything the explorer shows comes from here: six Cosmos tokens, four
//! pump rooms, two trading pairs, AI signals and insights, the social
//! trending list, and the demo user's portfolio.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{
    AiInsight, AiTradingSignal, Blockchain, Confidence, Holding, InsightType, PumpRoom, RoomId,
    Sentiment, SignalType, SocialLinks, Token, TokenId, TokenMetadata, TradingPair, TrendingToken,
    User,
};

/// Identifier of the demo account signed in by the auth stub.
pub const DEMO_USER_ID: &str = "user-1";

/// Complete seed data set.
#[derive(Debug, Clone)]
pub struct SeedData {
    /// Listed tokens, in display order.
    pub tokens: Vec<Token>,
    /// Pump rooms, in display order.
    pub rooms: Vec<PumpRoom>,
    /// Holdings of every seeded user.
    pub holdings: Vec<Holding>,
    /// AI commentary.
    pub insights: Vec<AiInsight>,
    /// AI trading signals.
    pub signals: Vec<AiTradingSignal>,
    /// Social trending leaderboard, by rank.
    pub trending: Vec<TrendingToken>,
    /// Quoted markets.
    pub pairs: Vec<TradingPair>,
    /// Account used by the sign-in stub.
    pub demo_user: User,
}

/// Builds the seed data set.
#[must_use]
pub fn load() -> SeedData {
    SeedData {
        tokens: tokens(),
        rooms: rooms(),
        holdings: holdings(),
        insights: insights(),
        signals: signals(),
        trending: trending(),
        pairs: pairs(),
        demo_user: demo_user(),
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    at(year, month, day, 0, 0)
}

fn link(url: &str) -> Option<String> {
    Some(url.to_string())
}

struct TokenRow {
    id: &'static str,
    name: &'static str,
    symbol: &'static str,
    description: &'static str,
    logo_url: &'static str,
    price: f64,
    change_24h: f64,
    change_7d: f64,
    market_cap: f64,
    volume_24h: f64,
    total_supply: f64,
    circulating_supply: f64,
    holders: u64,
    verified: bool,
    creator: &'static str,
    contract: &'static str,
    created_at: DateTime<Utc>,
    metadata: TokenMetadata,
}

impl TokenRow {
    fn build(self) -> Token {
        Token {
            id: TokenId::from(self.id),
            name: self.name.to_string(),
            symbol: self.symbol.to_string(),
            description: self.description.to_string(),
            logo_url: self.logo_url.to_string(),
            price: self.price,
            price_change_24h: self.change_24h,
            price_change_7d: self.change_7d,
            market_cap: self.market_cap,
            volume_24h: self.volume_24h,
            total_supply: self.total_supply,
            circulating_supply: self.circulating_supply,
            holders_count: self.holders,
            is_verified: self.verified,
            creator_id: self.creator.to_string(),
            contract_address: self.contract.to_string(),
            blockchain: Blockchain::Cosmos,
            created_at: self.created_at,
            updated_at: day(2024, 1, 15),
            metadata: self.metadata,
        }
    }
}

fn tokens() -> Vec<Token> {
    vec![
        TokenRow {
            id: "atom",
            name: "Cosmos Hub",
            symbol: "ATOM",
            description: "The native token of the Cosmos Hub, the first blockchain in the Cosmos ecosystem.",
            logo_url: "https://cryptologos.cc/logos/cosmos-atom-logo.png",
            price: 8.45,
            change_24h: 5.2,
            change_7d: -2.1,
            market_cap: 3_200_000_000.0,
            volume_24h: 180_000_000.0,
            total_supply: 390_688_369.0,
            circulating_supply: 390_688_369.0,
            holders: 892_450,
            verified: true,
            creator: "cosmos-team",
            contract: "cosmos1...",
            created_at: day(2019, 3, 13),
            metadata: TokenMetadata {
                website: link("https://cosmos.network"),
                twitter: link("https://twitter.com/cosmos"),
                telegram: link("https://t.me/cosmosproject"),
                discord: None,
            },
        }
        .build(),
        TokenRow {
            id: "osmo",
            name: "Osmosis",
            symbol: "OSMO",
            description: "The native token of Osmosis, an advanced AMM protocol built on Cosmos.",
            logo_url: "https://cryptologos.cc/logos/osmosis-osmo-logo.png",
            price: 0.805,
            change_24h: -3.8,
            change_7d: 8.5,
            market_cap: 850_000_000.0,
            volume_24h: 45_000_000.0,
            total_supply: 1_000_000_000.0,
            circulating_supply: 750_000_000.0,
            holders: 245_120,
            verified: true,
            creator: "osmosis-team",
            contract: "osmo1...",
            created_at: day(2021, 6, 19),
            metadata: TokenMetadata {
                website: link("https://osmosis.zone"),
                twitter: link("https://twitter.com/osmosiszone"),
                ..TokenMetadata::default()
            },
        }
        .build(),
        TokenRow {
            id: "juno",
            name: "Juno Network",
            symbol: "JUNO",
            description: "A sovereign public blockchain in the Cosmos ecosystem focused on smart contracts.",
            logo_url: "https://cryptologos.cc/logos/juno-network-juno-logo.png",
            price: 0.32,
            change_24h: 12.7,
            change_7d: -5.3,
            market_cap: 320_000_000.0,
            volume_24h: 15_000_000.0,
            total_supply: 185_562_268.0,
            circulating_supply: 185_562_268.0,
            holders: 98_340,
            verified: true,
            creator: "juno-team",
            contract: "juno1...",
            created_at: day(2021, 10, 1),
            metadata: TokenMetadata {
                website: link("https://junonetwork.io"),
                twitter: link("https://twitter.com/JunoNetwork"),
                ..TokenMetadata::default()
            },
        }
        .build(),
        TokenRow {
            id: "secret",
            name: "Secret Network",
            symbol: "SCRT",
            description: "The first blockchain with customizable privacy for smart contracts.",
            logo_url: "https://cryptologos.cc/logos/secret-scrt-logo.png",
            price: 0.28,
            change_24h: 7.9,
            change_7d: 15.2,
            market_cap: 180_000_000.0,
            volume_24h: 8_500_000.0,
            total_supply: 190_865_386.0,
            circulating_supply: 190_865_386.0,
            holders: 76_210,
            verified: true,
            creator: "secret-team",
            contract: "secret1...",
            created_at: day(2020, 2, 13),
            metadata: TokenMetadata {
                website: link("https://scrt.network"),
                twitter: link("https://twitter.com/SecretNetwork"),
                ..TokenMetadata::default()
            },
        }
        .build(),
        TokenRow {
            id: "akash",
            name: "Akash Network",
            symbol: "AKT",
            description: "Decentralized cloud computing marketplace built on Cosmos.",
            logo_url: "https://cryptologos.cc/logos/akash-network-akt-logo.png",
            price: 2.15,
            change_24h: -1.5,
            change_7d: 22.8,
            market_cap: 420_000_000.0,
            volume_24h: 12_000_000.0,
            total_supply: 388_539_008.0,
            circulating_supply: 388_539_008.0,
            holders: 61_870,
            verified: true,
            creator: "akash-team",
            contract: "akash1...",
            created_at: day(2020, 9, 25),
            metadata: TokenMetadata {
                website: link("https://akash.network"),
                twitter: link("https://twitter.com/akashnet_"),
                ..TokenMetadata::default()
            },
        }
        .build(),
        TokenRow {
            id: "luna-quantum",
            name: "Luna Quantum",
            symbol: "LUNAQ",
            description: "Revolutionary quantum-powered DeFi token with AI trading capabilities.",
            logo_url: "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=100&h=100&fit=crop&crop=center",
            price: 0.0045,
            change_24h: 156.7,
            change_7d: 89.2,
            market_cap: 4_500_000.0,
            volume_24h: 2_800_000.0,
            total_supply: 1_000_000_000.0,
            circulating_supply: 850_000_000.0,
            holders: 3_847,
            verified: false,
            creator: "quantum-dev",
            contract: "cosmos1quantum...",
            created_at: day(2024, 1, 10),
            metadata: TokenMetadata {
                website: link("https://lunaquantum.io"),
                twitter: link("https://twitter.com/lunaquantum"),
                telegram: link("https://t.me/lunaquantum"),
                discord: None,
            },
        }
        .build(),
    ]
}

struct RoomRow {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    image_url: &'static str,
    token_id: &'static str,
    creator: &'static str,
    target: f64,
    invested: f64,
    members: u64,
    end_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
    tags: &'static [&'static str],
    social_links: SocialLinks,
}

impl RoomRow {
    fn build(self) -> PumpRoom {
        PumpRoom {
            id: RoomId::from(self.id),
            name: self.name.to_string(),
            description: self.description.to_string(),
            image_url: self.image_url.to_string(),
            token_id: TokenId::from(self.token_id),
            creator_id: self.creator.to_string(),
            target_amount: self.target,
            total_invested: self.invested,
            member_count: self.members,
            is_active: true,
            end_date: self.end_date,
            created_at: self.created_at,
            updated_at: day(2024, 1, 15),
            tags: self.tags.iter().map(|t| (*t).to_string()).collect(),
            social_links: self.social_links,
        }
    }
}

fn rooms() -> Vec<PumpRoom> {
    vec![
        RoomRow {
            id: "room-1",
            name: "ATOM to the Moon 🚀",
            description: "Join us as we pump ATOM to new all-time highs! Strong fundamentals, great team, and massive potential in the Cosmos ecosystem.",
            image_url: "https://images.unsplash.com/photo-1640340434855-6084b1f4901c?w=400&h=300&fit=crop",
            token_id: "atom",
            creator: "user-1",
            target: 100_000.0,
            invested: 67_500.0,
            members: 1247,
            end_date: day(2024, 2, 15),
            created_at: day(2024, 1, 10),
            tags: &["cosmos", "defi", "staking"],
            social_links: SocialLinks {
                telegram: link("https://t.me/atomtothemoon"),
                discord: link("https://discord.gg/atomtothemoon"),
                twitter: None,
            },
        }
        .build(),
        RoomRow {
            id: "room-2",
            name: "Osmosis DeFi Revolution",
            description: "The future of AMM is here! OSMO is revolutionizing DeFi on Cosmos. Join our community of believers and lets ride this wave together.",
            image_url: "https://images.unsplash.com/photo-1639762681485-074b7f938ba0?w=400&h=300&fit=crop",
            token_id: "osmo",
            creator: "user-2",
            target: 250_000.0,
            invested: 89_200.0,
            members: 892,
            end_date: day(2024, 2, 20),
            created_at: day(2024, 1, 8),
            tags: &["osmosis", "amm", "liquidity"],
            social_links: SocialLinks {
                telegram: link("https://t.me/osmosisdefi"),
                twitter: link("https://twitter.com/osmosisdefi"),
                discord: None,
            },
        }
        .build(),
        RoomRow {
            id: "room-3",
            name: "Luna Quantum Early Adopters",
            description: "Get in early on the next 1000x gem! Luna Quantum combines AI and quantum computing for the ultimate DeFi experience.",
            image_url: "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=400&h=300&fit=crop",
            token_id: "luna-quantum",
            creator: "user-3",
            target: 50_000.0,
            invested: 34_750.0,
            members: 2156,
            end_date: day(2024, 1, 25),
            created_at: day(2024, 1, 12),
            tags: &["quantum", "ai", "moonshot"],
            social_links: SocialLinks {
                telegram: link("https://t.me/lunaquantum"),
                discord: link("https://discord.gg/lunaquantum"),
                twitter: link("https://twitter.com/lunaquantum"),
            },
        }
        .build(),
        RoomRow {
            id: "room-4",
            name: "Secret Network Privacy Bulls",
            description: "Privacy is the future! SCRT is leading the charge in private smart contracts. Join us as we accumulate for the next bull run.",
            image_url: "https://images.unsplash.com/photo-1614064641938-3bbee52942c7?w=400&h=300&fit=crop",
            token_id: "secret",
            creator: "user-4",
            target: 75_000.0,
            invested: 23_400.0,
            members: 567,
            end_date: day(2024, 2, 10),
            created_at: day(2024, 1, 5),
            tags: &["privacy", "smart-contracts", "secret"],
            social_links: SocialLinks {
                telegram: link("https://t.me/secretnetwork"),
                ..SocialLinks::default()
            },
        }
        .build(),
    ]
}

fn holding(
    n: u32,
    token: &str,
    balance: f64,
    avg_buy_price: f64,
    total_invested: f64,
    unrealized_pnl: f64,
    realized_pnl: f64,
) -> Holding {
    Holding {
        id: format!("holding-{n}"),
        user_id: DEMO_USER_ID.to_string(),
        token_id: TokenId::from(token),
        balance,
        avg_buy_price,
        total_invested,
        unrealized_pnl,
        realized_pnl,
        created_at: day(2024, 1, 1),
        updated_at: day(2024, 1, 15),
    }
}

fn holdings() -> Vec<Holding> {
    vec![
        holding(1, "atom", 1250.5, 7.85, 9816.43, 759.25, 0.0),
        holding(2, "osmo", 5420.8, 0.92, 4987.14, -621.88, 125.50),
        holding(3, "juno", 8750.2, 0.28, 2450.06, 350.02, 0.0),
    ]
}

fn insight(
    n: u32,
    token: &str,
    insight_type: InsightType,
    confidence: f64,
    content: &str,
    created_at: DateTime<Utc>,
) -> AiInsight {
    AiInsight {
        id: format!("insight-{n}"),
        token_id: TokenId::from(token),
        insight_type,
        confidence: Confidence::from_fraction(confidence),
        content: content.to_string(),
        created_at,
    }
}

fn insights() -> Vec<AiInsight> {
    vec![
        insight(
            1,
            "atom",
            InsightType::PricePrediction,
            0.82,
            "Staking inflows and rising on-chain activity point to a retest of the $9.20 resistance within the week.",
            at(2024, 1, 15, 11, 0),
        ),
        insight(
            2,
            "luna-quantum",
            InsightType::SentimentAnalysis,
            0.91,
            "Social volume up sharply in the last 24h with overwhelmingly positive tone across Telegram and X.",
            at(2024, 1, 15, 10, 45),
        ),
        insight(
            3,
            "luna-quantum",
            InsightType::RiskAssessment,
            0.77,
            "Unverified contract with concentrated holder distribution. Position sizing should reflect elevated risk.",
            at(2024, 1, 15, 10, 20),
        ),
        insight(
            4,
            "osmo",
            InsightType::TrendAnalysis,
            0.68,
            "Price is consolidating inside a narrowing range after a two-week decline; breakout direction unclear.",
            at(2024, 1, 15, 9, 50),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn signal(
    n: u32,
    token: &str,
    signal_type: SignalType,
    confidence: f64,
    reason: &str,
    target_price: Option<f64>,
    stop_loss: Option<f64>,
    timeframe: &str,
    created_at: DateTime<Utc>,
) -> AiTradingSignal {
    AiTradingSignal {
        id: format!("signal-{n}"),
        token_id: TokenId::from(token),
        signal_type,
        confidence: Confidence::from_percent(confidence),
        reason: reason.to_string(),
        target_price,
        stop_loss,
        timeframe: timeframe.to_string(),
        created_at,
    }
}

fn signals() -> Vec<AiTradingSignal> {
    vec![
        signal(
            1,
            "atom",
            SignalType::Buy,
            87.0,
            "Strong bullish momentum detected with increasing volume and positive sentiment analysis",
            Some(9.20),
            Some(7.80),
            "1-3 days",
            at(2024, 1, 15, 10, 30),
        ),
        signal(
            2,
            "luna-quantum",
            SignalType::Buy,
            94.0,
            "Quantum AI analysis shows massive accumulation by smart money. Technical breakout imminent.",
            Some(0.0089),
            Some(0.0035),
            "2-5 days",
            at(2024, 1, 15, 9, 15),
        ),
        signal(
            3,
            "osmo",
            SignalType::Hold,
            72.0,
            "Consolidation phase detected. Wait for clear direction before entering new positions.",
            None,
            None,
            "1-2 weeks",
            at(2024, 1, 15, 8, 45),
        ),
    ]
}

fn trending() -> Vec<TrendingToken> {
    [
        ("luna-quantum", 45, 2847, Sentiment::Bullish, 94),
        ("atom", 23, 1956, Sentiment::Bullish, 87),
        ("secret", 18, 1234, Sentiment::Bullish, 79),
        ("akash", 12, 987, Sentiment::Neutral, 68),
        ("osmo", -8, 756, Sentiment::Neutral, 62),
    ]
    .into_iter()
    .zip(1u32..)
    .map(
        |((token, score_change, mentions, sentiment, ai_score), rank)| TrendingToken {
            token_id: TokenId::from(token),
            rank,
            score_change,
            mentions,
            sentiment,
            ai_score,
        },
    )
    .collect()
}

fn pairs() -> Vec<TradingPair> {
    let usdt = |id: &str, base: &str, symbol: &str| TradingPair {
        id: id.to_string(),
        base_token_id: TokenId::from(base),
        base_symbol: symbol.to_string(),
        quote_token_id: TokenId::from("usdt"),
        quote_symbol: "USDT".to_string(),
        price: 0.0,
        price_change_24h: 0.0,
        volume_24h: 0.0,
        high_24h: 0.0,
        low_24h: 0.0,
        liquidity: 0.0,
    };
    vec![
        TradingPair {
            price: 8.45,
            price_change_24h: 5.2,
            volume_24h: 180_000_000.0,
            high_24h: 8.67,
            low_24h: 7.98,
            liquidity: 45_000_000.0,
            ..usdt("atom-usdt", "atom", "ATOM")
        },
        TradingPair {
            price: 0.805,
            price_change_24h: -3.8,
            volume_24h: 45_000_000.0,
            high_24h: 0.847,
            low_24h: 0.782,
            liquidity: 12_000_000.0,
            ..usdt("osmo-usdt", "osmo", "OSMO")
        },
    ]
}

fn demo_user() -> User {
    User {
        id: DEMO_USER_ID.to_string(),
        email: "trader@quantumx.exchange".to_string(),
        display_name: Some("Quantum Trader".to_string()),
        wallet_address: Some("cosmos1qx7trader9demo4wallet".to_string()),
        is_verified: true,
        created_at: day(2023, 11, 2),
        updated_at: day(2024, 1, 15),
    }
}

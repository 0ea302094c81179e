use serde::{Deserialize, Serialize};

/// One leaderboard entry. `author_id` is the unique key; the remote API
/// returns these pre-sorted by descending influence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Influencer {
    pub author_id: String,
    pub followers: u64,
    pub engagement: i64,
    pub influence_score: f64,
    pub sentiment: f64,
    pub message_count: u32,
    pub last_updated: String,
}

/// `/api/influencers` wraps the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfluencerPayload {
    pub influencers: Vec<Influencer>,
}

impl Influencer {
    /// Leaderboard sentiment bands (±0.3 / ±0.5 cutoffs).
    pub fn sentiment_label(&self) -> &'static str {
        if self.sentiment > 0.5 {
            "Very Bullish"
        } else if self.sentiment > 0.3 {
            "Bullish"
        } else if self.sentiment < -0.5 {
            "Very Bearish"
        } else if self.sentiment < -0.3 {
            "Bearish"
        } else {
            "Neutral"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_sentiment(sentiment: f64) -> Influencer {
        Influencer {
            author_id: "x".into(),
            followers: 0,
            engagement: 0,
            influence_score: 0.0,
            sentiment,
            message_count: 0,
            last_updated: String::new(),
        }
    }

    #[test]
    fn test_sentiment_bands() {
        assert_eq!(with_sentiment(0.6).sentiment_label(), "Very Bullish");
        assert_eq!(with_sentiment(0.4).sentiment_label(), "Bullish");
        assert_eq!(with_sentiment(0.0).sentiment_label(), "Neutral");
        assert_eq!(with_sentiment(-0.4).sentiment_label(), "Bearish");
        assert_eq!(with_sentiment(-0.6).sentiment_label(), "Very Bearish");
        // Cutoffs themselves stay neutral-side
        assert_eq!(with_sentiment(0.3).sentiment_label(), "Neutral");
        assert_eq!(with_sentiment(-0.3).sentiment_label(), "Neutral");
    }
}

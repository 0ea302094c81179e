pub struct DemoInfluencer {
    pub author_id: &'static str,
    pub followers: u64,
    pub base_engagement: i64,
}

pub struct DemoResources {
    pub influencers: &'static [DemoInfluencer],
    pub phrases: &'static [&'static str],
    pub initial_phrase: &'static str,
    pub chat_answer: &'static str,
}

pub struct DemoConfig {
    pub resources: DemoResources,
}

pub const DEMO: DemoConfig = DemoConfig {
    resources: DemoResources {
        // Base roster, already in descending influence order.
        influencers: &[
            DemoInfluencer { author_id: "crypto_whale_1", followers: 500_000, base_engagement: 15_000 },
            DemoInfluencer { author_id: "degen_trader_2", followers: 250_000, base_engagement: 8_000 },
            DemoInfluencer { author_id: "nft_guru_3", followers: 150_000, base_engagement: 5_000 },
            DemoInfluencer { author_id: "defi_master_4", followers: 120_000, base_engagement: 4_000 },
            DemoInfluencer { author_id: "moon_hunter_5", followers: 100_000, base_engagement: 3_500 },
            DemoInfluencer { author_id: "alpha_seeker_6", followers: 80_000, base_engagement: 2_800 },
            DemoInfluencer { author_id: "chart_wizard_7", followers: 75_000, base_engagement: 2_500 },
            DemoInfluencer { author_id: "token_analyst_8", followers: 60_000, base_engagement: 2_000 },
            DemoInfluencer { author_id: "yield_farmer_9", followers: 50_000, base_engagement: 1_800 },
            DemoInfluencer { author_id: "gem_finder_10", followers: 45_000, base_engagement: 1_500 },
        ],
        phrases: &[
            "moon soon",
            "dev based",
            "chart cooking",
            "fud detected",
            "accumulation",
            "breakout",
            "liquidity grab",
            "wagmi",
            "ngmi",
            "send it",
        ],
        initial_phrase: "waiting for signal...",
        chat_answer: "I'm currently in demo mode. The pulse score is tracking market sentiment in real-time. Try asking about specific trends or check the dashboard for live metrics!",
    },
};

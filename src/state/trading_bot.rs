use crate::state::field::FieldSpec;
use crate::state::step::StepSpec;

pub fn steps() -> Vec<StepSpec> {
    vec![
        step_risk_profile(),
        step_trading_strategy(),
        step_technical_parameters(),
        step_advanced_settings(),
    ]
}

// ── Step 1: Risk profile ─────────────────────────────────────────────────────

fn step_risk_profile() -> StepSpec {
    StepSpec::builder("Risk Profile")
        .field(
            FieldSpec::single_choice("riskTolerance", "Risk Tolerance")
                .option("conservative", "Conservative (1-2% per trade)")
                .option("moderate", "Moderate (3-5% per trade)")
                .option("aggressive", "Aggressive (6-10% per trade)"),
        )
        .field(
            FieldSpec::numeric_text("maxLossPerTrade", "Maximum Loss Per Trade (%)")
                .with_placeholder("Enter percentage"),
        )
        .field(
            FieldSpec::numeric_text("dailyLossLimit", "Daily Loss Limit (SOL)")
                .with_placeholder("Enter amount in SOL"),
        )
        .build()
}

// ── Step 2: Trading strategy ─────────────────────────────────────────────────

fn step_trading_strategy() -> StepSpec {
    StepSpec::builder("Trading Strategy")
        .field(
            FieldSpec::multi_choice("tradingGoals", "Trading Goals")
                .option("snipe", "Snipe New Token Launches")
                .option("dips", "Buy Price Dips")
                .option("trend", "Follow Market Trends")
                .option("whale", "Mirror Whale Movements")
                .option("momentum", "Trade on Price Momentum")
                .option("volume", "Track Volume Spikes")
                .option("arbitrage", "Cross-DEX Arbitrage")
                .option("breakout", "Trade Breakout Patterns")
                .option("resistance", "Buy at Support Levels"),
        )
        .build()
}

// ── Step 3: Technical parameters ─────────────────────────────────────────────

fn step_technical_parameters() -> StepSpec {
    StepSpec::builder("Technical Parameters")
        .field(
            FieldSpec::numeric_text("stopLoss", "Stop-Loss (%)")
                .with_placeholder("Enter percentage"),
        )
        .field(
            FieldSpec::numeric_text("takeProfit", "Take-Profit (%)")
                .with_placeholder("Enter percentage"),
        )
        .field(FieldSpec::boolean("trailingStop", "Use Trailing Stop"))
        .build()
}

// ── Step 4: Advanced settings ────────────────────────────────────────────────

fn step_advanced_settings() -> StepSpec {
    StepSpec::builder("Advanced Settings")
        .field(FieldSpec::boolean("whaleTracking", "Track Whale Wallets"))
        .field(
            FieldSpec::numeric_text("whaleMinimumAmount", "Minimum Whale Transaction (SOL)")
                .with_placeholder("Enter amount in SOL")
                .depends_on("whaleTracking"),
        )
        .field(FieldSpec::boolean("snipeNewTokens", "Snipe New Token Launches"))
        .field(FieldSpec::boolean("buyDips", "Buy Price Dips"))
        .field(
            FieldSpec::numeric_text("dipPercentage", "Dip Percentage Threshold")
                .with_placeholder("Enter percentage")
                .depends_on("buyDips"),
        )
        .build()
}

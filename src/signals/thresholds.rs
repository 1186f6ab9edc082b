//! Rule thresholds and score weights

/// Fixed thresholds the analyzer compares snapshot readings against.
pub struct SignalThresholds;

impl SignalThresholds {
    pub const RSI_OVERSOLD: f64 = 30.0;
    pub const RSI_OVERBOUGHT: f64 = 70.0;
    pub const RSI_MOMENTUM_LOW: f64 = 50.0;
    pub const RSI_MOMENTUM_HIGH: f64 = 70.0;

    pub const BB_LOWER_ZONE: f64 = 20.0;
    pub const BB_UPPER_ZONE: f64 = 80.0;
    pub const BB_SQUEEZE_WIDTH: f64 = 10.0;

    pub const HIGH_VOLUME_RATIO: f64 = 1.5;

    /// Minimum summed score for a strong-buy candidate.
    pub const STRONG_BUY_SCORE: f64 = 3.0;
    /// Nominal top of the score scale, used when reporting.
    pub const MAX_SCORE: f64 = 6.0;
}

/// Score contributed by each rule.
pub struct SignalWeights;

impl SignalWeights {
    pub const STRONG_UPTREND: f64 = 1.0;
    pub const SHORT_TERM_UPTREND: f64 = 0.5;
    pub const ABOVE_LONG_TERM_AVERAGE: f64 = 1.0;
    pub const RSI_MOMENTUM: f64 = 1.0;
    pub const RSI_OVERSOLD: f64 = 1.5;
    pub const RSI_OVERBOUGHT: f64 = -0.5;
    pub const MACD_BULLISH: f64 = 1.0;
    pub const NEAR_LOWER_BAND: f64 = 1.5;
    pub const NEAR_UPPER_BAND: f64 = -0.5;
    pub const VOLATILITY_SQUEEZE: f64 = 0.5;
    pub const HIGH_VOLUME: f64 = 1.0;
}

use serde::{Deserialize, Serialize};

use crate::utils::maths_utils::round_2dp;

/// One point on the live chart: a wall-clock label plus the walked price and
/// its sentiment reading. Immutable once constructed; lives only inside the
/// rolling buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: String,
    pub price: f64,
    pub sentiment: f64,
}

impl Sample {
    /// Rounds to 2dp on construction. Downstream consumers compare against
    /// the stored values, so nothing holds the raw walk output.
    pub fn new(time: String, price: f64, sentiment: f64) -> Self {
        Self {
            time,
            price: round_2dp(price),
            sentiment: round_2dp(sentiment),
        }
    }
}

//! Story DNA: the narrative's tonal axes.

use serde::{Deserialize, Serialize};

/// Three tonal axes, each nominally 0..=100.
///
/// Low values lean toward the first pole of each axis name (order, hope, trust).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryDna {
    /// 0 = order, 100 = chaos
    pub order_chaos: i32,
    /// 0 = hope, 100 = despair
    pub hope_despair: i32,
    /// 0 = trust, 100 = betrayal
    pub trust_betrayal: i32,
}

impl Default for StoryDna {
    fn default() -> Self {
        Self {
            order_chaos: 50,
            hope_despair: 50,
            trust_betrayal: 50,
        }
    }
}

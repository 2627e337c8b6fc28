use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Index of an agent at the table. Agents of an `n`-agent instance are `0..n`.
pub type AgentId = u16;

/// Cardinal utility one agent derives from sitting next to another.
pub type Utility = f64;

/// Direction of the welfare search.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    Maximize,
    Minimize,
}

impl Objective {
    /// True when `candidate` is at least as good as `current` under this objective.
    #[inline(always)]
    pub fn accepts_outright(self, candidate: Utility, current: Utility) -> bool {
        match self {
            Objective::Maximize => candidate >= current,
            Objective::Minimize => candidate <= current,
        }
    }

    /// Signed improvement of `delta` (candidate minus current) under this objective.
    #[inline(always)]
    pub fn gain(self, delta: Utility) -> Utility {
        match self {
            Objective::Maximize => delta,
            Objective::Minimize => -delta,
        }
    }
}

/// Spreadsheet-style label: A, B, ..., Z, AA, AB, ...
pub fn agent_label(agent: AgentId) -> String {
    let mut i = agent as usize;
    let mut out = Vec::new();
    loop {
        out.push(b'A' + (i % 26) as u8);
        if i < 26 {
            break;
        }
        i = i / 26 - 1;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

pub mod store;
pub mod types;

pub use store::RewardLedger;
pub use types::{ClaimOutcome, EarningsSummary, RewardEvent};

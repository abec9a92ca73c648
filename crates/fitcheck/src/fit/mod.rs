//! Fit judgment: ease per body part, bucketed into ordinal levels.

mod judge;
mod levels;

pub use judge::{FitJudgment, SizeRecommendation, judge_fit, recommend_size};
pub use levels::{EaseThresholds, FitLevel, FitPart, classify_ease};

mod daily_plan;
mod recommendations;
mod summary;
pub mod views;

pub use daily_plan::create_daily_plan;
pub use recommendations::generate_recommendations;
pub use summary::{assess, generate_comprehensive_report, ComprehensiveAssessment};

#[cfg(test)]
pub(crate) use recommendations::ALCOHOL_RECOMMENDATION;
#[cfg(test)]
pub(crate) use summary::build_follow_up;

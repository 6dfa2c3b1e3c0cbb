pub mod community;
pub mod policy;
pub mod score;

pub use community::simulate_community;
pub use policy::{apply_policy_boost, policy_impact, project_baseline, relative_impact, PolicyBoost};
pub use score::compute_score;

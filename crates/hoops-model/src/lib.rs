pub mod columns;
pub mod error;
pub mod join;
pub mod options;

pub use error::{PlanError, Result};
pub use join::JoinHow;
pub use options::{FeaturePlan, PerUnitPlan, RollingPlan};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_is_valid() {
        let plan = FeaturePlan::default();
        plan.validate().expect("default plan validates");
        assert!(plan.per_unit.is_some());
        assert_eq!(plan.rolling.len(), 2);
    }

    #[test]
    fn plan_serializes() {
        let plan = FeaturePlan::default();
        let json = serde_json::to_string(&plan).expect("serialize plan");
        let round: FeaturePlan = serde_json::from_str(&json).expect("deserialize plan");
        assert_eq!(round, plan);
    }
}

mod enquiry;
mod meal_plan;
mod projection;
mod search;

pub use enquiry::{CorporateEnquiry, CorporateMealType, MIN_CORPORATE_EMPLOYEES};
pub use meal_plan::{DietaryPreference, HealthGoal, MealPlan, MealPlanEntry, MealPlanRequest, MealSlot};
pub use projection::{
    FitnessGoal, Gender, PlanName, Projection, ProjectionForm, ProjectionInput, ProjectionResult,
    INVALID_PROJECTION_INPUT,
};
pub use search::SearchAnswer;

/// Lowercase and drop everything but letters and digits, so that
/// "High-Protein", "high protein" and "HIGH_PROTEIN" compare equal.
pub(crate) fn normalize_choice(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_choice() {
        assert_eq!(normalize_choice("High-Protein"), "highprotein");
        assert_eq!(normalize_choice(" Weight Loss "), "weightloss");
        assert_eq!(normalize_choice("MONTHLY_MOTIVATOR"), "monthlymotivator");
        assert_eq!(normalize_choice(""), "");
    }
}

use serde::{Deserialize, Serialize};

use super::normalize_choice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl std::fmt::Display for MealSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MealSlot::Breakfast => write!(f, "Breakfast"),
            MealSlot::Lunch => write!(f, "Lunch"),
            MealSlot::Dinner => write!(f, "Dinner"),
        }
    }
}

impl std::str::FromStr for MealSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(MealSlot::Breakfast),
            "lunch" => Ok(MealSlot::Lunch),
            "dinner" => Ok(MealSlot::Dinner),
            _ => Err(format!("Invalid meal slot: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanEntry {
    pub slot: MealSlot,
    pub dish_name: String,
    pub rationale: String,
}

/// A parsed one-day plan. Never empty when produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    pub entries: Vec<MealPlanEntry>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "String")]
pub enum DietaryPreference {
    #[default]
    Any,
    Vegetarian,
    HighProtein,
    Keto,
}

impl std::fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DietaryPreference::Any => write!(f, "Any"),
            DietaryPreference::Vegetarian => write!(f, "Vegetarian"),
            DietaryPreference::HighProtein => write!(f, "High-Protein"),
            DietaryPreference::Keto => write!(f, "Keto"),
        }
    }
}

impl std::str::FromStr for DietaryPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "any" | "" => Ok(DietaryPreference::Any),
            "vegetarian" | "veg" => Ok(DietaryPreference::Vegetarian),
            "highprotein" => Ok(DietaryPreference::HighProtein),
            "keto" => Ok(DietaryPreference::Keto),
            _ => Err(format!("Invalid dietary preference: {}", s)),
        }
    }
}

impl TryFrom<String> for DietaryPreference {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "String")]
pub enum HealthGoal {
    #[default]
    WeightLoss,
    MuscleGain,
    MaintainHealth,
}

impl std::fmt::Display for HealthGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthGoal::WeightLoss => write!(f, "Weight Loss"),
            HealthGoal::MuscleGain => write!(f, "Muscle Gain"),
            HealthGoal::MaintainHealth => write!(f, "Maintain Health"),
        }
    }
}

impl std::str::FromStr for HealthGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "weightloss" | "loss" => Ok(HealthGoal::WeightLoss),
            "musclegain" | "gain" => Ok(HealthGoal::MuscleGain),
            "maintainhealth" | "maintain" => Ok(HealthGoal::MaintainHealth),
            _ => Err(format!("Invalid health goal: {}", s)),
        }
    }
}

impl TryFrom<String> for HealthGoal {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Form fields of the meal planner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanRequest {
    #[serde(default)]
    pub dietary_preference: DietaryPreference,
    #[serde(default)]
    pub health_goal: HealthGoal,
    #[serde(default)]
    pub nutritional_goals: Option<String>,
    #[serde(default)]
    pub dislikes: Option<String>,
}

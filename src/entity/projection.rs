use serde::{Deserialize, Serialize};

use super::normalize_choice;
use crate::error::{Result, TaazaError};

pub const INVALID_PROJECTION_INPUT: &str = "Please fill in all fields with valid numbers.";

/// Subscription plans the projection may recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum PlanName {
    #[serde(rename = "Weekly Warrior")]
    WeeklyWarrior,
    #[serde(rename = "Monthly Motivator")]
    MonthlyMotivator,
}

impl std::fmt::Display for PlanName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanName::WeeklyWarrior => write!(f, "Weekly Warrior"),
            PlanName::MonthlyMotivator => write!(f, "Monthly Motivator"),
        }
    }
}

impl std::str::FromStr for PlanName {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "weeklywarrior" | "weekly" => Ok(PlanName::WeeklyWarrior),
            "monthlymotivator" | "monthly" => Ok(PlanName::MonthlyMotivator),
            _ => Err(format!("Invalid plan name: {}", s)),
        }
    }
}

impl TryFrom<String> for PlanName {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessGoal {
    Loss,
    Gain,
    Maintain,
}

impl FitnessGoal {
    pub fn label(&self) -> &'static str {
        match self {
            FitnessGoal::Loss => "Weight Loss",
            FitnessGoal::Gain => "Muscle Gain",
            FitnessGoal::Maintain => "Maintain Weight",
        }
    }
}

impl std::fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitnessGoal::Loss => write!(f, "loss"),
            FitnessGoal::Gain => write!(f, "gain"),
            FitnessGoal::Maintain => write!(f, "maintain"),
        }
    }
}

impl std::str::FromStr for FitnessGoal {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "loss" | "weightloss" => Ok(FitnessGoal::Loss),
            "gain" | "musclegain" => Ok(FitnessGoal::Gain),
            "maintain" | "maintainweight" => Ok(FitnessGoal::Maintain),
            _ => Err(format!("Invalid fitness goal: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(format!("Invalid gender: {}", s)),
        }
    }
}

/// Validated inputs for the projection calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub gender: Gender,
    pub goal: FitnessGoal,
}

impl ProjectionInput {
    pub fn new(
        weight_kg: f64,
        height_cm: f64,
        age: u32,
        gender: Gender,
        goal: FitnessGoal,
    ) -> Result<Self> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(weight_kg) || !positive(height_cm) || age == 0 {
            return Err(TaazaError::InvalidInput(INVALID_PROJECTION_INPUT.to_string()));
        }
        Ok(Self {
            weight_kg,
            height_cm,
            age,
            gender,
            goal,
        })
    }
}

/// Raw projection form, every field optional as a browser may send it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectionForm {
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub age: Option<f64>,
    pub gender: Option<String>,
    pub goal: Option<String>,
}

impl ProjectionForm {
    pub fn into_input(self) -> Result<ProjectionInput> {
        let invalid = || TaazaError::InvalidInput(INVALID_PROJECTION_INPUT.to_string());

        let age = self
            .age
            .filter(|a| a.is_finite() && *a >= 1.0 && *a <= u32::MAX as f64)
            .ok_or_else(invalid)?
            .trunc() as u32;
        let gender = self
            .gender
            .as_deref()
            .and_then(|g| g.parse().ok())
            .ok_or_else(invalid)?;
        let goal = self
            .goal
            .as_deref()
            .and_then(|g| g.parse().ok())
            .ok_or_else(invalid)?;

        ProjectionInput::new(
            self.weight.ok_or_else(invalid)?,
            self.height.ok_or_else(invalid)?,
            age,
            gender,
            goal,
        )
    }
}

/// The model's structured answer, decoded verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub projection_text: String,
    pub detailed_explanation: String,
    pub recommended_plan: PlanName,
}

/// A projection together with the goal it was computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection {
    #[serde(flatten)]
    pub result: ProjectionResult,
    pub goal: FitnessGoal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_name_wire_format() {
        assert_eq!(
            serde_json::to_string(&PlanName::MonthlyMotivator).unwrap(),
            "\"Monthly Motivator\""
        );
        let plan: PlanName = serde_json::from_str("\"Weekly Warrior\"").unwrap();
        assert_eq!(plan, PlanName::WeeklyWarrior);
        let plan: PlanName = serde_json::from_str("\"MONTHLY_MOTIVATOR\"").unwrap();
        assert_eq!(plan, PlanName::MonthlyMotivator);
        assert!(serde_json::from_str::<PlanName>("\"Corporate Fuel\"").is_err());
    }

    #[test]
    fn test_input_rejects_non_positive_values() {
        assert!(ProjectionInput::new(70.0, 175.0, 30, Gender::Male, FitnessGoal::Loss).is_ok());

        let err = ProjectionInput::new(0.0, 175.0, 30, Gender::Male, FitnessGoal::Loss).unwrap_err();
        assert_eq!(err.user_message(), INVALID_PROJECTION_INPUT);
        assert!(ProjectionInput::new(f64::NAN, 175.0, 30, Gender::Male, FitnessGoal::Loss).is_err());
        assert!(ProjectionInput::new(70.0, 175.0, 0, Gender::Female, FitnessGoal::Gain).is_err());
    }

    #[test]
    fn test_form_conversion() {
        let form: ProjectionForm = serde_json::from_str(
            r#"{"weight": 82.5, "height": 178, "age": 34, "gender": "male", "goal": "loss"}"#,
        )
        .unwrap();
        let input = form.into_input().unwrap();
        assert_eq!(input.weight_kg, 82.5);
        assert_eq!(input.age, 34);
        assert_eq!(input.goal, FitnessGoal::Loss);
    }

    #[test]
    fn test_form_missing_fields() {
        let form: ProjectionForm =
            serde_json::from_str(r#"{"weight": 82.5, "height": 178, "age": 34, "goal": "loss"}"#)
                .unwrap();
        let err = form.into_input().unwrap_err();
        assert_eq!(err.user_message(), INVALID_PROJECTION_INPUT);

        assert!(ProjectionForm::default().into_input().is_err());
    }

    #[test]
    fn test_projection_flattens_result() {
        let projection = Projection {
            result: ProjectionResult {
                projection_text: "Lose up to 3kg of fat!".to_string(),
                detailed_explanation: "Steady deficit.".to_string(),
                recommended_plan: PlanName::MonthlyMotivator,
            },
            goal: FitnessGoal::Loss,
        };
        let json = serde_json::to_value(&projection).unwrap();
        assert_eq!(json["projectionText"], "Lose up to 3kg of fat!");
        assert_eq!(json["recommendedPlan"], "Monthly Motivator");
        assert_eq!(json["goal"], "loss");
    }
}

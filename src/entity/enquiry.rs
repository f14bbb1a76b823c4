use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::normalize_choice;
use crate::error::{Result, TaazaError};

pub const MIN_CORPORATE_EMPLOYEES: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "String")]
pub enum CorporateMealType {
    #[default]
    DailyMeals,
    WeeklySubscription,
    EventCatering,
    CustomPlan,
}

impl std::fmt::Display for CorporateMealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorporateMealType::DailyMeals => write!(f, "Daily Lunch/Dinner"),
            CorporateMealType::WeeklySubscription => write!(f, "Weekly Subscription"),
            CorporateMealType::EventCatering => write!(f, "Catering for Events"),
            CorporateMealType::CustomPlan => write!(f, "Custom Plan"),
        }
    }
}

impl std::str::FromStr for CorporateMealType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "dailylunchdinner" | "daily" => Ok(CorporateMealType::DailyMeals),
            "weeklysubscription" | "weekly" => Ok(CorporateMealType::WeeklySubscription),
            "cateringforevents" | "catering" | "events" => Ok(CorporateMealType::EventCatering),
            "customplan" | "custom" => Ok(CorporateMealType::CustomPlan),
            _ => Err(format!("Invalid meal type: {}", s)),
        }
    }
}

impl TryFrom<String> for CorporateMealType {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

/// Corporate booking form, sent to sales as a WhatsApp message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorporateEnquiry {
    pub company: String,
    pub contact: String,
    pub employees: u32,
    #[serde(default)]
    pub meal_type: CorporateMealType,
    pub start_date: NaiveDate,
}

impl CorporateEnquiry {
    pub fn validate(&self) -> Result<()> {
        if self.company.trim().is_empty() {
            return Err(TaazaError::InvalidInput("Company name is required.".to_string()));
        }
        if self.contact.trim().is_empty() {
            return Err(TaazaError::InvalidInput(
                "Contact name and phone number are required.".to_string(),
            ));
        }
        if self.employees < MIN_CORPORATE_EMPLOYEES {
            return Err(TaazaError::InvalidInput(format!(
                "Corporate plans start at {} employees.",
                MIN_CORPORATE_EMPLOYEES
            )));
        }
        Ok(())
    }
}

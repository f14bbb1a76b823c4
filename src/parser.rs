//! Turns raw model replies into typed results.
//!
//! The meal planner asks the model for one line per meal:
//!
//! ```text
//! [BREAKFAST]|Dry Fruit Chia Pudding|A light start.
//! [SUMMARY]|A balanced day!
//! ```
//!
//! The projection calculator asks for schema-constrained JSON, so it only
//! needs decoding.

use regex::Regex;
use std::sync::OnceLock;

use crate::entity::{MealPlan, MealPlanEntry, MealSlot, ProjectionResult};
use crate::error::{Result, TaazaError, FORMAT_MESSAGE};

static SLOT_LINE: OnceLock<Regex> = OnceLock::new();
static SUMMARY_LINE: OnceLock<Regex> = OnceLock::new();

fn slot_line() -> &'static Regex {
    SLOT_LINE.get_or_init(|| {
        Regex::new(r"(?i)\[(BREAKFAST|LUNCH|DINNER)\]\|(.*?)\|(.*)").expect("slot line pattern")
    })
}

fn summary_line() -> &'static Regex {
    SUMMARY_LINE.get_or_init(|| Regex::new(r"(?i)\[SUMMARY\]\|(.*)").expect("summary line pattern"))
}

/// Parse a line-prefixed meal plan.
///
/// Slot lines are kept in the order they appear; the last summary line wins;
/// anything else is commentary and skipped. A reply with no slot line at all
/// is a format error.
pub fn parse_meal_plan(text: &str) -> Result<MealPlan> {
    let mut entries = Vec::new();
    let mut summary = None;

    for line in text.lines() {
        if let Some(caps) = slot_line().captures(line) {
            // the pattern only admits the three slot names
            let Ok(slot) = caps[1].parse::<MealSlot>() else {
                continue;
            };
            entries.push(MealPlanEntry {
                slot,
                dish_name: caps[2].trim().to_string(),
                rationale: caps[3].trim().to_string(),
            });
        } else if let Some(caps) = summary_line().captures(line) {
            summary = Some(caps[1].trim().to_string());
        }
    }

    if entries.is_empty() {
        return Err(TaazaError::Format(FORMAT_MESSAGE.to_string()));
    }

    Ok(MealPlan { entries, summary })
}

/// Decode the projection calculator's JSON reply.
pub fn decode_projection(json_text: &str) -> Result<ProjectionResult> {
    serde_json::from_str(json_text.trim()).map_err(|e| TaazaError::Format(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::PlanName;
    use crate::error::ErrorCategory;

    #[test]
    fn test_full_day_with_summary() {
        let text = "[BREAKFAST]|Chia Pudding|Light start.\n\
                    [LUNCH]|Pasta|Good carbs.\n\
                    [DINNER]|Rice Bowl|Protein rich.\n\
                    [SUMMARY]|A balanced day!";
        let plan = parse_meal_plan(text).unwrap();

        let slots: Vec<MealSlot> = plan.entries.iter().map(|e| e.slot).collect();
        assert_eq!(slots, vec![MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner]);
        assert_eq!(plan.entries[0].dish_name, "Chia Pudding");
        assert_eq!(plan.entries[0].rationale, "Light start.");
        assert_eq!(plan.entries[1].dish_name, "Pasta");
        assert_eq!(plan.entries[2].rationale, "Protein rich.");
        assert_eq!(plan.summary.as_deref(), Some("A balanced day!"));
    }

    #[test]
    fn test_refusal_is_format_error() {
        let err = parse_meal_plan("Sorry, I can't help with that.").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Format);
        assert_eq!(err.user_message(), "AI response was not in the expected format.");
    }

    #[test]
    fn test_empty_input_is_format_error() {
        assert!(matches!(parse_meal_plan(""), Err(TaazaError::Format(_))));
    }

    #[test]
    fn test_summary_only_is_format_error() {
        assert!(parse_meal_plan("[SUMMARY]|Nice day").is_err());
    }

    #[test]
    fn test_summary_is_not_an_entry() {
        let text = "[BREAKFAST]|Shake|Quick protein.\n[LUNCH]|Bowl|Fibre.\n[SUMMARY]|Solid plan.";
        let plan = parse_meal_plan(text).unwrap();
        assert_eq!(plan.entries.len(), 2);
        assert_eq!(plan.summary.as_deref(), Some("Solid plan."));
    }

    #[test]
    fn test_mixed_case_tags_are_normalized() {
        let text = "[breakfast]|A|a\n[Lunch]|B|b\n[DINNER]|C|c";
        let plan = parse_meal_plan(text).unwrap();
        let names: Vec<String> = plan.entries.iter().map(|e| e.slot.to_string()).collect();
        assert_eq!(names, vec!["Breakfast", "Lunch", "Dinner"]);
    }

    #[test]
    fn test_commentary_is_ignored_and_order_kept() {
        let text = "Here is your plan:\n\n\
                    [DINNER]|Salmon and Asparagus Medley|Light protein.\n\
                    Enjoy your meals!\n\
                    [BREAKFAST]|Millet Upma with Vegetables|Slow carbs.\n";
        let plan = parse_meal_plan(text).unwrap();
        assert_eq!(plan.entries.len(), 2);
        assert_eq!(plan.entries[0].slot, MealSlot::Dinner);
        assert_eq!(plan.entries[1].slot, MealSlot::Breakfast);
        assert!(plan.summary.is_none());
    }

    #[test]
    fn test_last_summary_wins() {
        let text = "[LUNCH]|Pasta|Carbs.\n[SUMMARY]|First.\n[summary]|Second.";
        let plan = parse_meal_plan(text).unwrap();
        assert_eq!(plan.summary.as_deref(), Some("Second."));
    }

    #[test]
    fn test_fields_are_trimmed_and_crlf_tolerated() {
        let text = "- [LUNCH]|  Protein Scramble Rice Bowl  |  Keeps you full.  \r\n";
        let plan = parse_meal_plan(text).unwrap();
        assert_eq!(plan.entries[0].dish_name, "Protein Scramble Rice Bowl");
        assert_eq!(plan.entries[0].rationale, "Keeps you full.");
    }

    #[test]
    fn test_rationale_may_contain_pipes() {
        let plan = parse_meal_plan("[DINNER]|Rice Bowl|Protein | fibre").unwrap();
        assert_eq!(plan.entries[0].dish_name, "Rice Bowl");
        assert_eq!(plan.entries[0].rationale, "Protein | fibre");
    }

    #[test]
    fn test_duplicate_slots_are_kept() {
        let plan = parse_meal_plan("[LUNCH]|A|a\n[LUNCH]|B|b").unwrap();
        assert_eq!(plan.entries.len(), 2);
    }

    #[test]
    fn test_decode_projection() {
        let json = r#"{
            "projectionText": "Lose up to 3kg of fat!",
            "detailedExplanation": "A steady calorie deficit with balanced meals.",
            "recommendedPlan": "Monthly Motivator"
        }"#;
        let result = decode_projection(json).unwrap();
        assert_eq!(result.projection_text, "Lose up to 3kg of fat!");
        assert_eq!(
            result.detailed_explanation,
            "A steady calorie deficit with balanced meals."
        );
        assert_eq!(result.recommended_plan, PlanName::MonthlyMotivator);
    }

    #[test]
    fn test_decode_truncated_projection() {
        let err = decode_projection(r#"{"projectionText": "Lose up to"#).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Format);
    }

    #[test]
    fn test_decode_missing_field() {
        let err = decode_projection(r#"{"projectionText": "x", "recommendedPlan": "Weekly Warrior"}"#)
            .unwrap_err();
        assert!(matches!(err, TaazaError::Format(_)));
    }
}

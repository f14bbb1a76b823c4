//! System instructions, user queries and the projection schema.

use crate::catalog;
use crate::entity::{MealPlanRequest, PlanName, ProjectionInput};
use crate::gateway::{FieldType, SchemaDescriptor};

fn or_none(value: Option<&str>) -> &str {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or("None")
}

pub fn meal_plan_instruction() -> String {
    format!(
        "You are a helpful, world-class nutritionist and chef working for Taazabites. Your task is to \
generate a personalized 1-day meal plan (Breakfast, Lunch, Dinner) based *only* on the meals provided \
in the Taazabites Menu. Do not suggest anything outside of this menu.

Taazabites Menu: {menu}

Output the plan in a *STRICT*, parsable format. Each meal must be on a new line and must start exactly \
with the bracketed meal type followed by a pipe and the meal name, then another pipe and a brief reason. \
After the three meals, add a final line starting with [SUMMARY]| followed by a single encouraging \
sentence summarizing the plan's benefits.

Example:
[BREAKFAST]|High Protein Egg Chicken Meal|This meal is perfect for muscle gain.
[LUNCH]|Chickpea Feta Avocado Bowl|This light yet filling bowl is great for sustained energy.
[DINNER]|Protein Scramble Rice Bowl|A balanced carb/protein mix to fuel recovery.
[SUMMARY]|This plan is designed to maximize muscle gain while keeping you energized throughout the day!

The plan must strictly adhere to the user's preferences, including any specific nutritional goals. If a \
user dislikes an ingredient, do not suggest a meal containing it.",
        menu = catalog::planner_menu()
    )
}

pub fn meal_plan_query(request: &MealPlanRequest) -> String {
    format!(
        "Create a 1-day plan for a user with these preferences:
- Dietary Preference: {}
- Health Goal: {}
- Specific Nutritional Goals: {}
- Dislikes/Allergies: {}",
        request.dietary_preference,
        request.health_goal,
        or_none(request.nutritional_goals.as_deref()),
        or_none(request.dislikes.as_deref()),
    )
}

pub fn projection_instruction() -> String {
    "You are an expert nutritionist for Taazabites, a healthy meal delivery service. Your goal is to \
provide a realistic and motivating 1-month projection for a user based on their stats. The diet is \
assumed to be a balanced, calorie-controlled plan provided by Taazabites. You must respond in the \
specified JSON format.
- For weight loss, project a healthy rate of 0.5-1kg loss per week.
- For muscle gain, project a realistic rate of 0.25-0.5kg of lean muscle per month.
- For maintenance, confirm that the user can maintain their weight.
- Base your recommendation for 'Monthly Motivator' on goals that require consistency (weight loss/gain). \
Recommend 'Weekly Warrior' for maintenance or trial."
        .to_string()
}

pub fn projection_query(input: &ProjectionInput) -> String {
    format!(
        "Generate a projection for a user with the following details:
- Weight: {}kg
- Height: {}cm
- Age: {}
- Gender: {}
- Health Goal: {}",
        input.weight_kg,
        input.height_cm,
        input.age,
        input.gender,
        input.goal.label(),
    )
}

pub fn projection_schema() -> SchemaDescriptor {
    SchemaDescriptor::new()
        .field(
            "projectionText",
            FieldType::String,
            "A short, catchy projection, e.g., 'Lose up to 3kg of fat!' or 'Gain up to 0.5kg of lean muscle!'",
        )
        .field(
            "detailedExplanation",
            FieldType::String,
            "1-2 sentences explaining how this is possible with a consistent, healthy diet from Taazabites.",
        )
        .enum_field(
            "recommendedPlan",
            "The name of the recommended plan: either 'Weekly Warrior' or 'Monthly Motivator'.",
            &[
                PlanName::WeeklyWarrior.to_string().as_str(),
                PlanName::MonthlyMotivator.to_string().as_str(),
            ],
        )
}

pub fn search_instruction() -> String {
    "You are a helpful AI assistant for Taazabites, a healthy food delivery service in Bangalore. Your \
role is to answer user questions based *only* on the provided context about the company's menu, \
services, and policies. Be friendly, concise, and helpful. If the answer isn't in the context, politely \
state that you don't have that information. Do not make anything up. Format your answer using markdown \
for clarity (e.g., use lists, bold text)."
        .to_string()
}

pub fn search_query(question: &str) -> String {
    format!(
        "CONTEXT:
---
{}
---

QUESTION: \"{}\"

Based only on the context provided, answer the user's question.",
        catalog::search_context(),
        question.trim()
    )
}

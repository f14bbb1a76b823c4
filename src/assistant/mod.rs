//! The three AI features of the landing page, built on one [`Gateway`].

pub mod prompts;

use tracing::{debug, instrument};

use crate::entity::{MealPlan, MealPlanRequest, Projection, ProjectionInput, SearchAnswer};
use crate::error::{Result, TaazaError};
use crate::gateway::{Feature, Gateway};
use crate::parser::{decode_projection, parse_meal_plan};

pub const EMPTY_QUESTION: &str = "Please enter a question.";

#[derive(Debug, Clone)]
pub struct Assistant {
    gateway: Gateway,
}

impl Assistant {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Whether AI calls can be attempted at all.
    pub fn is_available(&self) -> bool {
        self.gateway.is_configured()
    }

    /// Generate a one-day plan from the menu.
    #[instrument(skip_all, fields(diet = %request.dietary_preference, goal = %request.health_goal))]
    pub async fn meal_plan(&self, request: &MealPlanRequest) -> Result<MealPlan> {
        let text = self
            .gateway
            .request_completion(
                Feature::MealPlan,
                prompts::meal_plan_query(request),
                prompts::meal_plan_instruction(),
            )
            .await?;

        let plan = parse_meal_plan(&text)?;
        debug!(entries = plan.entries.len(), has_summary = plan.summary.is_some(), "meal plan parsed");
        Ok(plan)
    }

    /// One-month projection with a plan recommendation.
    #[instrument(skip_all, fields(goal = %input.goal))]
    pub async fn projection(&self, input: &ProjectionInput) -> Result<Projection> {
        let json_text = self
            .gateway
            .request_structured_completion(
                Feature::Projection,
                prompts::projection_query(input),
                prompts::projection_instruction(),
                prompts::projection_schema(),
            )
            .await?;

        let result = decode_projection(&json_text)?;
        debug!(plan = %result.recommended_plan, "projection decoded");
        Ok(Projection {
            result,
            goal: input.goal,
        })
    }

    /// Answer a question about the menu, plans or service.
    #[instrument(skip_all)]
    pub async fn search(&self, question: &str) -> Result<SearchAnswer> {
        if question.trim().is_empty() {
            return Err(TaazaError::InvalidInput(EMPTY_QUESTION.to_string()));
        }

        let text = self
            .gateway
            .request_completion(
                Feature::FaqSearch,
                prompts::search_query(question),
                prompts::search_instruction(),
            )
            .await?;
        Ok(SearchAnswer::new(text.trim()))
    }
}

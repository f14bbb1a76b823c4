use std::net::SocketAddr;

use chrono::NaiveDate;
use serde_json::json;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::assistant::Assistant;
use crate::catalog::{self, format_price};
use crate::entity::{CorporateEnquiry, MealPlanRequest, ProjectionInput};
use crate::error::{Result, TaazaError};
use crate::links;
use crate::server::{self, AppState};

use super::commands::LinkAction;

fn invalid(message: String) -> TaazaError {
    TaazaError::InvalidInput(message)
}

pub async fn handle_plan(
    assistant: &Assistant,
    diet: String,
    goal: String,
    nutrition: Option<String>,
    dislikes: Option<String>,
    json: bool,
) -> Result<()> {
    let request = MealPlanRequest {
        dietary_preference: diet.parse().map_err(invalid)?,
        health_goal: goal.parse().map_err(invalid)?,
        nutritional_goals: nutrition,
        dislikes,
    };

    let plan = assistant.meal_plan(&request).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        println!(
            "Your {} / {} day plan:\n",
            request.dietary_preference, request.health_goal
        );
        for entry in &plan.entries {
            println!("  {:<10} {}", entry.slot, entry.dish_name);
            if !entry.rationale.is_empty() {
                println!("             {}", entry.rationale);
            }
        }
        if let Some(summary) = &plan.summary {
            println!("\n{}", summary);
        }
    }

    Ok(())
}

pub async fn handle_project(
    assistant: &Assistant,
    weight: f64,
    height: f64,
    age: u32,
    gender: String,
    goal: String,
    json: bool,
) -> Result<()> {
    let input = ProjectionInput::new(
        weight,
        height,
        age,
        gender.parse().map_err(invalid)?,
        goal.parse().map_err(invalid)?,
    )?;

    let projection = assistant.projection(&input).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
    } else {
        println!("{}", projection.result.projection_text);
        println!("\n{}", projection.result.detailed_explanation);
        println!(
            "\nRecommended plan: {}",
            projection.result.recommended_plan
        );
        println!("  {}", links::plan_link(projection.result.recommended_plan));
    }

    Ok(())
}

pub async fn handle_ask(assistant: &Assistant, question: String, html: bool, json: bool) -> Result<()> {
    let answer = assistant.search(&question).await?;

    if json {
        let out = json!({ "answer": answer.text, "html": answer.to_html() });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if html {
        println!("{}", answer.to_html());
    } else {
        println!("{}", answer.text);
    }

    Ok(())
}

pub fn handle_menu(tag: Option<String>, json: bool) -> Result<()> {
    let items = catalog::filter_menu(tag.as_deref());

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if items.is_empty() {
        println!("No dishes found.");
    } else {
        println!("Menu:\n");
        for item in items {
            let badge = item.badge.map(|b| format!(" [{}]", b)).unwrap_or_default();
            println!("  {} - {}{}", item.name, format_price(item.price), badge);
            println!("      {}", item.description);
            println!("      {}", item.nutrition);
            if !item.tags.is_empty() {
                println!("      tags: {}", item.tags.join(", "));
            }
        }
    }

    Ok(())
}

pub fn handle_link(action: LinkAction) -> Result<()> {
    match action {
        LinkAction::Order { dish } => {
            let item = catalog::find_dish(&dish)
                .ok_or_else(|| invalid(format!("Unknown dish: {}", dish)))?;
            println!("{}", links::order_link(item.name));
        }
        LinkAction::Plan { plan } => {
            println!("{}", links::plan_link(plan.parse().map_err(invalid)?));
        }
        LinkAction::Corporate {
            company,
            contact,
            employees,
            meal_type,
            start_date,
            show_message,
        } => {
            let start_date = NaiveDate::parse_from_str(start_date.trim(), "%Y-%m-%d")
                .map_err(|_| invalid(format!("Invalid start date (expected YYYY-MM-DD): {}", start_date)))?;
            let enquiry = CorporateEnquiry {
                company,
                contact,
                employees,
                meal_type: meal_type.parse().map_err(invalid)?,
                start_date,
            };
            let url = links::corporate_link(&enquiry)?;
            if show_message {
                println!("{}\n", links::corporate_message(&enquiry));
            }
            println!("{}", url);
        }
    }

    Ok(())
}

pub async fn handle_serve(assistant: Assistant, addr: String) -> Result<()> {
    let addr: SocketAddr = addr
        .parse()
        .map_err(|_| invalid(format!("Invalid listen address: {}", addr)))?;

    let shutdown = CancellationToken::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("shutdown requested");
                trigger.cancel();
            }
            Err(e) => warn!(error = %e, "cannot listen for Ctrl-C"),
        }
    });

    server::serve(AppState { assistant }, addr, shutdown).await
}

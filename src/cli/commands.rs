use clap::{Args, Parser, Subcommand};

use crate::server::DEFAULT_ADDR;

#[derive(Parser, Debug)]
#[command(name = "taazabites")]
#[command(version, about = "AI meal planner, fitness projection and FAQ search for Taazabites")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a personalized one-day meal plan from the menu
    Plan {
        /// Dietary preference (any, vegetarian, high-protein, keto)
        #[arg(long, default_value = "any")]
        diet: String,

        /// Health goal (weight-loss, muscle-gain, maintain-health)
        #[arg(long, default_value = "weight-loss")]
        goal: String,

        /// Specific nutritional goals, e.g. "150g protein"
        #[arg(long)]
        nutrition: Option<String>,

        /// Ingredients to avoid
        #[arg(long)]
        dislikes: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Project one month of progress and recommend a plan
    Project {
        /// Body weight in kg
        #[arg(long)]
        weight: f64,

        /// Height in cm
        #[arg(long)]
        height: f64,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Gender (male, female)
        #[arg(long)]
        gender: String,

        /// Fitness goal (loss, gain, maintain)
        #[arg(long)]
        goal: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask a question about the menu, plans or delivery
    Ask {
        /// The question
        question: String,

        /// Print the answer rendered as HTML
        #[arg(long, conflicts_with = "json")]
        html: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the menu
    Menu {
        /// Only dishes with this tag (vegetarian, high-protein, keto, ...)
        #[arg(long, short = 't')]
        tag: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build WhatsApp links for orders and enquiries
    Link(LinkCommand),

    /// Start the HTTP API used by the landing page
    Serve {
        /// Address to listen on
        #[arg(long, default_value = DEFAULT_ADDR)]
        addr: String,
    },
}

#[derive(Args, Debug)]
pub struct LinkCommand {
    #[command(subcommand)]
    pub action: LinkAction,
}

#[derive(Subcommand, Debug)]
pub enum LinkAction {
    /// Order a dish from the menu
    Order {
        /// Dish name (case-insensitive)
        dish: String,
    },

    /// Ask about a subscription plan
    Plan {
        /// Plan name (weekly, monthly, "Weekly Warrior", ...)
        plan: String,
    },

    /// Send a corporate meal enquiry to sales
    Corporate {
        /// Company name
        #[arg(long)]
        company: String,

        /// Contact name and phone number
        #[arg(long)]
        contact: String,

        /// Number of employees (10 or more)
        #[arg(long)]
        employees: u32,

        /// Meal type (daily, weekly, events, custom)
        #[arg(long = "meal-type", default_value = "daily")]
        meal_type: String,

        /// Preferred start date (YYYY-MM-DD)
        #[arg(long = "start-date")]
        start_date: String,

        /// Also print the message text
        #[arg(long)]
        show_message: bool,
    },
}

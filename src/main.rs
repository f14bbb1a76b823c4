use clap::Parser;
use taazabites::cli::{
    handle_ask, handle_link, handle_menu, handle_plan, handle_project, handle_serve, Cli, Commands,
};
use taazabites::logging::{init_tracing, COMMAND_FILTER, SERVER_FILTER};
use taazabites::{Assistant, Gateway, GatewayConfig, Result};

fn build_assistant() -> Result<Assistant> {
    let config = GatewayConfig::from_env();
    Ok(Assistant::new(Gateway::from_config(&config)?))
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Plan {
            diet,
            goal,
            nutrition,
            dislikes,
            json,
        } => handle_plan(&build_assistant()?, diet, goal, nutrition, dislikes, json).await,
        Commands::Project {
            weight,
            height,
            age,
            gender,
            goal,
            json,
        } => handle_project(&build_assistant()?, weight, height, age, gender, goal, json).await,
        Commands::Ask {
            question,
            html,
            json,
        } => handle_ask(&build_assistant()?, question, html, json).await,
        Commands::Menu { tag, json } => handle_menu(tag, json),
        Commands::Link(link) => handle_link(link.action),
        Commands::Serve { addr } => handle_serve(build_assistant()?, addr).await,
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let filter = match cli.command {
        Commands::Serve { .. } => SERVER_FILTER,
        _ => COMMAND_FILTER,
    };
    init_tracing(filter);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }
}

use clap::Parser;
use tokio::runtime::Runtime;

use diet_planner_rs::cli::{CalcArgs, Cli, Command};
use diet_planner_rs::config::SuggestionConfig;
use diet_planner_rs::error::Result;
use diet_planner_rs::interface::{
    Action, collect_biometrics, display_plan, display_suggestions, prompt_action, prompt_filters,
    prompt_yes_no,
};
use diet_planner_rs::logging;
use diet_planner_rs::planner::calculate_diet_plan;
use diet_planner_rs::state::Session;
use diet_planner_rs::suggestions::{
    DeepSeekClient, MealSuggester, SuggestionRequest, fetch_or_fallback,
};

/// Command-line overrides for the suggestion service.
struct ServiceOverrides {
    api_url: Option<String>,
    model: Option<String>,
}

fn main() {
    dotenvy::dotenv().ok();
    logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let overrides = ServiceOverrides {
        api_url: cli.api_url,
        model: cli.model,
    };

    match cli.command.unwrap_or_default() {
        Command::Interactive => cmd_interactive(&overrides),
        Command::Calc(args) => cmd_calc(args, &overrides),
    }
}

/// Single-threaded runtime for the one outbound call.
fn runtime() -> Result<Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

fn build_client(overrides: &ServiceOverrides) -> Result<DeepSeekClient> {
    let config = SuggestionConfig::from_env()?
        .with_overrides(overrides.api_url.clone(), overrides.model.clone());
    Ok(DeepSeekClient::new(config)?)
}

/// Calculate from flags, optionally fetching suggestions.
fn cmd_calc(args: CalcArgs, overrides: &ServiceOverrides) -> Result<()> {
    let plan = calculate_diet_plan(&args.to_form())?;

    if !args.json {
        display_plan(&plan);
    }

    if !args.suggest {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        return Ok(());
    }

    let client = build_client(overrides)?;
    let request = SuggestionRequest::from_plan(&plan, args.filters.into());

    if !args.json {
        println!("Fetching meal suggestions...");
    }

    let rt = runtime()?;
    let suggestions = rt.block_on(async {
        tokio::select! {
            text = fetch_or_fallback(&client, &request) => Some(text),
            _ = tokio::signal::ctrl_c() => None,
        }
    });

    if args.json {
        let output = serde_json::json!({
            "plan": plan,
            "suggestions": suggestions,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        match suggestions {
            Some(text) => display_suggestions(&text),
            None => println!("Cancelled."),
        }
    }

    Ok(())
}

/// Interactive form: fill in, calculate, then act on the plan.
fn cmd_interactive(overrides: &ServiceOverrides) -> Result<()> {
    let mut session = Session::new();
    let mut client: Option<DeepSeekClient> = None;
    let rt = runtime()?;

    println!("Diet Planner");
    println!();

    loop {
        collect_biometrics(session.form_mut())?;

        match session.calculate() {
            Ok(plan) => display_plan(plan),
            Err(e) if e.is_validation() => {
                eprintln!("Error: {}", e);
                continue;
            }
            Err(e) => return Err(e),
        }

        loop {
            match prompt_action()? {
                Action::GetSuggestions => {
                    let filters = prompt_filters(session.filters())?;
                    session.set_filters(filters);

                    if client.is_none() {
                        match build_client(overrides) {
                            Ok(c) => client = Some(c),
                            Err(e) => {
                                eprintln!("Error: {}", e);
                                continue;
                            }
                        }
                    }
                    let Some(suggester) = client.as_ref() else {
                        continue;
                    };

                    let request = session.begin_fetch()?;
                    println!("Fetching meal suggestions (Ctrl-C to cancel)...");

                    let outcome = rt.block_on(async {
                        tokio::select! {
                            result = suggester.suggest(&request) => Some(result),
                            _ = tokio::signal::ctrl_c() => None,
                        }
                    });

                    match outcome {
                        Some(result) => display_suggestions(session.finish_fetch(result)),
                        None => {
                            session.cancel_fetch();
                            println!("Cancelled.");
                        }
                    }
                }
                Action::EditInputs => break,
                Action::Reset => {
                    if prompt_yes_no("Clear all inputs and results?", true)? {
                        session.reset();
                        println!("All inputs cleared.");
                        println!();
                        break;
                    }
                }
                Action::Quit => return Ok(()),
            }
        }
    }
}

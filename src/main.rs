use clap::Parser;
use portfolio_core::utils::{logger, validation::Validate};
use portfolio_core::{to_json, CliConfig, Command, PortfolioApi, PortfolioContent};
use serde::Serialize;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let content = match config.load_content() {
        Ok(content) => content,
        Err(e) => {
            tracing::error!("❌ Failed to load portfolio content: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    tracing::info!("🚀 Portfolio loaded for {}", content.profile.name);

    let mut api = PortfolioApi::new(content);
    let pretty = config.pretty;

    match config.command {
        Command::About => print_json(&api.about_section(), pretty)?,
        Command::Skills => print_json(&api.skills(), pretty)?,
        Command::Projects => print_json(&api.projects(), pretty)?,
        Command::Sections => print_json(&api.all_sections(), pretty)?,
        Command::Navigate { section } => {
            let outcome = api.navigate_to(&section);
            print_json(&outcome, pretty)?;
            if !outcome.is_success() {
                std::process::exit(2);
            }
        }
        Command::Scroll { target, offset } => print_json(&api.scroll_to(&target, offset), pretty)?,
        Command::Submit {
            name,
            email,
            phone,
            message,
        } => {
            for (field, value) in [
                ("name", &name),
                ("email", &email),
                ("phone", &phone),
                ("message", &message),
            ] {
                api.update_form_field(field, value);
            }
            let outcome = api.submit_contact_form();
            print_json(&outcome, pretty)?;
            if !outcome.is_success() {
                std::process::exit(2);
            }
        }
        Command::Demo => run_demo(&mut api, pretty)?,
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    println!("{}", to_json(value, pretty)?);
    Ok(())
}

fn print_step<T: Serialize>(label: &str, value: &T, pretty: bool) -> anyhow::Result<()> {
    println!("{}: {}", label, to_json(value, pretty)?);
    Ok(())
}

fn run_demo(api: &mut PortfolioApi<PortfolioContent>, pretty: bool) -> anyhow::Result<()> {
    println!("=== Portfolio System Initialized ===");
    print_step("About Section", &api.about_section(), pretty)?;
    print_step("Skills", &api.skills(), pretty)?;
    print_step("Projects", &api.projects(), pretty)?;

    println!();
    println!("=== Form Validation Examples ===");
    api.update_form_field("name", "B");
    print_step("Short name error", &api.form_errors(), pretty)?;

    api.update_form_field("name", "Breana Fulton");
    print_step("Valid name, errors cleared", &api.form_errors(), pretty)?;

    api.update_form_field("email", "invalid-email");
    print_step("Invalid email error", &api.form_errors(), pretty)?;

    api.update_form_field("email", "breana@example.com");
    api.update_form_field(
        "message",
        "This is a test message that is long enough to pass validation requirements.",
    );

    println!();
    print_step("Form submission result", &api.submit_contact_form(), pretty)?;

    Ok(())
}

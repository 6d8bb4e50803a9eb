//! CampusEvents client
//!
//! Main application entry point

use std::process::ExitCode;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::{error, info, warn};

use CampusEvents::{
    cli::{AdminCommands, Cli, Commands},
    config::Settings,
    models::EventFilters,
    pages::{
        banner_text, AdminPanelPage, AuthForm, AuthMode, AuthPage, DashboardPage, DetailView,
        EventDetailsPage, EventForm, EventsPage, HomePage, RegistrationAction,
    },
    services::HealthReport,
    state::{AppContext, AuthState, Route, RouteOutcome},
    utils::{errors::ErrorSeverity, helpers::create_count_info, logging},
    widgets::{card, render_about, render_loader, render_navbar, render_not_found, Calendar, LoaderSize},
    CampusEventsError,
};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let mut settings = Settings::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(ref url) = cli.api_url {
        settings.api.base_url = url.clone();
    }
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;
    info!(api_url = %settings.api_base_url(), "Starting {}", CampusEvents::info());

    if let Commands::Calendar { ref month } = cli.command {
        show_calendar(month.as_deref())?;
        return Ok(ExitCode::SUCCESS);
    }

    let (ctx, mut state) = AppContext::bootstrap(settings).await?;

    if let (Some(email), Some(password)) = (&cli.session_email, &cli.session_password) {
        let mut page = AuthPage::new(ctx.clone(), AuthMode::Login);
        page.form = AuthForm::login(email.clone(), password.clone());
        if page.submit().await.is_none() {
            warn!("Session login failed");
            print_error(page.error.as_deref().unwrap_or("Login failed"));
        }
        state = ctx.session.state().await;
    }

    println!("{}\n", render_navbar(&state));

    let result = run(&ctx, &state, cli.command).await;

    for toast in ctx.toasts.drain() {
        println!("{}", toast.render());
    }

    let e = match result {
        Ok(()) => return Ok(ExitCode::SUCCESS),
        Err(e) => e,
    };

    // Bad input and rejected requests are reported plainly; the rest propagate
    let rejected = e
        .downcast_ref::<CampusEventsError>()
        .filter(|err| matches!(err.severity(), ErrorSeverity::Info | ErrorSeverity::Warning))
        .map(CampusEventsError::user_message);

    match rejected {
        Some(message) => {
            warn!(error = %e, "Command rejected");
            print_error(&message);
            Ok(ExitCode::from(2))
        }
        None => {
            error!(error = %e, "Command failed");
            Err(e)
        }
    }
}

/// Whether the gate lets `route` render; prints what it shows instead otherwise
fn admit(ctx: &AppContext, state: &AuthState, route: Route) -> Option<Route> {
    match ctx.guard.resolve(route, state) {
        RouteOutcome::Render(route) => Some(route),
        RouteOutcome::Placeholder => {
            println!("{}", render_loader(LoaderSize::default(), None));
            None
        }
        RouteOutcome::Redirect(path) => {
            println!("Please log in to continue. Redirecting to {}", path);
            None
        }
        RouteOutcome::AccessDenied { role } => {
            println!("Access Denied\nYou do not have permission to view this page.\nYour role is: {}", role);
            None
        }
    }
}

/// Route the command through the gate, then run its page
async fn run(ctx: &AppContext, state: &AuthState, command: Commands) -> anyhow::Result<()> {
    if let Some(route) = route_for(&command) {
        if admit(ctx, state, route).is_none() {
            return Ok(());
        }
    }

    match command {
        Commands::Home { keyword } => run_home(ctx, keyword).await,
        Commands::About => {
            println!("{}", render_about());
            Ok(())
        }
        Commands::Open { path } => match admit(ctx, state, Route::parse(&path)) {
            Some(route) => open_route(ctx, route).await,
            None => Ok(()),
        },
        Commands::Events { club, date, category, keyword } => {
            let filters = EventFilters {
                club: club.unwrap_or_default(),
                date: date.unwrap_or_default(),
                category: category.unwrap_or_default(),
                keyword: keyword.unwrap_or_default(),
            };
            run_events(ctx, filters).await
        }
        Commands::Event { id, register } => run_event(ctx, id, register).await,
        Commands::Login { email, password } => {
            run_auth(ctx, AuthMode::Login, AuthForm::login(email, password)).await
        }
        Commands::Signup { username, email, password, confirm } => {
            let form = AuthForm { username, email, password, confirm_password: confirm };
            run_auth(ctx, AuthMode::Signup, form).await
        }
        Commands::Logout => {
            ctx.session.logout().await?;
            println!("Logged out.");
            Ok(())
        }
        Commands::Dashboard { cancel } => run_dashboard(ctx, cancel).await,
        Commands::Admin { command } => run_admin(ctx, command).await,
        Commands::Calendar { month } => show_calendar(month.as_deref()),
        Commands::Health { signup } => {
            let diagnostics = &ctx.services.diagnostics_service;
            print_health(diagnostics.health().await);
            if signup {
                println!();
                print_health(diagnostics.test_signup().await);
            }
            Ok(())
        }
    }
}

/// Render a page reached by path; forms still need their own commands
async fn open_route(ctx: &AppContext, route: Route) -> anyhow::Result<()> {
    match route {
        Route::Home => run_home(ctx, None).await,
        Route::About => {
            println!("{}", render_about());
            Ok(())
        }
        Route::Events => run_events(ctx, EventFilters::default()).await,
        Route::EventDetails(id) => run_event(ctx, id, false).await,
        Route::Dashboard => run_dashboard(ctx, None).await,
        Route::Admin => run_admin(ctx, AdminCommands::List).await,
        Route::Login => {
            println!("Log in with: campus-events login --email <EMAIL> --password <PASSWORD>");
            Ok(())
        }
        Route::Signup => {
            println!("Sign up with: campus-events signup --username <NAME> --email <EMAIL> --password <PASSWORD> --confirm <PASSWORD>");
            Ok(())
        }
        Route::NotFound(path) => {
            println!("{}", render_not_found(&path));
            Ok(())
        }
    }
}

fn print_health(report: HealthReport) {
    println!("API URL:   {}", report.api_url);
    println!("Reachable: {}", report.reachable);
    if let Some(details) = report.details {
        println!("Details:   {}", details);
    }
    if let Some(error) = report.error {
        print_error(&error);
    }
}

fn route_for(command: &Commands) -> Option<Route> {
    match command {
        Commands::Home { .. } => Some(Route::Home),
        Commands::Events { .. } => Some(Route::Events),
        Commands::Event { id, .. } => Some(Route::EventDetails(id.clone())),
        Commands::Login { .. } => Some(Route::Login),
        Commands::Signup { .. } => Some(Route::Signup),
        Commands::Dashboard { .. } => Some(Route::Dashboard),
        Commands::Admin { .. } => Some(Route::Admin),
        Commands::About => Some(Route::About),
        Commands::Open { .. } | Commands::Logout | Commands::Calendar { .. } | Commands::Health { .. } => None,
    }
}

fn print_error(message: &str) {
    eprintln!("Error: {}", message);
}

async fn run_home(ctx: &AppContext, keyword: Option<String>) -> anyhow::Result<()> {
    let mut page = HomePage::new(ctx.clone());

    if let Some(keyword) = keyword {
        if let Some(path) = page.search(&keyword) {
            println!("Searching events: {}\n", path);
            return run_events(ctx, EventFilters::keyword(keyword)).await;
        }
        return Ok(());
    }

    page.load(Local::now().naive_local()).await;

    if let Some(ref error) = page.error {
        print_error(error);
    } else if page.is_empty_state() {
        println!("No upcoming events right now. Check back soon!");
    } else {
        println!("Upcoming Events\n");
        for event in page.displayed() {
            println!("{}", card::render_card(event));
        }
    }
    Ok(())
}

async fn run_events(ctx: &AppContext, filters: EventFilters) -> anyhow::Result<()> {
    let mut page = EventsPage::new(ctx.clone(), filters);
    page.load().await;

    if let Some(ref error) = page.error {
        print_error(error);
        return Ok(());
    }

    if page.events.is_empty() {
        println!("No events found.");
        if !page.filters.is_empty() {
            println!("Try adjusting your filters to see more events.");
        }
        return Ok(());
    }

    println!("{}\n", create_count_info("Events", page.events.len()));
    for event in &page.events {
        println!("{}", card::render_card(event));
    }
    Ok(())
}

async fn run_event(ctx: &AppContext, id: String, register: bool) -> anyhow::Result<()> {
    let mut page = EventDetailsPage::new(ctx.clone(), id);
    page.load().await;

    match page.view {
        DetailView::Ready => {}
        DetailView::NotFound => {
            println!("Event not found.");
            return Ok(());
        }
        DetailView::Error(ref message) => {
            print_error(message);
            return Ok(());
        }
        DetailView::Loading => {
            println!("{}", render_loader(LoaderSize::default(), Some("Loading event details...")));
            return Ok(());
        }
    }

    if let Some(ref event) = page.event {
        println!("{}", card::render_details(event));
    }

    if register {
        let redirect = page.register().await;
        if let Some(text) = banner_text(&page.registration_message) {
            println!("{}", text);
        }
        if let Some(path) = redirect {
            println!("Redirecting to {}", path);
            return Ok(());
        }
    }

    match page.action() {
        RegistrationAction::LoginPrompt => println!("[Login to get ticket]"),
        RegistrationAction::Register => println!("[Get ticket]  campus-events event {} --register", page.event_id()),
        RegistrationAction::AlreadyRegistered => println!("[You have a ticket]"),
    }
    Ok(())
}

async fn run_auth(ctx: &AppContext, mode: AuthMode, form: AuthForm) -> anyhow::Result<()> {
    let mut page = AuthPage::new(ctx.clone(), mode);
    page.form = form;

    match page.submit().await {
        Some(path) => {
            if let Some(ref text) = page.success {
                println!("{}", text);
            }
            if let Some(user) = ctx.session.current_user().await {
                println!("Logged in as: {} ({})", user.username, user.role);
            }
            println!("Redirecting to {}", path);
        }
        None => print_error(page.error.as_deref().unwrap_or("Authentication failed")),
    }
    Ok(())
}

async fn run_dashboard(ctx: &AppContext, cancel: Option<String>) -> anyhow::Result<()> {
    let mut page = DashboardPage::new(ctx.clone());
    page.load().await;

    if let Some(id) = cancel {
        page.cancel(&id).await;
    }

    println!("{}\n", page.greeting());
    for text in [&page.message, &page.error].into_iter().filter_map(banner_text) {
        println!("{}\n", text);
    }

    let today = Local::now().date_naive();
    println!("Total registrations: {}", page.total());
    println!("Upcoming events:     {}\n", page.upcoming_count(today));

    if page.registrations.is_empty() {
        println!("You haven't registered for any events yet.");
        return Ok(());
    }

    for registration in &page.registrations {
        match registration.event() {
            Some(event) => println!("{}  registration {}", card::render_card(event), registration.id),
            None => println!("Event {}  registration {}", registration.event_id(), registration.id),
        }
    }
    Ok(())
}

async fn run_admin(ctx: &AppContext, command: AdminCommands) -> anyhow::Result<()> {
    let mut page = AdminPanelPage::new(ctx.clone());

    match command {
        AdminCommands::List => {
            page.load().await;
            for event in &page.events {
                println!("{}", card::render_admin_row(event));
            }
        }
        AdminCommands::Create(fields) => {
            let mut form = EventForm::default();
            fields.apply_to(&mut form);
            page.form = form;
            page.submit().await?;
        }
        AdminCommands::Update { id, fields } => {
            page.edit_by_id(&id).await?;
            fields.apply_to(&mut page.form);
            page.submit().await?;
        }
        AdminCommands::Delete { id } => page.delete(&id).await?,
        AdminCommands::Attendees { id } => {
            page.toggle_attendees(&id).await;
            if let Some(ref error) = page.attendees.error {
                print_error(error);
            } else if page.attendees.attendees.is_empty() {
                println!("No attendees yet.");
            } else {
                for user in &page.attendees.attendees {
                    println!("{}  {}", user.username, user.email);
                }
            }
        }
    }

    if let Some(text) = banner_text(&page.message) {
        println!("{}", text);
    }
    Ok(())
}

fn show_calendar(month: Option<&str>) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let mut calendar = Calendar::new(today, None);

    if let Some(month) = month {
        let first = NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d")
            .with_context(|| format!("month must be YYYY-MM, got {:?}", month))?;
        calendar.show_month_of(first);
    }

    println!("{}", calendar.render());
    Ok(())
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::pages::EventForm;

#[derive(Parser, Debug)]
#[command(name = "campus-events")]
#[command(version)]
#[command(about = "Browse campus events, register, and manage them from the terminal")]
pub struct Cli {
    /// Configuration file to read instead of ./config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Backend base URL, overriding the configuration
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Log in with this email before running the command
    #[arg(long, global = true, env = "CAMPUS_EVENTS_EMAIL", value_name = "EMAIL")]
    pub session_email: Option<String>,

    /// Password for --session-email
    #[arg(long, global = true, env = "CAMPUS_EVENTS_PASSWORD", hide_env_values = true)]
    pub session_password: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shows upcoming events
    Home {
        /// Search all events for a keyword instead
        #[arg(long)]
        keyword: Option<String>,
    },
    /// Lists events, optionally filtered
    Events {
        #[arg(long)]
        club: Option<String>,
        /// Event date, YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        keyword: Option<String>,
    },
    /// About the platform
    About,
    /// Opens a page by its path, e.g. /events/abc123
    Open {
        #[arg(value_name = "PATH")]
        path: String,
    },
    /// Shows one event
    Event {
        #[arg(value_name = "EVENT_ID")]
        id: String,
        /// Register for the event
        #[arg(long)]
        register: bool,
    },
    /// Logs in
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Creates an account
    Signup {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Password confirmation
        #[arg(long)]
        confirm: String,
    },
    /// Logs out
    Logout,
    /// Shows your registrations
    Dashboard {
        /// Cancel a registration first
        #[arg(long, value_name = "REGISTRATION_ID")]
        cancel: Option<String>,
    },
    /// Manages events (admin only)
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
    /// Renders a month calendar
    Calendar {
        /// Month to show, YYYY-MM
        #[arg(long)]
        month: Option<String>,
    },
    /// Checks connectivity to the backend
    Health {
        /// Also check the test signup endpoint
        #[arg(long)]
        signup: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// Lists every event
    List,
    /// Creates an event
    Create(EventArgs),
    /// Updates an event; omitted fields keep their current value
    Update {
        #[arg(value_name = "EVENT_ID")]
        id: String,
        #[command(flatten)]
        fields: EventArgs,
    },
    /// Deletes an event
    Delete {
        #[arg(value_name = "EVENT_ID")]
        id: String,
    },
    /// Lists the attendees of an event
    Attendees {
        #[arg(value_name = "EVENT_ID")]
        id: String,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct EventArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,
    /// "14:30" or "2:30 PM"
    #[arg(long)]
    pub time: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub organizer: Option<String>,
    /// Comma separated
    #[arg(long)]
    pub tags: Option<String>,
    #[arg(long)]
    pub image_url: Option<String>,
}

impl EventArgs {
    /// Overwrite the fields given on the command line
    pub fn apply_to(&self, form: &mut EventForm) {
        let fields = [
            (&self.name, &mut form.name),
            (&self.description, &mut form.description),
            (&self.date, &mut form.date),
            (&self.time, &mut form.time),
            (&self.location, &mut form.location),
            (&self.organizer, &mut form.organizer),
            (&self.tags, &mut form.tags),
            (&self.image_url, &mut form.image_url),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }
    }
}

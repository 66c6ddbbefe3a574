mod api;
mod error;
mod session;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use contract::endpoint::{ApplicationQuery, ContactQuery, DEFAULT_PAGE_SIZE};
use contract::export::{ExportFilters, ExportKind};
use contract::notify::{NotificationType, NotifyRequest};
use contract::types::{AnalyticsPeriod, ApplicationStatus, ApplicationUpdate, ContactStatus, ContactUpdate};
use contract::{ApiResponse, DEFAULT_API_URL};
use serde::Serialize;

use api::ApiClient;
use error::CliError;
use session::{DEFAULT_SESSION_FILE, Session};

#[derive(Parser, Debug)]
#[command(name = "smc-admin", about = "SeaMoneeCredit admin console for the terminal")]
struct Cli {
    #[arg(long, env = "SMC_ADMIN_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[arg(long, env = "SMC_ADMIN_SESSION_FILE", default_value = DEFAULT_SESSION_FILE)]
    session_file: PathBuf,

    /// Debug logs on stderr.
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "SMC_ADMIN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    Logout,
    Whoami,
    /// Dashboard application statistics.
    Stats,
    Applications(ApplicationsCommand),
    Contacts(ContactsCommand),
    Content(ContentCommand),
    Analytics(AnalyticsCommand),
    Settings(SettingsCommand),
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct ApplicationsCommand {
    #[command(subcommand)]
    command: ApplicationsSubcommand,
}

#[derive(Subcommand, Debug)]
enum ApplicationsSubcommand {
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        limit: u32,
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, value_parser = parse_application_status)]
        status: Option<ApplicationStatus>,
        #[arg(long)]
        loan_type: Option<String>,
        /// Show repeat submissions from the same applicant.
        #[arg(long)]
        all_submissions: bool,
    },
    Show {
        id: String,
    },
    Status {
        id: String,
        #[arg(value_parser = parse_application_status)]
        status: ApplicationStatus,
        #[arg(long)]
        notes: Option<String>,
    },
    Reject {
        id: String,
        #[arg(long)]
        reason: String,
        #[arg(long)]
        notes: Option<String>,
    },
    Notes {
        id: String,
        notes: String,
    },
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Send a WhatsApp notification.
    Notify {
        id: String,
        #[arg(long = "type", value_parser = parse_notification_type, default_value = "status_update")]
        kind: NotificationType,
        #[arg(long, default_value = "")]
        message: String,
    },
}

#[derive(Args, Debug)]
struct ContactsCommand {
    #[command(subcommand)]
    command: ContactsSubcommand,
}

#[derive(Subcommand, Debug)]
enum ContactsSubcommand {
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        limit: u32,
        #[arg(long, value_parser = parse_contact_status)]
        status: Option<ContactStatus>,
        #[arg(long, default_value = "")]
        search: String,
    },
    Show {
        id: String,
    },
    Status {
        id: String,
        #[arg(value_parser = parse_contact_status)]
        status: ContactStatus,
    },
    Reply {
        id: String,
        message: String,
    },
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
struct ContentCommand {
    #[command(subcommand)]
    command: ContentSubcommand,
}

#[derive(Subcommand, Debug)]
enum ContentSubcommand {
    Blogs,
    Faqs,
    Testimonials,
    Products,
}

#[derive(Args, Debug)]
struct AnalyticsCommand {
    #[command(subcommand)]
    command: AnalyticsSubcommand,
}

#[derive(Subcommand, Debug)]
enum AnalyticsSubcommand {
    Overview,
    Visitors {
        #[arg(long, value_parser = parse_period, default_value = "30d")]
        period: AnalyticsPeriod,
    },
    Conversions {
        #[arg(long, value_parser = parse_period, default_value = "30d")]
        period: AnalyticsPeriod,
    },
}

#[derive(Args, Debug)]
struct SettingsCommand {
    #[command(subcommand)]
    command: SettingsSubcommand,
}

#[derive(Subcommand, Debug)]
enum SettingsSubcommand {
    Show,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[arg(value_parser = parse_export_kind)]
    kind: ExportKind,
    #[arg(long, default_value = "")]
    status: String,
    #[arg(long, default_value = "")]
    loan_type: String,
    /// `YYYY-MM-DD`
    #[arg(long, default_value = "")]
    start_date: String,
    /// `YYYY-MM-DD`
    #[arg(long, default_value = "")]
    end_date: String,
    /// Defaults to the filename the API suggests.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(level).init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Login { username, password } => login(&cli.api_url, &cli.session_file, &username, password).await,
        Command::Logout => logout(&cli.api_url, &cli.session_file).await,
        command => {
            let mut client = ApiClient::new(&cli.api_url, Session::load(&cli.session_file)?)?;
            let result = dispatch(&mut client, command).await;
            if client.session_changed() {
                client.session().save(&cli.session_file)?;
            }
            result
        }
    }
}

async fn login(api_url: &str, session_file: &Path, username: &str, password: Option<String>) -> Result<(), CliError> {
    let password = password.filter(|p| !p.is_empty()).ok_or(CliError::MissingPassword)?;
    let mut client = ApiClient::new(api_url, Session::default())?;
    let resp = client.login(username.trim(), &password).await?;
    client.session().save(session_file)?;

    match resp.admin {
        Some(admin) => println!("signed in as {} ({})", admin.display_name(), admin.role.label()),
        None => println!("signed in as {}", username.trim()),
    }
    tracing::debug!(path = %session_file.display(), "session saved");
    Ok(())
}

async fn logout(api_url: &str, session_file: &Path) -> Result<(), CliError> {
    let session = Session::load(session_file)?;
    if !session.is_empty() {
        let mut client = ApiClient::new(api_url, session)?;
        if let Err(e) = client.logout().await {
            tracing::warn!(error = %e, "server-side logout failed");
        }
    }
    Session::delete(session_file)?;
    println!("signed out");
    Ok(())
}

async fn dispatch(client: &mut ApiClient, command: Command) -> Result<(), CliError> {
    match command {
        Command::Login { .. } | Command::Logout => Ok(()),
        Command::Whoami => {
            let admin = client.me().await?;
            let email = if admin.email.is_empty() { String::new() } else { format!(" <{}>", admin.email) };
            println!("{}{email} [{}] {}", admin.display_name(), admin.username, admin.role.label());
            Ok(())
        }
        Command::Stats => print_json(&client.application_stats().await?),
        Command::Applications(cmd) => run_applications(client, cmd.command).await,
        Command::Contacts(cmd) => run_contacts(client, cmd.command).await,
        Command::Content(cmd) => match cmd.command {
            ContentSubcommand::Blogs => print_json(&client.blogs().await?),
            ContentSubcommand::Faqs => print_json(&client.faqs().await?),
            ContentSubcommand::Testimonials => print_json(&client.testimonials().await?),
            ContentSubcommand::Products => print_json(&client.products().await?),
        },
        Command::Analytics(cmd) => match cmd.command {
            AnalyticsSubcommand::Overview => print_json(&client.analytics_overview().await?),
            AnalyticsSubcommand::Visitors { period } => print_json(&client.visitor_stats(period).await?),
            AnalyticsSubcommand::Conversions { period } => print_json(&client.conversion_stats(period).await?),
        },
        Command::Settings(cmd) => match cmd.command {
            SettingsSubcommand::Show => print_json(&client.settings().await?),
        },
        Command::Export(args) => run_export(client, args).await,
    }
}

async fn run_applications(client: &mut ApiClient, command: ApplicationsSubcommand) -> Result<(), CliError> {
    match command {
        ApplicationsSubcommand::List { page, limit, search, status, loan_type, all_submissions } => {
            let query = ApplicationQuery {
                page: page.max(1),
                limit,
                search,
                status,
                loan_type,
                dedupe: !all_submissions,
                ..ApplicationQuery::default()
            };
            print_page(&client.applications(&query).await?)
        }
        ApplicationsSubcommand::Show { id } => print_json(&client.application(&id).await?),
        ApplicationsSubcommand::Status { id, status, notes } => {
            let update = ApplicationUpdate { status: Some(status), notes, rejection_reason: None };
            client.update_application(&id, &update).await?;
            println!("application {id} is now {}", status.label());
            Ok(())
        }
        ApplicationsSubcommand::Reject { id, reason, notes } => {
            let reason = non_blank(&reason, "--reason")?;
            let update = ApplicationUpdate {
                status: Some(ApplicationStatus::Rejected),
                notes,
                rejection_reason: Some(reason),
            };
            client.update_application(&id, &update).await?;
            println!("application {id} rejected");
            Ok(())
        }
        ApplicationsSubcommand::Notes { id, notes } => {
            client.update_application(&id, &ApplicationUpdate::notes(notes)).await?;
            println!("notes saved");
            Ok(())
        }
        ApplicationsSubcommand::Delete { id, yes } => {
            confirm(yes, "application")?;
            client.delete_application(&id).await?;
            println!("application {id} deleted");
            Ok(())
        }
        ApplicationsSubcommand::Notify { id, kind, message } => {
            if !NotifyRequest::can_send(kind, &message) {
                return Err(CliError::Usage("custom notifications need --message".to_owned()));
            }
            client.notify_application(&id, &NotifyRequest::new(kind, &message)).await?;
            println!("{}", contract::notify::NOTIFY_SUCCESS_MESSAGE);
            Ok(())
        }
    }
}

async fn run_contacts(client: &mut ApiClient, command: ContactsSubcommand) -> Result<(), CliError> {
    match command {
        ContactsSubcommand::List { page, limit, status, search } => {
            let query = ContactQuery { page: page.max(1), limit, status, search };
            print_page(&client.contacts(&query).await?)
        }
        ContactsSubcommand::Show { id } => print_json(&client.contact(&id).await?),
        ContactsSubcommand::Status { id, status } => {
            client.update_contact(&id, &ContactUpdate::status(status)).await?;
            println!("contact {id} marked {}", status.label());
            Ok(())
        }
        ContactsSubcommand::Reply { id, message } => {
            let message = non_blank(&message, "reply message")?;
            client.update_contact(&id, &ContactUpdate::reply(ContactStatus::Replied, message)).await?;
            println!("reply recorded for contact {id}");
            Ok(())
        }
        ContactsSubcommand::Delete { id, yes } => {
            confirm(yes, "contact")?;
            client.delete_contact(&id).await?;
            println!("contact {id} deleted");
            Ok(())
        }
    }
}

async fn run_export(client: &mut ApiClient, args: ExportArgs) -> Result<(), CliError> {
    let filters = ExportFilters {
        status: args.status,
        loan_type: args.loan_type,
        start_date: args.start_date,
        end_date: args.end_date,
    };
    let filters = (args.kind.supports_filters() && !filters.is_empty()).then_some(filters);
    let download = client.export(args.kind, filters.as_ref()).await?;

    let path = args.out.unwrap_or_else(|| PathBuf::from(&download.filename));
    tokio::fs::write(&path, &download.bytes).await.map_err(|source| CliError::Output { path: path.clone(), source })?;
    println!("saved {} ({} bytes)", path.display(), download.bytes.len());
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

/// List data on stdout, the page window on stderr.
fn print_page<T: Serialize>(resp: &ApiResponse<Vec<T>>) -> Result<(), CliError> {
    print_json(&resp.data.as_deref().unwrap_or_default())?;
    if let Some(p) = &resp.pagination {
        eprintln!("page {} of {} ({} total)", p.page, p.pages.max(1), p.total);
    }
    Ok(())
}

fn confirm(yes: bool, what: &str) -> Result<(), CliError> {
    if yes {
        Ok(())
    } else {
        Err(CliError::Usage(format!("refusing to delete {what} without --yes")))
    }
}

fn non_blank(raw: &str, what: &str) -> Result<String, CliError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CliError::Usage(format!("{what} must not be blank")));
    }
    Ok(trimmed.to_owned())
}

fn parse_application_status(raw: &str) -> Result<ApplicationStatus, String> {
    ApplicationStatus::parse(raw).ok_or_else(|| expected(raw, ApplicationStatus::ALL.map(ApplicationStatus::as_str)))
}

fn parse_contact_status(raw: &str) -> Result<ContactStatus, String> {
    ContactStatus::parse(raw).ok_or_else(|| expected(raw, ContactStatus::ALL.map(ContactStatus::as_str)))
}

fn parse_notification_type(raw: &str) -> Result<NotificationType, String> {
    NotificationType::parse(raw).ok_or_else(|| expected(raw, NotificationType::ALL.map(NotificationType::as_str)))
}

fn parse_period(raw: &str) -> Result<AnalyticsPeriod, String> {
    AnalyticsPeriod::parse(raw).ok_or_else(|| expected(raw, AnalyticsPeriod::ALL.map(AnalyticsPeriod::as_str)))
}

fn parse_export_kind(raw: &str) -> Result<ExportKind, String> {
    ExportKind::parse(raw).ok_or_else(|| expected(raw, ExportKind::ALL.map(ExportKind::as_str)))
}

fn expected<const N: usize>(raw: &str, choices: [&str; N]) -> String {
    format!("unknown value `{raw}`; expected one of: {}", choices.join(", "))
}

use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn global_defaults() {
    let cli = Cli::try_parse_from(["smc-admin", "whoami"]).unwrap();
    assert_eq!(cli.session_file, PathBuf::from(DEFAULT_SESSION_FILE));
    assert!(!cli.verbose);
}

#[test]
fn application_status_is_parsed_from_wire_value() {
    let cli = Cli::try_parse_from(["smc-admin", "applications", "status", "a1", "approved"]).unwrap();
    match cli.command {
        Command::Applications(ApplicationsCommand {
            command: ApplicationsSubcommand::Status { id, status, notes },
        }) => {
            assert_eq!(id, "a1");
            assert_eq!(status, ApplicationStatus::Approved);
            assert_eq!(notes, None);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn unknown_status_lists_choices() {
    let err = Cli::try_parse_from(["smc-admin", "contacts", "status", "c1", "spam"]).unwrap_err();
    assert!(err.to_string().contains("expected one of: new, read, replied, archived"));
}

#[test]
fn export_kind_and_period_parse() {
    assert_eq!(parse_export_kind("contacts"), Ok(ExportKind::Contacts));
    assert!(parse_export_kind("users").is_err());
    assert_eq!(parse_period("7d"), Ok(AnalyticsPeriod::Week));
}

#[test]
fn applications_list_dedupes_by_default() {
    let cli = Cli::try_parse_from(["smc-admin", "applications", "list"]).unwrap();
    let Command::Applications(ApplicationsCommand {
        command: ApplicationsSubcommand::List { all_submissions, limit, .. },
    }) = cli.command
    else {
        panic!("expected applications list");
    };
    assert!(!all_submissions);
    assert_eq!(limit, DEFAULT_PAGE_SIZE);
}

#[test]
fn deletes_require_confirmation() {
    assert!(confirm(true, "contact").is_ok());
    assert_eq!(confirm(false, "contact").unwrap_err().to_string(), "refusing to delete contact without --yes");
}

#[test]
fn blank_text_is_rejected() {
    assert_eq!(non_blank("  ok ", "reason").unwrap(), "ok");
    assert!(non_blank("   ", "reason").is_err());
}

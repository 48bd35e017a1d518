use chrono::{NaiveDate, Utc};
use clap::Parser;
use logseq_meetings::application::{
    init::init, list_meetings, AuthorizeService, ConfigService, SyncMeetingsService,
};
use logseq_meetings::cli::{
    format_config, format_meeting_list, format_notes, format_sync_summary, Cli, Commands,
};
use logseq_meetings::domain::TimeReference;
use logseq_meetings::error::MeetingsError;
use logseq_meetings::infrastructure::{GoogleCalendar, JournalWriter, MeetingsHome};
use logseq_meetings::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Warning: {:#}", e);
    }

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Resolve an optional time reference against today's UTC date
fn resolve_day(time_ref: Option<&str>) -> Result<NaiveDate, MeetingsError> {
    let time_ref = match time_ref {
        Some(raw) => TimeReference::parse(raw)?,
        None => TimeReference::Today,
    };
    Ok(time_ref.resolve(Utc::now().date_naive()))
}

fn print_output(output: &str) {
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}

fn run(cli: Cli) -> Result<(), MeetingsError> {
    match cli.command {
        Some(Commands::Init { path }) => {
            let path = MeetingsHome::init_target(path.or(cli.home))?;
            let home = init(&path)?;
            println!("Wrote {}", home.config_path().display());
            println!("Next: place credentials.json there and run 'logseq-meetings auth'");
            Ok(())
        }
        Some(Commands::Auth) => {
            let home = MeetingsHome::discover(cli.home)?;
            let config = home.load_config()?;
            let service = AuthorizeService::new(home, config, reqwest::blocking::Client::new());

            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            let token_path = service.execute(&mut stdin.lock(), &mut stdout)?;
            println!("Token saved to {}", token_path.display());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let home = MeetingsHome::discover(cli.home)?;
            let service = ConfigService::new(home);

            if list {
                print!("{}", format_config(&service.list()?));
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: logseq-meetings config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: {}",
                    logseq_meetings::infrastructure::config::CONFIG_KEYS.join(", ")
                );
                Ok(())
            }
        }
        Some(Commands::List { time_ref }) => {
            let home = MeetingsHome::discover(cli.home)?;
            let config = home.load_config()?;
            let day = resolve_day(time_ref.as_deref())?;

            let writer = JournalWriter::new(home.journal_dir(&config));
            let meetings = list_meetings(&writer, day)?;
            print_output(&format_meeting_list(&meetings));
            Ok(())
        }
        None => {
            let home = MeetingsHome::discover(cli.home)?;
            let config = home.load_config()?;
            let day = resolve_day(cli.time_ref.as_deref())?;

            let source =
                GoogleCalendar::connect(&config.api_base_url, &home.token_path(&config))?;
            let writer = JournalWriter::new(home.journal_dir(&config));
            let service = SyncMeetingsService::new(source, config, writer);

            let report = service.execute(day, cli.dry_run)?;
            if cli.dry_run {
                print_output(&format_notes(&report.notes));
            } else {
                println!("{}", format_sync_summary(&report));
            }
            Ok(())
        }
    }
}

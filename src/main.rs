use chrono::{Local, NaiveDate};
use clap::Parser;
use diary::application::{init, ConfigService, EntryChanges, EntryService};
use diary::cli::output::short_id;
use diary::cli::{format_diary_detail, format_diary_list, Cli, Commands};
use diary::domain::{DateReference, DateStyle, DiaryDraft, DiaryFilter};
use diary::error::DiaryError;
use diary::infrastructure::FileSystemRepository;
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let config = simplelog::ConfigBuilder::new().build();
    if let Err(err) = simplelog::WriteLogger::init(cli.log_level, config, std::io::stderr()) {
        eprintln!("can not initialize logger: {}", err);
        std::process::exit(1);
    }

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            log::debug!("command failed: {:?}", e);
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn parse_date(input: &str) -> Result<NaiveDate, DiaryError> {
    Ok(DateReference::parse(input)?.resolve(today()))
}

fn run(cli: Cli) -> Result<(), DiaryError> {
    match cli.command {
        Commands::Init {
            path,
            slot,
            date_style,
        } => {
            let style = DateStyle::from_str(&date_style).map_err(DiaryError::Config)?;
            let config = init::init(&path, &slot, style)?;
            println!("Initialized diary at {}", path.display());
            println!("Slot: {}", config.slot);
            Ok(())
        }
        Commands::List {
            starred,
            from,
            to,
            limit,
        } => {
            let filter = DiaryFilter {
                starred_only: starred,
                from: from.as_deref().map(parse_date).transpose()?,
                to: to.as_deref().map(parse_date).transpose()?,
                limit,
            };

            let service = EntryService::open(&FileSystemRepository::discover()?)?;
            let diaries = service.list(&filter);
            println!(
                "{}",
                format_diary_list(&diaries, service.config().date_style).trim_end()
            );
            Ok(())
        }
        Commands::Show { id } => {
            let service = EntryService::open(&FileSystemRepository::discover()?)?;
            let diary = service.show(&id)?;
            print!("{}", format_diary_detail(diary, service.config().date_style));
            Ok(())
        }
        Commands::Add {
            title,
            contents,
            date,
        } => {
            let date = DateReference::parse(&date)?.resolve_timestamp(today());
            let mut service = EntryService::open(&FileSystemRepository::discover()?)?;
            let diary = service.add(DiaryDraft {
                title,
                contents,
                date: Some(date),
            })?;
            // Full id so scripts can capture it; other commands print the short form
            println!("Added {} [{}]", diary.title, diary.id);
            Ok(())
        }
        Commands::Edit {
            id,
            title,
            contents,
            date,
        } => {
            let date = date
                .as_deref()
                .map(|d| DateReference::parse(d).map(|r| r.resolve_timestamp(today())))
                .transpose()?;
            let mut service = EntryService::open(&FileSystemRepository::discover()?)?;
            let diary = service.edit(
                &id,
                EntryChanges {
                    title,
                    contents,
                    date,
                },
            )?;
            println!("Updated {} [{}]", diary.title, short_id(&diary));
            Ok(())
        }
        Commands::Delete { id } => {
            let mut service = EntryService::open(&FileSystemRepository::discover()?)?;
            let diary = service.delete(&id)?;
            println!("Deleted {} [{}]", diary.title, short_id(&diary));
            Ok(())
        }
        Commands::Star { id } => {
            let mut service = EntryService::open(&FileSystemRepository::discover()?)?;
            let diary = service.set_star(&id, true)?;
            println!("Starred {} [{}]", diary.title, short_id(&diary));
            Ok(())
        }
        Commands::Unstar { id } => {
            let mut service = EntryService::open(&FileSystemRepository::discover()?)?;
            let diary = service.set_star(&id, false)?;
            println!("Unstarred {} [{}]", diary.title, short_id(&diary));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileSystemRepository::discover()?);

            if list {
                let config = service.list()?;
                println!("slot = {}", config.slot);
                println!("date_style = {}", config.date_style.name());
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: diary config [--list | <key> [<value>]]");
                println!("Valid keys: slot, date_style, created");
            }
            Ok(())
        }
    }
}

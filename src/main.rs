use clap::Parser;
use jotter::application::{delete_note, list_notes, show_note, status, SaveNoteService};
use jotter::cli::{format_note_detail, format_note_list, format_status, Cli, Commands};
use jotter::domain::NoteDraft;
use jotter::error::Result;
use jotter::infrastructure::logging::init_logging;
use jotter::infrastructure::{AppConfig, FileStorage, MemoryStorage, NoteRepository, NoteStorage};

fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::from_env(cli.data_dir);

    if cli.ephemeral {
        let mut repo = NoteRepository::new(MemoryStorage::new());
        dispatch(cli.command, &config, &mut repo)
    } else {
        let mut repo = NoteRepository::new(FileStorage::new(config.data_dir.clone()));
        dispatch(cli.command, &config, &mut repo)
    }
}

fn dispatch<S: NoteStorage>(
    command: Option<Commands>,
    config: &AppConfig,
    repo: &mut NoteRepository<S>,
) -> Result<()> {
    match command {
        Some(Commands::List) => {
            let notes = list_notes(repo)?;
            println!("{}", format_note_list(&notes).trim_end());
        }
        Some(Commands::Show { id }) => {
            let note = show_note(repo, &id)?;
            print!("{}", format_note_detail(&note));
        }
        Some(Commands::New { title, content, id }) => {
            let mut draft = NoteDraft::new(title, content);
            if let Some(id) = id {
                draft = draft.with_id(id);
            }
            let outcome = SaveNoteService::new(repo).execute(draft)?;
            if outcome.created {
                println!("Created {}", outcome.note.id);
            } else {
                println!("Updated {}", outcome.note.id);
            }
        }
        Some(Commands::Edit { id, title, content }) => {
            let outcome = SaveNoteService::new(repo).edit(&id, title, content)?;
            println!("Updated {}", outcome.note.id);
        }
        Some(Commands::Delete { id }) => {
            let deleted = delete_note(repo, &id)?;
            println!("Deleted {}", deleted.id);
        }
        Some(Commands::Status) => {
            let status = status(config, repo)?;
            print!("{}", format_status(&status));
        }
        None => {
            println!("jotter - Personal notes manager");
            println!("Use --help for usage information");
            return Ok(());
        }
    }

    if !repo.is_persistent() {
        eprintln!(
            "Warning: note storage at {} is unavailable; changes last for this session only",
            repo.storage().describe()
        );
    }

    Ok(())
}

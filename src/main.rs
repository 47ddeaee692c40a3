use clap::Parser;
use dictum::application::init::init;
use dictum::application::{ConfigService, EditSession, QuoteStore};
use dictum::cli::{output, Cli, Commands};
use dictum::error::DictumError;
use dictum::infrastructure::{
    edit_quote_buffer, CommandSpeech, Config, EditorSession, FileSystemRepository,
};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), DictumError> {
    match cli.command {
        Some(Commands::Init { path }) => init(&path),
        Some(Commands::List) => {
            let repo = FileSystemRepository::discover()?;
            let store = open_store(&repo)?;
            print!("{}", output::format_quote_list(store.quotes()));
            Ok(())
        }
        Some(Commands::Show { number }) => {
            let repo = FileSystemRepository::discover()?;
            let store = open_store(&repo)?;
            let index = index_for(number)?;
            let quote = store
                .quote(index)
                .ok_or(DictumError::QuoteNotFound(number))?;
            print!("{}", output::format_quote(quote));
            Ok(())
        }
        Some(Commands::Add { author, text }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let mut store = open_store(&repo)?;
            store.subscribe(|event| println!("{}", output::format_store_event(event)));

            let mut session = EditSession::create();
            apply_edits(&mut session, author, text, &config)?;
            session.commit(&mut store)?;

            store.save()
        }
        Some(Commands::Edit {
            number,
            author,
            text,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let mut store = open_store(&repo)?;
            store.subscribe(|event| println!("{}", output::format_store_event(event)));

            let index = index_for(number)?;
            let original = store
                .quote(index)
                .ok_or(DictumError::QuoteNotFound(number))?;
            let mut session = EditSession::edit(index, original);
            apply_edits(&mut session, author, text, &config)?;

            if store.quote(index) == Some(session.working()) {
                session.discard();
                println!("No changes to quote {}", number);
                return Ok(());
            }

            session.commit(&mut store)?;
            store.save()
        }
        Some(Commands::Remove { number }) => {
            let repo = FileSystemRepository::discover()?;
            let mut store = open_store(&repo)?;
            store.subscribe(|event| println!("{}", output::format_store_event(event)));

            let index = index_for(number)?;
            store
                .remove_at(index)
                .ok_or(DictumError::QuoteNotFound(number))?;

            store.save()
        }
        Some(Commands::Say { number }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let store = open_store(&repo)?;

            let speech = CommandSpeech::new(config.get_speech());
            let quote = number.checked_sub(1).and_then(|index| store.quote(index));
            store.announce(quote, &speech)
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("editor = {}", config.editor);
                println!("speech = {}", config.speech);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: dictum config [--list | <key> [<value>]]");
                println!("Valid keys: editor, speech, created");
                Ok(())
            }
        }
        None => {
            println!("dictum - Terminal quote collection manager");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn open_store(repo: &FileSystemRepository) -> Result<QuoteStore, DictumError> {
    QuoteStore::open(Box::new(repo.quote_file()))
}

// Quote numbers are 1-based on the command line
fn index_for(number: usize) -> Result<usize, DictumError> {
    number
        .checked_sub(1)
        .ok_or(DictumError::QuoteNotFound(number))
}

/// Fill the working copy, either from the given flags or by round-tripping
/// it through the configured editor when no flags were passed
fn apply_edits(
    session: &mut EditSession,
    author: Option<String>,
    text: Option<String>,
    config: &Config,
) -> Result<(), DictumError> {
    if author.is_none() && text.is_none() {
        let editor = EditorSession::new(config.get_editor());
        let edited = edit_quote_buffer(&editor, session.working())?;
        session.working_mut().set_author(edited.author());
        session.working_mut().set_text(edited.text());
    } else {
        if let Some(author) = author {
            session.working_mut().set_author(author);
        }
        if let Some(text) = text {
            session.working_mut().set_text(text);
        }
    }
    Ok(())
}

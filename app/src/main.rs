//! Reference host for the movie catalog: wires configuration, logging, and
//! HTTP execution around the core application state, and binds it to a small
//! interactive terminal front-end. All logic lives in `movies-core`; this
//! binary only renders state and forwards user actions.

mod config;
mod transport;

use std::io::{self, BufRead, Write};

use movies_core::{AppState, Field};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use transport::UreqTransport;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("catalog endpoint: {}", config.api_base);

    let transport = UreqTransport::new();
    let mut state = AppState::new(&config.api_base);

    // Initial load, the terminal equivalent of the page's first render.
    state.refresh(&transport);
    render(&state);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let mut parts = line.trim().splitn(2, ' ');
        let command = parts.next().unwrap_or("");
        let arg = parts.next().unwrap_or("").trim();

        match command {
            "" => {}
            "list" => {
                state.refresh(&transport);
                render(&state);
            }
            "search" => {
                state.set_search(arg);
                render(&state);
            }
            "add" => {
                state.open_create();
                fill_form(&mut state, &mut lines)?;
                submit(&mut state, &transport);
            }
            "edit" => {
                if !state.open_edit(arg) {
                    println!("no movie with id {arg}");
                    continue;
                }
                fill_form(&mut state, &mut lines)?;
                submit(&mut state, &transport);
            }
            "retry" => {
                if state.editor_open() {
                    submit(&mut state, &transport);
                } else {
                    println!("nothing to submit");
                }
            }
            "cancel" => {
                state.close_editor();
                println!("draft discarded");
            }
            "delete" => {
                if state.remove(&transport, arg) {
                    render(&state);
                } else {
                    println!("delete failed");
                }
            }
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("unknown command: {other} (try `help`)"),
        }
    }

    Ok(())
}

fn submit(state: &mut AppState, transport: &UreqTransport) {
    if state.submit(transport) {
        render(state);
    } else {
        // The draft and editor survive a failed write.
        println!("save failed; draft kept (`retry` to submit again, `cancel` to discard)");
    }
}

/// Prompt for each draft field in turn. Empty input keeps the current value,
/// so editing only touches the fields the user retypes.
fn fill_form(
    state: &mut AppState,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<()> {
    let fields = [
        (Field::Title, "title"),
        (Field::Isbn, "isbn"),
        (Field::DirectorFirstname, "director first name"),
        (Field::DirectorLastname, "director last name"),
    ];
    for (field, label) in fields {
        let current = current_value(state, field);
        if current.is_empty() {
            print!("{label}: ");
        } else {
            print!("{label} [{current}]: ");
        }
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let value = line?;
        let value = value.trim();
        if !value.is_empty() {
            state.set_field(field, value);
        }
    }
    Ok(())
}

fn current_value(state: &AppState, field: Field) -> String {
    let draft = state.form().draft();
    match field {
        Field::Title => draft.title.clone(),
        Field::Isbn => draft.isbn.clone(),
        Field::DirectorFirstname => draft.director.firstname.clone(),
        Field::DirectorLastname => draft.director.lastname.clone(),
    }
}

fn render(state: &AppState) {
    if state.list().is_loading() {
        println!("loading movies...");
        return;
    }

    let filtered = state.list().filtered();
    if filtered.is_empty() {
        if state.list().search().is_empty() {
            println!("no movies yet; `add` to create one");
        } else {
            println!("no movies match \"{}\"", state.list().search());
        }
        return;
    }

    println!("{:<38} {:<30} {:<12} director", "id", "title", "isbn");
    for movie in filtered {
        println!(
            "{:<38} {:<30} {:<12} {} {}",
            movie.id,
            movie.title,
            movie.isbn,
            movie.director_firstname(),
            movie.director_lastname()
        );
    }
}

fn print_help() {
    println!("commands:");
    println!("  list             re-fetch and show the catalog");
    println!("  search <term>    filter by title or director name");
    println!("  add              create a movie");
    println!("  edit <id>        edit a movie");
    println!("  retry            re-submit a draft after a failed save");
    println!("  cancel           discard the open draft");
    println!("  delete <id>      delete a movie");
    println!("  quit             exit");
}

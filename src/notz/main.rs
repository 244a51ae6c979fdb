use clap::Parser;
use colored::Colorize;
use notz::api::{CmdMessage, MessageLevel, NoteUpdate, NotzApi, StatusFilter};
use notz::error::Result;
use notz::index::{DisplayIndex, DisplayNote};
use notz::model::Note;
use notz::store::memory::MemoryStore;
use std::io::{self, BufRead, Write};
use unicode_width::UnicodeWidthChar;

mod args;
use args::{split_line, Command, Repl};

const LINE_WIDTH: usize = 72;
const PROMPT: &str = "notz> ";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut api = NotzApi::new(MemoryStore::new());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break; // EOF ends the session
        };
        let line = line?;

        let tokens = match split_line(&line) {
            Ok(tokens) => tokens,
            Err(msg) => {
                println!("{}", msg.red());
                continue;
            }
        };
        if tokens.is_empty() {
            continue;
        }

        let repl = match Repl::try_parse_from(&tokens) {
            Ok(repl) => repl,
            Err(e) => {
                // clap renders its own errors and help output
                let _ = e.print();
                continue;
            }
        };

        match repl.command {
            Command::Add { title, text } => handle_add(&mut api, title, text)?,
            Command::List { done, pending } => handle_list(&api, done, pending)?,
            Command::View { indexes } => handle_view(&api, &indexes)?,
            Command::Edit { index, title, text } => handle_edit(&mut api, index, title, text)?,
            Command::Toggle { indexes } => handle_toggle(&mut api, &indexes)?,
            Command::Delete { indexes } => handle_delete(&mut api, &indexes)?,
            Command::Quit => break,
        }
    }

    println!();
    Ok(())
}

fn handle_add(api: &mut NotzApi<MemoryStore>, title: String, text: String) -> Result<()> {
    let result = api.add_note(title, text)?;
    print_messages(&result.messages);
    if result.mutated() {
        render_list(api)?;
    }
    Ok(())
}

fn handle_list(api: &NotzApi<MemoryStore>, done: bool, pending: bool) -> Result<()> {
    let filter = if done {
        StatusFilter::Done
    } else if pending {
        StatusFilter::Pending
    } else {
        StatusFilter::All
    };
    let result = api.list_notes(filter)?;
    print_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(api: &NotzApi<MemoryStore>, indexes: &[DisplayIndex]) -> Result<()> {
    let result = api.view_notes(indexes)?;
    print_full_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    api: &mut NotzApi<MemoryStore>,
    index: DisplayIndex,
    title: String,
    text: String,
) -> Result<()> {
    let update = NoteUpdate::new(index, title, text);
    let result = api.edit_notes(&[update])?;
    print_messages(&result.messages);
    if result.mutated() {
        render_list(api)?;
    }
    Ok(())
}

fn handle_toggle(api: &mut NotzApi<MemoryStore>, indexes: &[DisplayIndex]) -> Result<()> {
    let result = api.toggle_notes(indexes)?;
    print_messages(&result.messages);
    if result.mutated() {
        render_list(api)?;
    }
    Ok(())
}

fn handle_delete(api: &mut NotzApi<MemoryStore>, indexes: &[DisplayIndex]) -> Result<()> {
    let result = api.delete_notes(indexes)?;
    print_messages(&result.messages);
    if result.mutated() {
        render_list(api)?;
    }
    Ok(())
}

/// Re-displays the whole list, called after every successful mutation.
fn render_list(api: &NotzApi<MemoryStore>) -> Result<()> {
    let result = api.list_notes(StatusFilter::All)?;
    print_notes(&result.listed_notes);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_notes(notes: &[DisplayNote]) {
    if notes.is_empty() {
        println!("No notes.");
        return;
    }

    for dn in notes {
        let idx_str = format!("{:>3}. ", dn.index);
        let available = LINE_WIDTH.saturating_sub(idx_str.len() + marker(&dn.note).len() + 1);
        let row = truncate_to_width(&row_text(&dn.note), available);

        let marker_colored = if dn.note.checked {
            marker(&dn.note).green()
        } else {
            marker(&dn.note).normal()
        };
        let row_colored = if dn.note.checked {
            row.dimmed().strikethrough()
        } else {
            row.normal()
        };
        println!("{}{} {}", idx_str, marker_colored, row_colored);
    }
}

fn print_full_notes(notes: &[DisplayNote]) {
    for (i, dn) in notes.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!(
            "{} {} {}",
            dn.index.to_string().yellow(),
            marker(&dn.note),
            dn.note.title.bold()
        );
        println!("--------------------------------");
        println!("{}", dn.note.text);
    }
}

fn marker(note: &Note) -> &'static str {
    if note.checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Title plus a single-line preview of the body.
fn row_text(note: &Note) -> String {
    let preview: String = note
        .text
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    if preview.is_empty() {
        note.title.clone()
    } else {
        format!("{}  {}", note.title, preview)
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

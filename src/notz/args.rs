use clap::{Parser, Subcommand};
use notz::index::DisplayIndex;

/// One line of shell input, parsed as a command.
///
/// `multicall` makes the first token the command name, which is exactly what
/// a repl wants: `add Groceries "milk and eggs"` parses as the `add`
/// subcommand with two arguments.
#[derive(Parser, Debug)]
#[command(name = "notz", multicall = true)]
#[command(about = "An in-memory note and to-do list", long_about = None)]
pub struct Repl {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new note
    #[command(alias = "a")]
    Add {
        /// Title of the note (3-50 characters)
        title: String,

        /// Body text (up to 120 characters)
        #[arg(default_value = "")]
        text: String,
    },

    /// List notes
    #[command(alias = "ls")]
    List {
        /// Show only checked-off notes
        #[arg(long, conflicts_with = "pending")]
        done: bool,

        /// Show only unchecked notes
        #[arg(long)]
        pending: bool,
    },

    /// Show one or more notes in full
    #[command(alias = "v")]
    View {
        /// Indexes of the notes (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<DisplayIndex>,
    },

    /// Replace the title and text of a note
    #[command(alias = "e")]
    Edit {
        /// Index of the note
        index: DisplayIndex,

        /// New title
        title: String,

        /// New body text
        #[arg(default_value = "")]
        text: String,
    },

    /// Check or uncheck one or more notes
    #[command(alias = "t")]
    Toggle {
        /// Indexes of the notes (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<DisplayIndex>,
    },

    /// Delete one or more notes
    #[command(alias = "rm")]
    Delete {
        /// Indexes of the notes (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<DisplayIndex>,
    },

    /// Exit the shell
    #[command(aliases = ["q", "exit"])]
    Quit,
}

/// Splits an input line into tokens, shell-style.
///
/// Single quotes take everything literally; double quotes allow `\"` and
/// `\\` escapes. An unterminated quote is reported rather than guessed at.
pub fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            '\'' => {
                in_token = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(inner) => current.push(inner),
                        None => return Err("Unmatched single quote".to_string()),
                    }
                }
            }
            '"' => {
                in_token = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(escaped @ ('"' | '\\')) => current.push(escaped),
                            Some(other) => {
                                current.push('\\');
                                current.push(other);
                            }
                            None => return Err("Unmatched double quote".to_string()),
                        },
                        Some(inner) => current.push(inner),
                        None => return Err("Unmatched double quote".to_string()),
                    }
                }
            }
            _ => {
                in_token = true;
                current.push(c);
            }
        }
    }

    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}

//! Line-oriented command loop.
//!
//! | Command          | Effect                                  |
//! |------------------|-----------------------------------------|
//! | `search <args>`  | Show persons matching the given fields  |
//! | `list`           | Show every person                       |
//! | `exit` / `quit`  | Stop reading input                      |

use std::io::{BufRead, Write};

use roster_core::{
  model::{AddressBook, Model},
  role::RoleVocabulary,
};
use roster_search::{SearchCommand, SearchCommandParser};
use tracing::debug;

/// Run commands from `input` against `book`, writing feedback to `out`.
///
/// Command errors are reported and the loop continues; only I/O errors end it
/// early.
pub fn run<R, W>(
  book: &mut AddressBook,
  vocabulary: &RoleVocabulary,
  input: R,
  mut out: W,
) -> anyhow::Result<()>
where
  R: BufRead,
  W: Write,
{
  let parser = SearchCommandParser::new(vocabulary);

  for line in input.lines() {
    let line = line?;
    let line = line.trim();
    if line.is_empty() {
      continue;
    }

    let (word, args) = match line.find(char::is_whitespace) {
      Some(i) => line.split_at(i),
      None => (line, ""),
    };
    debug!(command = word, "read command");

    match word {
      SearchCommand::WORD => match parser.parse(args) {
        Ok(command) => {
          let result = command.execute(book);
          writeln!(out, "{}", result.feedback)?;
          print_persons(book, &mut out)?;
        }
        Err(e) => writeln!(out, "{e}")?,
      },
      "list" => {
        book.show_all();
        writeln!(out, "Listed all persons")?;
        print_persons(book, &mut out)?;
      }
      "exit" | "quit" => break,
      other => writeln!(out, "Unknown command: {other}")?,
    }
  }

  out.flush()?;
  Ok(())
}

fn print_persons<W: Write>(book: &AddressBook, out: &mut W) -> std::io::Result<()> {
  for (i, person) in book.filtered_persons().iter().enumerate() {
    writeln!(out, "{}. {person}", i + 1)?;
  }
  Ok(())
}

use anyhow::Result;
use launch_args::{ArgumentTable, StartupOptions, startup};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

fn main() -> Result<()> {
    // The client receives its whole command line as one raw string; joining
    // our argv stands in for that here.
    let raw = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if raw.is_empty() {
        return repl();
    }
    inspect(&raw)
}

/// Parse one raw line and print what the bootstrap would see.
fn inspect(raw: &str) -> Result<()> {
    let table = ArgumentTable::parse(raw);
    if table.has_flag("-help") {
        println!("{}", startup::help_text());
        return Ok(());
    }
    let tokens: Vec<&str> = table.iter().collect();
    println!("tokens ({}): {:?}", table.len(), tokens);
    let options = StartupOptions::from_table(&table)?;
    println!("{options:#?}");
    Ok(())
}

/// Interactive inspector: each entered line is parsed as a full command line.
fn repl() -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline("args> ") {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                if let Err(err) = inspect(&line) {
                    eprintln!("error: {err:#}");
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

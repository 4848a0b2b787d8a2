//! Delete command - remove a saved profile.

use std::io::{self, BufRead, Write};

use abxrx::AbxError;
use colored::Colorize;
use tracing::debug;

use super::Context;

pub fn run(ctx: &Context, name: &str, yes: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = ctx.store();
    if !store.contains(name)? {
        return Err(AbxError::ProfileNotFound(name.to_string()).into());
    }

    if !yes && !confirm(name)? {
        debug!(name, "deletion declined");
        println!("Deletion cancelled.");
        return Ok(());
    }

    store.delete(name)?;
    println!("{} profile {}", "Deleted".green().bold(), name.white());
    Ok(())
}

/// Ask until the answer is yes or no.
fn confirm(name: &str) -> io::Result<bool> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("Delete profile '{}'? [y/n] ", name);
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(false);
        }
        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("{}", "Please answer y or n.".yellow()),
        }
    }
}

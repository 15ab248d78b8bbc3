//! Console prompts for the interactive path. Kept thin so everything with
//! behaviour worth testing stays in pure functions.

use std::io::{self, Write};

use crate::error::{ExportError, Result};

/// Prints `label: ` on one line and reads a trimmed answer from stdin.
pub fn read_line(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

/// Keeps asking until the operator types something non-empty.
pub fn read_required(label: &str) -> io::Result<String> {
    loop {
        let answer = read_line(label)?;
        if !answer.is_empty() {
            return Ok(answer);
        }
        println!("A value is required.");
    }
}

/// Picks `items[index]`, reporting an out-of-range index as an error.
pub fn select<T>(items: &[T], index: usize) -> Result<&T> {
    items.get(index).ok_or(ExportError::SelectionOutOfRange {
        index,
        count: items.len(),
    })
}

/// Presents a numbered list and loops until the operator picks one entry.
/// `render` produces the display line for each item.
pub fn choose<'a, T>(items: &'a [T], label: &str, render: impl Fn(&T) -> String) -> Result<&'a T> {
    for (index, item) in items.iter().enumerate() {
        println!("[{index}] {}", render(item));
    }
    loop {
        let answer = read_line(label)?;
        match answer.parse::<usize>() {
            Ok(index) => match select(items, index) {
                Ok(item) => return Ok(item),
                Err(error) => println!("{error}. Try again."),
            },
            Err(..) => println!("Could not parse [{answer}] as a number. Try again."),
        }
    }
}

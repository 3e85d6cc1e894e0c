use std::path::PathBuf;

use crate::error::Result;
use crate::format;

pub fn run(file: Option<PathBuf>) -> Result<()> {
    let input = super::read_input(file.as_deref())?;
    let html = format::format_full_response(&input, None);
    println!("{html}");
    Ok(())
}

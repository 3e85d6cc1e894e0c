use std::path::PathBuf;

use crate::error::Result;
use crate::language;

pub fn run(file: Option<PathBuf>, weighted: bool) -> Result<()> {
    let input = super::read_input(file.as_deref())?;
    let tag = if weighted {
        language::classify(&input)
    } else {
        language::detect(&input)
    };
    println!("{tag}");
    Ok(())
}

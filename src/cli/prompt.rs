use std::path::PathBuf;

use crate::error::Result;
use crate::prompt::{build_prompt, TaskType};

pub fn run(task: String, language: String, param: String, file: Option<PathBuf>) -> Result<()> {
    let input = super::read_input(file.as_deref())?;
    let task = TaskType::from_wire(&task).with_param(&param);
    println!("{}", build_prompt(&input, &language, &task));
    Ok(())
}

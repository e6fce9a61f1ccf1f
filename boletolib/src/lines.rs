//! Многострочные поля с ограничением числа строк и длины строки.

use crate::error::{BoletoError, Result};
use serde::Serialize;

pub const INSTRUCTION_LINES: usize = 7;
pub const STATEMENT_LINES: usize = 12;
pub const PAYER_LINES: usize = 3;
pub const LINE_WIDTH: usize = 90;
pub const ADDRESS_WIDTH: usize = 80;

pub(crate) fn check_line(field: &'static str, line: &str, limit: usize) -> Result<()> {
    let actual = line.chars().count();
    if actual > limit {
        return Err(BoletoError::LineTooLong { field, limit, actual });
    }
    Ok(())
}

/// Блок строк, проверенный при присваивании.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TextLines(Vec<String>);

impl TextLines {
    pub fn new<I, S>(field: &'static str, lines: I, max_lines: usize, max_width: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.len() > max_lines {
            return Err(BoletoError::TooManyLines {
                field,
                limit: max_lines,
                actual: lines.len(),
            });
        }
        for line in &lines {
            check_line(field, line, max_width)?;
        }
        Ok(Self(lines))
    }

    pub fn lines(&self) -> &[String] {
        &self.0
    }
}

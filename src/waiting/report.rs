use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub readings: &'a [i64],
    pub waits: &'a [usize],
}

impl Report<'_> {
    /// Index of the first strictly warmer day after `day`, if any.
    pub fn warmer_day(&self, day: usize) -> Option<usize> {
        self.waits
            .get(day)
            .copied()
            .filter(|&w| w > 0)
            .map(|w| day + w)
    }

    pub fn render(&self, format: OutputFormat, detail: bool) -> Result<String> {
        let out = match format {
            OutputFormat::Text if detail => self.detail_lines(),
            OutputFormat::Text => format!("{:?}", self.waits),
            OutputFormat::Json => serde_json::to_string_pretty(self)?,
        };
        Ok(out)
    }

    fn detail_lines(&self) -> String {
        self.readings
            .iter()
            .enumerate()
            .map(|(day, reading)| match self.warmer_day(day) {
                Some(j) => format!("day {day}: {reading} -> wait {} (day {j})", j - day),
                None => format!("day {day}: {reading} -> no warmer day"),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

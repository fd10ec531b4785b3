use crate::error::{AppError, Result};

/// Parse command-line tokens into a sequence of readings.
///
/// Tokens may themselves hold several readings separated by commas or
/// whitespace, so `["73,74", "75"]`, `["73 74 75"]` and `["73", "74", "75"]`
/// are the same input. Blank pieces (a trailing comma, say) are skipped.
/// No tokens at all is a valid, empty sequence.
pub fn parse(tokens: &[String]) -> Result<Vec<i64>> {
    let mut readings = Vec::with_capacity(tokens.len());

    let pieces = tokens
        .iter()
        .flat_map(|t| t.split(|c: char| c == ',' || c.is_whitespace()));
    for piece in pieces {
        if piece.is_empty() {
            continue;
        }
        let value = piece.parse::<i64>().map_err(|e| {
            AppError::InvalidArgument(format!(
                "reading #{} {piece:?} is not an integer: {e}",
                readings.len() + 1
            ))
        })?;
        readings.push(value);
    }

    tracing::debug!("parsed {} readings from {} tokens", readings.len(), tokens.len());
    Ok(readings)
}

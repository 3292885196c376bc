use crate::domain::order::DecodeError;

// ============================================================================
// Table Loader
// ============================================================================
//
// A raw table is the result of splitting file content on '\n' and each line
// on ','. The first row is the header and the last row is the empty string
// left behind by the trailing newline; both are dropped unconditionally.
//
// ============================================================================

pub type RawRow = Vec<String>;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("{table}: line {line}: {source}")]
    Decode {
        table: &'static str,
        /// 1-based line number in the source file
        line: usize,
        #[source]
        source: DecodeError,
    },
}

/// Drop header and trailer rows, then decode every remaining row.
///
/// Fewer than two rows yields an empty table. The first undecodable row
/// aborts the load.
pub fn load_table<T, F>(
    table: &'static str,
    raw_rows: &[RawRow],
    decode: F,
) -> Result<Vec<T>, LoadError>
where
    F: Fn(&[String]) -> Result<T, DecodeError>,
{
    let body = match raw_rows.len() {
        0 | 1 => &raw_rows[..0],
        n => &raw_rows[1..n - 1],
    };

    let entities = body
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            // +1 for the header, +1 for 1-based numbering
            decode(row.as_slice()).map_err(|source| LoadError::Decode {
                table,
                line: idx + 2,
                source,
            })
        })
        .collect::<Result<Vec<T>, LoadError>>()?;

    tracing::debug!(table = table, rows = entities.len(), "Table loaded");
    Ok(entities)
}

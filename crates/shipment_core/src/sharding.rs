use std::ops::Range;

use crate::error::MatrixError;

/// A contiguous block of driver rows handled by one worker task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkAssignment {
    pub chunk_id: usize,
    pub start_index: usize,
    pub end_index_exclusive: usize,
}

impl ChunkAssignment {
    pub fn len(&self) -> usize {
        self.end_index_exclusive - self.start_index
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index_exclusive
    }
}

/// Split `total_rows` into fixed-size chunks; the last one may be shorter.
pub fn compute_chunk_plan(
    total_rows: usize,
    chunk_size: usize,
) -> Result<Vec<ChunkAssignment>, MatrixError> {
    if chunk_size == 0 {
        return Err(MatrixError::Chunking(
            "chunk_size must be a positive integer".to_string(),
        ));
    }

    let chunk_count = total_rows.div_ceil(chunk_size);
    if chunk_count == 0 {
        return Err(MatrixError::Chunking("No rows to process".to_string()));
    }

    let assignments: Vec<ChunkAssignment> = (0..chunk_count)
        .map(|chunk_id| {
            let start_index = chunk_id * chunk_size;
            ChunkAssignment {
                chunk_id,
                start_index,
                end_index_exclusive: (start_index + chunk_size).min(total_rows),
            }
        })
        .collect();

    validate_assignments(total_rows, &assignments)?;
    Ok(assignments)
}

/// Walk the plan with a row cursor: each chunk starts where the previous one
/// ended, holds at least one row, and is numbered by its position.
fn validate_assignments(
    total_rows: usize,
    assignments: &[ChunkAssignment],
) -> Result<(), MatrixError> {
    let mut next_row = 0;
    for (position, chunk) in assignments.iter().enumerate() {
        if chunk.chunk_id != position {
            return Err(MatrixError::Chunking(format!(
                "chunk {} is listed at position {position}",
                chunk.chunk_id
            )));
        }
        if chunk.start_index != next_row {
            return Err(MatrixError::Chunking(format!(
                "chunk {} starts at row {}, expected row {next_row}",
                chunk.chunk_id, chunk.start_index
            )));
        }
        if chunk.end_index_exclusive <= chunk.start_index {
            return Err(MatrixError::Chunking(format!(
                "chunk {} holds no rows",
                chunk.chunk_id
            )));
        }
        next_row = chunk.end_index_exclusive;
    }

    if next_row != total_rows {
        return Err(MatrixError::Chunking(format!(
            "chunk plan covers {next_row} of {total_rows} rows"
        )));
    }
    Ok(())
}

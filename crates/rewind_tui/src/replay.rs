//! Non-interactive replay of a move list.

use anyhow::{Context, Result};
use rewind_tictactoe::{Snapshot, Timeline};
use tracing::{info, instrument};

/// Plays `moves`, optionally jumps to `jump`, and returns the snapshot.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>) -> Result<Snapshot> {
    let mut timeline = Timeline::replay(moves).context("Failed to replay moves")?;

    if let Some(move_number) = jump {
        timeline
            .jump_to(move_number)
            .with_context(|| format!("Failed to jump to move #{}", move_number))?;
    }

    info!(len = timeline.len(), current = timeline.current_move(), "Replay finished");
    Ok(timeline.snapshot())
}

/// Formats a snapshot as plain text: status, board, then history.
pub fn format_snapshot(snapshot: &Snapshot) -> String {
    let mut out = format!("{}\n\n{}\n\nHistory:\n", snapshot.status, snapshot.board.display());
    for entry in &snapshot.entries {
        let marker = if entry.is_current { ">" } else { " " };
        out.push_str(&format!("{} {}\n", marker, entry.label()));
    }
    out
}

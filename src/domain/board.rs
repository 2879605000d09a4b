use crate::error::{MarqueeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier for a board card.
///
/// The board's click contract addresses cards by (column, index), but
/// every card also carries an id so callers can track one across moves
/// without caring where it currently sits in a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(Uuid);

impl CardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single card on the kanban board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: CardId::new(),
            title: title.into(),
        }
    }
}

/// The three board columns in workflow order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Todo,
    Progress,
    Done,
}

impl ColumnKind {
    /// The single forward edge out of this column, or `None` from the
    /// terminal column. Cards never skip a column or move backward.
    pub fn next(&self) -> Option<ColumnKind> {
        match self {
            Self::Todo => Some(Self::Progress),
            Self::Progress => Some(Self::Done),
            Self::Done => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Todo => write!(f, "todo"),
            Self::Progress => write!(f, "progress"),
            Self::Done => write!(f, "done"),
        }
    }
}

/// Outcome of an advance: either the board after the move, or the
/// terminal-state notification for a card that is already done. The
/// notification is informational, not an error; the collaborator decides
/// how to surface it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Moved(Board),
    AlreadyComplete,
}

/// Click-to-advance kanban board state.
///
/// Cards live in exactly one column at a time and only ever move along
/// `todo -> progress -> done`. Like [`Directory`], every mutation is a
/// functional update returning the next board.
///
/// [`Directory`]: crate::domain::user::Directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub todo: Vec<Card>,
    pub progress: Vec<Card>,
    pub done: Vec<Card>,
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo board the dashboard ships with
    pub fn demo() -> Self {
        Self {
            todo: vec![Card::new("Add new movie"), Card::new("Schedule show")],
            progress: vec![Card::new("Confirm booking")],
            done: vec![Card::new("Payment received")],
        }
    }

    /// Returns the cards in a column
    pub fn column(&self, kind: ColumnKind) -> &[Card] {
        match kind {
            ColumnKind::Todo => &self.todo,
            ColumnKind::Progress => &self.progress,
            ColumnKind::Done => &self.done,
        }
    }

    fn column_mut(&mut self, kind: ColumnKind) -> &mut Vec<Card> {
        match kind {
            ColumnKind::Todo => &mut self.todo,
            ColumnKind::Progress => &mut self.progress,
            ColumnKind::Done => &mut self.done,
        }
    }

    /// Locates a card by id
    pub fn find_card(&self, id: CardId) -> Option<(ColumnKind, usize)> {
        for kind in [ColumnKind::Todo, ColumnKind::Progress, ColumnKind::Done] {
            if let Some(index) = self.column(kind).iter().position(|c| c.id == id) {
                return Some((kind, index));
            }
        }
        None
    }

    /// Moves the card at `index` in `column` one column forward.
    ///
    /// The card is removed from its slot (remaining cards keep their
    /// relative order) and appended to the end of the next column. A card
    /// already in `done` stays put and the call reports
    /// [`Advance::AlreadyComplete`].
    ///
    /// An out-of-range `index` is a caller bug, not a board transition,
    /// and fails with `InvalidIndex`.
    pub fn advance(&self, column: ColumnKind, index: usize) -> Result<Advance> {
        let len = self.column(column).len();
        if index >= len {
            return Err(MarqueeError::InvalidIndex {
                column: column.to_string(),
                index,
                len,
            });
        }

        let Some(next) = column.next() else {
            return Ok(Advance::AlreadyComplete);
        };

        let mut board = self.clone();
        let card = board.column_mut(column).remove(index);
        board.column_mut(next).push(card);
        Ok(Advance::Moved(board))
    }

    /// Advances a card by its stable id, wherever it currently sits
    pub fn advance_card(&self, id: CardId) -> Result<Advance> {
        let (column, index) = self
            .find_card(id)
            .ok_or_else(|| MarqueeError::CardNotFound(id.to_string()))?;
        self.advance(column, index)
    }

    /// Total cards across all three columns
    pub fn card_count(&self) -> usize {
        self.todo.len() + self.progress.len() + self.done.len()
    }
}

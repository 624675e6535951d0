//! Response shape handed to API callers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::{Game, ServiceConfig};

/// `{"id": ..., "url": ..., "status": {"1": 6, ..., "14": 0}}`
///
/// `status` maps 1-based pit numbers to stone counts and is left out when
/// the operation does not report the board (game creation).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub id: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BTreeMap<usize, u32>>,
}

impl GameView {
    /// Identifier and URL only.
    #[must_use]
    pub fn summary(game: &Game, config: &ServiceConfig) -> Self {
        Self {
            id: game.id.to_string(),
            url: config.game_url(&game.id),
            status: None,
        }
    }

    /// Identifier, URL and the current board.
    #[must_use]
    pub fn with_status(game: &Game, config: &ServiceConfig) -> Self {
        Self {
            status: Some(game.board.pit_status()),
            ..Self::summary(game, config)
        }
    }
}

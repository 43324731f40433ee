//! Decorative asset lookups.
//!
//! The engine asks an `AssetLookup` for an avatar per player when a session
//! starts and for an icon each time a card is drawn. Requests are
//! fire-and-forget: nothing comes back to the engine, so a slow or failing
//! image source can never block or alter a turn.

use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::core::Player;

/// A request for one decorative image.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssetRequest {
    /// Avatar keyed by the player's display name.
    Avatar { player: String },
    /// Icon keyed by the rank's fixed label.
    RankIcon { label: String },
}

impl AssetRequest {
    #[must_use]
    pub fn avatar(player: &Player) -> Self {
        AssetRequest::Avatar { player: player.name.clone() }
    }

    #[must_use]
    pub fn rank_icon(rank: Rank) -> Self {
        AssetRequest::RankIcon { label: rank.icon_label().to_string() }
    }
}

/// Receives asset requests from the engine.
pub trait AssetLookup {
    fn request(&mut self, request: AssetRequest);
}

/// Drops every request.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoAssets;

impl AssetLookup for NoAssets {
    fn request(&mut self, _request: AssetRequest) {}
}

/// Keeps every request, in order. Handy for tests and for UIs that batch
/// their fetches.
#[derive(Clone, Debug, Default)]
pub struct RecordingAssets {
    requests: Vec<AssetRequest>,
}

impl RecordingAssets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn requests(&self) -> &[AssetRequest] {
        &self.requests
    }

    /// Take the pending requests, leaving the log empty.
    pub fn drain(&mut self) -> Vec<AssetRequest> {
        std::mem::take(&mut self.requests)
    }
}

impl AssetLookup for RecordingAssets {
    fn request(&mut self, request: AssetRequest) {
        self.requests.push(request);
    }
}

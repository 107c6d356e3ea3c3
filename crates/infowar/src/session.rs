//! Game session management for multiplayer play.
//!
//! A session pairs one [`Infowar`] game with the two players seated at it.
//! The engine's history stays the single source of truth; seats only decide
//! which faction a player's proposals are made for.

use derive_more::{Display, Error};
use derive_new::new;
use infowar_rules::{Faction, GameSnapshot, HistoryEntry, Infowar, Position, RulesError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Unique identifier for a player.
pub type PlayerId = String;

/// A player seated in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, new)]
pub struct Player {
    /// Player's unique ID.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Faction this player controls.
    pub faction: Faction,
}

/// Something a player asks the engine to do on their faction's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Proposal {
    /// Put a new piece on the board.
    Place {
        /// Target slot.
        position: Position,
    },
    /// Move one piece a single step.
    Move {
        /// Slot the piece leaves.
        src: Position,
        /// Slot the piece enters.
        dest: Position,
    },
}

impl Proposal {
    /// History entry this proposal becomes when made by `player`.
    pub fn into_entry(self, player: Faction) -> HistoryEntry {
        match self {
            Self::Place { position } => HistoryEntry::placement(player, position),
            Self::Move { src, dest } => HistoryEntry::movement(player, src, dest),
        }
    }
}

/// Session-level failure.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// No session with this ID.
    #[display("Session not found: {session_id}")]
    NotFound {
        /// Requested session.
        session_id: SessionId,
    },

    /// A session with this ID already exists.
    #[display("Session already exists: {session_id}")]
    AlreadyExists {
        /// Conflicting session.
        session_id: SessionId,
    },

    /// Both seats are taken.
    #[display("Session already has 2 players")]
    SessionFull,

    /// The player already holds a seat.
    #[display("Player already seated: {player_id}")]
    AlreadySeated {
        /// Offending player.
        player_id: PlayerId,
    },

    /// The player holds no seat in this session.
    #[display("Unknown player: {player_id}")]
    UnknownPlayer {
        /// Offending player.
        player_id: PlayerId,
    },

    /// The engine rejected the proposal.
    #[display("Rule violation: {source}")]
    Rules {
        /// What the engine reported.
        source: RulesError,
    },
}

impl From<RulesError> for SessionError {
    fn from(source: RulesError) -> Self {
        Self::Rules { source }
    }
}

/// A game session with up to two players.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Session ID.
    pub id: SessionId,
    /// The game.
    pub game: Infowar,
    /// Player controlling the insurgents.
    pub insurgent: Option<Player>,
    /// Player controlling the state.
    pub state: Option<Player>,
}

impl GameSession {
    /// Creates a session around a fresh game.
    #[instrument]
    pub fn new(id: SessionId) -> Self {
        info!(session_id = %id, "Creating new game session");
        Self::with_game(id, Infowar::new())
    }

    /// Creates a session around a game rebuilt from `entries`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Rules`] if the history does not replay.
    #[instrument(skip(entries), fields(len = entries.len()))]
    pub fn from_history(id: SessionId, entries: Vec<HistoryEntry>) -> Result<Self, SessionError> {
        let game = Infowar::from_history(entries)?;
        info!(session_id = %id, phase = %game.current_phase(), "Restored game session");
        Ok(Self::with_game(id, game))
    }

    fn with_game(id: SessionId, game: Infowar) -> Self {
        Self {
            id,
            game,
            insurgent: None,
            state: None,
        }
    }

    /// Seats a player in the first free seat, insurgents first.
    ///
    /// Returns the faction the player now controls.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn register_player(&mut self, id: PlayerId, name: String) -> Result<Faction, SessionError> {
        if self.get_player(&id).is_some() {
            warn!(player_id = %id, "Player is already seated");
            return Err(SessionError::AlreadySeated { player_id: id });
        }

        let faction = match (&self.insurgent, &self.state) {
            (None, _) => Faction::Insurgent,
            (Some(_), None) => Faction::State,
            (Some(_), Some(_)) => {
                warn!(player_id = %id, "Session already has 2 players");
                return Err(SessionError::SessionFull);
            }
        };

        info!(player_id = %id, %faction, "Registering player");
        let player = Some(Player::new(id, name, faction));
        match faction {
            Faction::Insurgent => self.insurgent = player,
            Faction::State => self.state = player,
        }
        Ok(faction)
    }

    /// Gets the player with the given ID.
    pub fn get_player(&self, player_id: &str) -> Option<&Player> {
        [self.insurgent.as_ref(), self.state.as_ref()]
            .into_iter()
            .flatten()
            .find(|player| player.id == player_id)
    }

    /// Checks if it's the given player's turn to move.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn is_players_turn(&self, player_id: &str) -> bool {
        let Some(player) = self.get_player(player_id) else {
            debug!(player_id, "Player not found in session");
            return false;
        };
        let is_turn = self.game.current_turn() == Some(player.faction);
        debug!(player_id, faction = %player.faction, is_turn, "Checked if player's turn");
        is_turn
    }

    /// Applies a player's proposal to the game.
    ///
    /// # Errors
    ///
    /// [`SessionError::UnknownPlayer`] for players without a seat, otherwise
    /// [`SessionError::Rules`] with the engine's verdict. The game is left
    /// unchanged on error.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn propose(&mut self, player_id: &str, proposal: Proposal) -> Result<GameSnapshot, SessionError> {
        let faction = self
            .get_player(player_id)
            .map(|player| player.faction)
            .ok_or_else(|| {
                warn!(player_id, "Unknown player attempted a proposal");
                SessionError::UnknownPlayer {
                    player_id: player_id.to_string(),
                }
            })?;

        self.game.append(proposal.into_entry(faction)).inspect_err(|error| {
            warn!(player_id, %faction, %error, "Proposal rejected");
        })?;

        let snapshot = self.game.snapshot();
        info!(player_id, status = %snapshot.status_string(), "Proposal accepted");
        Ok(snapshot)
    }
}

/// Manages all game sessions.
#[derive(Debug, Clone)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, GameSession>>>,
}

impl SessionManager {
    /// Creates a new session manager.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Engine calls are atomic, so a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, GameSession>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_session<T>(
        &self,
        session_id: &str,
        f: impl FnOnce(&mut GameSession) -> Result<T, SessionError>,
    ) -> Result<T, SessionError> {
        let mut sessions = self.lock();
        let session = sessions.get_mut(session_id).ok_or_else(|| {
            debug!(session_id, "Session not found");
            SessionError::NotFound {
                session_id: session_id.to_string(),
            }
        })?;
        f(session)
    }

    fn insert(&self, session: GameSession) -> Result<SessionId, SessionError> {
        let mut sessions = self.lock();
        if sessions.contains_key(&session.id) {
            warn!(session_id = %session.id, "Session already exists");
            return Err(SessionError::AlreadyExists {
                session_id: session.id,
            });
        }
        let id = session.id.clone();
        sessions.insert(id.clone(), session);
        info!(session_id = %id, "Created new session");
        Ok(id)
    }

    /// Creates a session with a fresh game.
    #[instrument(skip(self))]
    pub fn create_session(&self, id: SessionId) -> Result<SessionId, SessionError> {
        self.insert(GameSession::new(id))
    }

    /// Creates a session whose game is rebuilt from `entries`.
    #[instrument(skip(self, entries))]
    pub fn create_session_from_history(
        &self,
        id: SessionId,
        entries: Vec<HistoryEntry>,
    ) -> Result<SessionId, SessionError> {
        self.insert(GameSession::from_history(id, entries)?)
    }

    /// Gets a copy of a session by ID.
    #[instrument(skip(self))]
    pub fn get_session(&self, id: &str) -> Option<GameSession> {
        self.lock().get(id).cloned()
    }

    /// Atomically seats a player. Returns the faction assigned.
    #[instrument(skip(self))]
    pub fn register_player(
        &self,
        session_id: &str,
        player_id: PlayerId,
        name: String,
    ) -> Result<Faction, SessionError> {
        self.with_session(session_id, |session| session.register_player(player_id, name))
    }

    /// Atomically applies a player's proposal and returns the new snapshot.
    #[instrument(skip(self))]
    pub fn propose(
        &self,
        session_id: &str,
        player_id: &str,
        proposal: Proposal,
    ) -> Result<GameSnapshot, SessionError> {
        self.with_session(session_id, |session| session.propose(player_id, proposal))
    }

    /// Current snapshot of a session's game.
    #[instrument(skip(self))]
    pub fn snapshot(&self, session_id: &str) -> Result<GameSnapshot, SessionError> {
        self.with_session(session_id, |session| Ok(session.game.snapshot()))
    }

    /// Full history of a session's game.
    #[instrument(skip(self))]
    pub fn history(&self, session_id: &str) -> Result<Vec<HistoryEntry>, SessionError> {
        self.with_session(session_id, |session| Ok(session.game.history().to_vec()))
    }

    /// Lists all active session IDs, sorted.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = self.lock().keys().cloned().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed sessions");
        ids
    }

    /// Removes a session, returning it.
    #[instrument(skip(self))]
    pub fn remove_session(&self, id: &str) -> Result<GameSession, SessionError> {
        let removed = self.lock().remove(id).ok_or_else(|| SessionError::NotFound {
            session_id: id.to_string(),
        })?;
        info!(session_id = id, "Removed session");
        Ok(removed)
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

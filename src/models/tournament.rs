//! Tournament, its configuration, and TournamentError.

use crate::models::game::GameId;
use crate::models::matches::{Match, MatchId, RoundType};
use crate::models::player::{Player, PlayerId};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Why a pair of game scores is not a finished game.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum ScoreError {
    #[error("Score has not yet reached 11")]
    BelowEleven,
    #[error("Game must win by exactly 2")]
    MustWinByTwo,
}

/// Which matches a player swap may touch.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapScope {
    RoundRobin,
    BracketRoundOne,
}

impl fmt::Display for SwapScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapScope::RoundRobin => write!(f, "round robin"),
            SwapScope::BracketRoundOne => write!(f, "bracket round 1"),
        }
    }
}

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TournamentError {
    #[error(transparent)]
    InvalidScore(#[from] ScoreError),
    #[error("Match {0} not found")]
    MatchNotFound(MatchId),
    #[error("Players can only be changed in {0} matches")]
    PlayersLocked(SwapScope),
    #[error("Cannot change players after games have been played")]
    GamesAlreadyPlayed,
    #[error("Player 1 and Player 2 must be different")]
    SamePlayerTwice,
    #[error("Game {0} not found")]
    GameNotFound(GameId),
    /// The series already has a winner; no further games can be added.
    #[error("Match already has a winner")]
    MatchDecided,
    /// The play-in winner has already started bracket round 1.
    #[error("Cannot change the play-in after its winner has started round 1")]
    PlayInLocked,
    /// One side is still a bye or the pending play-in winner.
    #[error("Match does not have two players yet")]
    UnresolvedOpponent,
    #[error("Player name cannot be empty")]
    EmptyPlayerName,
    #[error("Need at least 2 players")]
    NotEnoughPlayers,
    /// The latest round still has matches without a winner.
    #[error("Current round is not complete")]
    IncompleteRound,
    #[error("All {0} round robin rounds have been played")]
    NoRoundsRemaining(u32),
    /// Tournament is not in a state that allows this action.
    #[error("Invalid state for this action")]
    InvalidState,
    #[error("Player {0} not found")]
    PlayerNotFound(PlayerId),
    /// Names are unique, case-insensitive.
    #[error("A player with this name already exists")]
    DuplicatePlayerName,
    #[error("Could not read player list: {0}")]
    Import(String),
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Lifecycle of a tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    /// Round robin rounds are being played.
    #[default]
    RoundRobin,
    /// Single-elimination bracket has been seeded.
    Bracket,
    /// A final bracket round produced a single winner.
    Completed,
}

/// Series length for bracket rounds containing `matches` matches (e.g. 1 → final, 2 → semis).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketRoundConfig {
    pub matches: u32,
    pub best_of: u32,
}

/// Settings supplied when a tournament is created.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub name: String,
    #[serde(default = "today")]
    pub start_date: NaiveDate,
    #[serde(default = "default_round_robin_rounds")]
    pub round_robin_rounds: u32,
    #[serde(default = "default_best_of")]
    pub round_robin_best_of: u32,
    #[serde(default)]
    pub bracket_rounds: Vec<BracketRoundConfig>,
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn default_round_robin_rounds() -> u32 {
    3
}

fn default_best_of() -> u32 {
    1
}

impl TournamentConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start_date: today(),
            round_robin_rounds: default_round_robin_rounds(),
            round_robin_best_of: default_best_of(),
            bracket_rounds: Vec::new(),
        }
    }
}

/// Aggregate root: players, configuration, and every match played or scheduled.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub start_date: NaiveDate,
    pub status: TournamentStatus,
    pub round_robin_rounds: u32,
    pub round_robin_best_of: u32,
    pub bracket_rounds: Vec<BracketRoundConfig>,
    pub players: Vec<Player>,
    /// Players still taking part in pairings and seeding. None means everyone.
    pub active_players: Option<Vec<PlayerId>>,
    /// Set once when the bracket is seeded; keeps seeding stable in later rounds.
    pub player_ranking: Option<Vec<PlayerId>>,
    pub matches: Vec<Match>,
}

impl Tournament {
    /// Create a tournament in RoundRobin state with no matches yet.
    pub fn new(config: TournamentConfig, players: Vec<Player>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: config.name,
            start_date: config.start_date,
            status: TournamentStatus::RoundRobin,
            round_robin_rounds: config.round_robin_rounds,
            round_robin_best_of: config.round_robin_best_of,
            bracket_rounds: config.bracket_rounds,
            players,
            active_players: None,
            player_ranking: None,
            matches: Vec::new(),
        }
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Add a player. Names must be unique (case-insensitive) and non-empty.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<&Player, TournamentError> {
        if self.status == TournamentStatus::Completed {
            return Err(TournamentError::InvalidState);
        }
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyPlayerName);
        }
        let is_duplicate = self
            .players
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(name_trimmed));
        if is_duplicate {
            return Err(TournamentError::DuplicatePlayerName);
        }
        self.players.push(Player::new(name_trimmed));
        let idx = self.players.len() - 1;
        Ok(&self.players[idx])
    }

    /// Ids of players eligible for future pairings and seeding, in `active_players` order.
    pub fn active_player_ids(&self) -> Vec<PlayerId> {
        match &self.active_players {
            Some(ids) => ids.clone(),
            None => self.players.iter().map(|p| p.id.clone()).collect(),
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        match &self.active_players {
            Some(ids) => ids.iter().any(|a| a == id),
            None => self.player(id).is_some(),
        }
    }

    /// Restrict future pairings to `ids`. Historical results are unaffected.
    pub fn set_active_players(&mut self, ids: Vec<PlayerId>) -> Result<(), TournamentError> {
        if let Some(unknown) = ids.iter().find(|id| self.player(id).is_none()) {
            return Err(TournamentError::PlayerNotFound(unknown.clone()));
        }
        self.active_players = Some(ids);
        Ok(())
    }

    pub fn get_match(&self, id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn get_match_mut(&mut self, id: MatchId) -> Option<&mut Match> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    /// Highest round robin round generated so far (0 before the first round).
    pub fn current_round_robin_round(&self) -> u32 {
        self.matches
            .iter()
            .filter(|m| m.round == RoundType::RoundRobin)
            .map(|m| m.bracket_round)
            .max()
            .unwrap_or(0)
    }

    /// Configured series length for a bracket round with exactly `matches` matches.
    pub fn bracket_best_of(&self, matches: usize) -> Option<u32> {
        self.bracket_rounds
            .iter()
            .find(|c| c.matches as usize == matches)
            .map(|c| c.best_of)
    }
}

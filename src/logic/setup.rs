//! Setup: import players and start a tournament with its first round robin round.

use crate::logic::round_robin::{generate_round_robin_round, PairingOrder};
use crate::models::{Player, Tournament, TournamentConfig, TournamentError};
use rand::Rng;
use serde::Deserialize;
use std::io::Read;

#[derive(Deserialize)]
struct PlayerRow {
    #[serde(default)]
    id: Option<String>,
    name: String,
}

/// Read players from CSV with a `name` column and an optional `id` column.
///
/// Blank names are skipped; repeated names (case-insensitive) are rejected.
pub fn import_players_csv<T: Read>(reader: T) -> Result<Vec<Player>, TournamentError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut players: Vec<Player> = Vec::new();
    for row in rdr.deserialize::<PlayerRow>() {
        let row = row.map_err(|e| TournamentError::Import(e.to_string()))?;
        if row.name.is_empty() {
            continue;
        }
        if players.iter().any(|p| p.name.eq_ignore_ascii_case(&row.name)) {
            return Err(TournamentError::DuplicatePlayerName);
        }
        let player = match row.id.filter(|id| !id.is_empty()) {
            Some(id) => Player::with_id(id, row.name),
            None => Player::new(row.name),
        };
        players.push(player);
    }
    Ok(players)
}

/// Create a tournament in round robin and pair its first round randomly.
pub fn start_tournament<R>(
    config: TournamentConfig,
    players: Vec<Player>,
    rng: &mut R,
) -> Result<Tournament, TournamentError>
where
    R: Rng + ?Sized,
{
    if players.len() < 2 {
        return Err(TournamentError::NotEnoughPlayers);
    }
    for (i, p) in players.iter().enumerate() {
        if players[..i].iter().any(|q| q.name.eq_ignore_ascii_case(&p.name)) {
            return Err(TournamentError::DuplicatePlayerName);
        }
    }

    let mut tournament = Tournament::new(config, players);
    let first_round = generate_round_robin_round(&tournament, PairingOrder::Random, rng)?;
    tournament.matches.extend(first_round);
    log::debug!(
        "Started tournament {} ({}) with {} players",
        tournament.id,
        tournament.name,
        tournament.players.len()
    );
    Ok(tournament)
}

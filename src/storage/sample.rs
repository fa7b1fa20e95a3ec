//! The literal sample dataset loaded on every run

use super::models::{Match, Player, Statistic, Team};

pub fn teams() -> Vec<Team> {
    vec![
        team(1, "Lions", "New York"),
        team(2, "Tigers", "Los Angeles"),
        team(3, "Bears", "Chicago"),
    ]
}

pub fn players() -> Vec<Player> {
    vec![
        player(1, "John Doe", 1, "Forward"),
        player(2, "Jane Smith", 2, "Guard"),
        player(3, "Mike Brown", 3, "Center"),
    ]
}

pub fn matches() -> Vec<Match> {
    vec![
        Match {
            match_id: 1,
            date: "2023-01-01".to_string(),
            home_team_id: 1,
            away_team_id: 2,
            home_score: 100,
            away_score: 98,
        },
        Match {
            match_id: 2,
            date: "2023-01-02".to_string(),
            home_team_id: 2,
            away_team_id: 3,
            home_score: 95,
            away_score: 102,
        },
    ]
}

pub fn statistics() -> Vec<Statistic> {
    vec![
        statistic(1, 1, 1, 30, 5, 10),
        statistic(2, 1, 2, 25, 7, 8),
        statistic(3, 2, 3, 20, 3, 12),
    ]
}

fn team(team_id: i64, team_name: &str, city: &str) -> Team {
    Team {
        team_id,
        team_name: team_name.to_string(),
        city: city.to_string(),
    }
}

fn player(player_id: i64, player_name: &str, team_id: i64, position: &str) -> Player {
    Player {
        player_id,
        player_name: player_name.to_string(),
        team_id,
        position: position.to_string(),
    }
}

fn statistic(
    stat_id: i64,
    match_id: i64,
    player_id: i64,
    points: i64,
    assists: i64,
    rebounds: i64,
) -> Statistic {
    Statistic {
        stat_id,
        match_id,
        player_id,
        points,
        assists,
        rebounds,
    }
}

//! Integration tests for command handlers

use clap::Parser;
use nhl_stats::{
    cli::{Commands, GameCmd, NhlCli, PlayerCmd, TeamCmd},
    commands::{handle_game, handle_player, handle_team, render},
    ClientConfig, GameId, NhlError, PlayerId, Season, StatSplit, StatsApi, TeamId,
};
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn api_for(server: &MockServer) -> StatsApi {
    StatsApi::new(ClientConfig::with_base_url(server.uri())).unwrap()
}

#[test]
fn test_parse_team_stat_command() {
    let cli = NhlCli::parse_from([
        "nhl-stats",
        "team",
        "--team",
        "New Jersey Devils",
        "stat",
        "wins",
        "--season",
        "20162017",
    ]);

    match cli.command {
        Commands::Team {
            team,
            cmd: TeamCmd::Stat { name, season },
        } => {
            assert_eq!(team, "New Jersey Devils");
            assert_eq!(name, "wins");
            assert_eq!(season, Some(Season::new(2016).unwrap()));
        }
        other => panic!("Unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_games_against_command() {
    let cli = NhlCli::parse_from([
        "nhl-stats", "-vv", "team", "-t", "5", "games-against", "--opponent", "1", "--season",
        "20172018",
    ]);

    assert_eq!(cli.verbose, 2);
    match cli.command {
        Commands::Team {
            cmd: TeamCmd::GamesAgainst { opponent, season },
            ..
        } => {
            assert_eq!(opponent, TeamId::new(1));
            assert_eq!(season, Season::new(2017).unwrap());
        }
        other => panic!("Unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_player_stats_with_split() {
    let cli = NhlCli::parse_from([
        "nhl-stats", "player", "--player", "8471724", "stats", "--split", "byMonth",
    ]);

    match cli.command {
        Commands::Player {
            player,
            cmd: PlayerCmd::Stats { season, split },
        } => {
            assert_eq!(player, PlayerId::new(8471724));
            assert_eq!(season, None);
            assert_eq!(split, Some(StatSplit::ByMonth));
        }
        other => panic!("Unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_rejects_bad_season() {
    let result = NhlCli::try_parse_from([
        "nhl-stats", "team", "--team", "1", "roster", "--season", "2016",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_parse_game_coaches_away() {
    let cli = NhlCli::parse_from(["nhl-stats", "game", "-g", "2017020001", "coaches", "--away"]);
    match cli.command {
        Commands::Game {
            game,
            cmd: GameCmd::Coaches { away },
        } => {
            assert_eq!(game, GameId::new(2017020001));
            assert!(away);
        }
        other => panic!("Unexpected command: {:?}", other),
    }
}

#[tokio::test]
async fn test_handle_team_stat_by_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams/1"))
        .and(query_param("expand", "team.stats"))
        .and(query_param("season", "20162017"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "teams": [{
                "id": 1,
                "name": "New Jersey Devils",
                "teamStats": [{
                    "type": { "displayName": "statsSingleSeason" },
                    "splits": [{ "stat": { "wins": 28 } }]
                }]
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let output = handle_team(
        &api_for(&mock_server),
        "new jersey devils",
        TeamCmd::Stat {
            name: "wins".to_string(),
            season: Some(Season::new(2016).unwrap()),
        },
    )
    .await
    .unwrap();

    assert_eq!(output, json!(28));
    assert_eq!(render(&output).unwrap(), "28");
}

#[tokio::test]
async fn test_handle_team_unknown_name() {
    let mock_server = MockServer::start().await;

    let result = handle_team(
        &api_for(&mock_server),
        "Atlanta Flames",
        TeamCmd::NextGame,
    )
    .await;

    assert!(matches!(result, Err(NhlError::UnknownTeam { .. })));
}

#[tokio::test]
async fn test_handle_player_info() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/8471724"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "people": [{ "id": 8471724, "fullName": "Kris Letang" }]
        })))
        .mount(&mock_server)
        .await;

    let output = handle_player(&api_for(&mock_server), PlayerId::new(8471724), PlayerCmd::Info)
        .await
        .unwrap();

    assert_eq!(output["fullName"], json!("Kris Letang"));
    assert_eq!(output["id"], json!(8471724));
}

#[tokio::test]
async fn test_handle_game_coaches_home() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/game/2017020001/boxscore"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "teams": {
                "home": {
                    "team": { "id": 52 },
                    "coaches": [{
                        "person": { "fullName": "Paul Maurice" },
                        "position": { "code": "HC", "name": "Head Coach", "type": "Head Coach", "abbreviation": "Head Coach" }
                    }]
                },
                "away": { "team": { "id": 10 } }
            }
        })))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);

    let home = handle_game(&api, GameId::new(2017020001), GameCmd::Coaches { away: false })
        .await
        .unwrap();
    assert_eq!(home[0]["person"]["fullName"], json!("Paul Maurice"));

    let away = handle_game(&api, GameId::new(2017020001), GameCmd::Coaches { away: true })
        .await
        .unwrap();
    assert_eq!(away, json!([]));
}

//! Integration tests for the game client against a mocked NHL API

use nhl_stats::{ClientConfig, GameId, NhlError, StatsApi, TeamId};
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

const GAME: u64 = 2017020001;

fn boxscore_response() -> Value {
    json!({
        "copyright": "NHL and the NHL Shield are registered trademarks of the National Hockey League.",
        "teams": {
            "away": {
                "team": { "id": 10, "name": "Toronto Maple Leafs", "link": "/api/v1/teams/10" },
                "teamStats": { "teamSkaterStats": { "goals": 7, "pim": 6, "shots": 36 } },
                "players": {
                    "ID8478483": {
                        "person": { "id": 8478483, "fullName": "Mitchell Marner" },
                        "jerseyNumber": "16",
                        "position": { "code": "R", "name": "Right Wing", "type": "Forward", "abbreviation": "RW" },
                        "stats": { "skaterStats": { "goals": 1, "assists": 1 } }
                    },
                    "ID8479318": {
                        "person": { "id": 8479318, "fullName": "Auston Matthews" },
                        "jerseyNumber": "34",
                        "position": { "code": "C", "name": "Center", "type": "Forward", "abbreviation": "C" },
                        "stats": { "skaterStats": { "goals": 1, "assists": 0 } }
                    }
                },
                "goalies": [8475789],
                "skaters": [8478483, 8479318],
                "onIce": [],
                "scratches": [8476853],
                "coaches": [{
                    "person": { "fullName": "Mike Babcock", "link": "/api/v1/people/null" },
                    "position": { "code": "HC", "name": "Head Coach", "type": "Head Coach", "abbreviation": "Head Coach" }
                }]
            },
            "home": {
                "team": { "id": 52, "name": "Winnipeg Jets", "link": "/api/v1/teams/52" },
                "teamStats": { "teamSkaterStats": { "goals": 2 } },
                "players": {
                    "ID8471218": {
                        "person": { "id": 8471218, "fullName": "Blake Wheeler" },
                        "jerseyNumber": "26",
                        "position": { "code": "R", "name": "Right Wing", "type": "Forward", "abbreviation": "RW" },
                        "stats": {}
                    }
                },
                "goalies": [],
                "skaters": [8471218],
                "coaches": [
                    {
                        "person": { "fullName": "Paul Maurice", "link": "/api/v1/people/null" },
                        "position": { "code": "HC", "name": "Head Coach", "type": "Head Coach", "abbreviation": "Head Coach" }
                    },
                    {
                        "person": { "fullName": "Charlie Huddy", "link": "/api/v1/people/null" },
                        "position": { "code": "AC", "name": "Assistant Coach", "type": "Assistant Coach", "abbreviation": "Assistant Coach" }
                    }
                ]
            }
        },
        "officials": [{ "official": { "id": 2040, "fullName": "Francis Charron" }, "officialType": "Referee" }]
    })
}

async fn mount_boxscore(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/game/{}/boxscore", GAME)))
        .respond_with(ResponseTemplate::new(200).set_body_json(boxscore_response()))
        .mount(server)
        .await;
}

fn api_for(server: &MockServer) -> StatsApi {
    StatsApi::new(ClientConfig::with_base_url(server.uri())).unwrap()
}

#[cfg(test)]
mod game_client_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_boxscore() {
        let mock_server = MockServer::start().await;
        mount_boxscore(&mock_server).await;

        let boxscore = api_for(&mock_server)
            .game(GameId::new(GAME))
            .get_boxscore()
            .await
            .unwrap();

        assert_eq!(boxscore.officials.len(), 1);
        assert_eq!(boxscore.teams.away.team_stats["teamSkaterStats"]["goals"], json!(7));
    }

    #[tokio::test]
    async fn test_get_teams() {
        let mock_server = MockServer::start().await;
        mount_boxscore(&mock_server).await;

        let teams = api_for(&mock_server)
            .game(GameId::new(GAME))
            .get_teams()
            .await
            .unwrap();

        assert_eq!(teams.home.team.id, TeamId::new(52));
        assert_eq!(teams.away.team.name.as_deref(), Some("Toronto Maple Leafs"));
    }

    #[tokio::test]
    async fn test_get_players_per_side() {
        let mock_server = MockServer::start().await;
        mount_boxscore(&mock_server).await;

        let api = api_for(&mock_server);
        let game = api.game(GameId::new(GAME));

        let home = game.get_players(true).await.unwrap();
        assert_eq!(home.len(), 1);
        assert_eq!(home["ID8471218"].person.full_name, "Blake Wheeler");

        let away = game.get_players(false).await.unwrap();
        assert_eq!(away.len(), 2);
        assert_eq!(away["ID8479318"].jersey_number.as_deref(), Some("34"));
    }

    #[tokio::test]
    async fn test_get_coaches_per_side() {
        let mock_server = MockServer::start().await;
        mount_boxscore(&mock_server).await;

        let api = api_for(&mock_server);
        let game = api.game(GameId::new(GAME));

        let home = game.get_coaches(true).await.unwrap();
        assert_eq!(home.len(), 2);
        assert_eq!(home[1].position.code, "AC");

        let away = game.get_coaches(false).await.unwrap();
        assert_eq!(away[0].person.full_name, "Mike Babcock");
    }

    #[tokio::test]
    async fn test_boxscore_missing_teams_is_json_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/game/{}/boxscore", GAME)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "officials": [] })))
            .mount(&mock_server)
            .await;

        let result = api_for(&mock_server)
            .game(GameId::new(GAME))
            .get_boxscore()
            .await;

        assert!(matches!(result, Err(NhlError::Json(_))));
    }

    #[test]
    fn test_game_resource_url() {
        let api = StatsApi::new(ClientConfig::with_base_url("http://127.0.0.1:9/api/v1")).unwrap();
        let game = api.game(GameId::new(GAME));
        assert_eq!(game.id(), GameId::new(GAME));
        assert_eq!(game.resource().url, "http://127.0.0.1:9/api/v1/game/2017020001");
    }
}

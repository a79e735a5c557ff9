use super::*;

#[test]
fn test_expand_query_without_season() {
    let params = expand_query(EXPAND_ROSTER, None);
    assert_eq!(params, vec![("expand", "team.roster".to_string())]);
}

#[test]
fn test_expand_query_with_season_only_adds_season() {
    let without = expand_query(EXPAND_STATS, None);
    let with = expand_query(EXPAND_STATS, Some(Season::new(2016).unwrap()));

    assert_eq!(with.len(), without.len() + 1);
    assert_eq!(with[..without.len()], without[..]);
    assert_eq!(with.last().unwrap(), &("season", "20162017".to_string()));
}

#[test]
fn test_schedule_query() {
    let params = schedule_query(TeamId::new(5), Season::new(2017).unwrap());
    assert_eq!(
        params,
        vec![
            ("teamId", "5".to_string()),
            ("season", "20172018".to_string())
        ]
    );
}

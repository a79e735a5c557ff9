use super::*;

#[test]
fn test_resolve_split_with_season_defaults_to_single_season() {
    assert_eq!(
        resolve_split(Some(Season::new(2016).unwrap()), None),
        StatSplit::StatsSingleSeason
    );
}

#[test]
fn test_resolve_split_without_season_switches_to_year_by_year() {
    assert_eq!(resolve_split(None, None), StatSplit::YearByYear);
}

#[test]
fn test_resolve_split_explicit_split_wins() {
    assert_eq!(
        resolve_split(None, Some(StatSplit::HomeAndAway)),
        StatSplit::HomeAndAway
    );
    assert_eq!(
        resolve_split(Some(Season::new(2016).unwrap()), Some(StatSplit::ByMonth)),
        StatSplit::ByMonth
    );
}

#[test]
fn test_stats_query_order() {
    let params = stats_query(StatSplit::StatsSingleSeason, Some(Season::new(2017).unwrap()));
    assert_eq!(
        params,
        vec![
            ("stats", "statsSingleSeason".to_string()),
            ("season", "20172018".to_string())
        ]
    );
}

#[test]
fn test_stats_query_without_season() {
    let params = stats_query(StatSplit::YearByYear, None);
    assert_eq!(params, vec![("stats", "yearByYear".to_string())]);
}

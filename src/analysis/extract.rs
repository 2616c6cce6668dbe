use super::reconcile::accumulate;
use crate::api::models::{CompleteStatsDto, ModeStatsDto};
use crate::playtime::parse_time_string;
use crate::store::HeroTimes;

/// Time played per hero in one game mode. Heroes without a `timePlayed`
/// value are left out rather than recorded as zero.
pub fn extract_mode_time(stats: &ModeStatsDto) -> HeroTimes {
    let mut result = HeroTimes::new();

    let Some(career) = &stats.career_stats else {
        return result;
    };

    for (hero, info) in career {
        let time_played = info
            .as_ref()
            .and_then(|info| info.game.as_ref())
            .and_then(|game| game.time_played.as_deref())
            .filter(|time| !time.is_empty());

        if let Some(time) = time_played {
            let total = result.entry(hero.clone()).or_insert(0);
            *total = total.saturating_add(parse_time_string(time));
        }
    }

    result
}

/// Sums [`extract_mode_time`] over quick play and competitive.
pub fn extract_all_modes_time(stats: &CompleteStatsDto) -> HeroTimes {
    stats
        .modes()
        .map(extract_mode_time)
        .fold(HeroTimes::new(), |totals, mode| accumulate(totals, &mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::parse_complete_stats;

    #[test]
    fn sums_a_hero_across_modes() {
        let stats = parse_complete_stats(
            r#"{
                "quickPlayStats": {"careerStats": {"Ana": {"game": {"timePlayed": "1:30"}}}},
                "competitiveStats": {"careerStats": {"Ana": {"game": {"timePlayed": "0:45"}}}}
            }"#,
        )
        .unwrap();

        assert_eq!(extract_all_modes_time(&stats)["Ana"], 135);
    }

    #[test]
    fn skips_heroes_without_time_played() {
        let stats = parse_complete_stats(
            r#"{
                "quickPlayStats": {"careerStats": {
                    "Ana": {"game": {"timePlayed": "2:00"}},
                    "Mercy": {"game": {"timePlayed": null}},
                    "Moira": {"game": {}},
                    "Kiriko": {"combat": {}},
                    "Lifeweaver": null
                }}
            }"#,
        )
        .unwrap();

        let times = extract_all_modes_time(&stats);
        assert_eq!(times.len(), 1);
        assert_eq!(times["Ana"], 120);
    }

    #[test]
    fn empty_time_played_is_skipped() {
        let stats = parse_complete_stats(
            r#"{"quickPlayStats": {"careerStats": {"Ana": {"game": {"timePlayed": ""}}}}}"#,
        )
        .unwrap();

        assert!(extract_all_modes_time(&stats).is_empty());
    }

    #[test]
    fn malformed_time_is_recorded_as_zero() {
        let stats = parse_complete_stats(
            r#"{"competitiveStats": {"careerStats": {"Ana": {"game": {"timePlayed": "1:02:03"}}}}}"#,
        )
        .unwrap();

        assert_eq!(extract_all_modes_time(&stats).get("Ana"), Some(&0));
    }

    #[test]
    fn missing_or_null_modes_yield_nothing() {
        let stats = parse_complete_stats(
            r#"{"private": true, "quickPlayStats": null, "competitiveStats": {"careerStats": null}}"#,
        )
        .unwrap();

        assert!(extract_all_modes_time(&stats).is_empty());
        assert!(extract_all_modes_time(&CompleteStatsDto::default()).is_empty());
    }
}

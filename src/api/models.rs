use serde::Deserialize;
use std::collections::BTreeMap;

// /complete response. Every level is optional: private profiles and heroes
// never played come back as null or missing keys.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteStatsDto {
    #[serde(default)]
    pub private: Option<bool>,
    #[serde(default)]
    pub quick_play_stats: Option<ModeStatsDto>,
    #[serde(default)]
    pub competitive_stats: Option<ModeStatsDto>,
}

impl CompleteStatsDto {
    /// Quick play and competitive blocks, in that order, skipping absent ones.
    pub fn modes(&self) -> impl Iterator<Item = &ModeStatsDto> {
        [&self.quick_play_stats, &self.competitive_stats]
            .into_iter()
            .flatten()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeStatsDto {
    #[serde(default)]
    pub career_stats: Option<BTreeMap<String, Option<HeroCareerDto>>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HeroCareerDto {
    #[serde(default)]
    pub game: Option<GameStatsDto>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatsDto {
    #[serde(default)]
    pub time_played: Option<String>,
}

pub fn parse_complete_stats(body: &str) -> Result<CompleteStatsDto, serde_json::Error> {
    serde_json::from_str(body)
}

// URL builders for the ow-api.com stats service

pub const USER_AGENT: &str = "ow_playtime/0.1.0";

pub fn complete_stats_url(base: &str, platform: &str, region: &str, tag: &str) -> String {
    format!(
        "{}/{}/{}/{}/complete",
        base.trim_end_matches('/'),
        platform,
        region,
        tag
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_complete_stats_url() {
        assert_eq!(
            complete_stats_url("https://ow-api.com/v1/stats/", "pc", "us", "factor-11595"),
            "https://ow-api.com/v1/stats/pc/us/factor-11595/complete"
        );
    }
}

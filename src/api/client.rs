use crate::config::Config;
use crate::error::AppError;
use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::num::NonZeroU32;
use std::thread;

use super::endpoints::{complete_stats_url, USER_AGENT};
use super::models::{parse_complete_stats, CompleteStatsDto};

pub struct OverwatchApiClient {
    config: Config,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    clock: DefaultClock,
}

impl OverwatchApiClient {
    pub fn new(config: Config) -> Self {
        // ow-api.com is a free community service, one request per second is plenty
        let rate_limiter = RateLimiter::direct(Quota::per_second(NonZeroU32::MIN));
        OverwatchApiClient {
            config,
            rate_limiter,
            clock: DefaultClock::default(),
        }
    }

    fn wait_for_slot(&self) {
        while let Err(not_until) = self.rate_limiter.check() {
            thread::sleep(not_until.wait_time_from(self.clock.now()));
        }
    }

    fn execute_request(&self, tag: &str, url: &str) -> Result<String, AppError> {
        self.wait_for_slot();
        log::debug!("GET {}", url);

        let response = ureq::get(url).set("User-Agent", USER_AGENT).call();

        match response {
            Ok(resp) if resp.status() == 200 => {
                resp.into_string().map_err(|e| AppError::HttpError(e.to_string()))
            }
            Ok(resp) => Err(AppError::StatsUnavailable {
                tag: tag.to_string(),
                status: resp.status(),
            }),
            Err(ureq::Error::Status(status, _)) => Err(AppError::StatsUnavailable {
                tag: tag.to_string(),
                status,
            }),
            Err(e) => Err(AppError::HttpError(e.to_string())),
        }
    }

    /// Both game modes' career stats for one account. No retries.
    pub fn get_complete_stats(&self, tag: &str) -> Result<CompleteStatsDto, AppError> {
        let url = complete_stats_url(
            &self.config.api_base,
            &self.config.platform,
            &self.config.region,
            tag,
        );

        let body = self.execute_request(tag, &url)?;
        parse_complete_stats(&body).map_err(|e| AppError::JsonError(format!("{}: {}", tag, e)))
    }
}

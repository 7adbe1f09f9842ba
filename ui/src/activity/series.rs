//! Daily commit-intensity series behind the activity heatmap.
//!
//! The remote source reports weekly buckets of per-day commit counts. We
//! flatten them, clamp each day to the display range and fit the result to a
//! one-year window, most recent day last. When the remote source is
//! unavailable a random series is shown instead, so the panel never ends up
//! empty.

use api::{ApiResult, CommitWeek, GitHubClient, GitHubTransport, ReqwestTransport};
use rand::Rng;
use time::Date;
use tracing::{debug, warn};

use crate::core::config::PortfolioConfig;

use super::calendar;
use super::tier::IntensityTier;

/// Days covered by the heatmap.
pub const DAYS_IN_SERIES: usize = 365;
/// Highest displayable intensity; larger counts render identically.
pub const MAX_INTENSITY: u8 = 4;

/// Exactly one year of per-day intensities in `0..=MAX_INTENSITY`, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyIntensity([u8; DAYS_IN_SERIES]);

impl DailyIntensity {
    /// Clamp raw daily counts and fit them to the window: shorter input is
    /// zero-padded at the front, longer input keeps its most recent suffix.
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let clamped: Vec<u8> = counts.into_iter().map(clamp_count).collect();
        let recent = &clamped[clamped.len().saturating_sub(DAYS_IN_SERIES)..];

        let mut days = [0u8; DAYS_IN_SERIES];
        days[DAYS_IN_SERIES - recent.len()..].copy_from_slice(recent);
        Self(days)
    }

    /// Flatten weekly buckets in chronological order.
    pub fn from_weeks(weeks: &[CommitWeek]) -> Self {
        Self::from_counts(weeks.iter().flat_map(|week| week.days.iter().copied()))
    }

    pub fn synthesize() -> Self {
        Self::synthesize_with(&mut rand::thread_rng())
    }

    /// Independent uniform samples in `0..=MAX_INTENSITY`.
    pub fn synthesize_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut days = [0u8; DAYS_IN_SERIES];
        for day in days.iter_mut() {
            *day = rng.gen_range(0..=MAX_INTENSITY);
        }
        Self(days)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    pub fn tiers(&self) -> impl Iterator<Item = IntensityTier> + '_ {
        self.iter().map(|day| IntensityTier::from_count(u32::from(day)))
    }

    pub fn active_days(&self) -> usize {
        self.iter().filter(|day| *day > 0).count()
    }
}

impl Default for DailyIntensity {
    fn default() -> Self {
        Self([0; DAYS_IN_SERIES])
    }
}

fn clamp_count(count: u32) -> u8 {
    // Fits: MAX_INTENSITY < u8::MAX.
    count.min(u32::from(MAX_INTENSITY)) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesSource {
    Remote,
    Synthetic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivitySeries {
    pub intensity: DailyIntensity,
    pub source: SeriesSource,
    /// Date of the last cell.
    pub last_day: Date,
}

impl ActivitySeries {
    /// The window ends on the Saturday closing the most recent week, not on
    /// today.
    pub fn from_weeks(weeks: &[CommitWeek]) -> Self {
        Self {
            intensity: DailyIntensity::from_weeks(weeks),
            source: SeriesSource::Remote,
            last_day: calendar::window_end(weeks).unwrap_or_else(calendar::today),
        }
    }

    pub fn synthetic() -> Self {
        Self {
            intensity: DailyIntensity::synthesize(),
            source: SeriesSource::Synthetic,
            last_day: calendar::today(),
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.source == SeriesSource::Synthetic
    }
}

/// Two-stage strategy: one remote attempt, synthetic data on any failure.
#[derive(Debug, Clone)]
pub struct ActivitySeriesBuilder<T = ReqwestTransport> {
    client: GitHubClient<T>,
}

impl<T: GitHubTransport> ActivitySeriesBuilder<T> {
    pub fn new(client: GitHubClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &GitHubClient<T> {
        &self.client
    }

    /// Never fails. The remote source is only contacted when both the subject
    /// and the credential are present.
    pub async fn build(&self, subject_id: Option<&str>, credential: Option<&str>) -> ActivitySeries {
        let (Some(subject), Some(credential)) = (present(subject_id), present(credential)) else {
            debug!("commit activity needs a subject and a credential; using synthetic series");
            return ActivitySeries::synthetic();
        };

        match self.fetch_weeks(subject, credential).await {
            Ok(weeks) => ActivitySeries::from_weeks(&weeks),
            Err(error) => {
                warn!(%error, subject, "commit activity unavailable; using synthetic series");
                ActivitySeries::synthetic()
            }
        }
    }

    pub async fn try_remote(&self, subject: &str, credential: &str) -> ApiResult<DailyIntensity> {
        let weeks = self.fetch_weeks(subject, credential).await?;
        Ok(DailyIntensity::from_weeks(&weeks))
    }

    async fn fetch_weeks(&self, subject: &str, credential: &str) -> ApiResult<Vec<CommitWeek>> {
        let weeks = self.client.commit_activity(subject, Some(credential)).await?;
        debug!(subject, weeks = weeks.len(), "commit activity fetched");
        Ok(weeks)
    }
}

/// Build the heatmap series for the configured subject.
pub async fn load_activity(config: &PortfolioConfig) -> ActivitySeries {
    match GitHubClient::with_base_url(config.api_base_url()) {
        Ok(client) => {
            ActivitySeriesBuilder::new(client)
                .build(config.subject(), config.credential())
                .await
        }
        Err(error) => {
            warn!(%error, "GitHub client unavailable; using synthetic series");
            ActivitySeries::synthetic()
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ApiError, GitHubRequest, RawResponse};
    use async_trait::async_trait;
    use futures::executor::block_on;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::{Cell, RefCell};
    use time::macros::date;

    struct StubTransport {
        calls: Cell<usize>,
        response: RefCell<Option<ApiResult<RawResponse>>>,
    }

    impl StubTransport {
        fn replying(response: ApiResult<RawResponse>) -> Self {
            Self {
                calls: Cell::new(0),
                response: RefCell::new(Some(response)),
            }
        }

        fn ok(body: String) -> Self {
            Self::replying(Ok(RawResponse { status: 200, body }))
        }
    }

    #[async_trait(?Send)]
    impl GitHubTransport for StubTransport {
        async fn get(&self, _request: GitHubRequest) -> ApiResult<RawResponse> {
            self.calls.set(self.calls.get() + 1);
            self.response
                .borrow_mut()
                .take()
                .unwrap_or_else(|| Err(ApiError::NetworkFailure("exhausted".into())))
        }
    }

    fn builder(transport: StubTransport) -> ActivitySeriesBuilder<StubTransport> {
        ActivitySeriesBuilder::new(GitHubClient::new(transport))
    }

    fn weeks_ending(last_sunday: Date, count: usize) -> Vec<CommitWeek> {
        let last = last_sunday.midnight().assume_utc().unix_timestamp();
        (0..count)
            .map(|index| CommitWeek {
                week: last - (count - 1 - index) as i64 * 604_800,
                days: vec![0; 7],
            })
            .collect()
    }

    fn weeks_body(weeks: usize, fill: u32) -> String {
        let weeks: Vec<CommitWeek> = (0..weeks)
            .map(|index| CommitWeek {
                week: 1_600_000_000 + index as i64 * 604_800,
                days: vec![fill; 7],
            })
            .collect();
        serde_json::to_string(&weeks).unwrap()
    }

    fn assert_valid(intensity: &DailyIntensity) {
        assert_eq!(intensity.as_slice().len(), DAYS_IN_SERIES);
        assert!(intensity.iter().all(|day| day <= MAX_INTENSITY));
    }

    #[test]
    fn short_input_is_clamped_and_front_padded() {
        let intensity = DailyIntensity::from_counts([0, 1, 2, 3, 4, 9]);

        let days = intensity.as_slice();
        assert!(days[..359].iter().all(|day| *day == 0));
        assert_eq!(&days[359..], &[0, 1, 2, 3, 4, 4]);
    }

    #[test]
    fn long_input_keeps_most_recent_suffix() {
        let counts: Vec<u32> = (0..400).map(|i| i % 7).collect();
        let intensity = DailyIntensity::from_counts(counts.iter().copied());

        let expected: Vec<u8> = counts[35..].iter().map(|c| (*c).min(4) as u8).collect();
        assert_eq!(intensity.as_slice(), expected.as_slice());
    }

    #[test]
    fn exact_year_is_unchanged() {
        let counts: Vec<u32> = (0..365).map(|i| i % 5).collect();
        let intensity = DailyIntensity::from_counts(counts.iter().copied());
        assert!(intensity
            .iter()
            .zip(counts.iter())
            .all(|(day, raw)| u32::from(day) == *raw));
    }

    #[test]
    fn empty_input_is_all_zero() {
        let intensity = DailyIntensity::from_counts(std::iter::empty::<u32>());
        assert_eq!(intensity, DailyIntensity::default());
        assert_eq!(intensity.active_days(), 0);
    }

    #[test]
    fn weeks_flatten_in_chronological_order() {
        let weeks = vec![
            CommitWeek {
                week: 0,
                days: vec![1, 0, 0, 0, 0, 0, 0],
            },
            CommitWeek {
                week: 604_800,
                days: vec![0, 0, 0, 0, 0, 0, 7],
            },
        ];

        let intensity = DailyIntensity::from_weeks(&weeks);

        let tail = &intensity.as_slice()[DAYS_IN_SERIES - 14..];
        assert_eq!(tail, &[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4]);
        assert_eq!(intensity.active_days(), 2);
    }

    #[test]
    fn commit_lands_on_its_own_date() {
        let mut weeks = weeks_ending(date!(2026 - 10 - 11), 52);
        // Wednesday 2026-10-14.
        weeks[51].days[3] = 1;

        let series = ActivitySeries::from_weeks(&weeks);

        assert_eq!(series.last_day, date!(2026 - 10 - 17));
        let index = series
            .intensity
            .iter()
            .position(|day| day > 0)
            .unwrap();
        assert_eq!(calendar::day_at(series.last_day, index), date!(2026 - 10 - 14));
    }

    #[test]
    fn remote_series_ends_on_the_last_reported_saturday() {
        let weeks = weeks_ending(date!(2026 - 10 - 11), 52);
        let builder = builder(StubTransport::ok(serde_json::to_string(&weeks).unwrap()));

        let series = block_on(builder.build(Some("wiltark"), Some("token")));

        assert_eq!(series.source, SeriesSource::Remote);
        assert_eq!(series.last_day, date!(2026 - 10 - 17));
    }

    #[test]
    fn synthetic_series_ends_today() {
        let series = ActivitySeries::synthetic();
        assert_eq!(series.last_day, calendar::today());
    }

    #[test]
    fn synthetic_series_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let intensity = DailyIntensity::synthesize_with(&mut rng);
        assert_valid(&intensity);
        // A year of uniform draws over five values reaches both extremes.
        assert!(intensity.iter().any(|day| day == 0));
        assert!(intensity.iter().any(|day| day == MAX_INTENSITY));
    }

    #[test]
    fn remote_year_is_used_when_fetch_succeeds() {
        let builder = builder(StubTransport::ok(weeks_body(52, 2)));

        let series = block_on(builder.build(Some("wiltark"), Some("token")));

        assert_eq!(series.source, SeriesSource::Remote);
        assert_valid(&series.intensity);
        // 52 weeks = 364 days, so exactly one leading pad day.
        assert_eq!(series.intensity.as_slice()[0], 0);
        assert!(series.intensity.as_slice()[1..].iter().all(|day| *day == 2));
        assert_eq!(builder.client().transport().calls.get(), 1);
    }

    #[test]
    fn missing_credential_skips_network() {
        let builder = builder(StubTransport::ok(weeks_body(52, 1)));

        let series = block_on(builder.build(Some("wiltark"), None));

        assert!(series.is_synthetic());
        assert_valid(&series.intensity);
        assert_eq!(builder.client().transport().calls.get(), 0);
    }

    #[test]
    fn blank_subject_skips_network() {
        let builder = builder(StubTransport::ok(weeks_body(52, 1)));

        let series = block_on(builder.build(Some("   "), Some("token")));

        assert!(series.is_synthetic());
        assert_eq!(builder.client().transport().calls.get(), 0);
    }

    #[test]
    fn network_failure_falls_back_to_synthetic() {
        let builder = builder(StubTransport::replying(Err(ApiError::NetworkFailure(
            "dns lookup failed".into(),
        ))));

        let series = block_on(builder.build(Some("wiltark"), Some("token")));

        assert!(series.is_synthetic());
        assert_valid(&series.intensity);
        assert_eq!(builder.client().transport().calls.get(), 1);
    }

    #[test]
    fn upstream_rejection_falls_back_to_synthetic() {
        let builder = builder(StubTransport::replying(Ok(RawResponse {
            status: 403,
            body: r#"{"message":"rate limited"}"#.into(),
        })));

        let series = block_on(builder.build(Some("wiltark"), Some("token")));

        assert!(series.is_synthetic());
        assert_valid(&series.intensity);
    }

    #[test]
    fn malformed_body_falls_back_to_synthetic() {
        let builder = builder(StubTransport::ok("<html>oops</html>".into()));

        let series = block_on(builder.build(Some("wiltark"), Some("token")));

        assert!(series.is_synthetic());
        assert_valid(&series.intensity);
    }

    #[test]
    fn try_remote_surfaces_the_error() {
        let builder = builder(StubTransport::ok("{}".into()));

        let err = block_on(builder.try_remote("wiltark", "token")).unwrap_err();

        assert!(matches!(err, ApiError::MalformedResponse(_)));
    }
}

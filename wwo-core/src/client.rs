use std::{convert::TryFrom, fmt};

use tracing::{debug, warn};

use crate::{
    Config,
    decode::decode,
    error::WwoError,
    model::{Local, Marine, PastLocal, PastMarine, Report, Search, Ski, TimeZone},
    transport::{HttpTransport, Options, Transport},
};

pub const HOST: &str = "api.worldweatheronline.com";
const PATH_PREFIX: &str = "/premium/v1/";
const PATH_SUFFIX: &str = ".ashx";

/// The report endpoints of the premium API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Local,
    Marine,
    Ski,
    PastLocal,
    PastMarine,
    Search,
    TimeZone,
}

impl Endpoint {
    /// The path segment of the endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Local => "weather",
            Endpoint::Marine => "marine",
            Endpoint::Ski => "ski",
            Endpoint::PastLocal => "past-weather",
            Endpoint::PastMarine => "past-marine",
            Endpoint::Search => "search",
            Endpoint::TimeZone => "tz",
        }
    }

    pub const fn all() -> &'static [Endpoint] {
        &[
            Endpoint::Local,
            Endpoint::Marine,
            Endpoint::Ski,
            Endpoint::PastLocal,
            Endpoint::PastMarine,
            Endpoint::Search,
            Endpoint::TimeZone,
        ]
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Endpoint {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Endpoint::all()
            .iter()
            .copied()
            .find(|e| e.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown endpoint '{value}'. Supported endpoints: weather, marine, ski, \
                     past-weather, past-marine, search, tz."
                )
            })
    }
}

/// The result of one report request.
///
/// A report and an error can be present at the same time: decode failures
/// and provider-reported errors come with whatever part of the report was
/// filled in. Only a transport failure leaves the report out.
#[derive(Debug)]
#[must_use]
pub struct Outcome<R> {
    inner: Inner<R>,
}

#[derive(Debug)]
enum Inner<R> {
    Complete(R),
    Partial(R, WwoError),
    Failed(WwoError),
}

impl<R> Outcome<R> {
    fn complete(report: R) -> Self {
        Self { inner: Inner::Complete(report) }
    }

    fn partial(report: R, error: WwoError) -> Self {
        Self { inner: Inner::Partial(report, error) }
    }

    fn failed(error: WwoError) -> Self {
        Self { inner: Inner::Failed(error) }
    }

    pub fn report(&self) -> Option<&R> {
        match &self.inner {
            Inner::Complete(r) | Inner::Partial(r, _) => Some(r),
            Inner::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&WwoError> {
        match &self.inner {
            Inner::Complete(_) => None,
            Inner::Partial(_, e) | Inner::Failed(e) => Some(e),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self.inner, Inner::Complete(_))
    }

    pub fn into_parts(self) -> (Option<R>, Option<WwoError>) {
        match self.inner {
            Inner::Complete(r) => (Some(r), None),
            Inner::Partial(r, e) => (Some(r), Some(e)),
            Inner::Failed(e) => (None, Some(e)),
        }
    }

    /// Drops any partial report in favour of the error.
    pub fn into_result(self) -> Result<R, WwoError> {
        match self.inner {
            Inner::Complete(r) => Ok(r),
            Inner::Partial(_, e) | Inner::Failed(e) => Err(e),
        }
    }
}

/// Client for the premium API.
///
/// The key is fixed at construction, so one client can serve concurrent
/// callers.
pub struct WwoClient<T = HttpTransport> {
    key: String,
    insecure: bool,
    transport: T,
}

impl<T: fmt::Debug> fmt::Debug for WwoClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WwoClient")
            .field("key", &"<redacted>")
            .field("insecure", &self.insecure)
            .field("transport", &self.transport)
            .finish()
    }
}

impl WwoClient<HttpTransport> {
    pub fn new(key: impl Into<String>) -> Self {
        Self::with_transport(key, HttpTransport::new())
    }

    /// Builds a client over HTTP from the stored configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let key = config.api_key()?;
        Ok(Self::new(key).insecure(config.insecure))
    }
}

impl<T: Transport> WwoClient<T> {
    pub fn with_transport(key: impl Into<String>, transport: T) -> Self {
        Self { key: key.into(), insecure: false, transport }
    }

    /// Use plain http instead of https.
    pub fn insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    pub fn is_insecure(&self) -> bool {
        self.insecure
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        let scheme = if self.insecure { "http" } else { "https" };
        format!("{scheme}://{HOST}{PATH_PREFIX}{endpoint}{PATH_SUFFIX}")
    }

    /// The full query for a request: caller options, then the location and
    /// the parameters the client always controls.
    pub fn query(&self, location: &str, options: &Options) -> Options {
        let mut query = options.clone();
        query.insert("q".to_owned(), location.to_owned());
        query.insert("date_format".to_owned(), String::new());
        query.insert("key".to_owned(), self.key.clone());
        query.insert("format".to_owned(), "xml".to_owned());
        query
    }

    /// Requests and decodes one report.
    pub async fn get<R: Report>(&self, endpoint: Endpoint, location: &str, options: &Options) -> Outcome<R> {
        let url = self.url(endpoint);
        let query = self.query(location, options);
        debug!(%endpoint, location, "requesting report");

        let bytes = match self.transport.fetch(&url, &query).await {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(%endpoint, error = %err, "transport failed");
                return Outcome::failed(err.into());
            }
        };

        let (report, decode_error) = decode::<R>(&bytes);

        if let Some(source) = decode_error {
            warn!(%endpoint, error = %source, "payload did not decode");
            return Outcome::partial(report, WwoError::Decode { endpoint, source });
        }

        if let Some(message) = report.error_signal() {
            let message = message.to_owned();
            debug!(%endpoint, %message, "provider reported an error");
            return Outcome::partial(report, WwoError::Remote { message });
        }

        Outcome::complete(report)
    }

    /// Fetch a local forecast for `location`.
    ///
    /// Supported options (defaults marked with *):
    /// - `num_of_days`: days of forecast to include (0-21, *14)
    /// - `date`: start date of forecast (today, *tomorrow, YYYY-mm-dd)
    /// - `fx`: include forecast (*yes, no)
    /// - `cc`: include current conditions (*yes, no)
    /// - `mca`: include monthly climate averages (*yes, no)
    /// - `fx24`: include 24-hourly forecasts (*yes, no)
    /// - `includelocation`: include nearest area (yes, *no)
    /// - `tp`: hours per forecast sample (1, *3, 6, 12, 24)
    pub async fn get_local(&self, location: &str, options: &Options) -> Outcome<Local> {
        self.get(Endpoint::Local, location, options).await
    }

    /// Fetch a marine forecast for `location`.
    ///
    /// Supported options: `fx` (*yes, no), `tp` (1, *3, 6, 12, 24),
    /// `tide` (yes, *no).
    pub async fn get_marine(&self, location: &str, options: &Options) -> Outcome<Marine> {
        self.get(Endpoint::Marine, location, options).await
    }

    /// Fetch a ski forecast for `location`.
    ///
    /// Supported options: `num_of_days` (0-21, *14), `date` (today,
    /// *tomorrow, YYYY-mm-dd), `includelocation` (yes, *no).
    pub async fn get_ski(&self, location: &str, options: &Options) -> Outcome<Ski> {
        self.get(Endpoint::Ski, location, options).await
    }

    /// Fetch historical local weather for `location`.
    ///
    /// Supported options: `date` and `enddate` (YYYY-mm-dd),
    /// `includelocation` (yes, *no), `tp` (1, *3, 6, 12, 24).
    pub async fn get_past_local(&self, location: &str, options: &Options) -> Outcome<PastLocal> {
        self.get(Endpoint::PastLocal, location, options).await
    }

    /// Fetch historical marine weather for `location`.
    ///
    /// Supported options: `date` and `enddate` (YYYY-mm-dd),
    /// `tp` (1, *3, 6, 12, 24), `tide` (yes, *no).
    pub async fn get_past_marine(&self, location: &str, options: &Options) -> Outcome<PastMarine> {
        self.get(Endpoint::PastMarine, location, options).await
    }

    /// Look up locations matching `location`.
    ///
    /// Supported options: `num_of_results` (1-50, *10), `timezone` (yes, *no),
    /// `popular` (yes, *no), `wct` (ski, cricket, football, golf, fishing).
    pub async fn get_search(&self, location: &str, options: &Options) -> Outcome<Search> {
        self.get(Endpoint::Search, location, options).await
    }

    /// Look up time zone information for `location`. No options are supported.
    pub async fn get_time_zone(&self, location: &str, options: &Options) -> Outcome<TimeZone> {
        self.get(Endpoint::TimeZone, location, options).await
    }
}

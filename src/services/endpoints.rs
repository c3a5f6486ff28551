/// Upstream resources the dashboard reads. Also the cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    GlobalStats,
    Countries,
    HistoricalAll,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::GlobalStats => "/v3/covid-19/all",
            Endpoint::Countries => "/v3/covid-19/countries",
            Endpoint::HistoricalAll => "/v3/covid-19/historical/all?lastdays=all",
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

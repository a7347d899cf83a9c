use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use tracing::{debug, warn};

use super::{CancelToken, FetchOutcome, LoadState};
use crate::CountriesPage;

pub struct OlympicsClient {
    client: Client,
    base_url: String,
    max_pages: u32,
}

impl OlympicsClient {
    pub fn new(base_url: String, timeout_secs: u64, max_pages: u32) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url,
            max_pages,
        }
    }

    async fn fetch_page(&self, page: u32) -> Result<CountriesPage> {
        let url = format!("{}/countries?page={}", self.base_url, page);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch page {}", page))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("HTTP {} on page {}", status, page));
        }

        response
            .json::<CountriesPage>()
            .await
            .with_context(|| format!("Malformed response body on page {}", page))
    }

    /// Fetches every page starting at `start_page`, strictly sequentially:
    /// page N+1 is never requested before page N's response is in.
    ///
    /// `on_update` observes each state transition: once before the first
    /// request, once when the first page resolves (early partial render), and
    /// once when the cycle ends. Pages between the first and the last are
    /// accumulated without being published individually, so the success path
    /// publishes record data exactly twice.
    pub async fn load_all(
        &self,
        start_page: u32,
        cancel: &CancelToken,
        mut on_update: impl FnMut(&LoadState),
    ) -> FetchOutcome {
        let mut state = LoadState::started();
        on_update(&state);

        let first = match self.fetch_page(start_page).await {
            Ok(page) => page,
            Err(error) => {
                state.table_loading = false;
                state.loading = false;
                state.error = Some(error.to_string());
                on_update(&state);
                return FetchOutcome::Partial {
                    countries: Vec::new(),
                    error,
                };
            }
        };

        state.countries = first.data.clone();
        state.table_loading = false;
        on_update(&state);

        let mut has_next = first.has_next();
        let mut countries = first.data;
        let mut page = start_page;
        let mut fetched = 1u32;

        while has_next {
            if cancel.is_cancelled() {
                debug!("Fetch cycle cancelled after {} pages", fetched);
                return FetchOutcome::Cancelled { countries };
            }
            if fetched >= self.max_pages {
                warn!(
                    "Page cap of {} reached, stopping with {} records",
                    self.max_pages,
                    countries.len()
                );
                break;
            }

            page += 1;
            match self.fetch_page(page).await {
                Ok(next) => {
                    has_next = next.has_next();
                    countries.extend(next.data);
                    fetched += 1;
                }
                Err(error) => {
                    // Pages already accumulated are not rolled back.
                    state.countries = countries.clone();
                    state.loading = false;
                    state.error = Some(error.to_string());
                    on_update(&state);
                    return FetchOutcome::Partial { countries, error };
                }
            }
        }

        state.countries = countries.clone();
        state.loading = false;
        on_update(&state);
        FetchOutcome::Complete(countries)
    }
}

use serde::{Deserialize, Serialize};

pub mod export;
pub mod fetch;
pub mod lookup;
pub mod show;
pub mod table;

/// One country's standing as returned by the API. Immutable once received;
/// `rank <= 0` means the country is unranked and renders as a placeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    pub name: String,
    pub continent: String,
    pub flag_url: String,
    pub gold_medals: u32,
    pub silver_medals: u32,
    pub bronze_medals: u32,
    pub total_medals: u32,
    pub rank: i32,
    pub rank_total_medals: i32,
}

/// Wire shape of one page of the countries collection endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CountriesPage {
    pub data: Vec<Country>,
    #[serde(default)]
    pub links: PageLinks,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageLinks {
    #[serde(default)]
    pub next: Option<String>,
}

impl CountriesPage {
    /// A non-empty `next` link is the sole continuation signal. The link is
    /// never followed; the next page number is computed locally.
    pub fn has_next(&self) -> bool {
        self.links.next.as_deref().is_some_and(|next| !next.is_empty())
    }
}

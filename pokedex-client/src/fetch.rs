use futures_util::future::try_join_all;
use pokedex_data::Pokemon;

use crate::{
    FetchError,
    PokeApiClient,
};

/// Number of Pokemon in the catalog.
pub const CATALOG_PAGE_SIZE: usize = 10;

/// Fetches the full catalog.
///
/// Reads one page of [`CATALOG_PAGE_SIZE`] references at offset 0, then reads every referenced
/// Pokemon concurrently. The catalog is returned in reference order once every detail request
/// has resolved.
///
/// Any failure aborts the whole catalog. A malformed page fails before any detail request is
/// made, and a single failed or malformed detail discards every other detail in the batch.
pub async fn fetch_catalog<C>(client: &C) -> Result<Vec<Pokemon>, FetchError>
where
    C: PokeApiClient + ?Sized,
{
    let page = client.catalog_page(CATALOG_PAGE_SIZE, 0).await?;
    log::debug!("catalog page contains {} references", page.results.len());

    let catalog = try_join_all(
        page.results
            .iter()
            .take(CATALOG_PAGE_SIZE)
            .map(|reference| client.pokemon(&reference.url)),
    )
    .await
    .inspect_err(|err| log::error!("failed to fetch catalog: {err}"))?;

    log::debug!("fetched {} pokemon", catalog.len());
    Ok(catalog)
}

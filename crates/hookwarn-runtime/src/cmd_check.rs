//! One-shot check: normalize the URL, fetch once, print the body.

use hookwarn_core::normalize::normalize_url;
use hookwarn_poller::fetch::{Fetch, HttpFetcher};

use crate::cli::CheckOpts;

pub async fn cmd_check(opts: &CheckOpts) -> anyhow::Result<()> {
    let url = normalize_url(&opts.url);
    let fetcher = HttpFetcher::new()?;
    let body = fetcher.fetch_text(&url).await?;
    print!("{body}");
    Ok(())
}

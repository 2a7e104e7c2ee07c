use indicatif::ProgressBar;

use crate::{
    Res,
    catalog::{Catalog, RELEASE_PAGE_SIZE},
    types::Release,
    utils::ReleaseKinds,
};

/// Walks an artist's discography page by page until the catalog reports no further page.
///
/// Pages are always requested with [`RELEASE_PAGE_SIZE`] items, offsets advance by the
/// same amount. Releases whose kind is not in `kinds` are skipped. Catalog errors, such
/// as an unknown artist id, are returned unchanged.
pub async fn collect_releases<C: Catalog + ?Sized>(
    catalog: &C,
    artist_id: &str,
    kinds: &ReleaseKinds,
    pb: &ProgressBar,
) -> Res<Vec<Release>> {
    let mut releases: Vec<Release> = Vec::new();
    let mut offset = 0;

    loop {
        let page = catalog
            .list_releases(artist_id, kinds, RELEASE_PAGE_SIZE, offset)
            .await?;

        releases.extend(page.items.into_iter().filter(|r| kinds.contains(r.kind)));
        pb.set_message(format!("Fetched {} releases...", releases.len()));

        if !page.has_more {
            break;
        }
        offset += RELEASE_PAGE_SIZE;
    }

    Ok(releases)
}

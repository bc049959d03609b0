use url::Url;

use crate::{FailureKind, FetchError};

pub const SUGGESTIONS_PATH: &str = "/api/buscar_sugestoes";

/// Builds `{base}/api/buscar_sugestoes?q=<query>` with the query form-encoded.
///
/// Any path or query already on `base` is replaced.
pub fn suggestions_url(base: &Url, query: &str) -> Result<Url, FetchError> {
    if base.cannot_be_a_base() {
        return Err(FetchError::new(
            FailureKind::InvalidUrl,
            format!("{base} cannot be used as a base url"),
        ));
    }
    let mut url = base
        .join(SUGGESTIONS_PATH)
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    url.query_pairs_mut().clear().append_pair("q", query);
    Ok(url)
}

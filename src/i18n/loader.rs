use gloo_net::http::Request;

use super::{Language, LocaleBundle, LocaleError, Namespace, SchemaWarning};
use crate::config;

pub(crate) async fn fetch_bundle(
    language: Language,
    namespace: Namespace,
) -> Result<(LocaleBundle, Vec<SchemaWarning>), LocaleError> {
    let url = config::bundle_url(language, namespace);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| LocaleError::Fetch {
            url: url.clone(),
            message: e.to_string(),
        })?;

    if !response.ok() {
        return Err(LocaleError::Status {
            url,
            status: response.status(),
        });
    }

    let body = response.text().await.map_err(|e| LocaleError::Fetch {
        url: url.clone(),
        message: e.to_string(),
    })?;

    LocaleBundle::parse(language, namespace, &body)
}

use notibar_bridge::{MessageFromBackend, mark::MarkRequest};
use reqwest::Url;

use crate::error::ServiceError;

/// Resolves a form action against the page it was rendered on.
pub(crate) fn resolve_action(page_url: &str, action: &str) -> Result<Url, ServiceError> {
    let base = Url::parse(page_url).map_err(|e| ServiceError::InvalidUrl {
        url: page_url.to_owned(),
        reason: e.to_string(),
    })?;
    base.join(action).map_err(|e| ServiceError::InvalidUrl {
        url: action.to_owned(),
        reason: e.to_string(),
    })
}

/// Posts the form of `request` and returns the body of a successful response.
async fn post_mark_form(
    client: &reqwest::Client,
    url: Url,
    request: &MarkRequest,
) -> Result<String, ServiceError> {
    let fields = request.form_fields();
    let response = client
        .post(url)
        .form(fields.as_slice())
        .send()
        .await?
        .error_for_status()?;
    Ok(response.text().await?)
}

/// Handles an incoming mark request (see
/// [`notibar_bridge::MessageToBackend::MarkRequest`]).
///
/// The post runs on its own task so that several requests can be in flight.
/// Failures are only logged: the panel keeps the notification unread and the
/// user is not told.
pub async fn handle_mark_request(context: super::AppContextHandle, request: MarkRequest) {
    let (request_client, page_url) = {
        let state = context.state.read().await;
        (
            state.request_client.clone(),
            state.config.endpoint.page_url.clone(),
        )
    };

    let url = match resolve_action(&page_url, &request.action) {
        Ok(url) => url,
        Err(e) => {
            log::warn!("Dropping mark request #{}: {e}", request.sequence);
            return;
        }
    };

    log::info!("Posting mark request #{} to {url}", request.sequence);
    tokio::spawn(async move {
        match post_mark_form(&request_client, url, &request).await {
            Ok(body) => {
                log::debug!("Mark request #{} answered with {body:?}", request.sequence);
                context
                    .send(MessageFromBackend::MarkResponse { request, body })
                    .await;
            }
            Err(e) => log::warn!("Mark request #{} failed: {e}", request.sequence),
        }
    });
}

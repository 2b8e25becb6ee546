use notibar_bridge::{MessageFromBackend, page::NotificationPage, toast::ToastType};

use crate::error::ServiceError;

async fn fetch_page(
    client: &reqwest::Client,
    page_url: &str,
) -> Result<NotificationPage, ServiceError> {
    let response = client.get(page_url).send().await?.error_for_status()?;
    Ok(response.json::<NotificationPage>().await?)
}

/// Handles an incoming page request (see
/// [`notibar_bridge::MessageToBackend::NotificationPageRequest`]).
pub async fn handle_page_request(context: super::AppContextHandle) {
    let (request_client, page_url, notification_amount) = {
        let state = context.state.read().await;
        (
            state.request_client.clone(),
            state.config.endpoint.page_url.clone(),
            state.config.panel.notification_amount,
        )
    };

    log::info!("Loading notification page from {page_url}");
    match fetch_page(&request_client, &page_url).await {
        Ok(mut page) => {
            page.truncate(notification_amount);
            log::info!(
                "Loaded {} notification group(s), {} unread on the server",
                page.groups.len(),
                page.unread_amount
            );
            context
                .send(MessageFromBackend::NotificationPageResponse(page))
                .await;
        }
        Err(e) => {
            log::error!("Failed to load notification page: {e}");
            context
                .send_toast(
                    ToastType::Error,
                    format!("Could not load notifications: {}", without_url(e)),
                )
                .await;
        }
    }
}

/// Strips the URL from request errors so that query strings never end up on
/// screen.
fn without_url(error: ServiceError) -> String {
    match error {
        ServiceError::Request(e) => e.without_url().to_string(),
        other => other.to_string(),
    }
}

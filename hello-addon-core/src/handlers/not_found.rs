use crate::response::AddonResponse;

/// Terminal handler: always answers, always 404.
#[derive(Debug, Default, Clone, Copy)]
pub struct NotFoundHandler;

impl NotFoundHandler {
    /// The 404 response.
    pub fn respond(&self) -> AddonResponse {
        AddonResponse::not_found()
    }
}

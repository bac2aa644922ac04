use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    ctx.hello
        .get_hello(payload.id)
        .await
        .map_err(|_| response::Error::FailedToFetchHello)?
        .ok_or(response::Error::HelloNotFound)
        .map(response::Success::Hello)
}

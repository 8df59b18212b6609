//! Streaming composition of the page: prefix → app body chunks → suffix.
//!
//! Rendering runs under a wall-clock budget. Until the renderer has produced
//! its first chunk nothing has been sent, so a failure or timeout there
//! still lets the caller answer with the 500 fallback document. After that
//! the status is committed: a late failure or an exhausted budget just ends
//! the body early and the suffix still closes the document.

use std::convert::Infallible;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{self, Stream, StreamExt};
use thiserror::Error;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, warn};

use crate::render::document::Document;
use crate::render::view::{ViewModel, SECTIONS};

pub type BodyStream = Pin<Box<dyn Stream<Item = Result<Bytes, RenderError>> + Send>>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("View rendering failed: {0}")]
    View(String),

    #[error("Rendering exceeded the {0:?} budget")]
    Timeout(Duration),
}

/// Produces the app body for a page as a stream of HTML chunks.
#[async_trait]
pub trait PageRenderer: Send + Sync {
    async fn render(&self, view: Arc<ViewModel>) -> Result<BodyStream, RenderError>;
}

/// Renders the view tree section by section, each section on demand.
pub struct ViewRenderer;

#[async_trait]
impl PageRenderer for ViewRenderer {
    async fn render(&self, view: Arc<ViewModel>) -> Result<BodyStream, RenderError> {
        let chunks = stream::iter(SECTIONS)
            .map(move |section| Ok::<_, RenderError>(Bytes::from(section(&view).into_string())));
        Ok(Box::pin(chunks))
    }
}

/// Starts rendering and returns the full response byte stream once the
/// first body chunk is ready.
pub async fn compose(
    renderer: &dyn PageRenderer,
    view: Arc<ViewModel>,
    document: &Document,
    budget: Duration,
) -> Result<impl Stream<Item = Result<Bytes, Infallible>> + Send + 'static, RenderError> {
    let deadline = Instant::now() + budget;

    let mut body = match timeout_at(deadline, renderer.render(view)).await {
        Ok(result) => result?,
        Err(_) => return Err(RenderError::Timeout(budget)),
    };

    let shell = match timeout_at(deadline, body.next()).await {
        Ok(Some(chunk)) => Some(chunk?),
        Ok(None) => None,
        Err(_) => return Err(RenderError::Timeout(budget)),
    };

    let rest = stream::unfold(Some(body), move |state| async move {
        let mut body = state?;
        match timeout_at(deadline, body.next()).await {
            Ok(Some(Ok(chunk))) => Some((chunk, Some(body))),
            Ok(Some(Err(e))) => {
                warn!("Render failed mid-stream, closing document early: {e}");
                None
            }
            Ok(None) => {
                debug!("Render stream complete");
                None
            }
            Err(_) => {
                warn!("Render budget of {budget:?} exhausted mid-stream, closing document early");
                None
            }
        }
    });

    let prefix = document.prefix();
    let suffix = document.suffix();

    Ok(stream::once(async move { prefix })
        .chain(stream::iter(shell))
        .chain(rest)
        .chain(stream::once(async move { suffix }))
        .map(Ok::<Bytes, Infallible>))
}

// Newline-delimited JSON streaming of dataset snapshots
use crate::domain::dataset::Dataset;
use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use bytes::{BufMut, Bytes, BytesMut};
use futures::stream::Stream;
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::watch;

/// Yield the held snapshot (if any), then every replacement until the store goes away
pub fn snapshot_stream(
    mut rx: watch::Receiver<Option<Arc<Dataset>>>,
) -> impl Stream<Item = Arc<Dataset>> {
    async_stream::stream! {
        loop {
            let snapshot = rx.borrow_and_update().clone();
            if let Some(dataset) = snapshot {
                yield dataset;
            }
            if rx.changed().await.is_err() {
                break;
            }
        }
    }
}

/// Create a streaming NDJSON response, one line per snapshot
pub fn ndjson_response<S>(stream: S) -> Result<Response<Body>, StatusCode>
where
    S: Stream<Item = Arc<Dataset>> + Send + 'static,
{
    let byte_stream = stream.map(|dataset| serialize_line(&dataset));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/x-ndjson")
        .header(header::CACHE_CONTROL, "no-cache")
        .body(Body::from_stream(byte_stream))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Serialize a snapshot as one JSON line
fn serialize_line(dataset: &Dataset) -> Result<Bytes, std::io::Error> {
    let json = serde_json::to_vec(dataset)?;
    let mut line = BytesMut::with_capacity(json.len() + 1);
    line.put_slice(&json);
    line.put_u8(b'\n');
    Ok(line.freeze())
}

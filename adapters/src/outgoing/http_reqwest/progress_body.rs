use bytes::Bytes;
use futures::stream::{self, Stream};
use std::convert::Infallible;
use std::sync::Arc;

use domain::progress::ProgressTracker;
use imgconsole_application::ports::outgoing::progress::DynProgressSinkPort;

/// Splits the file payload into chunks and reports transmitted bytes to the
/// progress sink as each chunk is handed to the transport. Reports are capped
/// below 100; the adapter signals completion separately once the request has
/// resolved.
pub(crate) fn progress_chunks(
    data: Bytes,
    chunk_bytes: usize,
    sink: DynProgressSinkPort,
) -> impl Stream<Item = Result<Bytes, Infallible>> + Send + 'static {
    let total = data.len() as u64;
    let chunk_bytes = chunk_bytes.max(1);

    stream::unfold(
        (data, 0usize, ProgressTracker::new()),
        move |(data, offset, mut tracker)| {
            let sink = Arc::clone(&sink);
            async move {
                if offset >= data.len() {
                    return None;
                }
                let end = (offset + chunk_bytes).min(data.len());
                let chunk = data.slice(offset..end);
                sink.report(tracker.record(end as u64, total));
                Some((Ok(chunk), (data, end, tracker)))
            }
        },
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use imgconsole_application::ports::outgoing::progress::ProgressSinkPort;
    use std::sync::Mutex;

    struct RecordingSink {
        reports: Mutex<Vec<u8>>,
    }

    impl ProgressSinkPort for RecordingSink {
        fn report(&self, percent: u8) {
            self.reports.lock().unwrap().push(percent);
        }

        fn finish(&self) {}
    }

    #[tokio::test]
    async fn chunks_cover_the_payload_and_reports_never_decrease() {
        let sink = Arc::new(RecordingSink {
            reports: Mutex::new(Vec::new()),
        });
        let data = Bytes::from(vec![7u8; 25]);

        let chunks: Vec<Bytes> = progress_chunks(data, 10, Arc::clone(&sink) as _)
            .map(|chunk| chunk.unwrap())
            .collect()
            .await;

        let reassembled: Vec<u8> = chunks.iter().flat_map(|c| c.iter().copied()).collect();
        assert_eq!(reassembled, vec![7u8; 25]);
        assert_eq!(chunks.len(), 3);

        let reports = sink.reports.lock().unwrap().clone();
        assert_eq!(reports, vec![40, 80, 99]);
    }

    #[tokio::test]
    async fn empty_payload_yields_no_chunks_or_reports() {
        let sink = Arc::new(RecordingSink {
            reports: Mutex::new(Vec::new()),
        });

        let chunks: Vec<_> = progress_chunks(Bytes::new(), 10, Arc::clone(&sink) as _)
            .collect()
            .await;

        assert!(chunks.is_empty());
        assert!(sink.reports.lock().unwrap().is_empty());
    }
}

//! Chunk Dispatcher — drives every fragment through the extraction client in order.

use tracing::debug;

use crate::experience::chunker::chunk_text;
use crate::experience::client::ExtractionClient;
use crate::experience::models::RawRecord;

pub struct ChunkDispatcher {
    client: ExtractionClient,
    max_chars: usize,
}

impl ChunkDispatcher {
    pub fn new(client: ExtractionClient, max_chars: usize) -> Self {
        Self { client, max_chars }
    }

    /// Chunks `text` and concatenates the per-fragment records.
    ///
    /// Records of fragment N always precede those of fragment N+1, and keep their
    /// order within a fragment. A fragment that fails contributes nothing.
    pub async fn dispatch(&self, text: &str) -> Vec<RawRecord> {
        let fragments = chunk_text(text, self.max_chars);
        debug!(fragments = fragments.len(), "dispatching fragments");

        let mut records = Vec::new();
        for (index, fragment) in fragments.iter().enumerate() {
            records.extend(self.client.extract(index, fragment).await);
        }
        records
    }
}

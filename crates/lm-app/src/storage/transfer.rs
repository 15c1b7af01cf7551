use lm_core::ports::{MediaReader, MediaSink};
use tokio::io::{AsyncWriteExt, BufReader};

/// Stream every byte of `reader` into `sink` through a buffer of `buffer_bytes`.
///
/// Both streams are owned here and released on every exit path; the sink is
/// flushed and shut down before returning success.
pub async fn transfer(
    reader: MediaReader,
    mut sink: MediaSink,
    buffer_bytes: usize,
) -> std::io::Result<u64> {
    let mut reader = BufReader::with_capacity(buffer_bytes.max(1), reader);
    let copied = tokio::io::copy_buf(&mut reader, &mut sink).await?;
    sink.flush().await?;
    sink.shutdown().await?;
    Ok(copied)
}

use std::io::BufRead;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// Spawn a thread that forwards each input line (without the line ending)
/// over the returned channel. The channel closes at end of input or on a
/// read error, so the consumer sees EOF as a disconnect.
pub fn spawn_line_reader<R>(input: R) -> (Receiver<String>, thread::JoinHandle<()>)
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = channel();
    let handle = thread::spawn(move || {
        for line in input.lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        // Consumer is gone
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("stdin read failed: {}", e);
                    break;
                }
            }
        }
    });
    (rx, handle)
}

use std::time::Duration;

use super::{Animation, Step};

/// Play `animation` on a fixed tick, forwarding each frame to `emit`.
///
/// Sleeps one `period` before every step, like a browser interval.
/// Returns the number of frames emitted. Dropping the future (or
/// cancelling the task that owns it) stops the ticks; `emit` is never
/// called afterwards.
pub async fn drive<A, F>(mut animation: A, period: Duration, mut emit: F) -> usize
where
    A: Animation,
    F: FnMut(String),
{
    let mut emitted = 0;
    loop {
        tokio::time::sleep(period).await;
        match animation.advance() {
            Step::Frame(frame) => {
                emit(frame);
                emitted += 1;
            }
            Step::Last(frame) => {
                emit(frame);
                return emitted + 1;
            }
            Step::Finished => return emitted,
        }
    }
}

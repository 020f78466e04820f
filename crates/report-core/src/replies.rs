//! Polling fallback for reply watching.
//!
//! The REST backend has no push channel, so after a send the session's
//! message list is re-fetched at fixed offsets. A snapshot taken before the
//! assistant has answered is harmless: it merges as a no-op.

use std::pin::Pin;
use std::rc::Rc;

use futures::stream::{self, Stream, StreamExt};
use report_types::{Result, message::Message};

use crate::ports::{ReplyWatchPort, ReportApiPort, TimerPort};

pub struct PollingReplyWatch {
    api: Rc<dyn ReportApiPort>,
    timer: Rc<dyn TimerPort>,
    /// Offsets from the send, in milliseconds.
    offsets_ms: Vec<u64>,
}

impl PollingReplyWatch {
    pub fn new(api: Rc<dyn ReportApiPort>, timer: Rc<dyn TimerPort>, offsets_ms: Vec<u64>) -> Self {
        Self {
            api,
            timer,
            offsets_ms,
        }
    }
}

impl ReplyWatchPort for PollingReplyWatch {
    fn watch(&self, session_id: &str) -> Pin<Box<dyn Stream<Item = Result<Vec<Message>>>>> {
        let api = self.api.clone();
        let timer = self.timer.clone();
        let session_id = session_id.to_string();

        Box::pin(stream::iter(wait_steps(&self.offsets_ms)).then(move |wait| {
            let api = api.clone();
            let timer = timer.clone();
            let session_id = session_id.clone();
            async move {
                timer.sleep(wait).await;
                api.list_messages(&session_id).await
            }
        }))
    }
}

/// Turn absolute offsets into the sleeps between consecutive polls.
/// Offsets are sorted first; duplicates collapse to a zero wait.
pub fn wait_steps(offsets_ms: &[u64]) -> Vec<u64> {
    let mut sorted = offsets_ms.to_vec();
    sorted.sort_unstable();
    let mut previous = 0;
    sorted
        .into_iter()
        .map(|offset| {
            let wait = offset.saturating_sub(previous);
            previous = offset;
            wait
        })
        .collect()
}

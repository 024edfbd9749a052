use crate::application::reconciler::{Completion, Ticket};
use crate::domain::{FetchError, MovieSearch};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

/// Runs issued requests on worker threads and queues their completions.
///
/// Each ticket gets its own thread, so a slow request never blocks a newer
/// one. Completions are read back on the UI thread in arrival order.
pub struct FetchDispatcher {
    search: Arc<dyn MovieSearch>,
    tx: mpsc::Sender<Completion>,
    rx: mpsc::Receiver<Completion>,
}

impl FetchDispatcher {
    pub fn new(search: Arc<dyn MovieSearch>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { search, tx, rx }
    }

    pub fn dispatch(&self, ticket: Ticket) {
        let search = Arc::clone(&self.search);
        let tx = self.tx.clone();
        let generation = ticket.generation;

        let spawned = thread::Builder::new()
            .name(format!("fetch-{generation}"))
            .spawn(move || {
                let result = search.search(&ticket.request);
                // Receiver is gone once the UI has shut down
                let _ = tx.send(Completion { generation, result });
            });

        if let Err(e) = spawned {
            let _ = self.tx.send(Completion {
                generation,
                result: Err(FetchError::Transport(format!("could not start request: {e}"))),
            });
        }
    }

    /// Returns the next queued completion without blocking.
    pub fn try_next(&self) -> Option<Completion> {
        self.rx.try_recv().ok()
    }

    /// Waits up to `timeout` for the next completion.
    pub fn next_within(&self, timeout: Duration) -> Option<Completion> {
        self.rx.recv_timeout(timeout).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FetchResult, MovieRecord, SearchRequest};

    struct EchoPage;

    impl MovieSearch for EchoPage {
        fn search(&self, request: &SearchRequest) -> FetchResult<Vec<MovieRecord>> {
            Ok(vec![MovieRecord {
                title: format!("page {}", request.page),
                poster_image: None,
                release_year: 2020,
            }])
        }
    }

    #[test]
    fn test_dispatch_delivers_completion() {
        let dispatcher = FetchDispatcher::new(Arc::new(EchoPage));
        dispatcher.dispatch(Ticket {
            generation: 7,
            request: SearchRequest {
                page: 3,
                year: None,
                genre: String::new(),
            },
        });

        let completion = dispatcher
            .next_within(Duration::from_secs(5))
            .expect("completion");
        assert_eq!(completion.generation, 7);
        assert_eq!(completion.result.unwrap()[0].title, "page 3");
        assert!(dispatcher.try_next().is_none());
    }
}

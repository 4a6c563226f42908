//! Async event loop integrated with tokio

use super::Event;
use crossterm::event::EventStream;
use futures::StreamExt;
use tokio::sync::mpsc;

/// Delivers events one at a time, in arrival order.
///
/// A terminal loop merges the local crossterm stream with an injection
/// channel. A detached loop only reads the channel, which lets a remote
/// transport feed events; it ends once every sender has been dropped.
pub struct EventLoop {
    terminal: Option<EventStream>,
    rx: mpsc::UnboundedReceiver<Event>,
    tx: Option<mpsc::UnboundedSender<Event>>,
}

impl EventLoop {
    /// Read from the local terminal
    pub fn terminal() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            terminal: Some(EventStream::new()),
            rx,
            tx: Some(tx),
        }
    }

    /// Read only from the returned sender (and its clones)
    pub fn detached() -> (Self, mpsc::UnboundedSender<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let event_loop = Self {
            terminal: None,
            rx,
            tx: None,
        };
        (event_loop, tx)
    }

    /// Sender for injecting events into a terminal loop
    pub fn sender(&self) -> Option<mpsc::UnboundedSender<Event>> {
        self.tx.clone()
    }

    /// Next event, or `None` once input has ended. A terminal read error is
    /// treated as end of input.
    pub async fn next(&mut self) -> Option<Event> {
        let Some(stream) = self.terminal.as_mut() else {
            return self.rx.recv().await;
        };

        loop {
            tokio::select! {
                maybe_event = stream.next() => match maybe_event {
                    Some(Ok(event)) => {
                        if let Some(event) = Event::from_terminal(event) {
                            return Some(event);
                        }
                    }
                    Some(Err(_)) | None => return None,
                },
                Some(event) = self.rx.recv() => return Some(event),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyCode;

    #[tokio::test]
    async fn test_detached_preserves_order_and_ends() {
        let (mut events, tx) = EventLoop::detached();
        tx.send(Event::key(KeyCode::Char('j'))).unwrap();
        tx.send(Event::Resize {
            width: 10,
            height: 5,
        })
        .unwrap();
        drop(tx);

        assert_eq!(events.next().await, Some(Event::key(KeyCode::Char('j'))));
        assert!(events.next().await.is_some_and(|e| e.is_resize()));
        assert_eq!(events.next().await, None);
        assert!(events.sender().is_none());
    }
}

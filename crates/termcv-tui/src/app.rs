//! Application framework: the `App` trait and the runner that drives it

use crate::buffer::Buffer;
use crate::event::{Event, EventLoop};
use crate::geometry::{Rect, Size};
use crate::terminal::Terminal;
use async_trait::async_trait;
use std::io::{self, Write};

/// An Elm-style application: state is created once, updated by events and
/// rendered after every update.
pub trait App {
    type State;

    fn init(&self) -> Self::State;

    /// Update state for one event. Return `false` to end the session.
    fn handle_event(&mut self, event: Event, state: &mut Self::State) -> bool;

    /// Called after each update and before rendering, for work that needs
    /// mutable state (such as recomputing a cached layout).
    fn prepare(&mut self, _state: &mut Self::State) {}

    fn render(&self, state: &Self::State, area: Rect, buf: &mut Buffer);
}

/// Where events come from
#[async_trait]
pub trait EventSource: Send {
    /// Next event, or `None` when input has ended
    async fn next_event(&mut self) -> Option<Event>;
}

#[async_trait]
impl EventSource for EventLoop {
    async fn next_event(&mut self) -> Option<Event> {
        self.next().await
    }
}

/// Where frames go
pub trait FrameSink {
    fn size(&self) -> Size;

    /// Called when a resize event arrives, before the app sees it
    fn resize(&mut self, size: Size);

    fn draw(&mut self, buffer: &Buffer) -> io::Result<()>;
}

impl<W: Write> FrameSink for Terminal<W> {
    fn size(&self) -> Size {
        Terminal::size(self)
    }

    fn resize(&mut self, size: Size) {
        Terminal::resize(self, size)
    }

    fn draw(&mut self, buffer: &Buffer) -> io::Result<()> {
        Terminal::draw(self, buffer)
    }
}

/// Runs an [`App`] against an event source and a frame sink.
///
/// The pipeline is strictly sequential: one event is taken, the app updates,
/// prepares and renders, and the frame is emitted before the next event is
/// read.
pub struct AppRunner<A, E, S> {
    app: A,
    events: E,
    sink: S,
}

impl<A, E, S> AppRunner<A, E, S>
where
    A: App,
    E: EventSource,
    S: FrameSink,
{
    pub fn new(app: A, events: E, sink: S) -> Self {
        Self { app, events, sink }
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run until the app quits or input ends, returning the final state.
    ///
    /// The sink's initial size is delivered as a synthetic resize so the app
    /// learns its dimensions before any input arrives.
    pub async fn run(&mut self) -> io::Result<A::State> {
        let mut state = self.app.init();

        let size = self.sink.size();
        if !size.is_empty() {
            let initial = Event::Resize {
                width: size.width,
                height: size.height,
            };
            if !self.app.handle_event(initial, &mut state) {
                return Ok(state);
            }
        }
        self.render(&mut state)?;

        while let Some(event) = self.events.next_event().await {
            if let Event::Resize { width, height } = event {
                self.sink.resize(Size::new(width, height));
            }
            if !self.app.handle_event(event, &mut state) {
                break;
            }
            self.render(&mut state)?;
        }

        Ok(state)
    }

    fn render(&mut self, state: &mut A::State) -> io::Result<()> {
        self.app.prepare(state);
        let area = Rect::from_size(self.sink.size());
        let mut buf = Buffer::new(area);
        self.app.render(state, area, &mut buf);
        self.sink.draw(&buf)
    }
}

use std::collections::BTreeMap;

use crate::foundation::core::Point;

/// Pointer/touch event streams the fold controller listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InputChannel {
    /// Mouse button pressed.
    MouseDown,
    /// Mouse moved.
    MouseMove,
    /// Mouse button released.
    MouseUp,
    /// First touch began.
    TouchStart,
    /// Touch moved.
    TouchMove,
    /// Touch ended.
    TouchEnd,
}

/// What a channel means to a gesture, independent of the device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// Pointer went down.
    Down,
    /// Pointer moved.
    Move,
    /// Pointer went up.
    Up,
}

impl InputChannel {
    /// Every channel, mouse first.
    pub const ALL: [Self; 6] = [
        Self::MouseDown,
        Self::MouseMove,
        Self::MouseUp,
        Self::TouchStart,
        Self::TouchMove,
        Self::TouchEnd,
    ];

    /// Device-independent gesture phase.
    pub fn gesture(self) -> GesturePhase {
        match self {
            Self::MouseDown | Self::TouchStart => GesturePhase::Down,
            Self::MouseMove | Self::TouchMove => GesturePhase::Move,
            Self::MouseUp | Self::TouchEnd => GesturePhase::Up,
        }
    }
}

/// A pointer or first-touch event in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Source stream.
    pub channel: InputChannel,
    /// Client position; only `x` drives the fold.
    pub position: Point,
}

impl PointerEvent {
    /// Build an event at `(x, y)`.
    pub fn new(channel: InputChannel, x: f64, y: f64) -> Self {
        Self {
            channel,
            position: Point::new(x, y),
        }
    }
}

/// Handle for one registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub u64);

/// Host event source (window, canvas, test harness) the controller registers with.
pub trait InputHost {
    /// Register interest in `channel`.
    fn add_listener(&mut self, channel: InputChannel) -> ListenerId;
    /// Remove a listener; returns `false` if it was not registered.
    fn remove_listener(&mut self, id: ListenerId) -> bool;
}

/// Listeners registered by one attach.
#[derive(Debug)]
pub(crate) struct Registration {
    listeners: Vec<(ListenerId, InputChannel)>,
}

impl Registration {
    pub(crate) fn register<H: InputHost + ?Sized>(host: &mut H) -> Self {
        let listeners = InputChannel::ALL
            .into_iter()
            .map(|ch| (host.add_listener(ch), ch))
            .collect();
        Self { listeners }
    }

    pub(crate) fn listens_to(&self, channel: InputChannel) -> bool {
        self.listeners.iter().any(|(_, ch)| *ch == channel)
    }

    /// Remove every listener; returns how many the host actually dropped.
    pub(crate) fn release<H: InputHost + ?Sized>(self, host: &mut H) -> usize {
        self.listeners
            .into_iter()
            .filter(|(id, _)| host.remove_listener(*id))
            .count()
    }
}

/// In-memory host for tests, the CLI and headless playback.
#[derive(Clone, Debug, Default)]
pub struct InMemoryHost {
    next_id: u64,
    listeners: BTreeMap<ListenerId, InputChannel>,
}

impl InMemoryHost {
    /// Create a host with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Registered listeners on `channel`.
    pub fn listeners_on(&self, channel: InputChannel) -> usize {
        self.listeners.values().filter(|c| **c == channel).count()
    }
}

impl InputHost for InMemoryHost {
    fn add_listener(&mut self, channel: InputChannel) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, channel);
        id
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fold/input.rs"]
mod tests;

use crate::preferences::Theme;
#[cfg(test)]
use std::cell::RefCell;
use winit::event_loop::EventLoopProxy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserEvent {
    Quit,
    SetTheme(Theme),
    ToggleTheme,
}

pub trait EventProxy<T> {
    fn send_event(&self, event: T);
}

#[derive(Debug, Default)]
pub struct AppResponse {
    pub exit: bool,
    pub request_redraw: bool,
}

pub struct EventProxyWinit<T: 'static> {
    inner: EventLoopProxy<T>,
}

impl<T> EventProxy<T> for EventProxyWinit<T> {
    fn send_event(&self, event: T) {
        if self.inner.send_event(event).is_err() {
            log::warn!("Event loop closed, dropping event");
        }
    }
}

impl<T> EventProxyWinit<T> {
    pub fn from_proxy(inner: EventLoopProxy<T>) -> Self {
        Self { inner }
    }
}

/// Collects events in order instead of posting them to an event loop.
#[cfg(test)]
pub struct EventQueue<T> {
    events: RefCell<Vec<T>>,
}

#[cfg(test)]
impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self {
            events: RefCell::new(vec![]),
        }
    }
}

#[cfg(test)]
impl<T> EventQueue<T> {
    pub fn drain(&self) -> Vec<T> {
        self.events.borrow_mut().drain(..).collect()
    }
}

#[cfg(test)]
impl<T> EventProxy<T> for EventQueue<T> {
    fn send_event(&self, event: T) {
        self.events.borrow_mut().push(event);
    }
}

use std::io;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

/// Pointer-press subscription of the search box.
///
/// While alive the terminal reports mouse events; dropping it turns capture
/// off again, so the listener never outlives the component.
pub struct PointerSubscription {
    _private: (),
}

impl PointerSubscription {
    pub fn subscribe() -> io::Result<Self> {
        execute!(io::stdout(), EnableMouseCapture)?;
        Ok(Self { _private: () })
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), DisableMouseCapture);
    }
}

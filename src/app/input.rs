use sdl3::EventPump;
use sdl3::event::Event;
use sdl3::keyboard::Keycode;

/// Represents the input from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Input {
    Quit, // The user has requested to quit the application.
}

/// Translates a platform event into loop input. Everything other than quit
/// detection is out of scope and discarded.
pub(crate) fn translate(event: &Event) -> Option<Input> {
    match event {
        Event::Quit { .. }
        | Event::KeyDown {
            keycode: Some(Keycode::Escape),
            ..
        } => Some(Input::Quit),
        _ => None,
    }
}

/// Represents the state of the input for one frame.
pub(crate) struct InputState {
    pub events: Vec<Input>, // The events that have been triggered.
}

impl InputState {
    /// Creates a new instance of the input state.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Drains all pending platform events. Stops early on a quit signal
    /// since nothing after it matters.
    pub fn poll(&mut self, pump: &mut EventPump) {
        self.events.clear();

        for event in pump.poll_iter() {
            if let Some(input) = translate(&event) {
                self.events.push(input);
                if self.quit_requested() {
                    return;
                }
            }
        }
    }

    /// Checks if a quit signal arrived this frame.
    pub fn quit_requested(&self) -> bool {
        self.events.contains(&Input::Quit)
    }
}

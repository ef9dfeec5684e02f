/// Host integration
///
/// Traits the host (an editor, or the bundled CLI) implements to hand us
/// terminals and show notices, plus the event router that ties them to the
/// applier.

pub mod events;
pub mod notifier;
pub mod terminal;

pub use events::{EventKind, EventResponse, EventRouter, Handler, HostEvent};
pub use notifier::{ConsoleNotifier, Notifier};
pub use terminal::{StreamTerminal, Terminal};

/// Host event routing
///
/// The host raises events (a terminal opened, a command was invoked) and the
/// router hands each one to the handler subscribed for its kind. Handlers
/// share nothing but the applier, which only holds read-only config.

use crate::core::{AliasApplier, AliasEntry, ApplyOutcome};
use crate::host::{Notifier, Terminal};
use futures::future::BoxFuture;
use futures::FutureExt;
use std::collections::HashMap;
use tracing::debug;

/// Kinds of events a handler can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    TerminalOpened,
    ApplyToNewTerminal,
    ApplyToAllTerminals,
    ListAliases,
    StartServer,
}

/// An event raised by the host
pub enum HostEvent<'a> {
    /// The user (or an extension) opened a terminal
    TerminalOpened(&'a mut dyn Terminal),
    /// The "apply aliases" command, run against a freshly created terminal
    ApplyToNewTerminal(&'a mut dyn Terminal),
    /// The "apply aliases everywhere" command
    ApplyToAllTerminals(Vec<&'a mut dyn Terminal>),
    /// The help surface asked for the alias list
    ListAliases,
    /// The "start server" command, run against the active or a new terminal
    StartServer(&'a mut dyn Terminal),
}

impl HostEvent<'_> {
    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::TerminalOpened(_) => EventKind::TerminalOpened,
            HostEvent::ApplyToNewTerminal(_) => EventKind::ApplyToNewTerminal,
            HostEvent::ApplyToAllTerminals(_) => EventKind::ApplyToAllTerminals,
            HostEvent::ListAliases => EventKind::ListAliases,
            HostEvent::StartServer(_) => EventKind::StartServer,
        }
    }
}

/// What a handler produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResponse {
    Outcome(ApplyOutcome),
    Outcomes(Vec<ApplyOutcome>),
    Aliases(Vec<AliasEntry>),
    Ignored,
}

/// Handler signature: applier, the event, and where to send notices
pub type Handler = for<'a> fn(
    &'a AliasApplier,
    HostEvent<'a>,
    &'a dyn Notifier,
) -> BoxFuture<'a, EventResponse>;

/// Routes host events to subscribed handlers
pub struct EventRouter {
    applier: AliasApplier,
    handlers: HashMap<EventKind, Handler>,
}

impl EventRouter {
    /// Router with no subscriptions
    pub fn new(applier: AliasApplier) -> Self {
        Self {
            applier,
            handlers: HashMap::new(),
        }
    }

    /// Router with the standard handler for every event kind
    pub fn with_default_handlers(applier: AliasApplier) -> Self {
        let mut router = Self::new(applier);
        router.subscribe(EventKind::TerminalOpened, apply_to_terminal);
        router.subscribe(EventKind::ApplyToNewTerminal, apply_to_terminal);
        router.subscribe(EventKind::ApplyToAllTerminals, apply_to_all);
        router.subscribe(EventKind::ListAliases, list_aliases);
        router.subscribe(EventKind::StartServer, start_server);
        router
    }

    /// Subscribe `handler` to `kind`, replacing any earlier subscription
    pub fn subscribe(&mut self, kind: EventKind, handler: Handler) {
        self.handlers.insert(kind, handler);
    }

    pub fn unsubscribe(&mut self, kind: EventKind) {
        self.handlers.remove(&kind);
    }

    pub fn is_subscribed(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    pub fn applier(&self) -> &AliasApplier {
        &self.applier
    }

    /// Hand `event` to its handler
    ///
    /// Events without a subscriber are ignored.
    pub async fn emit<'a>(
        &'a self,
        event: HostEvent<'a>,
        notifier: &'a dyn Notifier,
    ) -> EventResponse {
        let kind = event.kind();
        match self.handlers.get(&kind) {
            Some(handler) => {
                debug!(?kind, "routing host event");
                handler(&self.applier, event, notifier).await
            }
            None => {
                debug!(?kind, "no handler subscribed, ignoring event");
                EventResponse::Ignored
            }
        }
    }
}

fn apply_to_terminal<'a>(
    applier: &'a AliasApplier,
    event: HostEvent<'a>,
    notifier: &'a dyn Notifier,
) -> BoxFuture<'a, EventResponse> {
    async move {
        match event {
            HostEvent::TerminalOpened(terminal) | HostEvent::ApplyToNewTerminal(terminal) => {
                EventResponse::Outcome(applier.apply(terminal, notifier).await)
            }
            _ => EventResponse::Ignored,
        }
    }
    .boxed()
}

fn apply_to_all<'a>(
    applier: &'a AliasApplier,
    event: HostEvent<'a>,
    notifier: &'a dyn Notifier,
) -> BoxFuture<'a, EventResponse> {
    async move {
        match event {
            HostEvent::ApplyToAllTerminals(terminals) => {
                EventResponse::Outcomes(applier.apply_all(terminals, notifier).await)
            }
            _ => EventResponse::Ignored,
        }
    }
    .boxed()
}

fn list_aliases<'a>(
    applier: &'a AliasApplier,
    _event: HostEvent<'a>,
    notifier: &'a dyn Notifier,
) -> BoxFuture<'a, EventResponse> {
    async move {
        match applier.list_aliases() {
            Ok(aliases) => EventResponse::Aliases(aliases),
            Err(e) => {
                notifier.error(&e.user_message());
                EventResponse::Aliases(Vec::new())
            }
        }
    }
    .boxed()
}

fn start_server<'a>(
    applier: &'a AliasApplier,
    event: HostEvent<'a>,
    notifier: &'a dyn Notifier,
) -> BoxFuture<'a, EventResponse> {
    async move {
        match event {
            HostEvent::StartServer(terminal) => {
                EventResponse::Outcome(applier.start_server(terminal, notifier).await)
            }
            _ => EventResponse::Ignored,
        }
    }
    .boxed()
}

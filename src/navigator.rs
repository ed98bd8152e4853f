use crate::gate::AccessGate;
use crate::registry::ViewRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle {
        current: &'static str,
    },
    AwaitingCredential {
        current: &'static str,
        pending: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    RequestNavigate(String),
    SubmitCredential(String),
    CancelCredential,
}

/// Side effects a transition asks the UI layer to carry out, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    CloseDrawer,
    ScrollToTop,
    Render { view: &'static str },
    ShowPrompt { pending: &'static str },
    HidePrompt,
    CredentialRejected,
}

/// Everything the navigator owns. Passed in and returned by [`step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub phase: Phase,
    pub gate: AccessGate,
}

impl Session {
    pub fn new(registry: &ViewRegistry) -> Self {
        Self {
            phase: Phase::Idle {
                current: registry.default_view().key,
            },
            gate: AccessGate::new(),
        }
    }

    pub fn current_view(&self) -> &'static str {
        match self.phase {
            Phase::Idle { current } | Phase::AwaitingCredential { current, .. } => current,
        }
    }

    pub fn pending(&self) -> Option<&'static str> {
        match self.phase {
            Phase::AwaitingCredential { pending, .. } => Some(pending),
            Phase::Idle { .. } => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.gate.is_unlocked()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub session: Session,
    pub signals: Vec<Signal>,
}

pub fn step(registry: &ViewRegistry, session: Session, event: &NavEvent) -> Transition {
    let mut signals = Vec::new();
    let session = match (session.phase, event) {
        (Phase::Idle { .. }, NavEvent::RequestNavigate(target)) => {
            navigate(registry, session, target, &mut signals)
        }
        (Phase::AwaitingCredential { current, pending }, NavEvent::SubmitCredential(candidate)) => {
            let mut gate = session.gate;
            if gate.check(candidate) {
                gate.unlock();
                log::info!("credential accepted, resuming navigation to {pending}");
                signals.push(Signal::HidePrompt);
                let resumed = Session {
                    phase: Phase::Idle { current },
                    gate,
                };
                navigate(registry, resumed, pending, &mut signals)
            } else {
                log::info!("credential rejected for {pending}");
                signals.push(Signal::CredentialRejected);
                session
            }
        }
        (Phase::AwaitingCredential { current, pending }, NavEvent::CancelCredential) => {
            log::debug!("navigation to {pending} cancelled");
            signals.push(Signal::HidePrompt);
            let home = registry.default_view().key;
            let cancelled = Session {
                phase: Phase::Idle { current },
                gate: session.gate,
            };
            navigate(registry, cancelled, home, &mut signals)
        }
        (phase, event) => {
            log::debug!("ignoring {event:?} in {phase:?}");
            session
        }
    };
    Transition { session, signals }
}

fn navigate(
    registry: &ViewRegistry,
    session: Session,
    target: &str,
    signals: &mut Vec<Signal>,
) -> Session {
    signals.push(Signal::CloseDrawer);
    signals.push(Signal::ScrollToTop);

    let view = match registry.lookup(target) {
        Some(view) => view,
        None => {
            log::debug!("unknown view {target:?}, falling back to default");
            registry.default_view()
        }
    };

    if view.restricted && !session.gate.is_unlocked() {
        log::debug!("{} is restricted, awaiting credential", view.key);
        signals.push(Signal::ShowPrompt { pending: view.key });
        return Session {
            phase: Phase::AwaitingCredential {
                current: session.current_view(),
                pending: view.key,
            },
            gate: session.gate,
        };
    }

    signals.push(Signal::Render { view: view.key });
    Session {
        phase: Phase::Idle { current: view.key },
        gate: session.gate,
    }
}

/// Owns the session and applies events to it one at a time.
#[derive(Debug, Clone)]
pub struct Navigator {
    registry: ViewRegistry,
    session: Session,
}

impl Navigator {
    pub fn new(registry: ViewRegistry) -> Self {
        let session = Session::new(&registry);
        Self { registry, session }
    }

    pub fn handle(&mut self, event: &NavEvent) -> Vec<Signal> {
        let Transition { session, signals } = step(&self.registry, self.session, event);
        self.session = session;
        signals
    }

    pub fn request_navigate(&mut self, target: &str) -> Vec<Signal> {
        self.handle(&NavEvent::RequestNavigate(target.to_string()))
    }

    pub fn submit_credential(&mut self, candidate: &str) -> Vec<Signal> {
        self.handle(&NavEvent::SubmitCredential(candidate.to_string()))
    }

    pub fn cancel_credential(&mut self) -> Vec<Signal> {
        self.handle(&NavEvent::CancelCredential)
    }

    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    pub fn current_view(&self) -> &'static str {
        self.session.current_view()
    }

    pub fn pending(&self) -> Option<&'static str> {
        self.session.pending()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}

use tokio::sync::mpsc;
use tracing::debug;

/// Runtime-level connectivity signal fed into the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityEvent {
    Online,
    Offline,
}

/// Notice the presentation layer should act on. The offline notice stays
/// up until connectivity returns; going online dismisses exactly that
/// notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityNotice {
    ShowOffline,
    DismissOffline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConnectivityState {
    Online,
    Offline,
}

/// Two-state online/offline machine. Informational only: nothing else is
/// gated by this state, and repeated events in the same state are
/// swallowed so each transition yields exactly one notice.
pub struct ConnectivityMonitor {
    state: ConnectivityState,
    notices: mpsc::UnboundedSender<ConnectivityNotice>,
}

impl ConnectivityMonitor {
    /// Create a monitor plus the receiver for its notices. Starts online.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ConnectivityNotice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                state: ConnectivityState::Online,
                notices: tx,
            },
            rx,
        )
    }

    pub fn is_offline(&self) -> bool {
        self.state == ConnectivityState::Offline
    }

    pub fn handle_event(&mut self, event: ConnectivityEvent) {
        let next = match event {
            ConnectivityEvent::Online => ConnectivityState::Online,
            ConnectivityEvent::Offline => ConnectivityState::Offline,
        };

        if next == self.state {
            return;
        }

        self.state = next;
        debug!(?next, "connectivity transition");

        let notice = match next {
            ConnectivityState::Offline => ConnectivityNotice::ShowOffline,
            ConnectivityState::Online => ConnectivityNotice::DismissOffline,
        };
        // Receiver may be gone during shutdown; the notice is advisory.
        let _ = self.notices.send(notice);
    }
}

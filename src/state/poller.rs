//! Ticket Status Poller
//!
//! Keeps a customer's view of their place in line current and alerts them
//! when it's their turn. The transition rule is a small pure function so the
//! edge-triggered alert and terminal-stop behavior are testable without a
//! browser; the controller around it owns the timers.

use gloo_timers::callback::Interval;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::alerts::AlertGates;
use crate::api;
use crate::model::{PublicTicket, TicketStatus};

/// Status poll cadence.
pub const POLL_INTERVAL_MS: u32 = 5_000;

/// What a freshly observed status means relative to the last observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollStep {
    /// Fire the called-state side effects (sound/vibration/notification).
    pub fire_alert: bool,
    /// Stop polling and swap to the terminal screen.
    pub terminal: bool,
}

/// Edge-triggered transition rule: the alert fires only when the ticket
/// enters `called` from a different prior status, never on repeated polls
/// observing `called` unchanged.
pub fn observe(last: Option<TicketStatus>, next: TicketStatus) -> PollStep {
    PollStep {
        fire_alert: next == TicketStatus::Called && last != Some(TicketStatus::Called),
        terminal: next.is_terminal(),
    }
}

/// Polling controller for one ticket. Constructed once per status page;
/// `start`/`stop` own the interval handle.
#[derive(Clone)]
pub struct StatusPoller {
    ticket_id: i64,
    /// Latest fetched ticket, refreshed every tick.
    pub ticket: RwSignal<Option<PublicTicket>>,
    /// Last observed status, reset per page load.
    pub last_status: RwSignal<Option<TicketStatus>>,
    /// Set once on `served`/`left`; the view swaps on it.
    pub terminal: RwSignal<Option<TicketStatus>>,
    /// Drives the blinking alert bar while the ticket is `called`.
    pub alert_active: RwSignal<bool>,
    alerts: AlertGates,
    countdown: Countdown,
    handle: Rc<RefCell<Option<Interval>>>,
}

impl StatusPoller {
    pub fn ticket_id(&self) -> i64 {
        self.ticket_id
    }

    pub fn new(ticket_id: i64, alerts: AlertGates, countdown: Countdown) -> Self {
        Self {
            ticket_id,
            ticket: create_rw_signal(None),
            last_status: create_rw_signal(None),
            terminal: create_rw_signal(None),
            alert_active: create_rw_signal(false),
            alerts,
            countdown,
            handle: Rc::new(RefCell::new(None)),
        }
    }

    /// Poll immediately, then every [`POLL_INTERVAL_MS`].
    pub fn start(&self) {
        self.refresh();
        let poller = self.clone();
        *self.handle.borrow_mut() = Some(Interval::new(POLL_INTERVAL_MS, move || {
            poller.refresh();
        }));
    }

    /// Cancel the poll timer. Dropping the handle clears the interval, so no
    /// further callbacks can touch a replaced view.
    pub fn stop(&self) {
        self.handle.borrow_mut().take();
    }

    /// One fetch-and-apply cycle; also wired to the manual refresh button.
    /// A failed poll is logged and skipped, the interval keeps running.
    pub fn refresh(&self) {
        let poller = self.clone();
        spawn_local(async move {
            match api::fetch_public_ticket(poller.ticket_id).await {
                Ok(ticket) => poller.apply(ticket),
                Err(e) => {
                    web_sys::console::warn_1(&format!("status poll failed: {e}").into());
                }
            }
        });
    }

    fn apply(&self, ticket: PublicTicket) {
        let step = observe(self.last_status.get_untracked(), ticket.status);

        if step.terminal {
            // Cancel before the terminal screen replaces the live view, and
            // drop the stored ids so a reload lands on the join form.
            self.stop();
            self.countdown.stop();
            crate::session::forget_ticket();
            self.terminal.set(Some(ticket.status));
        }

        if step.fire_alert {
            let lang = crate::session::lang()
                .and_then(|code| crate::i18n::Lang::from_str(&code))
                .unwrap_or_default();
            self.alerts.fire(crate::i18n::t(lang, "status_called_banner"));
        }
        self.alert_active.set(ticket.status == TicketStatus::Called);

        if !step.terminal {
            if let Some(eta) = ticket.eta_estimate_sec() {
                self.countdown.arm(eta);
            }
        }

        self.last_status.set(Some(ticket.status));
        self.ticket.set(Some(ticket));
    }
}

/// Cosmetic 1-second countdown to the estimated turn. Armed once per page
/// lifetime with the first known ETA and never re-synced from later polls,
/// so it drifts smoothly instead of jumping on every server answer.
#[derive(Clone)]
pub struct Countdown {
    pub remaining: RwSignal<i64>,
    pub total: RwSignal<i64>,
    handle: Rc<RefCell<Option<Interval>>>,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Countdown {
    pub fn new() -> Self {
        Self {
            remaining: create_rw_signal(0),
            total: create_rw_signal(0),
            handle: Rc::new(RefCell::new(None)),
        }
    }

    /// True once an ETA has armed the display. Signal-backed, so views
    /// holding this in a closure re-render when the first ETA arrives.
    pub fn armed(&self) -> bool {
        self.total.get() > 0
    }

    /// Record the first nonzero ETA in the signals; later calls are no-ops
    /// so a running display is never reset by a fresh poll. Returns whether
    /// this call armed it.
    fn mark_armed(&self, seconds: u32) -> bool {
        if seconds == 0 || self.total.get_untracked() > 0 {
            return false;
        }
        self.total.set(seconds as i64);
        self.remaining.set(seconds as i64);
        true
    }

    /// Arm the ticking display; only the first call per page has any effect.
    pub fn arm(&self, seconds: u32) {
        if !self.mark_armed(seconds) {
            return;
        }

        let remaining = self.remaining;
        let handle = Rc::clone(&self.handle);
        *self.handle.borrow_mut() = Some(Interval::new(1_000, move || {
            let next = remaining.get_untracked() - 1;
            if next <= 0 {
                remaining.set(0);
                handle.borrow_mut().take();
            } else {
                remaining.set(next);
            }
        }));
    }

    pub fn stop(&self) {
        self.handle.borrow_mut().take();
    }
}

/// `MM:SS` label for the countdown ring.
pub fn format_countdown(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_fires_once_per_entry_into_called() {
        // Fresh page observing an already-called ticket still alerts once.
        assert!(observe(None, TicketStatus::Called).fire_alert);
        // waiting -> called is the normal edge.
        assert!(observe(Some(TicketStatus::Waiting), TicketStatus::Called).fire_alert);
        // called -> called on the next poll must not re-fire.
        assert!(!observe(Some(TicketStatus::Called), TicketStatus::Called).fire_alert);
    }

    #[test]
    fn alert_refires_after_requeue() {
        // called -> waiting -> called is two distinct entries.
        assert!(!observe(Some(TicketStatus::Called), TicketStatus::Waiting).fire_alert);
        assert!(observe(Some(TicketStatus::Waiting), TicketStatus::Called).fire_alert);
    }

    #[test]
    fn alert_never_fires_for_other_statuses() {
        for next in [TicketStatus::Waiting, TicketStatus::Served, TicketStatus::Left] {
            assert!(!observe(None, next).fire_alert);
            assert!(!observe(Some(TicketStatus::Called), next).fire_alert);
        }
    }

    #[test]
    fn terminal_statuses_stop_polling() {
        assert!(observe(Some(TicketStatus::Called), TicketStatus::Served).terminal);
        assert!(observe(Some(TicketStatus::Waiting), TicketStatus::Left).terminal);
        assert!(!observe(Some(TicketStatus::Waiting), TicketStatus::Called).terminal);
        assert!(!observe(None, TicketStatus::Waiting).terminal);
    }

    #[test]
    fn exhaustive_status_sequence_alerts_exactly_once() {
        let sequence = [
            TicketStatus::Waiting,
            TicketStatus::Waiting,
            TicketStatus::Called,
            TicketStatus::Called,
            TicketStatus::Called,
            TicketStatus::Served,
        ];

        let mut last = None;
        let mut alerts = 0;
        let mut terminal_at = None;
        for (i, status) in sequence.into_iter().enumerate() {
            let step = observe(last, status);
            if step.fire_alert {
                alerts += 1;
            }
            if step.terminal && terminal_at.is_none() {
                terminal_at = Some(i);
            }
            last = Some(status);
        }

        assert_eq!(alerts, 1);
        assert_eq!(terminal_at, Some(5));
    }

    #[test]
    fn countdown_arms_once_and_visibility_is_signal_backed() {
        let runtime = create_runtime();

        let countdown = Countdown::new();
        let probe_countdown = countdown.clone();
        // Stands in for the view closure on the status page: it must
        // re-evaluate when the first ETA lands after mount.
        let visible = create_memo(move |_| probe_countdown.armed());
        assert!(!visible.get());

        assert!(countdown.mark_armed(90));
        assert!(visible.get());
        assert_eq!(countdown.remaining.get(), 90);
        assert_eq!(countdown.total.get(), 90);

        // Later polls carry fresher ETAs; the running display keeps its own.
        assert!(!countdown.mark_armed(300));
        assert_eq!(countdown.total.get(), 90);

        // A zero ETA is not an ETA.
        let idle = Countdown::new();
        assert!(!idle.mark_armed(0));
        assert!(!idle.armed());

        runtime.dispose();
    }

    #[test]
    fn countdown_label() {
        assert_eq!(format_countdown(930), "15:30");
        assert_eq!(format_countdown(59), "00:59");
        assert_eq!(format_countdown(-3), "00:00");
    }
}

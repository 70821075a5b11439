//! View Models
//!
//! Serde mappings of the backend JSON shapes. Everything here is transient:
//! fetched fresh on each poll and never mutated client-side.

/// Ticket lifecycle as reported by the backend.
///
/// The derived ordering (`waiting < called < served < left`) is the fixed
/// display priority used to group dashboard table rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Waiting,
    Called,
    Served,
    Left,
}

impl TicketStatus {
    /// `served` and `left` end the ticket's life; polling stops on them.
    pub fn is_terminal(self) -> bool {
        matches!(self, TicketStatus::Served | TicketStatus::Left)
    }

    /// i18n key for the status pill label.
    pub fn label_key(self) -> &'static str {
        match self {
            TicketStatus::Waiting => "status_waiting",
            TicketStatus::Called => "status_called",
            TicketStatus::Served => "status_served",
            TicketStatus::Left => "status_left",
        }
    }
}

/// A ticket as seen from the staff side (`GET /tickets/:queueId`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i64,
    pub name: String,
    pub party_size: u32,
    pub status: TicketStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub called_at: Option<String>,
    #[serde(default)]
    pub served_at: Option<String>,
    #[serde(default)]
    pub left_at: Option<String>,
    #[serde(default)]
    pub contact_value: Option<String>,
}

/// A customer in line ahead of you, shown in the snapshot panel.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AheadEntry {
    pub name: String,
    pub party_size: u32,
}

/// The customer's own view of their ticket (`GET /tickets/public/:ticketId`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicTicket {
    pub id: i64,
    pub name: String,
    #[serde(default = "default_party_size")]
    pub party_size: u32,
    pub status: TicketStatus,
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub eta_seconds: Option<u32>,
    #[serde(default)]
    pub ahead_of_you: Vec<AheadEntry>,
    #[serde(default)]
    pub custom_message: Option<String>,
    #[serde(default)]
    pub total_waiting: Option<u32>,
    #[serde(default)]
    pub avg_service_sec: Option<u32>,
}

fn default_party_size() -> u32 {
    1
}

impl PublicTicket {
    /// Seconds of estimated wait: the backend figure when present, otherwise
    /// average service time times position ahead.
    pub fn eta_estimate_sec(&self) -> Option<u32> {
        self.eta_seconds.or_else(|| {
            let avg = self.avg_service_sec?;
            let pos = self.position.filter(|&p| p > 0)?;
            Some(avg * pos)
        })
    }

    /// Whole minutes for display; without a backend figure, derived from
    /// average service time and position ahead.
    pub fn eta_display_min(&self) -> Option<u32> {
        match self.eta_seconds {
            Some(secs) => Some(seconds_to_minutes(secs)),
            None => {
                let avg = self.avg_service_sec?;
                let pos = self.position.filter(|&p| p > 0)?;
                Some(eta_minutes(avg, pos))
            }
        }
    }
}

/// ETA in minutes from average service seconds and position ahead.
pub fn eta_minutes(avg_service_sec: u32, position: u32) -> u32 {
    seconds_to_minutes(avg_service_sec * position)
}

fn seconds_to_minutes(seconds: u32) -> u32 {
    (seconds as f64 / 60.0).round() as u32
}

/// A named waiting line (`GET /queues`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Queue {
    pub id: i64,
    pub name: String,
    pub is_open: bool,
    #[serde(default = "default_avg_service")]
    pub avg_service_sec: u32,
    #[serde(default)]
    pub custom_message: Option<String>,
}

fn default_avg_service() -> u32 {
    300
}

/// Body of `POST /tickets`. `contactType`/`contactValue` are serialized as
/// explicit nulls when no contact was given, matching what the backend
/// expects from the join form.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub queue_id: i64,
    pub name: String,
    pub party_size: u32,
    pub contact_type: Option<String>,
    pub contact_value: Option<String>,
}

/// Largest party the join form accepts.
pub const MAX_PARTY_SIZE: u32 = 6;

/// Client-side form check; sizes outside 1..=6 never reach the network.
pub fn party_size_ok(party_size: u32) -> bool {
    (1..=MAX_PARTY_SIZE).contains(&party_size)
}

/// Build the join payload from raw form fields.
pub fn join_request(queue_id: i64, name: &str, party_size: u32, contact: &str) -> JoinRequest {
    let contact = contact.trim();
    JoinRequest {
        queue_id,
        name: name.trim().to_string(),
        party_size,
        contact_type: (!contact.is_empty()).then(|| "sms".to_string()),
        contact_value: (!contact.is_empty()).then(|| contact.to_string()),
    }
}

/// Global counters shown on the analytics page (`GET /analytics/global`).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStats {
    #[serde(default)]
    pub total_tickets: Option<u64>,
    #[serde(default)]
    pub served_tickets: Option<u64>,
    #[serde(default)]
    pub total_queues: Option<u64>,
}

/// One calendar day of aggregates (`GET /analytics/daily?days=N`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStat {
    /// `YYYY-MM-DD`
    pub date: String,
    #[serde(default)]
    pub served: u32,
    #[serde(default)]
    pub left: u32,
    #[serde(default)]
    pub avg_wait_minutes: f64,
    /// Ticket volume per hour of day, 24 buckets.
    #[serde(default)]
    pub hourly: Vec<u32>,
}

/// Format an RFC 3339 timestamp as `HH:MM`, or an em dash when absent.
pub fn format_time(ts: Option<&str>) -> String {
    ts.and_then(|raw| chrono::DateTime::parse_from_rfc3339(raw).ok())
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_priority_orders_table_groups() {
        let mut statuses = vec![
            TicketStatus::Left,
            TicketStatus::Waiting,
            TicketStatus::Served,
            TicketStatus::Called,
        ];
        statuses.sort();
        assert_eq!(
            statuses,
            vec![
                TicketStatus::Waiting,
                TicketStatus::Called,
                TicketStatus::Served,
                TicketStatus::Left,
            ]
        );
    }

    #[test]
    fn status_wire_format_is_lowercase() {
        let s: TicketStatus = serde_json::from_str("\"called\"").unwrap();
        assert_eq!(s, TicketStatus::Called);
        assert_eq!(serde_json::to_string(&TicketStatus::Waiting).unwrap(), "\"waiting\"");
    }

    #[test]
    fn eta_rounds_to_minutes() {
        assert_eq!(eta_minutes(300, 3), 15);
        assert_eq!(eta_minutes(90, 1), 2); // 1.5 min rounds up
        assert_eq!(eta_minutes(300, 0), 0);
    }

    #[test]
    fn eta_falls_back_to_avg_times_position() {
        let ticket = PublicTicket {
            id: 1,
            name: "Alex".into(),
            party_size: 2,
            status: TicketStatus::Waiting,
            position: Some(3),
            eta_seconds: None,
            ahead_of_you: vec![],
            custom_message: None,
            total_waiting: Some(3),
            avg_service_sec: Some(300),
        };
        assert_eq!(ticket.eta_display_min(), Some(15));

        // A backend-supplied figure wins over the derived one.
        let with_backend_eta = PublicTicket {
            eta_seconds: Some(600),
            ..ticket
        };
        assert_eq!(with_backend_eta.eta_display_min(), Some(10));
    }

    #[test]
    fn party_size_boundary() {
        assert!(party_size_ok(6));
        assert!(!party_size_ok(7));
        assert!(!party_size_ok(0));
    }

    #[test]
    fn join_body_matches_backend_contract() {
        let req = join_request(1, "Alex", 2, "");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "queueId": 1,
                "name": "Alex",
                "partySize": 2,
                "contactType": null,
                "contactValue": null,
            })
        );

        let with_contact = join_request(1, " Alex ", 2, "+998901234567");
        assert_eq!(with_contact.name, "Alex");
        assert_eq!(with_contact.contact_type.as_deref(), Some("sms"));
        assert_eq!(with_contact.contact_value.as_deref(), Some("+998901234567"));
    }

    #[test]
    fn queue_defaults_and_toggle_round_trip() {
        let queue: Queue = serde_json::from_value(serde_json::json!({
            "id": 1, "name": "Main", "isOpen": true
        }))
        .unwrap();
        assert_eq!(queue.avg_service_sec, 300);
        assert_eq!(queue.custom_message, None);

        // Two toggles land back on the original displayed state.
        let once = Queue { is_open: !queue.is_open, ..queue.clone() };
        let twice = Queue { is_open: !once.is_open, ..once };
        assert_eq!(twice.is_open, queue.is_open);
    }

    #[test]
    fn time_formatting() {
        assert_eq!(format_time(Some("2025-03-01T13:05:00Z")), "13:05");
        assert_eq!(format_time(Some("not a date")), "—");
        assert_eq!(format_time(None), "—");
    }
}

//! Rendering of command outcomes
//!
//! Text mode is the fixed output contract of the original tool: exact
//! strings, and nothing at all for a successful create or an empty status.
//! JSON mode emits one object per outcome for machine consumers.

use crate::session::Event;

/// Output mode selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Render one event, without a trailing newline
///
/// Returns `None` when the contract calls for no output: a successful
/// `create_parking_lot` and a `status` over an empty lot (not even the
/// header is printed).
pub fn render_event(event: &Event, format: OutputFormat) -> Option<String> {
    match format {
        OutputFormat::Text => render_text(event),
        OutputFormat::Json => {
            // Derive-only types with string and integer fields; to_string
            // fails only for non-string map keys or erroring Serialize impls
            Some(serde_json::to_string(event).expect("event serialization cannot fail"))
        }
    }
}

fn render_text(event: &Event) -> Option<String> {
    match event {
        Event::Created { .. } => None,
        Event::Allocated { slot } => Some(format!("Allocated slot number: {}", slot)),
        Event::LotFull => Some("Sorry, parking lot is full".to_string()),
        Event::Left(receipt) => Some(format!(
            "Registration number {} with Slot Number {} is free with Charge ${}",
            receipt.registration, receipt.slot, receipt.charge
        )),
        Event::NotFound { registration } => {
            Some(format!("Registration number {} not found", registration))
        }
        Event::Status { entries } => {
            if entries.is_empty() {
                return None;
            }
            let mut out = String::from("Slot No. Registration No.");
            for entry in entries {
                out.push_str(&format!("\n{} {}", entry.slot, entry.registration));
            }
            Some(out)
        }
        Event::NotInitialized => Some("Parking lot not initialized".to_string()),
        Event::Rejected { message } => Some(message.clone()),
    }
}

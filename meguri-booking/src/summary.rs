//! Review-step summary assembly.
//!
//! The summary is a flat label/value list plus a price quote, derived once
//! when the user reaches the review step. Rows only appear for data that was
//! actually collected, so a modal session simply has no date row.
use crate::numbers::format_thousands;
use crate::plan::TourPlan;
use crate::pricing::{PriceQuote, TourLength, quote};
use crate::session::{TransferStop, WizardSession};

/// One rendered summary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

/// Everything the review step shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSummary {
    /// Heading from the tour variant, e.g. `"Regional Tour"`.
    pub title: String,
    pub rows: Vec<SummaryRow>,
    pub quote: PriceQuote,
}

impl BookingSummary {
    /// Price string for the footer, e.g. `"¥150,000 (approx. $1,000 USD)"`.
    /// Falls back when no price could be computed.
    #[must_use]
    pub fn price_line(&self) -> String {
        if self.quote.total_jpy <= 0 {
            return "To be determined".to_string();
        }
        format!(
            "¥{} (approx. ${} USD)",
            format_thousands(self.quote.total_jpy),
            format_thousands(self.quote.total_usd)
        )
    }
}

/// Build the summary from the session's collected state. Runs after the
/// logistics step validates, but tolerates gaps by omitting their rows.
#[must_use]
pub fn build_summary(session: &WizardSession) -> BookingSummary {
    let mut rows = Vec::new();
    let catalog = session.catalog();
    let contact = session.contact();

    if let Some(date) = session.selected_date() {
        rows.push(row("Date", date.format("%B %-d, %Y").to_string()));
    }
    rows.push(row("Name", contact.name.trim().to_string()));
    rows.push(row("Email", contact.email.trim().to_string()));
    rows.push(row("Contact", contact.contact.trim().to_string()));
    rows.push(row("Group Size", people(session.party_size())));

    let plan = session.plan();
    if let Some(plan) = plan {
        rows.push(row("Tour Type", plan.tour_type().title().to_string()));
        match plan {
            TourPlan::Regional(plan) => {
                if let Some(region) = plan.region.as_deref().and_then(|id| catalog.region(id)) {
                    rows.push(row("Region", region.name.clone()));
                }
                if let Some(days) = plan.length_days {
                    rows.push(row(
                        "Tour Length",
                        TourLength::Days(u32::from(days)).label(),
                    ));
                }
                if plan.prefectures.is_satisfied() {
                    rows.push(row("Prefectures", plan.prefectures.selected().join(", ")));
                }
            }
            TourPlan::Specialized(plan) => {
                if let Some(category) =
                    plan.category.as_deref().and_then(|id| catalog.specialized(id))
                {
                    rows.push(row("Category", category.name.clone()));
                }
                if let Some(hours) = plan.hours {
                    rows.push(row(
                        "Duration",
                        TourLength::Hours(u32::from(hours)).label(),
                    ));
                }
                if plan.options.is_satisfied() {
                    rows.push(row("Selected Options", plan.options.selected().join(", ")));
                }
            }
            TourPlan::Customized(plan) => {
                if let Some(length) = plan.length() {
                    rows.push(row("Tour Length", length.label()));
                }
                if !plan.interest.trim().is_empty() {
                    rows.push(row("Interests", plan.interest.trim().to_string()));
                }
            }
        }
    }

    let transport = plan
        .and_then(TourPlan::transport_id)
        .and_then(|id| catalog.transport(id));
    if let Some(transport) = transport {
        rows.push(row("Transportation", transport.label.clone()));
    }

    let logistics = session.logistics();
    if let Some(value) = stop_value(&logistics.pickup) {
        rows.push(row("Pickup", value));
    }
    if let Some(value) = stop_value(&logistics.dropoff) {
        rows.push(row("Dropoff", value));
    }
    if !logistics.extra_info.trim().is_empty() {
        rows.push(row("Additional Info", logistics.extra_info.trim().to_string()));
    }

    let quote = plan.map_or_else(PriceQuote::zero, |plan| {
        quote(
            plan.tour_type(),
            transport,
            plan.length(),
            session.party_size(),
        )
    });

    BookingSummary {
        title: plan.map_or_else(String::new, |plan| plan.tour_type().title().to_string()),
        rows,
        quote,
    }
}

fn row(label: &'static str, value: String) -> SummaryRow {
    SummaryRow { label, value }
}

fn people(count: u32) -> String {
    if count == 1 {
        "1 person".to_string()
    } else {
        format!("{count} people")
    }
}

fn stop_value(stop: &TransferStop) -> Option<String> {
    let kind = stop.kind?;
    let details = stop.details.trim();
    if details.is_empty() {
        Some(kind.label().to_string())
    } else {
        Some(format!("{} - {}", kind.label(), details))
    }
}

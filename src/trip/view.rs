//! Trip detail page: day-by-day summaries, expense totals and the forms for
//! editing the trip and adding items.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        LINK_STYLE, PAGE_CONTAINER_STYLE, base, format_amount, page_header,
    },
    item::{DayItem, get_items_for_trip, get_trip_expense_total},
    summary::{DaySummary, build_day_summaries},
    trip::{Trip, TripId, get_trip},
    version::AppVersion,
};

/// The state needed for the trip detail page.
#[derive(Debug, Clone)]
pub struct TripDetailPageState {
    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for TripDetailPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the detail page for one trip.
pub async fn get_trip_detail_page(
    Path((version, trip_id)): Path<(String, TripId)>,
    State(state): State<TripDetailPageState>,
) -> Result<Response, Error> {
    let version = AppVersion::from_path_segment(&version)?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let trip = get_trip(trip_id, &connection)?;

    let items = get_items_for_trip(trip_id, &connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve items: {error}"))?;

    let trip_total = get_trip_expense_total(trip_id, &connection)
        .inspect_err(|error| tracing::error!("Failed to total expenses: {error}"))?;

    let summaries = build_day_summaries(trip.days, items);

    Ok(trip_detail_view(version, &trip, &summaries, trip_total).into_response())
}

fn trip_detail_view(
    version: AppVersion,
    trip: &Trip,
    summaries: &[DaySummary],
    trip_total: f64,
) -> Markup {
    let content = html! {
        (page_header(version))

        main class=(PAGE_CONTAINER_STYLE)
        {
            header
            {
                h1 class=(version.heading_style()) { (trip.name) }

                p class="text-sm text-gray-500 dark:text-gray-400"
                {
                    (trip.days) " day trip, created " (trip.created_at.date())
                }
            }

            details class="mt-4"
            {
                summary class=(LINK_STYLE) { "Edit trip" }
                (edit_trip_form_view(version, trip))
            }

            (delete_trip_form_view(version, trip))

            section class="mt-6 space-y-4"
            {
                @for summary in summaries {
                    (day_view(version, trip.id, summary))
                }
            }

            p id="trip-total" class="mt-6 font-bold"
            {
                "Trip total: " (format_amount(trip_total))
            }

            details class="mt-4"
            {
                summary class=(LINK_STYLE) { "Add an item" }
                (new_item_form_view(version, trip))
            }
        }
    };

    base(trip.name.as_ref(), &content)
}

fn day_view(version: AppVersion, trip_id: TripId, summary: &DaySummary) -> Markup {
    html! {
        section class=(version.card_style()) data-day=(summary.day_number)
        {
            h2 class="font-semibold" { "Day " (summary.day_number) }

            ul class="mt-2 space-y-2"
            {
                @for item in &summary.items {
                    (item_view(version, trip_id, item))
                }

                @if summary.items.is_empty() {
                    li class="text-sm text-gray-500 dark:text-gray-400"
                    {
                        "Nothing planned yet."
                    }
                }
            }

            p class="mt-2 text-sm font-medium day-total"
            {
                "Day total: " (format_amount(summary.total))
            }
        }
    }
}

fn item_view(version: AppVersion, trip_id: TripId, item: &DayItem) -> Markup {
    html! {
        li class="flex items-baseline gap-2" data-item-id=(item.id)
        {
            span { (item.title) }

            @if let Some(map_link) = &item.map_link {
                a href=(map_link) class=(LINK_STYLE) { "map" }
            }

            @if item.expense_name.is_some() || item.expense_amount != 0.0 {
                span class="text-sm text-gray-500 dark:text-gray-400"
                {
                    @if let Some(expense_name) = &item.expense_name {
                        (expense_name) ": "
                    }
                    (format_amount(item.expense_amount))
                }
            }

            form
                method="post"
                action=(endpoints::delete_item(version, trip_id, item.id))
                class="ml-auto"
            {
                button type="submit" class=(BUTTON_DELETE_STYLE) { "Delete" }
            }
        }
    }
}

fn edit_trip_form_view(version: AppVersion, trip: &Trip) -> Markup {
    html! {
        form
            method="post"
            action=(endpoints::edit_trip(version, trip.id))
            class="mt-2 space-y-4"
        {
            div
            {
                label for="name" class=(FORM_LABEL_STYLE) { "Trip Name" }

                input
                    id="name"
                    type="text"
                    name="name"
                    value=(trip.name)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="days" class=(FORM_LABEL_STYLE) { "Days" }

                input
                    id="days"
                    type="number"
                    name="days"
                    min="1"
                    value=(trip.days)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Update Trip" }
        }
    }
}

fn delete_trip_form_view(version: AppVersion, trip: &Trip) -> Markup {
    html! {
        form
            method="post"
            action=(endpoints::delete_trip(version, trip.id))
            class="mt-2"
        {
            button type="submit" class=(BUTTON_DELETE_STYLE) { "Delete Trip" }
        }
    }
}

fn new_item_form_view(version: AppVersion, trip: &Trip) -> Markup {
    html! {
        form
            method="post"
            action=(endpoints::create_item(version, trip.id))
            class="mt-2 space-y-4"
        {
            div
            {
                label for="day_number" class=(FORM_LABEL_STYLE) { "Day" }

                input
                    id="day_number"
                    type="number"
                    name="day_number"
                    min="1"
                    max=(trip.days)
                    value="1"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="title" class=(FORM_LABEL_STYLE) { "Title" }

                input
                    id="title"
                    type="text"
                    name="title"
                    placeholder="e.g. Museum visit"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="map_link" class=(FORM_LABEL_STYLE) { "Map Link (optional)" }

                input
                    id="map_link"
                    type="text"
                    name="map_link"
                    placeholder="https://..."
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="expense_name" class=(FORM_LABEL_STYLE) { "Expense Name (optional)" }

                input
                    id="expense_name"
                    type="text"
                    name="expense_name"
                    placeholder="e.g. Tickets"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="expense_amount" class=(FORM_LABEL_STYLE) { "Expense Amount" }

                input
                    id="expense_amount"
                    type="number"
                    name="expense_amount"
                    min="0"
                    step="0.01"
                    value="0"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Item" }
        }
    }
}

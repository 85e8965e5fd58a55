//! The landing page, which links to each page version.

use axum::response::{IntoResponse, Response};
use maud::html;

use crate::{
    endpoints,
    html::{LINK_STYLE, PAGE_CONTAINER_STYLE, base},
    version::AppVersion,
};

/// Render the landing page.
pub async fn get_landing_page() -> Response {
    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-2xl font-bold" { "Daytrip" }

            p class="mt-2"
            {
                "Plan trips day by day and keep track of what each day costs. \
                Pick a look to get started; the pages only differ visually."
            }

            ul class="mt-4 space-y-2"
            {
                @for version in AppVersion::ALL {
                    li
                    {
                        a href=(endpoints::trips_view(version)) class=(LINK_STYLE)
                        {
                            (version.display_name())
                        }

                        span class="text-sm text-gray-500 dark:text-gray-400"
                        {
                            " (" (version.as_path_segment()) ")"
                        }
                    }
                }
            }
        }
    };

    base("Welcome", &content).into_response()
}

use maud::{DOCTYPE, Markup, html};

use crate::{
    catalog::ShowtimeListing,
    entities::{cinema, movie},
    models::SaleStatus,
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn index_page() -> String {
    page(
        "Gishe",
        html! {
            div class="bg-white shadow rounded-lg p-8" {
                h1 class="text-3xl font-bold text-gray-900" { "Gishe" }
                p class="mt-2 text-gray-600" { "Movies, cinemas and showtimes." }

                div class="mt-8 grid gap-4 sm:grid-cols-3" {
                    (index_link("/movies", "Movies", "What's on the screen."))
                    (index_link("/cinemas", "Cinemas", "Where it plays."))
                    (index_link("/showtimes", "Showtimes", "When to go."))
                }
            }
        },
    )
}

fn index_link(href: &str, label: &str, blurb: &str) -> Markup {
    html! {
        a class="block rounded-lg border border-gray-200 p-6 hover:border-blue-500 hover:shadow" href=(href) {
            h2 class="text-lg font-semibold text-gray-900" { (label) }
            p class="mt-1 text-sm text-gray-500" { (blurb) }
        }
    }
}

pub fn movie_list_page(movies: &[movie::Model]) -> String {
    page(
        "Movies",
        html! {
            h1 class="text-3xl font-bold text-gray-900" { "Movies" }

            @if movies.is_empty() {
                div class="mt-10 bg-white shadow rounded-lg p-8" {
                    p class="text-gray-600" { "No movies in the catalog yet." }
                }
            } @else {
                div class="mt-10 space-y-4" {
                    @for movie in movies {
                        a class="block bg-white shadow rounded-lg p-6 hover:shadow-md" href=(format!("/movie/{}", movie.id)) {
                            h2 class="text-xl font-semibold text-gray-900" {
                                (movie.title)
                                @if let Some(year) = movie.year {
                                    span class="ml-2 font-normal text-gray-500" { "(" (year) ")" }
                                }
                            }
                            @if let Some(director) = &movie.director {
                                p class="mt-1 text-sm text-gray-500" { "Directed by " (director) }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn movie_detail_page(movie: &movie::Model) -> String {
    page(
        &movie.title,
        html! {
            div class="bg-white shadow rounded-lg p-8" {
                h1 class="text-3xl font-bold text-gray-900" {
                    (movie.title)
                    @if let Some(year) = movie.year {
                        span class="ml-2 font-normal text-gray-500" { "(" (year) ")" }
                    }
                }

                dl class="mt-6 space-y-3" {
                    @if let Some(director) = &movie.director {
                        (detail_row("Director", director))
                    }
                    @if let Some(length) = movie.length_min {
                        (detail_row("Length", &format!("{length} min")))
                    }
                }

                @if let Some(description) = &movie.description {
                    p class="mt-6 text-gray-700" { (description) }
                }

                @if let Some(poster) = &movie.poster {
                    img class="mt-6 max-w-xs rounded-lg" src=(poster) alt=(movie.title);
                }

                (back_link("/movies", "All movies"))
            }
        },
    )
}

pub fn cinema_list_page(cinemas: &[cinema::Model]) -> String {
    page(
        "Cinemas",
        html! {
            h1 class="text-3xl font-bold text-gray-900" { "Cinemas" }

            @if cinemas.is_empty() {
                div class="mt-10 bg-white shadow rounded-lg p-8" {
                    p class="text-gray-600" { "No cinemas in the catalog yet." }
                }
            } @else {
                div class="mt-10 space-y-4" {
                    @for cinema in cinemas {
                        a class="block bg-white shadow rounded-lg p-6 hover:shadow-md" href=(format!("/cinema/{}", cinema.code)) {
                            h2 class="text-xl font-semibold text-gray-900" { (cinema.name) }
                            p class="mt-1 text-sm text-gray-500" { (cinema.city) }
                        }
                    }
                }
            }
        },
    )
}

pub fn cinema_detail_page(cinema: &cinema::Model) -> String {
    page(
        &cinema.name,
        html! {
            div class="bg-white shadow rounded-lg p-8" {
                h1 class="text-3xl font-bold text-gray-900" { (cinema.name) }
                p class="mt-1 text-gray-500" { (cinema.city) }

                dl class="mt-6 space-y-3" {
                    @if let Some(capacity) = cinema.capacity {
                        (detail_row("Capacity", &format!("{capacity} seats")))
                    }
                    @if let Some(phone) = &cinema.phone {
                        (detail_row("Phone", phone))
                    }
                    @if let Some(address) = &cinema.address {
                        (detail_row("Address", address))
                    }
                }

                @if let Some(image) = &cinema.image {
                    img class="mt-6 max-w-md rounded-lg" src=(image) alt=(cinema.name);
                }

                (back_link("/cinemas", "All cinemas"))
            }
        },
    )
}

pub fn showtime_list_page(listings: &[ShowtimeListing]) -> String {
    page(
        "Showtimes",
        html! {
            h1 class="text-3xl font-bold text-gray-900" { "Showtimes" }

            @if listings.is_empty() {
                div class="mt-10 bg-white shadow rounded-lg p-8" {
                    p class="text-gray-600" { "No showtimes scheduled." }
                }
            } @else {
                div class="mt-10 space-y-4" {
                    @for listing in listings {
                        (showtime_card(listing))
                    }
                }
            }
        },
    )
}

fn showtime_card(listing: &ShowtimeListing) -> Markup {
    let show = &listing.show;

    html! {
        div class="bg-white shadow rounded-lg p-6" {
            div class="flex items-start justify-between gap-4" {
                div {
                    h2 class="text-xl font-semibold text-gray-900" {
                        a class="hover:text-blue-700" href=(format!("/movie/{}", listing.movie.id)) { (listing.movie.title) }
                    }
                    p class="mt-1 text-sm text-gray-500" {
                        a class="hover:text-gray-700" href=(format!("/cinema/{}", listing.cinema.code)) { (listing.cinema.name) }
                        " · " (listing.cinema.city)
                    }
                }
                (status_badge(show.sale_status()))
            }

            div class="mt-4 flex flex-wrap gap-6 text-sm text-gray-700" {
                span class="font-medium" { (format_start(show.start_time)) }
                span { (show.price_display()) }
                @if show.is_full() {
                    span class="font-semibold text-red-600" { "Sold out" }
                } @else {
                    span class="text-gray-500" { (show.free_seats) " of " (show.salable_seats) " seats free" }
                }
            }
        }
    }
}

fn status_badge(status: Option<SaleStatus>) -> Markup {
    let (label, color) = match status {
        Some(status) => (
            status.label(),
            match status {
                SaleStatus::SaleNotStarted => "bg-gray-100 text-gray-600",
                SaleStatus::SaleOpen => "bg-green-100 text-green-800",
                SaleStatus::TicketsSold => "bg-amber-100 text-amber-800",
                SaleStatus::SaleClosed => "bg-gray-200 text-gray-700",
                SaleStatus::MoviePlayed => "bg-blue-100 text-blue-800",
                SaleStatus::ShowCanceled => "bg-red-100 text-red-800",
            },
        ),
        None => ("unknown", "bg-gray-100 text-gray-600"),
    };

    html! {
        span class=(format!("shrink-0 rounded-full px-3 py-1 text-xs font-medium {color}")) { (label) }
    }
}

pub fn error_page(message: String) -> String {
    page(
        "Error",
        html! {
            div class="bg-white shadow rounded-lg p-8" {
                h1 class="text-2xl font-bold text-gray-900" { "Error" }
                p class="mt-4 text-gray-700" { (message) }
                a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
            }
        },
    )
}

fn detail_row(label: &str, value: &str) -> Markup {
    html! {
        div class="flex gap-3" {
            dt class="w-24 shrink-0 text-sm font-medium text-gray-500" { (label) }
            dd class="text-sm text-gray-900" { (value) }
        }
    }
}

fn back_link(href: &str, label: &str) -> Markup {
    html! {
        a class="mt-8 inline-block text-sm text-blue-600 hover:text-blue-800" href=(href) { (label) }
    }
}

fn format_start(start_time: i64) -> String {
    match jiff::Timestamp::from_second(start_time) {
        Ok(ts) => ts.strftime("%Y-%m-%d %H:%M").to_string(),
        Err(_) => "-".to_string(),
    }
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body {
                div class="min-h-screen bg-gray-50" {
                    nav class="border-b border-gray-200 bg-white" {
                        div class="max-w-4xl mx-auto flex items-center gap-6 px-6 py-4" {
                            a class="font-bold text-gray-900" href="/" { "Gishe" }
                            a class="text-sm text-gray-600 hover:text-gray-900" href="/movies" { "Movies" }
                            a class="text-sm text-gray-600 hover:text-gray-900" href="/cinemas" { "Cinemas" }
                            a class="text-sm text-gray-600 hover:text-gray-900" href="/showtimes" { "Showtimes" }
                        }
                    }
                    div class="max-w-4xl mx-auto px-6 py-10" { (body) }
                }
            }
        }
    }
    .into_string()
}

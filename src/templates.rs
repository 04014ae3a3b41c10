use maud::{DOCTYPE, Markup, html};

use crate::{
    entities::movie,
    models::{FieldError, MovieCandidate, REVIEW_MAX_LEN},
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn index_page(movies: &[movie::Model]) -> String {
    page(
        "My Top Movies",
        html! {
            div class="max-w-3xl mx-auto px-6 py-12" {
                div class="flex items-start justify-between gap-6" {
                    div {
                        h1 class="text-3xl font-bold text-gray-900" { "My Top Movies" }
                        p class="mt-2 text-gray-600" { "Ranked by your rating." }
                    }
                    a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/add" { "Add movie" }
                }

                @if movies.is_empty() {
                    div class="mt-10 bg-white shadow rounded-lg p-8" {
                        p class="text-gray-600" { "Nothing here yet. Add your first movie." }
                    }
                } @else {
                    div class="mt-10 space-y-4" {
                        @for movie in movies {
                            (movie_card(movie))
                        }
                    }
                }
            }
        },
    )
}

fn movie_card(movie: &movie::Model) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6 flex gap-6" {
            img class="h-36 w-24 rounded object-cover bg-gray-200" src=(movie.img_url) alt=(movie.title);
            div class="flex-1" {
                h2 class="text-xl font-semibold text-gray-900" {
                    (movie.title)
                    span class="ml-2 font-normal text-gray-500" { "(" (movie.year) ")" }
                }
                @if let Some(rating) = movie.rating {
                    p class="mt-1 text-sm font-medium text-amber-600" { (format!("{rating}/10")) }
                } @else {
                    p class="mt-1 text-sm text-gray-400" { "Not rated yet" }
                }
                @if let Some(review) = &movie.review {
                    p class="mt-2 text-sm italic text-gray-700" { "“" (review) "”" }
                }
                @if let Some(description) = &movie.description {
                    p class="mt-2 text-sm text-gray-600" { (description) }
                }
                div class="mt-4 flex gap-4 text-sm" {
                    a class="text-blue-600 hover:text-blue-800" href=(format!("/edit/{}", movie.id)) { "Edit" }
                    a class="text-red-600 hover:text-red-800" href=(format!("/delete/{}", movie.id)) { "Delete" }
                }
            }
        }
    }
}

pub fn add_page(title: &str, errors: &[FieldError]) -> String {
    page(
        "Add a movie",
        html! {
            div class="max-w-xl mx-auto px-6 py-12" {
                div class="bg-white shadow rounded-lg p-8" {
                    h1 class="text-2xl font-bold text-gray-900" { "Add a movie" }
                    form class="mt-6 space-y-6" method="post" action="/add" {
                        div {
                            label class="block text-sm font-medium text-gray-700" for="title" { "Title of the movie" }
                            input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="title" id="title" value=(title);
                            (field_messages(errors, "title"))
                        }
                        button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Search" }
                    }
                    a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back" }
                }
            }
        },
    )
}

pub fn select_page(query: &str, candidates: &[MovieCandidate]) -> String {
    page(
        "Pick your movie",
        html! {
            div class="max-w-xl mx-auto px-6 py-12" {
                div class="bg-white shadow rounded-lg p-8" {
                    h1 class="text-2xl font-bold text-gray-900" { "Results for “" (query) "”" }
                    @if candidates.is_empty() {
                        p class="mt-4 text-gray-600" { "No results. Try a different title." }
                    } @else {
                        ul class="mt-6 divide-y divide-gray-200" {
                            @for candidate in candidates {
                                li {
                                    a class="block py-3 text-blue-600 hover:text-blue-800" href=(format!("/select/{}", candidate.id)) {
                                        (candidate.title)
                                        @if !candidate.release_date.is_empty() {
                                            span class="ml-2 text-sm text-gray-500" { (candidate.release_date) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/add" { "Search again" }
                }
            }
        },
    )
}

pub fn edit_page(
    movie: &movie::Model,
    rating: &str,
    review: &str,
    errors: &[FieldError],
) -> String {
    page(
        "Rate your movie",
        html! {
            div class="max-w-xl mx-auto px-6 py-12" {
                div class="bg-white shadow rounded-lg p-8" {
                    h1 class="text-2xl font-bold text-gray-900" { (movie.title) }
                    p class="mt-1 text-gray-500" { "(" (movie.year) ")" }
                    form class="mt-6 space-y-6" method="post" action=(format!("/edit/{}", movie.id)) {
                        div {
                            label class="block text-sm font-medium text-gray-700" for="rating" { "Your rating out of 10" }
                            input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="rating" id="rating" value=(rating);
                            (field_messages(errors, "rating"))
                        }
                        div {
                            label class="block text-sm font-medium text-gray-700" for="review" { "Your review" }
                            input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="review" id="review" value=(review) maxlength=(REVIEW_MAX_LEN);
                            (field_messages(errors, "review"))
                        }
                        button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Done" }
                    }
                    a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back" }
                }
            }
        },
    )
}

pub fn error_page(message: String) -> String {
    page(
        "Error",
        html! {
            div class="max-w-xl mx-auto px-6 py-12" {
                div class="bg-white shadow rounded-lg p-8" {
                    h1 class="text-2xl font-bold text-gray-900" { "Error" }
                    p class="mt-4 text-gray-700" { (message) }
                    a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                }
            }
        },
    )
}

fn field_messages(errors: &[FieldError], field: &str) -> Markup {
    html! {
        @for error in errors.iter().filter(|e| e.field == field) {
            p class="mt-2 text-sm text-red-600" { (error.message) }
        }
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
            body class="min-h-screen bg-gray-50" { (body) }
        }
    }
    .into_string()
}

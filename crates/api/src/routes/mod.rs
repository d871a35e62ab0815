pub mod health;
pub mod movies;
pub mod payments;
pub mod theatre;
pub mod tickets;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                    list movies (GET)
/// /add-movie           create movie (POST)
/// /movies/{id}         update, delete movie (PUT, DELETE)
///
/// /tickets             list tickets (GET)
/// /add-ticket          create ticket (POST)
///
/// /theatre             list seats, bulk create seats (GET, POST)
/// /theatre/{id}        update seat (PUT)
///
/// /signup              create account (POST)
/// /login               issue token (POST)
///
/// /confirm-payment     send confirmation email (POST)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(movies::router())
        .merge(tickets::router())
        .merge(theatre::router())
        .merge(users::router())
        .merge(payments::router())
}

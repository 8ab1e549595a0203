use axum::{
    Extension, Router,
    routing::{get, post},
};

use crate::modules::hours::use_cases::hour_exceptions::inbound::http as exceptions_http;
use crate::modules::hours::use_cases::list_hours::inbound::http as list_http;
use crate::modules::hours::use_cases::write_hours::inbound::http as write_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/hours", get(list_http::list_paged).post(write_http::create))
        .route("/hours/infinite", get(list_http::list_infinite))
        .route("/hours/calendar", get(list_http::calendar))
        .route(
            "/hours/{id}",
            get(list_http::single)
                .put(write_http::edit)
                .delete(write_http::delete),
        )
        .route("/tags/totals", get(list_http::tag_totals))
        .route(
            "/hour-exceptions",
            post(exceptions_http::create).get(exceptions_http::list_infinite),
        )
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .with_state(state)
}

use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, http::HeaderMap, response::Html};

use crate::modules::hours::use_cases::hour_exceptions::inbound::graphql::{
    HourExceptionsMutation, HourExceptionsQuery,
};
use crate::modules::hours::use_cases::list_hours::inbound::graphql::HoursQuery;
use crate::modules::hours::use_cases::write_hours::inbound::graphql::WriteHoursMutation;
use crate::shared::infrastructure::transport::owner_from_headers;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(HoursQuery, HourExceptionsQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(WriteHoursMutation, HourExceptionsMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

/// The caller identity rides along as request data; resolvers read it with
/// `data_opt::<OwnerId>()`.
pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();
    if let Some(owner) = owner_from_headers(&headers) {
        request = request.data(owner);
    }
    schema.execute(request).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}

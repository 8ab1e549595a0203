use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::hours::adapters::inbound::graphql_types::{
    GqlCursorInput, GqlExceptionCategory, GqlHourException, GqlHourExceptionSlice,
    GqlHourExceptionType,
};
use crate::modules::hours::adapters::inbound::views::{CursorPageView, HourExceptionView};
use crate::modules::hours::use_cases::hour_exceptions::command::CreateHourException;
use crate::modules::hours::use_cases::hour_exceptions::inbound::http::CreateHourExceptionBody;
use crate::shared::core::primitives::OwnerId;
use crate::shared::infrastructure::transport::to_gql_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct HourExceptionsQuery;

#[Object]
impl HourExceptionsQuery {
    async fn hour_exceptions_infinite(
        &self,
        context: &Context<'_>,
        cursor: Option<GqlCursorInput>,
        limit: Option<i64>,
        category: Option<GqlExceptionCategory>,
    ) -> GqlResult<GqlHourExceptionSlice> {
        let state = context.data_unchecked::<AppState>();
        let owner = context.data_opt::<OwnerId>();
        let slice = state
            .hour_exceptions
            .list_infinite(owner, cursor.map(Into::into), limit, category.map(Into::into))
            .await
            .map_err(to_gql_error)?;
        Ok(CursorPageView::<HourExceptionView>::from(slice).into())
    }
}

#[derive(Default)]
pub struct HourExceptionsMutation;

#[Object]
impl HourExceptionsMutation {
    async fn create_hour_exception(
        &self,
        context: &Context<'_>,
        date: String,
        hours: f64,
        kind: GqlHourExceptionType,
    ) -> GqlResult<GqlHourException> {
        let state = context.data_unchecked::<AppState>();
        let owner = context.data_opt::<OwnerId>();
        let command = CreateHourException::try_from(CreateHourExceptionBody {
            date,
            hours,
            kind: kind.into(),
        })
        .map_err(to_gql_error)?;
        let exception = state
            .hour_exceptions
            .create(owner, command)
            .await
            .map_err(to_gql_error)?;
        Ok(HourExceptionView::from(exception).into())
    }
}

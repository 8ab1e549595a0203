use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::hours::adapters::inbound::graphql_types::{
    GqlCursorInput, GqlHour, GqlHourPage, GqlHourSlice, GqlTagTotal,
};
use crate::modules::hours::adapters::inbound::views::{
    CursorPageView, HourView, OffsetPageView, TagTotalView,
};
use crate::modules::hours::core::date_filter::{DateFilter, parse_day};
use crate::modules::hours::use_cases::list_hours::inbound::http::parse_hour_id;
use crate::shared::core::primitives::OwnerId;
use crate::shared::infrastructure::transport::to_gql_error;
use crate::shell::state::AppState;

fn date_filter(
    date: Option<String>,
    from: Option<String>,
    to: Option<String>,
) -> GqlResult<Option<DateFilter>> {
    DateFilter::from_parts(date.as_deref(), from.as_deref(), to.as_deref())
        .map_err(|e| to_gql_error(e.into()))
}

#[derive(Default)]
pub struct HoursQuery;

#[Object]
impl HoursQuery {
    async fn hours(
        &self,
        context: &Context<'_>,
        date: Option<String>,
        from: Option<String>,
        to: Option<String>,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> GqlResult<GqlHourPage> {
        let state = context.data_unchecked::<AppState>();
        let owner = context.data_opt::<OwnerId>();
        let filter = date_filter(date, from, to)?;
        let page = state
            .list_hours
            .list_paged(
                owner,
                filter,
                page.unwrap_or(1),
                page_size.unwrap_or(state.default_page_size),
            )
            .await
            .map_err(to_gql_error)?;
        Ok(OffsetPageView::<HourView>::from(page).into())
    }

    async fn hours_infinite(
        &self,
        context: &Context<'_>,
        date: Option<String>,
        from: Option<String>,
        to: Option<String>,
        cursor: Option<GqlCursorInput>,
        limit: Option<i64>,
    ) -> GqlResult<GqlHourSlice> {
        let state = context.data_unchecked::<AppState>();
        let owner = context.data_opt::<OwnerId>();
        let filter = date_filter(date, from, to)?;
        let slice = state
            .list_hours
            .list_infinite(owner, filter, cursor.map(Into::into), limit)
            .await
            .map_err(to_gql_error)?;
        Ok(CursorPageView::<HourView>::from(slice).into())
    }

    async fn hours_by_date(
        &self,
        context: &Context<'_>,
        from: String,
        to: String,
    ) -> GqlResult<Vec<GqlHour>> {
        let state = context.data_unchecked::<AppState>();
        let owner = context.data_opt::<OwnerId>();
        let from = parse_day(&from).map_err(|e| to_gql_error(e.into()))?;
        let to = parse_day(&to).map_err(|e| to_gql_error(e.into()))?;
        let rows = state
            .list_hours
            .range_for_calendar(owner, from, to)
            .await
            .map_err(to_gql_error)?;
        Ok(rows
            .into_iter()
            .map(|entry| HourView::from(entry).into())
            .collect())
    }

    async fn hour(&self, context: &Context<'_>, id: String) -> GqlResult<GqlHour> {
        let state = context.data_unchecked::<AppState>();
        let owner = context.data_opt::<OwnerId>();
        let id = parse_hour_id(&id).map_err(to_gql_error)?;
        let entry = state
            .list_hours
            .single(owner, id)
            .await
            .map_err(to_gql_error)?;
        Ok(HourView::from(entry).into())
    }

    async fn tag_totals(&self, context: &Context<'_>) -> GqlResult<Vec<GqlTagTotal>> {
        let state = context.data_unchecked::<AppState>();
        let owner = context.data_opt::<OwnerId>();
        let totals = state
            .list_hours
            .tag_totals(owner)
            .await
            .map_err(to_gql_error)?;
        Ok(totals
            .into_iter()
            .map(|total| TagTotalView::from(total).into())
            .collect())
    }
}

use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::hours::adapters::inbound::graphql_types::GqlHour;
use crate::modules::hours::adapters::inbound::views::HourView;
use crate::modules::hours::use_cases::list_hours::inbound::http::parse_hour_id;
use crate::modules::hours::use_cases::write_hours::command::CreateHour;
use crate::modules::hours::use_cases::write_hours::inbound::http::{CreateHourBody, EditHourBody};
use crate::shared::core::primitives::OwnerId;
use crate::shared::infrastructure::transport::to_gql_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct WriteHoursMutation;

#[Object]
impl WriteHoursMutation {
    async fn create_hour(
        &self,
        context: &Context<'_>,
        value: f64,
        date: String,
        description: String,
        project_id: String,
        tag_ids: Option<Vec<String>>,
    ) -> GqlResult<GqlHour> {
        let state = context.data_unchecked::<AppState>();
        let owner = context.data_opt::<OwnerId>();
        let command = CreateHour::try_from(CreateHourBody {
            value,
            date,
            description,
            project_id,
            tag_ids: tag_ids.unwrap_or_default(),
        })
        .map_err(to_gql_error)?;
        let entry = state
            .write_hours
            .create(owner, command)
            .await
            .map_err(to_gql_error)?;
        Ok(HourView::from(entry).into())
    }

    #[allow(clippy::too_many_arguments)]
    async fn edit_hour(
        &self,
        context: &Context<'_>,
        id: String,
        value: f64,
        date: String,
        description: String,
        project_id: String,
        tag_ids: Vec<String>,
        existing_tag_ids: Vec<String>,
    ) -> GqlResult<GqlHour> {
        let state = context.data_unchecked::<AppState>();
        let owner = context.data_opt::<OwnerId>();
        let id = parse_hour_id(&id).map_err(to_gql_error)?;
        let command = EditHourBody {
            value,
            date,
            description,
            project_id,
            tag_ids,
            existing_tag_ids,
        }
        .into_command(id)
        .map_err(to_gql_error)?;
        let entry = state
            .write_hours
            .edit(owner, command)
            .await
            .map_err(to_gql_error)?;
        Ok(HourView::from(entry).into())
    }

    async fn delete_hour(&self, context: &Context<'_>, id: String) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let owner = context.data_opt::<OwnerId>();
        let id = parse_hour_id(&id).map_err(to_gql_error)?;
        state
            .write_hours
            .delete(owner, id)
            .await
            .map_err(to_gql_error)?;
        Ok(true)
    }
}

use crate::modules::hours::adapters::outbound::hour_store_in_memory::InMemoryHourStore;
use crate::modules::hours::use_cases::hour_exceptions::handler::HourExceptionsHandler;
use crate::modules::hours::use_cases::list_hours::handler::ListHoursHandler;
use crate::modules::hours::use_cases::write_hours::handler::WriteHoursHandler;
use crate::shared::core::pagination::MAX_PAGE_SIZE;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_hours: Arc<ListHoursHandler<InMemoryHourStore>>,
    pub write_hours: Arc<WriteHoursHandler<InMemoryHourStore>>,
    pub hour_exceptions: Arc<HourExceptionsHandler<InMemoryHourStore>>,
    /// Signed, as page sizes arrive from clients.
    pub default_page_size: i64,
}

impl AppState {
    pub fn new(store: Arc<InMemoryHourStore>, default_page_size: u64) -> Self {
        let default_page_size = default_page_size.clamp(1, MAX_PAGE_SIZE);
        Self {
            list_hours: Arc::new(ListHoursHandler::new(store.clone(), default_page_size)),
            write_hours: Arc::new(WriteHoursHandler::new(store.clone())),
            hour_exceptions: Arc::new(HourExceptionsHandler::new(store, default_page_size)),
            default_page_size: i64::try_from(default_page_size).unwrap_or(i64::MAX),
        }
    }
}

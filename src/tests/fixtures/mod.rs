pub mod commands {
    pub mod create_hour;
}
pub mod store;

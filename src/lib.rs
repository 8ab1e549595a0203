pub mod shared {
    pub mod core {
        pub mod errors;
        pub mod identity;
        pub mod pagination;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod store;
        pub mod transport;
    }
}

pub mod modules {
    pub mod hours {
        pub mod core {
            pub mod date_filter;
            pub mod hour_entry;
            pub mod hour_exception;
            pub mod tag_reconciler;
        }
        pub mod use_cases {
            pub mod list_hours {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod write_hours {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod hour_exceptions {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql_types;
                pub mod views;
            }
            pub mod outbound {
                pub mod hour_store;
                pub mod hour_store_in_memory;
            }
        }
    }
}

pub mod shell;

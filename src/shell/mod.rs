// Composition root for the hours bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the store and wire it into the use case handlers.
// - Expose the HTTP routes and the GraphQL schema.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;

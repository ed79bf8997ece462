// Composition root for the billing context.
//
// Responsibilities
// - Read config from environment.
// - Wire the static catalog and pricing policy into the use case handlers.
// - Expose the HTTP and GraphQL surfaces.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;

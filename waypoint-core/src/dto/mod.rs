//! Data Transfer Objects for the routing service API
//!
//! Bodies sent to and received from the remote routing service that are not
//! themselves domain types. Status responses deserialize straight into
//! [`RouteStatus`](crate::domain::route::RouteStatus).

pub mod route;

//! # userdept
//!
//! > **An in-memory User/Department REST service built on resource actors.**
//!
//! Users and departments each live in their own store actor. A single HTTP
//! resource, `/users`, exposes list, get, insert, replace, patch and delete;
//! departments are read-only and only referenced from users.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`store_actor`])
//! The generic `ResourceActor<T>` lives in its own crate. Each store is one
//! Tokio task owning a `BTreeMap`, so every single store call is atomic.
//!
//! ### 2. The Stores ([`user_store`], [`department_store`])
//! Concrete stores: the [`StoreEntity`](store_actor::StoreEntity) impls and
//! one error type per store.
//!
//! ### 3. The Interface ([`clients`])
//! Domain clients wrapping the generic `ResourceClient`, so the rest of the
//! crate sees `UserError` and `DepartmentError` instead of framework errors.
//!
//! ### 4. The Handler ([`resource`])
//! [`UserResource`](resource::UserResource) expresses the six operations as
//! sequences of store calls, including the department check on patch.
//!
//! ### 5. The Surface ([`http`])
//! actix-web handlers and the mapping from domain errors to status codes.
//!
//! ### 6. The Orchestrator ([`lifecycle`])
//! Starts, seeds and stops the stores and installs tracing.
//!
//! ## Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run -- --bind 127.0.0.1:8080
//! curl -X POST localhost:8080/users -H 'content-type: application/json' \
//!      -d '{"name":"Alice","email":"alice@x.com","department":{"id":1}}'
//! ```

pub mod clients;
pub mod config;
pub mod department_store;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod resource;
pub mod seed;
pub mod user_store;

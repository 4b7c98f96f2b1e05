//! HTTP API backend and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM over SQLite for
//! persistence and tower-sessions for cookie sessions.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules and orchestration between repositories
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, validated parameters and filters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database, mailer, upload settings)
//! - **Startup** (`startup`) - Database and session initialization
//! - **Seed** (`seed`) - Optional demo data for an empty database
//! - **Router** (`router`) - Route table and OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** checks access, converts the DTO to a parameter type, calls a service
//! 3. **Service** applies business rules and calls one or more repositories
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO inside the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod seed;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

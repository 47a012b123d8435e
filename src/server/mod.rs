//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the academic
//! administration API: endpoints, business logic, data access and infrastructure.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Validation, conflict checks and attendance aggregation
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, token lifetime)
//! - **Startup** (`startup`) - Database connection, migrations, admin bootstrap, CORS, shutdown
//! - **Router** (`router`) - Axum route configuration and OpenAPI documentation
//! - **Util** (`util/`) - Request extractors, password and token hashing, name formatting
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the appropriate controller
//! 2. **Controller** checks access through `AuthGuard`, converts DTOs to params, calls service
//! 3. **Service** validates input, checks references and conflicts, orchestrates repositories
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain model to DTO and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

//! Infrastructure layer - storage, hashing, logging and services

pub mod logging;
pub mod storage;
pub mod user;

pub use user::{
    Argon2Hasher, CreateUserRequest, InMemoryUserRepository, PasswordHasher,
    PostgresUserRepository, UpdateUserRequest, UserService,
};

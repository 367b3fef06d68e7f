//! Wire types shared between the task table frontend and the task store.

pub mod domain;
pub mod enums;
pub mod shared;

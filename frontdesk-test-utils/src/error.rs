use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Any other error raised by code under test (kept boxed so this crate
    /// needs no dependency on the application crate).
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

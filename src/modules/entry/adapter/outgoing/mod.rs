mod entry_query_postgres;
mod entry_repository_postgres;
pub mod sea_orm_entity;

pub use entry_query_postgres::EntryQueryPostgres;
pub use entry_repository_postgres::EntryRepositoryPostgres;

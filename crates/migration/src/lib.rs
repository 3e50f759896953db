pub use sea_orm_migration::prelude::*;

mod m20260301_000001_expenses;
mod m20260301_000002_salaries;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_expenses::Migration),
            Box::new(m20260301_000002_salaries::Migration),
        ]
    }
}

pub use sea_orm_migration::prelude::*;

mod m20260710_000001_create_user_table;
mod m20260710_000002_create_character_table;
mod m20260710_000003_create_planet_table;
mod m20260710_000004_create_starship_table;
mod m20260710_000005_create_favorite_character_table;
mod m20260710_000006_create_favorite_planet_table;
mod m20260710_000007_create_favorite_starship_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260710_000001_create_user_table::Migration),
            Box::new(m20260710_000002_create_character_table::Migration),
            Box::new(m20260710_000003_create_planet_table::Migration),
            Box::new(m20260710_000004_create_starship_table::Migration),
            Box::new(m20260710_000005_create_favorite_character_table::Migration),
            Box::new(m20260710_000006_create_favorite_planet_table::Migration),
            Box::new(m20260710_000007_create_favorite_starship_table::Migration),
        ]
    }
}

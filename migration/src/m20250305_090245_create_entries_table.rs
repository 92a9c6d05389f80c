use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Entries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Entries::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Entries::TopicId).uuid().not_null())
                    .col(ColumnDef::new(Entries::Text).text().not_null())
                    .col(
                        ColumnDef::new(Entries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entries_topic_id")
                            .from(Entries::Table, Entries::TopicId)
                            .to(Topics::Table, Topics::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_entries_topic_id_created_at")
                    .table(Entries::Table)
                    .col(Entries::TopicId)
                    .col(Entries::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_entries_topic_id_created_at")
                    .table(Entries::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Entries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Entries {
    Table,
    Id,
    TopicId,
    Text,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Topics {
    Table,
    Id,
}

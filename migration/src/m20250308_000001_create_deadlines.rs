use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Deadlines::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Deadlines::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Deadlines::Subject).string().not_null())
                    .col(ColumnDef::new(Deadlines::Batch).string().not_null())
                    .col(ColumnDef::new(Deadlines::Deadline).string().not_null())
                    .col(ColumnDef::new(Deadlines::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 每个 科目 + 年级 只保留一个截止日期
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_deadlines_subject_batch")
                    .table(Deadlines::Table)
                    .col(Deadlines::Subject)
                    .col(Deadlines::Batch)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Deadlines::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Deadlines {
    #[sea_orm(iden = "deadlines")]
    Table,
    Id,
    Subject,
    Batch,
    Deadline,
    UpdatedAt,
}

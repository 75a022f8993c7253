use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 学生表（由外部系统维护，这里只读）
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Usn).string().not_null())
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::Password).string().not_null())
                    .col(ColumnDef::new(Users::Semester).string().null())
                    .col(ColumnDef::new(Users::Branch).string().null())
                    .col(ColumnDef::new(Users::Batch).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 教职工表
        manager
            .create_table(
                Table::create()
                    .table(Staffs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Staffs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Staffs::Name).string().not_null())
                    .col(ColumnDef::new(Staffs::Email).string().not_null())
                    .col(ColumnDef::new(Staffs::Password).string().not_null())
                    .col(ColumnDef::new(Staffs::Subjects).text().not_null())
                    .to_owned(),
            )
            .await?;

        // 作业提交表
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assignments::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Assignments::Subject).string().not_null())
                    .col(ColumnDef::new(Assignments::Title).string().not_null())
                    .col(ColumnDef::new(Assignments::Description).text().not_null())
                    .col(ColumnDef::new(Assignments::Category).string().not_null())
                    .col(
                        ColumnDef::new(Assignments::AssignmentNumber)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assignments::File).string().not_null())
                    .col(
                        ColumnDef::new(Assignments::SubmittedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_staffs_email")
                    .table(Staffs::Table)
                    .col(Staffs::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignments_user_id")
                    .table(Assignments::Table)
                    .col(Assignments::UserId)
                    .to_owned(),
            )
            .await?;

        // 教师按 科目 + 作业编号 筛选
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignments_subject_number")
                    .table(Assignments::Table)
                    .col(Assignments::Subject)
                    .col(Assignments::AssignmentNumber)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Staffs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Usn,
    Name,
    Email,
    Password,
    Semester,
    Branch,
    Batch,
}

#[derive(DeriveIden)]
enum Staffs {
    #[sea_orm(iden = "staffs")]
    Table,
    Id,
    Name,
    Email,
    Password,
    Subjects,
}

#[derive(DeriveIden)]
enum Assignments {
    #[sea_orm(iden = "assignments")]
    Table,
    Id,
    UserId,
    Subject,
    Title,
    Description,
    Category,
    AssignmentNumber,
    File,
    SubmittedAt,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ==================== 角色表 ====================
        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Roles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Roles::Name).string().not_null().unique_key())
                    .to_owned(),
            )
            .await?;

        // ==================== 黑客松角色成员表 ====================
        manager
            .create_table(
                Table::create()
                    .table(HackathonRoles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HackathonRoles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(HackathonRoles::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HackathonRoles::HackathonId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HackathonRoles::RoleId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(HackathonRoles::Table, HackathonRoles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(HackathonRoles::Table, HackathonRoles::HackathonId)
                            .to(Hackathons::Table, Hackathons::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(HackathonRoles::Table, HackathonRoles::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_hackathon_roles_member")
                    .table(HackathonRoles::Table)
                    .col(HackathonRoles::UserId)
                    .col(HackathonRoles::HackathonId)
                    .col(HackathonRoles::RoleId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // 预置内置角色
        let insert = Query::insert()
            .into_table(Roles::Table)
            .columns([Roles::Name])
            .values_panic(["judge".into()])
            .values_panic(["vip".into()])
            .to_owned();
        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HackathonRoles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Roles {
    #[sea_orm(iden = "roles")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum HackathonRoles {
    #[sea_orm(iden = "hackathon_roles")]
    Table,
    Id,
    UserId,
    HackathonId,
    RoleId,
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Hackathons {
    #[sea_orm(iden = "hackathons")]
    Table,
    Id,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260712_000001_create_event_table::Event;

static FK_REGISTRATION_EVENT_ID: &str = "fk_registration_event_id";
static IDX_REGISTRATION_EVENT_BADGE: &str = "idx_registration_event_id_badge_code";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Registration::Table)
                    .if_not_exists()
                    .col(pk_auto(Registration::Id))
                    .col(integer(Registration::EventId))
                    .col(string_null(Registration::BadgeCode))
                    .col(string(Registration::FullName))
                    .col(string(Registration::IdNumber))
                    .col(string_null(Registration::Division))
                    .col(timestamp(Registration::RegisteredAt))
                    .col(boolean(Registration::Confirmed).default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REGISTRATION_EVENT_ID)
                    .from_tbl(Registration::Table)
                    .from_col(Registration::EventId)
                    .to_tbl(Event::Table)
                    .to_col(Event::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REGISTRATION_EVENT_BADGE)
                    .table(Registration::Table)
                    .col(Registration::EventId)
                    .col(Registration::BadgeCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REGISTRATION_EVENT_BADGE)
                    .table(Registration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_REGISTRATION_EVENT_ID)
                    .table(Registration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Registration::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Registration {
    Table,
    Id,
    EventId,
    BadgeCode,
    FullName,
    IdNumber,
    Division,
    RegisteredAt,
    Confirmed,
}

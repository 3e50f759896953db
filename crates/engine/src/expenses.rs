//! Expense rows as stored in the `expenses` table.

use chrono::Utc;
use sea_orm::{ActiveValue, entity::prelude::*};
use uuid::Uuid;

use crate::{ExpenseDraft, ExpenseRecord, Money, RawAmount};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub category: String,
    pub amount_minor: i64,
    /// `YYYY-MM-DD`. Stored as text, so rows written by other tools may hold
    /// anything here.
    pub date: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Active model for a fresh row.
    pub(crate) fn from_draft(id: Uuid, draft: &ExpenseDraft) -> Self {
        Self {
            id: ActiveValue::Set(id.to_string()),
            category: ActiveValue::Set(draft.category.clone()),
            amount_minor: ActiveValue::Set(draft.amount.minor()),
            date: ActiveValue::Set(draft.date.format("%Y-%m-%d").to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
    }

    /// Active model overwriting the user-editable columns of an existing row.
    pub(crate) fn for_update(id: Uuid, draft: &ExpenseDraft) -> Self {
        Self {
            id: ActiveValue::Unchanged(id.to_string()),
            category: ActiveValue::Set(draft.category.clone()),
            amount_minor: ActiveValue::Set(draft.amount.minor()),
            date: ActiveValue::Set(draft.date.format("%Y-%m-%d").to_string()),
            created_at: ActiveValue::NotSet,
        }
    }
}

impl From<Model> for ExpenseRecord {
    fn from(model: Model) -> Self {
        let id = Uuid::parse_str(&model.id).ok();
        if id.is_none() {
            tracing::debug!(id = %model.id, "expense row has a malformed id");
        }
        Self {
            id,
            category: model.category,
            amount: RawAmount::from(Money::new(model.amount_minor)),
            date: Some(model.date),
        }
    }
}

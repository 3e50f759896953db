use sea_orm::{QueryOrder, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{
    DEFAULT_CATEGORIES, EngineError, ExpenseDraft, ExpenseRecord, ResultEngine, Salary, Snapshot,
    expenses, salaries,
};

use super::{Engine, with_tx};

fn not_found(id: Uuid) -> EngineError {
    EngineError::KeyNotFound(format!("expense {id}"))
}

impl Engine {
    /// All expenses, oldest first.
    pub async fn list_expenses(&self) -> ResultEngine<Vec<ExpenseRecord>> {
        let models = expenses::Entity::find()
            .order_by_asc(expenses::Column::CreatedAt)
            .order_by_asc(expenses::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(ExpenseRecord::from).collect())
    }

    /// A single expense by id.
    pub async fn expense(&self, id: Uuid) -> ResultEngine<ExpenseRecord> {
        expenses::Entity::find_by_id(id.to_string())
            .one(&self.database)
            .await?
            .map(ExpenseRecord::from)
            .ok_or_else(|| not_found(id))
    }

    /// Persists a new expense under a fresh id.
    pub async fn create_expense(&self, draft: ExpenseDraft) -> ResultEngine<ExpenseRecord> {
        let id = Uuid::new_v4();
        expenses::ActiveModel::from_draft(id, &draft)
            .insert(&self.database)
            .await?;
        Ok(draft.into_record(id))
    }

    /// Overwrites category, amount and date of an existing expense.
    pub async fn update_expense(
        &self,
        id: Uuid,
        draft: ExpenseDraft,
    ) -> ResultEngine<ExpenseRecord> {
        with_tx!(self, |db_tx| {
            let exists = expenses::Entity::find_by_id(id.to_string())
                .one(&db_tx)
                .await?
                .is_some();
            if !exists {
                return Err(not_found(id));
            }

            expenses::ActiveModel::for_update(id, &draft)
                .update(&db_tx)
                .await?;
            Ok(draft.into_record(id))
        })
    }

    /// Creates or updates depending on whether the caller holds an id.
    pub async fn save_expense(
        &self,
        id: Option<Uuid>,
        draft: ExpenseDraft,
    ) -> ResultEngine<ExpenseRecord> {
        match id {
            Some(id) => self.update_expense(id, draft).await,
            None => self.create_expense(draft).await,
        }
    }

    pub async fn delete_expense(&self, id: Uuid) -> ResultEngine<()> {
        let result = expenses::Entity::delete_by_id(id.to_string())
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    /// Default categories first, then every other label in use, in the order
    /// it was first recorded.
    pub async fn categories(&self) -> ResultEngine<Vec<String>> {
        let mut categories: Vec<String> = DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect();
        for record in self.list_expenses().await? {
            if !categories.contains(&record.category) {
                categories.push(record.category);
            }
        }
        Ok(categories)
    }

    /// Expenses and salary read in one database transaction.
    pub async fn snapshot(&self) -> ResultEngine<Snapshot> {
        with_tx!(self, |db_tx| {
            let records = expenses::Entity::find()
                .order_by_asc(expenses::Column::CreatedAt)
                .order_by_asc(expenses::Column::Id)
                .all(&db_tx)
                .await?
                .into_iter()
                .map(ExpenseRecord::from)
                .collect();
            let salaries: Vec<Salary> = salaries::Entity::find()
                .order_by_asc(salaries::Column::Id)
                .all(&db_tx)
                .await?
                .into_iter()
                .filter_map(|model| {
                    let id = model.id.clone();
                    Salary::try_from(model)
                        .inspect_err(|err| tracing::warn!(%id, "skipping salary row: {err}"))
                        .ok()
                })
                .collect();
            Ok(Snapshot::from_listing(records, &salaries))
        })
    }
}

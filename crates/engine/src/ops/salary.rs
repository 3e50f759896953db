use sea_orm::{ActiveValue, QueryOrder, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{EngineError, Money, ResultEngine, Salary, salaries, util::parse_uuid};

use super::{Engine, with_tx};

impl Engine {
    /// Stored salary values: empty, or exactly one.
    pub async fn list_salary(&self) -> ResultEngine<Vec<Salary>> {
        salaries::Entity::find()
            .order_by_asc(salaries::Column::Id)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Salary::try_from)
            .collect()
    }

    /// Replaces the current salary, keeping its id when one exists.
    pub async fn set_salary(&self, amount: Money) -> ResultEngine<Salary> {
        if amount.is_negative() {
            return Err(EngineError::InvalidAmount(
                "salary must not be negative".to_string(),
            ));
        }

        with_tx!(self, |db_tx| {
            let rows = salaries::Entity::find()
                .order_by_asc(salaries::Column::Id)
                .all(&db_tx)
                .await?;
            // The first row with a well-formed id keeps its id, every other
            // row goes.
            let current = rows.iter().find_map(|model| {
                parse_uuid(&model.id, "salary")
                    .ok()
                    .map(|id| (id, model.id.clone()))
            });

            let (salary, current_key) = match current {
                Some((id, key)) => {
                    salaries::ActiveModel {
                        id: ActiveValue::Unchanged(key.clone()),
                        amount_minor: ActiveValue::Set(amount.minor()),
                    }
                    .update(&db_tx)
                    .await?;
                    (Salary { id, amount }, key)
                }
                None => {
                    let salary = Salary {
                        id: Uuid::new_v4(),
                        amount,
                    };
                    salaries::ActiveModel::from(&salary).insert(&db_tx).await?;
                    (salary, salary.id.to_string())
                }
            };

            for stale in rows.into_iter().filter(|model| model.id != current_key) {
                tracing::debug!(id = %stale.id, "removing stale salary row");
                salaries::Entity::delete_by_id(stale.id).exec(&db_tx).await?;
            }

            Ok(salary)
        })
    }

    pub async fn delete_salary(&self, id: Uuid) -> ResultEngine<()> {
        let result = salaries::Entity::delete_by_id(id.to_string())
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngineError::KeyNotFound(format!("salary {id}")));
        }
        Ok(())
    }
}

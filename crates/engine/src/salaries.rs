//! The salary value, kept in a table that holds at most one row.

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, Money, util::parse_uuid};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salary {
    pub id: Uuid,
    pub amount: Money,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "salaries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub amount_minor: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Salary> for ActiveModel {
    fn from(salary: &Salary) -> Self {
        Self {
            id: ActiveValue::Set(salary.id.to_string()),
            amount_minor: ActiveValue::Set(salary.amount.minor()),
        }
    }
}

impl TryFrom<Model> for Salary {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_uuid(&model.id, "salary")?,
            amount: Money::new(model.amount_minor),
        })
    }
}

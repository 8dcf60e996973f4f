//! Validation rules for each writable entity.

use serde_json::Value;

use super::{Fields, Validate, Violation};
use crate::db::{CardUser, NewBoard, NewCard, NewList, NewUser};

impl Validate for NewUser {
    /// Only `name` is enforced; `email` is neither required nor format-checked.
    fn validate(input: &Value) -> Result<Self, Vec<Violation>> {
        let mut fields = Fields::of(input)?;
        let name = fields.required_string("name");
        let email = fields.optional_string("email");

        match (name, email) {
            (Some(name), Some(email)) => Ok(Self { name, email }),
            _ => Err(fields.into_violations()),
        }
    }
}

impl Validate for NewBoard {
    fn validate(input: &Value) -> Result<Self, Vec<Violation>> {
        let mut fields = Fields::of(input)?;
        let name = fields.required_string("name");
        let admin_user_id = fields.uuid("adminUserId");

        match (name, admin_user_id) {
            (Some(name), Some(admin_user_id)) => Ok(Self {
                name,
                admin_user_id,
            }),
            _ => Err(fields.into_violations()),
        }
    }
}

impl Validate for NewList {
    fn validate(input: &Value) -> Result<Self, Vec<Violation>> {
        let mut fields = Fields::of(input)?;
        let name = fields.required_string("name");
        let board_id = fields.uuid("boardId");

        match (name, board_id) {
            (Some(name), Some(board_id)) => Ok(Self { name, board_id }),
            _ => Err(fields.into_violations()),
        }
    }
}

impl Validate for NewCard {
    /// `due_date` must parse as a date but is not compared to the current time.
    fn validate(input: &Value) -> Result<Self, Vec<Violation>> {
        let mut fields = Fields::of(input)?;
        let title = fields.required_string("title");
        let description = fields.optional_string("description");
        let due_date = fields.optional_date("due_date");
        let list_id = fields.uuid("listId");
        let user_id = fields.uuid("userId");

        match (title, description, due_date, list_id, user_id) {
            (Some(title), Some(description), Some(due_date), Some(list_id), Some(user_id)) => {
                Ok(Self {
                    title,
                    description,
                    due_date,
                    list_id,
                    user_id,
                })
            }
            _ => Err(fields.into_violations()),
        }
    }
}

impl Validate for CardUser {
    fn validate(input: &Value) -> Result<Self, Vec<Violation>> {
        let mut fields = Fields::of(input)?;
        let card_id = fields.uuid("cardId");
        let user_id = fields.uuid("userId");
        let is_owner = fields.boolean("isOwner");

        match (card_id, user_id, is_owner) {
            (Some(card_id), Some(user_id), Some(is_owner)) => Ok(Self {
                card_id,
                user_id,
                is_owner,
            }),
            _ => Err(fields.into_violations()),
        }
    }
}

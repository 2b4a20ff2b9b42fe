use serde::{Deserialize, Serialize};

use crate::models::expense::Expense;
use crate::models::saving::Saving;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddExpenseRequest {
    pub group_id: i32,
    pub amount: f64,
    pub note: Option<String>,
    pub title: Option<String>,
}

#[derive(Serialize)]
pub struct AddExpenseResponse {
    pub expense: Expense,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveExpenseRequest {
    pub expense_id: i32,
    pub group_id: i32,
}

#[derive(Serialize)]
pub struct RemoveExpenseResponse {
    pub ok: bool,
    pub deleted: Expense,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSavingRequest {
    pub group_id: i32,
    pub amount: f64,
    pub note: Option<String>,
}

#[derive(Serialize)]
pub struct AddSavingResponse {
    pub saving: Saving,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveSavingRequest {
    pub saving_id: i32,
    pub group_id: i32,
}

#[derive(Serialize)]
pub struct RemoveSavingResponse {
    pub ok: bool,
    pub deleted: Saving,
}

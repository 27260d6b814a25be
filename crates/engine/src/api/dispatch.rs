//! Sheet request dispatch.
//!
//! Parses the ids of a [`SheetRequest`], runs the matching use case and
//! wraps the result in a [`ResponseResult`].

use std::str::FromStr;
use std::sync::Arc;

use gearsheet_domain::{DomainError, FieldPath, ItemId, RecordId};
use gearsheet_shared::{ControlBindings, ErrorCode, ResponseResult, SheetRequest};

use crate::app::App;
use crate::use_cases::{Renderable, SheetError};

use super::error_mapping::error_response;

pub struct SheetDispatcher {
    app: Arc<App>,
}

impl SheetDispatcher {
    pub fn new(app: Arc<App>) -> Self {
        Self { app }
    }

    /// Handle one request against the record `record_id`.
    pub async fn handle(&self, record_id: &str, request: SheetRequest) -> ResponseResult {
        let request_type = request.type_name();
        tracing::debug!(record_id, request_type, "Handling sheet request");

        let owner: RecordId = match parse_id(record_id, "record") {
            Ok(id) => id,
            Err(response) => return response,
        };
        match self.run(owner, request, request_type).await {
            Ok(response) | Err(response) => response,
        }
    }

    async fn run(
        &self,
        owner: RecordId,
        request: SheetRequest,
        request_type: &'static str,
    ) -> Result<ResponseResult, ResponseResult> {
        let fail = move |err: SheetError| error_response(&err, request_type);
        let use_cases = &self.app.use_cases;

        let response = match request {
            SheetRequest::CreateItem {
                item_type,
                name,
                fields,
            } => {
                let item = use_cases
                    .items
                    .create
                    .execute(owner, item_type, name, fields)
                    .await
                    .map_err(fail)?;
                ResponseResult::success(item)
            }
            SheetRequest::EditField {
                item_id,
                field,
                value,
            } => {
                let item_id = parse_id(&item_id, "item")?;
                let path = parse_field(&field).map_err(fail)?;
                let stored = use_cases
                    .items
                    .edit
                    .execute(owner, item_id, path, value)
                    .await
                    .map_err(fail)?;
                ResponseResult::success(stored)
            }
            SheetRequest::ToggleField { item_id, field } => {
                let item_id = parse_id(&item_id, "item")?;
                let path = parse_field(&field).map_err(fail)?;
                let toggled = use_cases
                    .items
                    .toggle
                    .execute(owner, item_id, path)
                    .await
                    .map_err(fail)?;
                ResponseResult::success(toggled)
            }
            SheetRequest::DeleteItem { item_id } => {
                let item_id = parse_id(&item_id, "item")?;
                use_cases
                    .items
                    .delete
                    .execute(owner, item_id)
                    .await
                    .map_err(fail)?;
                ResponseResult::success_empty()
            }
            SheetRequest::DeleteItems { item_ids } => {
                let item_ids = parse_ids(&item_ids)?;
                let deleted = use_cases
                    .items
                    .delete
                    .execute_many(owner, item_ids)
                    .await
                    .map_err(fail)?;
                ResponseResult::success(deleted)
            }
            SheetRequest::SetDefaultTab { tab_id } => {
                let tab_id = parse_id(&tab_id, "tab")?;
                use_cases
                    .tabs
                    .set_default
                    .execute(owner, tab_id)
                    .await
                    .map_err(fail)?;
                ResponseResult::success_empty()
            }
            SheetRequest::DeleteTab { tab_id } => {
                let tab_id = parse_id(&tab_id, "tab")?;
                let deleted = use_cases
                    .tabs
                    .delete
                    .execute(owner, tab_id)
                    .await
                    .map_err(fail)?;
                ResponseResult::success(deleted)
            }
            SheetRequest::Reindex { item_ids } => {
                let item_ids = parse_ids(&item_ids)?;
                use_cases
                    .reindex
                    .execute(owner, item_ids)
                    .await
                    .map_err(fail)?;
                ResponseResult::success_empty()
            }
            SheetRequest::BeginDrag { item_id } => {
                let item_id = parse_id(&item_id, "item")?;
                let payload = use_cases
                    .transfer
                    .begin_drag
                    .execute(owner, item_id)
                    .await
                    .map_err(fail)?;
                ResponseResult::success(payload)
            }
            SheetRequest::Drop {
                payload,
                target_tab,
            } => {
                let target_tab = target_tab
                    .as_deref()
                    .map(|raw| parse_id::<ItemId>(raw, "tab"))
                    .transpose()?;
                let outcome = use_cases
                    .transfer
                    .drop_item
                    .execute(owner, &payload, target_tab)
                    .await
                    .map_err(fail)?;
                ResponseResult::success(outcome)
            }
            SheetRequest::Roll { formula, label } => {
                match use_cases.roll.execute(owner, formula, label).await.map_err(fail)? {
                    Some(outcome) => ResponseResult::success(outcome),
                    None => ResponseResult::success_empty(),
                }
            }
            SheetRequest::ViewModel => {
                let view = use_cases.view.view_model(owner).await.map_err(fail)?;
                ResponseResult::success(view)
            }
            SheetRequest::Mount => {
                let mut bindings = ControlBindings::new();
                use_cases.view.on_mount(&mut bindings);
                ResponseResult::success(bindings)
            }
            SheetRequest::Unknown => {
                return Err(ResponseResult::error(
                    ErrorCode::BadRequest,
                    "Unknown request type",
                ))
            }
        };
        Ok(response)
    }
}

/// Parse a string ID into a typed domain ID, returning an error response on failure.
fn parse_id<T>(raw: &str, what: &str) -> Result<T, ResponseResult>
where
    T: FromStr<Err = DomainError>,
{
    raw.parse()
        .map_err(|_| ResponseResult::error(ErrorCode::BadRequest, format!("Invalid {} ID format", what)))
}

fn parse_ids(raw: &[String]) -> Result<Vec<ItemId>, ResponseResult> {
    raw.iter().map(|id| parse_id(id, "item")).collect()
}

fn parse_field(raw: &str) -> Result<FieldPath, SheetError> {
    Ok(FieldPath::parse(raw)?)
}

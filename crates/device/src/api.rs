//! Request/response adapter for transports.
//!
//! Requests are JSON objects tagged by `op`:
//!
//! ```json
//! {"op":"createDevice","key":"<uuid>","algorithm":"ECC","label":"till-1"}
//! {"op":"createTransaction","deviceKey":"<uuid>","data":"hello"}
//! {"op":"findDevice","key":"<uuid>"}
//! {"op":"findTransaction","deviceKey":"<uuid>","counter":0}
//! {"op":"listDevices"}
//! ```
//!
//! Responses are `{"status":"ok","body":...}` or
//! `{"status":"error","fault":"notFound","message":"..."}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sigchain_crypto::Algorithm;
use tracing::debug;
use uuid::Uuid;

use crate::device::Device;
use crate::error::{Fault, RegistryError, ValidationError};
use crate::store::DeviceStore;
use crate::types::{CreateDeviceInput, CreateTransactionInput, Label, TransactionData};

/// Whether rendered devices include their private key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SecretExposure {
    #[default]
    Redact,
    Include,
}

impl From<bool> for SecretExposure {
    fn from(expose: bool) -> Self {
        if expose {
            SecretExposure::Include
        } else {
            SecretExposure::Redact
        }
    }
}

/// A validated request, ready to run against a [`DeviceStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    ListDevices,
    FindDevice { key: Uuid },
    FindTransaction { device_key: Uuid, counter: u64 },
    CreateDevice(CreateDeviceInput),
    CreateTransaction(CreateTransactionInput),
}

/// Request as it arrives on the wire, before field validation.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
enum WireRequest {
    ListDevices,
    FindDevice {
        key: Uuid,
    },
    FindTransaction {
        #[serde(rename = "deviceKey", alias = "deviceId")]
        device_key: Uuid,
        counter: u64,
    },
    CreateDevice {
        key: Uuid,
        algorithm: String,
        #[serde(default)]
        label: String,
    },
    CreateTransaction {
        #[serde(rename = "deviceKey", alias = "deviceId")]
        device_key: Uuid,
        data: String,
    },
}

impl WireRequest {
    fn validate(self) -> Result<Request, ValidationError> {
        let request = match self {
            WireRequest::ListDevices => Request::ListDevices,
            WireRequest::FindDevice { key } => Request::FindDevice { key },
            WireRequest::FindTransaction {
                device_key,
                counter,
            } => Request::FindTransaction {
                device_key,
                counter,
            },
            WireRequest::CreateDevice {
                key,
                algorithm,
                label,
            } => Request::CreateDevice(CreateDeviceInput {
                key,
                algorithm: algorithm.parse::<Algorithm>()?,
                label: Label::new(label)?,
            }),
            WireRequest::CreateTransaction { device_key, data } => {
                Request::CreateTransaction(CreateTransactionInput {
                    device_key,
                    data: TransactionData::new(data)?,
                })
            }
        };
        Ok(request)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Response {
    Ok { body: Value },
    Error { fault: Fault, message: String },
}

impl Response {
    pub fn fault(&self) -> Option<Fault> {
        match self {
            Response::Ok { .. } => None,
            Response::Error { fault, .. } => Some(*fault),
        }
    }
}

impl From<RegistryError> for Response {
    fn from(err: RegistryError) -> Self {
        Response::Error {
            fault: err.fault(),
            message: err.to_string(),
        }
    }
}

impl From<ValidationError> for Response {
    fn from(err: ValidationError) -> Self {
        Response::Error {
            fault: err.fault(),
            message: err.to_string(),
        }
    }
}

/// Parses a request, rejecting invalid input as a client fault.
///
/// Structural problems (bad JSON, unknown `op`, missing fields) are
/// [`ValidationError::MalformedRequest`]; out-of-range field values keep
/// their own variant.
pub fn parse_request(raw: &str) -> Result<Request, ValidationError> {
    let wire: WireRequest = serde_json::from_str(raw)
        .map_err(|e| ValidationError::MalformedRequest(e.to_string()))?;
    wire.validate()
}

/// Parses and handles one JSON request.
pub fn handle_json(store: &dyn DeviceStore, raw: &str, exposure: SecretExposure) -> Response {
    match parse_request(raw) {
        Ok(request) => handle(store, request, exposure),
        Err(err) => {
            debug!(error = %err, "Rejected request");
            err.into()
        }
    }
}

pub fn handle(store: &dyn DeviceStore, request: Request, exposure: SecretExposure) -> Response {
    let result = match request {
        Request::ListDevices => store.list_devices().map(|devices| {
            let rendered = devices
                .iter()
                .map(|device| render_device(device, exposure))
                .collect::<Result<Vec<_>, _>>();
            rendered.map(Value::Array)
        }),
        Request::FindDevice { key } => store
            .find_device(key)
            .map(|device| render_device(&device, exposure)),
        Request::FindTransaction {
            device_key,
            counter,
        } => store
            .find_transaction(device_key, counter)
            .map(serde_json::to_value),
        Request::CreateDevice(input) => store
            .create_device(input)
            .map(|device| render_device(&device, exposure)),
        Request::CreateTransaction(input) => store
            .create_transaction(input)
            .map(serde_json::to_value),
    };

    match result {
        Ok(Ok(body)) => Response::Ok { body },
        Ok(Err(err)) => Response::Error {
            fault: Fault::Internal,
            message: format!("failed to render response: {}", err),
        },
        Err(err) => err.into(),
    }
}

fn render_device(device: &Device, exposure: SecretExposure) -> serde_json::Result<Value> {
    match exposure {
        SecretExposure::Redact => serde_json::to_value(device),
        SecretExposure::Include => serde_json::to_value(device.with_secrets()),
    }
}

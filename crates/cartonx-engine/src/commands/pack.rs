//! Batch packing over the JSON transport types
//!
//! Each call is tagged with a fresh `RequestId`, which is logged at the
//! boundary and attached to any error returned.

#![allow(clippy::result_large_err)]

use std::time::Instant;

use cartonx_core::transport::{PackRequestDto, PackResponseDto};
use cartonx_core::{
    log_op_end, log_op_error, log_op_start, pack_batch, BatchRequest, CatalogProvider, ExError,
    ExErrorKind,
};
use cartonx_core_types::RequestId;
use cartonx_store::errors::Result;

const OP_PACK_REQUEST: &str = "pack_request";

/// Pack a transport request against the given catalog
///
/// ## Errors
///
/// Any `PackError` from the batch packer, converted to `ExError` and
/// tagged with the operation and request id.
pub fn pack_request(
    request: &PackRequestDto,
    provider: &dyn CatalogProvider,
) -> Result<PackResponseDto> {
    let request_id = RequestId::new();
    run_tagged(&request_id, || {
        let batch = BatchRequest::from(request.clone());
        let result = pack_batch(&batch, provider)?;
        Ok(PackResponseDto::from(&result))
    })
}

/// JSON in, JSON out
///
/// ## Errors
///
/// `Serialization` when the input is not a valid request document,
/// otherwise the errors of [`pack_request`].
pub fn pack_json(input: &str, provider: &dyn CatalogProvider) -> Result<String> {
    let request_id = RequestId::new();
    run_tagged(&request_id, || {
        let request: PackRequestDto = serde_json::from_str(input).map_err(|e| {
            ExError::new(ExErrorKind::Serialization)
                .with_message(format!("Invalid pack request: {}", e))
        })?;

        let batch = BatchRequest::from(request);
        let result = pack_batch(&batch, provider)?;

        serde_json::to_string(&PackResponseDto::from(&result)).map_err(|e| {
            ExError::new(ExErrorKind::Serialization).with_message(e.to_string())
        })
    })
}

fn run_tagged<T, F>(request_id: &RequestId, f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    log_op_start!(OP_PACK_REQUEST, request_id = request_id.as_str());
    let start = Instant::now();

    match f() {
        Ok(value) => {
            log_op_end!(
                OP_PACK_REQUEST,
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = request_id.as_str()
            );
            Ok(value)
        }
        Err(e) => {
            let e = e
                .with_op(OP_PACK_REQUEST)
                .with_request_id(request_id.clone());
            log_op_error!(
                OP_PACK_REQUEST,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = request_id.as_str()
            );
            Err(e)
        }
    }
}

//! CLI command implementations

pub mod boxes;
pub mod items;
pub mod pack;
pub mod suggest;

use cartonx_core::transport::ErrorResponseDto;
use cartonx_core::ExError;

/// Print the error body as JSON on stdout
pub(crate) fn print_error_json(err: &ExError) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{}",
        serde_json::to_string(&ErrorResponseDto::from(err))?
    );
    Ok(())
}

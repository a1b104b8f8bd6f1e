use cartonx_core_types::RequestId;
use thiserror::Error;

/// Result type alias using PackError
pub type Result<T> = std::result::Result<T, PackError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every error that crosses a crate boundary is classified into one of these
/// kinds. Each kind maps to a stable code used by the transport layer and by
/// tests, so renaming a variant never changes what callers see on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Request validation
    EmptyRequest,
    InvalidOrderId,
    InvalidItem,
    InvalidInput,

    // Catalog
    EmptyCatalog,
    InvalidBoxType,
    CatalogUnavailable,
    NotFound,
    ConstraintViolation,

    // Allocation
    NoFittingBox,
    NoSuitableBox,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::EmptyRequest => "ERR_EMPTY_REQUEST",
            ExErrorKind::InvalidOrderId => "ERR_INVALID_ORDER_ID",
            ExErrorKind::InvalidItem => "ERR_INVALID_ITEM",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::EmptyCatalog => "ERR_EMPTY_CATALOG",
            ExErrorKind::InvalidBoxType => "ERR_INVALID_BOX_TYPE",
            ExErrorKind::CatalogUnavailable => "ERR_CATALOG_UNAVAILABLE",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::NoFittingBox => "ERR_NO_FITTING_BOX",
            ExErrorKind::NoSuitableBox => "ERR_NO_SUITABLE_BOX",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }

    /// Short kind name used in transport payloads
    pub fn name(&self) -> &'static str {
        match self {
            ExErrorKind::EmptyRequest => "EmptyRequest",
            ExErrorKind::InvalidOrderId => "InvalidOrderId",
            ExErrorKind::InvalidItem => "InvalidItem",
            ExErrorKind::InvalidInput => "InvalidInput",
            ExErrorKind::EmptyCatalog => "EmptyCatalog",
            ExErrorKind::InvalidBoxType => "InvalidBoxType",
            ExErrorKind::CatalogUnavailable => "CatalogUnavailable",
            ExErrorKind::NotFound => "NotFound",
            ExErrorKind::ConstraintViolation => "ConstraintViolation",
            ExErrorKind::NoFittingBox => "NoFittingBox",
            ExErrorKind::NoSuitableBox => "NoSuitableBox",
            ExErrorKind::Io => "Io",
            ExErrorKind::Serialization => "Serialization",
            ExErrorKind::Persistence => "Persistence",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) for programmatic handling plus the
/// identifiers of whatever the failure was about, so the transport can report
/// the offending order or item without parsing messages.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    order_id: Option<i64>,
    item_id: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            order_id: None,
            item_id: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add order ID context
    pub fn with_order_id(mut self, order_id: i64) -> Self {
        self.order_id = Some(order_id);
        self
    }

    /// Add external item ID context
    pub fn with_item_id(mut self, item_id: impl Into<String>) -> Self {
        self.item_id = Some(item_id.into());
        self
    }

    /// Add entity ID context (box type ids, row ids)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn order_id(&self) -> Option<i64> {
        self.order_id
    }

    pub fn item_id(&self) -> Option<&str> {
        self.item_id.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.kind.name())?;

        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }

        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }

        if let Some(order_id) = self.order_id {
            write!(f, " (order_id: {})", order_id)?;
        }

        if let Some(item_id) = &self.item_id {
            write!(f, " (item_id: {})", item_id)?;
        }

        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }

        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised while packing a batch
///
/// Every variant is terminal for the batch being packed: nothing here is
/// transient, so callers never retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PackError {
    /// The batch request contained no orders
    #[error("Request must contain at least one order")]
    EmptyRequest,

    /// The catalog provider returned no box types
    #[error("No box types available in the catalog")]
    EmptyCatalog,

    /// An order id was zero or negative
    #[error("Invalid order id {order_id}: must be a positive number")]
    InvalidOrderId { order_id: i64 },

    /// An item in an order has a non-positive edge length
    #[error("Invalid item '{item_id}' in order {order_id}: height, width and length must be greater than zero")]
    InvalidItem { order_id: i64, item_id: String },

    /// No catalog box can hold the item, even empty
    #[error("Item '{item_id}' (id {id}) of order {order_id} does not fit in any available box")]
    NoFittingBox {
        order_id: i64,
        item_id: String,
        id: u64,
    },

    /// A catalog entry has a non-positive edge length
    #[error("Invalid box type {box_id}: height, width and length must be greater than zero")]
    InvalidBoxType { box_id: i64 },

    /// A standalone item has a non-positive edge length
    #[error("Invalid dimensions for item '{item_id}': height, width and length must be greater than zero")]
    InvalidDimensions { item_id: String },

    /// No catalog box can hold a standalone item
    #[error("No suitable box found for item '{item_id}'")]
    NoSuitableBox { item_id: String },

    /// The catalog provider failed to produce a snapshot
    #[error("Catalog unavailable: {message}")]
    CatalogUnavailable { message: String },
}

impl From<PackError> for ExError {
    fn from(err: PackError) -> Self {
        let message = err.to_string();
        match err {
            PackError::EmptyRequest => ExError::new(ExErrorKind::EmptyRequest),
            PackError::EmptyCatalog => ExError::new(ExErrorKind::EmptyCatalog),
            PackError::InvalidOrderId { order_id } => {
                ExError::new(ExErrorKind::InvalidOrderId).with_order_id(order_id)
            }
            PackError::InvalidItem { order_id, item_id } => ExError::new(ExErrorKind::InvalidItem)
                .with_order_id(order_id)
                .with_item_id(item_id),
            PackError::NoFittingBox {
                order_id,
                item_id,
                id,
            } => ExError::new(ExErrorKind::NoFittingBox)
                .with_order_id(order_id)
                .with_item_id(item_id)
                .with_entity_id(id.to_string()),
            PackError::InvalidBoxType { box_id } => {
                ExError::new(ExErrorKind::InvalidBoxType).with_entity_id(box_id.to_string())
            }
            PackError::InvalidDimensions { item_id } => {
                ExError::new(ExErrorKind::InvalidInput).with_item_id(item_id)
            }
            PackError::NoSuitableBox { item_id } => {
                ExError::new(ExErrorKind::NoSuitableBox).with_item_id(item_id)
            }
            PackError::CatalogUnavailable { .. } => ExError::new(ExErrorKind::CatalogUnavailable),
        }
        .with_message(message)
    }
}

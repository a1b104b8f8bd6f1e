pub mod box_type;
pub mod dimensions;
pub mod item;
pub mod order;
pub mod result;

pub use box_type::BoxType;
pub use dimensions::Dimensions;
pub use item::Item;
pub use order::{BatchRequest, Order};
pub use result::{BatchResult, PackedBox, PackedOrderResult};

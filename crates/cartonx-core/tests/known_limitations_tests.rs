/// Behaviour that is kept on purpose even though it is not physically exact
mod common;

use cartonx_core::pack_batch;
use common::{item, single_order, stock_catalog};

#[test]
fn test_volumetric_fit_can_overfill_a_box_physically() {
    // GIVEN three 25x35x35 items and Box 1 at 30x40x80
    //   Only the 25 edge fits the 30 axis, so at most one item spans the 40
    //   axis and two the 80 axis: two items physically, 91875 of 96000 by volume.
    let request = single_order(
        1,
        vec![
            item("a", 25, 35, 35),
            item("b", 25, 35, 35),
            item("c", 25, 35, 35),
        ],
    );

    // WHEN packing
    let result = pack_batch(&request, &stock_catalog()).unwrap();

    // THEN all three are reported in a single Box 1
    let boxes = &result.orders[0].boxes;
    assert_eq!(boxes.len(), 1);
    assert_eq!(boxes[0].box_type.name, "Box 1");
    assert_eq!(boxes[0].allocated_items.len(), 3);
}

#[test]
fn test_one_bad_order_aborts_whole_batch() {
    let request = cartonx_core::BatchRequest::new(vec![
        cartonx_core::Order::new(1, vec![item("ok", 10, 10, 10)]),
        cartonx_core::Order::new(2, vec![item("huge", 100, 100, 100)]),
        cartonx_core::Order::new(3, vec![item("ok", 10, 10, 10)]),
    ]);

    assert!(pack_batch(&request, &stock_catalog()).is_err());
}

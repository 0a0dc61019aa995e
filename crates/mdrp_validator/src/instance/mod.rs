pub mod courier;
pub mod location;
pub mod order;
pub mod parameters;
pub mod restaurant;

use fxhash::FxHashMap;

pub use courier::Courier;
pub use location::LocationTable;
pub use order::Order;
pub use parameters::InstanceParameters;
pub use restaurant::Restaurant;

/// Read-only snapshot of the problem instance for one validation run.
#[derive(Debug)]
pub struct Instance {
    pub orders: Vec<Order>,
    pub restaurants: Vec<Restaurant>,
    pub couriers: Vec<Courier>,
    pub parameters: InstanceParameters,
    pub locations: LocationTable,
    order_index: FxHashMap<String, usize>,
    courier_index: FxHashMap<String, usize>,
}

impl Instance {
    pub fn new(
        orders: Vec<Order>,
        restaurants: Vec<Restaurant>,
        couriers: Vec<Courier>,
        parameters: InstanceParameters,
    ) -> Self {
        let mut locations = LocationTable::default();
        for order in &orders {
            locations.insert(order.id.clone(), order.x, order.y);
        }
        for restaurant in &restaurants {
            locations.insert(restaurant.id.clone(), restaurant.x, restaurant.y);
        }
        for courier in &couriers {
            locations.insert(courier.id.clone(), courier.x, courier.y);
        }

        let order_index = orders
            .iter()
            .enumerate()
            .map(|(i, o)| (o.id.clone(), i))
            .collect();
        let courier_index = couriers
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();

        Instance {
            orders,
            restaurants,
            couriers,
            parameters,
            locations,
            order_index,
            courier_index,
        }
    }

    pub fn order(&self, id: &str) -> Option<&Order> {
        self.order_index.get(id).map(|&i| &self.orders[i])
    }

    pub fn courier(&self, id: &str) -> Option<&Courier> {
        self.courier_index.get(id).map(|&i| &self.couriers[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_table_spans_all_entities() {
        let instance = Instance::new(
            vec![Order {
                id: "o1".into(),
                x: 0.0,
                y: 800.0,
                restaurant: "r1".into(),
                placement_time: 0,
                ready_time: 8,
            }],
            vec![Restaurant {
                id: "r1".into(),
                x: 0.0,
                y: 400.0,
            }],
            vec![Courier {
                id: "c1".into(),
                x: 0.0,
                y: 0.0,
                on_time: 0,
                off_time: 100,
            }],
            InstanceParameters::default(),
        );

        assert!(instance.locations.contains("o1"));
        assert!(instance.locations.contains("r1"));
        assert!(instance.locations.contains("c1"));
        assert_eq!(instance.order("o1").unwrap().ready_time, 8);
        assert_eq!(instance.courier("c1").unwrap().off_time, 100);
        assert!(instance.order("o2").is_none());
    }
}

use std::path::Path;

use anyhow::{Context, anyhow};
use tracing::warn;

use crate::{
    instance::{Courier, Instance, InstanceParameters, Order, Restaurant},
    parsers::table::{Header, int_via_float},
};

/// Loads orders.txt, restaurants.txt, couriers.txt and
/// instance_parameters.txt from the instance directory. A missing file
/// is the one fatal condition of a run.
pub fn read_instance(dir: &Path) -> anyhow::Result<Instance> {
    let orders = parse_orders(&read(dir, "orders.txt")?)?;
    let restaurants = parse_restaurants(&read(dir, "restaurants.txt")?)?;
    let couriers = parse_couriers(&read(dir, "couriers.txt")?)?;
    let parameters = parse_parameters(&read(dir, "instance_parameters.txt")?)?;

    Ok(Instance::new(orders, restaurants, couriers, parameters))
}

fn read(dir: &Path, name: &str) -> anyhow::Result<String> {
    let path = dir.join(name);
    std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
}

pub fn parse_orders(text: &str) -> anyhow::Result<Vec<Order>> {
    let mut lines = text.lines();
    let header = Header::from_whitespace(lines.next().ok_or_else(|| anyhow!("empty orders.txt"))?);
    let id = header.column("order", "orders.txt")?;
    let x = header.column("x", "orders.txt")?;
    let y = header.column("y", "orders.txt")?;
    let restaurant = header.column("restaurant", "orders.txt")?;
    let placement = header.column("placement_time", "orders.txt")?;
    let ready = header.column("ready_time", "orders.txt")?;

    let width = [id, x, y, restaurant, placement, ready]
        .into_iter()
        .max()
        .unwrap_or(0);
    let mut orders = Vec::new();
    for line in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() <= width {
            warn!("skipping short line in orders.txt: {line:?}");
            continue;
        }
        orders.push(Order {
            id: fields[id].to_string(),
            x: fields[x].parse()?,
            y: fields[y].parse()?,
            restaurant: fields[restaurant].to_string(),
            placement_time: int_via_float(fields[placement])?,
            ready_time: int_via_float(fields[ready])?,
        });
    }
    Ok(orders)
}

pub fn parse_restaurants(text: &str) -> anyhow::Result<Vec<Restaurant>> {
    let mut lines = text.lines();
    let header =
        Header::from_whitespace(lines.next().ok_or_else(|| anyhow!("empty restaurants.txt"))?);
    let id = header.column("restaurant", "restaurants.txt")?;
    let x = header.column("x", "restaurants.txt")?;
    let y = header.column("y", "restaurants.txt")?;

    let width = [id, x, y].into_iter().max().unwrap_or(0);
    let mut restaurants = Vec::new();
    for line in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() <= width {
            warn!("skipping short line in restaurants.txt: {line:?}");
            continue;
        }
        restaurants.push(Restaurant {
            id: fields[id].to_string(),
            x: fields[x].parse()?,
            y: fields[y].parse()?,
        });
    }
    Ok(restaurants)
}

pub fn parse_couriers(text: &str) -> anyhow::Result<Vec<Courier>> {
    let mut lines = text.lines();
    let header =
        Header::from_whitespace(lines.next().ok_or_else(|| anyhow!("empty couriers.txt"))?);
    let id = header.column("courier", "couriers.txt")?;
    let x = header.column("x", "couriers.txt")?;
    let y = header.column("y", "couriers.txt")?;
    let on = header.column("on_time", "couriers.txt")?;
    let off = header.column("off_time", "couriers.txt")?;

    let width = [id, x, y, on, off].into_iter().max().unwrap_or(0);
    let mut couriers = Vec::new();
    for line in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() <= width {
            warn!("skipping short line in couriers.txt: {line:?}");
            continue;
        }
        couriers.push(Courier {
            id: fields[id].to_string(),
            x: fields[x].parse()?,
            y: fields[y].parse()?,
            on_time: int_via_float(fields[on])?,
            off_time: int_via_float(fields[off])?,
        });
    }
    Ok(couriers)
}

/// Single-row table with tab-separated, multi-word column names.
pub fn parse_parameters(text: &str) -> anyhow::Result<InstanceParameters> {
    let file = "instance_parameters.txt";
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let header = Header::from_tabs(lines.next().ok_or_else(|| anyhow!("empty {file}"))?);
    let row = lines.next().ok_or_else(|| anyhow!("{file} has no value row"))?;
    let fields: Vec<&str> = row.split_whitespace().collect();

    if lines.next().is_some() {
        warn!("{file} has more than one value row; using the first");
    }

    let field = |name: &str| -> anyhow::Result<&str> {
        let index = header.column(name, file)?;
        fields
            .get(index)
            .copied()
            .ok_or_else(|| anyhow!("{file} row is missing a value for `{name}`"))
    };

    Ok(InstanceParameters {
        meters_per_minute: field("meters_per_minute")?.parse()?,
        pickup_service_minutes: int_via_float(field("pickup service minutes")?)?,
        dropoff_service_minutes: int_via_float(field("dropoff service minutes")?)?,
        target_click_to_door: int_via_float(field("target click-to-door")?)?,
        pay_per_order: field("pay per order")?.parse()?,
        guaranteed_pay_per_hour: field("guaranteed pay per hour")?.parse()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDERS: &str = "\
order x y restaurant placement_time ready_time
o1 0 800 r1 0 8
o2 300 800 r1 5 12
";

    const COURIERS: &str = "\
courier x y on_time off_time
c1 0 0 0 100
";

    const PARAMETERS: &str = "meters_per_minute\tpickup service minutes\tdropoff service minutes\ttarget click-to-door\tpay per order\tguaranteed pay per hour\n\
100 2 5 15 10 15\n";

    #[test]
    fn parses_orders_by_column_name() {
        let orders = parse_orders(ORDERS).unwrap();

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, "o1");
        assert_eq!(orders[0].restaurant, "r1");
        assert_eq!(orders[1].placement_time, 5);
        assert_eq!(orders[1].ready_time, 12);
    }

    #[test]
    fn parses_couriers_with_shift_window() {
        let couriers = parse_couriers(COURIERS).unwrap();

        assert_eq!(couriers.len(), 1);
        assert_eq!(couriers[0].on_time, 0);
        assert_eq!(couriers[0].off_time, 100);
    }

    #[test]
    fn parses_the_parameter_row() {
        let parameters = parse_parameters(PARAMETERS).unwrap();

        assert_eq!(parameters.meters_per_minute, 100.0);
        assert_eq!(parameters.pickup_service_minutes, 2);
        assert_eq!(parameters.dropoff_service_minutes, 5);
        assert_eq!(parameters.target_click_to_door, 15);
        assert_eq!(parameters.pay_per_order, 10.0);
        assert_eq!(parameters.guaranteed_pay_per_hour, 15.0);
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let err = parse_orders("order x y placement_time ready_time\n").unwrap_err();

        assert!(err.to_string().contains("restaurant"));
    }
}

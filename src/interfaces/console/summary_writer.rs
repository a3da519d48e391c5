use crate::domain::order::Order;
use std::io::Write;

/// Renders the final order state of a run to any `Write` sink.
pub struct SummaryWriter<W: Write> {
    out: W,
}

impl<W: Write> SummaryWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// One status line per order.
    pub fn write_text(&mut self, orders: &[Order]) -> std::io::Result<()> {
        for order in orders {
            let partner = order
                .partner
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                self.out,
                "{} {} total=₹{} items={} partner={}",
                order.id,
                order.state,
                order.total(),
                order.items().len(),
                partner
            )?;
        }
        Ok(())
    }

    pub fn write_json(&mut self, orders: &[Order]) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, orders)?;
        writeln!(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::{Category, MenuItem};
    use crate::domain::money::Price;
    use crate::domain::order::{OrderId, OrderState};
    use crate::domain::restaurant::RestaurantId;
    use rust_decimal_macros::dec;

    fn placed_order() -> Order {
        let mut order = Order::new(OrderId(1001), "Rahul", RestaurantId(0));
        order
            .add_item(MenuItem::new(
                "V1",
                "Paneer Butter Masala",
                Price::new(dec!(299)).unwrap(),
                Category::Veg,
            ))
            .unwrap();
        order.state = OrderState::Placed;
        order
    }

    #[test]
    fn test_text_summary_line() {
        let mut buf = Vec::new();
        SummaryWriter::new(&mut buf)
            .write_text(&[placed_order()])
            .unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "ORD1001 placed total=₹299 items=1 partner=-\n");
    }

    #[test]
    fn test_json_summary_carries_total_and_state() {
        let mut buf = Vec::new();
        SummaryWriter::new(&mut buf)
            .write_json(&[placed_order()])
            .unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains(r#""total": "299""#));
        assert!(text.contains(r#""state": "placed""#));
    }
}
